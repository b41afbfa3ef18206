//! 多语言 ITN 主引擎
//!
//! 持有各语言转换器并负责分发：
//! 指定语言时直接分发到对应转换器，auto 模式先做语言检测，
//! mixed 模式按固定顺序（中 → 日 → 英）串联全部可用转换器

use crate::config::ItnConfig;
use crate::convert::{ChineseConverter, EnglishConverter, JapaneseConverter, NumeralConverter};
use crate::detect::{Language, LanguageDetector};
use crate::error::ItnResult;

/// 多语言 ITN 引擎
///
/// 转换器在构造时创建一次；创建失败（或被配置禁用）的语言
/// 降级为不转换，不影响其余语言工作
pub struct MultilingualItn {
    chinese: Option<ChineseConverter>,
    japanese: Option<JapaneseConverter>,
    english: Option<EnglishConverter>,
}

impl MultilingualItn {
    /// 按默认配置创建引擎（启用全部语言）
    pub fn new() -> Self {
        Self::with_config(&ItnConfig::default())
    }

    /// 按配置创建引擎
    pub fn with_config(config: &ItnConfig) -> Self {
        let chinese = if config.chinese {
            match ChineseConverter::new() {
                Ok(converter) => {
                    tracing::info!("✅ 中文ITN模块加载成功");
                    Some(converter)
                }
                Err(e) => {
                    tracing::warn!("⚠️ 中文ITN模块不可用: {}", e);
                    None
                }
            }
        } else {
            None
        };

        let japanese = if config.japanese {
            match JapaneseConverter::new() {
                Ok(converter) => {
                    tracing::info!("✅ 日语ITN模块加载成功");
                    Some(converter)
                }
                Err(e) => {
                    tracing::warn!("⚠️ 日语ITN模块不可用: {}", e);
                    None
                }
            }
        } else {
            None
        };

        let english = if config.english {
            match EnglishConverter::new() {
                Ok(converter) => {
                    tracing::info!("✅ 英语ITN模块加载成功");
                    Some(converter)
                }
                Err(e) => {
                    tracing::warn!("⚠️ 英语ITN模块不可用: {}", e);
                    None
                }
            }
        } else {
            None
        };

        Self {
            chinese,
            japanese,
            english,
        }
    }

    /// 处理文本（auto 模式）：先检测语言，再按检测结果分发
    pub fn process(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        let language = LanguageDetector::detect(text);
        self.process_as(text, language)
    }

    /// 按指定语言处理文本
    ///
    /// 对应转换器不可用（或语言为 Unknown）时原样返回
    pub fn process_as(&self, text: &str, language: Language) -> String {
        if text.is_empty() {
            return String::new();
        }

        let converted = match language {
            Language::Chinese => self.convert_with(self.chinese.as_ref(), text),
            Language::Japanese => self.convert_with(self.japanese.as_ref(), text),
            Language::English => self.convert_with(self.english.as_ref(), text),
            Language::Mixed => {
                // 混合语言：按固定顺序串联全部可用转换器
                let mut result = text.to_string();
                for converter in self.available_converters() {
                    result = converter.convert(&result);
                }
                result
            }
            Language::Unknown => text.to_string(),
        };

        if converted != text {
            tracing::info!("🔢 {} ITN处理: {} -> {}", language, text, converted);
        }

        converted
    }

    /// 按服务层语言标签处理文本
    ///
    /// `"auto"` 走检测分发，其余标签按 [`Language`] 解析；
    /// 无法识别的标签返回错误，由调用方决定如何兜底
    pub fn process_tagged(&self, text: &str, language: &str) -> ItnResult<String> {
        if language.eq_ignore_ascii_case("auto") {
            return Ok(self.process(text));
        }
        let language: Language = language.parse()?;
        Ok(self.process_as(text, language))
    }

    /// 是否有任何可用的转换器
    pub fn is_available(&self) -> bool {
        self.chinese.is_some() || self.japanese.is_some() || self.english.is_some()
    }

    /// 指定语言的转换器是否可用
    pub fn is_language_available(&self, language: Language) -> bool {
        match language {
            Language::Chinese => self.chinese.is_some(),
            Language::Japanese => self.japanese.is_some(),
            Language::English => self.english.is_some(),
            Language::Mixed => self.is_available(),
            Language::Unknown => false,
        }
    }

    /// 可用转换器列表，顺序固定：中 → 日 → 英
    fn available_converters(&self) -> Vec<&dyn NumeralConverter> {
        let mut converters: Vec<&dyn NumeralConverter> = Vec::new();
        if let Some(c) = self.chinese.as_ref() {
            converters.push(c);
        }
        if let Some(c) = self.japanese.as_ref() {
            converters.push(c);
        }
        if let Some(c) = self.english.as_ref() {
            converters.push(c);
        }
        converters
    }

    fn convert_with(&self, converter: Option<&impl NumeralConverter>, text: &str) -> String {
        match converter {
            Some(converter) => converter.convert(text),
            None => text.to_string(),
        }
    }
}

impl Default for MultilingualItn {
    fn default() -> Self {
        Self::new()
    }
}
