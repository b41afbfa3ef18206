//! 语言检测模块
//!
//! 基于字符类别比例的简单语言检测，用于 auto 模式下的转换器分发
//!
//! 已知限制：同时包含大量汉字和少量英文的文本会被判定为中文，
//! 除非汉字比例较低。这是刻意的简化，不保证语言学上的准确性。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ItnError;

/// 检测结果语言类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// 中文
    Chinese,
    /// 日语
    Japanese,
    /// 英语
    English,
    /// 混合语言（无主导文字类别）
    Mixed,
    /// 未知（空文本或纯空白）
    Unknown,
}

impl Language {
    /// 服务层使用的语言标签
    pub fn tag(&self) -> &'static str {
        match self {
            Language::Chinese => "chinese",
            Language::Japanese => "japanese",
            Language::English => "english",
            Language::Mixed => "mixed",
            Language::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = ItnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chinese" => Ok(Language::Chinese),
            "japanese" => Ok(Language::Japanese),
            "english" => Ok(Language::English),
            "mixed" => Ok(Language::Mixed),
            "unknown" => Ok(Language::Unknown),
            _ => Err(ItnError::UnknownLanguage(s.to_string())),
        }
    }
}

/// LanguageDetector - 语言检测器
///
/// 统计三类字符的占比：
/// - CJK 统一表意文字 (U+4E00 ~ U+9FFF)
/// - 平假名/片假名 (U+3040 ~ U+309F, U+30A0 ~ U+30FF)
/// - ASCII 字母单词
pub struct LanguageDetector;

impl LanguageDetector {
    /// 检测文本的主要语言
    ///
    /// 判定顺序（先到先得）：
    /// 1. 无有效字符 → Unknown
    /// 2. 汉字比例 > 0.3（严格大于）→ Chinese
    /// 3. 假名比例 > 0.2（严格大于）→ Japanese
    /// 4. 存在英文单词 → English
    /// 5. 其他 → Mixed
    pub fn detect(text: &str) -> Language {
        let mut ideographs = 0usize;
        let mut kana = 0usize;
        let mut total = 0usize;

        for ch in text.chars() {
            if ch.is_whitespace() {
                continue;
            }
            total += 1;
            match ch {
                '\u{4E00}'..='\u{9FFF}' => ideographs += 1,
                '\u{3040}'..='\u{309F}' | '\u{30A0}'..='\u{30FF}' => kana += 1,
                _ => {}
            }
        }

        if total == 0 {
            return Language::Unknown;
        }

        let english_words = text
            .split(|c: char| !c.is_ascii_alphabetic())
            .filter(|w| !w.is_empty())
            .count();

        if ideographs as f64 / total as f64 > 0.3 {
            Language::Chinese
        } else if kana as f64 / total as f64 > 0.2 {
            Language::Japanese
        } else if english_words > 0 {
            Language::English
        } else {
            Language::Mixed
        }
    }
}
