//! 中文数字转换模块
//!
//! 将中文口语数字表达转换为阿拉伯数字
//!
//! 支持的字符集：零一二三四五六七八九十百千万亿点负

use regex::{Captures, Regex};

use crate::convert::{evaluate_cjk, scan_digits, scan_values, NumeralConverter};
use crate::detect::Language;
use crate::error::ItnResult;

/// 中文数字映射（逐位转换用）
const DIGIT_TABLE: &[(&str, &str)] = &[
    ("零", "0"),
    ("一", "1"),
    ("二", "2"),
    ("三", "3"),
    ("四", "4"),
    ("五", "5"),
    ("六", "6"),
    ("七", "7"),
    ("八", "8"),
    ("九", "9"),
    ("点", "."),
];

/// 中文数值映射（计算用）
const VALUE_TABLE: &[(&str, i64)] = &[
    ("零", 0),
    ("一", 1),
    ("二", 2),
    ("三", 3),
    ("四", 4),
    ("五", 5),
    ("六", 6),
    ("七", 7),
    ("八", 8),
    ("九", 9),
    ("十", 10),
    ("百", 100),
    ("千", 1000),
    ("万", 10_000),
    ("亿", 100_000_000),
];

/// 避免误转的中文固定表达（成语等）
///
/// 命中任意一条即放弃整句转换（全局否决）
const IDIOMS: &[&str] = &[
    "一石二鸟",
    "一五一十",
    "三心二意",
    "四面八方",
    "五湖四海",
    "五花八门",
    "六神无主",
    "七上八下",
    "八仙过海",
    "九牛一毛",
    "十全十美",
    "乱七八糟",
];

/// 非数量后缀
///
/// 基础数字后紧跟这些字符时是词汇而非数量表达（一起、一下子、一会儿）
const NON_NUMERIC_SUFFIXES: &[char] = &[
    '起', '些', '般', '下', '样', '直', '定', '边', '共', '旦', '致', '刻', '切', '向', '律',
    '再', '度', '时', '概', '并', '贯', '如', '经', '味', '身', '番', '帆', '路', '开', '会',
    '瞬', '辈', '方', '后',
];

/// 数量单位与量词
///
/// 基础数字后紧跟这些字符时是真正的数量表达，应该转换
const NUMERIC_UNITS: &[char] = &[
    '个', '只', '条', '张', '本', '支', '件', '台', '辆', '架', '人', '位', '名', '口', '块',
    '元', '角', '分', '斤', '两', '克', '吨', '米', '厘', '里', '尺', '年', '月', '日', '时',
    '秒',
];

/// 数字字符类（与映射表保持一致，外加小数点与负号）
const NUMERAL_CLASS: &str = "零一二三四五六七八九十百千万亿点负";

/// 中文数字转换器
pub struct ChineseConverter {
    percent_re: Regex,
    time_re: Regex,
    number_run_re: Regex,
    pure_digit_re: Regex,
}

impl ChineseConverter {
    /// 创建转换器，编译全部规则
    ///
    /// 规则只在构造时编译一次，转换调用不再编译
    pub fn new() -> ItnResult<Self> {
        let percent_re = Regex::new(r"百分之([零一二三四五六七八九十百千万亿点]+)")?;
        let time_re = Regex::new(r"([零一二三四五六七八九十]+)时([零一二三四五六七八九十]+)分?")?;
        let number_run_re = Regex::new(&format!(r"[{c}]+", c = NUMERAL_CLASS))?;
        let pure_digit_re = Regex::new(r"^[零一二三四五六七八九]+$")?;

        Ok(Self {
            percent_re,
            time_re,
            number_run_re,
            pure_digit_re,
        })
    }

    /// 百分比规则：`百分之五十` → `50%`
    fn apply_percent(&self, text: &str) -> String {
        self.percent_re
            .replace_all(text, |caps: &Captures<'_>| {
                match self.render_value(&caps[1]) {
                    Some(number) => format!("{}%", number),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }

    /// 时间规则：`三时二十分` → `3:20`，分钟补零到两位
    fn apply_time(&self, text: &str) -> String {
        self.time_re
            .replace_all(text, |caps: &Captures<'_>| {
                match (self.eval(&caps[1]), self.eval(&caps[2])) {
                    (Some(hour), Some(minute)) => format!("{}:{:02}", hour, minute),
                    _ => caps[0].to_string(),
                }
            })
            .into_owned()
    }

    /// 通用数值替换：匹配连续的中文数字字符序列并求值
    ///
    /// 带词汇守卫：常用词里的数字字符（统一、一起）不转换
    fn apply_number_runs(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;

        for m in self.number_run_re.find_iter(text) {
            out.push_str(&text[last..m.start()]);
            let run = m.as_str();
            if self.should_skip_run(text, m.start(), m.end(), run) {
                out.push_str(run);
            } else {
                match self.render_run(run) {
                    Some(rendered) => out.push_str(&rendered),
                    None => out.push_str(run),
                }
            }
            last = m.end();
        }

        out.push_str(&text[last..]);
        out
    }

    /// 词汇守卫
    ///
    /// - 单个数字字符紧跟在普通汉字后面时多半是词汇（统一、唯一、第一）
    /// - 基础数字开头、后接非数量后缀或普通汉字的序列是词汇（一起、一下子）；
    ///   后接数量单位/量词时才是数量表达
    fn should_skip_run(&self, text: &str, start: usize, end: usize, run: &str) -> bool {
        let mut chars = run.chars();
        let first = chars.next();
        let is_single = chars.next().is_none();

        if is_single {
            if let Some(prev) = text[..start].chars().next_back() {
                if is_ordinary_hanzi(prev) {
                    return true;
                }
            }
        }

        if first.map_or(false, is_basic_digit) {
            if let Some(next) = text[end..].chars().next() {
                if NUMERIC_UNITS.contains(&next) {
                    return false;
                }
                if NON_NUMERIC_SUFFIXES.contains(&next) || is_ordinary_hanzi(next) {
                    return true;
                }
            }
        }

        false
    }

    /// 渲染一个数字字符序列（含负号前缀）
    fn render_run(&self, run: &str) -> Option<String> {
        let (negative, body) = match run.strip_prefix('负') {
            Some(rest) => (true, rest),
            None => (false, run),
        };
        // 负号只允许出现在开头
        if body.is_empty() || body.contains('负') {
            return None;
        }

        let rendered = self.render_value(body)?;
        if negative {
            Some(format!("-{}", rendered))
        } else {
            Some(rendered)
        }
    }

    /// 求值一段数字字符（含小数）并渲染为字符串
    ///
    /// 纯基础数字序列（一二三、二零二六）逐位转换，其余组合求值；
    /// "点" 只有前后都是有效数字时才按小数点处理
    fn render_value(&self, body: &str) -> Option<String> {
        if body.contains('点') {
            let mut parts = body.splitn(2, '点');
            let integer_part = parts.next().unwrap_or("");
            let decimal_part = parts.next().unwrap_or("");
            if integer_part.is_empty()
                || !decimal_part.chars().next().map_or(false, is_basic_digit)
            {
                return None;
            }
            let integer = self.render_integer(integer_part)?;
            let fraction = scan_digits(DIGIT_TABLE, decimal_part)?;
            return Some(format!("{}.{}", integer, fraction));
        }

        self.render_integer(body)
    }

    /// 整数渲染：年份式数字串逐位转换，其余组合求值
    fn render_integer(&self, body: &str) -> Option<String> {
        if self.pure_digit_re.is_match(body) {
            scan_digits(DIGIT_TABLE, body)
        } else {
            self.eval(body).map(|v| v.to_string())
        }
    }

    fn eval(&self, body: &str) -> Option<i64> {
        scan_values(VALUE_TABLE, body).map(|values| evaluate_cjk(&values))
    }
}

impl NumeralConverter for ChineseConverter {
    fn language(&self) -> Language {
        Language::Chinese
    }

    /// 中文 ITN 主管道
    ///
    /// 固定顺序：固定表达守卫 → 百分比 → 时间 → 通用数值
    fn convert(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        if IDIOMS.iter().any(|idiom| text.contains(idiom)) {
            return text.to_string();
        }

        let text = self.apply_percent(text);
        let text = self.apply_time(&text);
        self.apply_number_runs(&text)
    }
}

fn is_basic_digit(ch: char) -> bool {
    matches!(
        ch,
        '零' | '一' | '二' | '三' | '四' | '五' | '六' | '七' | '八' | '九'
    )
}

fn is_numeral_char(ch: char) -> bool {
    NUMERAL_CLASS.contains(ch)
}

/// 普通汉字（非数字、非标点）
fn is_ordinary_hanzi(ch: char) -> bool {
    if is_numeral_char(ch) {
        return false;
    }
    if matches!(
        ch,
        '，' | '。' | '！' | '？' | '、' | '；' | '：' | '（' | '）' | '【' | '】' | '《' | '》'
    ) {
        return false;
    }
    matches!(ch, '\u{4E00}'..='\u{9FFF}')
}
