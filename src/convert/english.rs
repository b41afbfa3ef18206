//! 英语数字转换模块
//!
//! 将英语口语数字表达改写为阿拉伯数字
//!
//! 支持：zero ~ nineteen, twenty ~ ninety, hundred, thousand, million,
//! billion, trillion, point/dot 小数, percent 百分比, 时间, 序数词

use regex::{Captures, Regex};

use crate::convert::{lookup, NumeralConverter};
use crate::detect::Language;
use crate::error::ItnResult;

/// 英语数字映射（逐位转换用）
const DIGIT_TABLE: &[(&str, &str)] = &[
    ("zero", "0"),
    ("one", "1"),
    ("two", "2"),
    ("three", "3"),
    ("four", "4"),
    ("five", "5"),
    ("six", "6"),
    ("seven", "7"),
    ("eight", "8"),
    ("nine", "9"),
    ("ten", "10"),
    ("eleven", "11"),
    ("twelve", "12"),
    ("thirteen", "13"),
    ("fourteen", "14"),
    ("fifteen", "15"),
    ("sixteen", "16"),
    ("seventeen", "17"),
    ("eighteen", "18"),
    ("nineteen", "19"),
    ("twenty", "20"),
    ("thirty", "30"),
    ("forty", "40"),
    ("fifty", "50"),
    ("sixty", "60"),
    ("seventy", "70"),
    ("eighty", "80"),
    ("ninety", "90"),
    ("point", "."),
    ("dot", "."),
];

/// 英语数值映射（计算用）
const VALUE_TABLE: &[(&str, i64)] = &[
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
    ("hundred", 100),
    ("thousand", 1000),
    ("million", 1_000_000),
    ("billion", 1_000_000_000),
    ("trillion", 1_000_000_000_000),
];

/// 序数词映射（直接替换，不做组合）
const ORDINAL_TABLE: &[(&str, &str)] = &[
    ("first", "1st"),
    ("second", "2nd"),
    ("third", "3rd"),
    ("fourth", "4th"),
    ("fifth", "5th"),
    ("sixth", "6th"),
    ("seventh", "7th"),
    ("eighth", "8th"),
    ("ninth", "9th"),
    ("tenth", "10th"),
    ("eleventh", "11th"),
    ("twelfth", "12th"),
    ("thirteenth", "13th"),
    ("fourteenth", "14th"),
    ("fifteenth", "15th"),
    ("sixteenth", "16th"),
    ("seventeenth", "17th"),
    ("eighteenth", "18th"),
    ("nineteenth", "19th"),
    ("twentieth", "20th"),
    ("thirtieth", "30th"),
];

/// 避免误转的英语固定表达
///
/// 命中任意一条即放弃整句转换（全局否决）
const IDIOMS: &[&str] = &[
    "one way or another",
    "two peas in a pod",
    "three strikes",
    "four leaf clover",
    "high five",
    "six feet under",
    "seven seas",
    "behind the eight ball",
    "nine lives",
    "perfect ten",
    "eleven o'clock",
    "twelve apostles",
];

/// 数字词正则片段（与映射表保持一致）
const NUMBER_WORDS: &str = "zero|one|two|three|four|five|six|seven|eight|nine|\
ten|eleven|twelve|thirteen|fourteen|fifteen|sixteen|seventeen|eighteen|nineteen|\
twenty|thirty|forty|fifty|sixty|seventy|eighty|ninety|\
hundred|thousand|million|billion|trillion|point|dot";

/// 英语数字转换器
pub struct EnglishConverter {
    percent_re: Regex,
    time_re: Regex,
    ordinal_re: Regex,
    number_run_re: Regex,
    decimal_split_re: Regex,
}

impl EnglishConverter {
    /// 创建转换器，编译全部规则
    ///
    /// 规则只在构造时编译一次，转换调用不再编译
    pub fn new() -> ItnResult<Self> {
        let percent_re = Regex::new(&format!(
            r"(?i)\b((?:{w})(?:\s+(?:{w}))*)\s+percent\b",
            w = NUMBER_WORDS
        ))?;
        let time_re = Regex::new(
            r"(?i)\b(one|two|three|four|five|six|seven|eight|nine|ten|eleven|twelve)\s+(o'clock|thirty|fifteen|forty five|[a-z]+)\b",
        )?;
        let ordinal_re = Regex::new(
            r"(?i)\b(first|second|third|fourth|fifth|sixth|seventh|eighth|ninth|tenth|eleventh|twelfth|thirteenth|fourteenth|fifteenth|sixteenth|seventeenth|eighteenth|nineteenth|twentieth|thirtieth)\b",
        )?;
        let number_run_re = Regex::new(&format!(
            r"(?i)\b(?:{w})(?:\s+(?:{w}))*\b",
            w = NUMBER_WORDS
        ))?;
        let decimal_split_re = Regex::new(r"\s*\b(?:point|dot)\b\s*")?;

        Ok(Self {
            percent_re,
            time_re,
            ordinal_re,
            number_run_re,
            decimal_split_re,
        })
    }

    /// 百分比规则：`fifty percent` → `50%`
    ///
    /// 数字部分用显式数字词交替式匹配，避免吞掉前面的普通单词
    fn apply_percent(&self, text: &str) -> String {
        self.percent_re
            .replace_all(text, |caps: &Captures<'_>| {
                format!("{}%", self.render_value(&caps[1]))
            })
            .into_owned()
    }

    /// 时间规则：`three thirty` → `3:30`
    ///
    /// 分钟兜底词仅接受数值在 1..=59 的词，
    /// 百/千等单位词留给通用数值替换处理
    fn apply_time(&self, text: &str) -> String {
        self.time_re
            .replace_all(text, |caps: &Captures<'_>| {
                let hour_word = caps[1].to_lowercase();
                let minute_word = caps[2].to_lowercase();
                let hour = match lookup(VALUE_TABLE, &hour_word) {
                    Some(h) => h,
                    None => return caps[0].to_string(),
                };
                match minute_word.as_str() {
                    "o'clock" => format!("{}:00", hour),
                    "thirty" => format!("{}:30", hour),
                    "fifteen" => format!("{}:15", hour),
                    "forty five" => format!("{}:45", hour),
                    _ => match lookup(VALUE_TABLE, &minute_word) {
                        Some(minute) if (1..60).contains(&minute) => {
                            format!("{}:{:02}", hour, minute)
                        }
                        _ => caps[0].to_string(),
                    },
                }
            })
            .into_owned()
    }

    /// 序数词规则：`first` → `1st`
    fn apply_ordinal(&self, text: &str) -> String {
        self.ordinal_re
            .replace_all(text, |caps: &Captures<'_>| {
                lookup(ORDINAL_TABLE, &caps[1].to_lowercase())
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }

    /// 通用数值替换：匹配最长的连续数字词序列并求值
    fn apply_number_runs(&self, text: &str) -> String {
        self.number_run_re
            .replace_all(text, |caps: &Captures<'_>| {
                let run = &caps[0];
                let lower = run.to_lowercase();
                let words: Vec<&str> = lower.split_whitespace().collect();

                if has_decimal_marker(&words) {
                    return self
                        .render_decimal(&lower)
                        .unwrap_or_else(|| run.to_string());
                }
                // 单个数字词直接查表（"twenty" → "20"）
                if words.len() == 1 {
                    if let Some(digits) = lookup(DIGIT_TABLE, words[0]) {
                        return digits.to_string();
                    }
                }
                evaluate(&words).to_string()
            })
            .into_owned()
    }

    /// 求值一段数字词（含小数）并渲染为字符串
    fn render_value(&self, text: &str) -> String {
        let lower = text.to_lowercase();
        let words: Vec<&str> = lower.split_whitespace().collect();
        if has_decimal_marker(&words) {
            self.render_decimal(&lower)
                .unwrap_or_else(|| text.to_string())
        } else {
            evaluate(&words).to_string()
        }
    }

    /// 小数渲染：整数部分求值，小数部分逐词查表拼接
    ///
    /// 整数和小数部分都为空时返回 None（孤立的 point/dot 不转换）
    fn render_decimal(&self, lower: &str) -> Option<String> {
        let mut parts = self.decimal_split_re.splitn(lower, 2);
        let integer_part = parts.next().unwrap_or("").trim();
        let decimal_part = parts.next().unwrap_or("").trim();

        let mut fraction = String::new();
        for word in decimal_part.split_whitespace() {
            if word == "point" || word == "dot" {
                continue;
            }
            if let Some(digits) = lookup(DIGIT_TABLE, word) {
                fraction.push_str(digits);
            }
        }

        if integer_part.is_empty() && fraction.is_empty() {
            return None;
        }

        let integer_words: Vec<&str> = integer_part.split_whitespace().collect();
        let integer = evaluate(&integer_words);
        if fraction.is_empty() {
            Some(integer.to_string())
        } else {
            Some(format!("{}.{}", integer, fraction))
        }
    }
}

impl NumeralConverter for EnglishConverter {
    fn language(&self) -> Language {
        Language::English
    }

    /// 英语 ITN 主管道
    ///
    /// 固定顺序：固定表达守卫 → 百分比 → 时间 → 序数词 → 通用数值
    fn convert(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        // 固定表达守卫：命中即整句放弃转换
        let lower = text.to_lowercase();
        if IDIOMS.iter().any(|idiom| lower.contains(idiom)) {
            return text.to_string();
        }

        let text = self.apply_percent(text);
        let text = self.apply_time(&text);
        let text = self.apply_ordinal(&text);
        self.apply_number_runs(&text)
    }
}

fn has_decimal_marker(words: &[&str]) -> bool {
    words.iter().any(|&w| w == "point" || w == "dot")
}

/// 组合求值英语数字词序列
///
/// hundred 扩展当前组，thousand/million/billion/trillion 将当前组
/// 乘以对应数量级后并入总值；单位词无前置数字时按 1 处理
fn evaluate(words: &[&str]) -> i64 {
    let mut total: i64 = 0;
    let mut current: i64 = 0;

    for &word in words {
        let value = match lookup(VALUE_TABLE, word) {
            Some(v) => v,
            None => continue,
        };
        match value {
            100 => current = current.max(1) * 100,
            1_000 | 1_000_000 | 1_000_000_000 | 1_000_000_000_000 => {
                total += current.max(1) * value;
                current = 0;
            }
            _ => current += value,
        }
    }

    total + current
}
