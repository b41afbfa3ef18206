//! 数字转换器模块
//!
//! 各语言转换器的统一能力接口与共享求值工具
//!
//! 三个转换器共享同一条管道结构：
//! 固定表达守卫 → 百分比规则 → 时间规则 → (序数词规则) → 通用数值替换

pub mod chinese;
pub mod english;
pub mod japanese;

pub use chinese::ChineseConverter;
pub use english::EnglishConverter;
pub use japanese::JapaneseConverter;

use crate::detect::Language;

/// NumeralConverter - 数字转换能力接口
///
/// 每个语言转换器在构造时编译好全部规则与映射表，
/// `convert` 是纯函数：不失败、不修改转换器状态
pub trait NumeralConverter {
    /// 转换器对应的语言
    fn language(&self) -> Language;

    /// 将文本中的口语数字表达改写为规范数字形式
    ///
    /// 全函数：无法识别的部分原样保留，永不报错
    fn convert(&self, text: &str) -> String;
}

/// 最长优先匹配查表
///
/// 从 `chars[pos..]` 开始，依次尝试 3、2、1 个字符的子串在映射表中查找。
/// 日语数字词长度不定（如平假名 "じゅう" 为 3 字符），
/// 必须优先尝试长候选，否则会被拆成无法映射的单字符。
///
/// 返回 (匹配到的值, 消耗的字符数)
pub(crate) fn match_longest<'a, T: Copy>(
    table: &'a [(&'a str, T)],
    chars: &[char],
    pos: usize,
) -> Option<(T, usize)> {
    for len in (1..=3).rev() {
        if pos + len > chars.len() {
            continue;
        }
        let candidate: String = chars[pos..pos + len].iter().collect();
        if let Some(&(_, value)) = table.iter().find(|(key, _)| *key == candidate) {
            return Some((value, len));
        }
    }
    None
}

/// 在映射表中查找单个词（精确匹配）
pub(crate) fn lookup<'a, T: Copy>(table: &'a [(&'a str, T)], word: &str) -> Option<T> {
    table
        .iter()
        .find(|(key, _)| *key == word)
        .map(|&(_, value)| value)
}

/// 将整段文本按最长优先匹配解析为数值序列
///
/// 任一位置无法映射时返回 None：
/// 该段不是完整的数字表达，调用方应原样保留
pub(crate) fn scan_values(table: &[(&str, i64)], text: &str) -> Option<Vec<i64>> {
    let chars: Vec<char> = text.chars().collect();
    let mut values = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let (value, len) = match_longest(table, &chars, i)?;
        values.push(value);
        i += len;
    }
    Some(values)
}

/// 将整段文本按最长优先匹配逐位转换（数字映射表）
///
/// 用于小数部分和纯数字序列（如年份 "二零二六"），不做数值计算
pub(crate) fn scan_digits(table: &[(&str, &str)], text: &str) -> Option<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::new();
    let mut i = 0;
    while i < chars.len() {
        let (digits, len) = match_longest(table, &chars, i)?;
        result.push_str(digits);
        i += len;
    }
    Some(result)
}

/// 中日共用的乘加求值
///
/// 十/百/千 将当前数字扩展后并入万以下累计，
/// 万/亿(億) 将累计部分整体进位（无前置数字时按 1 处理）
pub(crate) fn evaluate_cjk(values: &[i64]) -> i64 {
    let mut value: i64 = 0; // 万/亿级已确认部分
    let mut sub: i64 = 0; // 万以下累计
    let mut digit: i64 = 0; // 当前数字

    for &v in values {
        match v {
            10 | 100 | 1000 => {
                sub += if digit == 0 { 1 } else { digit } * v;
                digit = 0;
            }
            10_000 | 100_000_000 => {
                value += (sub + digit).max(1);
                value *= v;
                sub = 0;
                digit = 0;
            }
            _ => digit += v,
        }
    }

    value + sub + digit
}
