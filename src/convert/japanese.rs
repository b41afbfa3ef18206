//! 日语数字转换模块
//!
//! 将日语口语数字表达改写为阿拉伯数字
//!
//! 日语数字词混用汉字/平假名/片假名，同一数字有 1~3 字符的多种写法
//! （如 十 / じゅう / ジュウ），求值前必须做最长优先匹配分词

use regex::{Captures, Regex};

use crate::convert::{evaluate_cjk, match_longest, scan_digits, scan_values, NumeralConverter};
use crate::detect::Language;
use crate::error::ItnResult;

/// 日语数字映射（逐位转换用）
const DIGIT_TABLE: &[(&str, &str)] = &[
    ("零", "0"),
    ("〇", "0"),
    ("ゼロ", "0"),
    ("一", "1"),
    ("壱", "1"),
    ("いち", "1"),
    ("イチ", "1"),
    ("二", "2"),
    ("弐", "2"),
    ("に", "2"),
    ("ニ", "2"),
    ("三", "3"),
    ("参", "3"),
    ("さん", "3"),
    ("サン", "3"),
    ("四", "4"),
    ("肆", "4"),
    ("よん", "4"),
    ("ヨン", "4"),
    ("し", "4"),
    ("シ", "4"),
    ("五", "5"),
    ("伍", "5"),
    ("ご", "5"),
    ("ゴ", "5"),
    ("六", "6"),
    ("陸", "6"),
    ("ろく", "6"),
    ("ロク", "6"),
    ("七", "7"),
    ("漆", "7"),
    ("なな", "7"),
    ("ナナ", "7"),
    ("しち", "7"),
    ("シチ", "7"),
    ("八", "8"),
    ("捌", "8"),
    ("はち", "8"),
    ("ハチ", "8"),
    ("九", "9"),
    ("玖", "9"),
    ("きゅう", "9"),
    ("キュウ", "9"),
    ("く", "9"),
    ("ク", "9"),
    ("点", "."),
    ("・", "."),
];

/// 日语数值映射（计算用）
const VALUE_TABLE: &[(&str, i64)] = &[
    ("零", 0),
    ("〇", 0),
    ("ゼロ", 0),
    ("一", 1),
    ("壱", 1),
    ("いち", 1),
    ("イチ", 1),
    ("二", 2),
    ("弐", 2),
    ("に", 2),
    ("ニ", 2),
    ("三", 3),
    ("参", 3),
    ("さん", 3),
    ("サン", 3),
    ("四", 4),
    ("肆", 4),
    ("よん", 4),
    ("ヨン", 4),
    ("し", 4),
    ("シ", 4),
    ("五", 5),
    ("伍", 5),
    ("ご", 5),
    ("ゴ", 5),
    ("六", 6),
    ("陸", 6),
    ("ろく", 6),
    ("ロク", 6),
    ("七", 7),
    ("漆", 7),
    ("なな", 7),
    ("ナナ", 7),
    ("しち", 7),
    ("シチ", 7),
    ("八", 8),
    ("捌", 8),
    ("はち", 8),
    ("ハチ", 8),
    ("九", 9),
    ("玖", 9),
    ("きゅう", 9),
    ("キュウ", 9),
    ("く", 9),
    ("ク", 9),
    ("十", 10),
    ("拾", 10),
    ("じゅう", 10),
    ("ジュウ", 10),
    ("百", 100),
    ("ひゃく", 100),
    ("ヒャク", 100),
    ("千", 1000),
    ("せん", 1000),
    ("セン", 1000),
    ("万", 10_000),
    ("まん", 10_000),
    ("マン", 10_000),
    ("億", 100_000_000),
    ("おく", 100_000_000),
    ("オク", 100_000_000),
];

/// 避免误转的日语固定表达（四字熟语等）
///
/// 命中任意一条即放弃整句转换（全局否决）
const IDIOMS: &[&str] = &[
    "一期一会",
    "十人十色",
    "一石二鳥",
    "二束三文",
    "三寒四温",
    "四面楚歌",
    "五里霧中",
    "六甲台",
    "七転八倒",
    "八方美人",
    "九死一生",
    "十中八九",
];

/// 数字字符类（映射表中全部表层字符）
const NUMERAL_CLASS: &str = "零〇一二三四五六七八九十百千万億壱弐参肆伍陸漆捌玖拾\
いちにさんよんごろくななはちきゅうじゅうひゃくせんまんおく\
イチニサンヨンゴロクナナハチキュウジュウヒャクセンマンオクしちシチゼロ点・";

/// 日语数字转换器
pub struct JapaneseConverter {
    percent_re: Regex,
    time_re: Regex,
    number_run_re: Regex,
    pure_digit_re: Regex,
}

impl JapaneseConverter {
    /// 创建转换器，编译全部规则
    ///
    /// 规则只在构造时编译一次，转换调用不再编译
    pub fn new() -> ItnResult<Self> {
        let percent_re = Regex::new(&format!(r"([{c}]+)パーセント", c = NUMERAL_CLASS))?;
        let time_re =
            Regex::new(r"([零〇一二三四五六七八九十]+)時([零〇一二三四五六七八九十]+)分?")?;
        let number_run_re = Regex::new(&format!(r"[{c}]+", c = NUMERAL_CLASS))?;
        let pure_digit_re = Regex::new(r"^[零〇一二三四五六七八九ゼロ点・]+$")?;

        Ok(Self {
            percent_re,
            time_re,
            number_run_re,
            pure_digit_re,
        })
    }

    /// 百分比规则：`五十パーセント` → `50%`
    ///
    /// 捕获的字符段可能带有无法解析的前缀（如助词 "は"），
    /// 从左向右逐字符剥离，取能完整求值的最长后缀
    fn apply_percent(&self, text: &str) -> String {
        self.percent_re
            .replace_all(text, |caps: &Captures<'_>| {
                let captured = &caps[1];
                for (idx, _) in captured.char_indices() {
                    let (prefix, candidate) = captured.split_at(idx);
                    if let Some(number) = self.render_segment(candidate) {
                        return format!("{}{}%", prefix, number);
                    }
                }
                caps[0].to_string()
            })
            .into_owned()
    }

    /// 时间规则：`三時二十分` → `3:20`，分钟补零到两位
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

    /// 通用数值替换
    ///
    /// 正则只粗筛出数字字符段，段内再做最长优先分词，
    /// 能完整分词的子段转换，其余字符原样保留
    fn apply_number_runs(&self, text: &str) -> String {
        self.number_run_re
            .replace_all(text, |caps: &Captures<'_>| self.convert_run(&caps[0]))
            .into_owned()
    }

    /// 转换一个数字字符段
    ///
    /// 数字字符类覆盖了假名数字词的所有组成字符，因此段内
    /// 可能混有普通假名（"にちは" 中的 に）。逐段切出能连续
    /// 分词的子段求值；只由单假名数字词组成的子段按普通文本
    /// 处理，避免把助词和寒暄语里的假名误转成数字
    fn convert_run(&self, run: &str) -> String {
        let chars: Vec<char> = run.chars().collect();
        let mut out = String::new();
        let mut i = 0;

        while i < chars.len() {
            let start = i;
            let mut all_single_kana = true;
            let mut has_token = false;

            while i < chars.len() {
                if let Some((_, len)) = match_longest(VALUE_TABLE, &chars, i) {
                    if len > 1 || !is_kana(chars[i]) {
                        all_single_kana = false;
                    }
                    has_token = true;
                    i += len;
                } else if is_decimal_marker(chars[i]) && i > start {
                    // 小数点只接在数字之后
                    i += 1;
                } else {
                    break;
                }
            }

            if i > start {
                let segment: String = chars[start..i].iter().collect();
                let converted = if has_token && !all_single_kana {
                    self.render_segment(&segment)
                } else {
                    None
                };
                match converted {
                    Some(rendered) => out.push_str(&rendered),
                    None => out.push_str(&segment),
                }
            } else {
                out.push(chars[i]);
                i += 1;
            }
        }

        out
    }

    /// 渲染一个完整分词的数字子段
    ///
    /// 纯数字序列（一二三四五、二零二六）逐位转换，
    /// 其余按位值组合求值；小数点拆分整数/小数部分
    fn render_segment(&self, segment: &str) -> Option<String> {
        if segment.is_empty() {
            return None;
        }

        if self.pure_digit_re.is_match(segment)
            && !segment.starts_with(['点', '・'])
            && !segment.ends_with(['点', '・'])
        {
            return scan_digits(DIGIT_TABLE, segment);
        }

        if !segment.contains(['点', '・']) {
            return self.eval(segment).map(|v| v.to_string());
        }

        // 小数：整数部分组合求值，小数部分逐位转换
        let mut parts = segment.splitn(2, ['点', '・']);
        let integer_part = parts.next().unwrap_or("");
        let decimal_part: String = parts
            .next()
            .unwrap_or("")
            .chars()
            .filter(|c| !is_decimal_marker(*c))
            .collect();

        let fraction = if decimal_part.is_empty() {
            String::new()
        } else {
            scan_digits(DIGIT_TABLE, &decimal_part)?
        };

        if integer_part.is_empty() && fraction.is_empty() {
            return None;
        }
        let integer = if integer_part.is_empty() {
            0
        } else {
            self.eval(integer_part)?
        };

        if fraction.is_empty() {
            Some(integer.to_string())
        } else {
            Some(format!("{}.{}", integer, fraction))
        }
    }

    fn eval(&self, segment: &str) -> Option<i64> {
        scan_values(VALUE_TABLE, segment).map(|values| evaluate_cjk(&values))
    }
}

impl NumeralConverter for JapaneseConverter {
    fn language(&self) -> Language {
        Language::Japanese
    }

    /// 日语 ITN 主管道
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

fn is_decimal_marker(ch: char) -> bool {
    ch == '点' || ch == '・'
}

fn is_kana(ch: char) -> bool {
    matches!(ch, '\u{3040}'..='\u{309F}' | '\u{30A0}'..='\u{30FF}')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn converter() -> JapaneseConverter {
        JapaneseConverter::new().unwrap()
    }

    #[test]
    fn test_pure_digit_sequence() {
        let c = converter();
        assert_eq!(c.convert("一二三四五"), "12345");
        assert_eq!(c.convert("二零二六"), "2026");
        assert_eq!(c.convert("〇"), "0");
    }

    #[test]
    fn test_compositional() {
        let c = converter();
        assert_eq!(c.convert("十二"), "12");
        assert_eq!(c.convert("二十三"), "23");
        assert_eq!(c.convert("一千二百三十四"), "1234");
    }

    #[test]
    fn test_large_units() {
        let c = converter();
        assert_eq!(c.convert("一万二千三百四十五"), "12345");
        assert_eq!(c.convert("十万"), "100000");
        assert_eq!(c.convert("一億"), "100000000");
    }

    #[test]
    fn test_kana_spellings() {
        let c = converter();
        assert_eq!(c.convert("じゅうに"), "12");
        assert_eq!(c.convert("にじゅうさん"), "23");
        assert_eq!(c.convert("サンジュウ"), "30");
    }

    #[test]
    fn test_decimal() {
        let c = converter();
        assert_eq!(c.convert("二点五"), "2.5");
        assert_eq!(c.convert("三・五"), "3.5");
        assert_eq!(c.convert("零点五"), "0.5");
    }

    #[test]
    fn test_percent() {
        let c = converter();
        assert_eq!(c.convert("五十パーセント"), "50%");
        assert_eq!(c.convert("割引は三十パーセントです"), "割引は30%です");
    }

    #[test]
    fn test_time() {
        let c = converter();
        assert_eq!(c.convert("三時二十分"), "3:20");
        assert_eq!(c.convert("九時五分"), "9:05");
        assert_eq!(c.convert("十時三十分"), "10:30");
    }

    #[test]
    fn test_idiom_veto_is_global() {
        let c = converter();
        // 四字熟语命中时整句放弃转换
        assert_eq!(c.convert("一期一会"), "一期一会");
        assert_eq!(c.convert("十中八九そうなる"), "十中八九そうなる");
        // 熟语与普通数字并存时同样整句保留
        assert_eq!(c.convert("一期一会で二十三人"), "一期一会で二十三人");
    }

    #[test]
    fn test_prose_untouched() {
        let c = converter();
        // に/ご/く 等单假名数字词不应在寒暄语里被误转
        assert_eq!(c.convert("こんにちは"), "こんにちは");
        assert_eq!(c.convert("りんごをください"), "りんごをください");
        assert_eq!(c.convert(""), "");
    }

    #[test]
    fn test_unmapped_run_kept() {
        let c = converter();
        // ロ 单独出现（外来语）不是数字词
        assert_eq!(c.convert("ロンドン"), "ロンドン");
        // 中黒単独も保留
        assert_eq!(c.convert("カタカナ・ナマエ"), "カタカナ・ナマエ");
    }

    #[test]
    fn test_embedded_in_sentence() {
        let c = converter();
        assert_eq!(c.convert("みかんを三十個ください"), "みかんを30個ください");
        assert_eq!(c.convert("それは五十です"), "それは50です");
    }

    #[test]
    fn test_idempotent_on_digits() {
        let c = converter();
        let once = c.convert("二十三");
        assert_eq!(once, "23");
        assert_eq!(c.convert(&once), once);
    }
}
