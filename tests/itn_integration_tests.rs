//! ITN 集成测试
//!
//! 测试完整的多语言 ITN 管道：语言检测 → 分发 → 各语言转换

use itn_core::{
    ChineseConverter, EnglishConverter, ItnConfig, JapaneseConverter, Language, LanguageDetector,
    MultilingualItn, NumeralConverter,
};

#[test]
fn test_english_round_trip_digits() {
    let itn = MultilingualItn::new();

    // 基础数字 0-9 与整十数
    let cases = [
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
        ("twenty", "20"),
        ("thirty", "30"),
        ("forty", "40"),
        ("fifty", "50"),
        ("sixty", "60"),
        ("seventy", "70"),
        ("eighty", "80"),
        ("ninety", "90"),
    ];
    for (word, expected) in cases {
        assert_eq!(itn.process_as(word, Language::English), expected);
    }
}

#[test]
fn test_english_compositional() {
    let itn = MultilingualItn::new();

    assert_eq!(
        itn.process_as("one hundred twenty three", Language::English),
        "123"
    );
    assert_eq!(
        itn.process_as("two thousand twenty four", Language::English),
        "2024"
    );
    assert_eq!(
        itn.process_as("one million five hundred thousand", Language::English),
        "1500000"
    );
}

#[test]
fn test_decimal_handling() {
    let itn = MultilingualItn::new();

    assert_eq!(itn.process_as("three point five", Language::English), "3.5");
    assert_eq!(itn.process_as("二点五", Language::Japanese), "2.5");
}

#[test]
fn test_japanese_large_units() {
    let itn = MultilingualItn::new();

    assert_eq!(
        itn.process_as("一万二千三百四十五", Language::Japanese),
        "12345"
    );
    assert_eq!(itn.process_as("二十三", Language::Japanese), "23");
}

#[test]
fn test_time_conversion() {
    let itn = MultilingualItn::new();

    assert_eq!(itn.process_as("three thirty", Language::English), "3:30");
    assert_eq!(itn.process_as("三時二十分", Language::Japanese), "3:20");
}

#[test]
fn test_percent_conversion() {
    let itn = MultilingualItn::new();

    assert_eq!(itn.process_as("fifty percent", Language::English), "50%");
    assert_eq!(
        itn.process_as("五十パーセント", Language::Japanese),
        "50%"
    );
    assert_eq!(itn.process_as("百分之五十", Language::Chinese), "50%");
}

#[test]
fn test_idiom_veto() {
    let itn = MultilingualItn::new();

    // "first place" 不在固定表达列表中，必须正常转换
    assert_eq!(
        itn.process_as("first place", Language::English),
        "1st place"
    );

    // 列表中的固定表达命中时整句放弃转换
    assert_eq!(
        itn.process_as("give me a high five", Language::English),
        "give me a high five"
    );
    assert_eq!(itn.process_as("一期一会", Language::Japanese), "一期一会");
    assert_eq!(itn.process_as("十全十美", Language::Chinese), "十全十美");
}

#[test]
fn test_idempotence() {
    let itn = MultilingualItn::new();

    let cases = [
        ("twenty three point five", Language::English),
        ("three thirty", Language::English),
        ("一千二百三十四", Language::Chinese),
        ("三時二十分", Language::Japanese),
    ];
    for (text, language) in cases {
        let once = itn.process_as(text, language);
        // 全部数字词替换完成后再次处理不应有任何变化
        assert_eq!(itn.process_as(&once, language), once);
    }
}

#[test]
fn test_detection_boundary_strict() {
    // 汉字比例恰好 0.3 时不判定为中文（严格大于，非大于等于）
    assert_eq!(LanguageDetector::detect("中中中abcdefg"), Language::English);
    assert_eq!(LanguageDetector::detect("中中中中abcdef"), Language::Chinese);
}

#[test]
fn test_detection_categories() {
    assert_eq!(LanguageDetector::detect(""), Language::Unknown);
    assert_eq!(LanguageDetector::detect("   "), Language::Unknown);
    assert_eq!(LanguageDetector::detect("123!?"), Language::Mixed);
    assert_eq!(LanguageDetector::detect("今天有五十个人"), Language::Chinese);
    assert_eq!(LanguageDetector::detect("こんにちは"), Language::Japanese);
    assert_eq!(LanguageDetector::detect("twenty three"), Language::English);
}

#[test]
fn test_auto_mode_end_to_end() {
    let itn = MultilingualItn::new();

    assert_eq!(itn.process("有一千二百个"), "有1200个");
    assert_eq!(itn.process("twenty three people"), "23 people");
    assert_eq!(itn.process("ごじゅうパーセントです"), "50%です");
}

#[test]
fn test_mixed_mode_chains_in_fixed_order() {
    let itn = MultilingualItn::new();
    let zh = ChineseConverter::new().unwrap();
    let ja = JapaneseConverter::new().unwrap();
    let en = EnglishConverter::new().unwrap();

    // mixed 模式必须等价于按 中 → 日 → 英 顺序依次应用
    let cases = [
        "一二三 and twenty four",
        "二十三 twenty three じゅうに",
        "fifty percent と 五十パーセント",
    ];
    for text in cases {
        let expected = en.convert(&ja.convert(&zh.convert(text)));
        assert_eq!(itn.process_as(text, Language::Mixed), expected);
    }
}

#[test]
fn test_degraded_engine() {
    let config = ItnConfig {
        chinese: false,
        japanese: true,
        english: true,
    };
    let itn = MultilingualItn::with_config(&config);

    assert!(itn.is_available());
    assert!(!itn.is_language_available(Language::Chinese));

    // 缺席的转换器静默降级为不转换
    assert_eq!(itn.process_as("一千", Language::Chinese), "一千");
    // 其余语言不受影响
    assert_eq!(itn.process_as("twenty", Language::English), "20");
}

#[test]
fn test_process_tagged_contract() {
    let itn = MultilingualItn::new();

    assert_eq!(itn.process_tagged("二十三", "chinese").unwrap(), "23");
    assert_eq!(itn.process_tagged("二十三", "auto").unwrap(), "23");
    assert_eq!(
        itn.process_tagged("twenty three", "english").unwrap(),
        "23"
    );
    assert!(itn.process_tagged("anything", "esperanto").is_err());
}

#[test]
fn test_prose_is_left_alone() {
    let itn = MultilingualItn::new();

    let cases = [
        "hello world",
        "今天天气不错",
        "こんにちは",
        "just some ordinary text",
    ];
    for text in cases {
        assert_eq!(itn.process(text), text);
    }
}

#[test]
fn test_converter_trait_objects() {
    // 闭集转换器通过统一能力接口使用
    let converters: Vec<Box<dyn NumeralConverter>> = vec![
        Box::new(ChineseConverter::new().unwrap()),
        Box::new(JapaneseConverter::new().unwrap()),
        Box::new(EnglishConverter::new().unwrap()),
    ];

    let languages: Vec<Language> = converters.iter().map(|c| c.language()).collect();
    assert_eq!(
        languages,
        vec![Language::Chinese, Language::Japanese, Language::English]
    );
}
