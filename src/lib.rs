//! ITN Core Engine
//!
//! 多语言逆文本正则化核心引擎：将语音转写文本中的口语数字表达
//! （"twenty three"、"三時二十分"、"百分之五十"）改写为规范数字形式
//! （"23"、"3:20"、"50%"），普通文本原样保留

#![warn(rust_2018_idioms)]

pub mod config;
pub mod convert;
pub mod detect;
pub mod engine;
pub mod error;

// Re-export key types
pub use config::ItnConfig;
pub use convert::{ChineseConverter, EnglishConverter, JapaneseConverter, NumeralConverter};
pub use detect::{Language, LanguageDetector};
pub use engine::MultilingualItn;
pub use error::{ItnError, ItnResult};

/// 初始化日志系统
///
/// 日志级别由环境变量 ITN_LOG 控制，默认 warn
///
/// 注意: 此函数可以安全地多次调用
pub fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env("ITN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    // 使用 try_init() 代替 init()，避免重复初始化时 panic
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init();
}
