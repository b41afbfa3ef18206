use thiserror::Error;

#[derive(Error, Debug)]
pub enum ItnError {
    // 规则错误
    #[error("Pattern compile failed: {0}")]
    Pattern(#[from] regex::Error),

    // 语言错误
    #[error("Unknown language tag: {0}")]
    UnknownLanguage(String),

    // 配置错误
    #[error("Config parse error: {path} - {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("Config dir not found")]
    ConfigDirNotFound,

    // 其他错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ItnResult<T> = Result<T, ItnError>;
