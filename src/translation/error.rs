//! 翻译模块统一错误处理
//!
//! 提供结构化错误类型和错误处理机制

use thiserror::Error;

/// 翻译错误类型
#[derive(Error, Debug, Clone)]
pub enum TranslationError {
    /// 配置错误
    #[error("配置错误: {0}")]
    ConfigError(String),

    /// 网络错误
    #[error("网络错误: {0}")]
    NetworkError(String),

    /// 输入验证错误
    #[error("{0}")]
    InvalidInput(String),

    /// API响应错误
    #[error("API错误 {code}: {message}")]
    ApiError {
        /// 错误代码
        code: i32,
        /// 错误消息
        message: String,
    },

    /// 解析错误
    #[error("解析错误: {0}")]
    ParseError(String),

    /// 服务器错误
    #[error("服务器错误: {0}")]
    ServerError(String),

    /// 内部错误
    #[error("内部错误: {0}")]
    InternalError(String),
}

impl TranslationError {
    /// 检查错误是否为输入验证错误
    pub fn is_validation(&self) -> bool {
        matches!(self, TranslationError::InvalidInput(_))
    }
}

impl From<reqwest::Error> for TranslationError {
    fn from(error: reqwest::Error) -> Self {
        TranslationError::NetworkError(error.to_string())
    }
}

impl From<serde_json::Error> for TranslationError {
    fn from(error: serde_json::Error) -> Self {
        TranslationError::ParseError(format!("JSON解析错误: {}", error))
    }
}

impl From<std::io::Error> for TranslationError {
    fn from(error: std::io::Error) -> Self {
        TranslationError::ServerError(format!("IO错误: {}", error))
    }
}

/// 错误结果类型别名
pub type TranslationResult<T> = Result<T, TranslationError>;
