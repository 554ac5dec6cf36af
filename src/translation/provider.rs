//! 翻译提供方抽象
//!
//! 协调器和处理器只依赖 [`TranslationProvider`] 特征，
//! 具体实现（必应客户端、测试用模拟器）在特征之后注入。

use async_trait::async_trait;
use serde::Serialize;

use crate::translation::error::TranslationResult;

/// 单条文本的翻译结果
///
/// `raw` 保留提供方的原始响应载荷，供调用方自行检查。
#[derive(Debug, Clone, Serialize)]
pub struct TranslatedText {
    /// 原始文本
    pub text: String,
    /// 翻译后的文本
    pub translation: String,
    /// 语言信息
    pub language: LanguageInfo,
    /// 提供方原始响应
    pub raw: serde_json::Value,
}

/// 翻译涉及的语言信息
#[derive(Debug, Clone, Serialize)]
pub struct LanguageInfo {
    /// 源语言代码（自动检测时为检测结果）
    pub from: String,
    /// 目标语言代码
    pub to: String,
    /// 检测置信度（提供方未报告时省略）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// 语言检测结果
#[derive(Debug, Clone, Serialize)]
pub struct DetectedLanguage {
    /// 检测到的语言代码
    pub language: String,
    /// 检测置信度
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// 外部翻译提供方
///
/// 每次调用相互独立，允许任意延迟和任意失败；
/// 调用方负责捕获失败并决定如何呈现。
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// 翻译单条文本
    async fn translate(&self, text: &str, from: &str, to: &str)
        -> TranslationResult<TranslatedText>;

    /// 检测文本语言
    async fn detect(&self, text: &str) -> TranslationResult<DetectedLanguage>;
}
