//! Web 模块的数据类型定义

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::translation::provider::TranslationProvider;

/// 应用状态
#[derive(Clone)]
pub struct AppState {
    /// 翻译提供方
    pub provider: Arc<dyn TranslationProvider>,
}

/// 单文本翻译与语言检测的请求参数
///
/// GET 走查询字符串，POST 走 JSON 请求体；POST 同时带查询参数时
/// 请求体字段优先（与原有服务的参数合并规则一致）。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslateParams {
    /// 要处理的文本
    pub text: Option<String>,
    /// 源语言代码
    pub from: Option<String>,
    /// 目标语言代码
    pub to: Option<String>,
}

impl TranslateParams {
    /// 合并查询参数与请求体参数，请求体字段优先
    pub fn merged(query: Self, body: Option<Self>) -> Self {
        let body = body.unwrap_or_default();
        Self {
            text: body.text.or(query.text),
            from: body.from.or(query.from),
            to: body.to.or(query.to),
        }
    }
}

/// 批量翻译请求
///
/// `texts` 接受字符串数组或编码成字符串的 JSON 数组，
/// 由协调器的规范化步骤统一解码校验。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchTranslateRequest {
    /// 要翻译的文本集合
    pub texts: Option<Value>,
    /// 源语言代码
    pub from: Option<String>,
    /// 目标语言代码
    pub to: Option<String>,
}

/// 处理器错误响应类型
pub type ApiError = (StatusCode, Json<Value>);

/// 构造 400 验证错误响应
pub fn validation_error(message: &str) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "error": message })),
    )
}

/// 构造 500 内部错误响应
pub fn internal_error(message: &str, details: impl std::fmt::Display) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({
            "error": message,
            "details": details.to_string(),
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merged_body_wins() {
        let query = TranslateParams {
            text: Some("query".to_string()),
            from: Some("en".to_string()),
            to: None,
        };
        let body = TranslateParams {
            text: Some("body".to_string()),
            from: None,
            to: Some("fr".to_string()),
        };

        let merged = TranslateParams::merged(query, Some(body));
        assert_eq!(merged.text.as_deref(), Some("body"));
        assert_eq!(merged.from.as_deref(), Some("en"));
        assert_eq!(merged.to.as_deref(), Some("fr"));
    }

    #[test]
    fn test_merged_without_body() {
        let query = TranslateParams {
            text: Some("query".to_string()),
            from: None,
            to: None,
        };

        let merged = TranslateParams::merged(query, None);
        assert_eq!(merged.text.as_deref(), Some("query"));
    }
}
