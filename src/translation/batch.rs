//! 批量翻译协调器
//!
//! 将一组相互独立的文本并发派发给翻译提供方，
//! 逐条捕获成功或失败，汇总为保持输入顺序的聚合报告。

use futures::future::join_all;
use serde::Serialize;
use serde_json::Value;

use crate::translation::error::{TranslationError, TranslationResult};
use crate::translation::provider::{TranslatedText, TranslationProvider};

/// 批量翻译中单条文本的终态
///
/// 成功时填充 `translated` 和 `result`，失败时填充 `error`，
/// 二者有且仅有其一。
#[derive(Debug, Clone, Serialize)]
pub struct BatchUnit {
    /// 在原始请求列表中的位置（从零开始）
    pub index: usize,
    /// 原始文本
    pub original: String,
    /// 翻译后的文本
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated: Option<String>,
    /// 提供方完整结果
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<TranslatedText>,
    /// 失败原因
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchUnit {
    fn success(index: usize, original: String, outcome: TranslatedText) -> Self {
        Self {
            index,
            original,
            translated: Some(outcome.translation.clone()),
            result: Some(outcome),
            error: None,
        }
    }

    fn failure(index: usize, original: String, error: &TranslationError) -> Self {
        Self {
            index,
            original,
            translated: None,
            result: None,
            error: Some(error.to_string()),
        }
    }

    /// 该条目是否翻译成功
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// 批量翻译聚合报告
///
/// 不变式: `success + failed == count == 输入文本数`，
/// `results` 按原始索引排列，与底层调用的完成顺序无关。
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// 文本总数
    pub count: usize,
    /// 成功条数
    pub success: usize,
    /// 失败条数
    pub failed: usize,
    /// 按输入顺序排列的逐条结果
    pub results: Vec<BatchUnit>,
}

/// 规范化 `texts` 字段
///
/// 接受两种输入形态: 字符串数组，或编码成字符串的 JSON 数组
/// （兼容的历史输入形态）。先解码再校验，任何不合法输入在
/// 发起翻译之前即失败，不产生副作用。
pub fn normalize_texts(value: Option<Value>) -> TranslationResult<Vec<String>> {
    let value = match value {
        None | Some(Value::Null) => {
            return Err(TranslationError::InvalidInput(
                "请提供有效的文本数组（texts）".to_string(),
            ))
        }
        Some(value) => value,
    };

    let items = match value {
        Value::Array(items) => items,
        Value::String(encoded) => match serde_json::from_str::<Value>(&encoded) {
            Ok(Value::Array(items)) => items,
            Ok(_) => {
                return Err(TranslationError::InvalidInput(
                    "请提供有效的文本数组（texts）".to_string(),
                ))
            }
            Err(e) => {
                tracing::debug!("texts 字段 JSON 解码失败: {}", e);
                return Err(TranslationError::InvalidInput(
                    "texts 字段不是有效的 JSON 数组".to_string(),
                ));
            }
        },
        _ => {
            return Err(TranslationError::InvalidInput(
                "请提供有效的文本数组（texts）".to_string(),
            ))
        }
    };

    if items.is_empty() {
        return Err(TranslationError::InvalidInput(
            "请提供有效的文本数组（texts）".to_string(),
        ));
    }

    items
        .into_iter()
        .map(|item| match item {
            Value::String(text) => Ok(text),
            _ => Err(TranslationError::InvalidInput(
                "文本数组必须包含字符串元素".to_string(),
            )),
        })
        .collect()
}

/// 并发翻译一组文本并汇总结果
///
/// 每条文本独立调用提供方，单条失败被就地转换为该条目的
/// `error` 终态，不会中止其余调用，也不会使整个请求失败。
/// 在所有调用落定后才构造报告（汇合点，而非竞速）。
pub async fn translate_batch(
    provider: &dyn TranslationProvider,
    texts: &[String],
    from: &str,
    to: &str,
) -> BatchReport {
    tracing::info!("开始批量翻译: {} 条文本, {} -> {}", texts.len(), from, to);

    let tasks = texts.iter().enumerate().map(|(index, text)| async move {
        match provider.translate(text, from, to).await {
            Ok(outcome) => BatchUnit::success(index, text.clone(), outcome),
            Err(e) => {
                tracing::warn!("第 {} 条文本翻译失败: {}", index, e);
                BatchUnit::failure(index, text.clone(), &e)
            }
        }
    });

    let mut results = join_all(tasks).await;

    // 按原始索引重建输出顺序
    results.sort_by_key(|unit| unit.index);

    let success = results.iter().filter(|unit| unit.is_success()).count();
    let failed = results.len() - success;

    tracing::info!(
        "批量翻译完成: 总数 {}, 成功 {}, 失败 {}",
        results.len(),
        success,
        failed
    );

    BatchReport {
        count: results.len(),
        success,
        failed,
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_texts_accepts_string_array() {
        let texts = normalize_texts(Some(json!(["a", "b"]))).unwrap();
        assert_eq!(texts, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_normalize_texts_decodes_encoded_array() {
        let texts = normalize_texts(Some(json!(r#"["a","b"]"#))).unwrap();
        assert_eq!(texts, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_normalize_texts_rejects_missing_field() {
        assert!(normalize_texts(None).unwrap_err().is_validation());
        assert!(normalize_texts(Some(Value::Null))
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_normalize_texts_rejects_empty_array() {
        let error = normalize_texts(Some(json!([]))).unwrap_err();
        assert!(error.is_validation());
        assert!(error.to_string().contains("texts"));
    }

    #[test]
    fn test_normalize_texts_rejects_non_string_elements() {
        let error = normalize_texts(Some(json!(["a", 1]))).unwrap_err();
        assert!(error.is_validation());
        assert!(error.to_string().contains("字符串"));
    }

    #[test]
    fn test_normalize_texts_rejects_malformed_encoded_json() {
        let error = normalize_texts(Some(json!(r#"["a", "#))).unwrap_err();
        assert!(error.is_validation());
    }

    #[test]
    fn test_normalize_texts_rejects_encoded_non_array() {
        let error = normalize_texts(Some(json!(r#"{"a":1}"#))).unwrap_err();
        assert!(error.is_validation());
    }

    #[test]
    fn test_normalize_texts_rejects_scalar() {
        let error = normalize_texts(Some(json!(42))).unwrap_err();
        assert!(error.is_validation());
    }

    #[test]
    fn test_normalize_texts_keeps_empty_strings() {
        // 空字符串是合法的文本单元，由提供方决定如何处理
        let texts = normalize_texts(Some(json!(["", "b"]))).unwrap();
        assert_eq!(texts[0], "");
    }
}
