// 集成测试公共模块
//
// 提供模拟翻译提供方和测试服务器辅助工具

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use bing_translate_server::translation::error::{TranslationError, TranslationResult};
use bing_translate_server::translation::provider::{
    DetectedLanguage, LanguageInfo, TranslatedText, TranslationProvider,
};
use bing_translate_server::web::{create_router, AppState};

/// 模拟翻译提供方
///
/// 默认把每条文本翻译为 `译:<原文>`；可以按文本内容注入失败，
/// 按索引位置注入延迟，用于模拟乱序完成的并发调用。
pub struct MockProvider {
    /// 翻译失败的文本 -> 错误消息
    failures: HashMap<String, String>,
    /// 各文本的人工延迟（按调用时文本查找）
    delays: HashMap<String, Duration>,
    /// 语言检测返回值
    detect_language: String,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            failures: HashMap::new(),
            delays: HashMap::new(),
            detect_language: "en".to_string(),
        }
    }

    /// 指定某条文本翻译失败
    pub fn fail_on(mut self, text: &str, message: &str) -> Self {
        self.failures.insert(text.to_string(), message.to_string());
        self
    }

    /// 指定某条文本的处理延迟
    pub fn delay_on(mut self, text: &str, delay: Duration) -> Self {
        self.delays.insert(text.to_string(), delay);
        self
    }

    /// 指定语言检测的返回值
    pub fn detect_as(mut self, language: &str) -> Self {
        self.detect_language = language.to_string();
        self
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranslationProvider for MockProvider {
    async fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> TranslationResult<TranslatedText> {
        if let Some(delay) = self.delays.get(text) {
            tokio::time::sleep(*delay).await;
        }

        if let Some(message) = self.failures.get(text) {
            return Err(TranslationError::NetworkError(message.clone()));
        }

        let translation = format!("译:{}", text);
        Ok(TranslatedText {
            text: text.to_string(),
            translation: translation.clone(),
            language: LanguageInfo {
                from: from.to_string(),
                to: to.to_string(),
                score: None,
            },
            raw: serde_json::json!([{ "translations": [{ "text": translation, "to": to }] }]),
        })
    }

    async fn detect(&self, text: &str) -> TranslationResult<DetectedLanguage> {
        if let Some(message) = self.failures.get(text) {
            return Err(TranslationError::NetworkError(message.clone()));
        }

        Ok(DetectedLanguage {
            language: self.detect_language.clone(),
            score: Some(1.0),
        })
    }
}

/// 记录型提供方
///
/// 记录每次 translate 调用收到的参数，用于断言默认值替换
/// 和别名改写确实作用到了提供方一侧。
pub struct RecordingProvider {
    pub calls: Mutex<Vec<(String, String, String)>>,
}

impl RecordingProvider {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }

    /// 取出已记录的 (text, from, to) 调用列表
    pub fn recorded(&self) -> Vec<(String, String, String)> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }
}

impl Default for RecordingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranslationProvider for RecordingProvider {
    async fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> TranslationResult<TranslatedText> {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push((text.to_string(), from.to_string(), to.to_string()));

        Ok(TranslatedText {
            text: text.to_string(),
            translation: format!("译:{}", text),
            language: LanguageInfo {
                from: from.to_string(),
                to: to.to_string(),
                score: None,
            },
            raw: serde_json::Value::Null,
        })
    }

    async fn detect(&self, _text: &str) -> TranslationResult<DetectedLanguage> {
        Ok(DetectedLanguage {
            language: "en".to_string(),
            score: Some(1.0),
        })
    }
}

/// 在随机端口上启动测试服务器，返回根地址
pub async fn spawn_server(provider: Arc<dyn TranslationProvider>) -> String {
    let app_state = Arc::new(AppState { provider });
    let app = create_router(app_state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr: SocketAddr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });

    format!("http://{}", addr)
}
