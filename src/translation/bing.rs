//! 必应翻译客户端
//!
//! 通过必应网页版翻译接口实现 [`TranslationProvider`]。
//! 首先抓取翻译页面获取 IG、IID 和防滥用令牌，令牌在有效期内
//! 缓存复用，之后通过 `ttranslatev3` 接口完成翻译与语言检测。

use std::time::{Duration, Instant};

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use serde_json::Value;
use tokio::sync::Mutex;
use url::Url;

use crate::translation::config::{defaults, BingConfig};
use crate::translation::error::{TranslationError, TranslationResult};
use crate::translation::provider::{
    DetectedLanguage, LanguageInfo, TranslatedText, TranslationProvider,
};

/// 令牌提前刷新余量，避免在临界点使用将要过期的令牌
const SESSION_EXPIRY_MARGIN: Duration = Duration::from_secs(60);

/// 必应令牌失效时返回的状态码
const TOKEN_EXPIRED_STATUS: i32 = 205;

/// 从翻译页面抓取的会话参数
#[derive(Debug, Clone)]
struct BingSession {
    ig: String,
    iid: String,
    key: u64,
    token: String,
    expires_at: Instant,
}

impl BingSession {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// 必应翻译客户端
pub struct BingTranslator {
    client: Client,
    config: BingConfig,
    session: Mutex<Option<BingSession>>,
}

impl BingTranslator {
    /// 创建新的必应翻译客户端
    pub fn new(config: BingConfig) -> TranslationResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .pool_idle_timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(5)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| TranslationError::ConfigError(format!("创建HTTP客户端失败: {}", e)))?;

        Ok(Self {
            client,
            config,
            session: Mutex::new(None),
        })
    }

    fn endpoint(&self, path: &str) -> TranslationResult<Url> {
        Url::parse(&self.config.base_url)
            .and_then(|base| base.join(path))
            .map_err(|e| {
                TranslationError::ConfigError(format!(
                    "无效的基础地址 {}: {}",
                    self.config.base_url, e
                ))
            })
    }

    /// 获取可用的会话参数，过期时重新抓取
    async fn session(&self) -> TranslationResult<BingSession> {
        let mut guard = self.session.lock().await;

        if let Some(session) = guard.as_ref() {
            if !session.is_expired() {
                return Ok(session.clone());
            }
            tracing::debug!("必应会话令牌已过期，重新获取");
        }

        let session = self.fetch_session().await?;
        *guard = Some(session.clone());
        Ok(session)
    }

    async fn invalidate_session(&self) {
        let mut guard = self.session.lock().await;
        *guard = None;
    }

    async fn fetch_session(&self) -> TranslationResult<BingSession> {
        let url = self.endpoint("translator")?;

        tracing::debug!("抓取必应翻译页面: {}", url);

        let page = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| TranslationError::NetworkError(format!("获取翻译页面失败: {}", e)))?
            .text()
            .await?;

        Self::parse_session(&page)
    }

    /// 从页面内容中解析会话参数
    fn parse_session(page: &str) -> TranslationResult<BingSession> {
        let ig_re = Regex::new(r#"IG:"([^"]+)""#)
            .map_err(|e| TranslationError::InternalError(format!("正则表达式编译失败: {}", e)))?;
        let iid_re = Regex::new(r#"data-iid="([^"]+)""#)
            .map_err(|e| TranslationError::InternalError(format!("正则表达式编译失败: {}", e)))?;
        let helper_re =
            Regex::new(r#"params_AbusePreventionHelper\s*=\s*\[(\d+),\s*"([^"]+)",\s*(\d+)\]"#)
                .map_err(|e| {
                    TranslationError::InternalError(format!("正则表达式编译失败: {}", e))
                })?;

        let ig = ig_re
            .captures(page)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| TranslationError::ParseError("页面中未找到 IG 参数".to_string()))?;

        let iid = iid_re
            .captures(page)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| TranslationError::ParseError("页面中未找到 IID 参数".to_string()))?;

        let helper = helper_re
            .captures(page)
            .ok_or_else(|| TranslationError::ParseError("页面中未找到防滥用令牌".to_string()))?;

        let key = helper[1]
            .parse::<u64>()
            .map_err(|e| TranslationError::ParseError(format!("令牌 key 不是数字: {}", e)))?;
        let token = helper[2].to_string();
        let interval_ms = helper[3]
            .parse::<u64>()
            .map_err(|e| TranslationError::ParseError(format!("令牌有效期不是数字: {}", e)))?;

        let lifetime = Duration::from_millis(interval_ms);
        let expires_at = Instant::now() + lifetime.saturating_sub(SESSION_EXPIRY_MARGIN);

        Ok(BingSession {
            ig,
            iid,
            key,
            token,
            expires_at,
        })
    }

    /// 调用 `ttranslatev3` 接口，返回原始响应载荷
    async fn request_translation(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> TranslationResult<Value> {
        let session = self.session().await?;

        let mut url = self.endpoint("ttranslatev3")?;
        url.query_pairs_mut()
            .append_pair("isVertical", "1")
            .append_pair("IG", &session.ig)
            .append_pair("IID", &session.iid);

        let key = session.key.to_string();
        let form = [
            ("fromLang", from),
            ("to", to),
            ("text", text),
            ("token", session.token.as_str()),
            ("key", key.as_str()),
        ];

        let response = self.client.post(url).form(&form).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "无法读取错误信息".to_string());
            return Err(TranslationError::ApiError {
                code: status.as_u16() as i32,
                message: format!("必应翻译接口请求失败: {} - {}", status, body),
            });
        }

        let payload: Value = response.json().await.map_err(|e| {
            TranslationError::ParseError(format!("必应响应不是有效的 JSON: {}", e))
        })?;

        Self::check_payload(&payload)?;
        Ok(payload)
    }

    /// 检查载荷是否为必应的错误响应
    fn check_payload(payload: &Value) -> TranslationResult<()> {
        if let Some(status) = payload.get("statusCode").and_then(Value::as_i64) {
            return Err(TranslationError::ApiError {
                code: status as i32,
                message: format!("必应翻译接口返回错误状态: {}", status),
            });
        }

        if payload.get("ShowCaptcha").is_some() {
            return Err(TranslationError::ApiError {
                code: 429,
                message: "必应要求验证码，请求被限流".to_string(),
            });
        }

        Ok(())
    }

    /// 带一次令牌刷新重试的翻译请求
    ///
    /// 状态码 205 表示令牌失效，刷新会话后重试一次；其余错误原样返回。
    async fn request_with_refresh(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> TranslationResult<Value> {
        match self.request_translation(text, from, to).await {
            Err(TranslationError::ApiError {
                code: TOKEN_EXPIRED_STATUS,
                ..
            }) => {
                tracing::debug!("会话令牌被拒绝，刷新后重试");
                self.invalidate_session().await;
                self.request_translation(text, from, to).await
            }
            other => other,
        }
    }

    /// 从响应载荷中提取翻译结果
    fn parse_translation(
        payload: Value,
        text: &str,
        from: &str,
        to: &str,
    ) -> TranslationResult<TranslatedText> {
        let first = payload
            .get(0)
            .ok_or_else(|| TranslationError::ParseError("响应中缺少翻译结果".to_string()))?;

        let translation = first
            .pointer("/translations/0/text")
            .and_then(Value::as_str)
            .ok_or_else(|| TranslationError::ParseError("响应中缺少翻译文本".to_string()))?
            .to_string();

        let detected = first
            .pointer("/detectedLanguage/language")
            .and_then(Value::as_str);
        let score = first
            .pointer("/detectedLanguage/score")
            .and_then(Value::as_f64);

        let resolved_from = if from == defaults::AUTO_DETECT {
            detected.unwrap_or(from).to_string()
        } else {
            from.to_string()
        };

        Ok(TranslatedText {
            text: text.to_string(),
            translation,
            language: LanguageInfo {
                from: resolved_from,
                to: to.to_string(),
                score,
            },
            raw: payload,
        })
    }
}

#[async_trait]
impl TranslationProvider for BingTranslator {
    async fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> TranslationResult<TranslatedText> {
        let payload = self.request_with_refresh(text, from, to).await?;
        Self::parse_translation(payload, text, from, to)
    }

    async fn detect(&self, text: &str) -> TranslationResult<DetectedLanguage> {
        // 必应没有独立的检测接口，借助自动检测翻译取得检测结果
        let payload = self
            .request_with_refresh(text, defaults::AUTO_DETECT, defaults::TARGET_LANG)
            .await?;

        let detected = payload
            .pointer("/0/detectedLanguage/language")
            .and_then(Value::as_str)
            .ok_or_else(|| TranslationError::ParseError("响应中缺少语言检测结果".to_string()))?
            .to_string();
        let score = payload
            .pointer("/0/detectedLanguage/score")
            .and_then(Value::as_f64);

        Ok(DetectedLanguage {
            language: detected,
            score,
        })
    }
}
