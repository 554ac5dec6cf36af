//! 翻译参数配置
//!
//! 语言默认值、别名规则和必应客户端配置。
//! 所有默认值在请求入口处解析一次，处理逻辑中不再出现散落的字面量。

use std::time::Duration;

/// 语言参数常量
pub mod defaults {
    /// 自动检测源语言的哨兵值
    pub const AUTO_DETECT: &str = "auto-detect";
    /// 单文本翻译的默认目标语言
    pub const TARGET_LANG: &str = "en";
    /// 批量翻译的默认目标语言
    pub const BATCH_TARGET_LANG: &str = "zh-Hans";
}

/// 单次请求解析后的语言参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLangs {
    /// 源语言代码
    pub from: String,
    /// 目标语言代码
    pub to: String,
}

/// 解析单文本翻译的语言参数
///
/// 缺省时源语言为自动检测，目标语言为 `en`。
pub fn resolve_langs(from: Option<String>, to: Option<String>) -> RequestLangs {
    RequestLangs {
        from: from.unwrap_or_else(|| defaults::AUTO_DETECT.to_string()),
        to: to.unwrap_or_else(|| defaults::TARGET_LANG.to_string()),
    }
}

/// 解析批量翻译的语言参数
///
/// 缺省目标语言为 `zh-Hans`，并将常见的 `zh-CN` 别名改写为
/// 必应的规范简体代码。仅此一条别名规则，不做通用区域处理。
pub fn resolve_batch_langs(from: Option<String>, to: Option<String>) -> RequestLangs {
    let to = to.unwrap_or_else(|| defaults::BATCH_TARGET_LANG.to_string());

    RequestLangs {
        from: from.unwrap_or_else(|| defaults::AUTO_DETECT.to_string()),
        to: normalize_target_alias(to),
    }
}

/// 目标语言别名改写: `zh-CN` -> `zh-Hans`
pub fn normalize_target_alias(to: String) -> String {
    if to == "zh-CN" {
        "zh-Hans".to_string()
    } else {
        to
    }
}

/// 必应翻译客户端配置
#[derive(Debug, Clone)]
pub struct BingConfig {
    /// 必应站点基础地址
    pub base_url: String,
    /// 请求使用的 User-Agent
    pub user_agent: String,
    /// 单次请求超时时间
    pub request_timeout: Duration,
}

impl BingConfig {
    /// 从环境变量创建配置，未设置的项使用默认值
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("BING_BASE_URL") {
            if !base_url.is_empty() {
                config.base_url = base_url;
            }
        }

        if let Ok(user_agent) = std::env::var("BING_USER_AGENT") {
            if !user_agent.is_empty() {
                config.user_agent = user_agent;
            }
        }

        if let Ok(timeout) = std::env::var("BING_REQUEST_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) if secs > 0 => config.request_timeout = Duration::from_secs(secs),
                _ => tracing::warn!("无效的 BING_REQUEST_TIMEOUT_SECS: {}, 使用默认值", timeout),
            }
        }

        config
    }
}

impl Default for BingConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.bing.com".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36"
                .to_string(),
            request_timeout: Duration::from_secs(15),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_langs_defaults() {
        let langs = resolve_langs(None, None);
        assert_eq!(langs.from, "auto-detect");
        assert_eq!(langs.to, "en");
    }

    #[test]
    fn test_resolve_langs_explicit() {
        let langs = resolve_langs(Some("ja".to_string()), Some("fr".to_string()));
        assert_eq!(langs.from, "ja");
        assert_eq!(langs.to, "fr");
    }

    #[test]
    fn test_resolve_batch_langs_defaults() {
        let langs = resolve_batch_langs(None, None);
        assert_eq!(langs.from, "auto-detect");
        assert_eq!(langs.to, "zh-Hans");
    }

    #[test]
    fn test_batch_target_alias_rewritten() {
        let langs = resolve_batch_langs(None, Some("zh-CN".to_string()));
        assert_eq!(langs.to, "zh-Hans");
    }

    #[test]
    fn test_batch_target_other_codes_untouched() {
        let langs = resolve_batch_langs(None, Some("zh-Hant".to_string()));
        assert_eq!(langs.to, "zh-Hant");

        let langs = resolve_batch_langs(None, Some("de".to_string()));
        assert_eq!(langs.to, "de");
    }

    #[test]
    fn test_bing_config_default() {
        let config = BingConfig::default();
        assert_eq!(config.base_url, "https://www.bing.com");
        assert_eq!(config.request_timeout, Duration::from_secs(15));
    }
}
