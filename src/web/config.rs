//! Web 服务器配置

use crate::translation::error::{TranslationError, TranslationResult};

/// Web 服务器配置
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// 绑定地址
    pub bind_addr: String,
    /// 端口
    pub port: u16,
}

impl WebConfig {
    /// 从环境变量创建配置
    ///
    /// 端口读取 `PORT`（默认 3000），绑定地址读取 `BIND_ADDRESS`。
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(bind_addr) = std::env::var("BIND_ADDRESS") {
            if !bind_addr.is_empty() {
                config.bind_addr = bind_addr;
            }
        }

        if let Ok(port) = std::env::var("PORT") {
            match port.parse::<u16>() {
                Ok(port) if port > 0 => config.port = port,
                _ => tracing::warn!("无效的 PORT 值: {}, 使用默认端口 {}", port, config.port),
            }
        }

        config
    }

    /// 验证配置
    pub fn validate(&self) -> TranslationResult<()> {
        if self.bind_addr.is_empty() {
            return Err(TranslationError::ConfigError(
                "绑定地址不能为空".to_string(),
            ));
        }

        if self.port == 0 {
            return Err(TranslationError::ConfigError("端口不能为 0".to_string()));
        }

        Ok(())
    }

    /// 获取完整的监听地址
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}
