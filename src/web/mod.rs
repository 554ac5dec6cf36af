//! Web 服务器模块
//!
//! 将翻译提供方包装为 JSON API 服务

pub mod config;
pub mod handlers;
pub mod routes;
pub mod types;

pub use config::*;
pub use routes::*;
pub use types::*;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;

use crate::translation::error::{TranslationError, TranslationResult};
use crate::translation::provider::TranslationProvider;

/// Web 服务器
pub struct WebServer {
    config: WebConfig,
    provider: Arc<dyn TranslationProvider>,
}

impl WebServer {
    /// 创建新的 Web 服务器
    pub fn new(config: WebConfig, provider: Arc<dyn TranslationProvider>) -> Self {
        Self { config, provider }
    }

    /// 启动 Web 服务器
    pub async fn start(&self) -> TranslationResult<()> {
        let app_state = Arc::new(AppState {
            provider: self.provider.clone(),
        });

        let app = create_router(app_state);

        let listener = tokio::net::TcpListener::bind(self.config.listen_address())
            .await
            .map_err(|e| TranslationError::ServerError(format!("绑定监听地址失败: {}", e)))?;

        tracing::info!(
            "Bing Translate API 服务运行在 http://{}",
            self.config.listen_address()
        );

        axum::serve(listener, app)
            .await
            .map_err(|e| TranslationError::ServerError(format!("服务器运行错误: {}", e)))?;

        Ok(())
    }
}

/// 创建路由器
///
/// 允许跨域请求，便于浏览器端直接调用。
pub fn create_router(app_state: Arc<AppState>) -> Router {
    create_routes()
        .with_state(app_state)
        .layer(CorsLayer::permissive())
}
