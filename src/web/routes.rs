//! Web 路由定义

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::web::{handlers::*, types::AppState};

/// 创建路由表
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // 服务说明
        .route("/", get(service_info))
        // 翻译端点
        .route("/translate", get(translate_get).post(translate_post))
        .route("/translate/batch", post(batch_translate))
        // 语言检测与语言表
        .route("/detect", get(detect_get).post(detect_post))
        .route("/languages", get(list_languages).post(list_languages))
}
