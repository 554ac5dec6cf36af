//! 语言检测处理器

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Json,
};

use crate::translation::provider::DetectedLanguage;
use crate::web::types::{internal_error, validation_error, ApiError, AppState, TranslateParams};

/// GET /detect
pub async fn detect_get(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TranslateParams>,
) -> Result<Json<DetectedLanguage>, ApiError> {
    run_detect(state, params).await
}

/// POST /detect
pub async fn detect_post(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TranslateParams>,
    body: Option<Json<TranslateParams>>,
) -> Result<Json<DetectedLanguage>, ApiError> {
    let params = TranslateParams::merged(query, body.map(|Json(body)| body));
    run_detect(state, params).await
}

async fn run_detect(
    state: Arc<AppState>,
    params: TranslateParams,
) -> Result<Json<DetectedLanguage>, ApiError> {
    let text = match params.text.filter(|text| !text.is_empty()) {
        Some(text) => text,
        None => return Err(validation_error("请提供要检测语言的文本")),
    };

    match state.provider.detect(&text).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            tracing::error!("语言检测错误: {}", e);
            Err(internal_error("语言检测服务出错", e))
        }
    }
}
