//! 单文本翻译处理器

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Json,
};

use crate::translation::config::resolve_langs;
use crate::translation::provider::TranslatedText;
use crate::web::types::{internal_error, validation_error, ApiError, AppState, TranslateParams};

/// GET /translate
pub async fn translate_get(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TranslateParams>,
) -> Result<Json<TranslatedText>, ApiError> {
    run_translate(state, params).await
}

/// POST /translate
///
/// 同时接受查询参数和 JSON 请求体，请求体字段优先。
pub async fn translate_post(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TranslateParams>,
    body: Option<Json<TranslateParams>>,
) -> Result<Json<TranslatedText>, ApiError> {
    let params = TranslateParams::merged(query, body.map(|Json(body)| body));
    run_translate(state, params).await
}

async fn run_translate(
    state: Arc<AppState>,
    params: TranslateParams,
) -> Result<Json<TranslatedText>, ApiError> {
    let text = match params.text.filter(|text| !text.is_empty()) {
        Some(text) => text,
        None => return Err(validation_error("请提供要翻译的文本")),
    };

    let langs = resolve_langs(params.from, params.to);

    match state.provider.translate(&text, &langs.from, &langs.to).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            tracing::error!("翻译错误: {}", e);
            Err(internal_error("翻译服务出错", e))
        }
    }
}
