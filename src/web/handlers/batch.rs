//! 批量翻译处理器

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::translation::batch::{normalize_texts, translate_batch, BatchReport};
use crate::translation::config::resolve_batch_langs;
use crate::translation::error::TranslationError;
use crate::web::types::{
    internal_error, validation_error, ApiError, AppState, BatchTranslateRequest,
};

/// POST /translate/batch
///
/// 校验失败返回 400；单条翻译失败只体现在对应条目上，
/// 聚合结果始终以 200 返回。
pub async fn batch_translate(
    State(state): State<Arc<AppState>>,
    body: Option<Json<BatchTranslateRequest>>,
) -> Result<Json<BatchReport>, ApiError> {
    let request = body.map(|Json(body)| body).unwrap_or_default();

    let texts = normalize_texts(request.texts).map_err(|e| match e {
        TranslationError::InvalidInput(message) => validation_error(&message),
        other => {
            tracing::error!("批量翻译错误: {}", other);
            internal_error("批量翻译服务出错", other)
        }
    })?;

    let langs = resolve_batch_langs(request.from, request.to);

    let report = translate_batch(state.provider.as_ref(), &texts, &langs.from, &langs.to).await;

    Ok(Json(report))
}
