//! 支持语言列表处理器

use axum::response::Json;
use serde_json::Value;

use crate::translation::languages;

/// GET|POST /languages
///
/// 语言表是静态数据，直接返回，不经过提供方。
pub async fn list_languages() -> Json<Value> {
    Json(languages::language_map())
}
