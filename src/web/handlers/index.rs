//! 根路由处理器

use axum::response::Json;
use serde_json::Value;

/// GET /
///
/// 返回服务说明和端点列表。
pub async fn service_info() -> Json<Value> {
    Json(serde_json::json!({
        "message": "Bing Translate API 服务",
        "endpoints": {
            "/translate": "GET/POST - 翻译单个文本",
            "/translate/batch": "POST - 批量翻译多个文本",
            "/detect": "GET/POST - 检测语言",
            "/languages": "GET/POST - 获取支持的语言列表"
        },
        "参数说明": {
            "translate": {
                "text": "要翻译的文本（必填）",
                "from": "源语言代码（可选，默认自动检测）",
                "to": "目标语言代码（可选，默认'en'）"
            },
            "translate/batch": {
                "texts": "要翻译的文本数组（必填，例如: [\"text1\", \"text2\"]）",
                "from": "源语言代码（可选，默认自动检测）",
                "to": "目标语言代码（可选，默认'zh-Hans'）"
            },
            "detect": {
                "text": "要检测语言的文本（必填）"
            }
        }
    }))
}
