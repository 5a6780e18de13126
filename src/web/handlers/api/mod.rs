//! API 处理器

pub mod cache;
pub mod dictionary;

pub use cache::*;
pub use dictionary::*;

use axum::{http::StatusCode, response::Json};

use crate::error::{DictionaryError, ErrorCategory};

/// 处理器统一的错误响应
pub type ApiError = (StatusCode, Json<serde_json::Value>);

/// 将词典错误映射为 HTTP 状态码和 JSON 错误体
pub fn error_response(error: DictionaryError) -> ApiError {
    let status = match error.category() {
        ErrorCategory::Input => StatusCode::BAD_REQUEST,
        ErrorCategory::Unsupported => StatusCode::NOT_IMPLEMENTED,
        ErrorCategory::Store => StatusCode::BAD_GATEWAY,
        ErrorCategory::Construction => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        tracing::error!("请求处理失败: {}", error);
    } else {
        tracing::debug!("请求被拒绝: {}", error);
    }

    (
        status,
        Json(serde_json::json!({
            "error": true,
            "message": error.to_string()
        })),
    )
}
