//! 缓存相关API处理器

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::web::types::{AppState, CacheStatsResponse};

/// 获取缓存统计信息
pub async fn get_cache_stats(State(state): State<Arc<AppState>>) -> Json<CacheStatsResponse> {
    let backend = &state.backend;
    Json(CacheStatsResponse::new(backend.name(), backend.stats()))
}

/// 清理缓存
pub async fn clear_cache(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let removed = state.backend.clear_cache();
    tracing::info!("已清理 {} 条缓存记录", removed);

    Json(serde_json::json!({
        "success": true,
        "removed": removed,
        "message": format!("已清理 {} 条缓存记录", removed)
    }))
}
