//! 词典查询与自动补全处理器

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Json as ExtractJson, Query, State,
    },
    response::Json,
};

use super::{error_response, ApiError};
use crate::error::DictionaryError;
use crate::types::LookupOutcome;
use crate::web::types::{AppState, SuggestionsResponse, WordRequest};

/// 请求体或查询串无法解析时按输入错误返回 JSON 错误体
fn rejected(reason: String) -> ApiError {
    error_response(DictionaryError::invalid_input(reason))
}

fn json_request(request: Result<ExtractJson<WordRequest>, JsonRejection>) -> Result<WordRequest, ApiError> {
    request
        .map(|ExtractJson(request)| request)
        .map_err(|rejection| rejected(rejection.body_text()))
}

fn query_request(request: Result<Query<WordRequest>, QueryRejection>) -> Result<WordRequest, ApiError> {
    request
        .map(|Query(request)| request)
        .map_err(|rejection| rejected(rejection.body_text()))
}

async fn search(state: &AppState, request: WordRequest) -> Result<Json<LookupOutcome>, ApiError> {
    let word = request.word.unwrap_or_default();
    state
        .backend
        .lookup(&word)
        .await
        .map(Json)
        .map_err(error_response)
}

fn autofill(state: &AppState, request: WordRequest) -> Result<Json<SuggestionsResponse>, ApiError> {
    let prefix = request.word.unwrap_or_default();
    let suggestions = state.backend.suggest(&prefix).map_err(error_response)?;
    Ok(Json(SuggestionsResponse { suggestions }))
}

/// GET /search?word=...
pub async fn search_query(
    State(state): State<Arc<AppState>>,
    request: Result<Query<WordRequest>, QueryRejection>,
) -> Result<Json<LookupOutcome>, ApiError> {
    search(&state, query_request(request)?).await
}

/// POST /search，请求体 `{"word": "..."}`
pub async fn search_json(
    State(state): State<Arc<AppState>>,
    request: Result<ExtractJson<WordRequest>, JsonRejection>,
) -> Result<Json<LookupOutcome>, ApiError> {
    search(&state, json_request(request)?).await
}

/// GET /autofill?word=...
pub async fn autofill_query(
    State(state): State<Arc<AppState>>,
    request: Result<Query<WordRequest>, QueryRejection>,
) -> Result<Json<SuggestionsResponse>, ApiError> {
    autofill(&state, query_request(request)?)
}

/// POST /autofill，请求体 `{"word": "..."}`
pub async fn autofill_json(
    State(state): State<Arc<AppState>>,
    request: Result<ExtractJson<WordRequest>, JsonRejection>,
) -> Result<Json<SuggestionsResponse>, ApiError> {
    autofill(&state, json_request(request)?)
}
