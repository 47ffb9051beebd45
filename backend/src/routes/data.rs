//! Category storage routes
//!
//! Every handler is scoped to the authenticated user.

use crate::auth::AuthUser;
use crate::error::{ApiJson, ApiResult};
use crate::services::DataService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use prakriti_shared::types::{DataRecord, DeletionSummary, HistoryEntry, HistoryQuery};

/// Create data routes
pub fn data_routes() -> Router<AppState> {
    Router::new()
        .route("/", axum::routing::delete(delete_all_data))
        .route(
            "/:category",
            get(get_data).put(put_data).delete(delete_data),
        )
        .route("/:category/history", get(get_history))
}

/// GET /api/v1/data/:category
async fn get_data(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(category): Path<String>,
) -> ApiResult<Json<DataRecord>> {
    let record = DataService::get(state.db(), state.cache(), auth.user_id, &category).await?;
    Ok(Json(record))
}

/// PUT /api/v1/data/:category
async fn put_data(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(category): Path<String>,
    ApiJson(data): ApiJson<serde_json::Value>,
) -> ApiResult<Json<DataRecord>> {
    let record =
        DataService::put(state.db(), state.cache(), auth.user_id, &category, data).await?;
    Ok(Json(record))
}

/// DELETE /api/v1/data/:category
async fn delete_data(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(category): Path<String>,
) -> ApiResult<StatusCode> {
    DataService::delete(state.db(), state.cache(), auth.user_id, &category).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/data/:category/history?limit=
async fn get_history(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(category): Path<String>,
    Query(query): Query<HistoryQuery>,
) -> ApiResult<Json<Vec<HistoryEntry>>> {
    let entries = DataService::history(state.db(), auth.user_id, &category, query.limit).await?;
    Ok(Json(entries))
}

/// DELETE /api/v1/data
async fn delete_all_data(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<DeletionSummary>> {
    let summary = DataService::delete_all(state.db(), state.cache(), auth.user_id).await?;
    Ok(Json(summary))
}
