//! Assessment routes
//!
//! The three engine endpoints are stateless; `POST /` also persists the
//! report for the authenticated user.

use crate::auth::AuthUser;
use crate::error::{ApiJson, ApiResult};
use crate::services::AssessmentService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use prakriti_shared::types::{
    AssessmentRequest, LifestyleRiskRequest, RiskPredictionRequest, StoredAssessment,
};
use prakriti_shared::{ConstitutionProfile, HealthAttributes, LifestyleRiskReport, RiskFinding};

/// Create assessment routes
pub fn assessment_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(run_assessment))
        .route("/latest", get(latest_assessment))
        .route("/profile", post(compute_profile))
        .route("/risks", post(predict_risks))
        .route("/lifestyle-risk", post(lifestyle_risk))
}

/// POST /api/v1/assessment/profile
async fn compute_profile(
    _auth: AuthUser,
    ApiJson(attrs): ApiJson<HealthAttributes>,
) -> ApiResult<Json<ConstitutionProfile>> {
    Ok(Json(AssessmentService::profile(&attrs)?))
}

/// POST /api/v1/assessment/risks
async fn predict_risks(
    _auth: AuthUser,
    ApiJson(req): ApiJson<RiskPredictionRequest>,
) -> ApiResult<Json<Vec<RiskFinding>>> {
    Ok(Json(AssessmentService::risks(&req)?))
}

/// POST /api/v1/assessment/lifestyle-risk
async fn lifestyle_risk(
    _auth: AuthUser,
    ApiJson(req): ApiJson<LifestyleRiskRequest>,
) -> ApiResult<Json<LifestyleRiskReport>> {
    Ok(Json(AssessmentService::lifestyle_risk(&req)?))
}

/// POST /api/v1/assessment
async fn run_assessment(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(req): ApiJson<AssessmentRequest>,
) -> ApiResult<(StatusCode, Json<StoredAssessment>)> {
    let stored =
        AssessmentService::run_and_store(state.db(), state.cache(), auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// GET /api/v1/assessment/latest
async fn latest_assessment(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<StoredAssessment>> {
    let stored = AssessmentService::latest(state.db(), state.cache(), auth.user_id).await?;
    Ok(Json(stored))
}
