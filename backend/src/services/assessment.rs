//! Assessment service
//!
//! Runs the scoring engine for API callers and persists full assessments
//! as category values so they share the storage and history of other data.

use crate::cache::{data_key, DataCache};
use crate::error::ApiError;
use crate::repositories::DataRepository;
use crate::services::DataService;
use crate::telemetry;
use anyhow::Context;
use chrono::Utc;
use prakriti_shared::types::{
    AssessmentRequest, DataRecord, LifestyleRiskRequest, RiskPredictionRequest, StoredAssessment,
};
use prakriti_shared::{
    assess, compute_profile, predict_risks, score_lifestyle_risk, ConstitutionProfile,
    HealthAttributes, LifestyleRiskReport, RiskFinding,
};
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;

pub const HEALTH_ATTRIBUTES: &str = "health_attributes";
pub const LIFESTYLE: &str = "lifestyle";
pub const CONSTITUTION: &str = "constitution";
pub const RISK_PREDICTIONS: &str = "risk_predictions";
pub const LIFESTYLE_RISK: &str = "lifestyle_risk";
pub const ASSESSMENT_REPORT: &str = "assessment_report";

/// Categories written by a full assessment
pub const ASSESSMENT_CATEGORIES: [&str; 6] = [
    HEALTH_ATTRIBUTES,
    LIFESTYLE,
    CONSTITUTION,
    RISK_PREDICTIONS,
    LIFESTYLE_RISK,
    ASSESSMENT_REPORT,
];

pub struct AssessmentService;

impl AssessmentService {
    pub fn profile(attrs: &HealthAttributes) -> Result<ConstitutionProfile, ApiError> {
        let profile = compute_profile(attrs)?;
        debug!(
            vata = profile.vata,
            pitta = profile.pitta,
            kapha = profile.kapha,
            "Computed constitution profile"
        );
        Ok(profile)
    }

    pub fn risks(request: &RiskPredictionRequest) -> Result<Vec<RiskFinding>, ApiError> {
        let findings = predict_risks(&request.profile, &request.lifestyle, &request.attributes)?;
        telemetry::record_risk_findings(&findings);
        debug!(findings = findings.len(), "Predicted risks");
        Ok(findings)
    }

    pub fn lifestyle_risk(request: &LifestyleRiskRequest) -> Result<LifestyleRiskReport, ApiError> {
        Ok(score_lifestyle_risk(&request.lifestyle, &request.attributes)?)
    }

    /// Run every engine and persist inputs and outputs in one transaction
    pub async fn run_and_store(
        pool: &PgPool,
        cache: &DataCache,
        user_id: Uuid,
        request: AssessmentRequest,
    ) -> Result<StoredAssessment, ApiError> {
        let report = assess(&request.attributes, &request.lifestyle)?;
        let stored = StoredAssessment {
            assessed_at: Utc::now(),
            report,
        };

        let entries = stored_entries(&request, &stored).map_err(ApiError::Internal)?;
        let records = DataRepository::save_many(pool, user_id, &entries)
            .await
            .map_err(ApiError::Internal)?;

        for record in records.into_iter().map(DataRecord::from) {
            cache.set(&data_key(user_id, &record.category), &Some(&record)).await;
            telemetry::record_data_write(&record.category);
        }
        telemetry::record_assessment();
        telemetry::record_risk_findings(&stored.report.risks);

        info!(
            %user_id,
            dominant = %stored.report.dominant_dosha,
            risks = stored.report.risks.len(),
            lifestyle_risk = stored.report.lifestyle_risk.overall_risk,
            "Stored assessment"
        );

        Ok(stored)
    }

    /// Most recently stored assessment
    pub async fn latest(
        pool: &PgPool,
        cache: &DataCache,
        user_id: Uuid,
    ) -> Result<StoredAssessment, ApiError> {
        let record = DataService::get(pool, cache, user_id, ASSESSMENT_REPORT)
            .await
            .map_err(|e| match e {
                ApiError::NotFound(_) => ApiError::NotFound("No assessment stored yet".to_string()),
                other => other,
            })?;

        serde_json::from_value(record.data)
            .context("Stored assessment report is malformed")
            .map_err(ApiError::Internal)
    }
}

/// Category payloads written for one assessment
fn stored_entries(
    request: &AssessmentRequest,
    stored: &StoredAssessment,
) -> anyhow::Result<Vec<(&'static str, serde_json::Value)>> {
    Ok(vec![
        (HEALTH_ATTRIBUTES, serde_json::to_value(&request.attributes)?),
        (LIFESTYLE, serde_json::to_value(&request.lifestyle)?),
        (CONSTITUTION, serde_json::to_value(stored.report.profile)?),
        (RISK_PREDICTIONS, serde_json::to_value(&stored.report.risks)?),
        (LIFESTYLE_RISK, serde_json::to_value(&stored.report.lifestyle_risk)?),
        (ASSESSMENT_REPORT, serde_json::to_value(stored)?),
    ])
}
