//! API request and response types

use crate::assessment::AssessmentReport;
use crate::models::{ConstitutionProfile, HealthAttributes, LifestyleAttributes};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

// ============================================================================
// Authentication Types
// ============================================================================

/// Authentication tokens response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,
}

/// User profile response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Stored Data Types
// ============================================================================

/// Latest value stored under a category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataRecord {
    pub category: String,
    pub data: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}

/// One entry of a category's history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub category: String,
    pub data: serde_json::Value,
    pub recorded_at: DateTime<Utc>,
}

/// History query parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Rows removed when erasing a user's data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeletionSummary {
    pub records: u64,
    pub history_entries: u64,
}

impl DeletionSummary {
    /// Total rows removed
    pub fn total(&self) -> u64 {
        self.records + self.history_entries
    }
}

// ============================================================================
// Assessment Types
// ============================================================================

/// Input for the risk predictor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskPredictionRequest {
    pub profile: ConstitutionProfile,
    pub lifestyle: LifestyleAttributes,
    pub attributes: HealthAttributes,
}

/// Input for the lifestyle risk scorer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifestyleRiskRequest {
    pub lifestyle: LifestyleAttributes,
    pub attributes: HealthAttributes,
}

/// Full questionnaire submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRequest {
    pub attributes: HealthAttributes,
    pub lifestyle: LifestyleAttributes,
}

/// Persisted assessment with its timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredAssessment {
    pub assessed_at: DateTime<Utc>,
    pub report: AssessmentReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let ok = RegisterRequest {
            email: "user@example.com".to_string(),
            password: "password123".to_string(),
        };
        assert!(ok.validate().is_ok());

        let bad_email = RegisterRequest {
            email: "not-an-email".to_string(),
            password: "password123".to_string(),
        };
        assert!(bad_email.validate().is_err());

        let short_password = RegisterRequest {
            email: "user@example.com".to_string(),
            password: "short".to_string(),
        };
        let errors = short_password.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_deletion_summary_total() {
        let summary = DeletionSummary {
            records: 3,
            history_entries: 12,
        };
        assert_eq!(summary.total(), 15);
        assert_eq!(DeletionSummary::default().total(), 0);
    }

    #[test]
    fn test_history_query_defaults() {
        let query: HistoryQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.limit, None);
    }
}
