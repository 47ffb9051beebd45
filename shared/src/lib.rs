//! Prakriti Shared Library
//!
//! Assessment engine and API types shared by the backend and WASM modules.
//! Everything here is pure and deterministic: the same questionnaire always
//! yields the same constitution profile, risk findings and lifestyle score.

pub mod assessment;
pub mod constitution;
pub mod errors;
pub mod health_metrics;
pub mod lifestyle;
pub mod models;
pub mod recommendations;
pub mod risk;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use assessment::{assess, AssessmentReport};
pub use constitution::{compute_profile, normalize, score_doshas, DoshaScores};
pub use errors::*;
pub use health_metrics::{bmi_summary, calculate_bmi, classify_bmi, BmiCategory, BmiSummary};
pub use lifestyle::score_lifestyle_risk;
pub use models::*;
pub use recommendations::{dosha_recommendations, DoshaRecommendations};
pub use risk::{predict_risks, RISK_RULES};
pub use types::*;
