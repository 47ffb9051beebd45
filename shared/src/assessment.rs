//! Full assessment: every engine run over one questionnaire submission

use crate::constitution::compute_profile;
use crate::errors::AssessmentResult;
use crate::health_metrics::{bmi_summary, BmiSummary};
use crate::lifestyle::score_lifestyle_risk;
use crate::models::{
    ConstitutionProfile, Dosha, HealthAttributes, LifestyleAttributes, LifestyleRiskReport,
    RiskFinding,
};
use crate::recommendations::{dosha_recommendations, DoshaRecommendations};
use crate::risk::predict_risks;
use serde::{Deserialize, Serialize};

/// Dashboard view of one assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub profile: ConstitutionProfile,
    pub dominant_dosha: Dosha,
    /// "Vata", or "Vata-Pitta" for dual constitutions
    pub constitution_type: String,
    pub bmi: BmiSummary,
    pub risks: Vec<RiskFinding>,
    pub lifestyle_risk: LifestyleRiskReport,
    pub recommendations: DoshaRecommendations,
}

/// Run the profile calculator, risk predictor and lifestyle scorer
pub fn assess(
    attrs: &HealthAttributes,
    lifestyle: &LifestyleAttributes,
) -> AssessmentResult<AssessmentReport> {
    let profile = compute_profile(attrs)?;
    let risks = predict_risks(&profile, lifestyle, attrs)?;
    let lifestyle_risk = score_lifestyle_risk(lifestyle, attrs)?;
    let dominant = profile.dominant();

    Ok(AssessmentReport {
        profile,
        dominant_dosha: dominant,
        constitution_type: profile.constitution_type().label(),
        bmi: bmi_summary(attrs.weight_kg, attrs.height_cm),
        risks,
        lifestyle_risk,
        recommendations: dosha_recommendations(dominant),
    })
}
