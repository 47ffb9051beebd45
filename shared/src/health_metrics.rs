//! Body metrics used by the risk engines
//!
//! BMI and its WHO classification. The risk predictor keys several rules on
//! BMI, and the assessment report shows the classified value.

use serde::{Deserialize, Serialize};

/// Lower bound of the overweight band; BMI excess is measured from here
pub const BMI_OVERWEIGHT: f64 = 25.0;
/// Lower bound of the obese bands
pub const BMI_OBESE: f64 = 30.0;

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    SeverelyUnderweight,
    Underweight,
    Normal,
    Overweight,
    ObeseClass1,
    ObeseClass2,
    ObeseClass3,
}

impl BmiCategory {
    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::SeverelyUnderweight => "Severely Underweight",
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal/Healthy",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObeseClass1 => "Obese (Class I)",
            BmiCategory::ObeseClass2 => "Obese (Class II)",
            BmiCategory::ObeseClass3 => "Obese (Class III)",
        }
    }
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Points above the overweight threshold, zero when at or below it
pub fn bmi_excess(bmi: f64) -> f64 {
    (bmi - BMI_OVERWEIGHT).max(0.0)
}

/// Classify BMI into category
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 16.0 {
        BmiCategory::SeverelyUnderweight
    } else if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < BMI_OVERWEIGHT {
        BmiCategory::Normal
    } else if bmi < BMI_OBESE {
        BmiCategory::Overweight
    } else if bmi < 35.0 {
        BmiCategory::ObeseClass1
    } else if bmi < 40.0 {
        BmiCategory::ObeseClass2
    } else {
        BmiCategory::ObeseClass3
    }
}

/// Calculate healthy weight range for a given height
///
/// Based on BMI 18.5-25 (normal range)
pub fn healthy_weight_range_kg(height_cm: f64) -> (f64, f64) {
    let height_m = height_cm / 100.0;
    let height_m_sq = height_m * height_m;
    (18.5 * height_m_sq, BMI_OVERWEIGHT * height_m_sq)
}

/// BMI summary shown on the assessment report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiSummary {
    /// BMI rounded to one decimal
    pub value: f64,
    pub category: BmiCategory,
    pub description: String,
    pub healthy_weight_range_kg: (f64, f64),
}

/// Build the report summary for a weight/height pair
pub fn bmi_summary(weight_kg: f64, height_cm: f64) -> BmiSummary {
    let bmi = calculate_bmi(weight_kg, height_cm);
    let category = classify_bmi(bmi);
    let (min, max) = healthy_weight_range_kg(height_cm);

    BmiSummary {
        value: (bmi * 10.0).round() / 10.0,
        category,
        description: category.description().to_string(),
        healthy_weight_range_kg: ((min * 10.0).round() / 10.0, (max * 10.0).round() / 10.0),
    }
}
