//! Heuristic disease-risk predictor
//!
//! A fixed, ordered table of rules. Each rule is gated on one dosha's share
//! exceeding a threshold plus extra conditions on lifestyle, attributes or
//! BMI. A satisfied rule emits one [`RiskFinding`] with probability
//!
//! ```text
//! base + per_point * dosha% + bmi_weight * max(0, bmi - 25)
//! ```
//!
//! clamped to `[0, 1]`. Findings are returned highest probability first;
//! equal probabilities keep table order.

use crate::errors::AssessmentResult;
use crate::health_metrics::{bmi_excess, calculate_bmi, BMI_OBESE, BMI_OVERWEIGHT};
use crate::models::{
    ConstitutionProfile, DietType, Digestion, Dosha, EnergyLevel, ExerciseFrequency,
    HealthAttributes, LifestyleAttributes, MealTiming, RiskFinding, Severity, SkinType,
    StressLevel, WaterIntake,
};
use crate::validation::{
    validate_constitution_profile, validate_health_attributes, validate_lifestyle_attributes,
};

/// Metric a rule's severity tier is decided on
#[derive(Debug, Clone, Copy)]
pub enum SeverityBasis {
    /// Share of the rule's dosha, in percent
    Dosha(u8),
    Bmi(f64),
}

/// One row of the risk table
pub struct RiskRule {
    pub condition: &'static str,
    pub system: &'static str,
    pub dosha: Dosha,
    /// The dosha share must be strictly greater than this
    pub threshold: u8,
    /// Remaining conditions of the guard
    pub guard: fn(&LifestyleAttributes, &HealthAttributes, f64) -> bool,
    pub base: f64,
    pub per_point: f64,
    pub bmi_weight: f64,
    /// Severity is `elevated` when the basis metric reaches its bound
    pub severity_basis: SeverityBasis,
    pub elevated: Severity,
    pub baseline: Severity,
    pub recommendations: &'static [&'static str],
}

impl RiskRule {
    fn applies(&self, profile: &ConstitutionProfile, lifestyle: &LifestyleAttributes, attrs: &HealthAttributes, bmi: f64) -> bool {
        profile.percentage(self.dosha) > self.threshold && (self.guard)(lifestyle, attrs, bmi)
    }

    fn probability(&self, profile: &ConstitutionProfile, bmi: f64) -> f64 {
        let share = profile.percentage(self.dosha) as f64;
        (self.base + self.per_point * share + self.bmi_weight * bmi_excess(bmi)).clamp(0.0, 1.0)
    }

    fn severity(&self, profile: &ConstitutionProfile, bmi: f64) -> Severity {
        let reached = match self.severity_basis {
            SeverityBasis::Dosha(bound) => profile.percentage(self.dosha) >= bound,
            SeverityBasis::Bmi(bound) => bmi >= bound,
        };
        if reached {
            self.elevated
        } else {
            self.baseline
        }
    }

    fn finding(&self, profile: &ConstitutionProfile, bmi: f64) -> RiskFinding {
        RiskFinding {
            condition: self.condition.to_string(),
            probability: self.probability(profile, bmi),
            severity: self.severity(profile, bmi),
            system: self.system.to_string(),
            recommendations: self.recommendations.iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// Evaluation order of this table decides tie-breaks
pub static RISK_RULES: [RiskRule; 14] = [
    // ---- Vata ----
    RiskRule {
        condition: "Anxiety Disorder",
        system: "Nervous System",
        dosha: Dosha::Vata,
        threshold: 40,
        guard: |_, attrs, _| attrs.stress_level == StressLevel::High,
        base: 0.30,
        per_point: 0.005,
        bmi_weight: 0.0,
        severity_basis: SeverityBasis::Dosha(60),
        elevated: Severity::High,
        baseline: Severity::Moderate,
        recommendations: &[
            "Practice daily meditation or pranayama for 15-20 minutes",
            "Keep a consistent daily routine for meals and sleep",
            "Favor warm, grounding foods and limit caffeine",
            "Consult a mental health professional if symptoms persist",
        ],
    },
    RiskRule {
        condition: "Insomnia",
        system: "Nervous System",
        dosha: Dosha::Vata,
        threshold: 40,
        guard: |lifestyle, _, _| lifestyle.sleep_hours < 6.0,
        base: 0.25,
        per_point: 0.005,
        bmi_weight: 0.0,
        severity_basis: SeverityBasis::Dosha(55),
        elevated: Severity::High,
        baseline: Severity::Moderate,
        recommendations: &[
            "Go to bed before 10 PM at the same time every night",
            "Avoid screens for an hour before sleep",
            "Try warm milk with nutmeg or a warm oil foot massage at bedtime",
        ],
    },
    RiskRule {
        condition: "Irritable Bowel Syndrome",
        system: "Digestive System",
        dosha: Dosha::Vata,
        threshold: 40,
        guard: |_, attrs, _| attrs.digestion == Digestion::Irregular,
        base: 0.20,
        per_point: 0.004,
        bmi_weight: 0.0,
        severity_basis: SeverityBasis::Dosha(50),
        elevated: Severity::Moderate,
        baseline: Severity::Low,
        recommendations: &[
            "Eat warm, cooked meals at regular times",
            "Add digestive spices such as ginger, cumin and fennel",
            "Avoid raw, cold and highly processed foods",
        ],
    },
    RiskRule {
        condition: "Osteoarthritis",
        system: "Musculoskeletal System",
        dosha: Dosha::Vata,
        threshold: 45,
        guard: |_, attrs, _| attrs.age >= 45,
        base: 0.15,
        per_point: 0.004,
        bmi_weight: 0.01,
        severity_basis: SeverityBasis::Dosha(60),
        elevated: Severity::Moderate,
        baseline: Severity::Low,
        recommendations: &[
            "Do gentle, low-impact exercise such as yoga or swimming",
            "Massage joints with warm sesame oil",
            "Include calcium and vitamin D rich foods",
        ],
    },
    // ---- Pitta ----
    RiskRule {
        condition: "Acid Reflux (GERD)",
        system: "Digestive System",
        dosha: Dosha::Pitta,
        threshold: 40,
        guard: |lifestyle, _, _| lifestyle.meal_timing == MealTiming::Irregular,
        base: 0.25,
        per_point: 0.005,
        bmi_weight: 0.0,
        severity_basis: SeverityBasis::Dosha(60),
        elevated: Severity::High,
        baseline: Severity::Moderate,
        recommendations: &[
            "Eat meals at regular times and never skip lunch",
            "Avoid spicy, fried and sour foods",
            "Favor cooling foods such as cucumber, coconut and leafy greens",
            "Do not lie down within two hours of eating",
        ],
    },
    RiskRule {
        condition: "Hypertension",
        system: "Cardiovascular System",
        dosha: Dosha::Pitta,
        threshold: 40,
        guard: |_, attrs, _| attrs.stress_level == StressLevel::High,
        base: 0.20,
        per_point: 0.004,
        bmi_weight: 0.02,
        severity_basis: SeverityBasis::Bmi(BMI_OBESE),
        elevated: Severity::High,
        baseline: Severity::Moderate,
        recommendations: &[
            "Monitor blood pressure regularly",
            "Reduce salt intake and processed foods",
            "Practice cooling breathing techniques such as sheetali",
            "Consult a physician for a cardiovascular check-up",
        ],
    },
    RiskRule {
        condition: "Inflammatory Skin Conditions",
        system: "Integumentary System",
        dosha: Dosha::Pitta,
        threshold: 40,
        guard: |_, attrs, _| attrs.skin_type == SkinType::Oily,
        base: 0.20,
        per_point: 0.004,
        bmi_weight: 0.0,
        severity_basis: SeverityBasis::Dosha(55),
        elevated: Severity::Moderate,
        baseline: Severity::Low,
        recommendations: &[
            "Use gentle, natural skin care such as aloe vera",
            "Avoid excessive sun exposure",
            "Limit spicy and fermented foods",
        ],
    },
    RiskRule {
        condition: "Migraine",
        system: "Nervous System",
        dosha: Dosha::Pitta,
        threshold: 40,
        guard: |lifestyle, _, _| lifestyle.screen_time_hours > 6.0,
        base: 0.15,
        per_point: 0.004,
        bmi_weight: 0.0,
        severity_basis: SeverityBasis::Dosha(55),
        elevated: Severity::Moderate,
        baseline: Severity::Low,
        recommendations: &[
            "Take a screen break every 30 minutes",
            "Stay hydrated and avoid skipping meals",
            "Apply cooling oils such as coconut or brahmi to the scalp",
        ],
    },
    RiskRule {
        condition: "Kidney Stones",
        system: "Urinary System",
        dosha: Dosha::Pitta,
        threshold: 40,
        guard: |lifestyle, _, _| lifestyle.water_intake == WaterIntake::Low,
        base: 0.15,
        per_point: 0.003,
        bmi_weight: 0.0,
        severity_basis: SeverityBasis::Dosha(55),
        elevated: Severity::Moderate,
        baseline: Severity::Low,
        recommendations: &[
            "Drink at least 2.5 liters of water daily",
            "Limit salt and oxalate-rich foods",
            "Include coconut water and barley water",
        ],
    },
    // ---- Kapha ----
    RiskRule {
        condition: "Type 2 Diabetes",
        system: "Endocrine System",
        dosha: Dosha::Kapha,
        threshold: 40,
        guard: |_, _, bmi| bmi >= BMI_OVERWEIGHT,
        base: 0.25,
        per_point: 0.004,
        bmi_weight: 0.02,
        severity_basis: SeverityBasis::Bmi(BMI_OBESE),
        elevated: Severity::High,
        baseline: Severity::Moderate,
        recommendations: &[
            "Check fasting blood glucose regularly",
            "Reduce refined sugar and simple carbohydrates",
            "Exercise for at least 30 minutes daily",
            "Include bitter foods such as bitter gourd and fenugreek",
        ],
    },
    RiskRule {
        condition: "Obesity",
        system: "Metabolic System",
        dosha: Dosha::Kapha,
        threshold: 40,
        guard: |_, attrs, _| attrs.exercise_frequency == ExerciseFrequency::Rarely,
        base: 0.30,
        per_point: 0.005,
        bmi_weight: 0.015,
        severity_basis: SeverityBasis::Bmi(BMI_OBESE),
        elevated: Severity::High,
        baseline: Severity::Moderate,
        recommendations: &[
            "Build up to vigorous exercise five days a week",
            "Favor light, warm and dry foods",
            "Avoid daytime naps and heavy evening meals",
        ],
    },
    RiskRule {
        condition: "High Cholesterol",
        system: "Cardiovascular System",
        dosha: Dosha::Kapha,
        threshold: 40,
        guard: |lifestyle, _, _| lifestyle.diet == DietType::NonVegetarian,
        base: 0.20,
        per_point: 0.004,
        bmi_weight: 0.01,
        severity_basis: SeverityBasis::Bmi(BMI_OBESE),
        elevated: Severity::High,
        baseline: Severity::Moderate,
        recommendations: &[
            "Get a lipid profile test",
            "Limit red meat, fried foods and full-fat dairy",
            "Add fiber-rich whole grains and legumes",
        ],
    },
    RiskRule {
        condition: "Hypothyroidism",
        system: "Endocrine System",
        dosha: Dosha::Kapha,
        threshold: 45,
        guard: |_, attrs, _| {
            attrs.energy_level == EnergyLevel::Steady && attrs.digestion == Digestion::Slow
        },
        base: 0.15,
        per_point: 0.003,
        bmi_weight: 0.0,
        severity_basis: SeverityBasis::Dosha(60),
        elevated: Severity::Moderate,
        baseline: Severity::Low,
        recommendations: &[
            "Get a thyroid function test",
            "Stay physically active to stimulate metabolism",
            "Use warming spices such as ginger and black pepper",
        ],
    },
    RiskRule {
        condition: "Depression",
        system: "Mental Health",
        dosha: Dosha::Kapha,
        threshold: 40,
        guard: |lifestyle, _, _| lifestyle.sleep_hours > 9.0,
        base: 0.15,
        per_point: 0.004,
        bmi_weight: 0.0,
        severity_basis: SeverityBasis::Dosha(55),
        elevated: Severity::Moderate,
        baseline: Severity::Low,
        recommendations: &[
            "Wake up before 6 AM and get morning sunlight",
            "Stay socially and physically active",
            "Seek support from a mental health professional",
        ],
    },
];

/// Evaluate every risk rule against validated inputs
pub fn predict_risks(
    profile: &ConstitutionProfile,
    lifestyle: &LifestyleAttributes,
    attrs: &HealthAttributes,
) -> AssessmentResult<Vec<RiskFinding>> {
    validate_constitution_profile(profile)?;
    validate_lifestyle_attributes(lifestyle)?;
    validate_health_attributes(attrs)?;

    let bmi = calculate_bmi(attrs.weight_kg, attrs.height_cm);

    let mut findings: Vec<RiskFinding> = RISK_RULES
        .iter()
        .filter(|rule| rule.applies(profile, lifestyle, attrs, bmi))
        .map(|rule| rule.finding(profile, bmi))
        .collect();

    // Stable: equal probabilities keep table order
    findings.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    Ok(findings)
}
