//! Lifestyle risk scorer
//!
//! Six independent terms, each a small formula over one or two answers.
//! Positive terms are listed as contributing factors; the overall score is
//! their sum clamped to `[0, 100]`.

use crate::errors::AssessmentResult;
use crate::models::{
    ExerciseFrequency, HealthAttributes, LifestyleAttributes, LifestyleFactor,
    LifestyleRiskLevel, LifestyleRiskReport, MealTiming, StressLevel, StressManagement,
    WaterIntake,
};
use crate::validation::{validate_health_attributes, validate_lifestyle_attributes};

/// Recommended nightly sleep in hours
pub const RECOMMENDED_SLEEP_HOURS: f64 = 7.0;
/// Screen time tolerated before it counts against the score
pub const SCREEN_TIME_ALLOWANCE_HOURS: f64 = 8.0;
/// Cap on the screen time term
pub const MAX_SCREEN_TIME_SCORE: f64 = 30.0;
pub const MAX_OVERALL_RISK: f64 = 100.0;

fn sleep_deficit(lifestyle: &LifestyleAttributes) -> f64 {
    ((RECOMMENDED_SLEEP_HOURS - lifestyle.sleep_hours) * 10.0).max(0.0)
}

fn inactivity(attrs: &HealthAttributes) -> f64 {
    match attrs.exercise_frequency {
        ExerciseFrequency::Daily => 0.0,
        ExerciseFrequency::Weekly => 15.0,
        ExerciseFrequency::Rarely => 30.0,
    }
}

fn stress_management_gap(lifestyle: &LifestyleAttributes, attrs: &HealthAttributes) -> f64 {
    match (lifestyle.stress_management, attrs.stress_level) {
        (StressManagement::None, StressLevel::High) => 25.0,
        (StressManagement::None, _) => 15.0,
        _ => 0.0,
    }
}

fn screen_time_excess(lifestyle: &LifestyleAttributes) -> f64 {
    ((lifestyle.screen_time_hours - SCREEN_TIME_ALLOWANCE_HOURS) * 3.0).clamp(0.0, MAX_SCREEN_TIME_SCORE)
}

fn hydration_deficit(lifestyle: &LifestyleAttributes) -> f64 {
    match lifestyle.water_intake {
        WaterIntake::Low => 15.0,
        WaterIntake::Moderate | WaterIntake::High => 0.0,
    }
}

fn meal_irregularity(lifestyle: &LifestyleAttributes) -> f64 {
    match lifestyle.meal_timing {
        MealTiming::Irregular => 20.0,
        MealTiming::Regular => 0.0,
    }
}

/// Band an overall score into a risk level
pub fn risk_level(overall: f64) -> LifestyleRiskLevel {
    if overall < 30.0 {
        LifestyleRiskLevel::Low
    } else if overall < 60.0 {
        LifestyleRiskLevel::Moderate
    } else {
        LifestyleRiskLevel::High
    }
}

/// Score lifestyle risk for validated inputs
pub fn score_lifestyle_risk(
    lifestyle: &LifestyleAttributes,
    attrs: &HealthAttributes,
) -> AssessmentResult<LifestyleRiskReport> {
    validate_lifestyle_attributes(lifestyle)?;
    validate_health_attributes(attrs)?;

    // Evaluation order is the tie-break order
    let terms = [
        (
            "Sleep Deficit",
            "Insufficient sleep impairs recovery, immunity and metabolic balance",
            sleep_deficit(lifestyle),
        ),
        (
            "Physical Inactivity",
            "Infrequent exercise slows metabolism and raises cardiovascular risk",
            inactivity(attrs),
        ),
        (
            "Unmanaged Stress",
            "Stress without a regular coping practice strains the nervous system",
            stress_management_gap(lifestyle, attrs),
        ),
        (
            "Excess Screen Time",
            "Prolonged screen exposure disrupts sleep and strains the eyes",
            screen_time_excess(lifestyle),
        ),
        (
            "Low Hydration",
            "Low water intake affects digestion, skin health and energy levels",
            hydration_deficit(lifestyle),
        ),
        (
            "Irregular Meals",
            "Irregular meal timing disturbs digestion and blood sugar control",
            meal_irregularity(lifestyle),
        ),
    ];

    let raw_total: f64 = terms.iter().map(|(_, _, score)| score).sum();
    let overall_risk = raw_total.clamp(0.0, MAX_OVERALL_RISK);

    let mut factors: Vec<LifestyleFactor> = terms
        .iter()
        .filter(|(_, _, score)| *score > 0.0)
        .map(|(factor, impact, score)| LifestyleFactor {
            factor: factor.to_string(),
            impact: impact.to_string(),
            score: *score,
        })
        .collect();
    factors.sort_by(|a, b| b.score.total_cmp(&a.score));

    Ok(LifestyleRiskReport {
        overall_risk,
        level: risk_level(overall_risk),
        factors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn attributes(stress_level: StressLevel, exercise_frequency: ExerciseFrequency) -> HealthAttributes {
        HealthAttributes {
            age: 35,
            weight_kg: 68.0,
            height_cm: 172.0,
            body_temperature: BodyTemperature::Warm,
            digestion: Digestion::Strong,
            sleep_pattern: SleepPattern::Moderate,
            energy_level: EnergyLevel::High,
            skin_type: SkinType::Oily,
            stress_level,
            exercise_frequency,
        }
    }

    fn healthy_lifestyle() -> LifestyleAttributes {
        LifestyleAttributes {
            diet: DietType::Vegan,
            meal_timing: MealTiming::Regular,
            water_intake: WaterIntake::High,
            sleep_hours: 8.0,
            exercise_minutes: 60,
            stress_management: StressManagement::Yoga,
            screen_time_hours: 3.0,
        }
    }

    fn factor_names(report: &LifestyleRiskReport) -> Vec<&str> {
        report.factors.iter().map(|f| f.factor.as_str()).collect()
    }

    #[test]
    fn test_healthy_lifestyle_scores_zero() {
        let report = score_lifestyle_risk(
            &healthy_lifestyle(),
            &attributes(StressLevel::Low, ExerciseFrequency::Daily),
        )
        .unwrap();
        assert_eq!(report.overall_risk, 0.0);
        assert_eq!(report.level, LifestyleRiskLevel::Low);
        assert!(report.factors.is_empty());
    }

    #[test]
    fn test_worst_case_example_clamps_to_100() {
        let lifestyle = LifestyleAttributes {
            diet: DietType::NonVegetarian,
            meal_timing: MealTiming::Irregular,
            water_intake: WaterIntake::Low,
            sleep_hours: 5.0,
            exercise_minutes: 10,
            stress_management: StressManagement::None,
            screen_time_hours: 10.0,
        };
        let attrs = attributes(StressLevel::High, ExerciseFrequency::Rarely);

        let report = score_lifestyle_risk(&lifestyle, &attrs).unwrap();
        // 20 + 30 + 25 + 6 + 15 + 20 = 116
        assert_eq!(report.overall_risk, 100.0);
        assert_eq!(report.level, LifestyleRiskLevel::High);

        let scores: Vec<f64> = report.factors.iter().map(|f| f.score).collect();
        assert_eq!(scores, vec![30.0, 25.0, 20.0, 20.0, 15.0, 6.0]);
        assert_eq!(
            factor_names(&report),
            vec![
                "Physical Inactivity",
                "Unmanaged Stress",
                "Sleep Deficit",
                "Irregular Meals",
                "Low Hydration",
                "Excess Screen Time",
            ]
        );
    }

    #[test]
    fn test_extreme_inputs_clamp_to_100() {
        let lifestyle = LifestyleAttributes {
            diet: DietType::NonVegetarian,
            meal_timing: MealTiming::Irregular,
            water_intake: WaterIntake::Low,
            sleep_hours: 0.0,
            exercise_minutes: 0,
            stress_management: StressManagement::None,
            screen_time_hours: 24.0,
        };
        let attrs = attributes(StressLevel::High, ExerciseFrequency::Rarely);

        let report = score_lifestyle_risk(&lifestyle, &attrs).unwrap();
        assert_eq!(report.overall_risk, 100.0);
        let screen = report
            .factors
            .iter()
            .find(|f| f.factor == "Excess Screen Time")
            .unwrap();
        assert_eq!(screen.score, 30.0);
    }

    #[rstest]
    #[case(StressManagement::None, StressLevel::High, 25.0)]
    #[case(StressManagement::None, StressLevel::Moderate, 15.0)]
    #[case(StressManagement::None, StressLevel::Low, 15.0)]
    #[case(StressManagement::Meditation, StressLevel::High, 0.0)]
    #[case(StressManagement::Exercise, StressLevel::Low, 0.0)]
    fn test_stress_management_gap(
        #[case] practice: StressManagement,
        #[case] stress: StressLevel,
        #[case] expected: f64,
    ) {
        let mut lifestyle = healthy_lifestyle();
        lifestyle.stress_management = practice;
        let attrs = attributes(stress, ExerciseFrequency::Daily);
        assert_eq!(stress_management_gap(&lifestyle, &attrs), expected);
    }

    #[rstest]
    #[case(ExerciseFrequency::Daily, 0.0)]
    #[case(ExerciseFrequency::Weekly, 15.0)]
    #[case(ExerciseFrequency::Rarely, 30.0)]
    fn test_inactivity(#[case] frequency: ExerciseFrequency, #[case] expected: f64) {
        assert_eq!(inactivity(&attributes(StressLevel::Low, frequency)), expected);
    }

    #[rstest]
    #[case(8.0, 0.0)]
    #[case(7.0, 0.0)]
    #[case(6.5, 5.0)]
    #[case(4.0, 30.0)]
    fn test_sleep_deficit(#[case] hours: f64, #[case] expected: f64) {
        let mut lifestyle = healthy_lifestyle();
        lifestyle.sleep_hours = hours;
        assert_eq!(sleep_deficit(&lifestyle), expected);
    }

    #[rstest]
    #[case(6.0, 0.0)]
    #[case(8.0, 0.0)]
    #[case(10.0, 6.0)]
    #[case(18.0, 30.0)]
    #[case(24.0, 30.0)]
    fn test_screen_time_excess(#[case] hours: f64, #[case] expected: f64) {
        let mut lifestyle = healthy_lifestyle();
        lifestyle.screen_time_hours = hours;
        assert_eq!(screen_time_excess(&lifestyle), expected);
    }

    #[test]
    fn test_equal_scores_keep_evaluation_order() {
        let mut lifestyle = healthy_lifestyle();
        lifestyle.stress_management = StressManagement::None;
        lifestyle.water_intake = WaterIntake::Low;
        let attrs = attributes(StressLevel::Moderate, ExerciseFrequency::Weekly);

        let report = score_lifestyle_risk(&lifestyle, &attrs).unwrap();
        assert_eq!(
            factor_names(&report),
            vec!["Physical Inactivity", "Unmanaged Stress", "Low Hydration"]
        );
        assert_eq!(report.overall_risk, 45.0);
        assert_eq!(report.level, LifestyleRiskLevel::Moderate);
    }

    #[test]
    fn test_negative_sleep_rejected() {
        let mut lifestyle = healthy_lifestyle();
        lifestyle.sleep_hours = -1.0;
        let err = score_lifestyle_risk(
            &lifestyle,
            &attributes(StressLevel::Low, ExerciseFrequency::Daily),
        )
        .unwrap_err();
        assert_eq!(err.field(), "sleep_hours");
    }

    #[rstest]
    #[case(0.0, LifestyleRiskLevel::Low)]
    #[case(29.9, LifestyleRiskLevel::Low)]
    #[case(30.0, LifestyleRiskLevel::Moderate)]
    #[case(60.0, LifestyleRiskLevel::High)]
    fn test_risk_level_bands(#[case] overall: f64, #[case] expected: LifestyleRiskLevel) {
        assert_eq!(risk_level(overall), expected);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Overall score stays within [0, 100] and factors are sorted
        #[test]
        fn prop_overall_bounded_and_sorted(
            sleep in 0.0f64..=24.0,
            screen in 0.0f64..=24.0,
            no_practice in any::<bool>(),
            irregular in any::<bool>(),
            low_water in any::<bool>(),
        ) {
            let mut lifestyle = healthy_lifestyle();
            lifestyle.sleep_hours = sleep;
            lifestyle.screen_time_hours = screen;
            if no_practice {
                lifestyle.stress_management = StressManagement::None;
            }
            if irregular {
                lifestyle.meal_timing = MealTiming::Irregular;
            }
            if low_water {
                lifestyle.water_intake = WaterIntake::Low;
            }
            let attrs = attributes(StressLevel::High, ExerciseFrequency::Rarely);

            let report = score_lifestyle_risk(&lifestyle, &attrs).unwrap();
            prop_assert!((0.0..=100.0).contains(&report.overall_risk));
            for pair in report.factors.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
            }
            prop_assert!(report.factors.iter().all(|f| f.score > 0.0));
        }
    }
}
