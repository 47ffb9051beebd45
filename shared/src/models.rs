//! Domain models for the Prakriti health assessment
//!
//! Questionnaire inputs, the constitution profile and the outputs of the
//! risk engines. Every enum is a closed set: out-of-domain strings are
//! rejected when deserializing, so the scoring code never sees them.

use serde::{Deserialize, Serialize};

// ============================================================================
// Questionnaire Enums
// ============================================================================

/// Tendency to feel cold or warm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyTemperature {
    Cold,
    Neutral,
    Warm,
}

impl BodyTemperature {
    pub const ALL: [Self; 3] = [Self::Cold, Self::Neutral, Self::Warm];
}

/// Digestive pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Digestion {
    Irregular,
    Strong,
    Slow,
}

impl Digestion {
    pub const ALL: [Self; 3] = [Self::Irregular, Self::Strong, Self::Slow];
}

/// Depth of sleep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepPattern {
    Light,
    Moderate,
    Deep,
}

impl SleepPattern {
    pub const ALL: [Self; 3] = [Self::Light, Self::Moderate, Self::Deep];
}

/// Stability of energy through the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyLevel {
    Variable,
    High,
    Steady,
}

impl EnergyLevel {
    pub const ALL: [Self; 3] = [Self::Variable, Self::High, Self::Steady];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinType {
    Dry,
    Oily,
    Normal,
}

impl SkinType {
    pub const ALL: [Self; 3] = [Self::Dry, Self::Oily, Self::Normal];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressLevel {
    High,
    Moderate,
    Low,
}

impl StressLevel {
    pub const ALL: [Self; 3] = [Self::High, Self::Moderate, Self::Low];
}

/// How often the user exercises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseFrequency {
    Daily,
    Weekly,
    Rarely,
}

impl ExerciseFrequency {
    pub const ALL: [Self; 3] = [Self::Daily, Self::Weekly, Self::Rarely];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    Vegetarian,
    NonVegetarian,
    Vegan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealTiming {
    Regular,
    Irregular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterIntake {
    Low,
    Moderate,
    High,
}

/// Regular practice used to manage stress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressManagement {
    None,
    Meditation,
    Yoga,
    Exercise,
}

// ============================================================================
// Questionnaire Inputs
// ============================================================================

/// Physiological questionnaire answers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthAttributes {
    /// Age in years
    pub age: u32,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    pub body_temperature: BodyTemperature,
    pub digestion: Digestion,
    pub sleep_pattern: SleepPattern,
    pub energy_level: EnergyLevel,
    pub skin_type: SkinType,
    pub stress_level: StressLevel,
    /// Collected with the physiological traits; feeds the risk engines only
    pub exercise_frequency: ExerciseFrequency,
}

/// Lifestyle questionnaire answers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifestyleAttributes {
    pub diet: DietType,
    pub meal_timing: MealTiming,
    pub water_intake: WaterIntake,
    /// Average nightly sleep in hours
    pub sleep_hours: f64,
    /// Average daily exercise in minutes
    pub exercise_minutes: u32,
    pub stress_management: StressManagement,
    /// Average daily screen time in hours
    pub screen_time_hours: f64,
}

// ============================================================================
// Constitution Profile
// ============================================================================

/// One of the three constitutional categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

impl Dosha {
    /// Accumulator order, also the tie-break order everywhere
    pub const ALL: [Self; 3] = [Self::Vata, Self::Pitta, Self::Kapha];

    pub fn name(&self) -> &'static str {
        match self {
            Dosha::Vata => "Vata",
            Dosha::Pitta => "Pitta",
            Dosha::Kapha => "Kapha",
        }
    }
}

impl std::fmt::Display for Dosha {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Constitution expressed as three percentages summing to 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConstitutionProfile {
    pub vata: u8,
    pub pitta: u8,
    pub kapha: u8,
}

impl ConstitutionProfile {
    /// Percentage held by a single dosha
    pub fn percentage(&self, dosha: Dosha) -> u8 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    pub fn total(&self) -> u32 {
        self.vata as u32 + self.pitta as u32 + self.kapha as u32
    }

    /// Dosha with the highest share; ties go to the earlier dosha
    pub fn dominant(&self) -> Dosha {
        self.ranked()[0]
    }

    /// Doshas ordered by share, highest first
    pub fn ranked(&self) -> [Dosha; 3] {
        let mut ranked = Dosha::ALL;
        // Stable, so equal shares keep vata -> pitta -> kapha order
        ranked.sort_by(|a, b| self.percentage(*b).cmp(&self.percentage(*a)));
        ranked
    }

    /// Single or dual constitution type
    ///
    /// A dual type ("Vata-Pitta") is reported when the runner-up is within
    /// [`DUAL_TYPE_MARGIN`] points of the dominant dosha.
    pub fn constitution_type(&self) -> ConstitutionType {
        let [first, second, _] = self.ranked();
        let gap = self.percentage(first) - self.percentage(second);
        if gap <= DUAL_TYPE_MARGIN {
            ConstitutionType::Dual(first, second)
        } else {
            ConstitutionType::Single(first)
        }
    }
}

/// Maximum point gap for a constitution to count as dual
pub const DUAL_TYPE_MARGIN: u8 = 10;

/// Named constitution type derived from a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstitutionType {
    Single(Dosha),
    Dual(Dosha, Dosha),
}

impl ConstitutionType {
    pub fn label(&self) -> String {
        match self {
            ConstitutionType::Single(d) => d.name().to_string(),
            ConstitutionType::Dual(a, b) => format!("{}-{}", a.name(), b.name()),
        }
    }
}

// ============================================================================
// Risk Outputs
// ============================================================================

/// Severity tier of a risk finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Moderate,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Moderate => "moderate",
            Severity::High => "high",
        }
    }
}

/// A heuristic risk of a named condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFinding {
    pub condition: String,
    /// Heuristic score in [0, 1], not a calibrated probability
    pub probability: f64,
    pub severity: Severity,
    /// Body system the condition belongs to
    pub system: String,
    pub recommendations: Vec<String>,
}

/// A single contributor to the lifestyle risk score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifestyleFactor {
    pub factor: String,
    pub impact: String,
    pub score: f64,
}

/// Banded lifestyle risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifestyleRiskLevel {
    Low,
    Moderate,
    High,
}

/// Aggregate lifestyle risk with its ranked contributors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifestyleRiskReport {
    /// Clamped to [0, 100]
    pub overall_risk: f64,
    pub level: LifestyleRiskLevel,
    /// Sorted by score, highest first
    pub factors: Vec<LifestyleFactor>,
}
