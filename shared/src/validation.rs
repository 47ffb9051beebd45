//! Input validation functions
//!
//! Every engine entry point validates its inputs here before computing.
//! The checks return `Result<(), String>` like plain field validators and
//! are wrapped into a [`ValidationError`] carrying the field name.

use crate::health_metrics::calculate_bmi;
use crate::models::{ConstitutionProfile, HealthAttributes, LifestyleAttributes};

pub const MIN_WEIGHT_KG: f64 = 1.0;
pub const MAX_WEIGHT_KG: f64 = 500.0;
pub const MIN_HEIGHT_CM: f64 = 30.0;
pub const MAX_HEIGHT_CM: f64 = 300.0;

/// Validate age in whole years
pub fn validate_age(age: u32) -> Result<(), String> {
    if age < 1 {
        return Err("Age must be at least 1 year".to_string());
    }
    if age > 150 {
        return Err("Age cannot exceed 150 years".to_string());
    }
    Ok(())
}

/// Validate weight value (in kg)
pub fn validate_weight(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg <= 0.0 {
        return Err("Weight must be positive".to_string());
    }
    if weight_kg < MIN_WEIGHT_KG {
        return Err("Weight must be at least 1 kg".to_string());
    }
    if weight_kg > MAX_WEIGHT_KG {
        return Err("Weight must be at most 500 kg".to_string());
    }
    Ok(())
}

/// Validate height value (in cm)
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm <= 0.0 {
        return Err("Height must be positive".to_string());
    }
    if height_cm < MIN_HEIGHT_CM {
        return Err("Height must be at least 30 cm".to_string());
    }
    if height_cm > MAX_HEIGHT_CM {
        return Err("Height must be at most 300 cm".to_string());
    }
    Ok(())
}

/// Validate a computed BMI before it feeds any formula
pub fn validate_bmi(bmi: f64) -> Result<(), String> {
    if !bmi.is_finite() || bmi <= 0.0 {
        return Err("Weight and height do not give a valid BMI".to_string());
    }
    Ok(())
}

/// Validate a daily amount of hours (sleep, screen time)
pub fn validate_daily_hours(hours: f64) -> Result<(), String> {
    if hours.is_nan() || hours.is_infinite() {
        return Err("Hours must be a valid number".to_string());
    }
    if hours < 0.0 {
        return Err("Hours cannot be negative".to_string());
    }
    if hours > 24.0 {
        return Err("Hours cannot exceed 24 per day".to_string());
    }
    Ok(())
}

/// Validate duration in minutes
pub fn validate_duration_minutes(minutes: u32) -> Result<(), String> {
    if minutes > 1440 {
        // 24 hours
        return Err("Duration cannot exceed 24 hours".to_string());
    }
    Ok(())
}

/// Validate a caller-supplied constitution profile
pub fn validate_profile(profile: &ConstitutionProfile) -> Result<(), String> {
    if profile.total() != 100 {
        return Err(format!(
            "Percentages must sum to 100 (got {})",
            profile.total()
        ));
    }
    Ok(())
}

/// Validate a storage category name: 1-64 chars of `[a-z0-9_-]`
pub fn validate_category(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Category cannot be empty".to_string());
    }
    if name.len() > 64 {
        return Err("Category must be at most 64 characters".to_string());
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
    {
        return Err(
            "Category may only contain lowercase letters, digits, '_' and '-'".to_string(),
        );
    }
    Ok(())
}

// ============================================================================
// Aggregate Validation
// ============================================================================

fn check(field: &str, result: Result<(), String>) -> Result<(), ValidationError> {
    result.map_err(|message| ValidationError::new(field, &message))
}

/// Validate all numeric health attributes
///
/// Enumerated traits are closed Rust enums and need no runtime check.
pub fn validate_health_attributes(attrs: &HealthAttributes) -> Result<(), ValidationError> {
    check("age", validate_age(attrs.age))?;
    check("weight_kg", validate_weight(attrs.weight_kg))?;
    check("height_cm", validate_height_cm(attrs.height_cm))?;
    check("bmi", validate_bmi(calculate_bmi(attrs.weight_kg, attrs.height_cm)))?;
    Ok(())
}

/// Validate all numeric lifestyle attributes
pub fn validate_lifestyle_attributes(lifestyle: &LifestyleAttributes) -> Result<(), ValidationError> {
    check("sleep_hours", validate_daily_hours(lifestyle.sleep_hours))?;
    check("exercise_minutes", validate_duration_minutes(lifestyle.exercise_minutes))?;
    check("screen_time_hours", validate_daily_hours(lifestyle.screen_time_hours))?;
    Ok(())
}

/// Validate a profile passed in from outside the engine
pub fn validate_constitution_profile(profile: &ConstitutionProfile) -> Result<(), ValidationError> {
    check("profile", validate_profile(profile))
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "age" => "Age",
        "weight" | "weight_kg" => "Weight",
        "height" | "height_cm" => "Height",
        "bmi" => "BMI",
        "sleep_hours" => "Sleep Duration",
        "exercise_minutes" => "Daily Exercise",
        "screen_time_hours" => "Screen Time",
        "profile" => "Constitution Profile",
        "category" => "Category",
        "email" => "Email",
        "password" => "Password",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}
