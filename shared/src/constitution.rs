//! Constitution profile calculator
//!
//! Scores six questionnaire traits into three dosha accumulators and
//! normalizes them to whole percentages.
//!
//! # Normalization
//!
//! Independent rounding of three shares can total 99 or 101. Shares are
//! allocated with the largest-remainder method instead: every dosha gets
//! the floor of its exact share, and the points still missing go to the
//! largest remainders, ties in vata -> pitta -> kapha order. The result
//! always sums to exactly 100.

use crate::errors::AssessmentResult;
use crate::models::{
    BodyTemperature, ConstitutionProfile, Digestion, Dosha, EnergyLevel, HealthAttributes,
    SkinType, SleepPattern, StressLevel,
};
use crate::validation::validate_health_attributes;

/// Points awarded by a single trait answer
type Award = (Dosha, u32);

fn body_temperature_award(value: BodyTemperature) -> Award {
    match value {
        BodyTemperature::Cold => (Dosha::Vata, 2),
        BodyTemperature::Neutral => (Dosha::Kapha, 1),
        BodyTemperature::Warm => (Dosha::Pitta, 2),
    }
}

fn digestion_award(value: Digestion) -> Award {
    match value {
        Digestion::Irregular => (Dosha::Vata, 3),
        Digestion::Strong => (Dosha::Pitta, 3),
        Digestion::Slow => (Dosha::Kapha, 3),
    }
}

fn sleep_pattern_award(value: SleepPattern) -> Award {
    match value {
        SleepPattern::Light => (Dosha::Vata, 2),
        SleepPattern::Moderate => (Dosha::Pitta, 2),
        SleepPattern::Deep => (Dosha::Kapha, 2),
    }
}

fn energy_level_award(value: EnergyLevel) -> Award {
    match value {
        EnergyLevel::Variable => (Dosha::Vata, 2),
        EnergyLevel::High => (Dosha::Pitta, 2),
        EnergyLevel::Steady => (Dosha::Kapha, 2),
    }
}

fn skin_type_award(value: SkinType) -> Award {
    match value {
        SkinType::Dry => (Dosha::Vata, 2),
        SkinType::Oily => (Dosha::Pitta, 2),
        SkinType::Normal => (Dosha::Kapha, 1),
    }
}

fn stress_level_award(value: StressLevel) -> Award {
    match value {
        StressLevel::High => (Dosha::Vata, 2),
        StressLevel::Moderate => (Dosha::Pitta, 1),
        StressLevel::Low => (Dosha::Kapha, 1),
    }
}

/// Raw accumulator points per dosha, in vata, pitta, kapha order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DoshaScores {
    pub vata: u32,
    pub pitta: u32,
    pub kapha: u32,
}

impl DoshaScores {
    fn add(&mut self, (dosha, points): Award) {
        match dosha {
            Dosha::Vata => self.vata += points,
            Dosha::Pitta => self.pitta += points,
            Dosha::Kapha => self.kapha += points,
        }
    }

    pub fn total(&self) -> u32 {
        self.vata + self.pitta + self.kapha
    }

    fn as_array(&self) -> [u32; 3] {
        [self.vata, self.pitta, self.kapha]
    }
}

/// Accumulate trait points without normalizing
///
/// Age, weight, height and exercise frequency do not contribute.
pub fn score_doshas(attrs: &HealthAttributes) -> DoshaScores {
    let mut scores = DoshaScores::default();
    scores.add(body_temperature_award(attrs.body_temperature));
    scores.add(digestion_award(attrs.digestion));
    scores.add(sleep_pattern_award(attrs.sleep_pattern));
    scores.add(energy_level_award(attrs.energy_level));
    scores.add(skin_type_award(attrs.skin_type));
    scores.add(stress_level_award(attrs.stress_level));
    scores
}

/// Convert raw points into percentages summing to exactly 100
pub fn normalize(scores: &DoshaScores) -> ConstitutionProfile {
    let total = scores.total();
    if total == 0 {
        // Unreachable for scored attributes: digestion always awards 3 points
        return ConstitutionProfile { vata: 34, pitta: 33, kapha: 33 };
    }

    let raw = scores.as_array();
    let mut shares = raw.map(|points| points * 100 / total);
    let remainders = raw.map(|points| points * 100 % total);

    let allocated: u32 = shares.iter().sum();
    let mut order = [0usize, 1, 2];
    // Stable sort keeps vata -> pitta -> kapha for equal remainders
    order.sort_by(|a, b| remainders[*b].cmp(&remainders[*a]));
    for &idx in order.iter().take((100 - allocated) as usize) {
        shares[idx] += 1;
    }

    ConstitutionProfile {
        vata: shares[0] as u8,
        pitta: shares[1] as u8,
        kapha: shares[2] as u8,
    }
}

/// Compute the constitution profile for a set of health attributes
///
/// Fails only when a numeric attribute is out of its domain.
pub fn compute_profile(attrs: &HealthAttributes) -> AssessmentResult<ConstitutionProfile> {
    validate_health_attributes(attrs)?;
    Ok(normalize(&score_doshas(attrs)))
}
