//! Static guidance for each dominant dosha

use crate::models::Dosha;
use serde::{Deserialize, Serialize};

/// Diet, lifestyle and herb suggestions for a dosha
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoshaRecommendations {
    pub dosha: Dosha,
    pub summary: String,
    pub diet: Vec<String>,
    pub lifestyle: Vec<String>,
    pub herbs: Vec<String>,
}

struct Guidance {
    summary: &'static str,
    diet: &'static [&'static str],
    lifestyle: &'static [&'static str],
    herbs: &'static [&'static str],
}

const VATA: Guidance = Guidance {
    summary: "Vata is governed by air and space: creative and quick, but prone to anxiety, dryness and irregularity.",
    diet: &[
        "Favor warm, cooked, moist and grounding foods",
        "Use healthy oils such as ghee and sesame",
        "Prefer sweet, sour and salty tastes",
        "Avoid cold drinks, raw salads and dry snacks",
    ],
    lifestyle: &[
        "Keep a regular routine for waking, meals and sleep",
        "Practice gentle yoga and slow, calming exercise",
        "Do a daily warm oil self-massage (abhyanga)",
        "Stay warm and avoid cold, windy weather",
    ],
    herbs: &["Ashwagandha", "Brahmi", "Triphala", "Ginger"],
};

const PITTA: Guidance = Guidance {
    summary: "Pitta is governed by fire and water: focused and driven, but prone to heat, inflammation and irritability.",
    diet: &[
        "Favor cooling, fresh foods such as cucumber, melon and leafy greens",
        "Prefer sweet, bitter and astringent tastes",
        "Limit spicy, fried, sour and salty foods",
        "Reduce alcohol and caffeine",
    ],
    lifestyle: &[
        "Avoid overheating and intense midday sun",
        "Choose moderate, non-competitive exercise such as swimming",
        "Make time for relaxation and leisure",
        "Practice cooling breathing (sheetali pranayama)",
    ],
    herbs: &["Amalaki", "Neem", "Shatavari", "Coriander"],
};

const KAPHA: Guidance = Guidance {
    summary: "Kapha is governed by earth and water: calm and steady, but prone to weight gain, congestion and lethargy.",
    diet: &[
        "Favor light, warm and dry foods",
        "Prefer pungent, bitter and astringent tastes",
        "Limit heavy, oily, sweet and dairy-rich foods",
        "Eat the largest meal at midday and keep dinner light",
    ],
    lifestyle: &[
        "Exercise vigorously every day",
        "Wake early and avoid daytime naps",
        "Seek variety and new stimulation",
        "Practice energizing breathing (kapalabhati)",
    ],
    herbs: &["Trikatu", "Guggulu", "Turmeric", "Tulsi"],
};

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Recommendations for a dominant dosha
pub fn dosha_recommendations(dosha: Dosha) -> DoshaRecommendations {
    let guidance = match dosha {
        Dosha::Vata => &VATA,
        Dosha::Pitta => &PITTA,
        Dosha::Kapha => &KAPHA,
    };

    DoshaRecommendations {
        dosha,
        summary: guidance.summary.to_string(),
        diet: owned(guidance.diet),
        lifestyle: owned(guidance.lifestyle),
        herbs: owned(guidance.herbs),
    }
}
