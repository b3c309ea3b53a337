//! Derive an emotional profile from crowdsourced persona enrichment data.
//!
//! Enrichment produces free-text trigger lists per persona. They are mapped
//! onto the generic analyzer categories by keyword, and each phrase is also
//! kept as its own snake_case sensitivity key.

use serde::{Deserialize, Serialize};

use super::profile::{PersonaProfile, StateProgression};

const DEFAULT_ESCALATION: f64 = 0.5;
const DEFAULT_COOLDOWN: f64 = 0.5;
const DEFAULT_MAX_INTENSITY: f64 = 0.8;
const DEFAULT_GENERIC_SENSITIVITY: f64 = 0.4;

/// Generic category key and the keyword that signals it.
const GENERIC_KEYWORDS: &[(&str, &str)] = &[
    ("logical_fallacy", "logic"),
    ("personal_attack", "personal"),
    ("strong_evidence", "evidence"),
    ("weak_argument", "weakness"),
    ("circular_reasoning", "reasoning"),
    ("appeal_to_authority", "authority"),
];

/// `emotional_triggers` block of an enriched persona.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmotionalTriggers {
    #[serde(default)]
    pub strong_positive: Vec<String>,
    #[serde(default)]
    pub moderate_positive: Vec<String>,
    #[serde(default)]
    pub neutral: Vec<String>,
    #[serde(default)]
    pub moderate_negative: Vec<String>,
    #[serde(default)]
    pub strong_negative: Vec<String>,
    #[serde(default)]
    pub escalation_rate: Option<f64>,
    #[serde(default)]
    pub cooldown_rate: Option<f64>,
    #[serde(default)]
    pub max_intensity: Option<f64>,
    #[serde(default)]
    pub base_temperament: Option<String>,
}

impl EmotionalTriggers {
    /// Convert to a persona profile. Always yields a valid profile.
    pub fn to_profile(&self) -> PersonaProfile {
        let progression = StateProgression {
            escalation_rate: coefficient(self.escalation_rate, DEFAULT_ESCALATION),
            cooldown_rate: coefficient(self.cooldown_rate, DEFAULT_COOLDOWN),
            max_intensity: coefficient(self.max_intensity, DEFAULT_MAX_INTENSITY),
        };
        let temperament = self
            .base_temperament
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or("neutral");

        let mut profile = PersonaProfile::new(temperament, progression);
        for (key, keyword) in GENERIC_KEYWORDS {
            profile
                .trigger_sensitivity
                .insert((*key).to_string(), self.generic_sensitivity(keyword));
        }

        let specific = [
            (&self.strong_negative, 0.9),
            (&self.moderate_negative, 0.6),
            (&self.strong_positive, 0.8),
        ];
        for (phrases, sensitivity) in specific {
            for phrase in phrases {
                let key = trigger_key(phrase);
                if !key.is_empty() {
                    profile.trigger_sensitivity.insert(key, sensitivity);
                }
            }
        }
        profile
    }

    fn generic_sensitivity(&self, keyword: &str) -> f64 {
        let mentions = |phrases: &[String]| {
            phrases
                .iter()
                .any(|p| p.to_lowercase().contains(keyword))
        };
        let strong_negative: f64 = if mentions(&self.strong_negative) { 0.8 } else { 0.0 };
        let moderate_negative = if mentions(&self.moderate_negative) { 0.6 } else { 0.0 };
        let positive = if mentions(&self.strong_positive) { 0.7 } else { 0.0 };

        let max = strong_negative.max(moderate_negative).max(positive);
        if max > 0.0 {
            max
        } else {
            DEFAULT_GENERIC_SENSITIVITY
        }
    }
}

// Missing or zero means "use the default".
fn coefficient(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v != 0.0 && v.is_finite() => v.clamp(0.0, 1.0),
        _ => default,
    }
}

/// "Moral Relativism" → "moral_relativism". Each whitespace run, leading and
/// trailing ones included, becomes a single underscore.
fn trigger_key(phrase: &str) -> String {
    let mut key = String::with_capacity(phrase.len());
    let mut in_space = false;
    for c in phrase.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_space {
                key.push('_');
            }
            in_space = true;
        } else {
            key.push(c);
            in_space = false;
        }
    }
    key
}
