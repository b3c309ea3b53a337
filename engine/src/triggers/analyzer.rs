//! Trigger analysis — detect rhetorical and logical patterns in an
//! opponent's argument and weight them by persona sensitivity.
//!
//! Scanning is a pure function of the text and the profile: no I/O, no
//! randomness, no state carried between calls.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::category::{TriggerCategory, TRIGGER_PATTERNS};
use crate::persona::PersonaProfile;
use crate::state::EmotionalState;

/// One category that matched at least one phrase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedTrigger {
    pub category: TriggerCategory,
    /// `(matched / total patterns) * sensitivity`
    pub strength: f64,
    /// Phrases found in the text, in table order.
    pub patterns: Vec<String>,
    /// Persona sensitivity used for this category.
    pub sensitivity: f64,
}

/// Raw result of scanning one argument.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TriggerScan {
    /// Detected triggers, strongest first.
    pub triggers: Vec<DetectedTrigger>,
    /// Strictly strongest category, if any scored above zero.
    pub dominant: Option<TriggerCategory>,
    pub max_strength: f64,
}

impl TriggerScan {
    pub fn fired(&self) -> bool {
        !self.triggers.is_empty()
    }

    pub fn strength_of(&self, category: TriggerCategory) -> Option<f64> {
        self.triggers
            .iter()
            .find(|t| t.category == category)
            .map(|t| t.strength)
    }
}

/// Full analysis of one opponent argument for one side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Detected triggers, strongest first.
    pub triggers: Vec<DetectedTrigger>,
    pub dominant_trigger: Option<TriggerCategory>,
    pub max_trigger_strength: f64,
    /// State the transition policy settled on.
    pub recommended_state: EmotionalState,
    /// `min(max_trigger_strength, 1.0)`; zero when there was nothing to read.
    pub confidence: f64,
    pub reasoning: String,
}

impl Analysis {
    pub const NO_TEXT_REASONING: &'static str = "No opponent text to analyze";

    /// Zero-confidence neutral result for a missing or empty argument.
    pub fn no_text() -> Self {
        Self {
            triggers: Vec::new(),
            dominant_trigger: None,
            max_trigger_strength: 0.0,
            recommended_state: EmotionalState::Neutral,
            confidence: 0.0,
            reasoning: Self::NO_TEXT_REASONING.to_string(),
        }
    }
}

/// Stateless trigger detector.
#[derive(Debug, Clone, Copy, Default)]
pub struct TriggerAnalyzer;

impl TriggerAnalyzer {
    /// Scan `text` against every category table.
    pub fn scan(&self, text: &str, profile: &PersonaProfile) -> TriggerScan {
        let normalized = text.to_lowercase();
        let mut triggers = Vec::new();
        let mut dominant = None;
        let mut max_strength = 0.0_f64;

        for (category, patterns) in TRIGGER_PATTERNS {
            let found: Vec<String> = patterns
                .iter()
                .filter(|pattern| normalized.contains(**pattern))
                .map(|pattern| pattern.to_string())
                .collect();
            if found.is_empty() {
                continue;
            }

            let sensitivity = profile.sensitivity(*category);
            let strength = (found.len() as f64 / patterns.len() as f64) * sensitivity;
            if strength > max_strength {
                max_strength = strength;
                dominant = Some(*category);
            }
            triggers.push(DetectedTrigger {
                category: *category,
                strength,
                patterns: found,
                sensitivity,
            });
        }

        // Stable: equal strengths keep table order.
        triggers.sort_by(|a, b| b.strength.total_cmp(&a.strength));

        debug!(
            triggers = triggers.len(),
            dominant = ?dominant,
            max_strength,
            "Scanned opponent argument"
        );

        TriggerScan {
            triggers,
            dominant,
            max_strength,
        }
    }
}
