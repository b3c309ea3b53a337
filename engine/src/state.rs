//! Emotional state labels.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Emotional state of one debate side.
///
/// Purely a label: every behavioral difference comes from lookups keyed by
/// the state (modifier table, transition rules).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionalState {
    /// Baseline, no emotional coloring.
    #[default]
    Neutral,
    /// Intellectually interested in the exchange.
    Engaged,
    /// Annoyed by the quality of the opposing argument.
    Frustrated,
    /// Sure of its own position.
    Confident,
    /// Feels the need to guard its position.
    Defensive,
    /// Deeply invested in the issue.
    Passionate,
}

impl EmotionalState {
    /// All states in declaration order.
    pub fn all() -> &'static [EmotionalState] {
        &[
            Self::Neutral,
            Self::Engaged,
            Self::Frustrated,
            Self::Confident,
            Self::Defensive,
            Self::Passionate,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Engaged => "engaged",
            Self::Frustrated => "frustrated",
            Self::Confident => "confident",
            Self::Defensive => "defensive",
            Self::Passionate => "passionate",
        }
    }

    /// Parse a label, falling back to `Neutral` for anything unrecognized.
    pub fn from_label_or_neutral(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }

    pub fn is_neutral(self) -> bool {
        matches!(self, Self::Neutral)
    }
}

impl std::fmt::Display for EmotionalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EmotionalState {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| EngineError::UnknownState(s.to_string()))
    }
}
