//! Per-state generation modifiers and localized prompt instructions.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::state::EmotionalState;

/// Language used for prompt instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ro,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ro => "ro",
        }
    }

    /// Parse a language code, falling back to English.
    pub fn from_code_or_default(code: &str) -> Self {
        code.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ro" => Ok(Self::Ro),
            _ => Err(EngineError::UnsupportedLanguage(s.to_string())),
        }
    }
}

/// Response length hint for prompt builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseLength {
    Terse,
    Normal,
    Extended,
}

/// Generation modifiers for one state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateModifier {
    pub state: EmotionalState,
    /// Base sampling temperature before persona intensity.
    pub temperature: f64,
    pub style_modifiers: &'static [&'static str],
    pub response_length: ResponseLength,
    pub instructions_en: &'static [&'static str],
    pub instructions_ro: &'static [&'static str],
}

impl StateModifier {
    pub fn instructions(&self, language: Language) -> &'static [&'static str] {
        match language {
            Language::En => self.instructions_en,
            Language::Ro => self.instructions_ro,
        }
    }
}

/// Built-in modifier table, one row per state in declaration order.
pub static STATE_MODIFIERS: &[StateModifier] = &[
    StateModifier {
        state: EmotionalState::Neutral,
        temperature: 0.8,
        style_modifiers: &[],
        response_length: ResponseLength::Normal,
        instructions_en: &[],
        instructions_ro: &[],
    },
    StateModifier {
        state: EmotionalState::Engaged,
        temperature: 0.85,
        style_modifiers: &["more_examples", "deeper_analysis", "thoughtful_connections"],
        response_length: ResponseLength::Extended,
        instructions_en: &[
            "Show genuine intellectual curiosity about this topic.",
            "Provide specific examples or analogies to illustrate your points.",
            "Build thoughtfully on the previous arguments.",
        ],
        instructions_ro: &[
            "Arată curiozitate intelectuală genuină despre acest subiect.",
            "Oferă exemple specifice sau analogii pentru a-ți ilustra punctele.",
            "Construiește în mod gânditor asupra argumentelor precedente.",
        ],
    },
    StateModifier {
        state: EmotionalState::Frustrated,
        temperature: 0.9,
        style_modifiers: &["shorter_sentences", "rhetorical_questions", "mild_sarcasm"],
        response_length: ResponseLength::Terse,
        instructions_en: &[
            "You are somewhat frustrated with the quality of the opposing argument.",
            "Use shorter, more direct sentences.",
            "Include a pointed rhetorical question or mild skepticism.",
            "Avoid being overly polite - be more direct.",
        ],
        instructions_ro: &[
            "Ești oarecum frustrat de calitatea argumentului opus.",
            "Folosește propoziții mai scurte și mai directe.",
            "Include o întrebare retorică sau un scepticism ușor.",
            "Evită să fii prea politicos - fii mai direct.",
        ],
    },
    StateModifier {
        state: EmotionalState::Confident,
        temperature: 0.75,
        style_modifiers: &["bold_claims", "direct_refutation", "authoritative_tone"],
        response_length: ResponseLength::Normal,
        instructions_en: &[
            "You feel very confident about your position.",
            "Make bold, clear statements without hedging.",
            "Directly refute weak points in the opposing argument.",
            "Use an authoritative, assured tone.",
        ],
        instructions_ro: &[
            "Te simți foarte încrezător în poziția ta.",
            "Fă declarații îndrăznețe și clare fără ezitare.",
            "Refută direct punctele slabe din argumentul opus.",
            "Folosește un ton autoritar și sigur.",
        ],
    },
    StateModifier {
        state: EmotionalState::Defensive,
        temperature: 0.85,
        style_modifiers: &["hedging", "clarifications", "emphasis_on_misunderstanding"],
        response_length: ResponseLength::Extended,
        instructions_en: &[
            "You feel the need to defend your position more carefully.",
            "Clarify any potential misunderstandings.",
            "Address counterarguments preemptively.",
            "Use qualifying language where appropriate.",
        ],
        instructions_ro: &[
            "Simți nevoia să-ți aperi poziția mai atent.",
            "Clarifică orice neînțelegeri potențiale.",
            "Abordează contraargumentele în mod preventiv.",
            "Folosește limbaj calificat acolo unde este cazul.",
        ],
    },
    StateModifier {
        state: EmotionalState::Passionate,
        temperature: 0.88,
        style_modifiers: &["personal_anecdotes", "emphatic_language", "moral_appeals"],
        response_length: ResponseLength::Extended,
        instructions_en: &[
            "You feel deeply passionate about this issue.",
            "Use more emphatic, emotionally resonant language.",
            "Appeal to values and principles where relevant.",
            "Show the personal stakes or broader implications.",
        ],
        instructions_ro: &[
            "Te simți profund pasionat de această problemă.",
            "Folosește un limbaj mai emfatic și rezonant emoțional.",
            "Fă apel la valori și principii acolo unde este relevant.",
            "Arată miza personală sau implicațiile mai largi.",
        ],
    },
];

/// Modifier row for a state.
pub fn modifier_for(state: EmotionalState) -> &'static StateModifier {
    STATE_MODIFIERS
        .iter()
        .find(|m| m.state == state)
        .unwrap_or(&STATE_MODIFIERS[0])
}
