//! Prompt/sampling modulator — turn a side's emotional state into a prompt
//! addendum and an adjusted sampling temperature.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::modifiers::{modifier_for, Language, ResponseLength};
use crate::persona::PersonaProfile;
use crate::state::EmotionalState;

/// Label of the appended prompt section.
pub const EMOTIONAL_CONTEXT_HEADER: &str = "EMOTIONAL CONTEXT:";

/// Upper bound on any modulated temperature.
pub const MAX_TEMPERATURE: f64 = 1.0;

/// Observability metadata. Not used for control flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModulationDebug {
    pub original_state: EmotionalState,
    pub applied_instructions: Vec<String>,
    pub temperature_adjustment: f64,
    pub intensity_modifier: f64,
    /// Base temperament of the persona profile used.
    pub persona_profile: String,
    pub language: Language,
}

/// Prompt and sampling parameters for the next argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModulationResult {
    /// Base prompt with the emotional-context section appended.
    pub enhanced_prompt: String,
    /// The appended section alone; empty when the state has no instructions.
    pub prompt_addition: String,
    pub temperature: f64,
    pub style_modifiers: Vec<String>,
    pub response_length: ResponseLength,
    pub debug: ModulationDebug,
}

/// Maps states to prompt instructions and temperatures.
#[derive(Debug, Clone, Default)]
pub struct Modulator {
    base_temperatures: HashMap<EmotionalState, f64>,
}

impl Modulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the base temperature for one state.
    pub fn with_base_temperature(mut self, state: EmotionalState, temperature: f64) -> Self {
        self.base_temperatures.insert(state, temperature);
        self
    }

    pub fn base_temperature(&self, state: EmotionalState) -> f64 {
        self.base_temperatures
            .get(&state)
            .copied()
            .unwrap_or_else(|| modifier_for(state).temperature)
    }

    pub fn modulate(
        &self,
        base_prompt: &str,
        state: EmotionalState,
        profile: &PersonaProfile,
        language: Language,
    ) -> ModulationResult {
        let modifier = modifier_for(state);
        let instructions: Vec<String> = modifier
            .instructions(language)
            .iter()
            .map(|s| s.to_string())
            .collect();

        let prompt_addition = if instructions.is_empty() {
            String::new()
        } else {
            format!(
                "\n\n{} {}\n",
                EMOTIONAL_CONTEXT_HEADER,
                instructions.join(" ")
            )
        };

        let intensity_modifier = profile.state_progression.max_intensity.min(1.0);
        let temperature = (self.base_temperature(state) * intensity_modifier).min(MAX_TEMPERATURE);

        ModulationResult {
            enhanced_prompt: format!("{}{}", base_prompt, prompt_addition),
            prompt_addition,
            temperature,
            style_modifiers: modifier.style_modifiers.iter().map(|s| s.to_string()).collect(),
            response_length: modifier.response_length,
            debug: ModulationDebug {
                original_state: state,
                applied_instructions: instructions,
                temperature_adjustment: temperature,
                intensity_modifier,
                persona_profile: profile.base_temperament.clone(),
                language,
            },
        }
    }
}
