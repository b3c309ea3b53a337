//! Persona emotional profiles.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{EngineError, EngineResult};
use crate::triggers::TriggerCategory;

/// Sensitivity used for any category a profile does not list.
pub const DEFAULT_SENSITIVITY: f64 = 0.3;

/// How quickly a persona escalates, cools down, and how far it can go.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateProgression {
    /// Scales trigger strength before the category rule is applied.
    pub escalation_rate: f64,
    /// Probability of returning to neutral when no trigger fires.
    pub cooldown_rate: f64,
    /// Cap on effective strength; also the temperature multiplier.
    pub max_intensity: f64,
}

/// Emotional profile of one persona.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaProfile {
    /// Informational label ("calm", "intense", ...).
    pub base_temperament: String,
    /// Category key to sensitivity coefficient.
    #[serde(default)]
    pub trigger_sensitivity: BTreeMap<String, f64>,
    pub state_progression: StateProgression,
}

impl PersonaProfile {
    pub fn new(base_temperament: impl Into<String>, state_progression: StateProgression) -> Self {
        Self {
            base_temperament: base_temperament.into(),
            trigger_sensitivity: BTreeMap::new(),
            state_progression,
        }
    }

    /// Builder-style sensitivity setter.
    pub fn with_sensitivity(mut self, key: impl Into<String>, value: f64) -> Self {
        self.trigger_sensitivity.insert(key.into(), value);
        self
    }

    /// Sensitivity for a category. Missing or zero entries read as
    /// [`DEFAULT_SENSITIVITY`].
    pub fn sensitivity(&self, category: TriggerCategory) -> f64 {
        self.trigger_sensitivity
            .get(category.as_str())
            .copied()
            .filter(|v| *v > 0.0)
            .unwrap_or(DEFAULT_SENSITIVITY)
    }

    /// Check that every coefficient lies in [0, 1].
    pub fn validate(&self, persona: &str) -> EngineResult<()> {
        let progression = &self.state_progression;
        let fields = [
            ("escalation_rate", progression.escalation_rate),
            ("cooldown_rate", progression.cooldown_rate),
            ("max_intensity", progression.max_intensity),
        ];
        let sensitivities = self
            .trigger_sensitivity
            .iter()
            .map(|(key, value)| (key.as_str(), *value));

        for (field, value) in fields.into_iter().chain(sensitivities) {
            if !(0.0..=1.0).contains(&value) {
                return Err(EngineError::InvalidCoefficient {
                    persona: persona.to_string(),
                    field: field.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progression() -> StateProgression {
        StateProgression {
            escalation_rate: 0.5,
            cooldown_rate: 0.5,
            max_intensity: 0.8,
        }
    }

    #[test]
    fn test_unlisted_category_uses_default_sensitivity() {
        let profile = PersonaProfile::new("calm", progression())
            .with_sensitivity("logical_fallacy", 0.8);
        assert_eq!(profile.sensitivity(TriggerCategory::LogicalFallacy), 0.8);
        assert_eq!(
            profile.sensitivity(TriggerCategory::Altruism),
            DEFAULT_SENSITIVITY
        );
    }

    #[test]
    fn test_validate_rejects_out_of_range_values() {
        let profile = PersonaProfile::new("calm", progression()).with_sensitivity("dogmatism", 1.2);
        let err = profile.validate("Tester").unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidCoefficient { ref field, .. } if field == "dogmatism"
        ));

        let mut bad = PersonaProfile::new("calm", progression());
        bad.state_progression.cooldown_rate = -0.1;
        assert!(bad.validate("Tester").is_err());
    }

    #[test]
    fn test_validate_accepts_bounds() {
        let mut profile = PersonaProfile::new("calm", progression())
            .with_sensitivity("weakness", 0.0)
            .with_sensitivity("altruism", 1.0);
        profile.state_progression.max_intensity = 1.0;
        assert!(profile.validate("Tester").is_ok());
    }

    #[test]
    fn test_zero_sensitivity_reads_as_default() {
        let profile = PersonaProfile::new("calm", progression())
            .with_sensitivity("weakness", 0.0)
            .with_sensitivity("altruism", 0.25);
        assert_eq!(profile.sensitivity(TriggerCategory::Weakness), DEFAULT_SENSITIVITY);
        assert_eq!(profile.sensitivity(TriggerCategory::Altruism), 0.25);
        assert_eq!(profile.sensitivity(TriggerCategory::Dogmatism), DEFAULT_SENSITIVITY);
    }
}
