//! Runner configuration.
//!
//! Layering: defaults, then environment (or a TOML file when one is given),
//! then CLI overrides applied by the binary.
//!
//! | Variable | Default | Description |
//! |---|---|---|
//! | `DEBATE_ROUNDS` | `3` | Rounds per debate |
//! | `EMOTION_LANGUAGE` | `en` | See [`EngineConfig`] |
//! | `EMOTION_PERSONAS_PATH` | unset | See [`EngineConfig`] |
//! | `EMOTION_SEED` | unset | See [`EngineConfig`] |

use anyhow::{bail, Context, Result};
use emotion_engine::{EmotionEngine, EmotionalState, EngineConfig, Modulator};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub const ROUNDS_ENV: &str = "DEBATE_ROUNDS";
pub const DEFAULT_ROUNDS: u32 = 3;

fn default_rounds() -> u32 {
    DEFAULT_ROUNDS
}

/// Top-level runner configuration.
///
/// ```toml
/// rounds = 4
///
/// [engine]
/// language = "ro"
/// seed = 7
///
/// [base_temperatures]
/// frustrated = 0.95
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunnerConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default = "default_rounds")]
    pub rounds: u32,
    /// Per-state overrides of the built-in base temperatures.
    #[serde(default)]
    pub base_temperatures: HashMap<EmotionalState, f64>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            rounds: DEFAULT_ROUNDS,
            base_temperatures: HashMap::new(),
        }
    }
}

impl RunnerConfig {
    pub fn from_env() -> Result<Self> {
        let engine = EngineConfig::from_env().context("Invalid engine environment")?;
        let rounds = match std::env::var(ROUNDS_ENV) {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("{ROUNDS_ENV} must be a positive integer, got {raw:?}"))?,
            Err(_) => DEFAULT_ROUNDS,
        };
        let config = Self {
            engine,
            rounds,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse runner config TOML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read runner config {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid runner config {}", path.display()))
    }

    /// The TOML file when given, the environment otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_toml_file(path),
            None => Self::from_env(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.rounds == 0 {
            bail!("Debate needs at least one round");
        }
        for (state, temperature) in &self.base_temperatures {
            if !temperature.is_finite() || *temperature < 0.0 {
                bail!("Base temperature for {state} must be non-negative, got {temperature}");
            }
        }
        Ok(())
    }

    pub fn modulator(&self) -> Modulator {
        self.base_temperatures
            .iter()
            .fold(Modulator::new(), |modulator, (state, temperature)| {
                modulator.with_base_temperature(*state, *temperature)
            })
    }

    pub fn build_engine(&self) -> Result<EmotionEngine> {
        let engine =
            EmotionEngine::from_config(&self.engine).context("Failed to build emotion engine")?;
        Ok(engine.with_modulator(self.modulator()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emotion_engine::Language;

    #[test]
    fn test_defaults() {
        let config = RunnerConfig::default();
        assert_eq!(config.rounds, 3);
        assert!(config.base_temperatures.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_layout() {
        let config = RunnerConfig::from_toml(
            r#"
rounds = 4

[engine]
language = "ro"
seed = 7

[base_temperatures]
frustrated = 0.95
"#,
        )
        .unwrap();
        assert_eq!(config.rounds, 4);
        assert_eq!(config.engine.language, Language::Ro);
        assert_eq!(config.engine.seed, Some(7));
        assert_eq!(config.base_temperatures[&EmotionalState::Frustrated], 0.95);
        assert_eq!(
            config.modulator().base_temperature(EmotionalState::Frustrated),
            0.95
        );
        assert_eq!(config.modulator().base_temperature(EmotionalState::Neutral), 0.8);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(RunnerConfig::from_toml("").unwrap(), RunnerConfig::default());
    }

    #[test]
    fn test_rejects_zero_rounds_and_bad_temperature() {
        assert!(RunnerConfig::from_toml("rounds = 0").is_err());
        assert!(RunnerConfig::from_toml("[base_temperatures]\nengaged = -0.1").is_err());
        assert!(RunnerConfig::from_toml("[base_temperatures]\nbored = 0.5").is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = RunnerConfig::load(Some(Path::new("/nonexistent/runner.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read runner config"));
    }
}
