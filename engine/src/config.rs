//! Engine configuration from environment variables.
//!
//! | Variable | Default | Description |
//! |---|---|---|
//! | `EMOTION_LANGUAGE` | `en` | Language of prompt instructions (`en`, `ro`) |
//! | `EMOTION_PERSONAS_PATH` | unset | YAML persona table merged over the built-ins |
//! | `EMOTION_SEED` | unset | Fixed seed for the cooldown roll |

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{EngineError, EngineResult};
use crate::modulation::Language;
use crate::persona::PersonaCatalog;

pub const LANGUAGE_ENV: &str = "EMOTION_LANGUAGE";
pub const PERSONAS_PATH_ENV: &str = "EMOTION_PERSONAS_PATH";
pub const SEED_ENV: &str = "EMOTION_SEED";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Default language for prompt instructions.
    #[serde(default)]
    pub language: Language,
    /// Optional persona table merged over the built-in catalog.
    #[serde(default)]
    pub personas_path: Option<PathBuf>,
    /// Seed for the cooldown roll. `None` seeds from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl EngineConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> EngineResult<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> EngineResult<Self> {
        let language = match lookup(LANGUAGE_ENV) {
            Some(code) => code.parse().map_err(|_| EngineError::InvalidEnv {
                var: LANGUAGE_ENV.to_string(),
                value: code,
            })?,
            None => Language::default(),
        };

        let personas_path = lookup(PERSONAS_PATH_ENV)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let seed = match lookup(SEED_ENV) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| EngineError::InvalidEnv {
                var: SEED_ENV.to_string(),
                value: raw,
            })?),
            None => None,
        };

        Ok(Self {
            language,
            personas_path,
            seed,
        })
    }

    /// Built-in catalog, with the configured persona table merged in.
    pub fn build_catalog(&self) -> EngineResult<PersonaCatalog> {
        let mut catalog = PersonaCatalog::builtin();
        if let Some(path) = &self.personas_path {
            catalog.load_yaml_file(path)?;
        }
        Ok(catalog)
    }
}
