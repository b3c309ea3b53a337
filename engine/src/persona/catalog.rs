//! Persona catalog — built-in emotional profiles plus YAML overrides.
//!
//! Lookup is by exact display name. Any name the catalog does not know
//! resolves to the [`DEFAULT_PERSONA`] profile.
//!
//! # YAML format
//!
//! ```yaml
//! personas:
//!   Diogenes:
//!     base_temperament: rebellious
//!     trigger_sensitivity:
//!       conventional_wisdom: 0.9
//!       bourgeois_values: 0.8
//!     state_progression:
//!       escalation_rate: 0.7
//!       cooldown_rate: 0.2
//!       max_intensity: 0.9
//!
//! # Enriched personas are given as raw trigger lists instead.
//! enriched:
//!   Hypatia:
//!     strong_negative: ["Religious dogma", "Personal insults"]
//!     strong_positive: ["Mathematical evidence"]
//!     escalation_rate: 0.4
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

use super::enrichment::EmotionalTriggers;
use super::profile::{PersonaProfile, StateProgression};
use crate::error::{EngineError, EngineResult};

/// Name of the fallback profile.
pub const DEFAULT_PERSONA: &str = "Default AI";

struct ProfileSeed {
    names: &'static [&'static str],
    temperament: &'static str,
    sensitivity: &'static [(&'static str, f64)],
    escalation_rate: f64,
    cooldown_rate: f64,
    max_intensity: f64,
}

// Romanian display names share the English profile.
static BUILTIN_PROFILES: &[ProfileSeed] = &[
    ProfileSeed {
        names: &["Socrates", "Socrate"],
        temperament: "calm",
        sensitivity: &[
            ("logical_fallacy", 0.8),
            ("personal_attack", 0.2),
            ("strong_evidence", 0.7),
            ("circular_reasoning", 0.9),
            ("appeal_to_authority", 0.6),
            ("weak_argument", 0.5),
        ],
        escalation_rate: 0.3,
        cooldown_rate: 0.5,
        max_intensity: 0.7,
    },
    ProfileSeed {
        names: &["Albert Einstein"],
        temperament: "curious",
        sensitivity: &[
            ("scientific_inaccuracy", 0.8),
            ("anti_intellectualism", 0.9),
            ("strong_evidence", 0.8),
            ("creative_insight", 0.9),
            ("dogmatism", 0.7),
            ("weak_argument", 0.4),
        ],
        escalation_rate: 0.4,
        cooldown_rate: 0.6,
        max_intensity: 0.8,
    },
    ProfileSeed {
        names: &["Shakespeare"],
        temperament: "dramatic",
        sensitivity: &[
            ("personal_attack", 0.6),
            ("artistic_critique", 0.7),
            ("moral_complexity", 0.8),
            ("strong_evidence", 0.6),
            ("shallow_thinking", 0.8),
            ("weak_argument", 0.7),
        ],
        escalation_rate: 0.6,
        cooldown_rate: 0.4,
        max_intensity: 0.9,
    },
    ProfileSeed {
        names: &["Nietzsche"],
        temperament: "intense",
        sensitivity: &[
            ("moral_absolutism", 0.9),
            ("herd_mentality", 0.8),
            ("weakness", 0.8),
            ("strong_evidence", 0.7),
            ("personal_attack", 0.7),
            ("conventional_wisdom", 0.8),
        ],
        escalation_rate: 0.8,
        cooldown_rate: 0.3,
        max_intensity: 1.0,
    },
    ProfileSeed {
        names: &["Ayn Rand"],
        temperament: "assertive",
        sensitivity: &[
            ("collectivism", 0.9),
            ("altruism", 0.8),
            ("government_intervention", 0.8),
            ("strong_evidence", 0.6),
            ("personal_attack", 0.7),
            ("weak_argument", 0.6),
        ],
        escalation_rate: 0.7,
        cooldown_rate: 0.4,
        max_intensity: 0.9,
    },
    ProfileSeed {
        names: &["Tristan Tzara"],
        temperament: "rebellious",
        sensitivity: &[
            ("traditionalism", 0.8),
            ("rationalism", 0.7),
            ("bourgeois_values", 0.9),
            ("strong_evidence", 0.5),
            ("personal_attack", 0.6),
            ("conventional_logic", 0.8),
        ],
        escalation_rate: 0.7,
        cooldown_rate: 0.3,
        max_intensity: 0.9,
    },
    ProfileSeed {
        names: &[DEFAULT_PERSONA, "IA Implicită"],
        temperament: "neutral",
        sensitivity: &[
            ("logical_fallacy", 0.5),
            ("personal_attack", 0.3),
            ("strong_evidence", 0.6),
            ("weak_argument", 0.4),
        ],
        escalation_rate: 0.4,
        cooldown_rate: 0.6,
        max_intensity: 0.6,
    },
];

impl ProfileSeed {
    fn to_profile(&self) -> PersonaProfile {
        let progression = StateProgression {
            escalation_rate: self.escalation_rate,
            cooldown_rate: self.cooldown_rate,
            max_intensity: self.max_intensity,
        };
        self.sensitivity.iter().fold(
            PersonaProfile::new(self.temperament, progression),
            |profile, (key, value)| profile.with_sensitivity(*key, *value),
        )
    }
}

/// On-disk persona table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonaTable {
    #[serde(default)]
    pub personas: BTreeMap<String, PersonaProfile>,
    /// Enrichment trigger lists, converted with [`EmotionalTriggers::to_profile`].
    #[serde(default)]
    pub enriched: BTreeMap<String, EmotionalTriggers>,
}

/// Lookup table of persona profiles with a guaranteed fallback.
#[derive(Debug, Clone)]
pub struct PersonaCatalog {
    profiles: BTreeMap<String, PersonaProfile>,
    fallback: PersonaProfile,
}

impl Default for PersonaCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PersonaCatalog {
    /// Catalog holding the built-in personas.
    pub fn builtin() -> Self {
        let mut profiles = BTreeMap::new();
        let mut fallback = None;
        for seed in BUILTIN_PROFILES {
            let profile = seed.to_profile();
            for name in seed.names {
                if *name == DEFAULT_PERSONA {
                    fallback = Some(profile.clone());
                }
                profiles.insert((*name).to_string(), profile.clone());
            }
        }
        let fallback = fallback.unwrap_or_else(|| {
            PersonaProfile::new(
                "neutral",
                StateProgression {
                    escalation_rate: 0.4,
                    cooldown_rate: 0.6,
                    max_intensity: 0.6,
                },
            )
        });
        Self { profiles, fallback }
    }

    /// Profile registered under exactly this name.
    pub fn get(&self, name: &str) -> Option<&PersonaProfile> {
        self.profiles.get(name)
    }

    /// Profile for a side's persona, falling back to [`DEFAULT_PERSONA`].
    pub fn resolve(&self, name: Option<&str>) -> &PersonaProfile {
        name.and_then(|n| self.profiles.get(n))
            .unwrap_or(&self.fallback)
    }

    pub fn fallback(&self) -> &PersonaProfile {
        &self.fallback
    }

    pub fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Register or replace a profile. Returns the profile it replaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        profile: PersonaProfile,
    ) -> EngineResult<Option<PersonaProfile>> {
        let name = name.into();
        profile.validate(&name)?;
        if name == DEFAULT_PERSONA {
            self.fallback = profile.clone();
        }
        Ok(self.profiles.insert(name, profile))
    }

    /// Register a persona from its enrichment trigger lists.
    pub fn insert_enriched(
        &mut self,
        name: impl Into<String>,
        triggers: &EmotionalTriggers,
    ) -> EngineResult<Option<PersonaProfile>> {
        self.insert(name, triggers.to_profile())
    }

    /// Merge a YAML persona table over this catalog.
    ///
    /// The whole table is validated before anything is merged, so a bad
    /// entry leaves the catalog untouched. Returns the number of profiles
    /// merged.
    pub fn load_yaml(&mut self, yaml: &str) -> EngineResult<usize> {
        self.merge_table(parse_table(yaml, None)?)
    }

    /// Merge a YAML persona table file over this catalog.
    pub fn load_yaml_file(&mut self, path: &Path) -> EngineResult<usize> {
        let content = std::fs::read_to_string(path).map_err(|source| EngineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let count = self.merge_table(parse_table(&content, Some(path))?)?;
        debug!(path = %path.display(), count, "Loaded persona table");
        Ok(count)
    }

    fn merge_table(&mut self, table: PersonaTable) -> EngineResult<usize> {
        let mut profiles = table.personas;
        for (name, triggers) in &table.enriched {
            profiles.insert(name.clone(), triggers.to_profile());
        }
        for (name, profile) in &profiles {
            profile.validate(name)?;
        }
        let count = profiles.len();
        for (name, profile) in profiles {
            if self.contains(&name) {
                warn!(persona = %name, "Persona table overrides existing profile");
            }
            self.insert(name, profile)?;
        }
        Ok(count)
    }
}

fn parse_table(yaml: &str, path: Option<&Path>) -> EngineResult<PersonaTable> {
    serde_yaml::from_str(yaml).map_err(|e| EngineError::InvalidPersonaTable {
        path: path.map(Path::to_path_buf),
        message: format!("YAML parse error: {}", e),
    })
}
