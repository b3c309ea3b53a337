//! Emotional State Engine for AI debates
//!
//! This library gives each AI debater a persona-shaped emotional state that
//! evolves across rounds:
//! - Trigger analysis of the opponent's last argument against categorized
//!   phrase tables, weighted by persona sensitivity
//! - A transition policy mapping the dominant trigger, persona progression
//!   and round number onto one of six states, with a stochastic cooldown
//! - Modulation of the next prompt and sampling temperature from the
//!   current state, in English or Romanian
//!
//! # Usage
//!
//! ```no_run
//! use emotion_engine::{EmotionEngine, Side};
//!
//! let mut engine: EmotionEngine = EmotionEngine::default();
//! let mut session = engine.initialize(Some("Socrates"), Some("Nietzsche"));
//!
//! // Before round 2, each side reacts to the other's round-1 argument.
//! engine.advance_round(&mut session, 2, Some("Research shows..."), Some("You are wrong."));
//!
//! let next = engine.modulate(&session, Side::Pro, "Argue for the motion.");
//! println!("{} @ {}", next.enhanced_prompt, next.temperature);
//! ```
//!
//! # Configuration
//!
//! See [`config::EngineConfig::from_env`] for the environment variables.

#![allow(clippy::uninlined_format_args)]

pub mod config;
pub mod engine;
pub mod error;
pub mod modulation;
pub mod persona;
pub mod session;
pub mod state;
pub mod transition;
pub mod triggers;

pub use config::EngineConfig;
pub use engine::EmotionEngine;
pub use error::{EngineError, EngineResult};
pub use state::EmotionalState;

// Re-export session types
pub use session::{Session, Side, SideState, StateUpdate, HISTORY_LIMIT};

// Re-export trigger types
pub use triggers::{Analysis, DetectedTrigger, TriggerAnalyzer, TriggerCategory, TriggerScan};

// Re-export persona types
pub use persona::{
    EmotionalTriggers, PersonaCatalog, PersonaProfile, PersonaTable, StateProgression,
    DEFAULT_PERSONA,
};

// Re-export transition types
pub use transition::{FixedRoll, RandomSource, Transition, TransitionKind, TransitionPolicy};

// Re-export modulation types
pub use modulation::{Language, ModulationResult, Modulator, ResponseLength};
