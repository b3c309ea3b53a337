//! Persona emotional profiles: data model, built-in catalog, and
//! conversion from crowdsourced enrichment data.

pub mod catalog;
pub mod enrichment;
pub mod profile;

pub use catalog::{PersonaCatalog, PersonaTable, DEFAULT_PERSONA};
pub use enrichment::EmotionalTriggers;
pub use profile::{PersonaProfile, StateProgression, DEFAULT_SENSITIVITY};
