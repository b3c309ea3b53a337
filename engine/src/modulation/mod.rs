//! Modulation — map an emotional state to prompt augmentation and sampling
//! temperature, scaled by persona intensity.

pub mod modifiers;
pub mod modulator;

pub use modifiers::{modifier_for, Language, ResponseLength, StateModifier, STATE_MODIFIERS};
pub use modulator::{
    ModulationDebug, ModulationResult, Modulator, EMOTIONAL_CONTEXT_HEADER, MAX_TEMPERATURE,
};
