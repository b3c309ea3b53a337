//! Debate runner — drives multi-round AI debates through the emotion engine.
//!
//! Each round, the runner advances both sides' emotional state from the
//! previous round's arguments, modulates the next prompts, and asks a
//! [`Debater`] for both arguments concurrently. The crate ships a
//! transcript-replaying debater so recorded debates can be re-scored
//! offline; live model backends plug in through the same trait.

pub mod config;
pub mod debater;
pub mod orchestrator;
pub mod prompts;
pub mod transcript;

pub use config::RunnerConfig;
pub use debater::{ArgumentRequest, Debater, DebaterError};
pub use orchestrator::{DebateOrchestrator, DebateReport, RoundReport, SideTurn};
pub use transcript::{Transcript, TranscriptDebater, TranscriptRound};
