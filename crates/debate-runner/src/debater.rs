//! The debater seam — whatever produces argument text for one side.

use async_trait::async_trait;
use emotion_engine::{Language, ResponseLength, Side};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Everything a debater needs to produce one argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentRequest {
    pub side: Side,
    pub persona: Option<String>,
    /// 1-based.
    pub round: u32,
    pub topic: String,
    /// Base prompt with the emotional-context section already appended.
    pub prompt: String,
    pub temperature: f64,
    pub response_length: ResponseLength,
    pub language: Language,
}

#[derive(Debug, Error)]
pub enum DebaterError {
    /// Recorded transcript has no argument for this turn.
    #[error("No recorded {side} argument for round {round}")]
    MissingRound { side: Side, round: u32 },

    /// Backend failed to produce an argument.
    #[error("Debater backend failed: {0}")]
    Backend(String),
}

/// Produces argument text. Implemented by model backends and replayers.
///
/// Trait exists so the orchestrator can be driven without an inference
/// endpoint.
#[async_trait]
pub trait Debater: Send + Sync {
    async fn argue(&self, request: &ArgumentRequest) -> Result<String, DebaterError>;
}

#[async_trait]
impl<T: Debater + ?Sized> Debater for Arc<T> {
    async fn argue(&self, request: &ArgumentRequest) -> Result<String, DebaterError> {
        (**self).argue(request).await
    }
}
