//! Recorded debate transcripts and the debater that replays them.

use anyhow::{Context, Result};
use async_trait::async_trait;
use emotion_engine::{Language, Side};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::debater::{ArgumentRequest, Debater, DebaterError};

/// Both arguments of one recorded round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptRound {
    pub pro: String,
    pub con: String,
}

impl TranscriptRound {
    pub fn argument(&self, side: Side) -> &str {
        match side {
            Side::Pro => &self.pro,
            Side::Con => &self.con,
        }
    }
}

/// A recorded debate, as stored on disk (JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub topic: String,
    #[serde(default)]
    pub pro_persona: Option<String>,
    #[serde(default)]
    pub con_persona: Option<String>,
    /// Instruction language for this debate; the runner default otherwise.
    #[serde(default)]
    pub language: Option<Language>,
    pub rounds: Vec<TranscriptRound>,
}

impl Transcript {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse debate transcript JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read transcript {}", path.display()))?;
        let transcript = Self::from_json(&content)
            .with_context(|| format!("Invalid transcript {}", path.display()))?;
        debug!(
            path = %path.display(),
            rounds = transcript.rounds.len(),
            "Loaded debate transcript"
        );
        Ok(transcript)
    }
}

/// Replays recorded arguments, ignoring prompt and temperature.
#[derive(Debug, Clone)]
pub struct TranscriptDebater {
    rounds: Vec<TranscriptRound>,
}

impl TranscriptDebater {
    pub fn new(rounds: Vec<TranscriptRound>) -> Self {
        Self { rounds }
    }

    pub fn rounds(&self) -> usize {
        self.rounds.len()
    }
}

impl From<&Transcript> for TranscriptDebater {
    fn from(transcript: &Transcript) -> Self {
        Self::new(transcript.rounds.clone())
    }
}

#[async_trait]
impl Debater for TranscriptDebater {
    async fn argue(&self, request: &ArgumentRequest) -> Result<String, DebaterError> {
        let index = request.round.checked_sub(1).map(|i| i as usize);
        index
            .and_then(|i| self.rounds.get(i))
            .map(|round| round.argument(request.side).to_string())
            .ok_or(DebaterError::MissingRound {
                side: request.side,
                round: request.round,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emotion_engine::ResponseLength;

    fn request(side: Side, round: u32) -> ArgumentRequest {
        ArgumentRequest {
            side,
            persona: None,
            round,
            topic: "t".into(),
            prompt: String::new(),
            temperature: 0.8,
            response_length: ResponseLength::Normal,
            language: Language::En,
        }
    }

    #[test]
    fn test_transcript_parses_optional_fields() {
        let transcript = Transcript::from_json(
            r#"{"topic": "Cats vs dogs", "rounds": [{"pro": "a", "con": "b"}]}"#,
        )
        .unwrap();
        assert_eq!(transcript.pro_persona, None);
        assert_eq!(transcript.language, None);
        assert_eq!(transcript.rounds[0].argument(Side::Con), "b");

        let transcript = Transcript::from_json(
            r#"{"topic": "t", "pro_persona": "Socrate", "language": "ro", "rounds": []}"#,
        )
        .unwrap();
        assert_eq!(transcript.pro_persona.as_deref(), Some("Socrate"));
        assert_eq!(transcript.language, Some(Language::Ro));
    }

    #[test]
    fn test_transcript_rejects_missing_topic() {
        assert!(Transcript::from_json(r#"{"rounds": []}"#).is_err());
    }

    #[tokio::test]
    async fn test_replays_by_round_and_side() {
        let debater = TranscriptDebater::new(vec![
            TranscriptRound {
                pro: "p1".into(),
                con: "c1".into(),
            },
            TranscriptRound {
                pro: "p2".into(),
                con: "c2".into(),
            },
        ]);
        assert_eq!(debater.argue(&request(Side::Pro, 1)).await.unwrap(), "p1");
        assert_eq!(debater.argue(&request(Side::Con, 2)).await.unwrap(), "c2");
    }

    #[tokio::test]
    async fn test_missing_round_is_an_error() {
        let debater = TranscriptDebater::new(vec![]);
        for round in [0, 1] {
            let err = debater.argue(&request(Side::Pro, round)).await.unwrap_err();
            assert!(matches!(err, DebaterError::MissingRound { side: Side::Pro, .. }));
        }
    }
}
