//! Session state store — per-debate, per-side emotional state with bounded
//! history.
//!
//! A session lives for one debate's generation run and is dropped
//! afterwards. It never touches disk; `Serialize` exists for logs and
//! snapshots only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::state::EmotionalState;
use crate::triggers::Analysis;

/// Maximum number of states kept in a side's history.
pub const HISTORY_LIMIT: usize = 5;

/// Side of a debate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Pro,
    Con,
}

impl Side {
    pub fn both() -> [Side; 2] {
        [Self::Pro, Self::Con]
    }

    pub fn opponent(self) -> Side {
        match self {
            Self::Pro => Self::Con,
            Self::Con => Self::Pro,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pro => "pro",
            Self::Con => "con",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Side {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pro" => Ok(Self::Pro),
            "con" => Ok(Self::Con),
            _ => Err(EngineError::UnknownSide(s.to_string())),
        }
    }
}

/// Emotional state of one side.
///
/// Invariants: history holds at most [`HISTORY_LIMIT`] entries and its last
/// entry is always the current state.
#[derive(Debug, Clone, Serialize)]
pub struct SideState {
    persona: Option<String>,
    current_state: EmotionalState,
    state_history: Vec<EmotionalState>,
    last_analysis: Option<Analysis>,
}

impl SideState {
    pub fn new(persona: Option<&str>) -> Self {
        Self {
            persona: persona.map(str::to_string),
            current_state: EmotionalState::Neutral,
            state_history: vec![EmotionalState::Neutral],
            last_analysis: None,
        }
    }

    pub fn persona(&self) -> Option<&str> {
        self.persona.as_deref()
    }

    pub fn current_state(&self) -> EmotionalState {
        self.current_state
    }

    /// Oldest first.
    pub fn state_history(&self) -> &[EmotionalState] {
        &self.state_history
    }

    pub fn last_analysis(&self) -> Option<&Analysis> {
        self.last_analysis.as_ref()
    }

    /// Apply a new state and return the one it replaced.
    pub(crate) fn record(&mut self, analysis: Analysis) -> EmotionalState {
        let previous = self.current_state;
        self.current_state = analysis.recommended_state;
        self.state_history.push(analysis.recommended_state);
        if self.state_history.len() > HISTORY_LIMIT {
            self.state_history.remove(0);
        }
        self.last_analysis = Some(analysis);
        previous
    }
}

/// Emotional state of both sides of one debate.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub pro: SideState,
    pub con: SideState,
}

impl Session {
    /// Both sides neutral with a single-entry history.
    pub fn new(pro_persona: Option<&str>, con_persona: Option<&str>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            pro: SideState::new(pro_persona),
            con: SideState::new(con_persona),
        }
    }

    pub fn side(&self, side: Side) -> &SideState {
        match side {
            Side::Pro => &self.pro,
            Side::Con => &self.con,
        }
    }

    pub(crate) fn side_mut(&mut self, side: Side) -> &mut SideState {
        match side {
            Side::Pro => &mut self.pro,
            Side::Con => &mut self.con,
        }
    }

    pub fn current_state(&self, side: Side) -> EmotionalState {
        self.side(side).current_state()
    }
}

/// Summary of one state update, for logging and telemetry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateUpdate {
    pub side: Side,
    pub previous_state: EmotionalState,
    pub new_state: EmotionalState,
    pub analysis: Analysis,
    pub persona: Option<String>,
    pub round: u32,
    pub at: DateTime<Utc>,
}

impl StateUpdate {
    pub fn changed(&self) -> bool {
        self.previous_state != self.new_state
    }
}
