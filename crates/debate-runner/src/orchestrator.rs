//! Debate orchestrator — runs the round loop.
//!
//! ```text
//! round r:
//!   r > 1 ─► engine.advance_round(prev pro, prev con)
//!   base prompt ─► engine.modulate(side) ─► ArgumentRequest
//!   join!(debater.argue(pro), debater.argue(con)) ─► RoundReport
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use emotion_engine::{
    EmotionEngine, EmotionalState, Language, RandomSource, ResponseLength, Session, Side,
    StateUpdate,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::debater::{ArgumentRequest, Debater};
use crate::prompts::base_prompt;

/// One side's turn within a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideTurn {
    pub persona: Option<String>,
    /// State the argument was generated in.
    pub state: EmotionalState,
    pub temperature: f64,
    pub response_length: ResponseLength,
    pub applied_instructions: Vec<String>,
    pub argument: String,
    /// State update applied before this turn; `None` on the opening round.
    pub update: Option<StateUpdate>,
}

impl SideTurn {
    fn new(
        session: &Session,
        request: ArgumentRequest,
        applied_instructions: Vec<String>,
        argument: String,
        update: Option<StateUpdate>,
    ) -> Self {
        Self {
            state: session.current_state(request.side),
            persona: request.persona,
            temperature: request.temperature,
            response_length: request.response_length,
            applied_instructions,
            argument,
            update,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round: u32,
    pub pro: SideTurn,
    pub con: SideTurn,
}

impl RoundReport {
    pub fn turn(&self, side: Side) -> &SideTurn {
        match side {
            Side::Pro => &self.pro,
            Side::Con => &self.con,
        }
    }
}

/// Full record of one debate run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebateReport {
    pub session_id: String,
    pub topic: String,
    pub language: Language,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub rounds: Vec<RoundReport>,
    pub final_pro_state: EmotionalState,
    pub final_con_state: EmotionalState,
    /// Number of updates that moved a side to a different state.
    pub state_changes: usize,
}

impl DebateReport {
    /// States each side argued in, round by round.
    pub fn trajectory(&self, side: Side) -> Vec<EmotionalState> {
        self.rounds.iter().map(|r| r.turn(side).state).collect()
    }
}

pub struct DebateOrchestrator<D, R: RandomSource> {
    engine: EmotionEngine<R>,
    debater: D,
    rounds: u32,
    language: Language,
}

impl<D: Debater, R: RandomSource> DebateOrchestrator<D, R> {
    pub fn new(engine: EmotionEngine<R>, debater: D, rounds: u32) -> Self {
        let language = engine.language();
        Self {
            engine,
            debater,
            rounds,
            language,
        }
    }

    /// Override the engine's default instruction language for this debate.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn engine(&self) -> &EmotionEngine<R> {
        &self.engine
    }

    pub async fn run(
        &mut self,
        topic: &str,
        pro_persona: Option<&str>,
        con_persona: Option<&str>,
    ) -> Result<DebateReport> {
        let started_at = Utc::now();
        let mut session = self.engine.initialize(pro_persona, con_persona);
        let mut reports: Vec<RoundReport> = Vec::with_capacity(self.rounds as usize);
        let mut state_changes = 0;

        info!(
            session = %session.id,
            topic,
            rounds = self.rounds,
            language = %self.language,
            "Debate starting"
        );

        for round in 1..=self.rounds {
            let previous = reports.last();
            let (pro_prev, con_prev) = match previous {
                Some(r) => (Some(r.pro.argument.as_str()), Some(r.con.argument.as_str())),
                None => (None, None),
            };

            let mut updates = self
                .engine
                .advance_round(&mut session, round, pro_prev, con_prev)
                .into_iter();
            let pro_update = updates.next();
            let con_update = updates.next();
            state_changes += pro_update
                .iter()
                .chain(con_update.iter())
                .filter(|u| u.changed())
                .count();

            let (pro_request, pro_instructions) =
                self.request(&session, Side::Pro, topic, round, con_prev);
            let (con_request, con_instructions) =
                self.request(&session, Side::Con, topic, round, pro_prev);

            let (pro_argument, con_argument) = tokio::join!(
                self.debater.argue(&pro_request),
                self.debater.argue(&con_request)
            );
            let pro_argument =
                pro_argument.with_context(|| format!("Pro debater failed in round {round}"))?;
            let con_argument =
                con_argument.with_context(|| format!("Con debater failed in round {round}"))?;

            info!(
                round,
                pro_state = %session.current_state(Side::Pro),
                con_state = %session.current_state(Side::Con),
                "Round complete"
            );

            reports.push(RoundReport {
                round,
                pro: SideTurn::new(
                    &session,
                    pro_request,
                    pro_instructions,
                    pro_argument,
                    pro_update,
                ),
                con: SideTurn::new(
                    &session,
                    con_request,
                    con_instructions,
                    con_argument,
                    con_update,
                ),
            });
        }

        Ok(DebateReport {
            session_id: session.id.to_string(),
            topic: topic.to_string(),
            language: self.language,
            started_at,
            finished_at: Utc::now(),
            rounds: reports,
            final_pro_state: session.current_state(Side::Pro),
            final_con_state: session.current_state(Side::Con),
            state_changes,
        })
    }

    fn request(
        &self,
        session: &Session,
        side: Side,
        topic: &str,
        round: u32,
        opponent_previous: Option<&str>,
    ) -> (ArgumentRequest, Vec<String>) {
        let persona = session.side(side).persona();
        let base = base_prompt(
            side,
            persona,
            topic,
            round,
            self.rounds,
            opponent_previous,
            self.language,
        );
        let modulation = self.engine.modulate_in(session, side, &base, self.language);
        let request = ArgumentRequest {
            side,
            persona: persona.map(str::to_string),
            round,
            topic: topic.to_string(),
            prompt: modulation.enhanced_prompt,
            temperature: modulation.temperature,
            response_length: modulation.response_length,
            language: self.language,
        };
        (request, modulation.debug.applied_instructions)
    }
}
