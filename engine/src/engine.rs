//! Emotion engine — the session-facing facade.
//!
//! Wires the trigger analyzer, transition policy and modulator to a persona
//! catalog and a random source. Callers own the [`Session`]; the engine only
//! mutates what it is handed.
//!
//! ```text
//! opponent text ─► TriggerAnalyzer::scan ─► TransitionPolicy::next_state ─► Session
//!                                                                             │
//! base prompt ──────────────────────────────► Modulator::modulate ◄───────────┘
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::modulation::{Language, ModulationResult, Modulator};
use crate::persona::PersonaCatalog;
use crate::session::{Session, Side, StateUpdate};
use crate::state::EmotionalState;
use crate::transition::{RandomSource, TransitionKind, TransitionPolicy};
use crate::triggers::{Analysis, TriggerAnalyzer};

pub struct EmotionEngine<R: RandomSource = ChaCha8Rng> {
    catalog: PersonaCatalog,
    analyzer: TriggerAnalyzer,
    policy: TransitionPolicy,
    modulator: Modulator,
    language: Language,
    rng: R,
}

impl EmotionEngine<ChaCha8Rng> {
    /// Engine with an OS-seeded cooldown roll.
    pub fn new(catalog: PersonaCatalog) -> Self {
        Self::with_rng(catalog, ChaCha8Rng::from_rng(&mut rand::rng()))
    }

    /// Engine whose cooldown rolls replay identically for the same seed.
    pub fn seeded(catalog: PersonaCatalog, seed: u64) -> Self {
        Self::with_rng(catalog, ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_config(config: &EngineConfig) -> EngineResult<Self> {
        let catalog = config.build_catalog()?;
        let engine = match config.seed {
            Some(seed) => Self::seeded(catalog, seed),
            None => Self::new(catalog),
        };
        Ok(engine.with_language(config.language))
    }
}

impl Default for EmotionEngine<ChaCha8Rng> {
    fn default() -> Self {
        Self::new(PersonaCatalog::builtin())
    }
}

impl<R: RandomSource> EmotionEngine<R> {
    pub fn with_rng(catalog: PersonaCatalog, rng: R) -> Self {
        Self {
            catalog,
            analyzer: TriggerAnalyzer,
            policy: TransitionPolicy::default(),
            modulator: Modulator::new(),
            language: Language::default(),
            rng,
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_modulator(mut self, modulator: Modulator) -> Self {
        self.modulator = modulator;
        self
    }

    pub fn with_policy(mut self, policy: TransitionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn catalog(&self) -> &PersonaCatalog {
        &self.catalog
    }

    pub fn modulator(&self) -> &Modulator {
        &self.modulator
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Fresh session with both sides neutral.
    pub fn initialize(&self, pro_persona: Option<&str>, con_persona: Option<&str>) -> Session {
        let session = Session::new(pro_persona, con_persona);
        debug!(
            session = %session.id,
            pro = pro_persona.unwrap_or("-"),
            con = con_persona.unwrap_or("-"),
            "Initialized emotional session"
        );
        session
    }

    /// Analyze one opponent argument for a side currently in `current`.
    ///
    /// Missing or empty text yields a zero-confidence neutral result without
    /// consulting the policy.
    pub fn analyze(
        &mut self,
        text: Option<&str>,
        persona: Option<&str>,
        current: EmotionalState,
        round: u32,
    ) -> Analysis {
        let text = match text {
            Some(t) if !t.is_empty() => t,
            _ => return Analysis::no_text(),
        };

        let profile = self.catalog.resolve(persona);
        let scan = self.analyzer.scan(text, profile);
        let transition = self.policy.next_state(
            &scan,
            &profile.state_progression,
            round,
            current,
            &mut self.rng,
        );

        let reasoning = match (transition.kind, scan.dominant) {
            (TransitionKind::Escalated { category, .. }, _) => format!(
                "Detected {} (strength: {:.2}) → {}",
                category, scan.max_strength, transition.next
            ),
            (TransitionKind::BelowThreshold, Some(category)) => format!(
                "Detected {} (strength: {:.2}) → {}",
                category, scan.max_strength, transition.next
            ),
            (TransitionKind::BelowThreshold, None) => format!(
                "Detected {} trigger(s) with no weight, maintaining {}",
                scan.triggers.len(),
                transition.next
            ),
            (TransitionKind::CooledDown, _) => format!(
                "No significant triggers detected, cooled down from {} to {}",
                current, transition.next
            ),
            (TransitionKind::Held, _) => format!(
                "No significant triggers detected, maintaining {}",
                transition.next
            ),
        };

        Analysis {
            confidence: scan.max_strength.min(1.0),
            dominant_trigger: scan.dominant,
            max_trigger_strength: scan.max_strength,
            triggers: scan.triggers,
            recommended_state: transition.next,
            reasoning,
        }
    }

    /// Update one side from its opponent's latest argument.
    pub fn update(
        &mut self,
        session: &mut Session,
        side: Side,
        opponent_text: Option<&str>,
        round: u32,
    ) -> StateUpdate {
        let persona = session.side(side).persona().map(str::to_string);
        let current = session.current_state(side);
        let analysis = self.analyze(opponent_text, persona.as_deref(), current, round);
        let new_state = analysis.recommended_state;
        let previous_state = session.side_mut(side).record(analysis.clone());

        if previous_state != new_state {
            info!(
                session = %session.id,
                side = %side,
                persona = persona.as_deref().unwrap_or("-"),
                round,
                from = %previous_state,
                to = %new_state,
                "Emotional state changed"
            );
        } else {
            debug!(side = %side, round, state = %new_state, "Emotional state unchanged");
        }

        StateUpdate {
            side,
            previous_state,
            new_state,
            analysis,
            persona,
            round,
            at: chrono::Utc::now(),
        }
    }

    /// [`update`](Self::update) keyed by side name. Unknown names update
    /// nothing.
    pub fn update_named(
        &mut self,
        session: &mut Session,
        side: &str,
        opponent_text: Option<&str>,
        round: u32,
    ) -> Option<StateUpdate> {
        match side.parse::<Side>() {
            Ok(side) => Some(self.update(session, side, opponent_text, round)),
            Err(err) => {
                debug!(error = %err, "Ignoring update for unknown side");
                None
            }
        }
    }

    /// Update both sides before `round`, each from the other side's previous
    /// argument. Round 1 has no prior arguments and changes nothing.
    pub fn advance_round(
        &mut self,
        session: &mut Session,
        round: u32,
        pro_previous: Option<&str>,
        con_previous: Option<&str>,
    ) -> Vec<StateUpdate> {
        if round <= 1 {
            return Vec::new();
        }
        vec![
            self.update(session, Side::Pro, con_previous, round),
            self.update(session, Side::Con, pro_previous, round),
        ]
    }

    /// Modulate `base_prompt` for a side's current state in the engine's
    /// default language.
    pub fn modulate(&self, session: &Session, side: Side, base_prompt: &str) -> ModulationResult {
        self.modulate_in(session, side, base_prompt, self.language)
    }

    pub fn modulate_in(
        &self,
        session: &Session,
        side: Side,
        base_prompt: &str,
        language: Language,
    ) -> ModulationResult {
        let side_state = session.side(side);
        self.modulate_state(
            base_prompt,
            side_state.current_state(),
            side_state.persona(),
            language,
        )
    }

    /// Modulate for an explicit state and persona, outside any session.
    pub fn modulate_state(
        &self,
        base_prompt: &str,
        state: EmotionalState,
        persona: Option<&str>,
        language: Language,
    ) -> ModulationResult {
        let profile = self.catalog.resolve(persona);
        self.modulator.modulate(base_prompt, state, profile, language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::FixedRoll;
    use crate::triggers::TriggerCategory;

    fn engine(roll: f64) -> EmotionEngine<FixedRoll> {
        EmotionEngine::with_rng(PersonaCatalog::builtin(), FixedRoll(roll))
    }

    // Hits all eight personal_attack phrases.
    const PERSONAL_ATTACK: &str = "You are wrong. You don't understand, you ignorant, stupid, \
         foolish, naive person. Clearly you have no idea; obviously you don't read.";

    #[test]
    fn test_missing_text_is_neutral_zero_confidence() {
        let mut engine = engine(0.0);
        for text in [None, Some("")] {
            let analysis = engine.analyze(text, Some("Socrates"), EmotionalState::Frustrated, 3);
            assert_eq!(analysis.recommended_state, EmotionalState::Neutral);
            assert_eq!(analysis.confidence, 0.0);
            assert!(analysis.triggers.is_empty());
        }
    }

    #[test]
    fn test_strong_attack_escalates_and_logs_reasoning() {
        let mut engine = engine(0.99);
        let analysis = engine.analyze(
            Some(PERSONAL_ATTACK),
            Some("Ayn Rand"),
            EmotionalState::Neutral,
            3,
        );
        assert_eq!(analysis.dominant_trigger, Some(TriggerCategory::PersonalAttack));
        assert!(analysis.reasoning.starts_with("Detected personal_attack (strength: "));
        assert!(analysis.confidence > 0.3 && analysis.confidence <= 1.0);
        assert_ne!(analysis.recommended_state, EmotionalState::Neutral);
    }

    #[test]
    fn test_update_records_history_and_reports_change() {
        let mut engine = engine(0.99);
        let mut session = engine.initialize(Some("Ayn Rand"), Some("Socrates"));
        let update = engine.update(&mut session, Side::Con, Some(PERSONAL_ATTACK), 2);
        assert_eq!(update.previous_state, EmotionalState::Neutral);
        assert_eq!(update.new_state, session.current_state(Side::Con));
        assert_eq!(update.persona.as_deref(), Some("Socrates"));
        assert_eq!(session.con.state_history().len(), 2);
        assert_eq!(session.pro.state_history().len(), 1);
        assert_eq!(session.con.last_analysis(), Some(&update.analysis));
    }

    #[test]
    fn test_update_named_ignores_unknown_side() {
        let mut engine = engine(0.0);
        let mut session = engine.initialize(None, None);
        assert!(engine.update_named(&mut session, "moderator", Some("text"), 2).is_none());
        assert!(engine.update_named(&mut session, "pro", Some("text"), 2).is_some());
        assert_eq!(session.pro.state_history().len(), 2);
    }

    #[test]
    fn test_first_round_does_not_advance() {
        let mut engine = engine(0.0);
        let mut session = engine.initialize(None, None);
        let updates =
            engine.advance_round(&mut session, 1, Some(PERSONAL_ATTACK), Some(PERSONAL_ATTACK));
        assert!(updates.is_empty());
        assert_eq!(session.pro.state_history(), &[EmotionalState::Neutral]);
    }

    #[test]
    fn test_advance_round_crosses_arguments() {
        let mut engine = engine(0.99);
        let mut session = engine.initialize(None, None);
        let updates = engine.advance_round(&mut session, 2, Some(PERSONAL_ATTACK), None);
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].side, Side::Pro);
        // Con said nothing last round, so pro has nothing to read.
        assert_eq!(updates[0].analysis.reasoning, Analysis::NO_TEXT_REASONING);
        assert_eq!(
            updates[1].analysis.dominant_trigger,
            Some(TriggerCategory::PersonalAttack)
        );
    }

    #[test]
    fn test_cooldown_reasoning() {
        let mut engine = engine(0.0);
        let analysis = engine.analyze(Some("A calm remark."), None, EmotionalState::Engaged, 2);
        assert_eq!(analysis.recommended_state, EmotionalState::Neutral);
        assert_eq!(
            analysis.reasoning,
            "No significant triggers detected, cooled down from engaged to neutral"
        );
        let mut engine = self::engine(0.99);
        let analysis = engine.analyze(Some("A calm remark."), None, EmotionalState::Engaged, 2);
        assert_eq!(
            analysis.reasoning,
            "No significant triggers detected, maintaining engaged"
        );
    }

    #[test]
    fn test_modulate_uses_side_persona_and_language() {
        let engine = engine(0.0).with_language(Language::Ro);
        let session = engine.initialize(Some("Socrates"), None);
        let result = engine.modulate(&session, Side::Pro, "Argue.");
        assert_eq!(result.debug.language, Language::Ro);
        assert_eq!(result.enhanced_prompt, "Argue.");
        let socrates = engine.catalog().resolve(Some("Socrates"));
        assert_eq!(result.debug.persona_profile, socrates.base_temperament);

        let result = engine.modulate_state("Argue.", EmotionalState::Defensive, None, Language::En);
        assert!(result.prompt_addition.contains("defend your position"));
    }

    #[test]
    fn test_seeded_engines_replay_identically() {
        let texts = [Some("A calm remark."), Some(PERSONAL_ATTACK), None, Some("ok")];
        let run = |seed| {
            let mut engine = EmotionEngine::seeded(PersonaCatalog::builtin(), seed);
            let mut session = engine.initialize(Some("Nietzsche"), None);
            texts
                .iter()
                .enumerate()
                .map(|(i, t)| engine.update(&mut session, Side::Pro, *t, i as u32 + 2).new_state)
                .collect::<Vec<_>>()
        };
        assert_eq!(run(11), run(11));
    }
}
