//! Debate loop tests — orchestrator, prompts and emotion engine running
//! together with in-process debaters (no inference endpoint).

use std::io::Write;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use debate_runner::{
    ArgumentRequest, DebateOrchestrator, Debater, DebaterError, RunnerConfig, Transcript,
    TranscriptDebater, TranscriptRound,
};
use emotion_engine::{
    EmotionEngine, EmotionalState, FixedRoll, Language, PersonaCatalog, ResponseLength, Side,
};

// Hits all eight personal_attack phrases.
const PERSONAL_ATTACK: &str = "You are wrong. You don't understand, you ignorant, stupid, foolish, \
     naive person. Clearly you have no idea; obviously you don't read.";

const CALM: &str = "A calm remark about the motion.";

/// Debater that answers from a fixed script and records every request.
struct ScriptedDebater {
    pro: Vec<&'static str>,
    con: Vec<&'static str>,
    requests: Mutex<Vec<ArgumentRequest>>,
}

impl ScriptedDebater {
    fn new(pro: Vec<&'static str>, con: Vec<&'static str>) -> Self {
        Self {
            pro,
            con,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests_for(&self, side: Side) -> Vec<ArgumentRequest> {
        let mut requests: Vec<_> = self
            .requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.side == side)
            .cloned()
            .collect();
        requests.sort_by_key(|r| r.round);
        requests
    }
}

#[async_trait]
impl Debater for ScriptedDebater {
    async fn argue(&self, request: &ArgumentRequest) -> Result<String, DebaterError> {
        self.requests.lock().unwrap().push(request.clone());
        let script = match request.side {
            Side::Pro => &self.pro,
            Side::Con => &self.con,
        };
        script
            .get(request.round as usize - 1)
            .map(|s| s.to_string())
            .ok_or(DebaterError::Backend("script exhausted".into()))
    }
}

fn engine() -> EmotionEngine<FixedRoll> {
    EmotionEngine::with_rng(PersonaCatalog::builtin(), FixedRoll(0.99))
}

// ── Round loop ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_opening_round_is_neutral_and_unmodulated() {
    let debater = Arc::new(ScriptedDebater::new(vec![CALM], vec![CALM]));
    let mut orch = DebateOrchestrator::new(engine(), Arc::clone(&debater), 1);
    let report = orch.run("Cats are better than dogs", Some("Ayn Rand"), None).await.unwrap();

    assert_eq!(report.rounds.len(), 1);
    let round = &report.rounds[0];
    for side in Side::both() {
        let turn = round.turn(side);
        assert_eq!(turn.state, EmotionalState::Neutral);
        assert!(turn.update.is_none());
        assert!(turn.applied_instructions.is_empty());
        assert_eq!(turn.response_length, ResponseLength::Normal);
    }

    let pro = &debater.requests_for(Side::Pro)[0];
    assert!(!pro.prompt.contains("EMOTIONAL CONTEXT:"));
    assert!(pro.prompt.ends_with("Open with your strongest argument."));
    assert!((pro.temperature - 0.8 * 0.9).abs() < 1e-12);
    assert_eq!(report.state_changes, 0);
}

#[tokio::test]
async fn test_side_reacts_to_opponent_previous_argument() {
    let debater = Arc::new(ScriptedDebater::new(vec![CALM, CALM], vec![PERSONAL_ATTACK, CALM]));
    let mut orch = DebateOrchestrator::new(engine(), Arc::clone(&debater), 2);
    let report = orch
        .run("Taxes should be lower", Some("Ayn Rand"), Some("Socrates"))
        .await
        .unwrap();

    // Ayn Rand: 8/8 × 0.7 = 0.7; effective 0.7 × 0.7 × 1.2 = 0.588 → defensive.
    assert_eq!(
        report.trajectory(Side::Pro),
        vec![EmotionalState::Neutral, EmotionalState::Defensive]
    );
    assert_eq!(
        report.trajectory(Side::Con),
        vec![EmotionalState::Neutral, EmotionalState::Neutral]
    );
    assert_eq!(report.final_pro_state, EmotionalState::Defensive);
    assert_eq!(report.state_changes, 1);

    let update = report.rounds[1].pro.update.as_ref().unwrap();
    assert_eq!(update.previous_state, EmotionalState::Neutral);
    assert_eq!(update.new_state, EmotionalState::Defensive);
    assert_eq!(update.round, 2);

    let pro_requests = debater.requests_for(Side::Pro);
    let round_two = &pro_requests[1];
    assert!(round_two.prompt.contains(&format!("Your opponent argued:\n{}", PERSONAL_ATTACK)));
    assert!(round_two.prompt.contains("EMOTIONAL CONTEXT: You feel the need to defend"));
    assert!((round_two.temperature - 0.85 * 0.9).abs() < 1e-12);
    assert_eq!(round_two.response_length, ResponseLength::Extended);
    assert_eq!(report.rounds[1].pro.applied_instructions.len(), 4);
}

#[tokio::test]
async fn test_debater_failure_names_the_round() {
    let debater = Arc::new(ScriptedDebater::new(vec![CALM], vec![CALM, CALM]));
    let mut orch = DebateOrchestrator::new(engine(), Arc::clone(&debater), 2);
    let err = orch.run("Topic", None, None).await.unwrap_err();
    assert_eq!(err.to_string(), "Pro debater failed in round 2");
}

#[tokio::test]
async fn test_romanian_debate_uses_romanian_prompts() {
    let debater = Arc::new(ScriptedDebater::new(vec![CALM, CALM], vec![PERSONAL_ATTACK, CALM]));
    let mut orch =
        DebateOrchestrator::new(engine(), Arc::clone(&debater), 2).with_language(Language::Ro);
    let report = orch.run("Pisicile", Some("Ayn Rand"), Some("Socrate")).await.unwrap();

    assert_eq!(report.language, Language::Ro);
    let round_two = &debater.requests_for(Side::Pro)[1];
    assert!(round_two.prompt.starts_with("Ești Ayn Rand și argumentezi în favoarea"));
    assert!(round_two.prompt.contains("Simți nevoia să-ți aperi poziția mai atent."));
    assert_eq!(round_two.language, Language::Ro);
}

// ── Transcript replay ──────────────────────────────────────────────

#[tokio::test]
async fn test_transcript_replay_end_to_end() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
  "topic": "Art should be useful",
  "pro_persona": "Nietzsche",
  "con_persona": "Tristan Tzara",
  "rounds": [
    {{"pro": "Everyone believes it; most people agree with traditional values.", "con": "{}"}},
    {{"pro": "{}", "con": "The old ways and established order are time tested."}},
    {{"pro": "Fine.", "con": "Fine."}}
  ]
}}"#,
        PERSONAL_ATTACK, CALM
    )
    .unwrap();

    let transcript = Transcript::load(file.path()).unwrap();
    let debater = TranscriptDebater::from(&transcript);
    assert_eq!(debater.rounds(), 3);

    let mut orch = DebateOrchestrator::new(engine(), debater, 3);
    let report = orch
        .run(
            &transcript.topic,
            transcript.pro_persona.as_deref(),
            transcript.con_persona.as_deref(),
        )
        .await
        .unwrap();

    assert_eq!(report.rounds.len(), 3);
    assert_eq!(report.rounds[2].con.argument, "Fine.");
    // Tzara reads Nietzsche's traditional-values round.
    let con_update = report.rounds[1].con.update.as_ref().unwrap();
    assert_eq!(con_update.persona.as_deref(), Some("Tristan Tzara"));
    assert!(con_update.analysis.max_trigger_strength > 0.0);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["rounds"].as_array().unwrap().len(), 3);
    assert_eq!(json["rounds"][1]["pro"]["update"]["side"], "pro");
}

#[tokio::test]
async fn test_short_transcript_fails_on_missing_round() {
    let transcript = Transcript {
        topic: "t".into(),
        pro_persona: None,
        con_persona: None,
        language: None,
        rounds: vec![TranscriptRound {
            pro: CALM.into(),
            con: CALM.into(),
        }],
    };
    let mut orch = DebateOrchestrator::new(engine(), TranscriptDebater::from(&transcript), 2);
    let err = orch.run("t", None, None).await.unwrap_err();
    assert!(format!("{:#}", err).contains("No recorded pro argument for round 2"));
}

#[tokio::test]
async fn test_seeded_config_replays_identically() {
    let config = RunnerConfig::from_toml("rounds = 4\n[engine]\nseed = 21\n").unwrap();
    let pro = vec![PERSONAL_ATTACK, CALM, CALM, CALM];
    let con = vec![PERSONAL_ATTACK, CALM, CALM, CALM];

    let mut trajectories = Vec::new();
    for _ in 0..2 {
        let debater = Arc::new(ScriptedDebater::new(pro.clone(), con.clone()));
        let mut orch = DebateOrchestrator::new(
            config.build_engine().unwrap(),
            Arc::clone(&debater),
            config.rounds,
        );
        let report = orch.run("t", Some("Shakespeare"), Some("Nietzsche")).await.unwrap();
        trajectories.push((report.trajectory(Side::Pro), report.trajectory(Side::Con)));
    }
    assert_eq!(trajectories[0], trajectories[1]);
}
