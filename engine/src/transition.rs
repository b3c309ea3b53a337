//! State transition policy — picks a side's next emotional state from the
//! dominant trigger, the persona's progression parameters and the round.
//!
//! ```text
//! dominant strength > 0.3 ──► effective = min(strength × escalation × round_mult, max_intensity)
//!                              └─► category rule ─► next state
//! triggers fired, all weak ──► unchanged
//! no triggers at all ────────► cooldown roll: u < cooldown_rate ─► neutral
//! ```
//!
//! The category → state mapping is a heuristic lookup table, kept as data.
//! The cooldown roll is the only stochastic step and draws from an injected
//! [`RandomSource`].

use rand::RngExt;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::persona::StateProgression;
use crate::state::EmotionalState;
use crate::state::EmotionalState::{Confident, Defensive, Engaged, Frustrated, Neutral, Passionate};
use crate::triggers::TriggerCategory as C;
use crate::triggers::{TriggerCategory, TriggerScan};

/// Dominant strength must exceed this to move the state.
pub const ACTIVATION_THRESHOLD: f64 = 0.3;

/// Extra escalation per round after the first.
pub const ROUND_ESCALATION_STEP: f64 = 0.2;

/// Uniform draws in `[0, 1)` for the cooldown roll.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl RandomSource for ChaCha8Rng {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Source that always returns the same value. Handy for pinning the
/// cooldown branch in tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedRoll(pub f64);

impl RandomSource for FixedRoll {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

/// How a category maps effective strength onto a state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateRule {
    /// Always the same state.
    Fixed(EmotionalState),
    /// `high` when effective strength is strictly above `above`, else `otherwise`.
    Threshold {
        above: f64,
        high: EmotionalState,
        otherwise: EmotionalState,
    },
}

impl StateRule {
    pub fn apply(self, effective_strength: f64) -> EmotionalState {
        match self {
            Self::Fixed(state) => state,
            Self::Threshold {
                above,
                high,
                otherwise,
            } => {
                if effective_strength > above {
                    high
                } else {
                    otherwise
                }
            }
        }
    }
}

/// Category groups and their rules.
pub static CATEGORY_RULES: &[(&[TriggerCategory], StateRule)] = &[
    (
        &[
            C::LogicalFallacy,
            C::CircularReasoning,
            C::AntiIntellectualism,
            C::ShallowThinking,
        ],
        StateRule::Threshold {
            above: 0.6,
            high: Frustrated,
            otherwise: Engaged,
        },
    ),
    (
        &[C::PersonalAttack],
        StateRule::Threshold {
            above: 0.7,
            high: Passionate,
            otherwise: Defensive,
        },
    ),
    (
        &[C::StrongEvidence, C::CreativeInsight],
        StateRule::Fixed(Engaged),
    ),
    (&[C::WeakArgument], StateRule::Fixed(Confident)),
    (
        &[C::AppealToAuthority, C::Dogmatism],
        StateRule::Threshold {
            above: 0.5,
            high: Frustrated,
            otherwise: Engaged,
        },
    ),
    (
        &[
            C::MoralAbsolutism,
            C::HerdMentality,
            C::Collectivism,
            C::Traditionalism,
        ],
        StateRule::Threshold {
            above: 0.6,
            high: Passionate,
            otherwise: Frustrated,
        },
    ),
    (
        &[C::ArtisticCritique, C::MoralComplexity],
        StateRule::Fixed(Engaged),
    ),
];

/// Rule for any category without a dedicated entry.
pub const GENERIC_RULE: StateRule = StateRule::Threshold {
    above: 0.5,
    high: Engaged,
    otherwise: Neutral,
};

/// Rule applied when `category` dominates.
pub fn rule_for(category: TriggerCategory) -> StateRule {
    CATEGORY_RULES
        .iter()
        .find(|(group, _)| group.contains(&category))
        .map(|(_, rule)| *rule)
        .unwrap_or(GENERIC_RULE)
}

/// `1 + (round - 1) * 0.2` after the first round, else 1.
pub fn round_multiplier(round: u32) -> f64 {
    if round > 1 {
        1.0 + f64::from(round - 1) * ROUND_ESCALATION_STEP
    } else {
        1.0
    }
}

/// Strength after persona escalation and round ramp, capped at max intensity.
pub fn effective_strength(strength: f64, progression: &StateProgression, round: u32) -> f64 {
    (strength * progression.escalation_rate * round_multiplier(round))
        .min(progression.max_intensity)
}

/// Which branch of the policy produced the next state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum TransitionKind {
    /// Dominant trigger cleared the activation threshold.
    Escalated {
        category: TriggerCategory,
        effective_strength: f64,
    },
    /// Triggers fired but none cleared the threshold; state kept.
    BelowThreshold,
    /// No triggers; cooldown roll returned the side to neutral.
    CooledDown,
    /// No triggers; state kept (already neutral or roll failed).
    Held,
}

/// Outcome of one policy evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub next: EmotionalState,
    pub kind: TransitionKind,
}

/// The transition policy. Stateless apart from its threshold.
#[derive(Debug, Clone, Copy)]
pub struct TransitionPolicy {
    pub activation_threshold: f64,
}

impl Default for TransitionPolicy {
    fn default() -> Self {
        Self {
            activation_threshold: ACTIVATION_THRESHOLD,
        }
    }
}

impl TransitionPolicy {
    pub fn next_state(
        &self,
        scan: &TriggerScan,
        progression: &StateProgression,
        round: u32,
        current: EmotionalState,
        rng: &mut dyn RandomSource,
    ) -> Transition {
        if let Some(category) = scan.dominant {
            if scan.max_strength > self.activation_threshold {
                let effective = effective_strength(scan.max_strength, progression, round);
                return Transition {
                    next: rule_for(category).apply(effective),
                    kind: TransitionKind::Escalated {
                        category,
                        effective_strength: effective,
                    },
                };
            }
        }

        if scan.fired() {
            return Transition {
                next: current,
                kind: TransitionKind::BelowThreshold,
            };
        }

        if !current.is_neutral() && rng.next_unit() < progression.cooldown_rate {
            Transition {
                next: Neutral,
                kind: TransitionKind::CooledDown,
            }
        } else {
            Transition {
                next: current,
                kind: TransitionKind::Held,
            }
        }
    }
}
