//! Trigger categories and their phrase tables.
//!
//! The tables are static data. Declaration order matters: when two
//! categories score the same strength, the earlier one is dominant.

use serde::{Deserialize, Serialize};

/// Named bucket of phrase patterns representing a rhetorical or logical
/// feature of an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerCategory {
    LogicalFallacy,
    PersonalAttack,
    StrongEvidence,
    CircularReasoning,
    AppealToAuthority,
    WeakArgument,
    ScientificInaccuracy,
    AntiIntellectualism,
    CreativeInsight,
    Dogmatism,
    ArtisticCritique,
    MoralComplexity,
    ShallowThinking,
    MoralAbsolutism,
    HerdMentality,
    Weakness,
    ConventionalWisdom,
    Collectivism,
    Altruism,
    GovernmentIntervention,
    Traditionalism,
    Rationalism,
    BourgeoisValues,
    ConventionalLogic,
}

/// Phrase table, one row per category, in declaration order.
///
/// Patterns are lowercase and matched as plain substrings of the lowercased
/// argument text.
pub static TRIGGER_PATTERNS: &[(TriggerCategory, &[&str])] = &[
    (
        TriggerCategory::LogicalFallacy,
        &[
            "strawman",
            "ad hominem",
            "false dichotomy",
            "slippery slope",
            "circular logic",
            "therefore",
            "proves that",
            "obviously",
            "everyone knows",
            "common sense",
            "appeal to emotion",
        ],
    ),
    (
        TriggerCategory::PersonalAttack,
        &[
            "you are wrong",
            "you don't understand",
            "ignorant",
            "stupid",
            "foolish",
            "naive",
            "clearly you",
            "obviously you don't",
        ],
    ),
    (
        TriggerCategory::StrongEvidence,
        &[
            "research shows",
            "studies indicate",
            "data suggests",
            "evidence demonstrates",
            "according to",
            "statistics show",
            "peer reviewed",
            "empirical",
        ],
    ),
    (
        TriggerCategory::CircularReasoning,
        &[
            "because it is",
            "by definition",
            "it's true because",
            "we know because",
        ],
    ),
    (
        TriggerCategory::AppealToAuthority,
        &[
            "experts say",
            "authorities agree",
            "scientists believe",
            "studies show",
            "research proves",
            "according to experts",
        ],
    ),
    (
        TriggerCategory::WeakArgument,
        &[
            "i think",
            "maybe",
            "possibly",
            "could be",
            "might be",
            "perhaps",
            "i believe",
            "in my opinion",
            "seems like",
        ],
    ),
    (
        TriggerCategory::ScientificInaccuracy,
        &[
            "theory is just",
            "evolution is just a theory",
            "climate change is fake",
            "vaccines cause",
            "natural immunity",
            "chemicals are bad",
        ],
    ),
    (
        TriggerCategory::AntiIntellectualism,
        &[
            "too much thinking",
            "overthinking",
            "academic nonsense",
            "ivory tower",
            "common sense is better",
            "real world experience",
        ],
    ),
    (
        TriggerCategory::CreativeInsight,
        &[
            "imagine if",
            "what if we",
            "another way to think",
            "creative solution",
            "innovative approach",
            "fresh perspective",
        ],
    ),
    (
        TriggerCategory::Dogmatism,
        &[
            "absolutely must",
            "never acceptable",
            "always wrong",
            "period",
            "end of discussion",
            "no exceptions",
        ],
    ),
    (
        TriggerCategory::ArtisticCritique,
        &[
            "art is",
            "beauty is",
            "aesthetic",
            "creative expression",
            "artistic merit",
            "cultural value",
        ],
    ),
    (
        TriggerCategory::MoralComplexity,
        &[
            "right and wrong",
            "ethical dilemma",
            "moral question",
            "virtue",
            "justice",
            "good and evil",
            "moral responsibility",
        ],
    ),
    (
        TriggerCategory::ShallowThinking,
        &[
            "simple answer",
            "black and white",
            "easy solution",
            "obvious choice",
            "common sense",
            "just do it",
        ],
    ),
    (
        TriggerCategory::MoralAbsolutism,
        &[
            "always wrong",
            "never right",
            "absolute truth",
            "universal law",
            "moral imperative",
            "categorically",
        ],
    ),
    (
        TriggerCategory::HerdMentality,
        &[
            "everyone believes",
            "society expects",
            "normal people",
            "most people",
            "conventional wisdom",
            "traditional values",
        ],
    ),
    (
        TriggerCategory::Weakness,
        &[
            "give up",
            "can't handle",
            "too difficult",
            "impossible",
            "helpless",
            "victim",
            "need help",
        ],
    ),
    (
        TriggerCategory::ConventionalWisdom,
        &[
            "traditional approach",
            "way things are done",
            "established practice",
            "conventional method",
            "standard procedure",
        ],
    ),
    (
        TriggerCategory::Collectivism,
        &[
            "for the greater good",
            "society needs",
            "collective responsibility",
            "community over individual",
            "sacrifice for others",
        ],
    ),
    (
        TriggerCategory::Altruism,
        &[
            "selfless act",
            "helping others",
            "sacrifice yourself",
            "put others first",
            "altruistic",
            "for the benefit of others",
        ],
    ),
    (
        TriggerCategory::GovernmentIntervention,
        &[
            "government should",
            "regulation is needed",
            "state control",
            "public sector",
            "government program",
            "federal oversight",
        ],
    ),
    (
        TriggerCategory::Traditionalism,
        &[
            "traditional values",
            "way things were",
            "old ways",
            "established order",
            "conventional approach",
            "time tested",
        ],
    ),
    (
        TriggerCategory::Rationalism,
        &[
            "logical approach",
            "rational thinking",
            "reasoned argument",
            "systematic analysis",
            "objective truth",
        ],
    ),
    (
        TriggerCategory::BourgeoisValues,
        &[
            "middle class",
            "property rights",
            "material success",
            "conventional success",
            "respectability",
            "social status",
        ],
    ),
    (
        TriggerCategory::ConventionalLogic,
        &[
            "logical progression",
            "reasonable conclusion",
            "rational argument",
            "systematic approach",
            "methodical thinking",
        ],
    ),
];

impl TriggerCategory {
    /// All categories in declaration order.
    pub fn all() -> impl Iterator<Item = TriggerCategory> {
        TRIGGER_PATTERNS.iter().map(|(category, _)| *category)
    }

    /// Phrase patterns backing this category.
    pub fn patterns(self) -> &'static [&'static str] {
        TRIGGER_PATTERNS
            .iter()
            .find(|(category, _)| *category == self)
            .map(|(_, patterns)| *patterns)
            .unwrap_or(&[])
    }

    /// Key used in persona sensitivity tables.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LogicalFallacy => "logical_fallacy",
            Self::PersonalAttack => "personal_attack",
            Self::StrongEvidence => "strong_evidence",
            Self::CircularReasoning => "circular_reasoning",
            Self::AppealToAuthority => "appeal_to_authority",
            Self::WeakArgument => "weak_argument",
            Self::ScientificInaccuracy => "scientific_inaccuracy",
            Self::AntiIntellectualism => "anti_intellectualism",
            Self::CreativeInsight => "creative_insight",
            Self::Dogmatism => "dogmatism",
            Self::ArtisticCritique => "artistic_critique",
            Self::MoralComplexity => "moral_complexity",
            Self::ShallowThinking => "shallow_thinking",
            Self::MoralAbsolutism => "moral_absolutism",
            Self::HerdMentality => "herd_mentality",
            Self::Weakness => "weakness",
            Self::ConventionalWisdom => "conventional_wisdom",
            Self::Collectivism => "collectivism",
            Self::Altruism => "altruism",
            Self::GovernmentIntervention => "government_intervention",
            Self::Traditionalism => "traditionalism",
            Self::Rationalism => "rationalism",
            Self::BourgeoisValues => "bourgeois_values",
            Self::ConventionalLogic => "conventional_logic",
        }
    }

    /// Look up a category by its sensitivity-table key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().find(|category| category.as_str() == key)
    }
}

impl std::fmt::Display for TriggerCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_has_24_distinct_categories() {
        let categories: HashSet<_> = TriggerCategory::all().collect();
        assert_eq!(categories.len(), 24);
        assert_eq!(TRIGGER_PATTERNS.len(), 24);
    }

    #[test]
    fn test_every_category_has_lowercase_patterns() {
        for category in TriggerCategory::all() {
            let patterns = category.patterns();
            assert!(!patterns.is_empty(), "{category} has no patterns");
            for pattern in patterns {
                assert_eq!(*pattern, pattern.to_lowercase());
            }
        }
    }

    #[test]
    fn test_key_matches_serde_name() {
        for category in TriggerCategory::all() {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
            assert_eq!(TriggerCategory::from_key(category.as_str()), Some(category));
        }
        assert_eq!(TriggerCategory::from_key("trigger1"), None);
    }
}
