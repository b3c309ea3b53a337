//! Base prompts for debate turns, before emotional modulation.

use emotion_engine::{Language, Side, DEFAULT_PERSONA};

/// Base prompt for one side's turn.
///
/// `opponent_previous` is the other side's argument from the previous
/// round; `None` on the opening round.
pub fn base_prompt(
    side: Side,
    persona: Option<&str>,
    topic: &str,
    round: u32,
    total_rounds: u32,
    opponent_previous: Option<&str>,
    language: Language,
) -> String {
    let persona = persona.unwrap_or(DEFAULT_PERSONA);
    match language {
        Language::En => {
            let stance = match side {
                Side::Pro => "in favour of",
                Side::Con => "against",
            };
            let mut prompt = format!(
                "You are {persona}, arguing {stance} the motion: \"{topic}\".\n\
                 This is round {round} of {total_rounds}. Stay in character."
            );
            match opponent_previous {
                Some(text) if !text.is_empty() => {
                    prompt.push_str("\n\nYour opponent argued:\n");
                    prompt.push_str(text);
                    prompt.push_str("\n\nRespond to their points and advance your case.");
                }
                _ => prompt.push_str("\n\nOpen with your strongest argument."),
            }
            prompt
        }
        Language::Ro => {
            let stance = match side {
                Side::Pro => "în favoarea",
                Side::Con => "împotriva",
            };
            let mut prompt = format!(
                "Ești {persona} și argumentezi {stance} moțiunii: \"{topic}\".\n\
                 Aceasta este runda {round} din {total_rounds}. Rămâi în personaj."
            );
            match opponent_previous {
                Some(text) if !text.is_empty() => {
                    prompt.push_str("\n\nOponentul tău a argumentat:\n");
                    prompt.push_str(text);
                    prompt.push_str("\n\nRăspunde la punctele sale și avansează-ți poziția.");
                }
                _ => prompt.push_str("\n\nDeschide cu cel mai puternic argument al tău."),
            }
            prompt
        }
    }
}
