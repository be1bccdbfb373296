//! Centralized prompt definitions for the debate
//!
//! Both speakers share the same debater instructions; only the position
//! parameters (ordinal, side, motion) differ.

use crate::debate::speaker::Side;

/// Opening prompt submitted to speaker 1 on the first turn.
pub const OPENING_PROMPT: &str =
    "You are opening this debate. Present your first argument in favor of the motion.";

/// System prompt seeding a speaker's conversation.
///
/// Encodes the speaker's ordinal, assigned side, and the motion under
/// debate, plus the conditions under which the speaker should forfeit.
pub fn system_prompt(ordinal: u8, side: Side, motion: &str) -> String {
    let suffix = ordinal_suffix(ordinal);
    format!(
        r#"You are a skilled debater in a formal debate between you and the user.
Your objective is to win by presenting compelling arguments for your position.
Keep responses focused and impactful - aim for quality over quantity.
Skip responding to weaker points to focus on key arguments.
Avoid pleasantries and get straight to substance.
Forfeit if you find yourself:
- Agreeing with opponent's core arguments
- Unable to counter their key points effectively
- Repeating previous arguments without advancing the debate
- Losing the logical thread of your position

Debate parameters:
- Position: {ordinal}{suffix} speaker ({side})
- Motion: {motion}"#,
        side = side.label(),
    )
}

fn ordinal_suffix(ordinal: u8) -> &'static str {
    match ordinal {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}
