//! Flattens a conversation into the single text prompt sent to the model.

use crate::models::ConversationTurn;
use std::fmt::Write;

/// Cue that hands the next line to the model.
pub const ASSISTANT_CUE: &str = "Assistant:";

/// Render `history` oldest first, then the current message, ending on the
/// assistant cue with nothing after it.
pub fn build_prompt(history: &[ConversationTurn], message: &str) -> String {
    let mut prompt = String::new();
    for turn in history {
        // Writing into a String cannot fail.
        let _ = write!(
            prompt,
            "User: {}\n{} {}\n",
            turn.user, ASSISTANT_CUE, turn.assistant
        );
    }
    let _ = write!(prompt, "User: {}\n{}", message, ASSISTANT_CUE);
    prompt
}
