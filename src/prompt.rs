//! Prompt assembly.
//!
//! The remote endpoint is a bare completion model, so the conversation is
//! flattened into one transcript-shaped string per call. The trailing `AI:`
//! with no newline is the cue that tells the model to continue as the
//! assistant rather than invent the next user turn.

use crate::types::Turn;

/// Speaker marker for user lines.
pub const USER_PREFIX: &str = "User:";

/// Speaker marker for assistant lines, also the trailing completion cue.
pub const ASSISTANT_PREFIX: &str = "AI:";

/// Renders history plus the current user input into one completion prompt.
///
/// Each past turn becomes a `User:`/`AI:` block in oldest-first order,
/// followed by the current input and the bare `AI:` cue. Pure and
/// deterministic: identical inputs always yield byte-identical output. The
/// only truncation is the turn-count bound already applied by
/// [`History`](crate::History).
pub fn build_prompt<'a, I>(history: I, user_text: &str) -> String
where
    I: IntoIterator<Item = &'a Turn>,
{
    let mut prompt = String::new();
    for turn in history {
        prompt.push_str(&format!(
            "{USER_PREFIX} {}\n{ASSISTANT_PREFIX} {}\n",
            turn.user_text, turn.reply_text
        ));
    }
    prompt.push_str(&format!("{USER_PREFIX} {user_text}\n{ASSISTANT_PREFIX}"));
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::History;

    #[test]
    fn empty_history() {
        let prompt = build_prompt([], "Hi");
        assert_eq!(prompt, "User: Hi\nAI:");
    }

    #[test]
    fn history_blocks_come_oldest_first() {
        let mut history = History::new(3);
        history.append(Turn::new("one", "1"));
        history.append(Turn::new("two", "2"));
        let prompt = build_prompt(history.snapshot(), "three");
        assert_eq!(
            prompt,
            "User: one\nAI: 1\nUser: two\nAI: 2\nUser: three\nAI:"
        );
    }

    #[test]
    fn no_trailing_newline_after_cue() {
        let prompt = build_prompt([], "Hi");
        assert!(prompt.ends_with("AI:"));
        assert!(!prompt.ends_with('\n'));
    }

    #[test]
    fn deterministic() {
        let mut history = History::new(2);
        history.append(Turn::new("a", "b"));
        let first = build_prompt(history.snapshot(), "c");
        let second = build_prompt(history.snapshot(), "c");
        assert_eq!(first, second);
    }
}
