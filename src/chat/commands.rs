//! Exit detection and slash command parsing for the chat session.
//!
//! Two kinds of special input exist: the bare exit word that ends the
//! session, and slash commands that control it locally. Neither is ever sent
//! to the API.

/// A parsed chat command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    /// Clear the conversation history window.
    Clear,

    /// Show the retained history window.
    History,

    /// Display help information.
    Help,

    /// Exit the chat session.
    Quit,

    /// Report a parsing error back to the caller.
    Invalid(String),
}

/// Returns true if the input is the exit command.
///
/// Matched case-insensitively against the whole (trimmed) input.
pub fn is_exit(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("exit")
}

/// Parses user input for slash commands.
///
/// Returns `Some(ChatCommand)` if the input is a command, or `None` if it
/// should be treated as a regular message.
pub fn parse_command(input: &str) -> Option<ChatCommand> {
    let input = input.trim();

    if !input.starts_with('/') {
        return None;
    }

    let mut parts = input[1..].splitn(2, ' ');
    let command = parts.next()?.to_lowercase();

    let result = match command.as_str() {
        "clear" => ChatCommand::Clear,
        "history" => ChatCommand::History,
        "help" | "?" => ChatCommand::Help,
        "quit" | "exit" | "q" => ChatCommand::Quit,
        _ => ChatCommand::Invalid(format!(
            "Unknown command: /{}. Type /help for available commands.",
            command
        )),
    };

    Some(result)
}

/// Returns the help text listing available commands.
pub fn help_text() -> &'static str {
    "Available commands:\n\
     /help     - Show this help message\n\
     /history  - Show the retained conversation window\n\
     /clear    - Clear the conversation window\n\
     /quit     - Exit the chat (or type 'exit')"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_word_is_case_insensitive() {
        assert!(is_exit("exit"));
        assert!(is_exit("EXIT"));
        assert!(is_exit("Exit"));
        assert!(is_exit("  exit  "));
    }

    #[test]
    fn exit_word_must_be_whole_input() {
        assert!(!is_exit("exit now"));
        assert!(!is_exit("please exit"));
        assert!(!is_exit("quit"));
    }

    #[test]
    fn regular_messages_are_not_commands() {
        assert_eq!(parse_command("Hello there"), None);
        assert_eq!(parse_command("what is /help?"), None);
    }

    #[test]
    fn known_commands_parse() {
        assert_eq!(parse_command("/clear"), Some(ChatCommand::Clear));
        assert_eq!(parse_command("/history"), Some(ChatCommand::History));
        assert_eq!(parse_command("/help"), Some(ChatCommand::Help));
        assert_eq!(parse_command("/quit"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("/QUIT"), Some(ChatCommand::Quit));
    }

    #[test]
    fn unknown_command_is_invalid() {
        match parse_command("/frobnicate") {
            Some(ChatCommand::Invalid(message)) => {
                assert!(message.contains("/frobnicate"));
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
    }
}
