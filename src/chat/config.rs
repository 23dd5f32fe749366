//! Configuration types for the chat binaries.
//!
//! This module provides CLI argument parsing via `arrrg` and configuration
//! structures for controlling session behavior.

use arrrg_derive::CommandLine;

use crate::client::DEFAULT_MODEL;

/// Default number of previous exchanges included as context.
const DEFAULT_HISTORY_LENGTH: usize = 3;

/// Command-line arguments for the zephyrus-chat tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
pub struct ChatArgs {
    /// A single prompt to send instead of running the interactive loop.
    #[arrrg(optional, "Send one prompt and exit (no interactive loop)", "PROMPT")]
    pub prompt: Option<String>,

    /// Model to query.
    #[arrrg(
        optional,
        "Model to use (default: HuggingFaceH4/zephyr-7b-beta)",
        "MODEL"
    )]
    pub model: Option<String>,

    /// API key; falls back to the HUGGINGFACE_API_KEY environment variable.
    #[arrrg(optional, "API key (default: HUGGINGFACE_API_KEY env var)", "KEY")]
    pub api_key: Option<String>,

    /// Number of previous exchanges to include as context.
    #[arrrg(optional, "Previous exchanges kept as context (default: 3)", "N")]
    pub history_length: Option<u32>,

    /// Request timeout in seconds.
    #[arrrg(optional, "Request timeout in seconds (default: 60)", "SECONDS")]
    pub timeout: Option<u64>,
}

/// Configuration for a chat session.
///
/// This struct holds the resolved configuration values after processing
/// command-line arguments with appropriate defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// The model to query for completions.
    pub model: String,

    /// Capacity of the history window, in turns. Zero means no context is
    /// ever included; this is also how one-shot invocations are modeled.
    pub history_length: usize,
}

impl ChatConfig {
    /// Creates a new ChatConfig with default values.
    ///
    /// Defaults:
    /// - Model: HuggingFaceH4/zephyr-7b-beta
    /// - History length: 3
    pub fn new() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            history_length: DEFAULT_HISTORY_LENGTH,
        }
    }

    /// Sets the model to query.
    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the history window capacity.
    pub fn with_history_length(mut self, history_length: usize) -> Self {
        self.history_length = history_length;
        self
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&ChatArgs> for ChatConfig {
    fn from(args: &ChatArgs) -> Self {
        ChatConfig {
            model: args.model.clone().unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            history_length: args
                .history_length
                .map(|n| n as usize)
                .unwrap_or(DEFAULT_HISTORY_LENGTH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ChatConfig::new();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.history_length, 3);
    }

    #[test]
    fn config_from_args_defaults() {
        let args = ChatArgs::default();
        let config = ChatConfig::from(&args);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.history_length, 3);
    }

    #[test]
    fn config_from_args_custom() {
        let args = ChatArgs {
            prompt: None,
            model: Some("google/flan-t5-base".to_string()),
            api_key: None,
            history_length: Some(5),
            timeout: None,
        };
        let config = ChatConfig::from(&args);
        assert_eq!(config.model, "google/flan-t5-base");
        assert_eq!(config.history_length, 5);
    }

    #[test]
    fn config_builder_pattern() {
        let config = ChatConfig::new()
            .with_model("google/flan-t5-base")
            .with_history_length(0);
        assert_eq!(config.model, "google/flan-t5-base");
        assert_eq!(config.history_length, 0);
    }
}
