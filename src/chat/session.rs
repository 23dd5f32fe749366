//! Core chat session management.
//!
//! `ChatSession` owns the history window and drives the per-turn flow: build
//! the prompt, call the completion backend, turn the outcome into a display
//! string, record the turn. Every failure is recovered here and shown to the
//! user; the one exception with control-flow consequence is HTTP 402, which
//! ends the session.

use async_trait::async_trait;

use crate::chat::commands::{self, ChatCommand};
use crate::chat::config::ChatConfig;
use crate::client::HuggingFace;
use crate::error::Result;
use crate::history::History;
use crate::observability::{SESSION_BILLING_FAILURES, SESSION_TURNS};
use crate::prompt::build_prompt;
use crate::render::Renderer;
use crate::types::Turn;

/// Fixed farewell printed when the provider demands payment mid-session.
pub const BILLING_FAREWELL: &str =
    "The provider wants payment before it will generate anything else. Goodbye!";

/// Completion backend expected by the chat session.
///
/// [`HuggingFace`] is the production implementation; tests substitute
/// scripted fakes so the session state machine runs without a network.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Produce a cleaned reply for an assembled prompt, or a classified error.
    async fn complete(&self, model: &str, prompt: &str) -> Result<String>;
}

#[async_trait]
impl CompletionBackend for HuggingFace {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String> {
        HuggingFace::complete(self, model, prompt).await
    }
}

/// Source of user turns for the interactive loop.
///
/// `None` means the source is exhausted (end of input). An empty string is
/// skipped by the loop, which lets console sources report a soft interrupt
/// without ending the session.
pub trait TurnSource {
    /// Reads the next user turn.
    fn next_turn(&mut self) -> Option<String>;
}

/// Why a session stopped accepting turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The user typed the exit command.
    UserExit,

    /// The provider answered HTTP 402 Payment Required.
    BillingFailure,

    /// The turn source ran out of input.
    EndOfInput,
}

/// Outcome of a single sent turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The display string for this turn; the session continues.
    Reply(String),

    /// The display string for a payment-required failure; the session must
    /// terminate after showing the farewell.
    BillingFailure(String),
}

/// A chat session that manages the history window and per-turn flow.
pub struct ChatSession<B: CompletionBackend = HuggingFace> {
    backend: B,
    config: ChatConfig,
    history: History,
}

impl<B: CompletionBackend> ChatSession<B> {
    /// Creates a new session; the history window capacity comes from the
    /// configured history length.
    pub fn new(backend: B, config: ChatConfig) -> Self {
        let history = History::new(config.history_length);
        Self {
            backend,
            config,
            history,
        }
    }

    /// Sends one user turn and records the exchange.
    ///
    /// The outcome, success or failure, is rendered to a single display
    /// string and appended to history together with the input, so the
    /// visible transcript stays continuous even across failed calls.
    pub async fn send(&mut self, user_input: &str) -> TurnOutcome {
        SESSION_TURNS.click();
        let prompt = build_prompt(self.history.snapshot(), user_input);
        let result = self.backend.complete(&self.config.model, &prompt).await;

        let display = match &result {
            Ok(text) => text.clone(),
            Err(err) => err.to_string(),
        };
        let billing = matches!(&result, Err(err) if err.is_payment_required());
        self.history.append(Turn::new(user_input, display.as_str()));

        if billing {
            SESSION_BILLING_FAILURES.click();
            TurnOutcome::BillingFailure(display)
        } else {
            TurnOutcome::Reply(display)
        }
    }

    /// Runs the interactive loop until a terminal condition.
    ///
    /// Blank input is skipped. The exit word and `/quit` end the session;
    /// other slash commands are handled locally without touching the API. A
    /// payment-required failure prints the farewell and terminates; every
    /// other failure is shown and the loop continues.
    pub async fn run(
        &mut self,
        source: &mut dyn TurnSource,
        renderer: &mut dyn Renderer,
    ) -> ExitReason {
        while let Some(line) = source.next_turn() {
            let line = line.trim().to_string();
            if line.is_empty() {
                continue;
            }
            if commands::is_exit(&line) {
                renderer.print_info("Goodbye!");
                return ExitReason::UserExit;
            }
            if let Some(command) = commands::parse_command(&line) {
                match command {
                    ChatCommand::Quit => {
                        renderer.print_info("Goodbye!");
                        return ExitReason::UserExit;
                    }
                    ChatCommand::Clear => {
                        self.clear();
                        renderer.print_info("Conversation cleared.");
                    }
                    ChatCommand::History => {
                        if self.history.is_empty() {
                            renderer.print_info("(no turns retained)");
                        } else {
                            for turn in self.history.snapshot() {
                                renderer.print_info(&format!("You: {}", turn.user_text));
                                renderer.print_info(&format!("LLM: {}", turn.reply_text));
                            }
                        }
                    }
                    ChatCommand::Help => {
                        for help_line in commands::help_text().lines() {
                            renderer.print_info(help_line);
                        }
                    }
                    ChatCommand::Invalid(message) => {
                        renderer.print_error(&message);
                    }
                }
                continue;
            }

            renderer.print_status("LLM: Thinking...");
            match self.send(&line).await {
                TurnOutcome::Reply(display) => renderer.print_reply(&display),
                TurnOutcome::BillingFailure(_) => {
                    renderer.print_info(BILLING_FAREWELL);
                    return ExitReason::BillingFailure;
                }
            }
        }
        ExitReason::EndOfInput
    }

    /// Clears the history window.
    pub fn clear(&mut self) {
        self.history = History::new(self.config.history_length);
    }

    /// Returns the retained history window.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ChatConfig {
        &self.config
    }
}
