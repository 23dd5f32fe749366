//! Interactive chat session built on top of the completion client.
//!
//! The module is organized into several components:
//!
//! - [`config`]: CLI argument parsing and configuration
//! - [`commands`]: exit detection and slash command handling
//! - [`session`]: the session state machine and per-turn flow

mod commands;
mod config;
mod session;

pub use crate::render::{PlainTextRenderer, Renderer};
pub use commands::{ChatCommand, help_text, is_exit, parse_command};
pub use config::{ChatArgs, ChatConfig};
pub use session::{
    BILLING_FAREWELL, ChatSession, CompletionBackend, ExitReason, TurnOutcome, TurnSource,
};
