// Public modules
pub mod chat;
pub mod client;
pub mod error;
pub mod extract;
pub mod history;
pub mod prompt;
pub mod render;
pub mod report;
pub mod types;

mod observability;

// Re-exports
pub use client::{DEFAULT_MODEL, HuggingFace};
pub use error::{Error, Result};
pub use history::History;
pub use observability::register_biometrics;
pub use render::{PlainTextRenderer, Renderer};
pub use types::*;
