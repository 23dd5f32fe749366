// Public modules
pub mod generation;
pub mod turn;

// Re-exports
pub use generation::{
    DEFAULT_MAX_NEW_TOKENS, DEFAULT_TEMPERATURE, GenerationParameters, GenerationRequest,
};
pub use turn::Turn;
