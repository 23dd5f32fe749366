//! One-shot prompt tool for a Hugging Face text-generation model.
//!
//! Sends a single prompt with no conversation context and prints the reply.
//! Failures are printed the same way the chat session would show them; a
//! payment-required answer additionally exits nonzero.
//!
//! # Usage
//!
//! ```bash
//! zephyrus-prompt What is the capital of France?
//!
//! zephyrus-prompt --model google/flan-t5-base "Summarize this sentence."
//! ```

use std::time::Duration;

use arrrg::CommandLine;
use arrrg_derive::CommandLine;

use zephyrus::chat::{ChatConfig, ChatSession, TurnOutcome};
use zephyrus::{DEFAULT_MODEL, HuggingFace};

/// Command-line arguments for the zephyrus-prompt tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
struct Args {
    /// Model to query.
    #[arrrg(
        optional,
        "Model to use (default: HuggingFaceH4/zephyr-7b-beta)",
        "MODEL"
    )]
    model: Option<String>,

    /// API key; falls back to the HUGGINGFACE_API_KEY environment variable.
    #[arrrg(optional, "API key (default: HUGGINGFACE_API_KEY env var)", "KEY")]
    api_key: Option<String>,

    /// Request timeout in seconds.
    #[arrrg(optional, "Request timeout in seconds (default: 60)", "SECONDS")]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, free) = Args::from_command_line_relaxed("zephyrus-prompt [OPTIONS] <PROMPT>...");

    if free.is_empty() {
        eprintln!("Error: Must specify a prompt");
        std::process::exit(1);
    }
    let prompt = free.join(" ");

    let client = HuggingFace::with_options(
        args.api_key,
        None,
        args.timeout.map(Duration::from_secs),
    )?;
    let config = ChatConfig::new()
        .with_model(args.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()))
        .with_history_length(0);
    let mut session = ChatSession::new(client, config);

    match session.send(&prompt).await {
        TurnOutcome::Reply(display) => println!("{}", display),
        TurnOutcome::BillingFailure(display) => {
            eprintln!("{}", display);
            std::process::exit(1);
        }
    }

    Ok(())
}
