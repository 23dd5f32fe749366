//! Interactive chat with a Hugging Face text-generation model.
//!
//! The session keeps a bounded window of previous exchanges and re-sends it
//! as context with every prompt; the remote endpoint itself is stateless.
//!
//! # Usage
//!
//! ```bash
//! # Interactive chat with default settings
//! zephyrus-chat
//!
//! # Specify a model and a larger context window
//! zephyrus-chat --model google/flan-t5-base --history-length 5
//!
//! # One-shot: send a single prompt with no context and exit
//! zephyrus-chat --prompt "What is the capital of France?"
//! ```
//!
//! Type `exit` (or `/quit`) to leave the chat; `/help` lists the other
//! commands.

use std::time::Duration;

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use zephyrus::chat::{ChatArgs, ChatConfig, ChatSession, ExitReason, TurnSource};
use zephyrus::{HuggingFace, PlainTextRenderer, Renderer};

/// Turn source backed by a rustyline editor.
///
/// Ctrl+D ends the input stream; Ctrl+C at the prompt is a soft interrupt
/// reported as an empty turn, which the session loop skips.
struct ReadlineSource {
    editor: DefaultEditor,
}

impl ReadlineSource {
    fn new() -> Result<Self, ReadlineError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl TurnSource for ReadlineSource {
    fn next_turn(&mut self) -> Option<String> {
        match self.editor.readline("\nYou: ") {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.trim());
                }
                Some(line)
            }
            Err(ReadlineError::Interrupted) => Some(String::new()),
            Err(ReadlineError::Eof) => None,
            Err(err) => {
                eprintln!("Input error: {}", err);
                None
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = ChatArgs::from_command_line_relaxed("zephyrus-chat [OPTIONS]");
    let mut config = ChatConfig::from(&args);
    let timeout = args.timeout.map(Duration::from_secs);

    let client = HuggingFace::with_options(args.api_key.clone(), None, timeout)?;
    let mut renderer = PlainTextRenderer::new();

    if let Some(prompt) = args.prompt {
        // One-shot invocations carry no context: capacity zero, not an
        // exception to the history bound.
        config = config.with_history_length(0);
        let mut session = ChatSession::new(client, config);
        renderer.print_status("LLM: Thinking...");
        match session.send(&prompt).await {
            zephyrus::chat::TurnOutcome::Reply(display) => renderer.print_reply(&display),
            zephyrus::chat::TurnOutcome::BillingFailure(display) => {
                renderer.print_reply(&display);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let mut session = ChatSession::new(client, config);
    let mut source = ReadlineSource::new()?;

    println!("Welcome to the Contextual LLM Chat! Type 'exit' to quit.");
    println!("Model: {}", session.config().model);

    match session.run(&mut source, &mut renderer).await {
        ExitReason::UserExit | ExitReason::BillingFailure => {}
        ExitReason::EndOfInput => println!("\nGoodbye!"),
    }

    Ok(())
}
