//! Output rendering for the chat session.
//!
//! The session writes through this trait rather than printing directly, so
//! the state machine can be exercised in tests without a console.

use std::io::{self, Write};

/// Trait for rendering session output.
pub trait Renderer: Send {
    /// Print a completed reply (or the display string of a failed turn).
    fn print_reply(&mut self, text: &str);

    /// Print a transient status line, such as a "thinking" notice.
    fn print_status(&mut self, text: &str);

    /// Print an informational message.
    fn print_info(&mut self, text: &str);

    /// Print an error message.
    fn print_error(&mut self, text: &str);
}

/// Renderer that writes plain text to stdout.
pub struct PlainTextRenderer {
    out: io::Stdout,
}

impl PlainTextRenderer {
    /// Creates a renderer writing to stdout.
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }

    fn write_line(&mut self, line: &str) {
        // Output errors at the console are not recoverable; drop them.
        let _ = writeln!(self.out, "{}", line);
    }
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for PlainTextRenderer {
    fn print_reply(&mut self, text: &str) {
        self.write_line(&format!("LLM: {}", text));
    }

    fn print_status(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
        // Make sure status lines appear before the call blocks on the API.
        let _ = self.out.flush();
    }

    fn print_info(&mut self, text: &str) {
        self.write_line(text);
    }

    fn print_error(&mut self, text: &str) {
        self.write_line(&format!("Error: {}", text));
    }
}
