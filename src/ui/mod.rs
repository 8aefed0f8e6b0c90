//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::domain::TicketId;
use crate::error::Result;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_banner, display_boundary_warning, display_cancelled, display_error,
    display_existing_tags, display_field, display_proposed_tag, display_status, display_success,
    display_summary, TagSummary,
};

/// Whether a confirmation answer means yes.
///
/// Only a single `y` or `Y` counts; `yes`, ` y`, `n` and an empty line all decline.
/// The line ending is the only thing removed before matching.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim_end_matches(&['\r', '\n'][..]), "y" | "Y")
}

/// Blocking line prompts over any reader/writer pair.
///
/// The binary uses [Prompter::stdio]; tests script the answers.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompt on the process terminal
    pub fn stdio() -> Self {
        Prompter::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Prompter { reader, writer }
    }

    /// Print `prompt` and read one line. End of input reads as an empty line.
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut input = String::new();
        self.reader.read_line(&mut input)?;
        Ok(input)
    }

    /// Ask the operator for the ticket number.
    ///
    /// # Returns
    /// * `Ok(TicketId)` - The trimmed ticket
    /// * `Err(EmptyTicketInput)` - If the answer is blank
    pub fn ask_ticket(&mut self) -> Result<TicketId> {
        let input = self.ask("Enter ticket number: ")?;
        TicketId::from_input(&input)
    }

    /// Ask whether to create and push `tag`. Default is no.
    pub fn confirm_tag(&mut self, tag: &str) -> Result<bool> {
        let input = self.ask(&format!("\nCreate and push tag '{}'? (y/N): ", tag))?;
        Ok(is_affirmative(&input))
    }

    /// Consume the prompter, returning the writer (for inspecting scripted sessions).
    pub fn into_writer(self) -> W {
        self.writer
    }
}
