use std::io::{BufRead, Write};

use tracing::{info, warn};

use super::QueryEngine;

const PROMPT: &str = "What would you like to know about an NBA player?";
const QUIT: &str = "quit";

impl QueryEngine {
    /// Read questions line by line until `quit` or end of input, printing an answer for each.
    ///
    /// A line that cannot be processed is reported and the loop moves on to the next one.
    pub fn run_interactive<R: BufRead, W: Write>(
        &self,
        mut input: R,
        mut output: W,
    ) -> std::io::Result<()> {
        if !self.dataset().is_degraded() {
            writeln!(
                output,
                "Note: Limited data available. Showing player active status only."
            )?;
        }
        writeln!(output, "NBA Analysis System")?;
        writeln!(output, "Ask questions about players. Type '{QUIT}' to exit.")?;

        let mut line = Vec::new();
        let mut answered = 0_usize;
        loop {
            writeln!(output, "\n{PROMPT}")?;
            output.flush()?;

            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                break;
            }

            let question = match std::str::from_utf8(&line) {
                Ok(text) => text.trim(),
                Err(e) => {
                    warn!("Unreadable question: {e}");
                    writeln!(output, "Error processing question: {e}")?;
                    continue;
                }
            };

            if question.eq_ignore_ascii_case(QUIT) {
                break;
            }

            let answer = self.answer(question);
            writeln!(output, "\nAnswer: {answer}")?;
            answered += 1;
        }

        info!("Session ended after {} questions", answered);
        Ok(())
    }
}
