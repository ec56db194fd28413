//! Console over any buffered reader and writer, stdin/stdout in the binary.

use std::io::{self, BufRead, Stdout, StdinLock, Write};

use anyhow::Result;

use quizforge_core::error::QuizError;
use quizforge_core::traits::Console;

pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl TerminalConsole<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            // Finish the prompt line so the next output starts cleanly.
            writeln!(self.output)?;
            return Err(QuizError::InputClosed.into());
        }
        // Bytes that are not UTF-8 become U+FFFD and fail validation downstream.
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}
