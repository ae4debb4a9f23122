//! Console capability: where `println` writes and `readln` reads.
//!
//! The interpreter never touches process streams directly. A harness picks
//! the implementation: [`Console::Stdio`] for the CLI, or a
//! [`BufferConsole`] that captures output and optionally scripts input.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Console that writes to stdout and reads from stdin.
#[derive(Default)]
pub struct StdioConsole;

impl StdioConsole {
    pub fn write_line(&self, line: &str) {
        let mut out = io::stdout().lock();
        if let Err(err) = writeln!(out, "{line}").and_then(|()| out.flush()) {
            tracing::warn!(%err, "failed to write to stdout");
        }
    }

    pub fn read_line(&self) -> Option<String> {
        read_stdin_line()
    }
}

/// Console that captures output in memory.
///
/// Input comes from scripted lines when provided, otherwise from stdin.
pub struct BufferConsole {
    output: Mutex<String>,
    input: Option<Mutex<VecDeque<String>>>,
}

impl BufferConsole {
    pub fn new() -> Self {
        BufferConsole {
            output: Mutex::new(String::new()),
            input: None,
        }
    }

    /// Capture output and serve `input` line by line to `readln`.
    pub fn with_input(input: &str) -> Self {
        BufferConsole {
            output: Mutex::new(String::new()),
            input: Some(Mutex::new(input.lines().map(str::to_string).collect())),
        }
    }

    pub fn write_line(&self, line: &str) {
        let mut buf = self.output.lock();
        buf.push_str(line);
        buf.push('\n');
    }

    pub fn read_line(&self) -> Option<String> {
        match &self.input {
            Some(lines) => lines.lock().pop_front(),
            None => read_stdin_line(),
        }
    }

    pub fn output(&self) -> String {
        self.output.lock().clone()
    }
}

impl Default for BufferConsole {
    fn default() -> Self {
        Self::new()
    }
}

/// Console implementation, dispatched by enum.
pub enum Console {
    Stdio(StdioConsole),
    Buffer(BufferConsole),
}

impl Console {
    pub fn write_line(&self, line: &str) {
        match self {
            Self::Stdio(c) => c.write_line(line),
            Self::Buffer(c) => c.write_line(line),
        }
    }

    /// Next input line without its terminator, `None` at end of input.
    pub fn read_line(&self) -> Option<String> {
        match self {
            Self::Stdio(c) => c.read_line(),
            Self::Buffer(c) => c.read_line(),
        }
    }

    /// Captured output; empty for stdio.
    pub fn output(&self) -> String {
        match self {
            Self::Stdio(_) => String::new(),
            Self::Buffer(c) => c.output(),
        }
    }
}

pub type SharedConsole = Arc<Console>;

pub fn stdio_console() -> SharedConsole {
    Arc::new(Console::Stdio(StdioConsole))
}

pub fn buffer_console() -> SharedConsole {
    Arc::new(Console::Buffer(BufferConsole::new()))
}

/// Buffer console whose `readln` serves the lines of `input`.
pub fn scripted_console(input: &str) -> SharedConsole {
    Arc::new(Console::Buffer(BufferConsole::with_input(input)))
}

fn read_stdin_line() -> Option<String> {
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => {
            let trimmed = line.trim_end_matches(['\n', '\r']).len();
            line.truncate(trimmed);
            Some(line)
        }
        Err(err) => {
            tracing::warn!(%err, "failed to read from stdin");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_buffer_captures_lines() {
        let console = buffer_console();
        console.write_line("a");
        console.write_line("");
        assert_eq!(console.output(), "a\n\n");
    }

    #[test]
    fn test_scripted_input_then_end() {
        let console = scripted_console("first\r\nsecond\n");
        assert_eq!(console.read_line().as_deref(), Some("first"));
        assert_eq!(console.read_line().as_deref(), Some("second"));
        assert_eq!(console.read_line(), None);
    }
}
