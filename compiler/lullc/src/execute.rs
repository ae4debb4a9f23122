//! Running a whole program: entry lookup, linking, `main`, and capture of
//! what the program printed.

use std::io;
use std::path::PathBuf;

use lull_diagnostic::ScriptError;
use lull_eval::{
    buffer_console, link_program, run_main, scripted_console, stdio_console, SharedConsole,
    SourceProvider, Value,
};

use crate::library::Library;
use crate::providers::{FsSourceProvider, ENTRY_FILE};

/// Label used for inline sources that were not given one.
pub const INLINE_LABEL: &str = "<inline>";

/// What to run and how.
#[derive(Clone, Debug, Default)]
pub struct ExecuteOptions {
    /// Directory holding `main.ll` and the program's own modules.
    pub root: Option<PathBuf>,
    /// Entry source; takes precedence over `<root>/main.ll`.
    pub program_source: Option<String>,
    /// Source name used in error reports.
    pub label: Option<String>,
    /// Lines served to `readln`. Without it, `readln` reads stdin.
    pub input: Option<String>,
    /// Fall back to the bundled library for imports.
    pub use_std_library: bool,
    /// Write `println` output straight to stdout instead of capturing it.
    /// Scripted input is ignored in this mode.
    pub stream_output: bool,
}

impl ExecuteOptions {
    /// Run `source` as the entry file.
    pub fn inline(source: impl Into<String>) -> Self {
        ExecuteOptions {
            program_source: Some(source.into()),
            use_std_library: true,
            ..Self::default()
        }
    }

    /// Run `<root>/main.ll`.
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        ExecuteOptions {
            root: Some(root.into()),
            use_std_library: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    #[must_use]
    pub fn without_std_library(mut self) -> Self {
        self.use_std_library = false;
        self
    }

    #[must_use]
    pub fn streaming(mut self) -> Self {
        self.stream_output = true;
        self
    }

    /// Label of the entry source in error reports.
    pub fn entry_label(&self) -> String {
        if let Some(label) = &self.label {
            return label.clone();
        }
        match (&self.program_source, &self.root) {
            (None, Some(root)) => root.join(ENTRY_FILE).display().to_string(),
            _ => INLINE_LABEL.to_string(),
        }
    }

    fn console(&self) -> SharedConsole {
        if self.stream_output {
            return stdio_console();
        }
        match &self.input {
            Some(input) => scripted_console(input),
            None => buffer_console(),
        }
    }

    fn entry_source(&self) -> Result<String, ExecError> {
        if let Some(source) = &self.program_source {
            return Ok(source.clone());
        }
        let Some(root) = &self.root else {
            return Err(ExecError::MissingEntry);
        };
        let path = root.join(ENTRY_FILE);
        std::fs::read_to_string(&path).map_err(|source| ExecError::Io { path, source })
    }

    /// Module lookup order: program root and resource directory, then the
    /// bundled library.
    fn providers(&self) -> Vec<Box<dyn SourceProvider>> {
        let mut providers: Vec<Box<dyn SourceProvider>> = Vec::new();
        if let Some(root) = &self.root {
            providers.push(Box::new(FsSourceProvider::new(root.clone())));
        }
        if self.use_std_library {
            providers.push(Box::new(Library::default_libraries()));
        }
        providers
    }
}

/// Why a run failed.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("nothing to run: give a program directory or inline source")]
    MissingEntry,
}

/// Outcome of [`execute`].
#[derive(Debug)]
pub struct ExecutionResult {
    /// Everything the program printed; empty when streaming.
    pub stdout: String,
    /// Error report, empty on success.
    pub stderr: String,
    pub error: Option<ExecError>,
    /// Value returned by `main`.
    pub value: Option<Value>,
}

impl ExecutionResult {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Parse, link and run a program.
///
/// Never panics on script failures: the error is returned in the result and
/// reported in `stderr` as `Script error in <label>: ...`.
#[tracing::instrument(level = "debug", skip_all, fields(label = %options.entry_label()))]
pub fn execute(options: &ExecuteOptions) -> ExecutionResult {
    let console = options.console();
    let outcome = run(options, &console);
    let stdout = console.output();
    match outcome {
        Ok(value) => ExecutionResult {
            stdout,
            stderr: String::new(),
            error: None,
            value: Some(value),
        },
        Err(error) => {
            let stderr = match &error {
                ExecError::Script(err) => script_error_report(&options.entry_label(), err),
                other => format!("{other}\n"),
            };
            tracing::debug!(%error, "program failed");
            ExecutionResult {
                stdout,
                stderr,
                error: Some(error),
                value: None,
            }
        }
    }
}

/// `Script error in <label>: <message> at l:c`, then a `Script stack:`
/// header and one line per frame when the backtrace is not empty.
fn script_error_report(label: &str, err: &ScriptError) -> String {
    let mut report = format!("Script error in {label}: {} at {}\n", err.kind, err.position);
    if !err.backtrace.is_empty() {
        report.push_str("Script stack:\n");
        for frame in err.backtrace.frames() {
            report.push_str(&format!("{frame}\n"));
        }
    }
    report
}

fn run(options: &ExecuteOptions, console: &SharedConsole) -> Result<Value, ExecError> {
    let source = options.entry_source()?;
    let providers = options.providers();
    let functions = link_program(&source, &providers)?;
    Ok(run_main(&functions, SharedConsole::clone(console))?)
}
