//! Per-entry console output.
//!
//! Success lines go to stdout, failure lines to stderr with a log-style
//! timestamp prefix. Both keep a stable plain-text shape that scripts can
//! match; colors are only added when writing to a terminal.

use crate::rename::{OutcomeStatus, RenameOutcome};
use chrono::Local;
use colored::Colorize;
use std::fmt::Display;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Progress reporter for user-facing output
pub struct Progress {
    out: Box<dyn Write>,
    err: Box<dyn Write>,
    colors_enabled: bool,
}

/// Check if we should use colors in output
pub fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    io::stdout().is_terminal() && io::stderr().is_terminal()
}

impl Progress {
    /// Create a reporter writing to stdout and stderr
    pub fn new(colors_enabled: bool) -> Self {
        Self {
            out: Box::new(io::stdout()),
            err: Box::new(io::stderr()),
            colors_enabled,
        }
    }

    /// Create a reporter with custom writers (for testing)
    #[cfg(test)]
    pub fn with_writers(out: Box<dyn Write>, err: Box<dyn Write>) -> Self {
        Self {
            out,
            err,
            colors_enabled: false,
        }
    }

    /// Report the outcome of one entry as soon as it is known
    pub fn report(&mut self, outcome: &RenameOutcome) {
        let op = &outcome.operation;
        match &outcome.status {
            OutcomeStatus::Success => self.success(&op.source_name, &op.destination_name),
            OutcomeStatus::Failed(e) => self.failure(&op.source_path, &op.destination_path, e),
            OutcomeStatus::Suppressed(_) => {}
        }
    }

    /// `success: <old> -> <new>`
    pub fn success(&mut self, from: &str, to: &str) {
        if self.colors_enabled {
            let _ = writeln!(self.out, "{} {} {} {}", "success:".green(), from.dimmed(), "->".green(), to);
        } else {
            let _ = writeln!(self.out, "success: {} -> {}", from, to);
        }
    }

    /// `<timestamp> failed: <old path> -> <new path>, error: <error>`
    pub fn failure(&mut self, from: &Path, to: &Path, error: &dyn Display) {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        if self.colors_enabled {
            let _ = writeln!(
                self.err,
                "{} {} {} -> {}, error: {}",
                timestamp.to_string().dimmed(),
                "failed:".red().bold(),
                from.display(),
                to.display(),
                error.to_string().red()
            );
        } else {
            let _ = writeln!(
                self.err,
                "{} failed: {} -> {}, error: {}",
                timestamp,
                from.display(),
                to.display(),
                error
            );
        }
    }
}

/// Shared in-memory writer for capturing reporter output in tests
#[cfg(test)]
#[derive(Clone, Default)]
pub struct TestWriter(pub std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

#[cfg(test)]
impl TestWriter {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

#[cfg(test)]
impl Write for TestWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Reporter plus handles on its stdout and stderr buffers
#[cfg(test)]
pub fn capture() -> (Progress, TestWriter, TestWriter) {
    let out = TestWriter::default();
    let err = TestWriter::default();
    let progress = Progress::with_writers(Box::new(out.clone()), Box::new(err.clone()));
    (progress, out, err)
}
