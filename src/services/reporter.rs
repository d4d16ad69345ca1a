//! Outcome reporting to the Actions runner.
//!
//! The runner reads workflow commands (`::warning::...`) from stdout. A
//! failure is recorded on the reporter and turned into the exit code by the
//! binary; it never surfaces as an error.

use std::io::Write;

/// Sink for messages and the final verdict of a check run.
pub trait Reporter {
    fn info(&mut self, message: &str);
    fn debug(&mut self, message: &str);
    fn warning(&mut self, message: &str);
    /// Report `message` as an error and mark the run as failed.
    fn set_failed(&mut self, message: &str);
    fn is_failed(&self) -> bool;
}

/// Escape command data the way the Actions toolkit does.
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Reporter that writes workflow commands to a writer (stdout by default).
pub struct ActionsReporter<W: Write> {
    out: W,
    failed: bool,
}

impl ActionsReporter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ActionsReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, failed: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn command(&mut self, name: &str, message: &str) {
        let line = format!("::{}::{}", name, escape_data(message));
        self.line(&line);
    }

    fn line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            log::error!("Failed to write to runner output: {}", e);
        }
    }
}

impl<W: Write> Reporter for ActionsReporter<W> {
    fn info(&mut self, message: &str) {
        self.line(message);
    }

    fn debug(&mut self, message: &str) {
        self.command("debug", message);
    }

    fn warning(&mut self, message: &str) {
        self.command("warning", message);
    }

    fn set_failed(&mut self, message: &str) {
        self.failed = true;
        self.command("error", message);
    }

    fn is_failed(&self) -> bool {
        self.failed
    }
}
