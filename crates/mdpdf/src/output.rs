//! Operator-facing progress messages.

use console::{Style, Term};

/// Progress and diagnostics on stderr.
///
/// Warnings and errors are always shown; progress and success lines are
/// suppressed in quiet mode.
pub(crate) struct Output {
    term: Term,
    quiet: bool,
    step: Style,
    done: Style,
    warn: Style,
    fail: Style,
}

impl Output {
    pub(crate) fn new(quiet: bool) -> Self {
        Self {
            term: Term::stderr(),
            quiet,
            step: Style::new().dim(),
            done: Style::new().green().bold(),
            warn: Style::new().yellow(),
            fail: Style::new().red(),
        }
    }

    /// Pipeline step in progress.
    pub(crate) fn step(&self, msg: &str) {
        if !self.quiet {
            self.line(&self.step, msg);
        }
    }

    /// Final result (green).
    pub(crate) fn success(&self, msg: &str) {
        if !self.quiet {
            self.line(&self.done, &format!("\u{2714} {msg}"));
        }
    }

    /// Recoverable problem (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        self.line(&self.warn, &format!("Warning: {msg}"));
    }

    /// Fatal error (red).
    pub(crate) fn error(&self, msg: &str) {
        self.line(&self.fail, msg);
    }

    fn line(&self, style: &Style, msg: &str) {
        let _ = self.term.write_line(&style.apply_to(msg).to_string());
    }
}
