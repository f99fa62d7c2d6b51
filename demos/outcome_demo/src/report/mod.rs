//! Walkthrough of an outcome's state transitions and its rendering.
//!
//! [`walkthrough`] is pure apart from `tracing` events, so tests assert on
//! the returned [`Report`]; [`print_report`] is the only part touching stdout.
use std::io::{self, Write};

use outcome::Outcome;
use tracing::{debug, info};

use crate::cli::DemoConfig;

/// Lines produced by a walkthrough, blank lines included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    /// Returns the rendered lines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn push_slots<T: std::fmt::Display>(&mut self, label: &str, outcome: &Outcome<T>) {
        self.push(format!(
            "`{label}`: {} // {:?}",
            outcome.data(),
            outcome.message()
        ));
    }

    fn push_state<T>(&mut self, outcome: &Outcome<T>) {
        self.push(format!(
            "is ok // is err => {} // {}",
            outcome.is_ok(),
            outcome.is_err()
        ));
    }
}

/// Runs the walkthrough described by `config`.
///
/// The numeric outcome starts from `value` and `message`, has its value
/// replaced with `replacement`, is demoted with `repair_message`, and is
/// finally promoted again by clearing the message.
///
/// # Examples
///
/// ```rust
/// use outcome_demo::cli::DemoConfig;
/// use outcome_demo::report::walkthrough;
///
/// let report = walkthrough(&DemoConfig::default());
/// assert_eq!(report.lines()[1], "`result`: 1 // \"false\"");
/// ```
#[must_use]
pub fn walkthrough(config: &DemoConfig) -> Report {
    let mut report = Report::default();
    let mut result = Outcome::with_message(config.value, config.message.as_str());
    let text = Outcome::new(String::from("hello"));
    debug!(state = ?result.state(), "constructed numeric outcome");

    report.push("Original value(s) for");
    report.push_slots("result", &result);
    report.push_slots("text", &text);
    report.push("");

    result.set_data(config.replacement);
    result.set_message(config.repair_message.as_str());
    debug!(
        value = *result.data(),
        message = result.message(),
        "replaced value and message"
    );
    report.push("Post modification:");
    report.push_slots("result", &result);
    report.push("");
    report.push_state(&result);

    result.clear_message();
    debug!(state = ?result.state(), "cleared message");
    report.push_state(&result);

    info!(lines = report.lines.len(), "walkthrough complete");
    report
}

fn write_report_to<W: Write>(writer: &mut W, report: &Report) -> io::Result<()> {
    for line in report.lines() {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Prints the report to standard output.
///
/// # Errors
///
/// Returns an [`io::Error`] when writing to standard output fails.
pub fn print_report(report: &Report) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_report_to(&mut stdout, report)
}
