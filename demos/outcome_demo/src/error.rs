//! Error types for the `outcome_demo` binary.
//!
//! Option validation, logging setup, and output failures are collected here so
//! `main` can hand a single error to `color-eyre`.
use std::io;
use thiserror::Error;

/// Convenience alias for demo operations.
pub type Result<T, E = DemoError> = std::result::Result<T, E>;

/// Errors raised by the outcome demo.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Option values that would make the walkthrough meaningless.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The tracing subscriber could not be installed.
    #[error("failed to initialise logging: {0}")]
    Logging(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// Writing the report to standard output failed.
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}

/// Validation issues detected before the walkthrough runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The repair message would leave the outcome ok, hiding the demotion step.
    #[error("--repair-message must contain visible characters")]
    BlankRepairMessage,
}
