//! Error type surfaced when an [`Outcome`](crate::Outcome) leaves the
//! two-slot world for a plain [`Result`].
use thiserror::Error;

/// Failure text carried out of an outcome in the error state.
///
/// The rendered form is the message itself, so callers can bubble it up with
/// `?` without adding a prefix of their own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{message}")]
pub struct OutcomeError {
    message: String,
}

impl OutcomeError {
    /// Wraps the message of a failed outcome.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the failure text.
    #[must_use]
    pub const fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Consumes the error, returning the owned failure text.
    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }
}
