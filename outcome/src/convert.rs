//! Conversions between [`Outcome`] and [`Result`].
use std::fmt::Display;

use crate::{Outcome, OutcomeError};

/// `Result` produced when an outcome is converted with
/// [`Outcome::into_result`].
pub type OutcomeResult<T> = Result<T, OutcomeError>;

/// Message used when an error converted into an outcome renders as an empty
/// string, which would otherwise read back as success.
pub const UNSPECIFIED_ERROR: &str = "unspecified error";

impl<T> Outcome<T> {
    /// Converts into a [`Result`], dropping the value of a failed outcome.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError`] carrying the message when the outcome is in
    /// the error state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// assert_eq!(Outcome::new(7).into_result(), Ok(7));
    ///
    /// let err = Outcome::with_message(7, "nope").into_result().unwrap_err();
    /// assert_eq!(err.to_string(), "nope");
    /// ```
    pub fn into_result(self) -> OutcomeResult<T> {
        let (value, message) = self.into_parts();
        if message.is_empty() {
            Ok(value)
        } else {
            Err(OutcomeError::new(message))
        }
    }
}

impl<T> From<Outcome<T>> for OutcomeResult<T> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    T: Default,
    E: Display,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::new(value),
            Err(err) => {
                let message = err.to_string();
                if message.is_empty() {
                    Self::failure(UNSPECIFIED_ERROR)
                } else {
                    Self::failure(message)
                }
            }
        }
    }
}
