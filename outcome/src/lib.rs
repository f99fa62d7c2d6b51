//! Core crate for the two-slot [`Outcome`] container.
//!
//! An [`Outcome<T>`] always carries a value of `T` next to a message string.
//! The message slot alone decides the state: an empty message is success, any
//! other text is failure. Nothing else is stored, so the state can never drift
//! away from the message.
//!
//! ```rust
//! use outcome::Outcome;
//!
//! let mut outcome = Outcome::new(42);
//! assert!(outcome.is_ok());
//!
//! outcome.set_message("bad");
//! assert!(outcome.is_err());
//! assert_eq!(*outcome.data(), 42);
//!
//! outcome.clear_message();
//! assert!(outcome.is_ok());
//! ```
//!
//! The container does not log, panic, or exit on its own. Conversions to and
//! from [`Result`] live in [`Outcome::into_result`] and the `From` impls, with
//! [`OutcomeError`] standing in for the message on the `Err` side.

mod convert;
mod error;
mod outcome;

pub use convert::{OutcomeResult, UNSPECIFIED_ERROR};
pub use error::OutcomeError;
pub use outcome::{Outcome, State, swap};
