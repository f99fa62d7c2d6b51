//! Comparison, hashing, and display for [`Outcome`].
//!
//! Two outcomes compare by value alone. The message takes no part, so
//! `Outcome::with_message(1, "a") == Outcome::with_message(1, "b")` holds.
//! Hashing follows the same rule to stay consistent with `Eq`.
use std::fmt;
use std::hash::{Hash, Hasher};

use super::Outcome;

impl<T: PartialEq> PartialEq for Outcome<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Outcome<T> {}

impl<T: Hash> Hash for Outcome<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            fmt::Display::fmt(&self.value, f)
        } else {
            write!(f, "error: {}", self.message)
        }
    }
}
