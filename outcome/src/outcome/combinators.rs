//! Combinators chaining outcomes on their current state.
//!
//! Each combinator consumes the receiver, matching `Option` and `Result`.
//! Closures run synchronously on the caller's thread and their panics are not
//! caught.
use super::Outcome;
use crate::UNSPECIFIED_ERROR;

impl<T> Outcome<T> {
    /// Projects the value of an ok outcome through `f`.
    ///
    /// A failed outcome keeps its message and carries `U::default()`; `f` is
    /// never called on it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let doubled = Outcome::new(5).map(|x| x * 2);
    /// assert_eq!(*doubled.data(), 10);
    ///
    /// let failed = Outcome::with_message(5, "boom").map(|x| x * 2);
    /// assert_eq!(failed.message(), "boom");
    /// assert_eq!(*failed.data(), 0);
    /// ```
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        U: Default,
        F: FnOnce(T) -> U,
    {
        if self.is_ok() {
            Outcome::new(f(self.value))
        } else {
            Outcome::failure(self.message)
        }
    }

    /// Rewrites the message of a failed outcome through `f`.
    ///
    /// The value is carried through unchanged. An ok outcome is returned as is
    /// and `f` is never called. A failed outcome stays failed: an empty string
    /// from `f` is replaced with [`UNSPECIFIED_ERROR`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let failed = Outcome::with_message(3, "timeout").map_err(|m| format!("fetch: {m}"));
    /// assert_eq!(failed.message(), "fetch: timeout");
    /// assert_eq!(*failed.data(), 3);
    /// ```
    #[must_use]
    pub fn map_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&str) -> String,
    {
        if self.is_ok() {
            return self;
        }
        let rewritten = f(&self.message);
        let message = if rewritten.is_empty() {
            String::from(UNSPECIFIED_ERROR)
        } else {
            rewritten
        };
        Self {
            value: self.value,
            message,
        }
    }

    /// Chains another fallible step onto an ok outcome.
    ///
    /// A failed outcome passes its message through with `U::default()`.
    #[must_use]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        U: Default,
        F: FnOnce(T) -> Outcome<U>,
    {
        if self.is_ok() {
            f(self.value)
        } else {
            Outcome::failure(self.message)
        }
    }

    /// Recovers a failed outcome by handing its message to `f`.
    ///
    /// An ok outcome is returned as a fresh ok outcome over the same value
    /// and `f` is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let recovered = Outcome::with_message(0, "fail").or_else(|_| Outcome::new(99));
    /// assert!(recovered.is_ok());
    /// assert_eq!(*recovered.data(), 99);
    /// ```
    #[must_use]
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce(&str) -> Self,
    {
        if self.is_ok() {
            Self::new(self.value)
        } else {
            f(&self.message)
        }
    }

    /// Returns the value when ok, otherwise `fallback`.
    #[must_use]
    pub fn data_or(self, fallback: T) -> T {
        if self.is_ok() { self.value } else { fallback }
    }

    /// Returns the value when ok, otherwise the result of `f` applied to the
    /// message.
    #[must_use]
    pub fn data_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(&str) -> T,
    {
        if self.is_ok() {
            self.value
        } else {
            f(&self.message)
        }
    }
}

impl<T: Default> Outcome<T> {
    /// Keeps an ok outcome, otherwise signals `other`'s error.
    ///
    /// A failed receiver yields `T::default()` paired with `other`'s message;
    /// `other`'s value is discarded. When `other` carries no message either,
    /// the result is an ok outcome over the default value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let kept = Outcome::new(4).or(Outcome::with_message(9, "other"));
    /// assert_eq!(*kept.data(), 4);
    ///
    /// let replaced = Outcome::with_message(4, "mine").or(Outcome::with_message(9, "other"));
    /// assert_eq!(replaced.message(), "other");
    /// assert_eq!(*replaced.data(), 0);
    /// ```
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        if self.is_ok() {
            Self::new(self.value)
        } else {
            Self::failure(other.message)
        }
    }
}
