//! The [`Outcome`] container and its in-place operations.
//!
//! State is derived from the message slot on every query. There is no cached
//! flag, so every mutator that touches the message is also a state transition
//! and every mutator that touches the value is not.

mod cmp;
mod combinators;

/// A value paired with a message whose emptiness decides success.
///
/// The value is always present. Moving into the error state does not clear
/// it, so [`Outcome::data`] on a failed outcome returns whatever was stored
/// last. Check [`Outcome::is_ok`] before trusting it.
///
/// Equality and hashing look at the value only; see the `PartialEq` impl.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome<T> {
    value: T,
    #[cfg_attr(feature = "serde", serde(default))]
    message: String,
}

/// Two-way classification of an [`Outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum State {
    /// The message slot is empty.
    Ok,
    /// The message slot holds failure text.
    Err,
}

impl<T> Outcome<T> {
    /// Creates a successful outcome holding `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let outcome = Outcome::new("hello");
    /// assert!(outcome.is_ok());
    /// assert_eq!(outcome.message(), "");
    /// ```
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            message: String::new(),
        }
    }

    /// Creates an outcome from a value and a message.
    ///
    /// A non-empty `message` puts the outcome in the error state even though
    /// `value` is kept as given.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let outcome = Outcome::with_message(1, "false");
    /// assert!(outcome.is_err());
    /// assert_eq!(*outcome.data(), 1);
    /// ```
    #[must_use]
    pub fn with_message(value: T, message: impl Into<String>) -> Self {
        Self {
            value,
            message: message.into(),
        }
    }

    /// Returns `true` when the message slot is empty.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.message.is_empty()
    }

    /// Returns `true` when the message slot holds text.
    #[must_use]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Classifies the outcome from its message slot.
    #[must_use]
    pub const fn state(&self) -> State {
        if self.is_ok() { State::Ok } else { State::Err }
    }

    /// Returns the stored value regardless of state.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.value
    }

    /// Returns a mutable reference to the stored value. The message, and with
    /// it the state, is left alone.
    #[must_use]
    pub const fn data_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Returns the message, empty when the outcome is ok.
    #[must_use]
    pub const fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Returns the value only when the outcome is ok.
    #[must_use]
    pub const fn ok(&self) -> Option<&T> {
        if self.is_ok() { Some(&self.value) } else { None }
    }

    /// Returns the message only when the outcome is an error.
    #[must_use]
    pub const fn err(&self) -> Option<&str> {
        if self.is_err() {
            Some(self.message.as_str())
        } else {
            None
        }
    }

    /// Views the outcome as a borrowed [`Result`], hiding the stale value of a
    /// failed outcome.
    ///
    /// # Errors
    ///
    /// Returns the message when the outcome is in the error state.
    pub const fn as_result(&self) -> Result<&T, &str> {
        if self.is_ok() {
            Ok(&self.value)
        } else {
            Err(self.message.as_str())
        }
    }

    /// Consumes the outcome, returning the value regardless of state.
    #[must_use]
    pub fn into_data(self) -> T {
        self.value
    }

    /// Consumes the outcome, returning both slots.
    #[must_use]
    pub fn into_parts(self) -> (T, String) {
        (self.value, self.message)
    }

    /// Replaces the message without touching the value.
    ///
    /// This is how an outcome moves between the ok and error states in place:
    /// an empty message promotes it to ok, anything else demotes it to error.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Empties the message slot, leaving the outcome ok.
    pub fn clear_message(&mut self) {
        self.message.clear();
    }

    /// Replaces the value without touching the message or state.
    ///
    /// Returns `self` so successive replacements can be chained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let mut outcome = Outcome::with_message(1, "false");
    /// outcome.set_data(2).set_data(3);
    /// assert_eq!(*outcome.data(), 3);
    /// assert_eq!(outcome.message(), "false");
    /// ```
    pub fn set_data(&mut self, value: T) -> &mut Self {
        self.value = value;
        self
    }

    /// Overwrites both slots by moving them out of `other`.
    pub fn replace_with(&mut self, other: Self) {
        *self = other;
    }

    /// Exchanges both slots with `other`.
    pub const fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }
}

impl<T: Clone> Outcome<T> {
    /// Overwrites both slots with copies of `other`'s.
    ///
    /// The borrow checker already forbids `other` from aliasing `self`, so a
    /// self-replace cannot corrupt the value. Existing allocations are reused
    /// through `clone_from`.
    pub fn replace_from(&mut self, other: &Self) {
        self.value.clone_from(&other.value);
        self.message.clone_from(&other.message);
    }
}

impl<T: Default> Outcome<T> {
    /// Creates a failed outcome holding `T::default()`.
    ///
    /// An empty `message` still yields an ok outcome; state always follows
    /// the message slot.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self::with_message(T::default(), message)
    }
}

/// Exchanges the contents of two outcomes.
pub const fn swap<T>(a: &mut Outcome<T>, b: &mut Outcome<T>) {
    a.swap(b);
}
