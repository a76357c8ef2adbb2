//! Validator: lazy invariant checking with short-circuit evaluation
//!
//! Callers register named boolean conditions against their own state,
//! then trigger evaluation through one of the terminal operations:
//! [`Validator::is_valid`], [`Validator::first_error`],
//! [`Validator::on_invalid`], [`Validator::ensure_valid`].
//! No condition runs at registration time, and evaluation stops at the
//! first condition that fails.

#![deny(unsafe_code)]

use std::rc::Rc;

/// A deferred boolean check.
///
/// Reference-counted so the same predicate object can be registered in
/// more than one validator and recognized as identical (by pointer) when
/// validators are composed.
pub type Predicate<'a> = Rc<dyn Fn() -> bool + 'a>;

/// Stock error for [`Validator::ensure_valid`]: carries the failing
/// condition's message verbatim.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct Invalid(pub String);

/// Accumulates (condition, message) pairs and evaluates them lazily, in
/// insertion order, up to the first failure.
///
/// Registration methods consume and return the validator so checks can be
/// chained. Terminal operations take `&self` and never mutate: a validator
/// can be evaluated repeatedly, and extended between evaluations.
///
/// The lifetime `'a` is the borrow of whatever caller-owned state the
/// condition closures capture; the validator holds references into that
/// state rather than copies of it. The `Rc`-based storage is deliberately
/// neither `Send` nor `Sync`, so cross-thread sharing is rejected at
/// compile time.
pub struct Validator<'a> {
    conditions: Vec<Condition<'a>>,
}

struct Condition<'a> {
    predicate: Predicate<'a>,
    message: String,
}

impl<'a> Validator<'a> {
    /// Creates a validator with no conditions. An empty validator is valid.
    pub fn new() -> Self {
        Self {
            conditions: Vec::new(),
        }
    }

    /// Registers `condition` paired with an error message.
    ///
    /// The closure is not called here; it runs when a terminal operation
    /// does. The message, by contrast, is fixed now: interpolate current
    /// field values with `format!` at the call site.
    pub fn check(self, condition: impl Fn() -> bool + 'a, message: impl Into<String>) -> Self {
        self.check_shared(Rc::new(condition), message)
    }

    /// Registers a caller-held predicate.
    ///
    /// If the same `Rc` (by pointer identity) is already registered, the
    /// new message replaces the old one and the condition keeps its
    /// original evaluation position.
    pub fn check_shared(mut self, predicate: Predicate<'a>, message: impl Into<String>) -> Self {
        self.insert(predicate, message.into());
        self
    }

    /// Registers a check that `value` is present.
    pub fn require_some<T>(self, value: &'a Option<T>, message: impl Into<String>) -> Self {
        self.check(move || value.is_some(), message)
    }

    /// Registers a check that `value` is not the empty string.
    pub fn require_non_empty(self, value: &'a str, message: impl Into<String>) -> Self {
        self.check(move || !value.is_empty(), message)
    }

    /// Registers a check that `value` contains at least one non-whitespace
    /// character.
    pub fn require_non_blank(self, value: &'a str, message: impl Into<String>) -> Self {
        self.check(move || !value.trim().is_empty(), message)
    }

    /// Merges `other`'s conditions into this validator.
    ///
    /// Incoming conditions are appended after the existing ones, in
    /// `other`'s insertion order. A condition whose predicate is already
    /// registered here (same `Rc`) has its message overwritten in place
    /// instead of being appended again.
    pub fn compose(mut self, other: Validator<'a>) -> Self {
        for condition in other.conditions {
            self.insert(condition.predicate, condition.message);
        }
        self
    }

    /// Number of registered conditions. Evaluates nothing.
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Evaluates conditions in insertion order and reports whether all
    /// hold. Stops at the first failure; later conditions do not run.
    pub fn is_valid(&self) -> bool {
        self.first_failure().is_none()
    }

    /// Message of the first failing condition, or `None` when every
    /// condition holds.
    pub fn first_error(&self) -> Option<&str> {
        self.first_failure().map(|c| c.message.as_str())
    }

    /// Runs `action` with the first failing condition's message, exactly
    /// once; does nothing when the validator is valid.
    pub fn on_invalid(&self, action: impl FnOnce(&str)) {
        if let Some(condition) = self.first_failure() {
            action(&condition.message);
        }
    }

    /// Returns `Err(to_error(message))` built from the first failing
    /// condition's message, or `Ok(())` when every condition holds.
    ///
    /// The error type is entirely the caller's; pass [`Invalid`] when no
    /// richer type exists.
    pub fn ensure_valid<E>(&self, to_error: impl FnOnce(&str) -> E) -> Result<(), E> {
        match self.first_failure() {
            Some(condition) => Err(to_error(&condition.message)),
            None => Ok(()),
        }
    }

    fn first_failure(&self) -> Option<&Condition<'a>> {
        self.conditions.iter().find(|c| !(c.predicate)())
    }

    // Reproduces insertion-ordered map semantics: overwrite in place on an
    // identity hit, append otherwise.
    fn insert(&mut self, predicate: Predicate<'a>, message: String) {
        match self
            .conditions
            .iter()
            .position(|c| Rc::ptr_eq(&c.predicate, &predicate))
        {
            Some(index) => self.conditions[index].message = message,
            None => self.conditions.push(Condition { predicate, message }),
        }
    }
}

impl Default for Validator<'_> {
    fn default() -> Self {
        Self::new()
    }
}
