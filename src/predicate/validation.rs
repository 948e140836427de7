//! Validation integration for predicates
//!
//! Bridges a [`Predicate`] into [`Validation`] so the field rules read as
//! "this value, this rule, this message".

use super::combinators::Predicate;
use crate::Validation;

/// Validate a value using a predicate.
///
/// # Example
///
/// ```rust
/// use tashra::{Validation, predicate::*};
///
/// let result = validate("a@b.co", email_shape(), "Please enter a valid email address");
/// assert_eq!(result, Validation::success("a@b.co"));
///
/// let result = validate("a@b", email_shape(), "Please enter a valid email address");
/// assert_eq!(result, Validation::failure("Please enter a valid email address"));
/// ```
pub fn validate<'a, E, P>(value: &'a str, predicate: P, error: E) -> Validation<&'a str, E>
where
    P: Predicate<str>,
{
    if predicate.check(value) {
        Validation::success(value)
    } else {
        Validation::failure(error)
    }
}

impl<'a, E> Validation<&'a str, E> {
    /// Keep a success only if it also satisfies `predicate`.
    ///
    /// Failures pass through untouched, so chained rules report only the first
    /// one that fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tashra::{Validation, predicate::*};
    ///
    /// let result = validate(" A ", not_blank(), "Name is required")
    ///     .ensure(trimmed_len_min(2), "Name must be at least 2 characters");
    /// assert_eq!(result, Validation::failure("Name must be at least 2 characters"));
    /// ```
    pub fn ensure<P>(self, predicate: P, error: E) -> Self
    where
        P: Predicate<str>,
    {
        match self {
            Validation::Success(value) if !predicate.check(value) => Validation::failure(error),
            other => other,
        }
    }
}
