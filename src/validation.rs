//! Validation type for accumulating errors
//!
//! [`Validation`] looks like `Result`, but combining two failures keeps *both*
//! errors instead of stopping at the first. The contact-form aggregator and the
//! registry checks are built on it: every rule runs, every problem is reported.
//!
//! # Examples
//!
//! ```
//! use tashra::Validation;
//!
//! let name = Validation::<_, Vec<&str>>::success("Asha");
//! let email = Validation::<&str, _>::failure(vec!["Email is required"]);
//! let phone = Validation::<&str, _>::failure(vec!["Phone number is required"]);
//!
//! let result = Validation::all((name, email, phone));
//! assert_eq!(
//!     result,
//!     Validation::Failure(vec!["Email is required", "Phone number is required"])
//! );
//! ```

use crate::Semigroup;

/// A validation that either succeeds with a value or fails with accumulated errors
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The error accumulator (must implement `Semigroup` to combine)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Create a validation from a Result
    ///
    /// # Examples
    ///
    /// ```
    /// use tashra::Validation;
    ///
    /// let v = Validation::from_result(Err::<i32, _>("Email is required"));
    /// assert_eq!(v, Validation::Failure("Email is required"));
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::Failure(error),
        }
    }

    /// Convert this validation to a Result
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Transform the success value if present
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the error value if present
    ///
    /// Used to lift a single field message into a keyed error map.
    ///
    /// # Examples
    ///
    /// ```
    /// use tashra::Validation;
    ///
    /// let v = Validation::<&str, _>::failure("Name is required");
    /// let keyed = v.map_err(|msg| vec![("name", msg)]);
    /// assert_eq!(keyed, Validation::Failure(vec![("name", "Name is required")]));
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine all validations in a tuple, accumulating every failure.
    ///
    /// Delegates to [`ValidateAll`]; implemented for tuples of one to five
    /// validations, which covers the five contact-form fields.
    pub fn all<V>(validations: V) -> Self
    where
        V: ValidateAll<E, Output = T>,
    {
        validations.validate_all()
    }

    /// Combine two validations, accumulating errors using the Semigroup instance
    ///
    /// # Examples
    ///
    /// ```
    /// use tashra::Validation;
    ///
    /// let v1 = Validation::<i32, _>::failure(vec!["Name is required"]);
    /// let v2 = Validation::<i32, _>::failure(vec!["Email is required"]);
    /// assert_eq!(
    ///     v1.and(v2),
    ///     Validation::Failure(vec!["Name is required", "Email is required"])
    /// );
    /// ```
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) => Validation::Failure(e),
            (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }

    /// Chain a dependent validation
    ///
    /// The function only runs when `self` succeeded, so it can rely on the
    /// earlier rule (for example "not blank" before "at least 2 characters").
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Validation::Success(value) => f(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Combine all validations in a Vec
    ///
    /// Returns every success value when nothing failed, otherwise the
    /// combination of every failure in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tashra::Validation;
    ///
    /// let checks = vec![
    ///     Validation::<(), _>::failure(vec!["duplicate href /about"]),
    ///     Validation::success(()),
    ///     Validation::failure(vec!["empty label"]),
    /// ];
    /// assert_eq!(
    ///     Validation::all_vec(checks),
    ///     Validation::Failure(vec!["duplicate href /about", "empty label"])
    /// );
    /// ```
    pub fn all_vec(validations: Vec<Validation<T, E>>) -> Validation<Vec<T>, E> {
        let mut successes = Vec::new();
        let mut failure: Option<E> = None;

        for validation in validations {
            match validation {
                Validation::Success(value) => successes.push(value),
                Validation::Failure(error) => {
                    failure = Some(match failure {
                        Some(acc) => acc.combine(error),
                        None => error,
                    });
                }
            }
        }

        match failure {
            None => Validation::Success(successes),
            Some(error) => Validation::Failure(error),
        }
    }
}

/// Trait for combining multiple validations in a tuple
///
/// Lets [`Validation::all`] accept heterogeneous success types.
pub trait ValidateAll<E: Semigroup> {
    /// The output type when all validations succeed
    type Output;

    /// Combine all validations, accumulating errors
    fn validate_all(self) -> Validation<Self::Output, E>;
}

impl<E: Semigroup, T1> ValidateAll<E> for (Validation<T1, E>,) {
    type Output = (T1,);

    fn validate_all(self) -> Validation<Self::Output, E> {
        self.0.map(|v| (v,))
    }
}

impl<E: Semigroup, T1, T2> ValidateAll<E> for (Validation<T1, E>, Validation<T2, E>) {
    type Output = (T1, T2);

    fn validate_all(self) -> Validation<Self::Output, E> {
        let (a, b) = self;
        a.and(b)
    }
}

impl<E: Semigroup, T1, T2, T3> ValidateAll<E>
    for (Validation<T1, E>, Validation<T2, E>, Validation<T3, E>)
{
    type Output = (T1, T2, T3);

    fn validate_all(self) -> Validation<Self::Output, E> {
        let (a, b, c) = self;
        a.and(b).and(c).map(|((a, b), c)| (a, b, c))
    }
}

impl<E: Semigroup, T1, T2, T3, T4> ValidateAll<E>
    for (
        Validation<T1, E>,
        Validation<T2, E>,
        Validation<T3, E>,
        Validation<T4, E>,
    )
{
    type Output = (T1, T2, T3, T4);

    fn validate_all(self) -> Validation<Self::Output, E> {
        let (a, b, c, d) = self;
        a.and(b)
            .and(c)
            .and(d)
            .map(|(((a, b), c), d)| (a, b, c, d))
    }
}

impl<E: Semigroup, T1, T2, T3, T4, T5> ValidateAll<E>
    for (
        Validation<T1, E>,
        Validation<T2, E>,
        Validation<T3, E>,
        Validation<T4, E>,
        Validation<T5, E>,
    )
{
    type Output = (T1, T2, T3, T4, T5);

    fn validate_all(self) -> Validation<Self::Output, E> {
        let (a, b, c, d, e) = self;
        a.and(b)
            .and(c)
            .and(d)
            .and(e)
            .map(|((((a, b), c), d), e)| (a, b, c, d, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_and_failure_flags() {
        let ok = Validation::<_, Vec<&str>>::success(1);
        let bad = Validation::<i32, _>::failure(vec!["bad"]);
        assert!(ok.is_success() && !ok.is_failure());
        assert!(bad.is_failure() && !bad.is_success());
    }

    #[test]
    fn test_result_round_trip() {
        assert_eq!(Validation::<_, &str>::success(3).into_result(), Ok(3));
        assert_eq!(
            Validation::from_result(Err::<i32, _>("Email is required")).into_result(),
            Err("Email is required")
        );
    }

    #[test]
    fn test_and_accumulates_both_failures() {
        let v1 = Validation::<i32, _>::failure(vec!["Name is required"]);
        let v2 = Validation::<i32, _>::failure(vec!["Email is required"]);
        assert_eq!(
            v1.and(v2),
            Validation::Failure(vec!["Name is required", "Email is required"])
        );
    }

    #[test]
    fn test_and_single_failure_passes_through() {
        let v1 = Validation::<_, Vec<&str>>::success(1);
        let v2 = Validation::<i32, _>::failure(vec!["bad"]);
        assert_eq!(v1.and(v2), Validation::Failure(vec!["bad"]));
    }

    #[test]
    fn test_and_then_skips_on_failure() {
        let v = Validation::<i32, _>::failure(vec!["first"]);
        let chained: Validation<i32, Vec<&str>> =
            v.and_then(|_| Validation::failure(vec!["second"]));
        assert_eq!(chained, Validation::Failure(vec!["first"]));
    }

    #[test]
    fn test_all_five_successes() {
        let result = Validation::<_, Vec<&str>>::all((
            Validation::success(1),
            Validation::success("b"),
            Validation::success(3u8),
            Validation::success('d'),
            Validation::success(5i64),
        ));
        assert_eq!(result, Validation::Success((1, "b", 3u8, 'd', 5i64)));
    }

    #[test]
    fn test_all_five_keeps_every_failure_in_order() {
        let result = Validation::<_, Vec<&str>>::all((
            Validation::<(), _>::failure(vec!["name"]),
            Validation::<(), _>::success(()),
            Validation::<(), _>::failure(vec!["phone"]),
            Validation::<(), _>::failure(vec!["email"]),
            Validation::<(), _>::failure(vec!["requirements"]),
        ));
        assert_eq!(
            result,
            Validation::Failure(vec!["name", "phone", "email", "requirements"])
        );
    }

    #[test]
    fn test_all_vec_empty_is_success() {
        let checks: Vec<Validation<(), Vec<&str>>> = vec![];
        assert_eq!(Validation::all_vec(checks), Validation::Success(vec![]));
    }

    #[test]
    fn test_all_vec_collects_successes() {
        let checks = vec![
            Validation::<_, Vec<&str>>::success(1),
            Validation::success(2),
        ];
        assert_eq!(Validation::all_vec(checks), Validation::Success(vec![1, 2]));
    }
}
