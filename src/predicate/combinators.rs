//! Core predicate trait and logical combinators

/// A composable predicate over values of type T.
///
/// # Example
///
/// ```rust
/// use tashra::predicate::*;
///
/// let usable = not_blank().and(trimmed_len_min(2));
/// assert!(usable.check("Asha"));
/// assert!(!usable.check(" A "));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// True only when both predicates are true.
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// True when either predicate is true.
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tashra::predicate::*;
    ///
    /// let blank = not_blank().not();
    /// assert!(blank.check(" \t\n"));
    /// assert!(!blank.check("TASHRA"));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator - at least one predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{not_blank, site_path, trimmed_len_min};

    #[test]
    fn test_closure_is_predicate() {
        let starts_with_slash = |s: &str| s.starts_with('/');
        assert!(Predicate::<str>::check(&starts_with_slash, "/about"));
        assert!(!Predicate::<str>::check(&starts_with_slash, "about"));
    }

    #[test]
    fn test_and() {
        let p = site_path().and(trimmed_len_min(3));
        assert!(p.check("/ab"));
        assert!(!p.check("/a"));
        assert!(!p.check("ab"));
    }

    #[test]
    fn test_or() {
        let p = site_path().or(trimmed_len_min(3));
        assert!(p.check("/"));
        assert!(p.check("about"));
        assert!(!p.check("ab"));
    }

    #[test]
    fn test_not() {
        let p = not_blank().not();
        assert!(p.check("   "));
        assert!(!p.check("x"));
    }
}
