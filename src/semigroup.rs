//! Semigroup trait for accumulating errors
//!
//! Every validation in this crate reports *all* of its problems at once: five bad
//! contact fields produce five messages, three malformed navigation links produce
//! three violations. The [`Semigroup`] trait is the glue that makes that possible,
//! it tells [`Validation`](crate::Validation) how two error values merge.
//!
//! # Laws
//!
//! `combine` must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use tashra::Semigroup;
//!
//! let violations = vec!["duplicate href /about"];
//! let more = vec!["href /Products is not lowercase"];
//! assert_eq!(
//!     violations.combine(more),
//!     vec!["duplicate href /about", "href /Products is not lowercase"]
//! );
//! ```

/// A type whose values can be merged associatively.
///
/// `combine` takes `self` by value; clone first if the original is still needed.
pub trait Semigroup: Sized {
    /// Merge `other` into `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tashra::Semigroup;
    ///
    /// let joined = "Name is required. ".to_string().combine("Email is required.".to_string());
    /// assert_eq!(joined, "Name is required. Email is required.");
    /// ```
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_combine_preserves_order() {
        let a = vec!["first"];
        let b = vec!["second", "third"];
        assert_eq!(a.combine(b), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_vec_combine_with_empty() {
        let a: Vec<&str> = vec![];
        assert_eq!(a.combine(vec!["only"]), vec!["only"]);
    }

    #[test]
    fn test_string_combine() {
        let s = "Tashu ".to_string().combine("Traders".to_string());
        assert_eq!(s, "Tashu Traders");
    }

    #[test]
    fn test_vec_associativity() {
        let a = vec![1];
        let b = vec![2];
        let c = vec![3];
        assert_eq!(
            a.clone().combine(b.clone()).combine(c.clone()),
            a.combine(b.combine(c))
        );
    }
}
