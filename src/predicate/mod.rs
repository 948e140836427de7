//! Predicate combinators for composable validation logic
//!
//! Field rules are assembled from small predicates over `str` and fed into
//! [`Validation`](crate::Validation) through [`validate`] and `ensure`.
//!
//! # Example
//!
//! ```rust
//! use tashra::predicate::*;
//!
//! let usable_name = not_blank().and(trimmed_len_min(2));
//! assert!(usable_name.check("Asha"));
//! assert!(!usable_name.check("A"));
//! assert!(site_path().check("/privacy-policy"));
//! ```

mod combinators;
mod string;
mod validation;

// Re-export core trait
pub use combinators::{Predicate, PredicateExt};

// Re-export combinator types
pub use combinators::{And, Not, Or};

// Re-export string predicates
pub use string::{
    email_shape, is_form_whitespace, not_blank, phone_shape, site_path, trim_form,
    trimmed_len_min, EmailShape, NotBlank, PhoneShape, SitePath, TrimmedLenMin, PHONE_MIN_LEN,
};

// Re-export validation integration
pub use validation::validate;
