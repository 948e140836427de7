//! String predicates
//!
//! The shape rules behind the contact form and the site's URL paths. Every
//! predicate that talks about "length" counts UTF-16 code units of the
//! *trimmed* input, the unit browsers report for string length, so
//! surrounding whitespace never helps a value pass.
//!
//! Trimming and the whitespace checks use the browser's whitespace set: the
//! Unicode `White_Space` characters plus U+FEFF, minus U+0085.

use super::combinators::Predicate;

/// Whitespace as browsers trim it.
#[inline]
pub fn is_form_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Trim [form whitespace](is_form_whitespace) from both ends.
///
/// # Example
///
/// ```rust
/// use tashra::predicate::trim_form;
///
/// assert_eq!(trim_form("\u{feff} Asha \n"), "Asha");
/// assert_eq!(trim_form("\u{85}"), "\u{85}");
/// ```
#[inline]
pub fn trim_form(value: &str) -> &str {
    value.trim_matches(is_form_whitespace)
}

/// Predicate that checks a string has at least one non-whitespace character.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotBlank;

impl Predicate<str> for NotBlank {
    #[inline]
    fn check(&self, value: &str) -> bool {
        !trim_form(value).is_empty()
    }
}

/// Create a predicate that rejects empty and all-whitespace strings.
///
/// # Example
///
/// ```rust
/// use tashra::predicate::*;
///
/// assert!(not_blank().check("Asha"));
/// assert!(!not_blank().check(""));
/// assert!(!not_blank().check(" \t\r\n"));
/// ```
pub fn not_blank() -> NotBlank {
    NotBlank
}

/// Predicate that checks the trimmed string is at least `min` UTF-16 code
/// units long.
#[derive(Clone, Copy, Debug)]
pub struct TrimmedLenMin {
    min: usize,
}

impl Predicate<str> for TrimmedLenMin {
    #[inline]
    fn check(&self, value: &str) -> bool {
        trim_form(value).encode_utf16().count() >= self.min
    }
}

/// Create a predicate that checks the trimmed UTF-16 length is at least `min`.
///
/// A character outside the Basic Multilingual Plane counts as two.
///
/// # Example
///
/// ```rust
/// use tashra::predicate::*;
///
/// assert!(trimmed_len_min(2).check("Al"));
/// assert!(!trimmed_len_min(2).check("  A  "));
/// assert!(trimmed_len_min(2).check("😀"));
/// ```
pub fn trimmed_len_min(min: usize) -> TrimmedLenMin {
    TrimmedLenMin { min }
}

/// Minimum characters a phone number carries after the optional `+`.
pub const PHONE_MIN_LEN: usize = 10;

/// Predicate for the phone shape: an optional leading `+`, then at least
/// [`PHONE_MIN_LEN`] characters drawn from ASCII digits, form whitespace and `-`.
///
/// Separators count toward the minimum, so `"----------"` passes.
#[derive(Clone, Copy, Default, Debug)]
pub struct PhoneShape;

impl Predicate<str> for PhoneShape {
    fn check(&self, value: &str) -> bool {
        let trimmed = trim_form(value);
        let body = trimmed.strip_prefix('+').unwrap_or(trimmed);

        let mut len = 0usize;
        for c in body.chars() {
            if !(c.is_ascii_digit() || is_form_whitespace(c) || c == '-') {
                return false;
            }
            len += 1;
        }
        len >= PHONE_MIN_LEN
    }
}

/// Create the phone shape predicate.
///
/// # Example
///
/// ```rust
/// use tashra::predicate::*;
///
/// assert!(phone_shape().check("+91 98765 43210"));
/// assert!(phone_shape().check("011-2345-6789"));
/// assert!(!phone_shape().check("12345"));
/// assert!(!phone_shape().check("98765x43210"));
/// ```
pub fn phone_shape() -> PhoneShape {
    PhoneShape
}

/// Predicate for the email shape `local@domain.tld`.
///
/// Local part and domain are non-empty and contain no whitespace or `@`; the
/// domain holds a `.` with at least one character on each side of it. Nothing
/// else (TLD length, quoted local parts) is checked.
#[derive(Clone, Copy, Default, Debug)]
pub struct EmailShape;

impl Predicate<str> for EmailShape {
    fn check(&self, value: &str) -> bool {
        let trimmed = trim_form(value);
        if trimmed.chars().any(is_form_whitespace) {
            return false;
        }

        let Some((local, domain)) = trimmed.split_once('@') else {
            return false;
        };
        if local.is_empty() || domain.contains('@') {
            return false;
        }

        // A dot that is neither the first nor the last character of the domain.
        domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
    }
}

/// Create the email shape predicate.
///
/// # Example
///
/// ```rust
/// use tashra::predicate::*;
///
/// assert!(email_shape().check("a@b.co"));
/// assert!(email_shape().check("procurement@district.gov.in"));
/// assert!(!email_shape().check("not-an-email"));
/// assert!(!email_shape().check("a@b"));
/// assert!(!email_shape().check("a b@c.de"));
/// ```
pub fn email_shape() -> EmailShape {
    EmailShape
}

/// Predicate for site paths: `/` followed by zero or more of `a-z`, `0-9`, `-`.
///
/// Rejects uppercase, trailing slashes beyond the root, query strings and
/// fragments.
#[derive(Clone, Copy, Default, Debug)]
pub struct SitePath;

impl Predicate<str> for SitePath {
    #[inline]
    fn check(&self, value: &str) -> bool {
        match value.strip_prefix('/') {
            Some(rest) => rest
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            None => false,
        }
    }
}

/// Create the site path predicate.
///
/// # Example
///
/// ```rust
/// use tashra::predicate::*;
///
/// assert!(site_path().check("/"));
/// assert!(site_path().check("/privacy-policy"));
/// assert!(!site_path().check("/About"));
/// assert!(!site_path().check("/about/"));
/// assert!(!site_path().check("about"));
/// ```
pub fn site_path() -> SitePath {
    SitePath
}
