//! Field validators
//!
//! One pure function per field. Each returns `None` for a valid value or the
//! single message to show next to the field. Rules run in order and the first
//! failing rule wins: a blank value is always reported as "required", never as
//! "too short".
//!
//! # Example
//!
//! ```
//! use tashra::form::{validate_email, validate_name, validate_requirements};
//!
//! assert_eq!(validate_email("not-an-email"), Some("Please enter a valid email address"));
//! assert_eq!(validate_email("a@b.co"), None);
//! assert_eq!(validate_name("A"), Some("Name must be at least 2 characters"));
//! assert_eq!(
//!     validate_requirements("short"),
//!     Some("Requirements must be at least 10 characters")
//! );
//! ```

use super::Field;
use crate::predicate::{email_shape, not_blank, phone_shape, trimmed_len_min, validate};
use crate::Validation;

/// Messages shown by the field validators.
pub mod messages {
    /// Blank name.
    pub const NAME_REQUIRED: &str = "Name is required";
    /// Name shorter than [`NAME_MIN_LEN`](super::NAME_MIN_LEN).
    pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
    /// Blank organization.
    pub const ORGANIZATION_REQUIRED: &str = "Organization name is required";
    /// Blank phone.
    pub const PHONE_REQUIRED: &str = "Phone number is required";
    /// Phone not matching the phone shape.
    pub const PHONE_INVALID: &str = "Please enter a valid phone number";
    /// Blank email.
    pub const EMAIL_REQUIRED: &str = "Email is required";
    /// Email not matching the email shape.
    pub const EMAIL_INVALID: &str = "Please enter a valid email address";
    /// Blank requirements.
    pub const REQUIREMENTS_REQUIRED: &str = "Please describe your tender requirements";
    /// Requirements shorter than [`REQUIREMENTS_MIN_LEN`](super::REQUIREMENTS_MIN_LEN).
    pub const REQUIREMENTS_TOO_SHORT: &str = "Requirements must be at least 10 characters";
}

use messages::*;

/// Minimum trimmed length of a name, in UTF-16 code units.
pub const NAME_MIN_LEN: usize = 2;

/// Minimum trimmed length of the requirements text, in UTF-16 code units.
pub const REQUIREMENTS_MIN_LEN: usize = 10;

/// The outcome of one field's rules, before it is keyed by field.
pub(crate) type FieldCheck<'a> = Validation<&'a str, &'static str>;

pub(crate) fn check_name(name: &str) -> FieldCheck<'_> {
    validate(name, not_blank(), NAME_REQUIRED).ensure(trimmed_len_min(NAME_MIN_LEN), NAME_TOO_SHORT)
}

pub(crate) fn check_organization(organization: &str) -> FieldCheck<'_> {
    validate(organization, not_blank(), ORGANIZATION_REQUIRED)
}

pub(crate) fn check_phone(phone: &str) -> FieldCheck<'_> {
    validate(phone, not_blank(), PHONE_REQUIRED).ensure(phone_shape(), PHONE_INVALID)
}

pub(crate) fn check_email(email: &str) -> FieldCheck<'_> {
    validate(email, not_blank(), EMAIL_REQUIRED).ensure(email_shape(), EMAIL_INVALID)
}

pub(crate) fn check_requirements(requirements: &str) -> FieldCheck<'_> {
    validate(requirements, not_blank(), REQUIREMENTS_REQUIRED)
        .ensure(trimmed_len_min(REQUIREMENTS_MIN_LEN), REQUIREMENTS_TOO_SHORT)
}

fn message(check: FieldCheck<'_>) -> Option<&'static str> {
    check.into_result().err()
}

/// Validate the contact name.
pub fn validate_name(name: &str) -> Option<&'static str> {
    message(check_name(name))
}

/// Validate the organization name.
pub fn validate_organization(organization: &str) -> Option<&'static str> {
    message(check_organization(organization))
}

/// Validate the phone number.
///
/// An optional leading `+` followed by at least ten digits, spaces or hyphens.
/// Separators count toward the ten.
pub fn validate_phone(phone: &str) -> Option<&'static str> {
    message(check_phone(phone))
}

/// Validate the email address (`local@domain.tld`, permissive).
pub fn validate_email(email: &str) -> Option<&'static str> {
    message(check_email(email))
}

/// Validate the requirements text.
pub fn validate_requirements(requirements: &str) -> Option<&'static str> {
    message(check_requirements(requirements))
}

/// Dispatch to the validator for `field`.
pub fn validate_field(field: Field, value: &str) -> Option<&'static str> {
    match field {
        Field::Name => validate_name(value),
        Field::Organization => validate_organization(value),
        Field::Phone => validate_phone(value),
        Field::Email => validate_email(value),
        Field::Requirements => validate_requirements(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rules() {
        assert_eq!(validate_name(""), Some(NAME_REQUIRED));
        assert_eq!(validate_name("   "), Some(NAME_REQUIRED));
        assert_eq!(validate_name("A"), Some(NAME_TOO_SHORT));
        assert_eq!(validate_name(" A "), Some(NAME_TOO_SHORT));
        assert_eq!(validate_name("Al"), None);
    }

    #[test]
    fn test_organization_has_no_shape_rule() {
        assert_eq!(validate_organization("\t\n"), Some(ORGANIZATION_REQUIRED));
        assert_eq!(validate_organization("X"), None);
    }

    #[test]
    fn test_phone_rules() {
        assert_eq!(validate_phone(""), Some(PHONE_REQUIRED));
        assert_eq!(validate_phone("12345"), Some(PHONE_INVALID));
        assert_eq!(validate_phone("phone me"), Some(PHONE_INVALID));
        assert_eq!(validate_phone("+91 98765 43210"), None);
        assert_eq!(validate_phone("9876543210"), None);
    }

    #[test]
    fn test_phone_accepts_only_separators() {
        assert_eq!(validate_phone("----------"), None);
    }

    #[test]
    fn test_email_rules() {
        assert_eq!(validate_email(" "), Some(EMAIL_REQUIRED));
        assert_eq!(validate_email("not-an-email"), Some(EMAIL_INVALID));
        assert_eq!(validate_email("a@b"), Some(EMAIL_INVALID));
        assert_eq!(validate_email("a@b.co"), None);
    }

    #[test]
    fn test_requirements_rules() {
        assert_eq!(validate_requirements("\n\n"), Some(REQUIREMENTS_REQUIRED));
        assert_eq!(validate_requirements("short"), Some(REQUIREMENTS_TOO_SHORT));
        assert_eq!(validate_requirements("  123456789  "), Some(REQUIREMENTS_TOO_SHORT));
        assert_eq!(validate_requirements("1234567890"), None);
    }

    #[test]
    fn test_astral_characters_count_twice() {
        assert_eq!(validate_name("😀"), None);
        assert_eq!(validate_requirements("😀😀😀😀😀"), None);
        assert_eq!(validate_requirements("😀😀😀😀"), Some(REQUIREMENTS_TOO_SHORT));
    }

    #[test]
    fn test_byte_order_mark_alone_is_required() {
        assert_eq!(validate_name("\u{feff}"), Some(NAME_REQUIRED));
        assert_eq!(validate_email("\u{feff}"), Some(EMAIL_REQUIRED));
        assert_eq!(validate_name("\u{85}"), Some(NAME_TOO_SHORT));
    }

    #[test]
    fn test_validate_field_dispatches() {
        assert_eq!(validate_field(Field::Email, "x"), Some(EMAIL_INVALID));
        assert_eq!(validate_field(Field::Organization, "PWD"), None);
    }

    #[test]
    fn test_empty_messages_mention_required_or_describe() {
        for field in Field::ALL {
            let msg = validate_field(field, "").unwrap();
            if field == Field::Requirements {
                assert!(msg.contains("describe"), "{msg}");
            } else {
                assert!(msg.contains("required"), "{msg}");
            }
        }
    }
}
