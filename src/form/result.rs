//! Form aggregator
//!
//! Runs every field validator and keys the messages by field. All five
//! validators always run, so a form with three bad fields reports three
//! messages.

use std::collections::btree_map::{self, BTreeMap};

use super::validators::{
    check_email, check_name, check_organization, check_phone, check_requirements, FieldCheck,
};
use super::{ContactFormData, Field};
use crate::{Semigroup, Validation};

/// Field → message map, ordered by [`Field`] render order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    /// No errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// A map holding exactly one error.
    pub fn single(field: Field, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(field, message);
        errors
    }

    /// Set the message for `field`, replacing any previous one.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Clear one field's error, returning it if there was one.
    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    /// The message for `field`, if it has one.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Whether `field` currently has an error.
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Number of fields with an error.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no field has an error.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fields with an error, in render order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    /// `(field, message)` pairs in render order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

// A field keeps its first message; the five validators never overlap anyway.
impl Semigroup for FieldErrors {
    fn combine(mut self, other: Self) -> Self {
        for (field, message) in other.0 {
            self.0.entry(field).or_insert(message);
        }
        self
    }
}

impl FromIterator<(Field, String)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (Field, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for FieldErrors {
    type Item = (Field, String);
    type IntoIter = btree_map::IntoIter<Field, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Outcome of validating a whole form.
///
/// `is_valid()` is derived from the error map, so the two can never disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: FieldErrors,
}

impl ValidationResult {
    /// True when no field has an error.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The per-field messages.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Take the per-field messages.
    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }

    /// The message for one field.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }
}

impl From<FieldErrors> for ValidationResult {
    fn from(errors: FieldErrors) -> Self {
        Self { errors }
    }
}

fn keyed(field: Field, check: FieldCheck<'_>) -> Validation<(), FieldErrors> {
    check
        .map(|_| ())
        .map_err(|message| FieldErrors::single(field, message))
}

/// Validate every field of `data`.
///
/// # Example
///
/// ```
/// use tashra::form::{validate_contact_form, ContactFormData, Field};
///
/// let data = ContactFormData::new()
///     .with(Field::Name, "A")
///     .with(Field::Organization, "District Education Office")
///     .with(Field::Phone, "+91 98765 43210")
///     .with(Field::Email, "deo@district.gov.in");
///
/// let result = validate_contact_form(&data);
/// assert!(!result.is_valid());
/// assert_eq!(result.errors().len(), 2);
/// assert_eq!(result.error(Field::Name), Some("Name must be at least 2 characters"));
/// assert_eq!(result.error(Field::Requirements), Some("Please describe your tender requirements"));
/// ```
pub fn validate_contact_form(data: &ContactFormData) -> ValidationResult {
    let outcome = Validation::all((
        keyed(Field::Name, check_name(&data.name)),
        keyed(Field::Organization, check_organization(&data.organization)),
        keyed(Field::Phone, check_phone(&data.phone)),
        keyed(Field::Email, check_email(&data.email)),
        keyed(Field::Requirements, check_requirements(&data.requirements)),
    ));

    match outcome {
        Validation::Success(_) => ValidationResult::default(),
        Validation::Failure(errors) => ValidationResult::from(errors),
    }
}
