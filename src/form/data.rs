//! Raw form input.

use super::Field;

/// What the user typed, exactly as typed.
///
/// Values are never trimmed here; trimming happens only inside the validators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContactFormData {
    /// Contact person
    pub name: String,
    /// Department or organization
    pub organization: String,
    /// Phone number, any separators
    pub phone: String,
    /// Email address
    pub email: String,
    /// Tender requirement details
    pub requirements: String,
}

impl ContactFormData {
    /// An empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read one field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Organization => &self.organization,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Requirements => &self.requirements,
        }
    }

    /// Mutable access to one field.
    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Organization => &mut self.organization,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::Requirements => &mut self.requirements,
        }
    }

    /// Replace one field's value.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// Builder-style [`set`](Self::set).
    ///
    /// # Example
    ///
    /// ```
    /// use tashra::form::{ContactFormData, Field};
    ///
    /// let data = ContactFormData::new()
    ///     .with(Field::Name, "Asha Verma")
    ///     .with(Field::Email, "asha@district.gov.in");
    /// assert_eq!(data.get(Field::Name), "Asha Verma");
    /// assert_eq!(data.get(Field::Phone), "");
    /// ```
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// True when every field is the empty string.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|&field| self.get(field).is_empty())
    }
}
