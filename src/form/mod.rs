//! Contact form: field rules, form-level validation and the form state machine
//!
//! ```
//! use tashra::form::{validate_contact_form, ContactFormData, Field};
//!
//! let data = ContactFormData::new()
//!     .with(Field::Name, "Asha Verma")
//!     .with(Field::Organization, "District Education Office")
//!     .with(Field::Phone, "+91 98765 43210")
//!     .with(Field::Email, "deo@district.gov.in")
//!     .with(Field::Requirements, "2,000 baby kit books by March");
//!
//! assert!(validate_contact_form(&data).is_valid());
//! ```

mod data;
mod field;
mod result;
mod state;
mod validators;

pub use data::ContactFormData;
pub use field::{Field, InputKind, UnknownField};
pub use result::{validate_contact_form, FieldErrors, ValidationResult};
pub use state::{
    ContactFormState, FormEvent, SubmissionStatus, ERROR_BANNER, SUBMITTING_LABEL, SUBMIT_LABEL,
    SUCCESS_BANNER,
};
pub use validators::{
    messages, validate_email, validate_field, validate_name, validate_organization,
    validate_phone, validate_requirements, NAME_MIN_LEN, REQUIREMENTS_MIN_LEN,
};
