//! # tashra
//!
//! The core of the TASHRA (Tashu Traders) tender-supply website: contact
//! inquiry validation and submission, plus the static navigation and SEO
//! metadata registries the pages render from.
//!
//! Everything here is pure except the submit step, which goes through the
//! [`Submitter`](submit::Submitter) capability the caller provides.
//!
//! ## Quick Example
//!
//! ```rust
//! use tashra::form::{messages, validate_contact_form, ContactFormData, Field};
//!
//! let data = ContactFormData::new()
//!     .with(Field::Name, "A")
//!     .with(Field::Phone, "12345")
//!     .with(Field::Email, "buyer@gem.gov.in");
//!
//! // Every field is checked; all errors come back at once.
//! let result = validate_contact_form(&data);
//! assert!(!result.is_valid());
//! assert_eq!(result.error(Field::Name), Some(messages::NAME_TOO_SHORT));
//! assert_eq!(result.error(Field::Organization), Some(messages::ORGANIZATION_REQUIRED));
//! assert_eq!(result.error(Field::Phone), Some(messages::PHONE_INVALID));
//! assert_eq!(result.error(Field::Email), None);
//! assert_eq!(result.errors().len(), 4);
//! ```
//!
//! Driving a submission:
//!
//! ```rust
//! use tashra::form::{ContactFormData, Field, SubmissionStatus};
//! use tashra::submit::ContactForm;
//!
//! # tokio_test::block_on(async {
//! let mut form = ContactForm::new();
//! form.change_field(Field::Name, "Asha Verma");
//! form.change_field(Field::Organization, "District Education Office");
//! form.change_field(Field::Phone, "+91 98765 43210");
//! form.change_field(Field::Email, "deo@district.gov.in");
//! form.change_field(Field::Requirements, "2,000 baby kit books by March");
//!
//! assert!(form.submit().await.is_submitted());
//! assert_eq!(form.status(), SubmissionStatus::Success);
//! assert_eq!(form.state().data(), &ContactFormData::default());
//! # });
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod form;
pub mod predicate;
pub mod registry;
pub mod semigroup;
pub mod site;
pub mod submit;
pub mod testing;
pub mod validation;

// Re-exports
pub use semigroup::Semigroup;
pub use validation::Validation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::form::{
        validate_contact_form, ContactFormData, ContactFormState, Field, FieldErrors, FormEvent,
        SubmissionStatus, ValidationResult,
    };
    pub use crate::predicate::{Predicate, PredicateExt};
    pub use crate::registry::{MetadataRegistry, Navigation, PageKey, SiteConfig};
    pub use crate::semigroup::Semigroup;
    pub use crate::submit::{ContactForm, SubmitError, SubmitOutcome, Submitter};
    pub use crate::validation::Validation;
}
