//! Test helpers for code that drives the contact form
//!
//! Assertion macros for [`ValidationResult`](crate::form::ValidationResult),
//! submitters that record or reject what they are given, and (with the
//! `proptest` feature) strategies for form input.
//!
//! # Examples
//!
//! ```rust
//! use tashra::form::{messages, validate_contact_form, ContactFormData, Field};
//! use tashra::{assert_field_error, assert_valid};
//!
//! let data = ContactFormData::new()
//!     .with(Field::Name, "Ravi Kumar")
//!     .with(Field::Organization, "PWD Division 3")
//!     .with(Field::Phone, "9876543210")
//!     .with(Field::Email, "ravi@pwd.gov.in")
//!     .with(Field::Requirements, "Aluminium gates for 40 schools");
//! assert_valid!(validate_contact_form(&data));
//!
//! let data = data.with(Field::Email, "ravi@pwd");
//! assert_field_error!(
//!     validate_contact_form(&data),
//!     Field::Email,
//!     messages::EMAIL_INVALID
//! );
//! ```

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use futures::future;

use crate::form::ContactFormData;
use crate::submit::{SubmitError, Submitter};

/// Assert that a form validated cleanly.
///
/// Panics with every field error when it did not.
#[macro_export]
macro_rules! assert_valid {
    ($result:expr) => {{
        let result = $result;
        if !result.is_valid() {
            panic!("Expected valid form, got errors: {:?}", result.errors());
        }
    }};
}

/// Assert that a form validation reported `message` for `field`.
///
/// ```rust
/// use tashra::form::{messages, validate_contact_form, ContactFormData, Field};
/// use tashra::assert_field_error;
///
/// assert_field_error!(
///     validate_contact_form(&ContactFormData::new()),
///     Field::Phone,
///     messages::PHONE_REQUIRED
/// );
/// ```
#[macro_export]
macro_rules! assert_field_error {
    ($result:expr, $field:expr, $message:expr) => {{
        let result = $result;
        let field = $field;
        match result.error(field) {
            Some(actual) => assert_eq!(actual, $message, "wrong message for {}", field),
            None => panic!(
                "Expected error on {}, got errors: {:?}",
                field,
                result.errors()
            ),
        }
    }};
}

/// A submitter that succeeds and keeps a copy of every inquiry.
///
/// Clones share the same log, so keep one clone for assertions and hand the
/// other to the form.
///
/// ```rust
/// use tashra::form::{ContactFormData, Field};
/// use tashra::submit::Submitter;
/// use tashra::testing::RecordingSubmitter;
///
/// let recorder = RecordingSubmitter::new();
/// let data = ContactFormData::new().with(Field::Name, "Asha");
/// # tokio_test::block_on(async {
/// recorder.clone().submit(&data).await.unwrap();
/// # });
/// assert_eq!(recorder.submissions(), vec![data]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingSubmitter {
    log: Arc<Mutex<Vec<ContactFormData>>>,
}

impl RecordingSubmitter {
    /// A recorder with an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything submitted so far, oldest first.
    pub fn submissions(&self) -> Vec<ContactFormData> {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of submissions so far.
    pub fn count(&self) -> usize {
        self.log.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl Submitter for RecordingSubmitter {
    fn submit(
        &self,
        data: &ContactFormData,
    ) -> impl Future<Output = Result<(), SubmitError>> + Send {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(data.clone());
        future::ready(Ok(()))
    }
}

/// A submitter that always fails with the same message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailingSubmitter {
    message: String,
}

impl FailingSubmitter {
    /// Fail with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        FailingSubmitter {
            message: message.into(),
        }
    }
}

impl Default for FailingSubmitter {
    fn default() -> Self {
        Self::new("relay unavailable")
    }
}

impl Submitter for FailingSubmitter {
    fn submit(
        &self,
        _data: &ContactFormData,
    ) -> impl Future<Output = Result<(), SubmitError>> + Send {
        future::ready(Err(SubmitError::new(self.message.clone())))
    }
}

#[cfg(feature = "proptest")]
pub use strategies::*;

#[cfg(feature = "proptest")]
mod strategies {
    use proptest::prelude::*;

    use crate::form::{ContactFormData, Field};

    impl Arbitrary for Field {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            proptest::sample::select(Field::ALL.to_vec()).boxed()
        }
    }

    /// Empty or whitespace-only input.
    pub fn blank_value() -> impl Strategy<Value = String> {
        "[ \t\n]{0,6}"
    }

    /// A value that passes the rules for `field`.
    ///
    /// Phone numbers may carry inner spaces and hyphens but always start and
    /// end on a digit, so trimming never shortens them.
    pub fn valid_value(field: Field) -> BoxedStrategy<String> {
        match field {
            Field::Name => "[A-Za-z]{2}[A-Za-z .]{0,30}".boxed(),
            Field::Organization => "[A-Za-z][A-Za-z0-9 &.-]{0,40}".boxed(),
            Field::Phone => "\\+?[0-9][0-9 -]{8,14}[0-9]".boxed(),
            Field::Email => "[a-z][a-z0-9._]{0,10}@[a-z]{1,10}\\.[a-z]{2,4}".boxed(),
            Field::Requirements => "[A-Za-z0-9]{10}[A-Za-z0-9 ,.]{0,80}".boxed(),
        }
    }

    /// A form on which every field passes.
    pub fn valid_contact_data() -> impl Strategy<Value = ContactFormData> {
        (
            valid_value(Field::Name),
            valid_value(Field::Organization),
            valid_value(Field::Phone),
            valid_value(Field::Email),
            valid_value(Field::Requirements),
        )
            .prop_map(|(name, organization, phone, email, requirements)| {
                ContactFormData {
                    name,
                    organization,
                    phone,
                    email,
                    requirements,
                }
            })
    }
}
