//! Contact form state machine
//!
//! [`ContactFormState`] holds everything a UI needs to draw the form, and
//! [`ContactFormState::apply`] is the only way it changes. The reducer is pure:
//! it never calls the submit effect itself. The
//! [`ContactForm`](crate::submit::ContactForm) coordinator feeds it events
//! around the effect.
//!
//! ```text
//!            SubmitRequested (invalid)
//!          ┌──────────────────────────┐
//!          ▼                          │
//!   ┌─────────────┐  SubmitRequested  ┌┴────────────┐
//!   │    idle     │ ────(valid)─────► │ submitting  │
//!   └─────────────┘                   └─────────────┘
//!          ▲   SubmissionSucceeded → Success, fields reset │
//!          └── SubmissionFailed    → Error, fields kept ◄──┘
//! ```

use super::{validate_contact_form, ContactFormData, Field, FieldErrors};

/// Banner shown after a successful submission.
pub const SUCCESS_BANNER: &str = "Thank you for your inquiry! We will get back to you soon.";
/// Banner shown after a failed submission.
pub const ERROR_BANNER: &str = "Something went wrong. Please try again later.";
/// Submit button caption at rest.
pub const SUBMIT_LABEL: &str = "Submit Tender Inquiry";
/// Submit button caption while the effect runs.
pub const SUBMITTING_LABEL: &str = "Submitting...";

/// Outcome of the most recent submit attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SubmissionStatus {
    /// No banner.
    #[default]
    Idle,
    /// The submit effect completed.
    Success,
    /// The submit effect failed.
    Error,
}

/// Inputs to the form reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The user edited a field.
    FieldChanged {
        /// Edited field
        field: Field,
        /// New raw value
        value: String,
    },
    /// The user pressed submit.
    SubmitRequested,
    /// The submit effect resolved.
    SubmissionSucceeded,
    /// The submit effect failed.
    SubmissionFailed,
}

/// Everything the form displays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    data: ContactFormData,
    errors: FieldErrors,
    is_submitting: bool,
    status: SubmissionStatus,
}

impl ContactFormState {
    /// An empty, idle form.
    pub fn new() -> Self {
        Self::default()
    }

    /// An idle form pre-filled with `data`.
    pub fn with_data(data: ContactFormData) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    /// Current field values.
    pub fn data(&self) -> &ContactFormData {
        &self.data
    }

    /// Errors currently shown next to fields.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Error shown next to `field`.
    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    /// True while the submit effect is in flight.
    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Status of the last attempt.
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Whether the submit control is enabled.
    ///
    /// Disabled while submitting and while any inline error is shown.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting && self.errors.is_empty()
    }

    /// Caption for the submit control.
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Form-level banner for the current status, if any.
    pub fn status_banner(&self) -> Option<&'static str> {
        match self.status {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Success => Some(SUCCESS_BANNER),
            SubmissionStatus::Error => Some(ERROR_BANNER),
        }
    }

    /// Apply one event.
    ///
    /// * `FieldChanged` stores the raw value and clears only that field's error.
    /// * `SubmitRequested` resets the status, validates, and either shows the
    ///   errors or enters the submitting state. Ignored while already
    ///   submitting.
    /// * `SubmissionSucceeded` / `SubmissionFailed` leave the submitting state;
    ///   success also empties the fields. Ignored when nothing is in flight.
    ///
    /// # Example
    ///
    /// ```
    /// use tashra::form::{ContactFormState, Field, FormEvent, SubmissionStatus};
    ///
    /// let state = ContactFormState::new().apply(FormEvent::SubmitRequested);
    /// assert_eq!(state.errors().len(), 5);
    /// assert!(!state.is_submitting());
    ///
    /// let state = state.apply(FormEvent::FieldChanged {
    ///     field: Field::Name,
    ///     value: "Asha".to_string(),
    /// });
    /// assert_eq!(state.error_for(Field::Name), None);
    /// assert_eq!(state.errors().len(), 4);
    /// assert_eq!(state.status(), SubmissionStatus::Idle);
    /// ```
    pub fn apply(mut self, event: FormEvent) -> Self {
        match event {
            FormEvent::FieldChanged { field, value } => {
                self.data.set(field, value);
                self.errors.remove(field);
            }
            FormEvent::SubmitRequested => {
                if self.is_submitting {
                    return self;
                }
                self.status = SubmissionStatus::Idle;

                let result = validate_contact_form(&self.data);
                if result.is_valid() {
                    self.errors = FieldErrors::new();
                    self.is_submitting = true;
                } else {
                    self.errors = result.into_errors();
                }
            }
            FormEvent::SubmissionSucceeded => {
                if self.is_submitting {
                    self.is_submitting = false;
                    self.status = SubmissionStatus::Success;
                    self.data = ContactFormData::new();
                }
            }
            FormEvent::SubmissionFailed => {
                if self.is_submitting {
                    self.is_submitting = false;
                    self.status = SubmissionStatus::Error;
                }
            }
        }
        self
    }

    /// Shorthand for `apply(FormEvent::FieldChanged { .. })`.
    pub fn change_field(self, field: Field, value: impl Into<String>) -> Self {
        self.apply(FormEvent::FieldChanged {
            field,
            value: value.into(),
        })
    }
}
