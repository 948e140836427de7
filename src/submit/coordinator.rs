//! Submission coordinator
//!
//! [`ContactForm`] owns one form's [`ContactFormState`] and a [`Submitter`],
//! and runs the reducer around the effect: `SubmitRequested`, then the effect,
//! then `SubmissionSucceeded` or `SubmissionFailed`.

#[cfg(feature = "tracing")]
use tracing::Instrument as _;

use super::{NoopSubmitter, SubmitError, Submitter};
use crate::form::{ContactFormState, Field, FieldErrors, FormEvent, SubmissionStatus};

/// What a call to [`ContactForm::submit`] did.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; the errors are now shown inline. No effect ran.
    Invalid(FieldErrors),
    /// The effect completed; the form has been cleared.
    Submitted,
    /// The effect failed; the input is kept. The error is for logging, the
    /// user sees the generic banner.
    Failed(SubmitError),
    /// A previous submission is still in flight; nothing happened.
    Busy,
}

impl SubmitOutcome {
    /// True for [`SubmitOutcome::Submitted`].
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted)
    }
}

/// One contact form instance.
///
/// Calls must be serialized; `submit` takes `&mut self`, so the borrow checker
/// already enforces that within one owner. The busy check at the top of
/// `submit` covers the remaining case: a submit future dropped before it
/// finished leaves the form submitting until [`FormEvent::SubmissionFailed`]
/// is dispatched.
///
/// # Example
///
/// ```rust
/// use tashra::form::{Field, SubmissionStatus};
/// use tashra::submit::{ContactForm, SubmitOutcome};
///
/// # tokio_test::block_on(async {
/// let mut form = ContactForm::new();
/// form.change_field(Field::Name, "Asha Verma");
/// form.change_field(Field::Organization, "District Education Office");
/// form.change_field(Field::Phone, "+91 98765 43210");
/// form.change_field(Field::Email, "deo@district.gov.in");
/// form.change_field(Field::Requirements, "2,000 baby kit books by March");
///
/// let outcome = form.submit().await;
/// assert!(outcome.is_submitted());
/// assert_eq!(form.state().status(), SubmissionStatus::Success);
/// assert!(form.state().data().is_empty());
/// # });
/// ```
#[derive(Debug, Default)]
pub struct ContactForm<S = NoopSubmitter> {
    state: ContactFormState,
    submitter: S,
}

impl ContactForm<NoopSubmitter> {
    /// A form whose submissions succeed without going anywhere.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: Submitter> ContactForm<S> {
    /// A form that delivers through `submitter`.
    pub fn with_submitter(submitter: S) -> Self {
        ContactForm {
            state: ContactFormState::new(),
            submitter,
        }
    }

    /// Current state, for rendering.
    pub fn state(&self) -> &ContactFormState {
        &self.state
    }

    /// Run one event through the reducer.
    pub fn dispatch(&mut self, event: FormEvent) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(event);
    }

    /// Record an edit.
    pub fn change_field(&mut self, field: Field, value: impl Into<String>) {
        self.dispatch(FormEvent::FieldChanged {
            field,
            value: value.into(),
        });
    }

    /// Validate and, if valid, deliver the inquiry.
    ///
    /// With the `tracing` feature every event is recorded inside a
    /// `contact_submit` span. Form values are never logged.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.state.is_submitting() {
            return SubmitOutcome::Busy;
        }

        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("contact_submit");

        self.dispatch(FormEvent::SubmitRequested);
        if !self.state.is_submitting() {
            #[cfg(feature = "tracing")]
            span.in_scope(|| {
                tracing::debug!(
                    invalid_fields = self.state.errors().len(),
                    "contact form failed validation"
                )
            });
            return SubmitOutcome::Invalid(self.state.errors().clone());
        }

        let data = self.state.data().clone();
        let delivery = self.submitter.submit(&data);

        #[cfg(feature = "tracing")]
        let delivery = delivery.instrument(span.clone());

        let result = delivery.await;

        #[cfg(feature = "tracing")]
        let _entered = span.enter();

        match result {
            Ok(()) => {
                self.dispatch(FormEvent::SubmissionSucceeded);
                #[cfg(feature = "tracing")]
                tracing::info!("tender inquiry submitted");
                SubmitOutcome::Submitted
            }
            Err(err) => {
                self.dispatch(FormEvent::SubmissionFailed);
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %err, "tender inquiry submission failed");
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Status of the last attempt.
    pub fn status(&self) -> SubmissionStatus {
        self.state.status()
    }

    /// Take the submitter back.
    pub fn into_submitter(self) -> S {
        self.submitter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::ContactFormData;
    use crate::submit::FnSubmitter;

    fn fill<S: Submitter>(form: &mut ContactForm<S>) {
        form.change_field(Field::Name, "Ravi Kumar");
        form.change_field(Field::Organization, "Women & Child Development Dept");
        form.change_field(Field::Phone, "9876543210");
        form.change_field(Field::Email, "wcd@state.gov.in");
        form.change_field(Field::Requirements, "Grocery kits for 40 anganwadi centres");
    }

    #[tokio::test]
    async fn test_invalid_form_never_calls_submitter() {
        // Would turn the outcome into Failed if it ever ran.
        let mut form = ContactForm::with_submitter(FnSubmitter::new(|_: ContactFormData| async {
            Err(SubmitError::new("submitter ran for an invalid form"))
        }));

        match form.submit().await {
            SubmitOutcome::Invalid(errors) => assert_eq!(errors.len(), 5),
            other => panic!("expected Invalid, got {other:?}"),
        }
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert!(!form.state().is_submitting());
    }

    #[tokio::test]
    async fn test_noop_submitter_succeeds_and_resets() {
        let mut form = ContactForm::new();
        fill(&mut form);
        assert!(form.submit().await.is_submitted());
        assert_eq!(form.status(), SubmissionStatus::Success);
        assert!(form.state().data().is_empty());
    }

    #[tokio::test]
    async fn test_failure_is_returned_and_input_kept() {
        let mut form = ContactForm::with_submitter(FnSubmitter::new(|_: ContactFormData| async {
            Err(SubmitError::new("relay unavailable"))
        }));
        fill(&mut form);
        let before = form.state().data().clone();

        match form.submit().await {
            SubmitOutcome::Failed(err) => assert_eq!(err.message(), "relay unavailable"),
            other => panic!("expected Failed, got {other:?}"),
        }
        assert_eq!(form.status(), SubmissionStatus::Error);
        assert_eq!(form.state().data(), &before);
        assert!(!form.state().is_submitting());
    }

    #[tokio::test]
    async fn test_busy_form_rejects_submit() {
        let mut form = ContactForm::new();
        fill(&mut form);
        form.dispatch(FormEvent::SubmitRequested);
        assert!(form.state().is_submitting());

        assert!(matches!(form.submit().await, SubmitOutcome::Busy));

        form.dispatch(FormEvent::SubmissionFailed);
        assert!(form.submit().await.is_submitted());
    }
}
