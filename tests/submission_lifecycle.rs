//! End-to-end tests for submitting an inquiry through `ContactForm`

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tashra::form::{
    messages, ContactFormData, Field, FormEvent, SubmissionStatus, ERROR_BANNER,
    SUBMITTING_LABEL, SUCCESS_BANNER,
};
use tashra::submit::{
    BoxedSubmitter, ContactForm, FnSubmitter, SubmitError, SubmitOutcome, Submitter,
};
use tashra::testing::{FailingSubmitter, RecordingSubmitter};
#[cfg(feature = "tracing")]
use tracing_test::traced_test;

fn fill<S: Submitter>(form: &mut ContactForm<S>) {
    form.change_field(Field::Name, "Asha Verma");
    form.change_field(Field::Organization, "District Education Office, Sitapur");
    form.change_field(Field::Phone, "+91 98765 43210");
    form.change_field(Field::Email, "deo.sitapur@up.gov.in");
    form.change_field(Field::Requirements, "2,000 baby kit books, delivery by March");
}

#[tokio::test]
async fn successful_submission_clears_the_form() {
    let recorder = RecordingSubmitter::new();
    let mut form = ContactForm::with_submitter(recorder.clone());
    fill(&mut form);
    let sent = form.state().data().clone();

    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert!(form.submit().await.is_submitted());

    assert_eq!(form.status(), SubmissionStatus::Success);
    assert_eq!(form.state().status_banner(), Some(SUCCESS_BANNER));
    for field in Field::ALL {
        assert_eq!(form.state().data().get(field), "", "{field} not cleared");
    }
    assert_eq!(recorder.submissions(), vec![sent]);
}

#[tokio::test]
async fn failed_submission_keeps_the_input() {
    let mut form = ContactForm::with_submitter(FailingSubmitter::new("relay timed out"));
    fill(&mut form);
    let before = form.state().data().clone();

    match form.submit().await {
        SubmitOutcome::Failed(err) => {
            assert_eq!(err.message(), "relay timed out");
        }
        other => panic!("expected Failed, got {other:?}"),
    }

    assert_eq!(form.status(), SubmissionStatus::Error);
    assert_eq!(form.state().status_banner(), Some(ERROR_BANNER));
    assert_eq!(form.state().data(), &before);
    assert!(form.state().can_submit());
}

#[tokio::test]
async fn retry_after_failure_resets_status_first() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&attempts);
    let mut form = ContactForm::with_submitter(FnSubmitter::new(move |_: ContactFormData| {
        let attempt = counter.fetch_add(1, Ordering::SeqCst);
        async move {
            if attempt == 0 {
                Err(SubmitError::new("first attempt fails"))
            } else {
                Ok(())
            }
        }
    }));
    fill(&mut form);

    assert!(matches!(form.submit().await, SubmitOutcome::Failed(_)));
    assert_eq!(form.status(), SubmissionStatus::Error);

    assert!(form.submit().await.is_submitted());
    assert_eq!(form.status(), SubmissionStatus::Success);
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn invalid_submit_clears_previous_banner() {
    let mut form = ContactForm::with_submitter(FailingSubmitter::default());
    fill(&mut form);
    form.submit().await;
    assert_eq!(form.status(), SubmissionStatus::Error);

    form.change_field(Field::Email, "not-an-email");
    match form.submit().await {
        SubmitOutcome::Invalid(errors) => {
            assert_eq!(errors.get(Field::Email), Some(messages::EMAIL_INVALID));
            assert_eq!(errors.len(), 1);
        }
        other => panic!("expected Invalid, got {other:?}"),
    }
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert_eq!(form.state().status_banner(), None);
    assert!(!form.state().can_submit());

    form.change_field(Field::Email, "deo@up.gov.in");
    assert_eq!(form.state().error_for(Field::Email), None);
    assert!(form.state().can_submit());
}

#[tokio::test]
async fn busy_form_does_not_resubmit() {
    let recorder = RecordingSubmitter::new();
    let mut form = ContactForm::with_submitter(recorder.clone());
    fill(&mut form);

    form.dispatch(FormEvent::SubmitRequested);
    assert_eq!(form.state().submit_label(), SUBMITTING_LABEL);
    assert!(!form.state().can_submit());
    assert!(matches!(form.submit().await, SubmitOutcome::Busy));
    assert_eq!(recorder.count(), 0);
}

#[tokio::test]
async fn boxed_submitter_is_interchangeable() {
    let recorder = RecordingSubmitter::new();
    let submitters = vec![
        BoxedSubmitter::new(recorder.clone()),
        BoxedSubmitter::from_fn(|_| async { Err(SubmitError::new("closed")) }),
    ];

    let mut outcomes = Vec::new();
    for submitter in submitters {
        let mut form = ContactForm::with_submitter(submitter);
        fill(&mut form);
        outcomes.push(form.submit().await.is_submitted());
    }

    assert_eq!(outcomes, vec![true, false]);
    assert_eq!(recorder.count(), 1);
}

#[cfg(feature = "tracing")]
#[tokio::test]
#[traced_test]
async fn failure_is_logged_with_the_error() {
    let mut form = ContactForm::with_submitter(FailingSubmitter::new("smtp 451"));
    fill(&mut form);
    form.submit().await;

    assert!(logs_contain("tender inquiry submission failed"));
    assert!(logs_contain("smtp 451"));
}

#[cfg(feature = "tracing")]
#[tokio::test]
#[traced_test]
async fn success_is_logged() {
    let mut form = ContactForm::new();
    fill(&mut form);
    form.submit().await;

    assert!(logs_contain("tender inquiry submitted"));
}

#[cfg(feature = "tracing")]
#[tokio::test]
#[traced_test]
async fn rejected_form_is_logged_inside_the_submit_span() {
    let mut form = ContactForm::new();
    form.change_field(Field::Name, "A");
    form.submit().await;

    assert!(logs_contain("contact form failed validation"));
    assert!(logs_contain("contact_submit"));
}

#[cfg(feature = "tracing")]
#[tokio::test]
#[traced_test]
async fn form_values_stay_out_of_the_logs() {
    let mut form = ContactForm::with_submitter(FailingSubmitter::new("smtp 451"));
    fill(&mut form);
    form.submit().await;
    fill(&mut form);
    form.change_field(Field::Email, "deo.sitapur@");
    form.submit().await;

    assert!(logs_contain("contact_submit"));
    for value in ["Sitapur", "Asha Verma", "98765", "baby kit"] {
        assert!(!logs_contain(value), "{value} was logged");
    }
}
