//! Submitting an inquiry: the [`Submitter`] capability, its errors and the
//! [`ContactForm`] coordinator that drives validation and delivery.

mod coordinator;
mod error;
mod submitter;

pub use coordinator::{ContactForm, SubmitOutcome};
pub use error::SubmitError;
pub use submitter::{BoxedSubmitter, FnSubmitter, NoopSubmitter, Submitter};
