//! The submit capability
//!
//! Where an inquiry goes after it validates (mail relay, CRM, a test double)
//! is not this crate's concern. The coordinator only needs something that
//! implements [`Submitter`].

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::{self, BoxFuture, FutureExt};

use super::SubmitError;
use crate::form::ContactFormData;

/// Delivers a validated inquiry.
///
/// # Example
///
/// ```rust
/// use std::future::Future;
/// use tashra::form::ContactFormData;
/// use tashra::submit::{SubmitError, Submitter};
///
/// struct RejectAll;
///
/// impl Submitter for RejectAll {
///     fn submit(
///         &self,
///         _data: &ContactFormData,
///     ) -> impl Future<Output = Result<(), SubmitError>> + Send {
///         async { Err(SubmitError::new("inquiries are closed")) }
///     }
/// }
/// ```
pub trait Submitter: Send + Sync {
    /// Deliver `data`. An `Err` puts the form into the error state and keeps
    /// the user's input.
    fn submit(
        &self,
        data: &ContactFormData,
    ) -> impl Future<Output = Result<(), SubmitError>> + Send;
}

impl<S: Submitter + ?Sized> Submitter for Arc<S> {
    fn submit(
        &self,
        data: &ContactFormData,
    ) -> impl Future<Output = Result<(), SubmitError>> + Send {
        (**self).submit(data)
    }
}

impl<S: Submitter + ?Sized> Submitter for &S {
    fn submit(
        &self,
        data: &ContactFormData,
    ) -> impl Future<Output = Result<(), SubmitError>> + Send {
        (**self).submit(data)
    }
}

/// The "no callback supplied" submitter: succeeds immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSubmitter;

impl Submitter for NoopSubmitter {
    fn submit(
        &self,
        _data: &ContactFormData,
    ) -> impl Future<Output = Result<(), SubmitError>> + Send {
        future::ready(Ok(()))
    }
}

/// Adapts an async closure into a [`Submitter`].
///
/// The closure receives an owned copy of the form data.
///
/// # Example
///
/// ```rust
/// use tashra::form::ContactFormData;
/// use tashra::submit::{FnSubmitter, SubmitError, Submitter};
///
/// let submitter = FnSubmitter::new(|data: ContactFormData| async move {
///     if data.email.ends_with(".gov.in") {
///         Ok(())
///     } else {
///         Err(SubmitError::new("only government addresses accepted"))
///     }
/// });
///
/// # tokio_test::block_on(async {
/// let data = ContactFormData { email: "deo@up.gov.in".into(), ..Default::default() };
/// assert!(submitter.submit(&data).await.is_ok());
/// # });
/// ```
#[derive(Clone)]
pub struct FnSubmitter<F> {
    f: F,
}

impl<F> FnSubmitter<F> {
    /// Wrap `f`.
    pub fn new(f: F) -> Self {
        FnSubmitter { f }
    }
}

impl<F> fmt::Debug for FnSubmitter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSubmitter").finish_non_exhaustive()
    }
}

impl<F, Fut> Submitter for FnSubmitter<F>
where
    F: Fn(ContactFormData) -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), SubmitError>> + Send,
{
    fn submit(
        &self,
        data: &ContactFormData,
    ) -> impl Future<Output = Result<(), SubmitError>> + Send {
        (self.f)(data.clone())
    }
}

type BoxedSubmitFn =
    dyn Fn(ContactFormData) -> BoxFuture<'static, Result<(), SubmitError>> + Send + Sync;

/// A type-erased submitter.
///
/// Use it when the concrete submitter is chosen at runtime, for example relay
/// in production and [`NoopSubmitter`] in preview builds.
///
/// ```rust
/// use tashra::submit::{BoxedSubmitter, NoopSubmitter};
///
/// let preview = true;
/// let submitter = if preview {
///     BoxedSubmitter::new(NoopSubmitter)
/// } else {
///     BoxedSubmitter::from_fn(|_| async { Ok(()) })
/// };
/// # let _ = submitter;
/// ```
#[derive(Clone)]
pub struct BoxedSubmitter {
    inner: Arc<BoxedSubmitFn>,
}

impl BoxedSubmitter {
    /// Erase a concrete submitter.
    pub fn new<S>(submitter: S) -> Self
    where
        S: Submitter + 'static,
    {
        let submitter = Arc::new(submitter);
        BoxedSubmitter {
            inner: Arc::new(move |data: ContactFormData| {
                let submitter = Arc::clone(&submitter);
                async move { submitter.submit(&data).await }.boxed()
            }),
        }
    }

    /// Erase an async closure.
    pub fn from_fn<F, Fut>(f: F) -> Self
    where
        F: Fn(ContactFormData) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), SubmitError>> + Send + 'static,
    {
        BoxedSubmitter {
            inner: Arc::new(move |data| f(data).boxed()),
        }
    }
}

impl fmt::Debug for BoxedSubmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedSubmitter").finish_non_exhaustive()
    }
}

impl Submitter for BoxedSubmitter {
    fn submit(
        &self,
        data: &ContactFormData,
    ) -> impl Future<Output = Result<(), SubmitError>> + Send {
        (self.inner)(data.clone())
    }
}
