//! Submission failure with a context trail
//!
//! A submit effect fails for transport reasons the form cannot show the user
//! (relay down, timeout, rejected payload). [`SubmitError`] keeps the detail
//! for logs: a message, the underlying error if any, and a trail of context
//! added as the failure propagates.
//!
//! # Example
//!
//! ```
//! use tashra::submit::SubmitError;
//!
//! let err = SubmitError::new("connection refused")
//!     .context("posting to mail relay")
//!     .context("submitting tender inquiry");
//!
//! assert_eq!(err.message(), "connection refused");
//! assert_eq!(err.context_trail(), &["posting to mail relay", "submitting tender inquiry"]);
//! assert_eq!(
//!     err.to_string(),
//!     "submission failed: connection refused\n  -> posting to mail relay\n  -> submitting tender inquiry"
//! );
//! ```

use std::error::Error as StdError;
use std::fmt;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Why a submit effect failed.
#[derive(Debug)]
pub struct SubmitError {
    message: String,
    source: Option<BoxError>,
    context: Vec<String>,
}

impl SubmitError {
    /// A failure described only by a message.
    pub fn new(message: impl Into<String>) -> Self {
        SubmitError {
            message: message.into(),
            source: None,
            context: Vec::new(),
        }
    }

    /// Wrap an underlying error; its display becomes the message.
    ///
    /// ```
    /// use std::io;
    /// use std::error::Error;
    /// use tashra::submit::SubmitError;
    ///
    /// let io_err = io::Error::new(io::ErrorKind::TimedOut, "relay timed out");
    /// let err = SubmitError::from_source(io_err);
    /// assert_eq!(err.message(), "relay timed out");
    /// assert!(err.source().is_some());
    /// ```
    pub fn from_source<E>(source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        SubmitError {
            message: source.to_string(),
            source: Some(Box::new(source)),
            context: Vec::new(),
        }
    }

    /// Add a context layer, innermost first.
    pub fn context(mut self, msg: impl Into<String>) -> Self {
        self.context.push(msg.into());
        self
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Context messages in the order they were added.
    pub fn context_trail(&self) -> &[String] {
        &self.context
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "submission failed: {}", self.message)?;

        for ctx in &self.context {
            write!(f, "\n  -> {}", ctx)?;
        }

        Ok(())
    }
}

impl StdError for SubmitError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|err| err as &(dyn StdError + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_new_has_no_source_or_context() {
        let err = SubmitError::new("relay rejected payload");
        assert_eq!(err.message(), "relay rejected payload");
        assert!(err.context_trail().is_empty());
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "submission failed: relay rejected payload");
    }

    #[test]
    fn test_source_is_exposed() {
        let err = SubmitError::from_source(io::Error::other("socket closed"));
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("socket closed"));
    }

    #[test]
    fn test_context_order() {
        let err = SubmitError::new("x").context("inner").context("outer");
        assert_eq!(err.context_trail(), &["inner", "outer"]);
    }
}
