use std::error::Error as StdError;
use std::fmt;

/// Failure to resolve something in a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No page is registered under this key.
    UnknownPage(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::UnknownPage(key) => write!(f, "no page registered under `{}`", key),
        }
    }
}

impl StdError for RegistryError {}
