//! Error types for the shared crate

use thiserror::Error;

/// Errors raised while establishing a [`Session`](crate::Session)
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Role string is not one of admin / manager / member
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// A required session value was empty
    #[error("Missing session value: {0}")]
    Missing(&'static str),
}
