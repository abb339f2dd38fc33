//! View layer error types
//!
//! Backend failures never surface here: panels fall back to placeholders and
//! mutations are logged. These errors cover setup and control wiring.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    /// Session values supplied by the host are unusable
    #[error("Invalid session: {0}")]
    Session(#[from] shared::SessionError),

    /// Element id does not name a known control
    #[error("Unknown control: {0}")]
    UnknownControl(String),

    /// Configuration value could not be parsed
    #[error("Invalid config {key}: {value}")]
    Config { key: &'static str, value: String },
}

pub type ViewResult<T> = Result<T, ViewError>;
