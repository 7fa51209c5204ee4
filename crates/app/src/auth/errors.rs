//! Auth errors.

use thiserror::Error;

use crate::backend::BackendError;

/// A single failed form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field the message applies to.
    pub field: &'static str,
    /// Human-readable message for that field.
    pub message: String,
}

impl FieldError {
    pub(crate) fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Errors from the authentication flows.
#[derive(Debug, Error)]
pub enum AuthError {
    /// One or more form fields failed validation; surfaced per-field,
    /// without any backend call having been made.
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    /// The identity provider refused the credentials or the request.
    #[error("authentication rejected: {0}")]
    Rejected(String),

    /// Transport-level failure talking to the identity provider.
    #[error("auth request failed")]
    Backend(#[source] BackendError),
}

impl From<BackendError> for AuthError {
    fn from(error: BackendError) -> Self {
        match error {
            BackendError::Rejected { message, .. } => Self::Rejected(message),
            other => Self::Backend(other),
        }
    }
}
