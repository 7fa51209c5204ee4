//! Menu service errors.

use thiserror::Error;

use crate::backend::BackendError;

/// Errors from the menu service.
#[derive(Debug, Error)]
pub enum MenuServiceError {
    /// The catalog could not be fetched; callers fall back to an empty
    /// menu state.
    #[error("menu fetch failed")]
    Fetch(#[source] BackendError),
}

impl From<BackendError> for MenuServiceError {
    fn from(error: BackendError) -> Self {
        Self::Fetch(error)
    }
}
