//! Orders service errors.

use std::num::TryFromIntError;

use canteen::pricing::TotalsError;
use thiserror::Error;

use crate::backend::BackendError;

/// Errors from the orders service.
#[derive(Debug, Error)]
pub enum OrdersServiceError {
    /// No authenticated identity; the caller must sign in before
    /// submitting, and nothing is sent to the store.
    #[error("authentication required to place an order")]
    AuthenticationRequired,

    /// Checkout is not offered for an empty cart.
    #[error("cannot place an order with an empty cart")]
    EmptyCart,

    /// The order store rejected or failed the submission. The cart is
    /// left untouched so the user can retry.
    #[error("order submission failed: {0}")]
    SubmissionFailed(BackendError),

    /// No order exists with the requested identifier.
    #[error("order not found")]
    NotFound,

    /// The order could not be fetched.
    #[error("order lookup failed")]
    Fetch(#[source] BackendError),

    /// Totals could not be derived from the cart.
    #[error("cart totals error")]
    Totals(#[from] TotalsError),

    /// A stored amount does not fit the money representation.
    #[error("invalid amount in stored order")]
    InvalidAmount(#[from] TryFromIntError),
}
