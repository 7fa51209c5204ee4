//! Payment methods

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a payment method name is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown payment method: {0}")]
pub struct UnknownPaymentMethodError(pub String);

/// Payment method chosen at checkout.
///
/// A label attached to the order, not a processing integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Google Pay / UPI
    Gpay,
    /// PhonePe / UPI
    Phonepe,
    /// Paytm / Wallet
    Paytm,
    /// Credit or debit card
    Card,
    /// Netbanking
    Netbanking,
}

impl PaymentMethod {
    /// All payment methods offered at checkout.
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::Gpay,
        PaymentMethod::Phonepe,
        PaymentMethod::Paytm,
        PaymentMethod::Card,
        PaymentMethod::Netbanking,
    ];

    /// Wire representation of the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Gpay => "gpay",
            PaymentMethod::Phonepe => "phonepe",
            PaymentMethod::Paytm => "paytm",
            PaymentMethod::Card => "card",
            PaymentMethod::Netbanking => "netbanking",
        }
    }

    /// Human-readable label for the method.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            PaymentMethod::Gpay => "Google Pay / UPI",
            PaymentMethod::Phonepe => "PhonePe / UPI",
            PaymentMethod::Paytm => "Paytm / Wallet",
            PaymentMethod::Card => "Credit/Debit Card",
            PaymentMethod::Netbanking => "Netbanking",
        }
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = UnknownPaymentMethodError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| UnknownPaymentMethodError(value.to_string()))
    }
}
