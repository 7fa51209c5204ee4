//! Order fulfilment stages

use std::str::FromStr;

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a status value is not one of the recognised stages.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown order status: {0}")]
pub struct UnknownStatusError(pub String);

/// Fulfilment stage of a submitted order.
///
/// Stages are written only by the external fulfilment process. This
/// client reads and projects them for display; it never transitions them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// The order has been accepted by the canteen.
    Received,
    /// The kitchen is preparing the order.
    Preparing,
    /// The order is ready for pickup.
    Ready,
    /// The order is on its way to the customer.
    OutForDelivery,
    /// The order has been handed over.
    Delivered,
}

impl OrderStatus {
    /// All stages, in fulfilment order.
    pub const STAGES: [OrderStatus; 5] = [
        OrderStatus::Received,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    /// Wire representation of the stage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Received => "received",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::OutForDelivery => "out_for_delivery",
            OrderStatus::Delivered => "delivered",
        }
    }

    /// Human-readable label for the stage.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            OrderStatus::Received => "Received",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Ready => "Ready",
            OrderStatus::OutForDelivery => "Out for delivery",
            OrderStatus::Delivered => "Delivered",
        }
    }

    /// Zero-based position of the stage within [`OrderStatus::STAGES`].
    #[must_use]
    pub const fn stage_index(self) -> usize {
        match self {
            OrderStatus::Received => 0,
            OrderStatus::Preparing => 1,
            OrderStatus::Ready => 2,
            OrderStatus::OutForDelivery => 3,
            OrderStatus::Delivered => 4,
        }
    }
}

impl FromStr for OrderStatus {
    type Err = UnknownStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        OrderStatus::STAGES
            .into_iter()
            .find(|stage| stage.as_str() == value)
            .ok_or_else(|| UnknownStatusError(value.to_string()))
    }
}

/// Projection of a raw status value onto the fixed stage list.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusProjection {
    /// The recognised stage.
    pub status: OrderStatus,
    /// Zero-based index of the stage.
    pub stage_index: usize,
    /// Completed fraction of the stage list, for a progress bar.
    pub progress: Percentage,
}

/// Project a raw status value onto the stage list for progress display.
///
/// The progress fraction counts the current stage as completed, so the
/// first stage projects to 1/5 and the last to 5/5.
///
/// # Errors
///
/// Returns an [`UnknownStatusError`] if the value is not one of the
/// recognised stages. Callers should render a "status unavailable"
/// fallback rather than fail.
pub fn project(status: &str) -> Result<StatusProjection, UnknownStatusError> {
    let status = OrderStatus::from_str(status)?;
    let stage_index = status.stage_index();

    let completed = Decimal::from(stage_index) + Decimal::ONE;
    let fraction = completed / Decimal::from(OrderStatus::STAGES.len());

    Ok(StatusProjection {
        status,
        stage_index,
        progress: Percentage::from(fraction),
    })
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn ready_projects_to_stage_two_of_five() -> TestResult {
        let projection = project("ready")?;

        assert_eq!(projection.status, OrderStatus::Ready);
        assert_eq!(projection.stage_index, 2);
        assert_eq!(
            projection.progress * Decimal::from(100),
            Decimal::from(60),
            "ready should display as 60% complete"
        );

        Ok(())
    }

    #[test]
    fn received_counts_as_the_first_completed_stage() -> TestResult {
        let projection = project("received")?;

        assert_eq!(projection.stage_index, 0);
        assert_eq!(projection.progress, Percentage::from(Decimal::new(2, 1)));

        Ok(())
    }

    #[test]
    fn delivered_fills_the_bar() -> TestResult {
        let projection = project("delivered")?;

        assert_eq!(projection.stage_index, 4);
        assert_eq!(projection.progress, Percentage::from(Decimal::ONE));

        Ok(())
    }

    #[test]
    fn unknown_status_errors_with_raw_value() {
        let result = project("bogus");

        assert_eq!(result, Err(UnknownStatusError("bogus".to_string())));
    }

    #[test]
    fn wire_names_parse_back_to_stages() -> TestResult {
        assert_eq!(
            "out_for_delivery".parse::<OrderStatus>()?,
            OrderStatus::OutForDelivery
        );

        Ok(())
    }
}
