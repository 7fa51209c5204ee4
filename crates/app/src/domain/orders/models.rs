//! Order models.

use canteen::{
    cart::LineItem,
    orders::{StatusProjection, UnknownStatusError, project},
    payment::PaymentMethod,
    pricing::CartTotals,
};
use jiff::Timestamp;
use rusty_money::{Money, iso::Currency};

use crate::{auth::UserUuid, uuids::TypedUuid};

/// Order UUID
pub type OrderUuid = TypedUuid<Order>;

/// Immutable snapshot sent to the order store at checkout.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    /// Client-generated identifier, so a retried submission can be
    /// deduplicated by the store instead of creating a second order.
    pub uuid: OrderUuid,

    /// Account placing the order.
    pub user_uuid: UserUuid,

    /// Deep copy of the cart's lines at submission time.
    pub items: Vec<LineItem>,

    /// Totals derived from the cart at submission time.
    pub totals: CartTotals,

    /// Payment method label.
    pub payment_method: PaymentMethod,
}

/// A persisted order owned by the external store.
///
/// The client holds only this read projection, fetched by identifier.
/// Status is written solely by the external fulfilment process.
#[derive(Debug, Clone)]
pub struct Order {
    /// Order identifier.
    pub uuid: OrderUuid,

    /// Snapshot of the cart lines at submission time.
    pub items: Vec<LineItem>,

    /// Subtotal at submission time.
    pub subtotal: Money<'static, Currency>,

    /// Tax at submission time.
    pub tax: Money<'static, Currency>,

    /// Total at submission time.
    pub total: Money<'static, Currency>,

    /// Payment method label as stored; opaque to the client.
    pub payment_method: String,

    /// Raw fulfilment status as stored. Project with [`Order::projection`].
    pub status: String,

    /// Estimated time of arrival, when the fulfilment process has set one.
    pub eta: Option<Timestamp>,

    /// When the order was persisted.
    pub created_at: Timestamp,
}

impl Order {
    /// Project the raw status onto the fixed stage list.
    ///
    /// # Errors
    ///
    /// Returns an [`UnknownStatusError`] for unrecognised status values;
    /// callers should render a "status unavailable" fallback rather than
    /// fail.
    pub fn projection(&self) -> Result<StatusProjection, UnknownStatusError> {
        project(&self.status)
    }
}
