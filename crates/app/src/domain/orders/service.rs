//! Orders service.

use std::{num::TryFromIntError, sync::Arc};

use async_trait::async_trait;
use canteen::{
    cart::{Cart, LineItem},
    orders::OrderStatus,
    payment::PaymentMethod,
};
use mockall::automock;
use rusty_money::{Money, iso::Currency};
use tracing::Span;

use crate::{
    CURRENCY,
    auth::Session,
    backend::{OrderInsertRow, OrderItemRow, OrderRow},
    domain::orders::{
        errors::OrdersServiceError,
        models::{Order, OrderDraft, OrderUuid},
        store::OrderStore,
    },
};

/// Checkout and tracking operations.
#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Submit the cart as a new order.
    ///
    /// Requires an authenticated session and a non-empty cart; the
    /// snapshot sent to the store carries totals derived at this moment
    /// and the initial `received` status.
    async fn submit_order<'a>(
        &self,
        session: Option<&'a Session>,
        cart: &Cart,
        payment_method: PaymentMethod,
    ) -> Result<Order, OrdersServiceError>;

    /// Fetch a single order by identifier.
    async fn get_order(&self, order: OrderUuid) -> Result<Order, OrdersServiceError>;
}

/// Orders service backed by the hosted order store.
#[derive(Clone)]
pub struct RestOrdersService {
    store: Arc<dyn OrderStore>,
}

impl RestOrdersService {
    #[must_use]
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl OrdersService for RestOrdersService {
    #[tracing::instrument(
        name = "orders.service.submit_order",
        skip(self, session, cart),
        fields(
            order_uuid = tracing::field::Empty,
            line_count = cart.len(),
            payment_method = %payment_method,
        ),
        err
    )]
    async fn submit_order<'a>(
        &self,
        session: Option<&'a Session>,
        cart: &Cart,
        payment_method: PaymentMethod,
    ) -> Result<Order, OrdersServiceError> {
        let Some(session) = session else {
            return Err(OrdersServiceError::AuthenticationRequired);
        };

        if cart.is_empty() {
            return Err(OrdersServiceError::EmptyCart);
        }

        let totals = cart.totals()?;

        let draft = OrderDraft {
            uuid: OrderUuid::new(),
            user_uuid: session.user_uuid,
            items: cart.iter().cloned().collect(),
            totals,
            payment_method,
        };

        Span::current().record("order_uuid", tracing::field::display(draft.uuid));

        let row = insert_row_from_draft(&draft)?;

        let stored = self
            .store
            .insert_order(&session.access_token, &row)
            .await
            .map_err(OrdersServiceError::SubmissionFailed)?;

        order_from_row(stored)
    }

    #[tracing::instrument(name = "orders.service.get_order", skip(self), err)]
    async fn get_order(&self, order: OrderUuid) -> Result<Order, OrdersServiceError> {
        let row = self
            .store
            .fetch_order(order.into_uuid())
            .await
            .map_err(OrdersServiceError::Fetch)?;

        match row {
            Some(row) => order_from_row(row),
            None => Err(OrdersServiceError::NotFound),
        }
    }
}

fn insert_row_from_draft(draft: &OrderDraft) -> Result<OrderInsertRow, TryFromIntError> {
    let items = draft
        .items
        .iter()
        .map(item_row_from_line)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(OrderInsertRow {
        id: draft.uuid.into_uuid(),
        user_id: draft.user_uuid.into_uuid(),
        items,
        subtotal: minor_units(draft.totals.subtotal())?,
        tax: minor_units(draft.totals.tax())?,
        total: minor_units(draft.totals.total())?,
        payment_method: draft.payment_method.as_str().to_string(),
        status: OrderStatus::Received.as_str().to_string(),
    })
}

fn item_row_from_line(line: &LineItem) -> Result<OrderItemRow, TryFromIntError> {
    Ok(OrderItemRow {
        item_id: line.item_id().to_string(),
        name: line.name().to_string(),
        unit_price: minor_units(*line.unit_price())?,
        quantity: line.quantity(),
    })
}

fn order_from_row(row: OrderRow) -> Result<Order, OrdersServiceError> {
    let items = row
        .items
        .into_iter()
        .map(line_from_item_row)
        .collect::<Result<Vec<_>, TryFromIntError>>()?;

    Ok(Order {
        uuid: OrderUuid::from_uuid(row.id),
        items,
        subtotal: money_from_minor(row.subtotal)?,
        tax: money_from_minor(row.tax)?,
        total: money_from_minor(row.total)?,
        payment_method: row.payment_method,
        status: row.status,
        eta: row.eta,
        created_at: row.created_at,
    })
}

fn line_from_item_row(row: OrderItemRow) -> Result<LineItem, TryFromIntError> {
    Ok(LineItem::new(
        row.item_id,
        row.name,
        money_from_minor(row.unit_price)?,
        row.quantity,
    ))
}

fn minor_units(amount: Money<'static, Currency>) -> Result<u64, TryFromIntError> {
    u64::try_from(amount.to_minor_units())
}

fn money_from_minor(amount: u64) -> Result<Money<'static, Currency>, TryFromIntError> {
    Ok(Money::from_minor(i64::try_from(amount)?, CURRENCY))
}
