//! Order store access.

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::backend::{BackendClient, BackendError, OrderInsertRow, OrderRow};

/// Store operations the orders service depends on.
///
/// The client only ever creates and reads order rows; fulfilment status
/// is written by the external process.
#[automock]
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn insert_order(
        &self,
        access_token: &str,
        order: &OrderInsertRow,
    ) -> Result<OrderRow, BackendError>;

    async fn fetch_order(&self, id: Uuid) -> Result<Option<OrderRow>, BackendError>;
}

#[async_trait]
impl OrderStore for BackendClient {
    async fn insert_order(
        &self,
        access_token: &str,
        order: &OrderInsertRow,
    ) -> Result<OrderRow, BackendError> {
        self.create_order(access_token, order).await
    }

    async fn fetch_order(&self, id: Uuid) -> Result<Option<OrderRow>, BackendError> {
        self.order_by_id(id).await
    }
}
