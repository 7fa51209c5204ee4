//! Menu service.

use std::sync::Arc;

use async_trait::async_trait;
use canteen::menu::{Category, MenuItem};
use mockall::automock;
use rusty_money::Money;
use tracing::warn;

use crate::{
    CURRENCY,
    backend::{BackendClient, BackendError, MenuItemRow},
    domain::menu::errors::MenuServiceError,
};

/// Catalog operations the menu service depends on.
#[automock]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn list_menu_items(&self) -> Result<Vec<MenuItemRow>, BackendError>;
}

#[async_trait]
impl CatalogStore for BackendClient {
    async fn list_menu_items(&self) -> Result<Vec<MenuItemRow>, BackendError> {
        self.available_menu_items().await
    }
}

/// Read-only view of the catalog.
#[automock]
#[async_trait]
pub trait MenuService: Send + Sync {
    /// List the items currently available to order.
    async fn list_available(&self) -> Result<Vec<MenuItem>, MenuServiceError>;
}

/// Menu service backed by the hosted catalog store.
#[derive(Clone)]
pub struct RestMenuService {
    store: Arc<dyn CatalogStore>,
}

impl RestMenuService {
    #[must_use]
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl MenuService for RestMenuService {
    async fn list_available(&self) -> Result<Vec<MenuItem>, MenuServiceError> {
        let rows = self.store.list_menu_items().await?;

        let mut items = Vec::with_capacity(rows.len());

        for row in rows {
            match menu_item_from_row(row) {
                Ok(item) => items.push(item),
                // One bad row must not take the whole menu down.
                Err(skipped) => {
                    warn!(
                        item_id = %skipped.id,
                        reason = %skipped.reason,
                        "skipping malformed menu row"
                    );
                }
            }
        }

        Ok(items)
    }
}

struct SkippedRow {
    id: String,
    reason: String,
}

fn menu_item_from_row(row: MenuItemRow) -> Result<MenuItem, SkippedRow> {
    let category = match row.category.parse::<Category>() {
        Ok(category) => category,
        Err(error) => {
            return Err(SkippedRow {
                id: row.id,
                reason: error.to_string(),
            });
        }
    };

    let minor = match i64::try_from(row.price) {
        Ok(minor) => minor,
        Err(error) => {
            return Err(SkippedRow {
                id: row.id,
                reason: error.to_string(),
            });
        }
    };

    Ok(MenuItem {
        id: row.id,
        name: row.name,
        category,
        price: Money::from_minor(minor, CURRENCY),
        description: row.description,
        available: row.available,
    })
}
