//! Cart

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    menu::MenuItem,
    pricing::{CartTotals, TotalsError, cart_totals},
};

/// Errors related to cart mutation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// An item's currency differs from the cart currency (item currency, cart currency).
    #[error("item has currency {0}, but cart has currency {1}")]
    CurrencyMismatch(&'static str, &'static str),
}

/// A quantity-bearing reference to a catalog entry.
///
/// Name and unit price are captured when the item is added to a cart and
/// never re-read from the catalog afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    item_id: String,
    name: String,
    unit_price: Money<'static, Currency>,
    quantity: u32,
}

impl LineItem {
    /// Create a line item with the given captured details.
    #[must_use]
    pub fn new(
        item_id: impl Into<String>,
        name: impl Into<String>,
        unit_price: Money<'static, Currency>,
        quantity: u32,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    /// Identifier of the catalog entry this line refers to.
    #[must_use]
    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    /// Display name captured at add-time.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price captured at add-time.
    #[must_use]
    pub fn unit_price(&self) -> &Money<'static, Currency> {
        &self.unit_price
    }

    /// Units of this line. At least 1 while the line is in a cart.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price multiplied by quantity.
    #[must_use]
    pub fn line_total(&self) -> Money<'static, Currency> {
        let minor = self
            .unit_price
            .to_minor_units()
            .saturating_mul(i64::from(self.quantity));

        Money::from_minor(minor, self.unit_price.currency())
    }
}

/// Session-scoped, insertion-ordered collection of line items.
///
/// Identifiers are unique within a cart: adding an item already present
/// merges into its existing line instead of appending a second one, and a
/// line whose quantity reaches zero is removed rather than retained.
#[derive(Debug, Clone)]
pub struct Cart {
    items: Vec<LineItem>,
    currency: &'static Currency,
}

impl Cart {
    /// Create a new, empty cart priced in the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            items: Vec::new(),
            currency,
        }
    }

    /// Add `quantity` units of a catalog item to the cart.
    ///
    /// If a line for the same identifier already exists its quantity is
    /// incremented; otherwise a new line is appended, capturing the item's
    /// current name and unit price. Adding zero units of an item not yet
    /// in the cart inserts nothing.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError::CurrencyMismatch`] if the item is priced in
    /// a different currency than the cart.
    pub fn add(&mut self, item: &MenuItem, quantity: u32) -> Result<(), CartError> {
        let item_currency = item.price.currency();

        if item_currency != self.currency {
            return Err(CartError::CurrencyMismatch(
                item_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        if let Some(line) = self.items.iter_mut().find(|line| line.item_id == item.id) {
            line.quantity = line.quantity.saturating_add(quantity);
            return Ok(());
        }

        if quantity > 0 {
            self.items.push(LineItem {
                item_id: item.id.clone(),
                name: item.name.clone(),
                unit_price: item.price,
                quantity,
            });
        }

        Ok(())
    }

    /// Change the quantity of a line by `delta`, clamping at zero.
    ///
    /// A line whose quantity reaches zero is removed from the cart; the
    /// order of the remaining lines is preserved. Unknown identifiers are
    /// ignored.
    pub fn adjust_quantity(&mut self, item_id: &str, delta: i64) {
        for line in &mut self.items {
            if line.item_id == item_id {
                let quantity = i64::from(line.quantity).saturating_add(delta).max(0);
                line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            }
        }

        self.items.retain(|line| line.quantity > 0);
    }

    /// Remove the line with the given identifier. No-op when absent.
    pub fn remove(&mut self, item_id: &str) {
        self.items.retain(|line| line.item_id != item_id);
    }

    /// Remove every line from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Get the line for the given identifier.
    #[must_use]
    pub fn get(&self, item_id: &str) -> Option<&LineItem> {
        self.items.iter().find(|line| line.item_id == item_id)
    }

    /// Iterate over the lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter()
    }

    /// Number of distinct lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |count, line| count.saturating_add(line.quantity))
    }

    /// Currency all lines are priced in.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Derive subtotal, tax and total from the current lines.
    ///
    /// # Errors
    ///
    /// Returns a [`TotalsError`] if money arithmetic fails.
    pub fn totals(&self) -> Result<CartTotals, TotalsError> {
        cart_totals(self)
    }
}
