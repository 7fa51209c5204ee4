//! Pricing

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::cart::Cart;

/// Errors that can occur while deriving cart totals.
#[derive(Debug, Error, PartialEq)]
pub enum TotalsError {
    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// The tax amount could not be represented in minor units.
    #[error("tax amount could not be represented")]
    TaxConversion,
}

/// Tax rate applied to the cart subtotal.
#[must_use]
pub fn tax_rate() -> Percentage {
    Percentage::from(0.05)
}

/// Derived totals for a cart snapshot.
///
/// Totals are never stored or mutated independently; [`cart_totals`]
/// recomputes all three from the cart's current lines on every call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartTotals {
    subtotal: Money<'static, Currency>,
    tax: Money<'static, Currency>,
    total: Money<'static, Currency>,
}

impl CartTotals {
    /// Sum of every line total before tax.
    #[must_use]
    pub fn subtotal(&self) -> Money<'static, Currency> {
        self.subtotal
    }

    /// Tax due on the subtotal, rounded to two decimal places.
    #[must_use]
    pub fn tax(&self) -> Money<'static, Currency> {
        self.tax
    }

    /// Subtotal plus tax.
    #[must_use]
    pub fn total(&self) -> Money<'static, Currency> {
        self.total
    }
}

/// Calculate subtotal, tax and total for the given cart.
///
/// The subtotal sums every line's unit price times quantity, tax is 5% of
/// the subtotal rounded half-even to whole minor units, and the total is
/// their sum. An empty cart yields zero for all three.
///
/// # Errors
///
/// - [`TotalsError::Money`]: money arithmetic or currency mismatch error.
/// - [`TotalsError::TaxConversion`]: the computed tax does not fit minor
///   units.
pub fn cart_totals(cart: &Cart) -> Result<CartTotals, TotalsError> {
    let currency = cart.currency();

    let subtotal = cart
        .iter()
        .try_fold(Money::from_minor(0, currency), |acc, line| {
            acc.add(line.line_total())
        })?;

    let tax_minor = (tax_rate() * Decimal::from(subtotal.to_minor_units()))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
        .to_i64()
        .ok_or(TotalsError::TaxConversion)?;

    let tax = Money::from_minor(tax_minor, currency);
    let total = subtotal.add(tax)?;

    Ok(CartTotals {
        subtotal,
        tax,
        total,
    })
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::INR;
    use testresult::TestResult;

    use crate::menu::{Category, MenuItem};

    use super::*;

    fn menu_item(id: &str, minor: i64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("Item {id}"),
            category: Category::Veg,
            price: Money::from_minor(minor, INR),
            description: None,
            available: true,
        }
    }

    #[test]
    fn totals_for_sample_cart() -> TestResult {
        let mut cart = Cart::new(INR);

        cart.add(&menu_item("1", 3000), 2)?;
        cart.add(&menu_item("2", 6000), 1)?;

        let totals = cart_totals(&cart)?;

        assert_eq!(totals.subtotal(), Money::from_minor(12000, INR));
        assert_eq!(totals.tax(), Money::from_minor(600, INR));
        assert_eq!(totals.total(), Money::from_minor(12600, INR));

        Ok(())
    }

    #[test]
    fn empty_cart_yields_zero_totals() -> TestResult {
        let cart = Cart::new(INR);

        let totals = cart_totals(&cart)?;

        assert_eq!(totals.subtotal(), Money::from_minor(0, INR));
        assert_eq!(totals.tax(), Money::from_minor(0, INR));
        assert_eq!(totals.total(), Money::from_minor(0, INR));

        Ok(())
    }

    #[test]
    fn totals_are_a_pure_function_of_the_cart() -> TestResult {
        let mut cart = Cart::new(INR);

        cart.add(&menu_item("1", 3000), 2)?;

        let first = cart_totals(&cart)?;
        let second = cart_totals(&cart)?;

        assert_eq!(first, second);

        Ok(())
    }

    #[test]
    fn totals_follow_cart_mutation() -> TestResult {
        let mut cart = Cart::new(INR);

        cart.add(&menu_item("1", 3000), 2)?;
        cart.adjust_quantity("1", -1);

        let totals = cart_totals(&cart)?;

        assert_eq!(totals.subtotal(), Money::from_minor(3000, INR));

        Ok(())
    }

    #[test]
    fn tax_rounds_half_even() -> TestResult {
        // 5% of 0.90 is 0.045, which rounds down to 0.04 under half-even.
        let mut cart = Cart::new(INR);

        cart.add(&menu_item("1", 90), 1)?;

        let totals = cart_totals(&cart)?;

        assert_eq!(totals.tax(), Money::from_minor(4, INR));
        assert_eq!(totals.total(), Money::from_minor(94, INR));

        Ok(())
    }
}
