//! Integration test walking a cart through a full ordering session.
//!
//! Mirrors a typical canteen flow: items are added from the menu (merging
//! duplicates), quantities are adjusted from the cart view, and the order
//! summary is recomputed after every change.
//!
//! Expected summary at checkout:
//!
//! - Idli (2 pcs): ₹30.00 x 2 = ₹60.00
//! - Masala Dosa: ₹60.00 x 1 = ₹60.00
//! - Subtotal: ₹120.00
//! - Tax (5%): ₹6.00
//! - Total: ₹126.00

use rusty_money::{Money, iso::INR};
use testresult::TestResult;

use canteen::prelude::*;

fn menu_item(id: &str, name: &str, minor: i64, category: Category) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        category,
        price: Money::from_minor(minor, INR),
        description: None,
        available: true,
    }
}

#[test]
fn cart_session_reaches_expected_checkout_summary() -> TestResult {
    let idli = menu_item("1", "Idli (2 pcs)", 3000, Category::Veg);
    let dosa = menu_item("2", "Masala Dosa", 6000, Category::Veg);
    let coffee = menu_item("3", "Filter Coffee", 2000, Category::TeaCoffee);

    let mut cart = Cart::new(INR);

    // Tapping "Add to Cart" twice on the same item merges, not duplicates.
    cart.add(&idli, 1)?;
    cart.add(&idli, 1)?;
    cart.add(&dosa, 1)?;
    cart.add(&coffee, 1)?;

    assert_eq!(cart.len(), 3);
    assert_eq!(cart.item_count(), 4);

    // The coffee is removed from the cart view before checkout.
    cart.adjust_quantity("3", -1);

    assert_eq!(cart.len(), 2);

    let totals = cart.totals()?;

    assert_eq!(totals.subtotal(), Money::from_minor(12000, INR));
    assert_eq!(totals.tax(), Money::from_minor(600, INR));
    assert_eq!(totals.total(), Money::from_minor(12600, INR));

    // An emptied cart goes back to the zero-total, checkout-disabled state.
    cart.clear();

    let totals = cart.totals()?;

    assert!(cart.is_empty());
    assert_eq!(totals.total(), Money::from_minor(0, INR));

    Ok(())
}

#[test]
fn tracking_view_projects_stages_and_survives_unknown_status() -> TestResult {
    let projection = project("ready")?;

    assert_eq!(projection.status, OrderStatus::Ready);
    assert_eq!(projection.stage_index, 2);

    // An unrecognised value from the store degrades, it must not panic.
    let fallback = project("bogus");

    assert!(matches!(fallback, Err(UnknownStatusError(value)) if value == "bogus"));

    Ok(())
}
