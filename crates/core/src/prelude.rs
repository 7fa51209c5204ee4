//! Canteen prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, LineItem},
    menu::{Category, MenuItem, UnknownCategoryError},
    orders::{OrderStatus, StatusProjection, UnknownStatusError, project},
    payment::{PaymentMethod, UnknownPaymentMethodError},
    pricing::{CartTotals, TotalsError, cart_totals, tax_rate},
};
