//! Shared client modules for the canteen ordering app.

pub mod auth;
pub mod backend;
pub mod context;
pub mod domain;

mod uuids;

/// Currency every canteen price is quoted in.
pub const CURRENCY: &rusty_money::iso::Currency = rusty_money::iso::INR;
