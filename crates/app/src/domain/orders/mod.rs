//! Orders

mod errors;
mod models;
mod service;
mod store;

pub use errors::OrdersServiceError;
pub use models::*;
pub use service::*;
pub use store::*;
