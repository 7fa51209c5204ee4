//! App Context

use std::sync::Arc;

use crate::{
    auth::{AuthService, RestAuthService},
    backend::{BackendClient, BackendConfig},
    domain::{
        menu::{MenuService, RestMenuService},
        orders::{OrdersService, RestOrdersService},
    },
};

/// Shared handles to the client services.
///
/// Session and cart state are owned by the calling flow and passed in
/// explicitly; nothing here holds ambient mutable state.
#[derive(Clone)]
pub struct AppContext {
    pub auth: Arc<dyn AuthService>,
    pub menu: Arc<dyn MenuService>,
    pub orders: Arc<dyn OrdersService>,
}

impl AppContext {
    /// Build the application context for the given backend.
    #[must_use]
    pub fn from_config(config: BackendConfig) -> Self {
        let client = Arc::new(BackendClient::new(config));

        Self {
            auth: Arc::new(RestAuthService::new(client.clone())),
            menu: Arc::new(RestMenuService::new(client.clone())),
            orders: Arc::new(RestOrdersService::new(client)),
        }
    }
}
