//! Shared application state handed to every handler.

use std::sync::Arc;

use autosalon_core::auth::TokenIssuer;
use autosalon_core::services::{AccountService, OrderService, TestDriveService};
use autosalon_core::{AutosalonConfig, CatalogService};
use autosalon_storage::AutosalonStorageEngine;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub catalog: CatalogService,
    pub accounts: AccountService,
    pub orders: OrderService,
    pub test_drives: TestDriveService,
    pub tokens: TokenIssuer,
}

impl AppState {
    /// Wire every service to the one storage engine. The caller owns the
    /// engine's lifetime; dropping the last state handle closes it.
    pub fn new(engine: Arc<AutosalonStorageEngine>, config: &AutosalonConfig) -> SharedState {
        let accounts = AccountService::from_config(engine.clone(), &config.auth);
        let tokens = accounts.tokens().clone();

        Arc::new(Self {
            catalog: CatalogService::new(engine.clone(), config.catalog.clone()),
            accounts,
            orders: OrderService::new(engine.clone()),
            test_drives: TestDriveService::new(engine.clone(), engine),
            tokens,
        })
    }
}
