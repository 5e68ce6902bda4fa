//! Application State

use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,

    /// Number of dishes in the featured catalog the frontend ships with
    pub menu_items: usize,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            menu_items: savory_core::Catalog::featured().len(),
        }
    }
}
