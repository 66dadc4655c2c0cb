use std::sync::Arc;

use kiosk_core::services::{CatalogService, StatsService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
    pub stats: Arc<StatsService>,
}

impl AppState {
    pub fn new(catalog: CatalogService, stats: StatsService) -> Self {
        Self {
            catalog: Arc::new(catalog),
            stats: Arc::new(stats),
        }
    }
}
