//! Domain services (business logic)

pub mod catalog_service;
pub mod stats_aggregator;
pub mod stats_service;

pub use catalog_service::CatalogService;
pub use stats_aggregator::aggregate;
pub use stats_service::StatsService;
