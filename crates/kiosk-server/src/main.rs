use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use tracing::info;

use kiosk_api::{build_router, AppState};
use kiosk_core::services::{CatalogService, StatsService};
use kiosk_infrastructure::{
    create_pool, demo_menu_items, demo_modifiers, demo_orders, run_migrations, InMemoryMenuItemRepository,
    InMemoryModifierRepository, InMemoryOrderLog, PgMenuItemRepository, PgModifierRepository,
    PgOrderRepository,
};
use kiosk_shared::config::{AppConfig, StoreBackend};
use kiosk_shared::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    init_telemetry();

    let config = AppConfig::load()?;
    info!("Starting {} ({})", config.app.name, config.app.env);

    let state = connect_store(&config).await?;
    let app = build_router(state);

    let addr = config.app.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn connect_store(config: &AppConfig) -> Result<AppState> {
    let state = match config.store.backend {
        StoreBackend::Postgres => {
            let pool = create_pool(
                &config.database.url,
                config.database.max_connections,
                config.database.min_connections,
            )
            .await?;
            run_migrations(&pool).await?;
            info!("Database connection established");

            AppState::new(
                CatalogService::new(
                    Arc::new(PgMenuItemRepository::new(pool.clone())),
                    Arc::new(PgModifierRepository::new(pool.clone())),
                ),
                StatsService::new(Arc::new(PgOrderRepository::new(pool))),
            )
        }
        StoreBackend::Memory => {
            let (items, modifiers, orders) = if config.store.seed_demo_data {
                info!("Seeding demo catalog");
                (demo_menu_items(), demo_modifiers(), demo_orders(Utc::now()))
            } else {
                (Vec::new(), Vec::new(), Vec::new())
            };
            info!("Using in-memory catalog store");

            AppState::new(
                CatalogService::new(
                    Arc::new(InMemoryMenuItemRepository::with_items(items)),
                    Arc::new(InMemoryModifierRepository::with_modifiers(modifiers)),
                ),
                StatsService::new(Arc::new(InMemoryOrderLog::with_orders(orders))),
            )
        }
    };
    Ok(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
