//! # Kiosk Infrastructure
//!
//! Catalog Store Adapters: PostgreSQL and in-memory implementations of the
//! core repository traits.

pub mod database;
pub mod memory;

pub use database::{create_pool, run_migrations, PgMenuItemRepository, PgModifierRepository, PgOrderRepository};
pub use memory::{demo_menu_items, demo_modifiers, demo_orders, InMemoryMenuItemRepository, InMemoryModifierRepository, InMemoryOrderLog};
