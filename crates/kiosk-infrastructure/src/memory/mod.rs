//! In-memory store adapters for development, demos, and tests.

pub mod catalog;
pub mod order_log;
pub mod seed;

pub use catalog::{InMemoryMenuItemRepository, InMemoryModifierRepository};
pub use order_log::InMemoryOrderLog;
pub use seed::{demo_menu_items, demo_modifiers, demo_orders};

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use kiosk_core::error::DomainError;

fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, DomainError> {
    lock.read().map_err(|e| DomainError::Store(e.to_string()))
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, DomainError> {
    lock.write().map_err(|e| DomainError::Store(e.to_string()))
}
