//! # Kiosk Core - Domain Module
//!
//! Catalog rows, the order log, and the read models built from them.

pub mod menu_item;
pub mod modifier;
pub mod order;
pub mod stats;
pub mod views;

pub use menu_item::{MenuItem, MenuItemUpdate, ModifierConfig, ModifierDefaults};
pub use modifier::{Modifier, ModifierChanges, NewModifier};
pub use order::{Order, OrderModifiers, OrderStatus};
pub use stats::{DashboardStats, DrinkCount, ModifierBreakdown, OptionShare, StatusCounts};
pub use views::{Customization, CustomizationCategory, OrderingMenu};
