//! PostgreSQL repository implementations

pub mod menu_item_repo_impl;
pub mod modifier_repo_impl;
pub mod order_repo_impl;

pub use menu_item_repo_impl::PgMenuItemRepository;
pub use modifier_repo_impl::PgModifierRepository;
pub use order_repo_impl::PgOrderRepository;
