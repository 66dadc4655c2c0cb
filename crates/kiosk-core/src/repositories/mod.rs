//! Repository traits (ports) over the `menu_items`, `modifiers`, and `orders` relations

pub mod menu_item_repository;
pub mod modifier_repository;
pub mod order_repository;

pub use menu_item_repository::MenuItemRepository;
pub use modifier_repository::ModifierRepository;
pub use order_repository::OrderRepository;

#[cfg(test)]
pub use menu_item_repository::MockMenuItemRepository;
#[cfg(test)]
pub use modifier_repository::MockModifierRepository;
#[cfg(test)]
pub use order_repository::MockOrderRepository;
