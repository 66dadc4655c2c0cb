//! Consistency rules applied before any catalog row is written

pub mod consistency;

pub use consistency::{
    next_display_order, normalize_category, trim_option, validate_menu_item_update,
    validate_modifier_changes, validate_modifier_config_keys, validate_modifier_rename,
    validate_new_modifier,
};
