// ============================================================================
// Kiosk Core - Menu Item Entity
// File: crates/kiosk-core/src/domain/menu_item.rs
// Description: Drink on the menu and its modifier applicability
// ============================================================================

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kiosk_shared::new_id;

/// Modifier category name -> whether that category applies to the item.
/// An absent key means "not applicable".
pub type ModifierConfig = BTreeMap<String, bool>;

/// Modifier category name -> option preselected when the drink is picked.
pub type ModifierDefaults = BTreeMap<String, String>;

/// Menu item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub is_active: bool,
    pub display_order: i32,
    #[serde(default)]
    pub modifier_config: ModifierConfig,
    #[serde(default)]
    pub default_modifiers: ModifierDefaults,
}

impl MenuItem {
    pub fn new(name: &str, category: &str, display_order: i32) -> Self {
        Self {
            id: new_id(),
            name: name.trim().to_string(),
            category: category.trim().to_string(),
            is_active: true,
            display_order,
            modifier_config: ModifierConfig::new(),
            default_modifiers: ModifierDefaults::new(),
        }
    }

    pub fn with_modifier(mut self, category: &str, default_option: Option<&str>) -> Self {
        self.modifier_config.insert(category.to_string(), true);
        if let Some(option) = default_option {
            self.default_modifiers
                .insert(category.to_string(), option.to_string());
        }
        self
    }

    pub fn accepts_modifier(&self, category: &str) -> bool {
        self.modifier_config.get(category).copied().unwrap_or(false)
    }

    pub fn default_for(&self, category: &str) -> Option<&str> {
        self.default_modifiers.get(category).map(String::as_str)
    }

    /// Apply the provided fields of a partial update, leaving the rest intact.
    pub fn apply(&mut self, update: &MenuItemUpdate) {
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        if let Some(config) = &update.modifier_config {
            self.modifier_config = config.clone();
        }
    }
}

/// Partial admin update of a menu item. Only these two fields are mutable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub is_active: Option<bool>,
    pub modifier_config: Option<ModifierConfig>,
}

impl MenuItemUpdate {
    pub fn is_empty(&self) -> bool {
        self.is_active.is_none() && self.modifier_config.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_config_key_is_not_applicable() {
        let item = MenuItem::new("Latte", "Classics", 0).with_modifier("milk", Some("Whole"));

        assert!(item.accepts_modifier("milk"));
        assert!(!item.accepts_modifier("temperature"));
        assert_eq!(item.default_for("milk"), Some("Whole"));
        assert_eq!(item.default_for("temperature"), None);
    }

    #[test]
    fn test_apply_only_touches_provided_fields() {
        let mut item = MenuItem::new("Mocha", "Signature", 3).with_modifier("milk", None);

        item.apply(&MenuItemUpdate {
            is_active: Some(false),
            modifier_config: None,
        });

        assert!(!item.is_active);
        assert!(item.accepts_modifier("milk"));
        assert_eq!(item.display_order, 3);
    }
}
