// ============================================================================
// Kiosk Core - Modifier Entity
// File: crates/kiosk-core/src/domain/modifier.rs
// Description: One selectable option within a modifier category
// ============================================================================

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Modifier entity. `display_order` is scoped to `category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifier {
    pub id: Uuid,
    pub category: String,
    pub option: String,
    pub is_active: bool,
    pub display_order: i32,
}

impl Modifier {
    /// Case-insensitive option comparison used for duplicate detection.
    pub fn matches_option(&self, candidate: &str) -> bool {
        self.option.to_lowercase() == candidate.to_lowercase()
    }

    pub fn apply(&mut self, changes: &ModifierChanges) {
        if let Some(option) = &changes.option {
            self.option = option.clone();
        }
        if let Some(is_active) = changes.is_active {
            self.is_active = is_active;
        }
    }
}

/// Validated insert payload. New rows are always active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewModifier {
    pub category: String,
    pub option: String,
    pub display_order: i32,
}

/// Partial update of a modifier. Category is immutable after creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierChanges {
    pub option: Option<String>,
    pub is_active: Option<bool>,
}

impl ModifierChanges {
    pub fn is_empty(&self) -> bool {
        self.option.is_none() && self.is_active.is_none()
    }
}
