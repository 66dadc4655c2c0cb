// ============================================================================
// Kiosk API - Request DTOs
// File: crates/kiosk-api/src/dto.rs
// ============================================================================
//! Admin request payloads. Responses are the domain rows themselves.

use serde::Deserialize;
use uuid::Uuid;

use kiosk_core::domain::{MenuItemUpdate, ModifierChanges, ModifierConfig};

use crate::error::ApiError;

/// PATCH /api/admin/menu-items
#[derive(Debug, Deserialize)]
pub struct UpdateMenuItemRequest {
    pub id: Option<Uuid>,
    pub is_active: Option<bool>,
    pub modifier_config: Option<ModifierConfig>,
}

impl UpdateMenuItemRequest {
    pub fn into_parts(self) -> Result<(Uuid, MenuItemUpdate), ApiError> {
        let id = self
            .id
            .ok_or_else(|| ApiError::BadRequest("Item ID required".to_string()))?;
        Ok((
            id,
            MenuItemUpdate {
                is_active: self.is_active,
                modifier_config: self.modifier_config,
            },
        ))
    }
}

/// POST /api/admin/modifiers
#[derive(Debug, Deserialize)]
pub struct CreateModifierRequest {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub option: String,
}

/// PATCH /api/admin/modifiers
#[derive(Debug, Deserialize)]
pub struct UpdateModifierRequest {
    pub id: Option<Uuid>,
    pub option: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateModifierRequest {
    pub fn into_parts(self) -> Result<(Uuid, ModifierChanges), ApiError> {
        let id = self
            .id
            .ok_or_else(|| ApiError::BadRequest("Modifier ID required".to_string()))?;
        Ok((
            id,
            ModifierChanges {
                option: self.option,
                is_active: self.is_active,
            },
        ))
    }
}
