// ============================================================================
// Kiosk Infrastructure - PostgreSQL Menu Item Repository
// File: crates/kiosk-infrastructure/src/database/postgres/menu_item_repo_impl.rs
// ============================================================================

use std::collections::BTreeMap;

use async_trait::async_trait;
use sqlx::{types::Json, FromRow, PgPool};
use tracing::{debug, error, info};
use uuid::Uuid;

use kiosk_core::domain::{MenuItem, MenuItemUpdate, ModifierConfig, ModifierDefaults};
use kiosk_core::error::DomainError;
use kiosk_core::repositories::MenuItemRepository;

pub struct PgMenuItemRepository {
    pool: PgPool,
}

impl PgMenuItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct MenuItemRow {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub is_active: bool,
    pub display_order: i32,
    pub modifier_config: Json<ModifierConfig>,
    pub default_modifiers: Option<Json<BTreeMap<String, Option<String>>>>,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        // Stored defaults may carry explicit nulls; those mean "no default".
        let default_modifiers: ModifierDefaults = row
            .default_modifiers
            .map(|Json(defaults)| {
                defaults
                    .into_iter()
                    .filter_map(|(category, option)| option.map(|o| (category, o)))
                    .collect()
            })
            .unwrap_or_default();

        MenuItem {
            id: row.id,
            name: row.name,
            category: row.category,
            is_active: row.is_active,
            display_order: row.display_order,
            modifier_config: row.modifier_config.0,
            default_modifiers,
        }
    }
}

const MENU_ITEM_COLUMNS: &str =
    "id, name, category, is_active, display_order, modifier_config, default_modifiers";

#[async_trait]
impl MenuItemRepository for PgMenuItemRepository {
    async fn list(&self, include_inactive: bool) -> Result<Vec<MenuItem>, DomainError> {
        let filter = if include_inactive { "" } else { "WHERE is_active = TRUE" };
        let sql = format!(
            "SELECT {} FROM menu_items {} ORDER BY display_order",
            MENU_ITEM_COLUMNS, filter
        );

        let rows: Vec<MenuItemRow> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error listing menu items: {}", e);
                DomainError::Store(e.to_string())
            })?;

        debug!("Loaded {} menu items (include_inactive={})", rows.len(), include_inactive);
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<MenuItem>, DomainError> {
        let sql = format!("SELECT {} FROM menu_items WHERE id = $1", MENU_ITEM_COLUMNS);

        let row: Option<MenuItemRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error finding menu item by id: {}", e);
                DomainError::Store(e.to_string())
            })?;

        Ok(row.map(Into::into))
    }

    async fn update(&self, id: &Uuid, update: &MenuItemUpdate) -> Result<Option<MenuItem>, DomainError> {
        let sql = format!(
            r#"
            UPDATE menu_items
            SET
                is_active = COALESCE($2, is_active),
                modifier_config = COALESCE($3, modifier_config)
            WHERE id = $1
            RETURNING {}
            "#,
            MENU_ITEM_COLUMNS
        );

        let row: Option<MenuItemRow> = sqlx::query_as(&sql)
            .bind(id)
            .bind(update.is_active)
            .bind(update.modifier_config.as_ref().map(Json))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error updating menu item: {}", e);
                DomainError::Store(e.to_string())
            })?;

        if row.is_some() {
            info!("Menu item row updated: {}", id);
        }
        Ok(row.map(Into::into))
    }
}
