// ============================================================================
// Kiosk Infrastructure - PostgreSQL Modifier Repository
// File: crates/kiosk-infrastructure/src/database/postgres/modifier_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{error, info};
use uuid::Uuid;

use kiosk_core::domain::{Modifier, ModifierChanges, NewModifier};
use kiosk_core::error::DomainError;
use kiosk_core::repositories::ModifierRepository;
use kiosk_shared::new_id;

pub struct PgModifierRepository {
    pool: PgPool,
}

impl PgModifierRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ModifierRow {
    pub id: Uuid,
    pub category: String,
    pub option: String,
    pub is_active: bool,
    pub display_order: i32,
}

impl From<ModifierRow> for Modifier {
    fn from(row: ModifierRow) -> Self {
        Modifier {
            id: row.id,
            category: row.category,
            option: row.option,
            is_active: row.is_active,
            display_order: row.display_order,
        }
    }
}

const MODIFIER_COLUMNS: &str = r#"id, category, "option", is_active, display_order"#;

fn store_error(context: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", context, e);
    DomainError::Store(e.to_string())
}

/// The case-insensitive unique index backs up the service-level duplicate check.
fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}

#[async_trait]
impl ModifierRepository for PgModifierRepository {
    async fn list(&self, include_inactive: bool) -> Result<Vec<Modifier>, DomainError> {
        let filter = if include_inactive { "" } else { "WHERE is_active = TRUE" };
        let sql = format!(
            "SELECT {} FROM modifiers {} ORDER BY category, display_order",
            MODIFIER_COLUMNS, filter
        );

        let rows: Vec<ModifierRow> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| store_error("listing modifiers", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Modifier>, DomainError> {
        let sql = format!(
            "SELECT {} FROM modifiers WHERE category = $1 ORDER BY display_order",
            MODIFIER_COLUMNS
        );

        let rows: Vec<ModifierRow> = sqlx::query_as(&sql)
            .bind(category)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| store_error("listing modifiers by category", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Modifier>, DomainError> {
        let sql = format!("SELECT {} FROM modifiers WHERE id = $1", MODIFIER_COLUMNS);

        let row: Option<ModifierRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_error("finding modifier by id", e))?;

        Ok(row.map(Into::into))
    }

    async fn max_display_order(&self, category: &str) -> Result<Option<i32>, DomainError> {
        sqlx::query_scalar::<_, Option<i32>>(
            "SELECT MAX(display_order) FROM modifiers WHERE category = $1",
        )
        .bind(category)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| store_error("reading max display order", e))
    }

    async fn insert(&self, modifier: &NewModifier) -> Result<Modifier, DomainError> {
        let sql = format!(
            r#"
            INSERT INTO modifiers (id, category, "option", is_active, display_order)
            VALUES ($1, $2, $3, TRUE, $4)
            RETURNING {}
            "#,
            MODIFIER_COLUMNS
        );

        let row: ModifierRow = sqlx::query_as(&sql)
            .bind(new_id())
            .bind(&modifier.category)
            .bind(&modifier.option)
            .bind(modifier.display_order)
            .fetch_one(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                if is_unique_violation(&e) {
                    DomainError::Duplicate {
                        category: modifier.category.clone(),
                        option: modifier.option.clone(),
                    }
                } else {
                    store_error("creating modifier", e)
                }
            })?;

        info!("Modifier row inserted: {}", row.id);
        Ok(row.into())
    }

    async fn update(&self, id: &Uuid, changes: &ModifierChanges) -> Result<Option<Modifier>, DomainError> {
        let sql = format!(
            r#"
            UPDATE modifiers
            SET
                "option" = COALESCE($2, "option"),
                is_active = COALESCE($3, is_active)
            WHERE id = $1
            RETURNING {}
            "#,
            MODIFIER_COLUMNS
        );

        let result: Result<Option<ModifierRow>, sqlx::Error> = sqlx::query_as(&sql)
            .bind(id)
            .bind(changes.option.as_deref())
            .bind(changes.is_active)
            .fetch_optional(&self.pool)
            .await;

        match result {
            Ok(row) => Ok(row.map(Into::into)),
            // Only a rename can trip the unique index; report it against the row's category.
            Err(e) if is_unique_violation(&e) => {
                let category = self
                    .find_by_id(id)
                    .await?
                    .map(|current| current.category)
                    .unwrap_or_default();
                Err(DomainError::Duplicate {
                    category,
                    option: changes.option.clone().unwrap_or_default(),
                })
            }
            Err(e) => Err(store_error("updating modifier", e)),
        }
    }

    async fn categories(&self) -> Result<Vec<String>, DomainError> {
        sqlx::query_scalar::<_, String>("SELECT DISTINCT category FROM modifiers ORDER BY category")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| store_error("listing modifier categories", e))
    }
}
