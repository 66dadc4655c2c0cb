// ============================================================================
// Kiosk Infrastructure - PostgreSQL Order Log Repository
// File: crates/kiosk-infrastructure/src/database/postgres/order_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{types::Json, FromRow, PgPool};
use tracing::{debug, error};
use uuid::Uuid;

use kiosk_core::domain::{Order, OrderModifiers};
use kiosk_core::error::DomainError;
use kiosk_core::repositories::OrderRepository;

pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct OrderRow {
    pub id: Uuid,
    pub customer_name: String,
    pub item: String,
    pub modifiers: Option<Json<OrderModifiers>>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Order {
            id: row.id,
            customer_name: row.customer_name,
            item: row.item,
            modifiers: row.modifiers.map(|Json(m)| m).unwrap_or_default(),
            status: row.status,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn list_all(&self) -> Result<Vec<Order>, DomainError> {
        // Insertion order matters for tie-breaking in the drink ranking.
        let rows: Vec<OrderRow> = sqlx::query_as(
            r#"
            SELECT id, customer_name, item, modifiers, status, created_at
            FROM orders
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error loading order log: {}", e);
            DomainError::Store(e.to_string())
        })?;

        debug!("Loaded {} orders", rows.len());
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
