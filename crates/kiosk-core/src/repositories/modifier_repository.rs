//! Modifier repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Modifier, ModifierChanges, NewModifier};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModifierRepository: Send + Sync {
    /// Rows ordered by `category`, then `display_order`.
    async fn list(&self, include_inactive: bool) -> Result<Vec<Modifier>, DomainError>;
    /// Every row in `category`, active or not.
    async fn list_by_category(&self, category: &str) -> Result<Vec<Modifier>, DomainError>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Modifier>, DomainError>;
    /// Highest `display_order` in `category`, `None` when it has no rows.
    async fn max_display_order(&self, category: &str) -> Result<Option<i32>, DomainError>;
    async fn insert(&self, modifier: &NewModifier) -> Result<Modifier, DomainError>;
    async fn update(&self, id: &Uuid, changes: &ModifierChanges) -> Result<Option<Modifier>, DomainError>;
    /// Distinct categories currently present in the relation.
    async fn categories(&self) -> Result<Vec<String>, DomainError>;
}
