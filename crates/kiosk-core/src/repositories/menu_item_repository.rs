//! Menu item repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{MenuItem, MenuItemUpdate};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    /// Rows ordered by `display_order`. With `include_inactive = false` the
    /// store itself filters on `is_active = true`.
    async fn list(&self, include_inactive: bool) -> Result<Vec<MenuItem>, DomainError>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<MenuItem>, DomainError>;
    /// Applies only the provided fields. `None` when the id does not resolve.
    async fn update(&self, id: &Uuid, update: &MenuItemUpdate) -> Result<Option<MenuItem>, DomainError>;
}
