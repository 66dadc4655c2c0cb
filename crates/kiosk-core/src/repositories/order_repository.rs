//! Order log repository trait (port)

use async_trait::async_trait;

use crate::domain::Order;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// The full order log, as of the moment of the read.
    async fn list_all(&self) -> Result<Vec<Order>, DomainError>;
}
