//! Append-only order log held in memory.

use std::sync::RwLock;

use async_trait::async_trait;

use kiosk_core::domain::Order;
use kiosk_core::error::DomainError;
use kiosk_core::repositories::OrderRepository;

use super::{read, write};

#[derive(Default)]
pub struct InMemoryOrderLog {
    orders: RwLock<Vec<Order>>,
}

impl InMemoryOrderLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orders(orders: Vec<Order>) -> Self {
        Self {
            orders: RwLock::new(orders),
        }
    }

    pub fn append(&self, order: Order) -> Result<(), DomainError> {
        write(&self.orders)?.push(order);
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderLog {
    async fn list_all(&self) -> Result<Vec<Order>, DomainError> {
        Ok(read(&self.orders)?.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use kiosk_core::domain::OrderStatus;
    use kiosk_core::services::aggregate;

    #[tokio::test]
    async fn test_appended_orders_feed_the_dashboard() {
        let now = Utc::now();
        let log = InMemoryOrderLog::with_orders(crate::memory::demo_orders(now));
        log.append(Order::new("Noor", "Latte", OrderStatus::Placed, now))
            .unwrap();

        let orders = log.list_all().await.unwrap();
        assert_eq!(orders.len(), 6);

        let stats = aggregate(&orders, now);
        assert_eq!(stats.all_time.total, 6);
        assert_eq!(stats.today.total, 4);
        assert_eq!(stats.popular_drinks[0].name, "Latte");
        assert_eq!(stats.popular_drinks[0].count, 3);
    }
}
