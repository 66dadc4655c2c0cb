//! Reads the order log and hands it to the aggregator

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::DashboardStats;
use crate::error::DomainError;
use crate::repositories::OrderRepository;
use crate::services::stats_aggregator;

pub struct StatsService {
    orders: Arc<dyn OrderRepository>,
}

impl StatsService {
    pub fn new(orders: Arc<dyn OrderRepository>) -> Self {
        Self { orders }
    }

    /// Fresh dashboard over everything in the log at read time.
    pub async fn dashboard(&self, now: DateTime<Utc>) -> Result<DashboardStats, DomainError> {
        let orders = self.orders.list_all().await?;
        debug!("Aggregating stats over {} orders", orders.len());
        Ok(stats_aggregator::aggregate(&orders, now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Order, OrderStatus};
    use crate::repositories::MockOrderRepository;

    #[tokio::test]
    async fn test_dashboard_reads_log_each_call() {
        let now = Utc::now();
        let mut repo = MockOrderRepository::new();
        repo.expect_list_all()
            .times(2)
            .returning(move || Ok(vec![Order::new("Ana", "Latte", OrderStatus::Ready, now)]));

        let service = StatsService::new(Arc::new(repo));
        let first = service.dashboard(now).await.unwrap();
        let second = service.dashboard(now).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.today.ready, 1);
    }

    #[tokio::test]
    async fn test_store_failure_is_propagated() {
        let mut repo = MockOrderRepository::new();
        repo.expect_list_all()
            .returning(|| Err(DomainError::Store("connection reset".to_string())));

        let err = StatsService::new(Arc::new(repo))
            .dashboard(Utc::now())
            .await
            .unwrap_err();

        assert!(err.is_transient());
    }
}
