//! In-memory implementation of OrderService
//!
//! Wraps the synchronous [`Tracker`] state machine behind an `RwLock` so
//! handlers can share it. Mutations are serialized by the write lock; the
//! single-writer semantics of the tracker carry over unchanged.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::core::draft::OrderDraft;
use crate::core::error::{StorageError, TrackerResult};
use crate::core::order::{Order, OrderId};
use crate::core::service::OrderService;
use crate::core::staff::{Roster, StaffMember};
use crate::core::tracker::Tracker;

/// In-memory order service implementation
#[derive(Clone)]
pub struct InMemoryOrderService {
    tracker: Arc<RwLock<Tracker>>,
}

impl InMemoryOrderService {
    /// Create a service over an empty tracker
    pub fn new(roster: Roster) -> Self {
        Self::from_tracker(Tracker::new(roster))
    }

    /// Create a service over a pre-populated tracker
    pub fn from_tracker(tracker: Tracker) -> Self {
        Self {
            tracker: Arc::new(RwLock::new(tracker)),
        }
    }

    fn read(&self) -> TrackerResult<std::sync::RwLockReadGuard<'_, Tracker>> {
        self.tracker.read().map_err(|e| {
            StorageError::LockPoisoned {
                message: e.to_string(),
            }
            .into()
        })
    }

    fn write(&self) -> TrackerResult<std::sync::RwLockWriteGuard<'_, Tracker>> {
        self.tracker.write().map_err(|e| {
            StorageError::LockPoisoned {
                message: e.to_string(),
            }
            .into()
        })
    }
}

#[async_trait]
impl OrderService for InMemoryOrderService {
    async fn create(&self, draft: OrderDraft, actor_id: u32) -> TrackerResult<Order> {
        let mut tracker = self.write()?;
        let order = tracker.add_order(&draft, actor_id)?;

        tracing::info!(order_id = %order.id, client = %order.client, "order created");
        Ok(order)
    }

    async fn get(&self, id: OrderId) -> TrackerResult<Option<Order>> {
        let tracker = self.read()?;
        Ok(tracker.get(id).cloned())
    }

    async fn list(&self) -> TrackerResult<Vec<Order>> {
        let tracker = self.read()?;
        Ok(tracker.orders().to_vec())
    }

    async fn in_progress(&self) -> TrackerResult<Vec<Order>> {
        let tracker = self.read()?;
        Ok(tracker.in_progress().into_iter().cloned().collect())
    }

    async fn recently_shipped(&self) -> TrackerResult<Vec<Order>> {
        let tracker = self.read()?;
        Ok(tracker.recently_shipped().to_vec())
    }

    async fn toggle_stage(
        &self,
        id: OrderId,
        stage_index: usize,
        actor_id: u32,
    ) -> TrackerResult<Option<Order>> {
        let mut tracker = self.write()?;
        let updated = tracker.toggle_stage(id, stage_index, actor_id)?;

        if let Some(order) = &updated {
            tracing::info!(
                order_id = %order.id,
                stage = stage_index,
                completed = order.stages[stage_index].completed,
                "stage toggled"
            );
        }
        Ok(updated)
    }

    async fn staff(&self) -> TrackerResult<Vec<StaffMember>> {
        let tracker = self.read()?;
        Ok(tracker.roster().members().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::stage::SHIPPING_STAGE;
    use crate::core::tracker::seed_orders;

    fn roster() -> Roster {
        Roster::new(vec![
            StaffMember::new(1, "Kim", "Production"),
            StaffMember::new(2, "Lee", "Sales"),
            StaffMember::new(3, "Park", "Design"),
            StaffMember::new(4, "Choi", "Shipping"),
        ])
    }

    fn seeded_service() -> InMemoryOrderService {
        let roster = roster();
        let orders = seed_orders(&roster);
        InMemoryOrderService::from_tracker(Tracker::with_orders(roster, orders))
    }

    #[tokio::test]
    async fn test_create_order() {
        let service = seeded_service();

        let created = service
            .create(OrderDraft::new("Tote Bag", "Acme", 50), 1)
            .await
            .unwrap();

        assert_eq!(created.id.to_string(), "P003");
        assert_eq!(service.list().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_get_order() {
        let service = seeded_service();

        let found = service.get("P001".parse().unwrap()).await.unwrap();
        assert!(found.is_some());

        let missing = service.get("P099".parse().unwrap()).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_views() {
        let service = seeded_service();

        let in_progress = service.in_progress().await.unwrap();
        assert_eq!(in_progress.len(), 1);
        assert_eq!(in_progress[0].id.to_string(), "P002");

        let shipped = service.recently_shipped().await.unwrap();
        assert_eq!(shipped.len(), 1);
        assert_eq!(shipped[0].id.to_string(), "P001");
    }

    #[tokio::test]
    async fn test_toggle_shipping_round_trip() {
        let service = seeded_service();
        let id: OrderId = "P002".parse().unwrap();

        let updated = service.toggle_stage(id, SHIPPING_STAGE, 4).await.unwrap();
        assert!(updated.unwrap().is_shipped());
        assert_eq!(service.recently_shipped().await.unwrap().len(), 2);

        let reverted = service.toggle_stage(id, SHIPPING_STAGE, 4).await.unwrap();
        assert!(!reverted.unwrap().is_shipped());
        assert_eq!(service.recently_shipped().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_toggle_unknown_order_is_noop() {
        let service = seeded_service();
        let result = service
            .toggle_stage("P099".parse().unwrap(), 0, 1)
            .await
            .unwrap();
        assert!(result.is_none());
        assert_eq!(service.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_staff_roster() {
        let service = seeded_service();
        let staff = service.staff().await.unwrap();
        assert_eq!(staff.len(), 4);
        assert_eq!(staff[0].name, "Kim");
    }
}
