//! Service trait for order operations
//!
//! Implementations provide the order-tracking operations behind an async,
//! object-safe interface. The rest of the service is agnostic to how the
//! state is held; the only shipped backend is the in-memory one.

use async_trait::async_trait;

use crate::core::draft::OrderDraft;
use crate::core::error::TrackerResult;
use crate::core::order::{Order, OrderId};
use crate::core::staff::StaffMember;

/// Service trait for managing production orders
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Validate a draft and create a new order
    ///
    /// The acting user is stamped on the Intake stage and becomes the owner
    /// when the draft names none.
    async fn create(&self, draft: OrderDraft, actor_id: u32) -> TrackerResult<Order>;

    /// Get an order by id
    async fn get(&self, id: OrderId) -> TrackerResult<Option<Order>>;

    /// List all orders
    async fn list(&self) -> TrackerResult<Vec<Order>>;

    /// Orders whose Shipping stage is not completed
    async fn in_progress(&self) -> TrackerResult<Vec<Order>>;

    /// Capped, most-recently-shipped-first view
    async fn recently_shipped(&self) -> TrackerResult<Vec<Order>>;

    /// Flip a stage's completion flag
    ///
    /// Returns `Ok(None)` when the id matches nothing (tolerated no-op).
    async fn toggle_stage(
        &self,
        id: OrderId,
        stage_index: usize,
        actor_id: u32,
    ) -> TrackerResult<Option<Order>>;

    /// The configured staff roster
    async fn staff(&self) -> TrackerResult<Vec<StaffMember>>;
}
