//! Order tracking state machine
//!
//! The tracker owns the in-memory order list and the derived
//! recently-shipped list. All mutations are synchronous and take the acting
//! staff member as an explicit parameter, so the state machine is testable
//! without any ambient session state.

use chrono::{NaiveDate, Utc};

use crate::core::draft::OrderDraft;
use crate::core::error::{OrderError, TrackerResult};
use crate::core::order::{DeliveryKind, Order, OrderId, PrintKind};
use crate::core::stage::{SHIPPING_STAGE, STAGE_COUNT, Stage, StageName, new_checklist};
use crate::core::staff::{Roster, StaffMember};

/// Maximum number of entries kept in the recently-shipped list
pub const RECENT_SHIPMENTS_CAP: usize = 5;

/// In-memory order tracker
///
/// `recently_shipped` mirrors orders whose Shipping stage is completed,
/// most-recently-toggled first, truncated to [`RECENT_SHIPMENTS_CAP`]
/// entries. It is maintained on every Shipping toggle rather than derived
/// on read: the toggle ordering is not recoverable from `orders` alone.
#[derive(Debug, Clone)]
pub struct Tracker {
    roster: Roster,
    orders: Vec<Order>,
    recently_shipped: Vec<Order>,
}

impl Tracker {
    /// Create an empty tracker over the given roster
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            orders: Vec::new(),
            recently_shipped: Vec::new(),
        }
    }

    /// Create a tracker pre-populated with orders
    ///
    /// The recently-shipped list is primed from orders that are already
    /// shipped, in list order, capped as usual.
    pub fn with_orders(roster: Roster, orders: Vec<Order>) -> Self {
        let recently_shipped = orders
            .iter()
            .filter(|o| o.is_shipped())
            .take(RECENT_SHIPMENTS_CAP)
            .cloned()
            .collect();

        Self {
            roster,
            orders,
            recently_shipped,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Orders whose final stage is not completed
    ///
    /// Recomputed on every read; never cached.
    pub fn in_progress(&self) -> Vec<&Order> {
        self.orders.iter().filter(|o| o.is_in_progress()).collect()
    }

    /// Capped, most-recently-shipped-first view
    pub fn recently_shipped(&self) -> &[Order] {
        &self.recently_shipped
    }

    /// Next id: highest existing numeric suffix + 1
    ///
    /// Ids are never reused; there is no delete operation, so the sequence
    /// grows monotonically.
    pub fn next_order_id(&self) -> OrderId {
        let highest = self
            .orders
            .iter()
            .map(|o| o.id.sequence())
            .max()
            .unwrap_or(0);
        OrderId::from_sequence(highest + 1)
    }

    /// Validate a draft and append the resulting order
    ///
    /// Stage 0 (Intake) is stamped as completed with today's date and the
    /// acting user; stages 1-4 start incomplete. The draft's owner defaults
    /// to the acting user. Validation failures leave the tracker untouched.
    pub fn add_order(&mut self, draft: &OrderDraft, actor_id: u32) -> TrackerResult<Order> {
        let actor = self.resolve_staff(actor_id)?;
        let valid = draft.validate()?;

        let owner = match valid.owner_id {
            Some(id) => self.resolve_staff(id)?,
            None => actor.clone(),
        };

        let order = Order {
            id: self.next_order_id(),
            name: valid.name,
            client: valid.client,
            quantity: valid.quantity,
            print_kind: valid.print_kind,
            delivery_kind: valid.delivery_kind,
            owner,
            stages: new_checklist(today(), actor),
        };

        self.orders.push(order.clone());
        Ok(order)
    }

    /// Flip a stage's completion flag
    ///
    /// Newly completed stages are stamped with today's date and the acting
    /// user; newly un-completed stages lose both. Toggling the Shipping
    /// stage keeps the recently-shipped list in sync: completion upserts
    /// the order at the front (deduplicated by id, capped), cancellation
    /// removes it.
    ///
    /// Unknown ids and out-of-range indexes are silent no-ops (`Ok(None)`).
    pub fn toggle_stage(
        &mut self,
        id: OrderId,
        stage_index: usize,
        actor_id: u32,
    ) -> TrackerResult<Option<Order>> {
        let actor = self.resolve_staff(actor_id)?;

        if stage_index >= STAGE_COUNT {
            return Ok(None);
        }

        let Some(order) = self.orders.iter_mut().find(|o| o.id == id) else {
            return Ok(None);
        };

        let stage = &mut order.stages[stage_index];
        if stage.completed {
            stage.clear();
        } else {
            stage.complete(today(), actor);
        }

        let updated = order.clone();

        if stage_index == SHIPPING_STAGE {
            if updated.is_shipped() {
                self.recently_shipped.retain(|o| o.id != id);
                self.recently_shipped.insert(0, updated.clone());
                self.recently_shipped.truncate(RECENT_SHIPMENTS_CAP);
            } else {
                self.recently_shipped.retain(|o| o.id != id);
            }
        }

        Ok(Some(updated))
    }

    fn resolve_staff(&self, id: u32) -> TrackerResult<StaffMember> {
        self.roster
            .get(id)
            .cloned()
            .ok_or_else(|| OrderError::UnknownStaff { id }.into())
    }
}

/// Current date, date-only precision
fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Demo orders matching the two samples the dashboard historically shipped
/// with: one order fully through the pipeline and one stalled at printing.
pub fn seed_orders(roster: &Roster) -> Vec<Order> {
    let Some(first) = roster.members().first() else {
        return Vec::new();
    };
    let by_id = |id: u32| roster.get(id).unwrap_or(first).clone();

    let d = |y: i32, m: u32, day: u32| NaiveDate::from_ymd_opt(y, m, day).expect("valid seed date");

    vec![
        Order {
            id: OrderId::from_sequence(1),
            name: "Corporate laptop sleeve".to_string(),
            client: "ABC Corp".to_string(),
            quantity: 500,
            print_kind: PrintKind::Laser,
            delivery_kind: DeliveryKind::Courier,
            owner: by_id(1),
            stages: [
                Stage::stamped(StageName::Intake, d(2024, 3, 25), by_id(1)),
                Stage::stamped(StageName::PrintConfirm, d(2024, 3, 26), by_id(1)),
                Stage::stamped(StageName::Printing, d(2024, 3, 27), by_id(1)),
                Stage::stamped(StageName::Packing, d(2024, 3, 28), by_id(1)),
                Stage::stamped(StageName::Shipping, d(2024, 3, 29), by_id(1)),
            ],
        },
        Order {
            id: OrderId::from_sequence(2),
            name: "Promotional umbrella".to_string(),
            client: "Samsung Electronics".to_string(),
            quantity: 200,
            print_kind: PrintKind::Transfer,
            delivery_kind: DeliveryKind::DirectPickup,
            owner: by_id(3),
            stages: [
                Stage::stamped(StageName::Intake, d(2024, 3, 24), by_id(3)),
                Stage::stamped(StageName::PrintConfirm, d(2024, 3, 26), by_id(1)),
                Stage::pending(StageName::Printing),
                Stage::pending(StageName::Packing),
                Stage::pending(StageName::Shipping),
            ],
        },
    ]
}
