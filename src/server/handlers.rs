//! HTTP handlers for order operations

use axum::http::StatusCode;
use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::TrackerConfig;
use crate::core::draft::OrderDraft;
use crate::core::error::{OrderError, RequestError, TrackerError};
use crate::core::order::{Order, OrderId};
use crate::core::service::OrderService;
use crate::core::stage::STAGE_COUNT;
use crate::core::staff::StaffMember;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn OrderService>,
    pub config: Arc<TrackerConfig>,
}

impl AppState {
    /// Resolve the acting user for a request
    ///
    /// An explicit `actor_id` wins; otherwise the configured acting user is
    /// attributed.
    pub fn resolve_actor(&self, actor_id: Option<u32>) -> u32 {
        actor_id.unwrap_or(self.config.acting_staff_id)
    }
}

/// Response for list endpoints
#[derive(Debug, Serialize)]
pub struct ListOrdersResponse {
    pub orders: Vec<Order>,
    pub count: usize,
}

impl From<Vec<Order>> for ListOrdersResponse {
    fn from(orders: Vec<Order>) -> Self {
        let count = orders.len();
        Self { orders, count }
    }
}

/// Request body for creating an order
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(flatten)]
    pub draft: OrderDraft,

    /// Staff member performing the creation; defaults to the configured
    /// acting user
    #[serde(default)]
    pub actor_id: Option<u32>,
}

/// Request body for toggling a stage
#[derive(Debug, Default, Deserialize)]
pub struct ToggleStageRequest {
    #[serde(default)]
    pub actor_id: Option<u32>,
}

/// Response for the staff roster endpoint
#[derive(Debug, Serialize)]
pub struct StaffResponse {
    pub staff: Vec<StaffMember>,
    pub count: usize,
}

fn parse_order_id(raw: &str) -> Result<OrderId, TrackerError> {
    raw.parse().map_err(|_| {
        RequestError::InvalidPath {
            path: raw.to_string(),
            message: "expected an order id like P001".to_string(),
        }
        .into()
    })
}

/// List all orders
///
/// GET /orders
pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<ListOrdersResponse>, TrackerError> {
    let orders = state.service.list().await?;
    Ok(Json(orders.into()))
}

/// Get a single order
///
/// GET /orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Order>, TrackerError> {
    let id = parse_order_id(&id)?;
    let order = state
        .service
        .get(id)
        .await?
        .ok_or(OrderError::NotFound { id })?;
    Ok(Json(order))
}

/// Create a new order from a draft
///
/// POST /orders
pub async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<Order>), TrackerError> {
    let actor_id = state.resolve_actor(request.actor_id);
    let order = state.service.create(request.draft, actor_id).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// Flip a stage's completion flag
///
/// POST /orders/{id}/stages/{index}/toggle
///
/// The body may carry an `actor_id`; without one the configured acting
/// user is attributed.
pub async fn toggle_stage(
    State(state): State<AppState>,
    Path((id, index)): Path<(String, usize)>,
    Json(request): Json<ToggleStageRequest>,
) -> Result<Json<Order>, TrackerError> {
    let id = parse_order_id(&id)?;
    if index >= STAGE_COUNT {
        return Err(OrderError::StageOutOfRange { index }.into());
    }

    let actor_id = state.resolve_actor(request.actor_id);
    let order = state
        .service
        .toggle_stage(id, index, actor_id)
        .await?
        .ok_or(OrderError::NotFound { id })?;
    Ok(Json(order))
}

/// Orders whose Shipping stage is not completed
///
/// GET /orders/in-progress
pub async fn list_in_progress(
    State(state): State<AppState>,
) -> Result<Json<ListOrdersResponse>, TrackerError> {
    let orders = state.service.in_progress().await?;
    Ok(Json(orders.into()))
}

/// Capped, most-recently-shipped-first view
///
/// GET /orders/recently-shipped
pub async fn list_recently_shipped(
    State(state): State<AppState>,
) -> Result<Json<ListOrdersResponse>, TrackerError> {
    let orders = state.service.recently_shipped().await?;
    Ok(Json(orders.into()))
}

/// The configured staff roster
///
/// GET /staff
pub async fn list_staff(
    State(state): State<AppState>,
) -> Result<Json<StaffResponse>, TrackerError> {
    let staff = state.service.staff().await?;
    let count = staff.len();
    Ok(Json(StaffResponse { staff, count }))
}

/// Bulk-import orders from an uploaded file
///
/// POST /orders/import
///
/// The documented sheet columns are `name` (required), `client` (required),
/// `quantity`, `manager_id`, `print_kind` and `delivery_kind`. No parsing
/// is performed: the endpoint answers 501 until an import pipeline exists.
pub async fn import_orders(
    State(_state): State<AppState>,
) -> Result<Json<serde_json::Value>, TrackerError> {
    tracing::warn!("file import requested but not implemented");
    Err(RequestError::NotImplemented {
        feature: "File import".to_string(),
    }
    .into())
}
