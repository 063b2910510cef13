//! Router assembly for the tracker API

use axum::{
    Json, Router,
    routing::{get, post},
};
use serde_json::{Value, json};

use crate::server::handlers::{
    AppState, create_order, get_order, import_orders, list_in_progress, list_orders,
    list_recently_shipped, list_staff, toggle_stage,
};

/// Build order routes
///
/// - GET  /orders                              - List all orders
/// - POST /orders                              - Create an order
/// - GET  /orders/in-progress                  - Orders not yet shipped
/// - GET  /orders/recently-shipped             - Capped shipped view
/// - POST /orders/import                       - File import (stub, 501)
/// - GET  /orders/{id}                         - Get a single order
/// - POST /orders/{id}/stages/{index}/toggle   - Flip a stage flag
/// - GET  /staff                               - Staff roster
pub fn build_order_routes(state: AppState) -> Router {
    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route("/orders/in-progress", get(list_in_progress))
        .route("/orders/recently-shipped", get(list_recently_shipped))
        .route("/orders/import", post(import_orders))
        .route("/orders/{id}", get(get_order))
        .route("/orders/{id}/stages/{index}/toggle", post(toggle_stage))
        .route("/staff", get(list_staff))
        .with_state(state)
}

/// Build the full application router (health + API)
pub fn build_router(state: AppState) -> Router {
    health_routes().merge(build_order_routes(state))
}

fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "promotrack"
    }))
}
