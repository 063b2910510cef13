//! # Promotrack
//!
//! An in-memory production tracking service for promotional merchandise
//! orders. Every order moves through the same five-stage pipeline (Intake,
//! Print confirm, Printing, Packing, Shipping); the service tracks stage
//! completion, attributes every update to a staff member, and maintains a
//! capped recently-shipped view.
//!
//! ## Features
//!
//! - **Fixed pipeline**: five positional stages per order, created once and
//!   mutated in place
//! - **Attributed updates**: every completion stamp carries a date and the
//!   acting staff member
//! - **Derived views**: in-progress orders recomputed on read; recently
//!   shipped kept most-recent-first, capped at 5
//! - **Validated intake**: draft orders checked field by field before any
//!   state changes
//! - **Configuration-based roster**: staff members defined in YAML
//! - **REST API**: axum router over an async service trait
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use promotrack::prelude::*;
//!
//! let config = TrackerConfig::default_config();
//! let roster = config.roster();
//! let service = InMemoryOrderService::from_tracker(
//!     Tracker::with_orders(roster.clone(), seed_orders(&roster)),
//! );
//!
//! let order = service
//!     .create(OrderDraft::new("Tote Bag", "Acme", 50), 1)
//!     .await?;
//! service.toggle_stage(order.id, 1, 1).await?;
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Types ===
    pub use crate::core::{
        draft::{OrderDraft, QUANTITY_MAX, QUANTITY_MIN, ValidatedDraft},
        error::{
            ConfigError, ErrorResponse, FieldValidationError, OrderError, RequestError,
            StorageError, TrackerError, TrackerResult, ValidationError,
        },
        order::{DeliveryKind, Order, OrderId, PrintKind},
        service::OrderService,
        stage::{SHIPPING_STAGE, STAGE_COUNT, Stage, StageName},
        staff::{Roster, StaffMember},
        tracker::{RECENT_SHIPMENTS_CAP, Tracker, seed_orders},
    };

    // === Storage ===
    pub use crate::storage::InMemoryOrderService;

    // === Config ===
    pub use crate::config::TrackerConfig;

    // === Server ===
    pub use crate::server::{AppState, ServerBuilder, build_router};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::NaiveDate;
    pub use serde::{Deserialize, Serialize};

    // === Axum ===
    pub use axum::{
        Router,
        extract::{Path, State},
        routing::{get, post},
    };
}
