//! Core module containing the domain model and state machine

pub mod draft;
pub mod error;
pub mod order;
pub mod service;
pub mod stage;
pub mod staff;
pub mod tracker;
pub mod validation;

pub use draft::{OrderDraft, QUANTITY_MAX, QUANTITY_MIN, ValidatedDraft};
pub use error::{
    ConfigError, ErrorResponse, FieldValidationError, OrderError, RequestError, StorageError,
    TrackerError, TrackerResult, ValidationError,
};
pub use order::{DeliveryKind, Order, OrderId, ParseOrderIdError, PrintKind};
pub use service::OrderService;
pub use stage::{SHIPPING_STAGE, STAGE_COUNT, Stage, StageName, new_checklist};
pub use staff::{Roster, StaffMember};
pub use tracker::{RECENT_SHIPMENTS_CAP, Tracker, seed_orders};
