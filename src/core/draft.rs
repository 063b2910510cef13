//! Order creation drafts
//!
//! A draft is the ephemeral form state for a new order. Text fields and the
//! quantity arrive as raw JSON values so that validation (not
//! deserialization) decides whether the input is acceptable: a missing name
//! or a quantity sent as `"many"` must surface as a field error, never as a
//! malformed-request failure.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::error::{FieldValidationError, ValidationError};
use crate::core::order::{DeliveryKind, PrintKind};
use crate::core::validation::validators::{int_in_range, parse_int, required_text};

/// Inclusive quantity bounds for an order
pub const QUANTITY_MIN: i64 = 1;
pub const QUANTITY_MAX: i64 = 10_000;

fn default_quantity() -> Value {
    Value::from(QUANTITY_MIN)
}

/// Ephemeral form state for creating a new order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDraft {
    #[serde(default)]
    pub name: Value,

    #[serde(default)]
    pub client: Value,

    /// Quantity as entered: a JSON number or a numeric string
    #[serde(default = "default_quantity")]
    pub quantity: Value,

    #[serde(default)]
    pub print_kind: PrintKind,

    #[serde(default)]
    pub delivery_kind: DeliveryKind,

    /// Owner of the order; defaults to the acting user when absent
    #[serde(default)]
    pub owner_id: Option<u32>,
}

impl OrderDraft {
    /// Convenience constructor for programmatic use
    pub fn new(name: impl Into<String>, client: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: Value::from(name.into()),
            client: Value::from(client.into()),
            quantity: Value::from(quantity),
            print_kind: PrintKind::default(),
            delivery_kind: DeliveryKind::default(),
            owner_id: None,
        }
    }

    pub fn with_print_kind(mut self, kind: PrintKind) -> Self {
        self.print_kind = kind;
        self
    }

    pub fn with_delivery_kind(mut self, kind: DeliveryKind) -> Self {
        self.delivery_kind = kind;
        self
    }

    pub fn with_owner(mut self, owner_id: u32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    /// Validate the draft and extract its typed fields
    ///
    /// All validators run; failures are accumulated per field so the caller
    /// sees every problem at once. Nothing is mutated on failure.
    pub fn validate(&self) -> Result<ValidatedDraft, ValidationError> {
        let mut errors = Vec::new();

        let text = required_text();
        if let Err(message) = text("name", &self.name) {
            errors.push(FieldValidationError {
                field: "name".to_string(),
                message,
            });
        }
        if let Err(message) = text("client", &self.client) {
            errors.push(FieldValidationError {
                field: "client".to_string(),
                message,
            });
        }

        let quantity_check = int_in_range(QUANTITY_MIN, QUANTITY_MAX);
        if let Err(message) = quantity_check("quantity", &self.quantity) {
            errors.push(FieldValidationError {
                field: "quantity".to_string(),
                message,
            });
        }

        if !errors.is_empty() {
            return Err(ValidationError::FieldErrors(errors));
        }

        Ok(ValidatedDraft {
            name: self.name.as_str().unwrap_or_default().trim().to_string(),
            client: self.client.as_str().unwrap_or_default().trim().to_string(),
            quantity: parse_int(&self.quantity).unwrap_or(QUANTITY_MIN) as u32,
            print_kind: self.print_kind,
            delivery_kind: self.delivery_kind,
            owner_id: self.owner_id,
        })
    }
}

/// A draft that passed validation, with typed fields
#[derive(Debug, Clone)]
pub struct ValidatedDraft {
    pub name: String,
    pub client: String,
    pub quantity: u32,
    pub print_kind: PrintKind,
    pub delivery_kind: DeliveryKind,
    pub owner_id: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_draft() {
        let draft = OrderDraft::new("Tote Bag", "Acme", 50);
        let valid = draft.validate().unwrap();
        assert_eq!(valid.name, "Tote Bag");
        assert_eq!(valid.client, "Acme");
        assert_eq!(valid.quantity, 50);
    }

    #[test]
    fn test_missing_name_and_client() {
        let draft = OrderDraft {
            name: Value::Null,
            client: json!(""),
            quantity: json!(10),
            print_kind: PrintKind::default(),
            delivery_kind: DeliveryKind::default(),
            owner_id: None,
        };
        let err = draft.validate().unwrap_err();
        match err {
            ValidationError::FieldErrors(errors) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["name", "client"]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_quantity_boundaries() {
        assert!(OrderDraft::new("Mug", "Acme", 1).validate().is_ok());
        assert!(OrderDraft::new("Mug", "Acme", 10_000).validate().is_ok());
        assert!(OrderDraft::new("Mug", "Acme", 0).validate().is_err());
        assert!(OrderDraft::new("Mug", "Acme", 10_001).validate().is_err());
    }

    #[test]
    fn test_quantity_as_numeric_string() {
        let mut draft = OrderDraft::new("Mug", "Acme", 1);
        draft.quantity = json!("250");
        assert_eq!(draft.validate().unwrap().quantity, 250);
    }

    #[test]
    fn test_non_numeric_quantity_rejected() {
        let mut draft = OrderDraft::new("Mug", "Acme", 1);
        draft.quantity = json!("a lot");
        let err = draft.validate().unwrap_err();
        assert!(err.to_string().contains("quantity"));
    }

    #[test]
    fn test_draft_deserializes_with_defaults() {
        let draft: OrderDraft = serde_json::from_str(r#"{"name":"Pen","client":"Acme"}"#).unwrap();
        let valid = draft.validate().unwrap();
        assert_eq!(valid.quantity, 1);
        assert_eq!(valid.print_kind, PrintKind::Laser);
        assert_eq!(valid.delivery_kind, DeliveryKind::Courier);
        assert!(valid.owner_id.is_none());
    }
}
