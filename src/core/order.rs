//! Order model
//!
//! An order is one production/shipping unit tracked through the five-stage
//! pipeline. Order ids follow the canonical `P` + zero-padded sequence
//! format (`P001`, `P002`, ...) and are never reused.

use regex::Regex;
use serde::{Deserialize, Serialize, de};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::core::stage::{SHIPPING_STAGE, STAGE_COUNT, Stage};
use crate::core::staff::StaffMember;

static ORDER_ID_REGEX: OnceLock<Regex> = OnceLock::new();

fn order_id_regex() -> &'static Regex {
    ORDER_ID_REGEX.get_or_init(|| Regex::new(r"^P(\d{3,})$").unwrap())
}

/// Canonical order identifier (`P` + 3-digit zero-padded sequence)
///
/// The numeric suffix keeps growing past 999; the padding is a minimum
/// width, not a cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderId(u32);

impl OrderId {
    /// Build an id from its numeric suffix
    pub fn from_sequence(seq: u32) -> Self {
        Self(seq)
    }

    /// The numeric suffix of the id
    pub fn sequence(&self) -> u32 {
        self.0
    }

    /// The id following this one
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{:03}", self.0)
    }
}

/// Error returned when parsing a malformed order id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOrderIdError {
    pub value: String,
}

impl fmt::Display for ParseOrderIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid order id '{}' (expected P + zero-padded sequence, e.g. P001)",
            self.value
        )
    }
}

impl std::error::Error for ParseOrderIdError {}

impl FromStr for OrderId {
    type Err = ParseOrderIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = order_id_regex()
            .captures(s)
            .ok_or_else(|| ParseOrderIdError {
                value: s.to_string(),
            })?;
        let seq = captures[1].parse().map_err(|_| ParseOrderIdError {
            value: s.to_string(),
        })?;
        Ok(Self(seq))
    }
}

impl Serialize for OrderId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for OrderId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Print technique used for the merchandise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrintKind {
    Laser,
    Transfer,
    NoPrint,
    Screen,
    Digital,
}

impl PrintKind {
    pub fn label(&self) -> &'static str {
        match self {
            PrintKind::Laser => "Laser print",
            PrintKind::Transfer => "Transfer print",
            PrintKind::NoPrint => "No print",
            PrintKind::Screen => "Screen print",
            PrintKind::Digital => "Digital print",
        }
    }
}

impl Default for PrintKind {
    fn default() -> Self {
        PrintKind::Laser
    }
}

/// How the finished order leaves the shop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryKind {
    DirectPickup,
    Courier,
    QuickService,
}

impl DeliveryKind {
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryKind::DirectPickup => "Direct pickup",
            DeliveryKind::Courier => "Courier",
            DeliveryKind::QuickService => "Quick service",
        }
    }
}

impl Default for DeliveryKind {
    fn default() -> Self {
        DeliveryKind::Courier
    }
}

/// A production order tracked through all five stages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub name: String,
    pub client: String,
    pub quantity: u32,
    pub print_kind: PrintKind,
    pub delivery_kind: DeliveryKind,
    pub owner: StaffMember,

    /// Fixed-length checklist in canonical order
    pub stages: [Stage; STAGE_COUNT],
}

impl Order {
    /// An order is shipped iff its final (Shipping) stage is completed
    pub fn is_shipped(&self) -> bool {
        self.stages[SHIPPING_STAGE].completed
    }

    /// An order is in progress iff it has not shipped yet
    pub fn is_in_progress(&self) -> bool {
        !self.is_shipped()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_display_zero_padded() {
        assert_eq!(OrderId::from_sequence(1).to_string(), "P001");
        assert_eq!(OrderId::from_sequence(42).to_string(), "P042");
        assert_eq!(OrderId::from_sequence(999).to_string(), "P999");
        assert_eq!(OrderId::from_sequence(1000).to_string(), "P1000");
    }

    #[test]
    fn test_order_id_parse_round_trip() {
        let id: OrderId = "P002".parse().unwrap();
        assert_eq!(id.sequence(), 2);
        assert_eq!(id.to_string(), "P002");
    }

    #[test]
    fn test_order_id_parse_rejects_malformed() {
        assert!("P2".parse::<OrderId>().is_err());
        assert!("X002".parse::<OrderId>().is_err());
        assert!("P00a".parse::<OrderId>().is_err());
        assert!("".parse::<OrderId>().is_err());
    }

    #[test]
    fn test_order_id_next() {
        let id: OrderId = "P002".parse().unwrap();
        assert_eq!(id.next().to_string(), "P003");
    }

    #[test]
    fn test_order_id_serde_as_string() {
        let id = OrderId::from_sequence(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"P007\"");

        let back: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_print_kind_labels() {
        assert_eq!(PrintKind::Laser.label(), "Laser print");
        assert_eq!(PrintKind::NoPrint.label(), "No print");
    }

    #[test]
    fn test_enum_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&PrintKind::NoPrint).unwrap(),
            "\"no_print\""
        );
        assert_eq!(
            serde_json::to_string(&DeliveryKind::DirectPickup).unwrap(),
            "\"direct_pickup\""
        );
    }
}
