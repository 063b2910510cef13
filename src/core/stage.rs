//! Pipeline stages
//!
//! Every order moves through the same five stages in a fixed order. Stage
//! identity is positional: the checklist is created once per order and only
//! mutated in place afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::staff::StaffMember;

/// Number of stages in the pipeline
pub const STAGE_COUNT: usize = 5;

/// Index of the final (Shipping) stage
pub const SHIPPING_STAGE: usize = STAGE_COUNT - 1;

/// The five fixed pipeline steps, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageName {
    Intake,
    PrintConfirm,
    Printing,
    Packing,
    Shipping,
}

impl StageName {
    /// Canonical stage ordering
    pub const ALL: [StageName; STAGE_COUNT] = [
        StageName::Intake,
        StageName::PrintConfirm,
        StageName::Printing,
        StageName::Packing,
        StageName::Shipping,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            StageName::Intake => "Intake",
            StageName::PrintConfirm => "Print confirm",
            StageName::Printing => "Printing",
            StageName::Packing => "Packing",
            StageName::Shipping => "Shipping",
        }
    }
}

/// One checklist step of an order
///
/// Invariant: `completed_on` and `completed_by` are `Some` if and only if
/// `completed` is true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub name: StageName,
    pub completed: bool,

    /// Date the stage was completed (date-only precision)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_on: Option<NaiveDate>,

    /// Staff member attributed to the completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_by: Option<StaffMember>,
}

impl Stage {
    /// Create an incomplete stage
    pub fn pending(name: StageName) -> Self {
        Self {
            name,
            completed: false,
            completed_on: None,
            completed_by: None,
        }
    }

    /// Create a stage already stamped as completed
    pub fn stamped(name: StageName, date: NaiveDate, by: StaffMember) -> Self {
        Self {
            name,
            completed: true,
            completed_on: Some(date),
            completed_by: Some(by),
        }
    }

    /// Mark the stage completed, stamping date and actor
    pub fn complete(&mut self, date: NaiveDate, by: StaffMember) {
        self.completed = true;
        self.completed_on = Some(date);
        self.completed_by = Some(by);
    }

    /// Mark the stage incomplete, clearing date and actor
    pub fn clear(&mut self) {
        self.completed = false;
        self.completed_on = None;
        self.completed_by = None;
    }

    /// Check the stamp invariant
    pub fn is_consistent(&self) -> bool {
        self.completed == (self.completed_on.is_some() && self.completed_by.is_some())
            && self.completed_on.is_some() == self.completed_by.is_some()
    }
}

/// Build the fresh five-stage checklist for a new order
///
/// Stage 0 (Intake) is stamped as completed; the rest are pending.
pub fn new_checklist(today: NaiveDate, intake_by: StaffMember) -> [Stage; STAGE_COUNT] {
    [
        Stage::stamped(StageName::Intake, today, intake_by),
        Stage::pending(StageName::PrintConfirm),
        Stage::pending(StageName::Printing),
        Stage::pending(StageName::Packing),
        Stage::pending(StageName::Shipping),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::staff::StaffMember;

    fn kim() -> StaffMember {
        StaffMember::new(1, "Kim", "Production")
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 25).unwrap()
    }

    #[test]
    fn test_canonical_order() {
        assert_eq!(StageName::ALL[0], StageName::Intake);
        assert_eq!(StageName::ALL[SHIPPING_STAGE], StageName::Shipping);
        assert_eq!(StageName::ALL.len(), STAGE_COUNT);
    }

    #[test]
    fn test_complete_stamps_date_and_actor() {
        let mut stage = Stage::pending(StageName::Printing);
        assert!(stage.is_consistent());

        stage.complete(today(), kim());
        assert!(stage.completed);
        assert_eq!(stage.completed_on, Some(today()));
        assert_eq!(stage.completed_by.as_ref().unwrap().id, 1);
        assert!(stage.is_consistent());
    }

    #[test]
    fn test_clear_removes_stamp() {
        let mut stage = Stage::stamped(StageName::Packing, today(), kim());
        stage.clear();
        assert!(!stage.completed);
        assert!(stage.completed_on.is_none());
        assert!(stage.completed_by.is_none());
        assert!(stage.is_consistent());
    }

    #[test]
    fn test_new_checklist_shape() {
        let stages = new_checklist(today(), kim());
        assert_eq!(stages.len(), STAGE_COUNT);
        assert!(stages[0].completed);
        assert_eq!(stages[0].name, StageName::Intake);
        for stage in &stages[1..] {
            assert!(!stage.completed);
            assert!(stage.completed_on.is_none());
            assert!(stage.completed_by.is_none());
        }
    }
}
