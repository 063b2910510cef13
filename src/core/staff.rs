//! Staff roster types
//!
//! The roster is static at runtime: members are loaded from configuration
//! and never created or destroyed while the service runs.

use serde::{Deserialize, Serialize};

/// A staff member that can own orders and be attributed to stage updates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Unique identifier within the roster
    pub id: u32,

    /// Display name
    pub name: String,

    /// Department the member belongs to
    pub department: String,
}

impl StaffMember {
    pub fn new(id: u32, name: impl Into<String>, department: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            department: department.into(),
        }
    }
}

/// Read-only lookup over the configured staff members
#[derive(Debug, Clone)]
pub struct Roster {
    members: Vec<StaffMember>,
}

impl Roster {
    pub fn new(members: Vec<StaffMember>) -> Self {
        Self { members }
    }

    /// Find a member by id
    pub fn get(&self, id: u32) -> Option<&StaffMember> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    pub fn members(&self) -> &[StaffMember] {
        &self.members
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
