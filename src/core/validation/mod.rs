//! Validation system for order drafts
//!
//! This module provides reusable field validators applied to incoming JSON
//! values before any state mutation happens. Validation failures are
//! accumulated per field rather than failing on the first error.

pub mod validators;

pub use validators::{int_in_range, required_text};
