//! Group result models.
//!
//! This module defines the derived group structures produced by the
//! record grouper. Groups are recomputed on every report request and
//! never cached.

use serde::{Deserialize, Serialize};

use super::ProductionRecord;

/// A partition of records sharing one category label.
///
/// `count` always equals `members.len()`; both are carried so that the
/// JSON shape remains stable if member lists are later elided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryGroup {
    /// The shared category label.
    pub label: String,
    /// Number of member records.
    pub count: usize,
    /// The member records, in input order.
    pub members: Vec<ProductionRecord>,
}

/// A partition of records attributed to one owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerGroup {
    /// The shared owner id.
    pub owner_id: String,
    /// Display name, taken from the first member encountered.
    pub owner_name: String,
    /// Number of member records.
    pub count: usize,
    /// The member records, in input order.
    pub members: Vec<ProductionRecord>,
}
