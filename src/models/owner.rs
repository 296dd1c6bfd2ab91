//! Owner model.
//!
//! This module defines the Owner struct identifying the employee a
//! production record is attributed to.

use serde::{Deserialize, Serialize};

/// The employee a production record is attributed to.
///
/// Owners are referenced by records and never mutated by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// Unique identifier for the owner.
    pub id: String,
    /// Display name used in report documents.
    pub name: String,
}

impl Owner {
    /// Creates a new owner.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
