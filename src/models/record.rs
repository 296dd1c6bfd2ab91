//! Production record model.
//!
//! This module defines the ProductionRecord struct representing a single
//! accomplishment entry in the garment production system.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::Owner;

/// A single accomplishment entry with owner, category, and two timestamps.
///
/// Records are owned by the remote data store and treated as immutable
/// once fetched. Period matching uses the completion timestamp only; the
/// start timestamp exists for display in detail tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionRecord {
    /// Unique identifier for the record.
    pub id: String,
    /// The employee this record is attributed to.
    pub owner: Owner,
    /// Categorical label (e.g., "Sewing", "Cutting").
    pub category: String,
    /// When work on the record started.
    pub started_at: NaiveDateTime,
    /// When work on the record was completed.
    pub completed_at: NaiveDateTime,
}

impl ProductionRecord {
    /// Returns the calendar date the record was completed on.
    ///
    /// This is the date used for all period matching and for document
    /// formatting; the time-of-day component is never consulted.
    ///
    /// # Examples
    ///
    /// ```
    /// use report_engine::models::{Owner, ProductionRecord};
    /// use chrono::{NaiveDate, NaiveDateTime};
    ///
    /// let record = ProductionRecord {
    ///     id: "rec_001".to_string(),
    ///     owner: Owner::new("emp_001", "Maria Santos"),
    ///     category: "Sewing".to_string(),
    ///     started_at: NaiveDateTime::parse_from_str("2024-03-10 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     completed_at: NaiveDateTime::parse_from_str("2024-03-12 16:30:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    /// };
    /// assert_eq!(record.completion_date(), NaiveDate::from_ymd_opt(2024, 3, 12).unwrap());
    /// ```
    pub fn completion_date(&self) -> NaiveDate {
        self.completed_at.date()
    }
}
