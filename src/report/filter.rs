//! Record filtering logic.
//!
//! This module provides the predicate-based filter that narrows a record
//! collection to one owner and one calendar period. Filtering is a pure
//! function of its inputs; no state survives between calls.

use chrono::Datelike;

use crate::models::{FilterCriteria, ProductionRecord};

/// Filters records by owner and completion period.
///
/// A record is kept when the owner selector matches its owner AND its
/// completion timestamp falls in the target year AND, for month periods,
/// in the target month. The start timestamp is never consulted.
///
/// The result preserves the relative order of the input and contains no
/// duplicated or mutated records. An empty input or non-matching criteria
/// yield an empty result, never an error; the caller decides whether an
/// empty result is reportable.
///
/// # Examples
///
/// ```
/// use report_engine::models::{FilterCriteria, Owner, OwnerSelector, Period, ProductionRecord};
/// use report_engine::report::filter_records;
/// use chrono::NaiveDateTime;
///
/// let record = ProductionRecord {
///     id: "rec_001".to_string(),
///     owner: Owner::new("emp_001", "Maria Santos"),
///     category: "Sewing".to_string(),
///     started_at: NaiveDateTime::parse_from_str("2024-03-01 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     completed_at: NaiveDateTime::parse_from_str("2024-03-05 16:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// };
/// let criteria = FilterCriteria::new(OwnerSelector::All, Period::month(2024, 3).unwrap());
///
/// let subset = filter_records(&[record.clone()], &criteria);
/// assert_eq!(subset, vec![record]);
/// ```
pub fn filter_records(
    records: &[ProductionRecord],
    criteria: &FilterCriteria,
) -> Vec<ProductionRecord> {
    records
        .iter()
        .filter(|record| matches_criteria(record, criteria))
        .cloned()
        .collect()
}

/// Returns true if a single record satisfies the owner and period predicates.
fn matches_criteria(record: &ProductionRecord, criteria: &FilterCriteria) -> bool {
    if !criteria.owner.matches(&record.owner.id) {
        return false;
    }

    let completed = record.completed_at;
    if completed.year() != criteria.period.target_year() {
        return false;
    }

    match criteria.period.target_month() {
        Some(month) => completed.month() == month,
        None => true,
    }
}
