//! In-memory record source.
//!
//! Validates records at the ingestion boundary so that filter and group
//! logic never has to defend against malformed data: an empty record id,
//! an empty owner reference, or a completion timestamp earlier than the
//! start timestamp is rejected when the source is built.

use crate::error::{ReportError, ReportResult};
use crate::models::ProductionRecord;

use super::RecordSource;

/// A validating in-memory record source.
///
/// # Example
///
/// ```
/// use report_engine::models::{Owner, ProductionRecord};
/// use report_engine::source::{InMemoryRecordSource, RecordSource};
/// use chrono::NaiveDateTime;
///
/// let record = ProductionRecord {
///     id: "rec_001".to_string(),
///     owner: Owner::new("emp_001", "Maria Santos"),
///     category: "Sewing".to_string(),
///     started_at: NaiveDateTime::parse_from_str("2024-03-01 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     completed_at: NaiveDateTime::parse_from_str("2024-03-05 16:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// };
///
/// let source = InMemoryRecordSource::new(vec![record]).unwrap();
/// assert_eq!(source.all_records().unwrap().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryRecordSource {
    records: Vec<ProductionRecord>,
}

impl InMemoryRecordSource {
    /// Builds a source from records, validating each one.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidRecord`] for the first record that
    /// fails validation.
    pub fn new(records: Vec<ProductionRecord>) -> ReportResult<Self> {
        for record in &records {
            validate_record(record)?;
        }
        Ok(Self { records })
    }

    /// Returns the number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the source holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordSource for InMemoryRecordSource {
    fn all_records(&self) -> ReportResult<Vec<ProductionRecord>> {
        Ok(self.records.clone())
    }
}

/// Rejects records that would poison filtering or grouping downstream.
fn validate_record(record: &ProductionRecord) -> ReportResult<()> {
    if record.id.is_empty() {
        return Err(ReportError::InvalidRecord {
            record_id: "<unknown>".to_string(),
            message: "record id is empty".to_string(),
        });
    }
    if record.owner.id.is_empty() {
        return Err(ReportError::InvalidRecord {
            record_id: record.id.clone(),
            message: "owner reference is empty".to_string(),
        });
    }
    if record.completed_at < record.started_at {
        return Err(ReportError::InvalidRecord {
            record_id: record.id.clone(),
            message: "completed before started".to_string(),
        });
    }
    Ok(())
}
