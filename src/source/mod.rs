//! Record source collaborators.
//!
//! This module defines the [`RecordSource`] trait the pipeline fetches
//! records through, plus the validating in-memory implementation used by
//! the HTTP API and tests. A remote store (REST backend, database) plugs
//! in by implementing the trait.

mod memory;

pub use memory::InMemoryRecordSource;

use crate::error::ReportResult;
use crate::models::{FilterCriteria, OwnerSelector, Period, ProductionRecord};
use crate::report::filter_records;

/// A collaborator that supplies production records.
///
/// Only [`RecordSource::all_records`] is required; the narrowed queries
/// default to fetching everything and filtering locally, and sources
/// that can narrow server-side override them.
pub trait RecordSource {
    /// Fetches every record the source holds.
    fn all_records(&self) -> ReportResult<Vec<ProductionRecord>>;

    /// Fetches records completed in the given month.
    fn records_by_month(&self, year: i32, month: u32) -> ReportResult<Vec<ProductionRecord>> {
        let criteria = FilterCriteria::new(OwnerSelector::All, Period::month(year, month)?);
        Ok(filter_records(&self.all_records()?, &criteria))
    }

    /// Fetches records completed in the given year.
    fn records_by_year(&self, year: i32) -> ReportResult<Vec<ProductionRecord>> {
        let criteria = FilterCriteria::new(OwnerSelector::All, Period::year(year));
        Ok(filter_records(&self.all_records()?, &criteria))
    }

    /// Fetches one owner's records completed in the given month.
    fn records_by_owner_and_month(
        &self,
        owner_id: &str,
        year: i32,
        month: u32,
    ) -> ReportResult<Vec<ProductionRecord>> {
        let criteria = FilterCriteria::new(
            OwnerSelector::Id(owner_id.to_string()),
            Period::month(year, month)?,
        );
        Ok(filter_records(&self.all_records()?, &criteria))
    }

    /// Fetches one owner's records completed in the given year.
    fn records_by_owner_and_year(
        &self,
        owner_id: &str,
        year: i32,
    ) -> ReportResult<Vec<ProductionRecord>> {
        let criteria = FilterCriteria::new(
            OwnerSelector::Id(owner_id.to_string()),
            Period::year(year),
        );
        Ok(filter_records(&self.all_records()?, &criteria))
    }
}
