//! The report generation pipeline.
//!
//! A single stateless pass: fetch → filter → group → render → deliver.
//! Any failure aborts the whole request and surfaces exactly one error;
//! there is no retry, partial recovery, or state across invocations.

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::InstitutionConfig;
use crate::error::ReportResult;
use crate::models::{CategoryGroup, FilterCriteria, OwnerGroup, OwnerSelector, ProductionRecord};
use crate::source::RecordSource;

use super::filter::filter_records;
use super::group::{group_by_category, group_by_owner};
use super::render::{ReportDocument, render_report};
use super::surface::{PrintSurface, deliver_to_surface};

/// The result of one successful report generation.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ReportOutcome {
    /// Unique identifier for this generation.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Number of records in the filtered subset.
    pub total_records: usize,
    /// Groups by category label, in first-seen order.
    pub category_groups: Vec<CategoryGroup>,
    /// Groups by owner, in first-seen order.
    pub owner_groups: Vec<OwnerGroup>,
    /// The rendered document that was delivered to the surface.
    pub document: ReportDocument,
}

/// Generates a report by fetching records from a source.
///
/// Period and owner narrowing is delegated to the source, then the
/// filter predicate is applied to the fetched list as well, so the
/// subset invariants hold regardless of how much narrowing the source
/// actually performed.
///
/// # Errors
///
/// Propagates source failures unchanged, refuses an empty subset with
/// [`crate::error::ReportError::NoMatchingRecords`], and surfaces
/// delivery failures from the print surface.
pub fn generate_report<R: RecordSource, S: PrintSurface>(
    source: &R,
    criteria: &FilterCriteria,
    institution: &InstitutionConfig,
    surface: &mut S,
) -> ReportResult<ReportOutcome> {
    let records = fetch_narrowed(source, criteria)?;
    generate_report_from_records(&records, criteria, institution, surface)
}

/// Generates a report from an already-fetched record list.
pub fn generate_report_from_records<S: PrintSurface>(
    records: &[ProductionRecord],
    criteria: &FilterCriteria,
    institution: &InstitutionConfig,
    surface: &mut S,
) -> ReportResult<ReportOutcome> {
    let report_id = Uuid::new_v4();
    info!(
        report_id = %report_id,
        criteria = %criteria.describe(),
        fetched = records.len(),
        "Generating report"
    );

    let subset = filter_records(records, criteria);
    if subset.is_empty() {
        warn!(
            report_id = %report_id,
            criteria = %criteria.describe(),
            "No matching records"
        );
    }

    let category_groups = group_by_category(&subset);
    let owner_groups = group_by_owner(&subset);

    let document = render_report(&subset, &category_groups, &owner_groups, criteria, institution)?;
    deliver_to_surface(surface, &document)?;

    info!(
        report_id = %report_id,
        total_records = subset.len(),
        categories = category_groups.len(),
        owners = owner_groups.len(),
        "Report delivered"
    );

    Ok(ReportOutcome {
        report_id,
        generated_at: Utc::now(),
        total_records: subset.len(),
        category_groups,
        owner_groups,
        document,
    })
}

/// Fetches records from the source using the most specific query the
/// criteria allow.
fn fetch_narrowed<R: RecordSource>(
    source: &R,
    criteria: &FilterCriteria,
) -> ReportResult<Vec<ProductionRecord>> {
    let year = criteria.period.target_year();
    match (&criteria.owner, criteria.period.target_month()) {
        (OwnerSelector::All, Some(month)) => source.records_by_month(year, month),
        (OwnerSelector::All, None) => source.records_by_year(year),
        (OwnerSelector::Id(id), Some(month)) => {
            source.records_by_owner_and_month(id, year, month)
        }
        (OwnerSelector::Id(id), None) => source.records_by_owner_and_year(id, year),
    }
}
