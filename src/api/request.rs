//! Request types for the Accomplishment Report Engine API.
//!
//! This module defines the JSON request structures for the `/report`
//! endpoint and their conversion into domain types. Criteria validation
//! happens here, at the boundary, so the pipeline only ever sees
//! well-formed criteria.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};
use crate::models::{FilterCriteria, Owner, OwnerSelector, Period, ProductionRecord};

/// Request body for the `/report` endpoint.
///
/// Carries the records to report over together with the filter criteria.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// The production records to report over.
    pub records: Vec<RecordRequest>,
    /// The filter criteria for this report.
    pub criteria: CriteriaRequest,
}

/// A production record in a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordRequest {
    /// Unique identifier for the record.
    pub id: String,
    /// The employee the record is attributed to.
    pub owner: OwnerRequest,
    /// Categorical label (e.g., "Sewing", "Cutting").
    pub category: String,
    /// When work on the record started.
    pub started_at: NaiveDateTime,
    /// When work on the record was completed.
    pub completed_at: NaiveDateTime,
}

/// An owner reference in a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerRequest {
    /// Unique identifier for the owner.
    pub id: String,
    /// Display name used in report documents.
    pub name: String,
}

/// The period mode of a criteria request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodModeRequest {
    /// Narrow to a specific month of the target year.
    Month,
    /// Cover the entire target year.
    Year,
}

/// Filter criteria in a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriteriaRequest {
    /// The owner scope: the sentinel `"all"` or an exact owner id.
    pub owner: String,
    /// Whether the period is a month or a whole year.
    pub mode: PeriodModeRequest,
    /// The target month (1–12); required when mode is `month`.
    #[serde(default)]
    pub month: Option<u32>,
    /// The four-digit target year.
    pub year: i32,
}

impl CriteriaRequest {
    /// Validates the request into domain criteria.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidCriteria`] when the month is missing
    /// in month mode or outside 1–12.
    pub fn into_criteria(self) -> ReportResult<FilterCriteria> {
        let period = match self.mode {
            PeriodModeRequest::Month => {
                let month = self.month.ok_or_else(|| ReportError::InvalidCriteria {
                    message: "month is required when mode is \"month\"".to_string(),
                })?;
                Period::month(self.year, month)?
            }
            PeriodModeRequest::Year => Period::year(self.year),
        };

        Ok(FilterCriteria::new(OwnerSelector::from(self.owner), period))
    }
}

impl From<OwnerRequest> for Owner {
    fn from(req: OwnerRequest) -> Self {
        Owner {
            id: req.id,
            name: req.name,
        }
    }
}

impl From<RecordRequest> for ProductionRecord {
    fn from(req: RecordRequest) -> Self {
        ProductionRecord {
            id: req.id,
            owner: req.owner.into(),
            category: req.category,
            started_at: req.started_at,
            completed_at: req.completed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_report_request() {
        let json = r#"{
            "records": [
                {
                    "id": "rec_001",
                    "owner": {"id": "emp_001", "name": "Maria Santos"},
                    "category": "Sewing",
                    "started_at": "2024-03-01T08:00:00",
                    "completed_at": "2024-03-05T16:00:00"
                }
            ],
            "criteria": {
                "owner": "all",
                "mode": "month",
                "month": 3,
                "year": 2024
            }
        }"#;

        let request: ReportRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.records.len(), 1);
        assert_eq!(request.records[0].id, "rec_001");
        assert_eq!(request.criteria.mode, PeriodModeRequest::Month);
        assert_eq!(request.criteria.month, Some(3));
    }

    #[test]
    fn test_criteria_month_mode_requires_month() {
        let criteria = CriteriaRequest {
            owner: "all".to_string(),
            mode: PeriodModeRequest::Month,
            month: None,
            year: 2024,
        };
        assert!(matches!(
            criteria.into_criteria(),
            Err(ReportError::InvalidCriteria { .. })
        ));
    }

    #[test]
    fn test_criteria_year_mode_ignores_month() {
        let criteria = CriteriaRequest {
            owner: "emp_001".to_string(),
            mode: PeriodModeRequest::Year,
            month: None,
            year: 2024,
        };
        let domain = criteria.into_criteria().unwrap();
        assert_eq!(domain.owner, OwnerSelector::Id("emp_001".to_string()));
        assert_eq!(domain.period, Period::year(2024));
    }

    #[test]
    fn test_criteria_rejects_out_of_range_month() {
        let criteria = CriteriaRequest {
            owner: "all".to_string(),
            mode: PeriodModeRequest::Month,
            month: Some(13),
            year: 2024,
        };
        assert!(criteria.into_criteria().is_err());
    }

    #[test]
    fn test_owner_sentinel_converts_to_all() {
        let criteria = CriteriaRequest {
            owner: "all".to_string(),
            mode: PeriodModeRequest::Year,
            month: None,
            year: 2024,
        };
        let domain = criteria.into_criteria().unwrap();
        assert_eq!(domain.owner, OwnerSelector::All);
    }

    #[test]
    fn test_record_conversion() {
        let req = RecordRequest {
            id: "rec_001".to_string(),
            owner: OwnerRequest {
                id: "emp_001".to_string(),
                name: "Maria Santos".to_string(),
            },
            category: "Sewing".to_string(),
            started_at: NaiveDateTime::parse_from_str(
                "2024-03-01 08:00:00",
                "%Y-%m-%d %H:%M:%S",
            )
            .unwrap(),
            completed_at: NaiveDateTime::parse_from_str(
                "2024-03-05 16:00:00",
                "%Y-%m-%d %H:%M:%S",
            )
            .unwrap(),
        };

        let record: ProductionRecord = req.into();
        assert_eq!(record.id, "rec_001");
        assert_eq!(record.owner.name, "Maria Santos");
    }
}
