//! Filter criteria model.
//!
//! This module defines the FilterCriteria passed to the report pipeline,
//! along with the owner selector and calendar period types.

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};

/// Selects which owner's records a report covers.
///
/// Serializes as the sentinel string `"all"` or as an exact owner id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OwnerSelector {
    /// Include records from every owner.
    All,
    /// Include only records attributed to the owner with this id.
    Id(String),
}

impl OwnerSelector {
    /// Returns true if the selector matches the given owner id.
    pub fn matches(&self, owner_id: &str) -> bool {
        match self {
            OwnerSelector::All => true,
            OwnerSelector::Id(id) => id == owner_id,
        }
    }
}

impl From<String> for OwnerSelector {
    fn from(value: String) -> Self {
        if value == "all" {
            OwnerSelector::All
        } else {
            OwnerSelector::Id(value)
        }
    }
}

impl From<OwnerSelector> for String {
    fn from(selector: OwnerSelector) -> Self {
        match selector {
            OwnerSelector::All => "all".to_string(),
            OwnerSelector::Id(id) => id,
        }
    }
}

impl std::fmt::Display for OwnerSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OwnerSelector::All => write!(f, "all"),
            OwnerSelector::Id(id) => write!(f, "{}", id),
        }
    }
}

/// The calendar period a report covers: one month or one whole year.
///
/// The fields are private; [`Period::month`] and [`Period::year`] are
/// the only constructors, so an out-of-range month cannot exist after
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Period {
    year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    month: Option<u32>,
}

impl Period {
    /// Creates a month period, rejecting months outside 1–12.
    ///
    /// # Examples
    ///
    /// ```
    /// use report_engine::models::Period;
    ///
    /// assert!(Period::month(2024, 3).is_ok());
    /// assert!(Period::month(2024, 13).is_err());
    /// assert!(Period::month(2024, 0).is_err());
    /// ```
    pub fn month(year: i32, month: u32) -> ReportResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(ReportError::InvalidCriteria {
                message: format!("month must be between 1 and 12, got {}", month),
            });
        }
        Ok(Period {
            year,
            month: Some(month),
        })
    }

    /// Creates a whole-year period.
    pub fn year(year: i32) -> Self {
        Period { year, month: None }
    }

    /// Returns the target year.
    pub fn target_year(&self) -> i32 {
        self.year
    }

    /// Returns the target month, if this is a month period.
    pub fn target_month(&self) -> Option<u32> {
        self.month
    }

    /// Renders the period as a document header label, e.g. "March 2024" or "2024".
    pub fn label(&self) -> String {
        match self.month {
            Some(month) => format!("{} {}", month_name(month), self.year),
            None => self.year.to_string(),
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Returns the English name of a month already validated to be 1–12.
fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => unreachable!("month is validated at construction"),
    }
}

/// Criteria for a single report request.
///
/// Constructed fresh per request; nothing is persisted between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    /// Which owner's records to include.
    pub owner: OwnerSelector,
    /// The calendar period to include.
    pub period: Period,
}

impl FilterCriteria {
    /// Creates new filter criteria.
    pub fn new(owner: OwnerSelector, period: Period) -> Self {
        Self { owner, period }
    }

    /// Renders the criteria for error messages and log events.
    pub fn describe(&self) -> String {
        format!("owner={}, period={}", self.owner, self.period)
    }
}
