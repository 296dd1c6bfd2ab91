//! Error types for the Accomplishment Report Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during report generation.

use thiserror::Error;

/// The main error type for the Accomplishment Report Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use report_engine::error::ReportError;
///
/// let error = ReportError::NoMatchingRecords {
///     criteria: "owner=all, period=March 2024".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "No matching records for criteria: owner=all, period=March 2024"
/// );
/// ```
#[derive(Debug, Error)]
pub enum ReportError {
    /// Filtering yielded zero records; the report is refused before rendering.
    #[error("No matching records for criteria: {criteria}")]
    NoMatchingRecords {
        /// A description of the criteria that matched nothing.
        criteria: String,
    },

    /// The external print surface could not be acquired.
    #[error("Print surface unavailable: {message}")]
    SurfaceUnavailable {
        /// A description of why the surface could not be opened.
        message: String,
    },

    /// The upstream record source failed.
    #[error("Record fetch failed: {message}")]
    FetchFailed {
        /// A description of the fetch failure.
        message: String,
    },

    /// A record was rejected at the ingestion boundary.
    #[error("Invalid record '{record_id}': {message}")]
    InvalidRecord {
        /// The ID of the invalid record.
        record_id: String,
        /// A description of what made the record invalid.
        message: String,
    },

    /// The filter criteria were malformed.
    #[error("Invalid criteria: {message}")]
    InvalidCriteria {
        /// A description of what made the criteria invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return ReportError.
pub type ReportResult<T> = Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_matching_records_displays_criteria() {
        let error = ReportError::NoMatchingRecords {
            criteria: "owner=emp_001, period=2024".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "No matching records for criteria: owner=emp_001, period=2024"
        );
    }

    #[test]
    fn test_surface_unavailable_displays_message() {
        let error = ReportError::SurfaceUnavailable {
            message: "popup blocked".to_string(),
        };
        assert_eq!(error.to_string(), "Print surface unavailable: popup blocked");
    }

    #[test]
    fn test_fetch_failed_displays_message() {
        let error = ReportError::FetchFailed {
            message: "connection refused".to_string(),
        };
        assert_eq!(error.to_string(), "Record fetch failed: connection refused");
    }

    #[test]
    fn test_invalid_record_displays_id_and_message() {
        let error = ReportError::InvalidRecord {
            record_id: "rec_001".to_string(),
            message: "owner reference is empty".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid record 'rec_001': owner reference is empty"
        );
    }

    #[test]
    fn test_invalid_criteria_displays_message() {
        let error = ReportError::InvalidCriteria {
            message: "month must be between 1 and 12, got 13".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid criteria: month must be between 1 and 12, got 13"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = ReportError::ConfigNotFound {
            path: "/missing/institution.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/institution.yaml"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ReportError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_fetch_failed() -> ReportResult<()> {
            Err(ReportError::FetchFailed {
                message: "timeout".to_string(),
            })
        }

        fn propagates_error() -> ReportResult<()> {
            returns_fetch_failed()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
