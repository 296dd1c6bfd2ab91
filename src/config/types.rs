//! Configuration types for report generation.
//!
//! This module contains the strongly-typed configuration structure that
//! is deserialized from the institution YAML file.

use serde::{Deserialize, Serialize};

/// Institution identity printed in the report header block.
///
/// Loaded from `institution.yaml`; [`InstitutionConfig::default`] carries
/// the stock identity so the library pipeline works without a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstitutionConfig {
    /// The institution name (first header line).
    pub name: String,
    /// The campus or address line under the name.
    pub address: String,
    /// The office issuing the report.
    pub office: String,
    /// The document title, e.g. "Accomplishment Report".
    pub document_title: String,
}

impl Default for InstitutionConfig {
    fn default() -> Self {
        Self {
            name: "Marinduque State University".to_string(),
            address: "Boac, Marinduque".to_string(),
            office: "Business Affairs Office".to_string(),
            document_title: "Accomplishment Report".to_string(),
        }
    }
}
