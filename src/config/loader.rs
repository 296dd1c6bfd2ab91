//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! institution configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{ReportError, ReportResult};

use super::types::InstitutionConfig;

/// Loads and provides access to the institution configuration.
///
/// # Example
///
/// ```no_run
/// use report_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/institution.yaml").unwrap();
/// assert!(!loader.institution().name.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    institution: InstitutionConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::ConfigNotFound`] if the file is missing and
    /// [`ReportError::ConfigParseError`] if it contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> ReportResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ReportError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let institution =
            serde_yaml::from_str(&content).map_err(|e| ReportError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { institution })
    }

    /// Creates a loader carrying the built-in default identity.
    pub fn with_defaults() -> Self {
        Self {
            institution: InstitutionConfig::default(),
        }
    }

    /// Returns the loaded institution identity.
    pub fn institution(&self) -> &InstitutionConfig {
        &self.institution
    }
}
