//! Application state for the Accomplishment Report Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::InstitutionConfig;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// currently the institution identity printed in report headers.
#[derive(Clone)]
pub struct AppState {
    /// The institution identity.
    institution: Arc<InstitutionConfig>,
}

impl AppState {
    /// Creates a new application state with the given institution identity.
    pub fn new(institution: InstitutionConfig) -> Self {
        Self {
            institution: Arc::new(institution),
        }
    }

    /// Returns a reference to the institution identity.
    pub fn institution(&self) -> &InstitutionConfig {
        &self.institution
    }
}
