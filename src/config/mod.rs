//! Configuration loading for the Accomplishment Report Engine.
//!
//! This module provides functionality to load the institution identity
//! printed in report headers from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use report_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/institution.yaml").unwrap();
//! println!("Reporting for: {}", config.institution().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::InstitutionConfig;
