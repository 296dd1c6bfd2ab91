//! Core data models for the Accomplishment Report Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod criteria;
mod group;
mod owner;
mod record;

pub use criteria::{FilterCriteria, OwnerSelector, Period};
pub use group::{CategoryGroup, OwnerGroup};
pub use owner::Owner;
pub use record::ProductionRecord;
