//! Accomplishment Report Engine for garment production records
//!
//! This crate filters dated, employee-attributed production records by
//! calendar period and owner, groups them by category and by owner, and
//! renders the result into a printable summary document.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod source;
