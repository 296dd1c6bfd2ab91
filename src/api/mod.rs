//! HTTP API module for the Accomplishment Report Engine.
//!
//! This module provides the REST API endpoint for generating
//! accomplishment reports from submitted production records.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ReportRequest;
pub use response::ApiError;
pub use state::AppState;
