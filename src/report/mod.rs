//! Report pipeline for the Accomplishment Report Engine.
//!
//! This module contains the stateless filter → group → render pipeline:
//! predicate-based record filtering by owner and calendar period, grouping
//! by category label and by owner, printable document rendering, and the
//! print surface abstraction the finished document is delivered to.

mod filter;
mod group;
mod pipeline;
mod render;
mod surface;

pub use filter::filter_records;
pub use group::{group_by_category, group_by_owner};
pub use pipeline::{ReportOutcome, generate_report, generate_report_from_records};
pub use render::{ReportDocument, render_report};
pub use surface::{BufferSurface, PrintSurface, deliver_to_surface};
