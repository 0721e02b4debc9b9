//! The expense tracker page: transaction tables, summaries and charts.

mod aggregation;
mod charts;
mod handlers;
mod tables;
mod view_model;

pub use aggregation::{Summary, expenses, of_type, summary, total_by_category, total_by_type};
pub(crate) use handlers::tracker_content;
pub use handlers::{get_summary, get_tracker_page};
pub use view_model::TrackerView;
