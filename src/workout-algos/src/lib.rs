pub(crate) mod metrics;
pub use metrics::WorkoutMetrics;

pub(crate) mod report;
pub use report::{InfoMessage, format_report};

pub mod helpers;
