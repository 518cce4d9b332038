mod analyzer;
mod model;

pub use analyzer::Analyzer;
pub use model::{AnalyticsData, StatusCount, TrendPoint, WardCount};
