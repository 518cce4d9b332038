use crate::model::ReportStatus;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsData {
    pub total_reports: usize,
    pub resolved_reports: usize,
    pub pending_reports: usize,
    pub average_resolution_hours: Option<f64>,
    pub reports_by_ward: Vec<WardCount>,
    pub reports_by_status: Vec<StatusCount>,
    pub reports_trend: Vec<TrendPoint>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct WardCount {
    pub ward: String,
    pub count: usize,
}

impl WardCount {
    pub fn new(ward: impl ToString, count: usize) -> Self {
        Self {
            ward: ward.to_string(),
            count,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct StatusCount {
    pub status: ReportStatus,
    pub count: usize,
}

/// Activity of one calendar day.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub new: usize,
    pub resolved: usize,
}

impl TrendPoint {
    pub fn new(date: NaiveDate, new: usize, resolved: usize) -> Self {
        Self { date, new, resolved }
    }
}
