use crate::analyze::{AnalyticsData, StatusCount, TrendPoint, WardCount};
use crate::model::{Dataset, Report, ReportStatus};
use chrono::NaiveDate;
use itertools::Itertools;
use std::collections::BTreeMap;

pub trait Analyzer {
    fn analyze(&self) -> AnalyticsData;
}

impl Analyzer for Dataset {
    fn analyze(&self) -> AnalyticsData {
        let reports = &self.reports;
        AnalyticsData {
            total_reports: reports.len(),
            resolved_reports: reports.iter().filter(|r| r.status.is_finished()).count(),
            pending_reports: reports.iter().filter(|r| r.status.is_open()).count(),
            average_resolution_hours: average_resolution_hours(reports),
            reports_by_ward: self.reports_by_ward(),
            reports_by_status: reports_by_status(reports),
            reports_trend: reports_trend(reports),
        }
    }
}

trait DatasetAnalysisExtension {
    fn reports_by_ward(&self) -> Vec<WardCount>;
}

impl DatasetAnalysisExtension for Dataset {
    fn reports_by_ward(&self) -> Vec<WardCount> {
        let count_in = |ward: &str| {
            self.reports
                .iter()
                .filter(|report| report.ward.as_deref() == Some(ward))
                .count()
        };
        let known = self.ward_names();
        let unknown = self
            .reports
            .iter()
            .filter_map(|report| report.ward.as_deref())
            .filter(|ward| !known.contains(ward))
            .unique()
            .sorted()
            .collect::<Vec<_>>();

        known
            .iter()
            .chain(unknown.iter())
            .map(|ward| WardCount::new(ward, count_in(*ward)))
            .collect::<Vec<_>>()
    }
}

fn reports_by_status(reports: &[Report]) -> Vec<StatusCount> {
    ReportStatus::ALL
        .into_iter()
        .map(|status| StatusCount {
            status,
            count: reports.iter().filter(|r| r.status == status).count(),
        })
        .collect::<Vec<_>>()
}

fn average_resolution_hours(reports: &[Report]) -> Option<f64> {
    let durations = reports
        .iter()
        .filter_map(|r| r.resolved_at.map(|resolved| resolved - r.created_at))
        .map(|duration| duration.num_seconds() as f64 / 3600.0)
        .collect::<Vec<_>>();
    if durations.is_empty() {
        return None;
    }
    Some(durations.iter().sum::<f64>() / durations.len() as f64)
}

fn reports_trend(reports: &[Report]) -> Vec<TrendPoint> {
    let mut days: BTreeMap<NaiveDate, TrendPoint> = BTreeMap::new();
    for report in reports {
        let created = report.created_at.date_naive();
        days.entry(created)
            .or_insert_with(|| TrendPoint::new(created, 0, 0))
            .new += 1;
        if let Some(resolved_at) = report.resolved_at {
            let resolved = resolved_at.date_naive();
            days.entry(resolved)
                .or_insert_with(|| TrendPoint::new(resolved, 0, 0))
                .resolved += 1;
        }
    }
    days.into_values().collect::<Vec<_>>()
}
