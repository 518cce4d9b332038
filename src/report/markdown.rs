use crate::analyze::AnalyticsData;
use crate::filter::{role_chip, sort_reports, status_chip, ChipStyle, MapMarker, SortKey};
use crate::model::{Report, Result, User};
use chrono::{DateTime, Utc};
use markdown_builder::Markdown;
use markdown_table::{Heading, HeadingAlignment, MarkdownTable};

pub trait MarkdownReport {
    fn report_create(&self) -> Result<String>;
}

pub struct ReportsView<'a> {
    pub reports: Vec<&'a Report>,
    pub sort: SortKey,
}

pub struct UsersView<'a> {
    pub users: Vec<&'a User>,
}

pub struct MapView<'a> {
    pub markers: Vec<MapMarker<'a>>,
}

/// Analytics plus the report list shown under them, newest first.
pub struct DashboardView<'a> {
    pub analytics: AnalyticsData,
    pub recent: Vec<&'a Report>,
}

impl<'a> DashboardView<'a> {
    pub fn new(analytics: AnalyticsData, reports: &'a [Report]) -> Self {
        Self {
            analytics,
            recent: sort_reports(reports.iter().collect::<Vec<&Report>>(), SortKey::Newest),
        }
    }
}

impl MarkdownReport for ReportsView<'_> {
    fn report_create(&self) -> Result<String> {
        let mut doc = Markdown::new();
        doc.header1("Reports");
        doc.paragraph(format!(
            "{} reports found (sorted by {})",
            self.reports.len(),
            self.sort.as_str()
        ));
        if self.reports.is_empty() {
            doc.paragraph("**No reports found matching your filters**");
            doc.paragraph("*Try adjusting your search or filter criteria*");
            return Ok(doc.render());
        }

        let rows = self
            .reports
            .iter()
            .map(|report| {
                vec![
                    cell(&report.id),
                    format!("**{}**", cell(&report.title)),
                    chip(report.status.label(), status_chip(report.status)),
                    cell(report.ward_name()),
                    cell(&report.reported_by),
                    cell(report.assigned_to.as_deref().unwrap_or("-")),
                    date(&report.created_at),
                ]
            })
            .collect::<Vec<_>>();
        doc.add_table(
            &["#", "Title", "Status", "Ward", "Reported by", "Assigned to", "Created"],
            rows,
        )?;
        Ok(doc.render())
    }
}

impl MarkdownReport for UsersView<'_> {
    fn report_create(&self) -> Result<String> {
        let mut doc = Markdown::new();
        doc.header1("Users");
        doc.paragraph(format!("{} users found", self.users.len()));
        if self.users.is_empty() {
            doc.paragraph("**No users found matching your filters**");
            return Ok(doc.render());
        }

        let rows = self
            .users
            .iter()
            .map(|user| {
                vec![
                    user.avatar
                        .as_deref()
                        .map(|url| format!("![]({url} =32x)"))
                        .unwrap_or_default(),
                    format!("**{}**", cell(&user.name)),
                    chip(user.role.label(), role_chip(user.role)),
                    cell(&user.email),
                    cell(user.phone.as_deref().unwrap_or("-")),
                    cell(user.ward.as_deref().unwrap_or("-")),
                ]
            })
            .collect::<Vec<_>>();
        doc.add_table(&["", "Name", "Role", "Email", "Phone", "Ward"], rows)?;
        Ok(doc.render())
    }
}

impl MarkdownReport for MapView<'_> {
    fn report_create(&self) -> Result<String> {
        let mut doc = Markdown::new();
        doc.header1("Map");
        doc.paragraph(format!("{} markers", self.markers.len()));
        if self.markers.is_empty() {
            return Ok(doc.render());
        }

        let rows = self
            .markers
            .iter()
            .map(|marker| {
                let report = marker.report;
                vec![
                    format!("![]({} =12x)", marker.style.icon_url()),
                    cell(&report.title),
                    report.status.label().to_string(),
                    marker.style.color().to_string(),
                    format!("{:.4}", report.location.lat),
                    format!("{:.4}", report.location.lng),
                    cell(&report.location.address),
                ]
            })
            .collect::<Vec<_>>();
        doc.add_table(
            &["", "Title", "Status", "Marker", "Lat", "Lng", "Address"],
            rows,
        )?;
        Ok(doc.render())
    }
}

impl MarkdownReport for DashboardView<'_> {
    fn report_create(&self) -> Result<String> {
        let analytics = &self.analytics;
        let mut doc = Markdown::new();
        doc.header1("Dashboard");

        let average = match analytics.average_resolution_hours {
            Some(hours) => format!("{hours:.0}h"),
            None => "-".to_string(),
        };
        doc.add_table(
            &["Total reports", "Resolved", "Pending", "Avg. resolution time"],
            vec![vec![
                analytics.total_reports.to_string(),
                analytics.resolved_reports.to_string(),
                analytics.pending_reports.to_string(),
                average,
            ]],
        )?;

        doc.header2("Reports by status");
        let rows = analytics
            .reports_by_status
            .iter()
            .map(|row| vec![row.status.label().to_string(), row.count.to_string()])
            .collect::<Vec<_>>();
        doc.add_table(&["Status", "Count"], rows)?;

        if !analytics.reports_by_ward.is_empty() {
            doc.header2("Reports by ward");
            let rows = analytics
                .reports_by_ward
                .iter()
                .map(|row| vec![cell(&row.ward), row.count.to_string()])
                .collect::<Vec<_>>();
            doc.add_table(&["Ward", "Count"], rows)?;
        }

        if !analytics.reports_trend.is_empty() {
            doc.header2("Reports trend");
            let rows = analytics
                .reports_trend
                .iter()
                .map(|point| {
                    vec![
                        point.date.format("%d.%m.%Y").to_string(),
                        point.new.to_string(),
                        point.resolved.to_string(),
                    ]
                })
                .collect::<Vec<_>>();
            doc.add_table(&["Date", "New", "Resolved"], rows)?;
        }

        if !self.recent.is_empty() {
            doc.header2("Recent reports");
            let rows = self
                .recent
                .iter()
                .map(|report| {
                    vec![
                        format!("**{}**", cell(&report.title)),
                        cell(&excerpt(&report.description)),
                        cell(report.ward_name()),
                        date(&report.created_at),
                        chip(report.status.label(), status_chip(report.status)),
                    ]
                })
                .collect::<Vec<_>>();
            doc.add_table(&["Title", "Description", "Ward", "Created", "Status"], rows)?;
        }

        Ok(doc.render())
    }
}

trait MarkdownExt {
    fn add_table(&mut self, headings: &[&str], rows: Vec<Vec<String>>) -> Result<()>;
}

impl MarkdownExt for Markdown {
    fn add_table(&mut self, headings: &[&str], rows: Vec<Vec<String>>) -> Result<()> {
        let header = headings
            .iter()
            .map(|h| Heading::new(h.to_string(), Some(HeadingAlignment::Left)))
            .collect::<Vec<_>>();
        let mut md_table = MarkdownTable::new(rows);
        md_table.with_headings(header);
        let table = md_table
            .as_markdown()
            .map_err(|e| format!("Cannot render table: {e:?}"))?;
        self.paragraph(table);
        Ok(())
    }
}

fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

fn chip(label: &str, style: ChipStyle) -> String {
    format!(
        "<span style=\"background-color:{};color:{}\">{}</span>",
        style.background, style.foreground, label
    )
}

const EXCERPT_CHARS: usize = 60;

fn excerpt(text: &str) -> String {
    let head = text.chars().take(EXCERPT_CHARS).collect::<String>();
    format!("{head}...")
}

fn date(datetime: &DateTime<Utc>) -> String {
    datetime.format("%d.%m.%Y").to_string()
}
