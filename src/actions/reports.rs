use crate::actions::{next_id, ActionError};
use crate::model::{Dataset, Location, Report, ReportStatus};
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Kinds of waste offered by the report form.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum WasteType {
    Solid,
    Liquid,
    Hazardous,
    Electronic,
    Biomedical,
    Construction,
    Other,
}

impl WasteType {
    pub const ALL: [WasteType; 7] = [
        WasteType::Solid,
        WasteType::Liquid,
        WasteType::Hazardous,
        WasteType::Electronic,
        WasteType::Biomedical,
        WasteType::Construction,
        WasteType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WasteType::Solid => "solid",
            WasteType::Liquid => "liquid",
            WasteType::Hazardous => "hazardous",
            WasteType::Electronic => "electronic",
            WasteType::Biomedical => "biomedical",
            WasteType::Construction => "construction",
            WasteType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WasteType::Solid => "Solid Waste",
            WasteType::Liquid => "Liquid Waste",
            WasteType::Hazardous => "Hazardous Waste",
            WasteType::Electronic => "Electronic Waste",
            WasteType::Biomedical => "Biomedical Waste",
            WasteType::Construction => "Construction Debris",
            WasteType::Other => "Other",
        }
    }
}

impl fmt::Display for WasteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WasteType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WasteType::ALL
            .into_iter()
            .find(|waste| waste.as_str() == s)
            .ok_or_else(|| format!("Unknown waste type: {s}"))
    }
}

/// Contents of the "report an issue" form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportDraft {
    pub waste_type: Option<WasteType>,
    pub location: String,
    pub description: String,
    pub ward: Option<String>,
    pub reported_by: String,
    pub image: Option<String>,
    /// Device position as (lat, lng); typed locations carry none.
    pub position: Option<(f64, f64)>,
}

impl ReportDraft {
    /// Fills the location field from a device position, the same text a
    /// user would otherwise type by hand.
    pub fn with_position(mut self, latitude: f64, longitude: f64) -> Self {
        self.location = format!("{latitude:.6}, {longitude:.6}");
        self.position = Some((latitude, longitude));
        self
    }

    pub fn validate(&self) -> Result<(), ActionError> {
        let mut missing = Vec::new();
        if self.waste_type.is_none() {
            missing.push("wasteType");
        }
        if self.location.trim().is_empty() {
            missing.push("location");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ActionError::MissingFields(missing))
        }
    }

    fn to_location(&self) -> Location {
        let (lat, lng) = self.position.unwrap_or((0.0, 0.0));
        Location::new(lat, lng, self.location.trim())
    }
}

impl Dataset {
    pub fn submit_report(
        &mut self,
        draft: ReportDraft,
        now: DateTime<Utc>,
    ) -> Result<&Report, ActionError> {
        draft.validate()?;
        let waste_type = draft
            .waste_type
            .ok_or(ActionError::MissingFields(vec!["wasteType"]))?;
        let id = next_id(self.reports.iter().map(|r| r.id.as_str()))?;
        let mut report = Report::new(
            &id,
            waste_type.label(),
            draft.description.trim(),
            draft.to_location(),
            ReportStatus::Pending,
            &draft.reported_by,
            now,
        );
        report.ward = draft.ward;
        report.images = draft.image.into_iter().collect();
        tracing::info!(report = %id, "report submitted");
        self.reports.push(report);
        Ok(&self.reports[self.reports.len() - 1])
    }

    pub fn assign_report(
        &mut self,
        report_id: &str,
        officer_id: &str,
        now: DateTime<Utc>,
    ) -> Result<&Report, ActionError> {
        let officer = self
            .user(officer_id)
            .ok_or_else(|| ActionError::UnknownUser(officer_id.to_string()))?;
        if !officer.role.can_be_assigned() {
            return Err(ActionError::NotAnOfficer(officer.name.clone()));
        }
        let officer_name = officer.name.clone();

        let report = self.transition(report_id, ReportStatus::Assigned, now)?;
        report.assigned_to = Some(officer_name);
        tracing::info!(report = report_id, officer = officer_id, "report assigned");
        Ok(report)
    }

    pub fn start_report(
        &mut self,
        report_id: &str,
        now: DateTime<Utc>,
    ) -> Result<&Report, ActionError> {
        let report = self.transition(report_id, ReportStatus::InProgress, now)?;
        Ok(report)
    }

    pub fn resolve_report(
        &mut self,
        report_id: &str,
        now: DateTime<Utc>,
    ) -> Result<&Report, ActionError> {
        let report = self.transition(report_id, ReportStatus::Resolved, now)?;
        report.resolved_at = Some(report.updated_at);
        tracing::info!(report = report_id, "report resolved");
        Ok(report)
    }

    pub fn close_report(
        &mut self,
        report_id: &str,
        now: DateTime<Utc>,
    ) -> Result<&Report, ActionError> {
        let report = self.transition(report_id, ReportStatus::Closed, now)?;
        Ok(report)
    }

    fn transition(
        &mut self,
        report_id: &str,
        to: ReportStatus,
        now: DateTime<Utc>,
    ) -> Result<&mut Report, ActionError> {
        let report = self
            .reports
            .iter_mut()
            .find(|report| report.id == report_id)
            .ok_or_else(|| ActionError::UnknownReport(report_id.to_string()))?;
        if !can_transition(report.status, to) {
            return Err(ActionError::InvalidTransition {
                id: report_id.to_string(),
                from: report.status,
                to,
            });
        }
        report.status = to;
        // a clock behind the data must not break updated_at >= created_at
        report.updated_at = now.max(report.created_at);
        Ok(report)
    }
}

fn can_transition(from: ReportStatus, to: ReportStatus) -> bool {
    use ReportStatus::*;
    matches!(
        (from, to),
        (Pending, Assigned)
            | (Assigned, InProgress)
            | (Assigned, Resolved)
            | (InProgress, Resolved)
            | (Resolved, Closed)
    )
}
