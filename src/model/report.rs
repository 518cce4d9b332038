use crate::model::timestamp::{optional_timestamp, required_timestamp};
use crate::model::Result;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde_json::{from_str, Value};
use std::fmt;
use std::fs;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum ReportStatus {
    Pending,
    Assigned,
    InProgress,
    Resolved,
    Closed,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 5] = [
        ReportStatus::Pending,
        ReportStatus::Assigned,
        ReportStatus::InProgress,
        ReportStatus::Resolved,
        ReportStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::Assigned => "assigned",
            ReportStatus::InProgress => "in_progress",
            ReportStatus::Resolved => "resolved",
            ReportStatus::Closed => "closed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "Pending",
            ReportStatus::Assigned => "Assigned",
            ReportStatus::InProgress => "In Progress",
            ReportStatus::Resolved => "Resolved",
            ReportStatus::Closed => "Closed",
        }
    }

    /// Statuses that may carry a resolution timestamp.
    pub fn is_finished(&self) -> bool {
        matches!(self, ReportStatus::Resolved | ReportStatus::Closed)
    }

    /// Statuses counted as still waiting for field work.
    pub fn is_open(&self) -> bool {
        matches!(self, ReportStatus::Pending | ReportStatus::Assigned)
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ReportStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Unknown report status: {s}"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
}

impl Location {
    pub fn new(lat: f64, lng: f64, address: impl ToString) -> Self {
        Self {
            lat,
            lng,
            address: address.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: Location,
    pub images: Vec<String>,
    pub status: ReportStatus,
    pub ward: Option<String>,
    pub reported_by: String,
    pub assigned_to: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

// Create
impl Report {
    pub fn from_config(path: &str) -> Result<Vec<Self>> {
        let json_str = fs::read_to_string(path)?;
        Self::parse(&json_str)
    }

    pub fn new(
        id: impl ToString,
        title: impl ToString,
        description: impl ToString,
        location: Location,
        status: ReportStatus,
        reported_by: impl ToString,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            location,
            images: vec![],
            status,
            ward: None,
            reported_by: reported_by.to_string(),
            assigned_to: None,
            created_at,
            updated_at: created_at,
            resolved_at: None,
        }
    }

    pub fn with_ward(mut self, ward: impl ToString) -> Self {
        self.ward = Some(ward.to_string());
        self
    }

    pub fn with_image(mut self, url: impl ToString) -> Self {
        self.images.push(url.to_string());
        self
    }

    pub fn assigned(mut self, officer: impl ToString, at: DateTime<Utc>) -> Self {
        self.assigned_to = Some(officer.to_string());
        self.updated_at = at;
        self
    }

    pub fn resolved(mut self, at: DateTime<Utc>) -> Self {
        self.resolved_at = Some(at);
        self.updated_at = at;
        self
    }

    pub fn ward_name(&self) -> &str {
        self.ward.as_deref().unwrap_or("")
    }

    pub fn check_invariants(&self) -> Result<()> {
        if self.updated_at < self.created_at {
            return Err(format!("Report `{}` updated before it was created", self.id).into());
        }
        if self.resolved_at.is_some() && !self.status.is_finished() {
            return Err(format!(
                "Report `{}` has a resolution time but status `{}`",
                self.id, self.status
            )
            .into());
        }
        Ok(())
    }
}

// Parser
impl Report {
    pub(crate) fn parse(json_str: &str) -> Result<Vec<Self>> {
        let elements: IndexMap<String, Value> = from_str(json_str)?;
        let mut result = Vec::new();
        for (id, details) in elements {
            let Some(title) = details["title"].as_str() else {
                return Err(format!("Not found 'title' field (report `{id}`)").into());
            };
            let Some(description) = details["description"].as_str() else {
                return Err(format!("Not found 'description' field (report `{id}`)").into());
            };
            let location = Self::parse_location(&details["location"], &id)?;
            let Some(status) = details["status"].as_str() else {
                return Err(format!("Not found 'status' field (report `{id}`)").into());
            };
            let status = status.parse::<ReportStatus>()?;
            let Some(reported_by) = details["reportedBy"].as_str() else {
                return Err(format!("Not found 'reportedBy' field (report `{id}`)").into());
            };
            let created_at = required_timestamp(&details, "createdAt", &id)?;

            let mut new = Self::new(
                &id,
                title,
                description,
                location,
                status,
                reported_by,
                created_at,
            );
            new.updated_at = required_timestamp(&details, "updatedAt", &id)?;
            new.resolved_at = optional_timestamp(&details, "resolvedAt", &id)?;
            new.ward = details["ward"].as_str().map(String::from);
            new.assigned_to = details["assignedTo"].as_str().map(String::from);
            new.images = match details["images"].as_array() {
                Some(images) => images
                    .iter()
                    .filter_map(|image| image.as_str().map(String::from))
                    .collect(),
                None => vec![],
            };
            new.check_invariants()?;
            result.push(new);
        }
        Ok(result)
    }

    fn parse_location(location: &Value, id: &str) -> Result<Location> {
        let Some(lat) = location["lat"].as_f64() else {
            return Err(format!("Not found 'location.lat' field (report `{id}`)").into());
        };
        let Some(lng) = location["lng"].as_f64() else {
            return Err(format!("Not found 'location.lng' field (report `{id}`)").into());
        };
        let Some(address) = location["address"].as_str() else {
            return Err(format!("Not found 'location.address' field (report `{id}`)").into());
        };
        Ok(Location::new(lat, lng, address))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORTS: &str = r#"{
        "1": {
            "title": "Garbage overflow",
            "description": "Garbage bin overflowing near market area",
            "location": { "lat": 28.6139, "lng": 77.209, "address": "Market Road, Central Ward" },
            "images": ["https://example.com/garbage.jpg"],
            "status": "pending",
            "ward": "Central Ward",
            "reportedBy": "Citizen Sharma",
            "createdAt": "2023-06-01T10:30:00",
            "updatedAt": "2023-06-01T10:30:00"
        },
        "4": {
            "title": "Broken bin",
            "description": "Waste bin damaged and needs replacement",
            "location": { "lat": 28.6359, "lng": 77.21, "address": "Park Avenue, East Ward" },
            "status": "resolved",
            "reportedBy": "Citizen Sharma",
            "assignedTo": "Officer Kumar",
            "createdAt": "2023-06-04T08:20:00",
            "updatedAt": "2023-06-05T13:10:00",
            "resolvedAt": "2023-06-05T13:10:00"
        }
    }"#;

    #[test]
    fn parses_reports_with_optional_fields() {
        let reports = Report::parse(REPORTS).unwrap();
        assert_eq!(reports.len(), 2);

        let first = &reports[0];
        assert_eq!(first.status, ReportStatus::Pending);
        assert_eq!(first.ward.as_deref(), Some("Central Ward"));
        assert_eq!(first.images.len(), 1);
        assert!(first.assigned_to.is_none());

        let second = &reports[1];
        assert!(second.ward.is_none());
        assert_eq!(second.ward_name(), "");
        assert_eq!(second.assigned_to.as_deref(), Some("Officer Kumar"));
        assert!(second.resolved_at.is_some());
    }

    #[test]
    fn resolution_time_on_open_report_is_rejected() {
        let json = REPORTS.replace(r#""status": "resolved""#, r#""status": "assigned""#);
        let err = Report::parse(&json).unwrap_err();
        assert!(err.to_string().contains("resolution time"));
    }

    #[test]
    fn update_before_creation_is_rejected() {
        let json = REPORTS.replace(
            r#""updatedAt": "2023-06-01T10:30:00""#,
            r#""updatedAt": "2023-05-01T10:30:00""#,
        );
        assert!(Report::parse(&json).is_err());
    }

    #[test]
    fn missing_location_field_is_named() {
        let json = REPORTS.replace(r#""lat": 28.6139, "#, "");
        let err = Report::parse(&json).unwrap_err();
        assert!(err.to_string().contains("location.lat"));
    }

    #[test]
    fn status_wire_names() {
        assert_eq!("in_progress".parse::<ReportStatus>(), Ok(ReportStatus::InProgress));
        assert!("In Progress".parse::<ReportStatus>().is_err());
        assert_eq!(ReportStatus::InProgress.label(), "In Progress");
    }
}
