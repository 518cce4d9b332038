use crate::model::{ReportStatus, UserRole};
use std::fmt;

const MARKER_ICON_BASE: &str =
    "https://raw.githubusercontent.com/pointhi/leaflet-color-markers/master/img/marker-icon-2x-";

#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum MarkerStyle {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
}

impl MarkerStyle {
    pub const DEFAULT: MarkerStyle = MarkerStyle::Blue;

    pub fn color(&self) -> &'static str {
        match self {
            MarkerStyle::Red => "red",
            MarkerStyle::Orange => "orange",
            MarkerStyle::Yellow => "yellow",
            MarkerStyle::Green => "green",
            MarkerStyle::Blue => "blue",
        }
    }

    pub fn icon_url(&self) -> String {
        format!("{MARKER_ICON_BASE}{}.png", self.color())
    }
}

impl fmt::Display for MarkerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.color())
    }
}

pub fn status_to_marker_style(status: ReportStatus) -> MarkerStyle {
    match status {
        ReportStatus::Pending => MarkerStyle::Red,
        ReportStatus::Assigned => MarkerStyle::Orange,
        ReportStatus::InProgress => MarkerStyle::Yellow,
        ReportStatus::Resolved => MarkerStyle::Green,
        ReportStatus::Closed => MarkerStyle::Blue,
    }
}

/// Marker for a raw status name; unrecognized names get [`MarkerStyle::DEFAULT`].
pub fn marker_style_for_name(status: &str) -> MarkerStyle {
    status
        .parse::<ReportStatus>()
        .map(status_to_marker_style)
        .unwrap_or(MarkerStyle::DEFAULT)
}

/// Background/foreground pair used for status and role badges.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ChipStyle {
    pub background: &'static str,
    pub foreground: &'static str,
}

impl ChipStyle {
    pub const NEUTRAL: ChipStyle = ChipStyle::new("#f5f5f5", "#616161");

    const fn new(background: &'static str, foreground: &'static str) -> Self {
        Self {
            background,
            foreground,
        }
    }
}

pub fn status_chip(status: ReportStatus) -> ChipStyle {
    match status {
        ReportStatus::Pending => ChipStyle::new("#fff8e1", "#ff8f00"),
        ReportStatus::Assigned => ChipStyle::new("#e3f2fd", "#1976d2"),
        ReportStatus::InProgress => ChipStyle::new("#e8f5e9", "#388e3c"),
        ReportStatus::Resolved => ChipStyle::new("#e8f5e9", "#388e3c"),
        ReportStatus::Closed => ChipStyle::new("#e0f2f1", "#00897b"),
    }
}

pub fn role_chip(role: UserRole) -> ChipStyle {
    match role {
        UserRole::Admin => ChipStyle::new("#e8eaf6", "#3f51b5"),
        UserRole::Officer => ChipStyle::new("#e3f2fd", "#1976d2"),
        UserRole::Champion => ChipStyle::new("#e8f5e9", "#388e3c"),
        UserRole::Citizen => ChipStyle::new("#fff8e1", "#ff8f00"),
    }
}

pub fn status_chip_for_name(status: &str) -> ChipStyle {
    status
        .parse::<ReportStatus>()
        .map(status_chip)
        .unwrap_or(ChipStyle::NEUTRAL)
}

pub fn role_chip_for_name(role: &str) -> ChipStyle {
    role.parse::<UserRole>()
        .map(role_chip)
        .unwrap_or(ChipStyle::NEUTRAL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn every_status_has_a_distinct_marker() {
        let markers = ReportStatus::ALL
            .into_iter()
            .map(status_to_marker_style)
            .collect::<Vec<_>>();
        assert_eq!(markers.iter().unique().count(), ReportStatus::ALL.len());
        assert_eq!(markers[0], MarkerStyle::Red);
        assert_eq!(markers[4], MarkerStyle::Blue);
    }

    #[test]
    fn unknown_status_name_gets_default_marker() {
        assert_eq!(marker_style_for_name("archived"), MarkerStyle::DEFAULT);
        assert_eq!(marker_style_for_name("in_progress"), MarkerStyle::Yellow);
    }

    #[test]
    fn icon_url_names_the_color() {
        assert!(MarkerStyle::Green.icon_url().ends_with("marker-icon-2x-green.png"));
    }

    #[test]
    fn unknown_names_get_neutral_chip() {
        assert_eq!(status_chip_for_name("archived"), ChipStyle::NEUTRAL);
        assert_eq!(role_chip_for_name("mayor"), ChipStyle::NEUTRAL);
        assert_eq!(role_chip_for_name("admin").foreground, "#3f51b5");
        assert_eq!(status_chip_for_name("closed").background, "#e0f2f1");
    }
}
