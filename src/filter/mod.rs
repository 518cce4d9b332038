mod criteria;
mod engine;
mod style;

pub use criteria::{ReportCriteria, Selection, SortKey, UserCriteria, ALL};
pub use engine::{filter_reports, filter_reports_for_map, filter_users, sort_reports, MapMarker};
pub use style::{
    marker_style_for_name, role_chip, role_chip_for_name, status_chip, status_chip_for_name,
    status_to_marker_style, ChipStyle, MarkerStyle,
};
