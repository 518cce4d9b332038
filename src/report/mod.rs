pub mod markdown;

pub use markdown::{DashboardView, MapView, MarkdownReport, ReportsView, UsersView};
