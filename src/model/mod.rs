mod dataset;
mod mock;
mod report;
mod result;
mod timestamp;
mod user;
mod ward;

pub use dataset::Dataset;
pub use report::{Location, Report, ReportStatus};
pub use result::Result;
#[cfg(test)]
pub(crate) use timestamp::ts;
pub use user::{User, UserRole};
pub use ward::Ward;

pub use mock::{mock_reports, mock_users, mock_wards};
