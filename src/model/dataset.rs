use crate::model::mock::{mock_reports, mock_users, mock_wards};
use crate::model::{Report, User, Ward};

/// The in-memory collections shown by every view of one session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub users: Vec<User>,
    pub wards: Vec<Ward>,
    pub reports: Vec<Report>,
}

impl Dataset {
    pub fn new(users: Vec<User>, wards: Vec<Ward>, reports: Vec<Report>) -> Self {
        Self {
            users,
            wards,
            reports,
        }
    }

    pub fn mock() -> Self {
        Self::new(mock_users(), mock_wards(), mock_reports())
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn report(&self, id: &str) -> Option<&Report> {
        self.reports.iter().find(|report| report.id == id)
    }

    pub fn ward_names(&self) -> Vec<&str> {
        self.wards.iter().map(|ward| ward.name.as_str()).collect()
    }
}
