use crate::model::ReportStatus;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ActionError {
    #[error("Unknown report: {0}")]
    UnknownReport(String),

    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("Report {id} is {from}, it cannot become {to}")]
    InvalidTransition {
        id: String,
        from: ReportStatus,
        to: ReportStatus,
    },

    #[error("User {0} is not an officer")]
    NotAnOfficer(String),

    #[error("Please fill all required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("No numeric id left for a new entry")]
    IdsExhausted,
}
