//! Session-scoped edits of a [`Dataset`](crate::model::Dataset).
//!
//! Changes live only as long as the dataset value; nothing is written back
//! to the files it was loaded from.

mod error;
mod reports;
mod users;

pub use error::ActionError;
pub use reports::{ReportDraft, WasteType};
pub use users::UserDraft;

/// Next free numeric id; non-numeric ids are ignored.
fn next_id<'a>(ids: impl Iterator<Item = &'a str>) -> Result<String, ActionError> {
    let max = ids.filter_map(|id| id.parse::<u64>().ok()).max().unwrap_or(0);
    max.checked_add(1)
        .map(|id| id.to_string())
        .ok_or(ActionError::IdsExhausted)
}
