use crate::model::{ReportStatus, UserRole};
use std::str::FromStr;

/// Selector value meaning "do not constrain this field".
pub const ALL: &str = "all";

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(expected) => expected == value,
        }
    }

    /// A missing value only passes an unconstrained selection.
    pub fn matches_opt(&self, value: Option<&T>) -> bool {
        match (self, value) {
            (Selection::All, _) => true,
            (Selection::Only(expected), Some(value)) => expected == value,
            (Selection::Only(_), None) => false,
        }
    }
}

impl<T: FromStr> FromStr for Selection<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            return Ok(Selection::All);
        }
        s.parse::<T>().map(Selection::Only)
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ReportCriteria {
    pub search_term: String,
    pub ward: Selection<String>,
    pub status: Selection<ReportStatus>,
}

impl ReportCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl ToString) -> Self {
        self.search_term = term.to_string();
        self
    }

    pub fn ward(mut self, ward: impl ToString) -> Self {
        self.ward = Selection::Only(ward.to_string());
        self
    }

    pub fn status(mut self, status: ReportStatus) -> Self {
        self.status = Selection::Only(status);
        self
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct UserCriteria {
    pub search_term: String,
    pub role: Selection<UserRole>,
}

impl UserCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl ToString) -> Self {
        self.search_term = term.to_string();
        self
    }

    pub fn role(mut self, role: UserRole) -> Self {
        self.role = Selection::Only(role);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    Status,
    Ward,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::Status => "status",
            SortKey::Ward => "ward",
        }
    }
}

/// Unknown keys sort newest first.
impl From<&str> for SortKey {
    fn from(value: &str) -> Self {
        match value {
            "oldest" => SortKey::Oldest,
            "status" => SortKey::Status,
            "ward" => SortKey::Ward,
            "newest" => SortKey::Newest,
            other => {
                tracing::debug!(key = other, "unknown sort key, using newest");
                SortKey::Newest
            }
        }
    }
}
