use crate::model::timestamp::required_timestamp;
use crate::model::Result;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde_json::{from_str, Value};
use std::fmt;
use std::fs;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum UserRole {
    Citizen,
    Champion,
    Officer,
    Admin,
}

impl UserRole {
    pub const ALL: [UserRole; 4] = [
        UserRole::Citizen,
        UserRole::Champion,
        UserRole::Officer,
        UserRole::Admin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Citizen => "citizen",
            UserRole::Champion => "champion",
            UserRole::Officer => "officer",
            UserRole::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Citizen => "Citizen",
            UserRole::Champion => "Champion",
            UserRole::Officer => "Officer",
            UserRole::Admin => "Admin",
        }
    }

    /// Roles allowed to take ownership of a report.
    pub fn can_be_assigned(&self) -> bool {
        matches!(self, UserRole::Officer | UserRole::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        UserRole::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("Unknown user role: {s}"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub ward: Option<String>,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

// Create
impl User {
    pub fn from_config(path: &str) -> Result<Vec<Self>> {
        let json_str = fs::read_to_string(path)?;
        Self::parse(&json_str)
    }

    pub fn new(
        id: impl ToString,
        name: impl ToString,
        email: impl ToString,
        role: UserRole,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            phone: None,
            address: None,
            ward: None,
            avatar: None,
            created_at,
        }
    }

    pub fn with_phone(mut self, phone: impl ToString) -> Self {
        self.phone = Some(phone.to_string());
        self
    }

    pub fn with_address(mut self, address: impl ToString) -> Self {
        self.address = Some(address.to_string());
        self
    }

    pub fn with_ward(mut self, ward: impl ToString) -> Self {
        self.ward = Some(ward.to_string());
        self
    }

    pub fn with_avatar(mut self, avatar: impl ToString) -> Self {
        self.avatar = Some(avatar.to_string());
        self
    }
}

// Parser
impl User {
    pub(crate) fn parse(json_str: &str) -> Result<Vec<Self>> {
        let elements: IndexMap<String, Value> = from_str(json_str)?;
        let mut result = Vec::new();
        for (id, details) in elements {
            let Some(name) = details["name"].as_str() else {
                return Err(format!("Not found 'name' field (user `{id}`)").into());
            };
            let Some(email) = details["email"].as_str() else {
                return Err(format!("Not found 'email' field (user `{id}`)").into());
            };
            let Some(role) = details["role"].as_str() else {
                return Err(format!("Not found 'role' field (user `{id}`)").into());
            };
            let role = role.parse::<UserRole>()?;
            let created_at = required_timestamp(&details, "createdAt", &id)?;

            let mut new = Self::new(&id, name, email, role, created_at);
            new.phone = details["phone"].as_str().map(String::from);
            new.address = details["address"].as_str().map(String::from);
            new.ward = details["ward"].as_str().map(String::from);
            new.avatar = details["avatar"].as_str().map(String::from);
            result.push(new);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_users_in_file_order() {
        let json = r#"{
            "7": { "name": "Officer Rao", "email": "rao@ulb.gov.in", "role": "officer",
                   "ward": "North Ward", "createdAt": "2023-03-01" },
            "2": { "name": "Citizen Das", "email": "das@example.com", "role": "citizen",
                   "phone": "9876500000", "createdAt": "2023-03-02T08:00:00" }
        }"#;
        let users = User::parse(json).unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, "7");
        assert_eq!(users[0].role, UserRole::Officer);
        assert_eq!(users[0].ward.as_deref(), Some("North Ward"));
        assert_eq!(users[1].phone.as_deref(), Some("9876500000"));
        assert!(users[1].ward.is_none());
    }

    #[test]
    fn unknown_role_is_rejected() {
        let json = r#"{ "1": { "name": "X", "email": "x@y", "role": "mayor", "createdAt": "2023-01-01" } }"#;
        let err = User::parse(json).unwrap_err();
        assert!(err.to_string().contains("mayor"));
    }

    #[test]
    fn missing_email_names_the_field() {
        let json = r#"{ "1": { "name": "X", "role": "admin", "createdAt": "2023-01-01" } }"#;
        let err = User::parse(json).unwrap_err();
        assert!(err.to_string().contains("'email'"));
    }

    #[test]
    fn role_round_trips_through_wire_name() {
        for role in UserRole::ALL {
            assert_eq!(role.as_str().parse::<UserRole>(), Ok(role));
        }
        assert!(!UserRole::Citizen.can_be_assigned());
        assert!(UserRole::Officer.can_be_assigned());
    }
}
