use crate::actions::{next_id, ActionError};
use crate::model::{Dataset, User, UserRole};
use chrono::{DateTime, Utc};

/// Fields of the add/edit user dialog. Empty optional fields are stored as absent.
#[derive(Debug, Clone, PartialEq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub phone: String,
    pub ward: String,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: UserRole::Citizen,
            phone: String::new(),
            ward: String::new(),
        }
    }
}

impl UserDraft {
    fn validate(&self) -> Result<(), ActionError> {
        let missing = [("name", &self.name), ("email", &self.email)]
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(ActionError::MissingFields(missing));
        }
        if !self.email.contains('@') {
            return Err(ActionError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }

    fn apply(self, user: &mut User) {
        user.name = self.name.trim().to_string();
        user.email = self.email.trim().to_string();
        user.role = self.role;
        user.phone = non_empty(self.phone);
        user.ward = non_empty(self.ward);
    }
}

fn non_empty(value: String) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl Dataset {
    pub fn add_user(
        &mut self,
        draft: UserDraft,
        now: DateTime<Utc>,
    ) -> Result<&User, ActionError> {
        draft.validate()?;
        self.ensure_email_free(&draft.email, None)?;

        let id = next_id(self.users.iter().map(|u| u.id.as_str()))?;
        let mut user = User::new(&id, "", "", draft.role, now);
        draft.apply(&mut user);
        tracing::info!(user = %id, role = %user.role, "user added");
        self.users.push(user);
        Ok(&self.users[self.users.len() - 1])
    }

    pub fn update_user(&mut self, user_id: &str, draft: UserDraft) -> Result<&User, ActionError> {
        let Some(index) = self.users.iter().position(|user| user.id == user_id) else {
            return Err(ActionError::UnknownUser(user_id.to_string()));
        };
        draft.validate()?;
        self.ensure_email_free(&draft.email, Some(user_id))?;

        let user = &mut self.users[index];
        draft.apply(user);
        tracing::info!(user = user_id, "user updated");
        Ok(user)
    }

    pub fn remove_user(&mut self, user_id: &str) -> Result<User, ActionError> {
        let Some(index) = self.users.iter().position(|user| user.id == user_id) else {
            return Err(ActionError::UnknownUser(user_id.to_string()));
        };
        tracing::info!(user = user_id, "user removed");
        Ok(self.users.remove(index))
    }

    fn ensure_email_free(&self, email: &str, except: Option<&str>) -> Result<(), ActionError> {
        let email = email.trim();
        let taken = self
            .users
            .iter()
            .filter(|user| Some(user.id.as_str()) != except)
            .any(|user| user.email.eq_ignore_ascii_case(email));
        if taken {
            return Err(ActionError::DuplicateEmail(email.to_string()));
        }
        Ok(())
    }
}
