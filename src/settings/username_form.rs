use crate::common::SettingsError;
use crate::services::Authenticator;

use super::FormMessage;

pub const USERNAME_CHANGED: &str = "Username changed successfully!";

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct UsernameForm {
    new_username: String,
    current_password: String,
    message: Option<FormMessage>,
}

impl UsernameForm {
    pub fn new_username(&self) -> &str {
        &self.new_username
    }

    pub fn current_password(&self) -> &str {
        &self.current_password
    }

    pub fn message(&self) -> Option<&FormMessage> {
        self.message.as_ref()
    }

    // Editing a field drops the form back to idle.
    pub fn set_new_username(&mut self, value: impl Into<String>) {
        self.new_username = value.into();
        self.message = None;
    }

    pub fn set_current_password(&mut self, value: impl Into<String>) {
        self.current_password = value.into();
        self.message = None;
    }

    /// Returns the trimmed username the change would apply.
    pub fn validate(&self) -> Result<&str, SettingsError> {
        let trimmed = self.new_username.trim();
        if trimmed.is_empty() {
            return Err(SettingsError::EmptyUsername);
        }
        Ok(trimmed)
    }

    pub fn submit<A: Authenticator + ?Sized>(&mut self, auth: &mut A) -> &FormMessage {
        self.message = None;

        let validated = self.validate().map(str::to_string);
        let new_username = match validated {
            Ok(name) => name,
            Err(e) => return self.message.insert(e.into()),
        };

        let message = match auth.change_username(&self.current_password, &new_username) {
            Ok(()) => {
                self.new_username.clear();
                self.current_password.clear();
                FormMessage::success(USERNAME_CHANGED)
            }
            Err(e) => {
                log::warn!("Username change rejected: {}", e);
                SettingsError::IncorrectPassword.into()
            }
        };

        self.message.insert(message)
    }
}
