use crate::common::SettingsError;
use crate::services::Authenticator;

use super::FormMessage;

pub const PASSWORD_CHANGED: &str = "Password changed successfully!";
pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct PasswordForm {
    old_password: String,
    new_password: String,
    confirm_password: String,
    message: Option<FormMessage>,
}

impl PasswordForm {
    pub fn old_password(&self) -> &str {
        &self.old_password
    }

    pub fn new_password(&self) -> &str {
        &self.new_password
    }

    pub fn confirm_password(&self) -> &str {
        &self.confirm_password
    }

    pub fn message(&self) -> Option<&FormMessage> {
        self.message.as_ref()
    }

    pub fn set_old_password(&mut self, value: impl Into<String>) {
        self.old_password = value.into();
        self.message = None;
    }

    pub fn set_new_password(&mut self, value: impl Into<String>) {
        self.new_password = value.into();
        self.message = None;
    }

    pub fn set_confirm_password(&mut self, value: impl Into<String>) {
        self.confirm_password = value.into();
        self.message = None;
    }

    /// Mismatch is reported before length.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.new_password != self.confirm_password {
            return Err(SettingsError::PasswordMismatch);
        }
        if self.new_password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(SettingsError::PasswordTooShort);
        }
        Ok(())
    }

    pub fn submit<A: Authenticator + ?Sized>(&mut self, auth: &mut A) -> &FormMessage {
        self.message = None;

        if let Err(e) = self.validate() {
            return self.message.insert(e.into());
        }

        let message = match auth.change_password(&self.old_password, &self.new_password) {
            Ok(()) => {
                self.old_password.clear();
                self.new_password.clear();
                self.confirm_password.clear();
                FormMessage::success(PASSWORD_CHANGED)
            }
            Err(e) => {
                log::warn!("Password change rejected: {}", e);
                SettingsError::IncorrectOldPassword.into()
            }
        };

        self.message.insert(message)
    }
}
