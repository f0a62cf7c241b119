use crate::common::AuthError;
use crate::models::AdminUser;

use super::PasswordManager;

impl AdminUser {
    pub fn new(username: impl Into<String>, password: &str) -> Result<Self, AuthError> {
        let password_hash = PasswordManager::hash_password(password)
            .map_err(|e| AuthError::Hashing(e.to_string()))?;

        Ok(Self {
            username: username.into(),
            password_hash,
        })
    }

    pub fn verify_password(&self, password: &str) -> Result<(), AuthError> {
        match PasswordManager::verify_password(password, &self.password_hash) {
            Ok(true) => Ok(()),
            Ok(false) => Err(AuthError::IncorrectPassword),
            Err(e) => {
                log::error!("Password verification error: {}", e);
                Err(AuthError::Hashing(e.to_string()))
            }
        }
    }

    /// Checks a login attempt. The password is verified even when the
    /// username is wrong so both failures take the same time.
    pub fn verify_login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let password_ok = self.verify_password(password);
        if username.trim() != self.username {
            return Err(AuthError::IncorrectPassword);
        }
        password_ok
    }

    pub fn change_password(&mut self, old_password: &str, new_password: &str) -> Result<(), AuthError> {
        self.verify_password(old_password)?;

        self.password_hash = PasswordManager::hash_password(new_password).map_err(|e| {
            log::error!("Password hashing error: {}", e);
            AuthError::Hashing(e.to_string())
        })?;
        log::info!("Admin password changed");
        Ok(())
    }

    pub fn change_username(&mut self, password: &str, new_username: &str) -> Result<(), AuthError> {
        self.verify_password(password)?;

        log::info!("Admin username changed from '{}' to '{}'", self.username, new_username);
        self.username = new_username.to_string();
        Ok(())
    }
}
