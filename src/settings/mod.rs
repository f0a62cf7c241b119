//! Account settings: one form for the admin username, one for the password.
//!
//! The forms hold their own field values and message and are submitted
//! against any [`Authenticator`](crate::services::Authenticator). They never
//! share state, so submitting one leaves the other untouched.

pub use message::*;
pub use password_form::*;
pub use username_form::*;

mod message;
mod password_form;
mod username_form;

use crate::services::Authenticator;

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct SettingsPanel {
    pub username: UsernameForm,
    pub password: PasswordForm,
}

impl SettingsPanel {
    pub fn submit_username<A: Authenticator + ?Sized>(&mut self, auth: &mut A) -> &FormMessage {
        self.username.submit(auth)
    }

    pub fn submit_password<A: Authenticator + ?Sized>(&mut self, auth: &mut A) -> &FormMessage {
        self.password.submit(auth)
    }
}
