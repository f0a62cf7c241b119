use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        Error, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use std::ops::DerefMut;
use std::sync::OnceLock;

use crate::common::AuthError;
use crate::models::AdminUser;

pub struct PasswordManager;

static INSTANCE: OnceLock<Argon2> = OnceLock::new();

impl PasswordManager {
    // argon2id at the crate's recommended cost: 19 MiB, two passes, one lane.
    fn engine() -> &'static Argon2<'static> {
        INSTANCE.get_or_init(|| Argon2::new(Algorithm::Argon2id, Version::V0x13, Params::DEFAULT))
    }

    pub fn hash_password(password: &str) -> Result<String, Error> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::engine().hash_password(password.as_bytes(), &salt)?;

        Ok(hash.to_string())
    }

    pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, Error> {
        let parsed_hash = PasswordHash::new(stored_hash)?;

        let result = Self::engine().verify_password(password.as_bytes(), &parsed_hash);

        match result {
            Ok(_) => Ok(true),
            Err(Error::Password) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

/// What the settings panel needs from whoever owns the admin credentials.
pub trait Authenticator {
    fn is_authenticated(&self) -> bool;

    fn current_username(&self) -> &str;

    fn change_password(&mut self, old_password: &str, new_password: &str) -> Result<(), AuthError>;

    fn change_username(&mut self, password: &str, new_username: &str) -> Result<(), AuthError>;
}

/// An admin account viewed through one request (or one client session).
///
/// `A` is anything that hands out `&mut AdminUser`: a plain borrow, or the
/// guard of the mutex the server keeps the account in.
pub struct AdminSession<A> {
    admin: A,
    authenticated: bool,
}

impl<A: DerefMut<Target = AdminUser>> AdminSession<A> {
    pub fn new(admin: A, authenticated: bool) -> Self {
        Self {
            admin,
            authenticated,
        }
    }
}

impl<A: DerefMut<Target = AdminUser>> Authenticator for AdminSession<A> {
    fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    fn current_username(&self) -> &str {
        &self.admin.username
    }

    fn change_password(&mut self, old_password: &str, new_password: &str) -> Result<(), AuthError> {
        self.admin.change_password(old_password, new_password)
    }

    fn change_username(&mut self, password: &str, new_username: &str) -> Result<(), AuthError> {
        self.admin.change_username(password, new_username)
    }
}
