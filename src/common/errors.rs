use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed seed data: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum AuthError {
    #[error("Incorrect password")]
    IncorrectPassword,

    #[error("Password hashing failed: {0}")]
    Hashing(String),
}

/// Local validation failures of the account settings forms.
///
/// The `Display` text is exactly what the form shows to the admin.
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum SettingsError {
    #[error("Username cannot be empty.")]
    EmptyUsername,

    #[error("Incorrect password.")]
    IncorrectPassword,

    #[error("New passwords do not match.")]
    PasswordMismatch,

    #[error("New password must be at least 6 characters long.")]
    PasswordTooShort,

    #[error("Incorrect old password.")]
    IncorrectOldPassword,
}

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}
