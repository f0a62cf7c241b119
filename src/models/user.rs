use serde::Serialize;

/// The single administrator allowed into `/admin`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct AdminUser {
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}
