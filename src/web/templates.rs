use askama::Template;

use orgpress::models::EntityKind;
use orgpress::settings::{FormMessage, SettingsPanel};

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

pub struct KindCount {
    pub kind: EntityKind,
    pub count: usize,
}

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
pub struct AdminDashboardTemplate {
    pub username: String,
    pub counts: Vec<KindCount>,
}

/// Password fields are never written back into the page.
#[derive(Template)]
#[template(path = "admin/settings.html")]
pub struct AdminSettingsTemplate {
    pub username: String,
    pub new_username: String,
    pub username_message: Option<FormMessage>,
    pub password_message: Option<FormMessage>,
}

impl AdminSettingsTemplate {
    pub fn from_panel(username: String, panel: &SettingsPanel) -> Self {
        Self {
            username,
            new_username: panel.username.new_username().to_string(),
            username_message: panel.username.message().cloned(),
            password_message: panel.password.message().cloned(),
        }
    }
}
