use actix_web::{HttpRequest, Responder, get, post, web};

use orgpress::services::{AdminSession, Authenticator};
use orgpress::settings::SettingsPanel;

use crate::web::forms::{PasswordChangeForm, UsernameChangeForm};
use crate::web::helpers::{is_authenticated, render};
use crate::web::state::AppState;
use crate::web::templates::AdminSettingsTemplate;

#[get("/settings")]
pub async fn settings_page(state: web::Data<AppState>) -> impl Responder {
    let username = state.admin().username.clone();
    render(AdminSettingsTemplate::from_panel(
        username,
        &SettingsPanel::default(),
    ))
}

#[post("/settings/username")]
pub async fn settings_change_username(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<UsernameChangeForm>,
) -> impl Responder {
    let UsernameChangeForm {
        new_username,
        current_password,
    } = form.into_inner();

    let mut panel = SettingsPanel::default();
    panel.username.set_new_username(new_username);
    panel.username.set_current_password(current_password);

    let authenticated = is_authenticated(&req, &state);
    let username = {
        let mut session = AdminSession::new(state.admin(), authenticated);
        panel.submit_username(&mut session);
        session.current_username().to_string()
    };

    render(AdminSettingsTemplate::from_panel(username, &panel))
}

#[post("/settings/password")]
pub async fn settings_change_password(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<PasswordChangeForm>,
) -> impl Responder {
    let PasswordChangeForm {
        old_password,
        new_password,
        confirm_password,
    } = form.into_inner();

    let mut panel = SettingsPanel::default();
    panel.password.set_old_password(old_password);
    panel.password.set_new_password(new_password);
    panel.password.set_confirm_password(confirm_password);

    let authenticated = is_authenticated(&req, &state);
    let username = {
        let mut session = AdminSession::new(state.admin(), authenticated);
        panel.submit_password(&mut session);
        session.current_username().to_string()
    };

    render(AdminSettingsTemplate::from_panel(username, &panel))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(settings_page)
        .service(settings_change_username)
        .service(settings_change_password);
}
