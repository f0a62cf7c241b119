use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};

use crate::web::forms::{AuthQuery, LoginForm};
use crate::web::helpers::{
    is_authenticated, removal_cookie, render, see_other, session_cookie, session_token,
};
use crate::web::state::AppState;
use crate::web::templates::LoginTemplate;

#[get("/login")]
pub async fn login_form(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<AuthQuery>,
) -> impl Responder {
    if is_authenticated(&req, &state) {
        return see_other("/admin");
    }

    let error = query.error.as_deref().map(|code| match code {
        "missing" => "Username and password are required".to_string(),
        "invalid" => "Invalid username or password".to_string(),
        other => other.to_string(),
    });

    render(LoginTemplate { error })
}

#[post("/login")]
pub async fn login_submit(
    state: web::Data<AppState>,
    form: web::Form<LoginForm>,
) -> impl Responder {
    let username = form.username.trim();
    if username.is_empty() || form.password.is_empty() {
        return see_other("/login?error=missing");
    }

    if let Err(e) = state.admin().verify_login(username, &form.password) {
        log::warn!("Failed login attempt for '{}': {}", username, e);
        return see_other("/login?error=invalid");
    }

    let token = state.sessions.create();
    log::info!("Admin '{}' logged in", username);

    HttpResponse::SeeOther()
        .cookie(session_cookie(token, &state))
        .insert_header(("Location", "/admin"))
        .finish()
}

#[post("/logout")]
pub async fn logout(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    if let Some(token) = session_token(&req) {
        state.sessions.revoke(&token);
    }

    HttpResponse::SeeOther()
        .cookie(removal_cookie())
        .insert_header(("Location", "/login"))
        .finish()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(login_form)
        .service(login_submit)
        .service(logout);
}
