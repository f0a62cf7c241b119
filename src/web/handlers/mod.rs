pub mod account;
pub mod admin;
pub mod auth;
pub mod entities;
pub mod public;

use actix_web::web;

use crate::web::middleware::RequireAdmin;

/// Everything under `/admin` sits behind the session guard; login, logout
/// and the public API do not.
pub fn configure(cfg: &mut web::ServiceConfig) {
    auth::configure(cfg);
    public::configure(cfg);
    cfg.service(
        web::scope("/admin")
            .wrap(RequireAdmin)
            .configure(admin::configure)
            .configure(account::configure)
            .configure(entities::configure),
    );
}
