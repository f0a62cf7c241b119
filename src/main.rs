mod web;

use actix_web::web::Data;
use actix_web::{App, HttpServer};

use orgpress::config::AppConfig;
use orgpress::models::AdminUser;
use orgpress::services::SessionStore;
use orgpress::store::{EntityStore, Seed};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    let seed = match &config.seed_path {
        Some(path) => {
            log::info!("Loading seed data from {}", path.display());
            Seed::load(path)
        }
        None => Seed::demo(),
    }
    .map_err(std::io::Error::other)?;

    if config.uses_default_password() {
        log::warn!("ORGPRESS_ADMIN_PASSWORD is not set; using the default admin password");
    }
    let admin = AdminUser::new(config.admin_username.clone(), &config.admin_password)
        .map_err(std::io::Error::other)?;

    let state = Data::new(web::AppState::new(
        EntityStore::new(seed),
        admin,
        SessionStore::new(config.session_ttl),
    ));

    log::info!("Listening on {}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(web::handlers::configure)
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
