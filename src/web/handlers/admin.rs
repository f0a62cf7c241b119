use actix_web::{Responder, get, web};

use orgpress::models::EntityKind;

use crate::web::helpers::render;
use crate::web::state::AppState;
use crate::web::templates::{AdminDashboardTemplate, KindCount};

#[get("")]
pub async fn admin_dashboard(state: web::Data<AppState>) -> impl Responder {
    let counts = {
        let store = state.store();
        EntityKind::ALL
            .into_iter()
            .map(|kind| KindCount {
                kind,
                count: store.count(kind),
            })
            .collect()
    };
    let username = state.admin().username.clone();

    render(AdminDashboardTemplate { username, counts })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(admin_dashboard);
}
