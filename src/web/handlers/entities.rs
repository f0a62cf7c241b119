use actix_web::{HttpResponse, web};
use serde_json::json;

use orgpress::models::{
    BlogPost, EntityId, Event, GalleryImage, MembershipSubmission, Partner, Resource, TeamMember,
};
use orgpress::store::Stored;

use crate::web::state::AppState;

pub async fn list<T: Stored>(state: web::Data<AppState>) -> HttpResponse {
    let items = state.store().all::<T>();
    HttpResponse::Ok().json(&*items)
}

async fn show<T: Stored>(state: web::Data<AppState>, path: web::Path<EntityId>) -> HttpResponse {
    let id = path.into_inner();
    match state.store().get::<T>(id) {
        Some(item) => HttpResponse::Ok().json(item),
        None => HttpResponse::NotFound().json(json!({
            "error": format!("No {} with id {}", T::KIND, id),
        })),
    }
}

async fn create<T: Stored>(state: web::Data<AppState>, body: web::Json<T::Create>) -> HttpResponse {
    let id = state.store_mut().add::<T>(body.into_inner());
    HttpResponse::Created().json(json!({ "id": id }))
}

/// Answers 204 whether or not the id existed.
async fn update<T: Stored>(
    state: web::Data<AppState>,
    path: web::Path<EntityId>,
    body: web::Json<T>,
) -> HttpResponse {
    let id = path.into_inner();
    let record = body.into_inner();
    if record.id() != id {
        return HttpResponse::BadRequest().json(json!({
            "error": format!("Body id {} does not match path id {}", record.id(), id),
        }));
    }

    state.store_mut().update(record);
    HttpResponse::NoContent().finish()
}

async fn delete<T: Stored>(state: web::Data<AppState>, path: web::Path<EntityId>) -> HttpResponse {
    state.store_mut().delete::<T>(path.into_inner());
    HttpResponse::NoContent().finish()
}

fn crud<T: Stored>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(format!("/api/{}", T::KIND))
            .route(web::get().to(list::<T>))
            .route(web::post().to(create::<T>)),
    )
    .service(
        web::resource(format!("/api/{}/{{id}}", T::KIND))
            .route(web::get().to(show::<T>))
            .route(web::put().to(update::<T>))
            .route(web::delete().to(delete::<T>)),
    );
}

/// Admin CRUD over every collection, mounted under the guarded `/admin` scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    crud::<Event>(cfg);
    crud::<TeamMember>(cfg);
    crud::<BlogPost>(cfg);
    crud::<Resource>(cfg);
    crud::<GalleryImage>(cfg);
    crud::<MembershipSubmission>(cfg);
    crud::<Partner>(cfg);
}
