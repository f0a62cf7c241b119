use actix_web::{HttpResponse, Responder, post, web};
use serde_json::json;

use orgpress::models::{
    BlogPost, Event, GalleryImage, MembershipSubmission, MembershipSubmissionCreate, Partner,
    Resource, TeamMember,
};
use orgpress::store::Stored;

use crate::web::handlers::entities::list;
use crate::web::state::AppState;

#[post("/submissions")]
pub async fn submit_membership(
    state: web::Data<AppState>,
    body: web::Json<MembershipSubmissionCreate>,
) -> impl Responder {
    let submission = body.into_inner();

    let missing: Vec<&str> = [
        ("name", &submission.name),
        ("email", &submission.email),
        ("membership_type", &submission.membership_type),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| field)
    .collect();

    if !missing.is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "error": "Missing required fields",
            "fields": missing,
        }));
    }

    let id = state.store_mut().add_submission(submission);
    log::info!("Membership submission {} received", id);
    HttpResponse::Created().json(json!({ "id": id }))
}

// Kinds that are not public get no read route at all.
fn readable<T: Stored>(cfg: &mut web::ServiceConfig) {
    if T::KIND.is_public() {
        cfg.route(&format!("/{}", T::KIND), web::get().to(list::<T>));
    }
}

/// Read-only site content plus the membership form endpoint.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").configure(|cfg| {
        readable::<Event>(cfg);
        readable::<TeamMember>(cfg);
        readable::<BlogPost>(cfg);
        readable::<Resource>(cfg);
        readable::<GalleryImage>(cfg);
        readable::<MembershipSubmission>(cfg);
        readable::<Partner>(cfg);
        cfg.service(submit_membership);
    }));
}
