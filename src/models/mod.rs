pub use blog_post::*;
pub use entity::*;
pub use entity_kind::*;
pub use event::*;
pub use gallery_image::*;
pub use partner::*;
pub use resource::*;
pub use submission::*;
pub use team_member::*;
pub use user::*;

mod blog_post;
mod entity;
mod entity_kind;
mod event;
mod gallery_image;
mod partner;
mod resource;
mod submission;
mod team_member;
mod user;
