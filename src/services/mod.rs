pub use auth::*;
pub use session::*;

mod account;
mod auth;
mod session;
