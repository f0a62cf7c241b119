pub mod common;
pub mod config;
pub mod guard;
pub mod models;
pub mod services;
pub mod settings;
pub mod store;
