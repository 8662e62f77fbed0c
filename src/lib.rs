// Library root for the welcome API service

pub mod api;
pub mod config;
pub mod core;
pub mod middlewares;
pub mod utils;

pub use crate::api::welcome::WelcomePayload;
pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::core::server::create_app;
