// Start of file: /src/api/welcome/routes.rs

/*
    * Registers the welcome handler twice: once at the root and once
    * inside the `v1` prefix group. Both answer GET only; other methods
    * get axum's default 405 and unknown paths its default 404.
*/

use axum::{routing::get, Router};

use super::handler::{v1_welcome_handler, welcome_handler};
use crate::config::state::AppState;

pub const WELCOME_PATH: &str = "/";
pub const V1_WELCOME_PATH: &str = "/v1/";

pub const WELCOME_ROUTE_NAME: &str = "api.welcome";
pub const V1_WELCOME_ROUTE_NAME: &str = "api.v1.welcome";

pub fn welcome_routes() -> Router<AppState> {
    Router::new().route(WELCOME_PATH, get(welcome_handler))
}

// The trailing slash is part of the path; `/v1` alone is not registered.
pub fn v1_welcome_routes() -> Router<AppState> {
    Router::new().route(V1_WELCOME_PATH, get(v1_welcome_handler))
}

// End of file: /src/api/welcome/routes.rs
