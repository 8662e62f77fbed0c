// Welcome handlers for the unversioned and v1 routes

use axum::{extract::State, http::StatusCode, Json};
use std::backtrace::Backtrace;
use tracing::{debug, error, info, instrument};

use super::payload::WelcomePayload;
use super::routes::{V1_WELCOME_ROUTE_NAME, WELCOME_ROUTE_NAME};
use crate::config::state::AppState;
use crate::utils::utils::to_two_space_indented_json;

/// `GET /`: API status with the unversioned base URL
#[instrument(fields(backtrace = ?Backtrace::capture()), skip(state))]
pub async fn welcome_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<WelcomePayload>) {
    info!(route = WELCOME_ROUTE_NAME, "Welcome endpoint called");

    respond(WelcomePayload::new(state.environment.welcome_base_url.to_string()))
}

/// `GET /v1/`: API status with the v1 base URL
#[instrument(fields(backtrace = ?Backtrace::capture()), skip(state))]
pub async fn v1_welcome_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<WelcomePayload>) {
    info!(route = V1_WELCOME_ROUTE_NAME, "Welcome endpoint called");

    respond(WelcomePayload::new(state.environment.welcome_v1_base_url.to_string()))
}

fn respond(payload: WelcomePayload) -> (StatusCode, Json<WelcomePayload>) {
    match to_two_space_indented_json(&payload) {
        Ok(spaced_json) => debug!("\nWelcome payload:\n{}", spaced_json),
        Err(err) => error!("Failed to format welcome payload: {:?}", err),
    }

    (StatusCode::OK, Json(payload))
}
