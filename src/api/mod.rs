// Start of file: /src/api/mod.rs

/*
    * HTTP surface of the service. Each feature folder owns its
    * handlers and the router that registers them.
*/

use axum::Router;

use crate::config::state::AppState;

pub mod welcome;

/// Every route the service answers, before middleware is applied
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(welcome::welcome_routes())
        .merge(welcome::v1_welcome_routes())
}

// End of file: /src/api/mod.rs
