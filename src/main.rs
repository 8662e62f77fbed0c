// Start of file: src/main.rs

use axum::{Router, serve};
use tokio::net::TcpListener;

use welcome_api::config::state::AppState;
use welcome_api::core::{logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let state: AppState = AppState::from_env()?;
    let listener: TcpListener = server::setup_listener(&state.environment).await?;

    tracing::info!(
        environment = %state.environment.environment,
        "Server listening on: {}",
        listener.local_addr()?
    );

    let app: Router = server::create_app(state);

    serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    Ok(())
}

// End of file: src/main.rs
