// Application state shared by every route

use std::sync::Arc;
use crate::config::environment::EnvironmentVariables;

/// Immutable state handed to handlers through `State<AppState>`.
/// Cloning only bumps the reference count.
#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
}

impl AppState {
    /// Wraps an already loaded configuration
    pub fn new(environment: EnvironmentVariables) -> Self {
        Self {
            environment: Arc::new(environment),
        }
    }

    /// Loads the configuration from the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        let environment: EnvironmentVariables = EnvironmentVariables::load()?;
        Ok(Self::new(environment))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(EnvironmentVariables::default())
    }
}
