// Start of file: /src/config/mod.rs

/*
* Service configuration: environment variables and the state built from them.
*/

pub mod environment;
pub mod state;

pub use environment::EnvironmentVariables;
pub use state::AppState;

// End of file: /src/config/mod.rs
