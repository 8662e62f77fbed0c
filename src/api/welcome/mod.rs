pub mod handler;
pub mod payload;
pub mod routes;

pub use payload::WelcomePayload;
pub use routes::{v1_welcome_routes, welcome_routes};
