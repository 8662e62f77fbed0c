// Start of file: /src/utils/mod.rs

/*
    * Helpers shared across the service: layer error mapping and
    * JSON formatting for logs.
*/

pub mod error_handler;
pub mod utils;

// End of file: /src/utils/mod.rs
