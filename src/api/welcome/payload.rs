// Start of file: /src/api/welcome/payload.rs

/*
    * The JSON document returned by the welcome endpoints.
    * Only `baseUrl` varies, depending on which route served the request.
*/

use serde::{Deserialize, Serialize};

pub const WELCOME_STATUS: &str = "success";
pub const API_VERSION: &str = "v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WelcomePayload {
    pub status: String,
    pub version: String,
    pub base_url: String,
}

impl WelcomePayload {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            status: WELCOME_STATUS.to_owned(),
            version: API_VERSION.to_owned(),
            base_url: base_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_camel_case_keys() {
        let payload: WelcomePayload = WelcomePayload::new("http://localhost:9000/api");

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "status": "success",
                "version": "v1",
                "baseUrl": "http://localhost:9000/api",
            })
        );
    }
}

// End of file: /src/api/welcome/payload.rs
