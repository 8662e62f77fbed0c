// Start of file: /src/config/environment.rs

// * Environment configuration for the welcome service.
// * Values come from the process environment (plus .env outside production).

use std::{borrow::Cow, collections::HashMap};
// * anyhow for convenient error handling
use anyhow::{Context, Result};
use tracing::warn;

// ! Default values for environment variables (used if variables aren't set):
const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 9000;
const DEFAULT_TIMEOUT: u64 = 3; // 3 seconds
pub const DEFAULT_WELCOME_BASE_URL: &str = "http://localhost:9000/api";
pub const DEFAULT_WELCOME_V1_BASE_URL: &str = "http://localhost:8080/api/v1";

// * A struct containing all environment variables used by the app
#[derive(Clone, Debug, PartialEq)]
pub struct EnvironmentVariables {
    pub environment: Cow<'static, str>,
    pub host: Cow<'static, str>,
    pub port: u16,
    pub default_timeout_seconds: u64,
    pub welcome_base_url: Cow<'static, str>,
    pub welcome_v1_base_url: Cow<'static, str>,
}

impl Default for EnvironmentVariables {
    fn default() -> Self {
        Self {
            environment: Cow::Borrowed(DEFAULT_ENVIRONMENT),
            host: Cow::Borrowed(DEFAULT_HOST),
            port: DEFAULT_PORT,
            default_timeout_seconds: DEFAULT_TIMEOUT,
            welcome_base_url: Cow::Borrowed(DEFAULT_WELCOME_BASE_URL),
            welcome_v1_base_url: Cow::Borrowed(DEFAULT_WELCOME_V1_BASE_URL),
        }
    }
}

impl EnvironmentVariables {
    // * Loads environment variables from the process.
    // * Only reads .env if ENVIRONMENT != "production".
    pub fn load() -> Result<Self> {
        // ? In non-production environments, attempt to load .env
        if std::env::var("ENVIRONMENT").unwrap_or_default() != "production" {
            dotenv::dotenv().ok();
        }

        // * Collect all environment vars from the system and .env
        let vars: HashMap<String, String> = std::env::vars()
            .chain(dotenv::vars())
            .collect();

        let config: EnvironmentVariables = Self::from_vars(&vars)?;

        if cfg!(debug_assertions) {
            tracing::debug!("Loaded environment configuration: {:#?}", config);
        }

        Ok(config)
    }

    // * Builds the configuration from an arbitrary key/value map,
    // * providing defaults for anything missing.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let get_var = |key: &str| vars.get(key).map(String::as_str);

        let owned = |s: &str| -> Cow<'static, str> { Cow::Owned(s.to_owned()) };

        Ok(Self {
            environment: get_var("ENVIRONMENT")
                .map(owned)
                .unwrap_or_else(|| {
                    warn!("Missing ENVIRONMENT, defaulting to '{DEFAULT_ENVIRONMENT}'");
                    Cow::Borrowed(DEFAULT_ENVIRONMENT)
                }),

            host: get_var("HOST")
                .map(owned)
                .unwrap_or(Cow::Borrowed(DEFAULT_HOST)),

            port: get_var("PORT")
                .map(|s| s.parse().context("Invalid PORT value"))
                .transpose()?
                .unwrap_or(DEFAULT_PORT),

            default_timeout_seconds: get_var("DEFAULT_TIMEOUT_SECONDS")
                .map(|s| s.parse().context("Invalid DEFAULT_TIMEOUT_SECONDS"))
                .transpose()?
                .unwrap_or(DEFAULT_TIMEOUT),

            welcome_base_url: get_var("WELCOME_BASE_URL")
                .map(owned)
                .unwrap_or(Cow::Borrowed(DEFAULT_WELCOME_BASE_URL)),

            welcome_v1_base_url: get_var("WELCOME_V1_BASE_URL")
                .map(owned)
                .unwrap_or(Cow::Borrowed(DEFAULT_WELCOME_V1_BASE_URL)),
        })
    }

    // * Address the listener binds to when no socket is handed over
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn falls_back_to_defaults_when_unset() {
        let config: EnvironmentVariables = EnvironmentVariables::from_vars(&HashMap::new()).unwrap();

        assert_eq!(config, EnvironmentVariables::default());
        assert_eq!(config.welcome_base_url, "http://localhost:9000/api");
        assert_eq!(config.welcome_v1_base_url, "http://localhost:8080/api/v1");
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
    }

    #[test]
    fn overrides_from_vars() {
        let config: EnvironmentVariables = EnvironmentVariables::from_vars(&vars(&[
            ("ENVIRONMENT", "production"),
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("DEFAULT_TIMEOUT_SECONDS", "10"),
            ("WELCOME_BASE_URL", "https://example.com/api"),
            ("WELCOME_V1_BASE_URL", "https://example.com/api/v1"),
        ]))
        .unwrap();

        assert_eq!(config.environment, "production");
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.default_timeout_seconds, 10);
        assert_eq!(config.welcome_base_url, "https://example.com/api");
        assert_eq!(config.welcome_v1_base_url, "https://example.com/api/v1");
    }

    #[test]
    fn rejects_invalid_port() {
        let err: anyhow::Error = EnvironmentVariables::from_vars(&vars(&[("PORT", "ninety")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid PORT value");
    }

    #[test]
    fn rejects_invalid_timeout() {
        let result: Result<EnvironmentVariables> =
            EnvironmentVariables::from_vars(&vars(&[("DEFAULT_TIMEOUT_SECONDS", "-1")]));
        assert!(result.is_err());
    }
}

// End of file: /src/config/environment.rs
