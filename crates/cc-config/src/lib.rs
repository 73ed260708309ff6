//! # cc-config
//!
//! Layered runtime settings for the CampusCommons web client.
//!
//! Sources, lowest priority first:
//! 1. Built-in defaults (backend at `http://localhost:8080`)
//! 2. An optional `campus-commons.toml` in the working directory
//! 3. `CC_`-prefixed environment variables
//!
//! The binary loads `.env` into the environment before calling `load`.

use config::{Config, ConfigBuilder, Environment, File};
use config::builder::DefaultState;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: i64 = 10;
/// Same key the browser client used for its local-storage entry.
pub const DEFAULT_SESSION_COOKIE: &str = "currentUser";

const CONFIG_FILE: &str = "campus-commons";
const ENV_PREFIX: &str = "CC";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid setting `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Origin of the REST backend, without a trailing slash
    pub api_base_url: String,
    /// Address the web client listens on
    pub bind_addr: String,
    pub request_timeout_secs: u64,
    /// Name of the cookie that carries the session blob
    pub session_cookie: String,
}

impl Settings {
    /// Reads every configured source.
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Self::defaults()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        Self::from_builder(builder)
    }

    /// A builder pre-seeded with the built-in defaults.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .set_default("bind_addr", DEFAULT_BIND_ADDR)?
            .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS)?
            .set_default("session_cookie", DEFAULT_SESSION_COOKIE)?)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let mut settings: Settings = builder.build()?.try_deserialize()?;
        settings.api_base_url = settings.api_base_url.trim_end_matches('/').to_string();
        settings.validate()?;
        log::debug!("settings: {settings:?}");
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                key: "api_base_url",
                reason: format!("expected an http(s) origin, got {:?}", self.api_base_url),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "request_timeout_secs",
                reason: "must be at least 1".into(),
            });
        }
        if self.session_cookie.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "session_cookie",
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn defaults_point_at_the_local_backend() {
        let settings = Settings::from_builder(Settings::defaults().unwrap()).unwrap();
        assert_eq!(settings.api_base_url, "http://localhost:8080");
        assert_eq!(settings.bind_addr, "127.0.0.1:3000");
        assert_eq!(settings.request_timeout_secs, 10);
        assert_eq!(settings.session_cookie, "currentUser");
    }

    #[test]
    fn file_overrides_defaults_and_trailing_slash_is_dropped() {
        let builder = Settings::defaults().unwrap().add_source(File::from_str(
            "api_base_url = \"https://forum.example.edu/\"\nrequest_timeout_secs = 3",
            FileFormat::Toml,
        ));
        let settings = Settings::from_builder(builder).unwrap();
        assert_eq!(settings.api_base_url, "https://forum.example.edu");
        assert_eq!(settings.request_timeout_secs, 3);
        assert_eq!(settings.bind_addr, DEFAULT_BIND_ADDR);
    }

    #[test]
    fn rejects_non_http_origin() {
        let builder = Settings::defaults()
            .unwrap()
            .set_override("api_base_url", "localhost:8080")
            .unwrap();
        let err = Settings::from_builder(builder).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "api_base_url", .. }));
    }

    #[test]
    fn rejects_zero_timeout() {
        let builder = Settings::defaults()
            .unwrap()
            .set_override("request_timeout_secs", 0i64)
            .unwrap();
        assert!(Settings::from_builder(builder).is_err());
    }
}
