//! Server configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use fleet_infra::JwtConfig;

/// Mock server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Fixture seed; a random inventory is generated when unset.
    pub seed: Option<u64>,
    /// Simulated latency before every API response.
    pub delay: Duration,
    pub user_email: String,
    pub user_password: String,
    /// Reject API calls without a valid bearer token.
    pub require_auth: bool,
    pub jwt: JwtConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            seed: None,
            delay: Duration::from_millis(150),
            user_email: "user@example.com".to_string(),
            user_password: "Password123".to_string(),
            require_auth: false,
            jwt: JwtConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`; unset or unparsable values fall
    /// back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            seed: lookup("MOCK_SEED").and_then(|s| s.parse().ok()),
            delay: lookup("MOCK_DELAY_MS")
                .and_then(|ms| ms.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.delay),
            user_email: lookup("MOCK_USER_EMAIL").unwrap_or(defaults.user_email),
            user_password: lookup("MOCK_USER_PASSWORD").unwrap_or(defaults.user_password),
            require_auth: lookup("MOCK_REQUIRE_AUTH")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.require_auth),
            jwt: JwtConfig::from_lookup(&lookup),
        }
    }
}
