//! Console configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use fleet_infra::HttpConfig;

#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Scheme, host and port of the inventory API.
    pub api_url: String,
    /// Where the session token is kept between runs.
    pub session_file: PathBuf,
    pub request_timeout: Duration,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1:8080".to_string(),
            session_file: PathBuf::from(".fleet-session.json"),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ConsoleConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Unset or unparsable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            api_url: lookup("API_URL").unwrap_or(defaults.api_url),
            session_file: lookup("SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.session_file),
            request_timeout: lookup("REQUEST_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
        }
    }

    pub fn http(&self) -> HttpConfig {
        HttpConfig {
            base_url: self.api_url.clone(),
            timeout: self.request_timeout,
        }
    }
}
