//! View configuration
//!
//! # Environment
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | FOODFLOW_BASE_URL | http://localhost:5000 | Backend base URL |
//! | FOODFLOW_USER | (empty) | Display name of the signed-in user |
//! | FOODFLOW_ROLE | (required) | admin / manager / member |
//! | FOODFLOW_COUNTRY | (empty) | Country of the signed-in user |
//! | FOODFLOW_SESSION_COOKIE | - | Login session cookie for the backend |
//! | FOODFLOW_TIMEOUT_SECS | 30 | Request timeout |
//! | FOODFLOW_LOG_LEVEL | info | Fallback when `RUST_LOG` is unset |
//! | FOODFLOW_LOG_DIR | - | Also write daily log files here |

use food_client::ClientConfig;
use shared::Session;

use crate::{ViewError, ViewResult};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// Backend base URL
    pub base_url: String,
    /// Values the host page hands over at load time
    pub user_name: String,
    pub role: String,
    pub country: String,
    /// Login session cookie (`session=...`)
    pub session_cookie: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            user_name: String::new(),
            role: String::new(),
            country: String::new(),
            session_cookie: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_level: "info".into(),
            log_dir: None,
        }
    }
}

impl ViewConfig {
    /// Load from the process environment
    pub fn from_env() -> ViewResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> ViewResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let timeout_secs = match lookup("FOODFLOW_TIMEOUT_SECS") {
            Some(value) => value.trim().parse().map_err(|_| ViewError::Config {
                key: "FOODFLOW_TIMEOUT_SECS",
                value,
            })?,
            None => defaults.timeout_secs,
        };

        Ok(Self {
            base_url: lookup("FOODFLOW_BASE_URL").unwrap_or(defaults.base_url),
            user_name: lookup("FOODFLOW_USER").unwrap_or_default(),
            role: lookup("FOODFLOW_ROLE").unwrap_or_default(),
            country: lookup("FOODFLOW_COUNTRY").unwrap_or_default(),
            session_cookie: lookup("FOODFLOW_SESSION_COOKIE").filter(|c| !c.is_empty()),
            timeout_secs,
            log_level: lookup("FOODFLOW_LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: lookup("FOODFLOW_LOG_DIR").filter(|d| !d.is_empty()),
        })
    }

    /// Validate the host-provided values into a [`Session`]
    pub fn session(&self) -> ViewResult<Session> {
        Ok(Session::parse(&self.user_name, &self.role, &self.country)?)
    }

    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(&self.base_url).with_timeout(self.timeout_secs);
        match &self.session_cookie {
            Some(cookie) => config.with_session_cookie(cookie),
            None => config,
        }
    }
}
