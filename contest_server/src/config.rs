//! Server configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use contest_core::contest::state_machine::validate_best_of;
use std::net::{Ipv4Addr, SocketAddr};

/// Default bind address when neither `--bind` nor `SERVER_BIND` is given
pub const DEFAULT_BIND: SocketAddr = SocketAddr::new(std::net::IpAddr::V4(Ipv4Addr::LOCALHOST), 8000);

/// Best-of used for new contests that do not specify one
pub const DEFAULT_BEST_OF: u32 = 3;

/// Complete server configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Server bind address
    pub bind: SocketAddr,
    /// Allowed CORS origin. Any origin is allowed when unset.
    pub cors_allow_origin: Option<String>,
    /// Best-of applied when a create-contest request omits it
    pub default_best_of: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND,
            cors_allow_origin: None,
            default_best_of: DEFAULT_BEST_OF,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `bind_override` - Optional bind address override (from CLI args)
    ///
    /// # Errors
    ///
    /// Returns error if `SERVER_BIND` is set but is not a socket address
    pub fn from_env(bind_override: Option<SocketAddr>) -> Result<Self, ConfigError> {
        let bind = match bind_override {
            Some(bind) => bind,
            None => match std::env::var("SERVER_BIND") {
                Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                    var: "SERVER_BIND".to_string(),
                    reason: format!("'{raw}' is not an IP:PORT address"),
                })?,
                Err(_) => DEFAULT_BIND,
            },
        };

        let cors_allow_origin = std::env::var("CORS_ALLOW_ORIGIN")
            .ok()
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty());

        Ok(ServerConfig {
            bind,
            cors_allow_origin,
            default_best_of: parse_env_or("DEFAULT_BEST_OF", DEFAULT_BEST_OF),
        })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if validate_best_of(self.default_best_of).is_err() {
            return Err(ConfigError::Invalid {
                var: "DEFAULT_BEST_OF".to_string(),
                reason: format!(
                    "Must be a positive odd number, got {}",
                    self.default_best_of
                ),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse environment variable with default fallback
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
