//! Command-line and environment configuration for the two binaries.

use std::net::SocketAddr;
use std::time::Duration;

use clap::{Args, Parser, ValueEnum};

const DEFAULT_USER_BIND: &str = "0.0.0.0:8081";
const DEFAULT_ORDER_BIND: &str = "0.0.0.0:8082";
const DEFAULT_USER_SERVICE_URL: &str = "http://localhost:8081";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),
    #[error("user service URL must start with http:// or https://, got {0:?}")]
    InvalidUserServiceUrl(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable output.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Settings shared by both services.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Overall deadline for handling one inbound request, in milliseconds.
    #[arg(long, env = "REQUEST_TIMEOUT_MS", default_value_t = 30_000)]
    pub request_timeout_ms: u64,

    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Start with an empty store instead of the built-in fixtures.
    #[arg(long, env = "NO_FIXTURES")]
    pub no_fixtures: bool,
}

impl CommonArgs {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout("request timeout"));
        }
        Ok(())
    }
}

/// User registry service.
#[derive(Debug, Clone, Parser)]
#[command(name = "user-service", version, about)]
pub struct UserServiceConfig {
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = DEFAULT_USER_BIND)]
    pub bind: SocketAddr,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl UserServiceConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.common.validate()
    }
}

/// Order registry service. Confirms order owners against the user service.
#[derive(Debug, Clone, Parser)]
#[command(name = "order-service", version, about)]
pub struct OrderServiceConfig {
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = DEFAULT_ORDER_BIND)]
    pub bind: SocketAddr,

    /// Base URL of the user service.
    #[arg(long, env = "USER_SERVICE_URL", default_value = DEFAULT_USER_SERVICE_URL)]
    pub user_service_url: String,

    /// Ceiling on each user-service call made while handling a request, in milliseconds.
    #[arg(long, env = "PEER_TIMEOUT_MS", default_value_t = 3_000)]
    pub peer_timeout_ms: u64,

    /// Fixed timeout of the HTTP client itself, in milliseconds.
    #[arg(long, env = "CLIENT_TIMEOUT_MS", default_value_t = 5_000)]
    pub client_timeout_ms: u64,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl OrderServiceConfig {
    pub fn peer_timeout(&self) -> Duration {
        Duration::from_millis(self.peer_timeout_ms)
    }

    pub fn client_timeout(&self) -> Duration {
        Duration::from_millis(self.client_timeout_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.common.validate()?;
        if self.peer_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout("peer timeout"));
        }
        if self.client_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout("client timeout"));
        }
        let url = self.user_service_url.as_str();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidUserServiceUrl(url.to_string()));
        }
        Ok(())
    }
}
