//! HTTP API configuration.

use std::env;

use common::ServiceConfig;
use domain::{DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};

/// HTTP API configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiConfig {
    /// Bind address, service name and log level
    pub service: ServiceConfig,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServiceConfig::default();
        Self {
            service: ServiceConfig {
                host: lookup("USER_CRUD_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
                port: lookup("USER_CRUD_PORT")
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(DEFAULT_SERVER_PORT),
                log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
                service_name: defaults.service_name,
            },
        }
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.service.host = host;
        }
        if let Some(port) = port {
            self.service.port = port;
        }
        self
    }
}
