//! Configuration loading and validation for the care notes service.
//!
//! All values are read from `CARE_NOTES_*` environment variables at startup.
//! Every key has a default, so an empty environment yields a working local
//! configuration.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::server::middleware::REQUEST_TIMEOUT;

/// Prefix shared by every environment variable this service reads.
pub const ENV_PREFIX: &str = "CARE_NOTES";

/// Validated service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Address the HTTP server binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the HTTP server listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Tracing log level (e.g. `"info"`, `"debug"`). `RUST_LOG` wins if set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// OTLP/gRPC endpoint for span export. Logs only when unset.
    #[serde(default)]
    pub otel_exporter_otlp_endpoint: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Whether to load the demo notes at startup.
    #[serde(default = "default_seed_notes")]
    pub seed_notes: bool,
}

fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    8000
}
fn default_log_level() -> String {
    "info".into()
}
fn default_request_timeout() -> u64 {
    REQUEST_TIMEOUT.as_secs()
}
fn default_seed_notes() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            otel_exporter_otlp_endpoint: None,
            request_timeout_secs: default_request_timeout(),
            seed_notes: default_seed_notes(),
        }
    }
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or fails validation.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("failed to build configuration from environment")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// Socket address built from `host` and `port`.
    ///
    /// # Errors
    ///
    /// Returns an error if `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .with_context(|| format!("{ENV_PREFIX}_HOST is not an IP address: {}", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Per-request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate all fields, returning a descriptive error on the first failure.
    fn validate(&self) -> Result<()> {
        self.bind_addr()?;
        if self.port == 0 {
            anyhow::bail!("{ENV_PREFIX}_PORT must be > 0");
        }
        if self.request_timeout_secs == 0 {
            anyhow::bail!("{ENV_PREFIX}_REQUEST_TIMEOUT_SECS must be > 0");
        }
        if let Some(endpoint) = &self.otel_exporter_otlp_endpoint {
            if endpoint.trim().is_empty() {
                anyhow::bail!(
                    "{ENV_PREFIX}_OTEL_EXPORTER_OTLP_ENDPOINT must not be empty when set"
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        assert_eq!(default_host(), "0.0.0.0");
        assert_eq!(default_port(), 8000);
        assert_eq!(default_log_level(), "info");
        assert_eq!(default_request_timeout(), 30);
        assert!(default_seed_notes());
    }

    #[test]
    fn default_config_is_valid() {
        let cfg = Config::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.bind_addr().unwrap().to_string(), "0.0.0.0:8000");
        assert_eq!(cfg.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn validate_rejects_zero_port() {
        let cfg = Config {
            port: 0,
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let cfg = Config {
            request_timeout_secs: 0,
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_hostname() {
        let cfg = Config {
            host: "localhost".into(),
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_blank_otlp_endpoint() {
        let cfg = Config {
            otel_exporter_otlp_endpoint: Some("  ".into()),
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn deserialises_from_string_values() {
        let cfg: Config = config::Config::builder()
            .set_override("port", "9001")
            .unwrap()
            .set_override("seed_notes", "false")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(cfg.port, 9001);
        assert!(!cfg.seed_notes);
        assert_eq!(cfg.host, "0.0.0.0");
        assert!(cfg.otel_exporter_otlp_endpoint.is_none());
    }
}
