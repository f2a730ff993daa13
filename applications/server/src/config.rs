/// Gateway configuration
use crate::error::{GatewayError, Result};
use portal_core::UpstreamBases;
use portal_upstream::UpstreamConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default configuration file, read when present
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatewayConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    /// Base URLs of the upstream services
    #[serde(default)]
    pub upstream: UpstreamBases,

    #[serde(default = "default_timeouts")]
    pub timeouts: TimeoutSettings,

    #[serde(default)]
    pub auth: AuthSettings,

    #[serde(default = "default_session")]
    pub session: SessionSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TimeoutSettings {
    /// Timeout of an ordinary upstream call
    #[serde(default = "default_timeout_ms")]
    pub default_ms: u64,

    /// Timeout of the long-running social routes
    #[serde(default = "default_social_timeout_ms")]
    pub social_ms: u64,
}

/// Token verification.
///
/// With neither key set, tokens are decoded without checking signatures;
/// the gateway then relies on the identity provider's adapter in front of it.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthSettings {
    /// HS256 shared secret
    #[serde(default)]
    pub jwt_secret: Option<String>,

    /// RS256 public key (PEM)
    #[serde(default)]
    pub jwt_public_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionSettings {
    /// Keep sessions across restarts in `path`
    #[serde(default)]
    pub persistent: bool,

    #[serde(default = "default_session_path")]
    pub path: PathBuf,

    #[serde(default = "default_session_ttl_secs")]
    pub ttl_secs: u64,

    /// How often expired sessions are swept while serving
    #[serde(default = "default_session_sweep_secs")]
    pub sweep_secs: u64,
}

impl GatewayConfig {
    /// Load configuration from file and environment.
    ///
    /// `path` defaults to `config.toml`; a missing default file is not an
    /// error, a missing explicit one is. Environment variables prefixed with
    /// `PORTAL_` override the file, `__` separating sections
    /// (`PORTAL_UPSTREAM__PLAYLIST`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()).required(true));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("PORTAL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| GatewayError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| GatewayError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        for (name, base) in self.upstream.entries() {
            if base.is_empty() {
                return Err(GatewayError::Config(format!(
                    "upstream.{} is required (set PORTAL_UPSTREAM__{})",
                    name,
                    name.to_uppercase()
                )));
            }
            if !base.starts_with("http://") && !base.starts_with("https://") {
                return Err(GatewayError::Config(format!(
                    "upstream.{} must be an http(s) URL, got {:?}",
                    name, base
                )));
            }
        }

        if self.timeouts.default_ms == 0 || self.timeouts.social_ms == 0 {
            return Err(GatewayError::Config("timeouts must be greater than zero".to_string()));
        }

        if self.auth.jwt_secret.is_some() && self.auth.jwt_public_key.is_some() {
            return Err(GatewayError::Config(
                "set either auth.jwt_secret or auth.jwt_public_key, not both".to_string(),
            ));
        }

        if self.session.ttl_secs == 0 {
            return Err(GatewayError::Config("session.ttl_secs must be greater than zero".to_string()));
        }

        if self.session.sweep_secs == 0 {
            return Err(GatewayError::Config("session.sweep_secs must be greater than zero".to_string()));
        }

        Ok(())
    }

    /// Client configuration for the upstream services
    pub fn upstream_config(&self) -> UpstreamConfig {
        UpstreamConfig::new(self.upstream.clone()).with_timeouts(
            Duration::from_millis(self.timeouts.default_ms),
            Duration::from_millis(self.timeouts.social_ms),
        )
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_timeouts() -> TimeoutSettings {
    TimeoutSettings {
        default_ms: default_timeout_ms(),
        social_ms: default_social_timeout_ms(),
    }
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_social_timeout_ms() -> u64 {
    30_000
}

fn default_session() -> SessionSettings {
    SessionSettings {
        persistent: false,
        path: default_session_path(),
        ttl_secs: default_session_ttl_secs(),
        sweep_secs: default_session_sweep_secs(),
    }
}

fn default_session_path() -> PathBuf {
    PathBuf::from("./data/sessions.json")
}

fn default_session_ttl_secs() -> u64 {
    3600
}

fn default_session_sweep_secs() -> u64 {
    300
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            upstream: UpstreamBases::default(),
            timeouts: default_timeouts(),
            auth: AuthSettings::default(),
            session: default_session(),
        }
    }
}
