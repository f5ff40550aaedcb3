use matcher::MatchConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port, overridden by the `PORT` environment variable when set
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum request body size in MB
    #[serde(default = "default_max_body_size_mb")]
    pub max_body_size_mb: usize,

    /// Maximum size in bytes of each analyzed text
    #[serde(default = "default_max_text_bytes")]
    pub max_text_bytes: usize,

    /// Directory served for every path without an API route
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// Enable CORS
    #[serde(default)]
    pub enable_cors: bool,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Metrics endpoint enabled
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,

    /// Heuristic settings shared by every request
    #[serde(default)]
    pub matcher: MatchConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            max_body_size_mb: default_max_body_size_mb(),
            max_text_bytes: default_max_text_bytes(),
            static_dir: default_static_dir(),
            enable_cors: false,
            log_level: default_log_level(),
            metrics_enabled: default_true(),
            matcher: MatchConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from config files and environment variables
    ///
    /// Sources, later ones winning: an optional `server.{toml,yaml,json}`
    /// file, `VERBATIM_SERVER__*` variables (e.g. `VERBATIM_SERVER__PORT`,
    /// `VERBATIM_SERVER__MATCHER__TRAILING_MODE`), then `PORT`.
    pub fn load() -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("server").required(false))
            .add_source(config::Environment::with_prefix("VERBATIM_SERVER").separator("__"));

        let mut config: ServerConfig = builder.build()?.try_deserialize()?;
        config.apply_port_override(std::env::var("PORT").ok().as_deref())?;
        config.matcher.validate()?;

        Ok(config)
    }

    /// Apply a `PORT` value, as set by hosting platforms
    pub fn apply_port_override(&mut self, port: Option<&str>) -> anyhow::Result<()> {
        match port.map(str::trim) {
            Some(port) if !port.is_empty() => {
                self.port = port
                    .parse()
                    .map_err(|err| anyhow::anyhow!("invalid PORT {port:?}: {err}"))?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get max body size in bytes
    pub fn max_body_size(&self) -> usize {
        self.max_body_size_mb * 1024 * 1024
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9056
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_body_size_mb() -> usize {
    10
}

fn default_max_text_bytes() -> usize {
    1024 * 1024
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("./static")
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.port, 9056);
        assert_eq!(cfg.timeout_secs, 30);
        assert_eq!(cfg.max_body_size_mb, 10);
        assert_eq!(cfg.max_text_bytes, 1024 * 1024);
        assert_eq!(cfg.static_dir, PathBuf::from("./static"));
        assert!(!cfg.enable_cors);
        assert!(cfg.metrics_enabled);
        assert_eq!(cfg.matcher, MatchConfig::default());
    }

    #[test]
    fn test_socket_addr() {
        let cfg = ServerConfig::default();
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 9056);
    }

    #[test]
    fn test_port_override() {
        let mut cfg = ServerConfig::default();
        cfg.apply_port_override(Some("5000")).unwrap();
        assert_eq!(cfg.port, 5000);

        cfg.apply_port_override(None).unwrap();
        cfg.apply_port_override(Some("")).unwrap();
        assert_eq!(cfg.port, 5000);

        assert!(cfg.apply_port_override(Some("not-a-port")).is_err());
        assert_eq!(cfg.port, 5000);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let cfg: ServerConfig =
            serde_json::from_str(r#"{"port": 7000, "matcher": {"trailing_mode": "slice"}}"#)
                .unwrap();
        assert_eq!(cfg.port, 7000);
        assert_eq!(cfg.timeout_secs, 30);
        assert_eq!(cfg.matcher.trailing_mode, matcher::TrailingMode::Slice);
        assert_eq!(cfg.matcher.min_equal_tokens, 4);
    }
}
