//! Configuration for pathparams

use serde::{Deserialize, Serialize};
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// File picked up from the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "pathparams.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Attach a permissive CORS layer
    #[serde(default)]
    pub cors: bool,

    /// tracing filter used when RUST_LOG is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// OpenAPI document and Swagger UI settings
    #[serde(default)]
    pub docs: DocsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsConfig {
    /// Serve the OpenAPI document and Swagger UI
    #[serde(default = "default_docs_enabled")]
    pub enabled: bool,

    /// Swagger UI mount point
    #[serde(default = "default_ui_path")]
    pub ui_path: String,

    /// OpenAPI JSON path
    #[serde(default = "default_spec_path")]
    pub spec_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors: false,
            log_filter: default_log_filter(),
            docs: DocsConfig::default(),
        }
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            enabled: default_docs_enabled(),
            ui_path: default_ui_path(),
            spec_path: default_spec_path(),
        }
    }
}

impl Config {
    /// Load config from an explicit file, `./pathparams.toml`, or defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                Self::from_file(path)
            }
            None => {
                let local = PathBuf::from(DEFAULT_CONFIG_FILE);
                if local.exists() {
                    Self::from_file(&local)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    /// Parse and validate a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(Error::Config("port must be non-zero".into()));
        }

        if !self.docs.ui_path.starts_with('/') || !self.docs.spec_path.starts_with('/') {
            return Err(Error::Config("docs paths must start with '/'".into()));
        }

        if self.docs.ui_path == self.docs.spec_path {
            return Err(Error::Config(
                "docs.ui_path and docs.spec_path must differ".into(),
            ));
        }

        Ok(())
    }

    /// Resolve `host` (IP literal or hostname) and `port` to bindable addresses
    pub fn socket_addrs(&self) -> Result<Vec<SocketAddr>> {
        let addrs: Vec<SocketAddr> = (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| Error::Config(format!("Invalid listen address {}: {}", self.host, e)))?
            .collect();

        if addrs.is_empty() {
            return Err(Error::Config(format!("Host {} did not resolve", self.host)));
        }

        Ok(addrs)
    }
}

// Default value functions

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_filter() -> String {
    "pathparams=info,tower_http=info".to_string()
}

fn default_docs_enabled() -> bool {
    true
}

fn default_ui_path() -> String {
    "/docs".to_string()
}

fn default_spec_path() -> String {
    "/openapi.json".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8000);
        assert!(config.docs.enabled);
        assert_eq!(config.docs.ui_path, "/docs");
        assert_eq!(config.docs.spec_path, "/openapi.json");
        assert!(config.validate().is_ok());
        assert_eq!(
            config.socket_addrs().unwrap(),
            vec!["127.0.0.1:8000".parse::<SocketAddr>().unwrap()]
        );
    }

    #[test]
    fn test_hostnames_and_ipv6_resolve() {
        let mut config = Config::default();

        config.host = "localhost".into();
        let addrs = config.socket_addrs().unwrap();
        assert!(addrs.iter().all(|a| a.ip().is_loopback() && a.port() == 8000));

        config.host = "::1".into();
        assert_eq!(
            config.socket_addrs().unwrap(),
            vec!["[::1]:8000".parse::<SocketAddr>().unwrap()]
        );
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml("port = 9000\n\n[docs]\nenabled = false\n").unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "127.0.0.1");
        assert!(!config.docs.enabled);
        assert_eq!(config.docs.spec_path, "/openapi.json");
    }

    #[test]
    fn test_validation_errors() {
        assert!(matches!(Config::from_toml("port = 0"), Err(Error::Config(_))));
        assert!(matches!(
            Config::from_toml("[docs]\nui_path = \"docs\""),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Config::from_toml("[docs]\nui_path = \"/api\"\nspec_path = \"/api\""),
            Err(Error::Config(_))
        ));
        assert!(matches!(Config::from_toml("port = \"x\""), Err(Error::Toml(_))));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        std::fs::write(&path, "host = \"0.0.0.0\"\ncors = true\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert!(config.cors);

        let missing = temp_dir.path().join("missing.toml");
        assert!(matches!(Config::load(Some(&missing)), Err(Error::Config(_))));
    }
}
