//! Layered configuration: defaults, then an optional TOML file, then
//! environment overrides.

pub mod auth_config;
pub mod catalog_config;
pub mod server_config;
pub mod storage_config;

use std::env;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::ConfigError;

pub use auth_config::AuthConfig;
pub use catalog_config::CatalogConfig;
pub use server_config::ServerConfig;
pub use storage_config::StorageConfig;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AutosalonConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub catalog: CatalogConfig,
    pub auth: AuthConfig,
}

impl AutosalonConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Read an optional TOML file and apply environment overrides on top.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
                info!(path = %path.display(), "loaded config file");
                Self::from_toml(&raw)?
            }
            None => {
                debug!("no config file given, using defaults");
                Self::default()
            }
        };
        config.apply_overrides(|key| env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (the process environment in production).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = parse_override("PORT", &port)?;
        }
        if let Some(dir) = lookup("STATIC_DIR") {
            self.server.static_dir = dir.into();
        }
        if let Some(db_path) = lookup("DB_PATH") {
            self.storage.db_path = db_path.into();
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            self.auth.jwt_secret = secret;
        }
        Ok(())
    }
}

fn parse_override<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key: key.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = AutosalonConfig::from_toml("").unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.catalog.default_page_size, 20);
        assert_eq!(config.catalog.featured_limit, 3);
        assert_eq!(config.auth.token_ttl_hours, 24);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = AutosalonConfig::from_toml(
            r#"
            [catalog]
            default_page_size = 12
            "#,
        )
        .unwrap();
        assert_eq!(config.catalog.default_page_size, 12);
        assert_eq!(config.catalog.max_page_size, 100);
        assert_eq!(config.storage.read_pool_size, 2);
    }

    #[test]
    fn env_overrides_win_over_file_values() {
        let mut config = AutosalonConfig::from_toml("[server]\nport = 8080").unwrap();
        let env: HashMap<&str, &str> =
            [("PORT", "9090"), ("DB_PATH", "/tmp/cars.db"), ("JWT_SECRET", "s3cret")].into();
        config
            .apply_overrides(|k| env.get(k).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.storage.db_path, std::path::PathBuf::from("/tmp/cars.db"));
        assert_eq!(config.auth.jwt_secret, "s3cret");
    }

    #[test]
    fn bad_port_override_is_rejected() {
        let mut config = AutosalonConfig::default();
        let err = config
            .apply_overrides(|k| (k == "PORT").then(|| "not-a-port".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "PORT"));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("autosalon.toml");
        std::fs::write(&path, "[auth]\nbcrypt_cost = 6\n").unwrap();
        let config = AutosalonConfig::load(Some(&path)).unwrap();
        assert_eq!(config.auth.bcrypt_cost, 6);
    }

    #[test]
    fn load_missing_file_is_a_read_error() {
        let err = AutosalonConfig::load(Some(Path::new("/nonexistent/autosalon.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
