// ⚙️ Configuration - Layered settings with figment
//
// Sources, highest precedence first:
//   1. DIRECTORY_* environment variables, "__" between sections
//      (DIRECTORY_YELP__API_KEY -> yelp.api_key, DIRECTORY_SERVER__PORT -> server.port)
//   2. YELP_API_KEY, then YELP_FUSION_API_KEY
//   3. directory.toml in the working directory
//   4. Built-in defaults

use crate::external::DEFAULT_BASE_URL;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Project-local config file name
pub const CONFIG_FILE: &str = "directory.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DirectoryConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub yelp: YelpConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl DirectoryConfig {
    /// Load configuration from all sources.
    ///
    /// Does NOT read `.env`; use [`DirectoryConfig::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source is malformed or a value has the
    /// wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::figment().extract()?)
    }

    /// Load `.env` from the working directory (if any), then [`load`](Self::load).
    ///
    /// # Errors
    ///
    /// See [`DirectoryConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if Path::new(CONFIG_FILE).exists() {
            figment = figment.merge(Toml::file(CONFIG_FILE));
        }

        figment
            .merge(legacy_key("YELP_FUSION_API_KEY"))
            .merge(legacy_key("YELP_API_KEY"))
            .merge(Env::prefixed("DIRECTORY_").split("__"))
    }
}

/// Map a bare environment variable onto `yelp.api_key`
fn legacy_key(name: &'static str) -> Env {
    Env::raw().only(&[name]).map(|_| "yelp.api_key".into())
}

// ============================================================================
// SECTIONS
// ============================================================================

const fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct YelpConfig {
    /// Bearer credential; empty means the review service is disabled
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for YelpConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
        }
    }
}

impl YelpConfig {
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogConfig {
    /// Fallback filter when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    fn load() -> figment::Result<DirectoryConfig> {
        DirectoryConfig::figment().extract()
    }

    #[test]
    fn test_defaults() {
        Jail::expect_with(|_jail| {
            let config = load()?;
            assert_eq!(config.server.bind_addr(), "0.0.0.0:3000");
            assert_eq!(config.yelp.base_url, DEFAULT_BASE_URL);
            assert!(!config.yelp.is_configured());
            assert_eq!(config.log.level, "info");
            Ok(())
        });
    }

    #[test]
    fn test_toml_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                [server]
                port = 8080

                [yelp]
                api_key = "from-file"
                "#,
            )?;

            let config = load()?;
            assert_eq!(config.server.port, 8080);
            assert_eq!(config.server.host, "0.0.0.0");
            assert_eq!(config.yelp.api_key, "from-file");
            Ok(())
        });
    }

    #[test]
    fn test_prefixed_env_wins_over_file() {
        Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE, "[yelp]\napi_key = \"from-file\"")?;
            jail.set_env("DIRECTORY_YELP__API_KEY", "from-env");
            jail.set_env("DIRECTORY_LOG__LEVEL", "debug");

            let config = load()?;
            assert_eq!(config.yelp.api_key, "from-env");
            assert_eq!(config.log.level, "debug");
            Ok(())
        });
    }

    #[test]
    fn test_legacy_key_precedence() {
        Jail::expect_with(|jail| {
            jail.set_env("YELP_FUSION_API_KEY", "fusion-key");
            let config = load()?;
            assert_eq!(config.yelp.api_key, "fusion-key");

            jail.set_env("YELP_API_KEY", "plain-key");
            let config = load()?;
            assert_eq!(config.yelp.api_key, "plain-key");

            jail.set_env("DIRECTORY_YELP__API_KEY", "prefixed-key");
            let config = load()?;
            assert_eq!(config.yelp.api_key, "prefixed-key");
            Ok(())
        });
    }
}
