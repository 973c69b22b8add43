//! Startup configuration read from environment variables.
//!
//! | Variable           | Default     | Meaning                         |
//! |--------------------|-------------|---------------------------------|
//! | `HOST`             | `127.0.0.1` | interface to bind               |
//! | `PORT`             | `3000`      | TCP port to bind                |
//! | `TODO_ID_STRATEGY` | `random`    | `random` or `sequential`        |

use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

use crate::store::IdStrategy;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid TODO_ID_STRATEGY {0:?}: expected `random` or `sequential`")]
    InvalidIdStrategy(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub id_strategy: IdStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            id_strategy: IdStrategy::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value: port, source })?;
        }
        if let Some(strategy) = lookup("TODO_ID_STRATEGY") {
            config.id_strategy = strategy.parse()?;
        }
        Ok(config)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromStr for IdStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(IdStrategy::Random),
            "sequential" => Ok(IdStrategy::Sequential),
            _ => Err(ConfigError::InvalidIdStrategy(s.to_string())),
        }
    }
}
