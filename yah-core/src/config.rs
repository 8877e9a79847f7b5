//! Game setup configuration.
//!
//! A small YAML roster file: the player display names, in seating order.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Player display names, in seating order.
    #[serde(default = "default_players")]
    pub players: Vec<String>,
}

fn default_players() -> Vec<String> {
    vec!["Player 1".to_string(), "Player 2".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: default_players(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the roster is playable: at least two names, none blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.len() < crate::game::MIN_PLAYERS {
            return Err(ConfigError::Invalid(format!(
                "players: need at least {} names, got {}",
                crate::game::MIN_PLAYERS,
                self.players.len()
            )));
        }
        for (i, name) in self.players.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("players[{i}]: name is blank")));
            }
        }
        Ok(())
    }
}
