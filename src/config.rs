//! Configuration for the qualification tracker
//!
//! This module handles configuration loading from environment variables or a
//! TOML file, validation, and default values. The ranking file names and the
//! rating-update command follow the tournament hosting convention: one flat
//! ranking file per supported team size, rewritten by an external script
//! after every finalized match.

use crate::error::TrackerError;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Main tracker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    pub service: ServiceSettings,
    pub bracket: BracketSettings,
    pub rating: RatingSettings,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Bracket and pairing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BracketSettings {
    /// Players per side; one roster block spans `2 * team_size` slots
    pub team_size: usize,
    /// Space-separated seed roster, pairing order = list order
    pub player_list: String,
}

/// Rating persistence and update settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingSettings {
    /// Ranking file consulted when team_size == 1
    pub ranking_file_1vs1: PathBuf,
    /// Ranking file consulted when team_size == 2
    pub ranking_file_2vs2: PathBuf,
    /// External command invoked after each finalized result
    pub update_command: String,
    /// Fixed arguments placed before the per-match positional arguments
    pub update_args: Vec<String>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            service: ServiceSettings::default(),
            bracket: BracketSettings::default(),
            rating: RatingSettings::default(),
        }
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "quali-bracket".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for BracketSettings {
    fn default() -> Self {
        Self {
            team_size: 1,
            player_list: String::new(),
        }
    }
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            ranking_file_1vs1: PathBuf::from("ranking_1vs1.txt"),
            ranking_file_2vs2: PathBuf::from("ranking_2vs2.txt"),
            update_command: "./update_rankings.sh".to_string(),
            update_args: Vec::new(),
        }
    }
}

impl TrackerConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(name) = env::var("SERVICE_NAME") {
            config.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.service.log_level = log_level;
        }
        if let Ok(team_size) = env::var("QUALI_TEAM_SIZE") {
            config.bracket.team_size = team_size
                .parse()
                .map_err(|_| anyhow!("Invalid QUALI_TEAM_SIZE value: {}", team_size))?;
        }
        if let Ok(players) = env::var("QUALI_PLAYER_LIST") {
            config.bracket.player_list = players;
        }
        if let Ok(path) = env::var("QUALI_RANKING_FILE_1VS1") {
            config.rating.ranking_file_1vs1 = PathBuf::from(path);
        }
        if let Ok(path) = env::var("QUALI_RANKING_FILE_2VS2") {
            config.rating.ranking_file_2vs2 = PathBuf::from(path);
        }
        if let Ok(command) = env::var("QUALI_UPDATE_COMMAND") {
            config.rating.update_command = command;
        }

        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path.display(), e))?;

        validate_config(&config)?;
        Ok(config)
    }

    /// Ranking file for the configured team size
    pub fn ranking_file(&self) -> &Path {
        match self.bracket.team_size {
            2 => &self.rating.ranking_file_2vs2,
            _ => &self.rating.ranking_file_1vs1,
        }
    }
}

/// Validate configuration values
pub fn validate_config(config: &TrackerConfig) -> Result<()> {
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    // Rating update and file formats exist for 1vs1 and 2vs2 only; anything
    // else is rejected up front instead of degrading into silent no-ops.
    if !matches!(config.bracket.team_size, 1 | 2) {
        return Err(TrackerError::UnsupportedTeamSize {
            team_size: config.bracket.team_size,
        }
        .into());
    }

    if config.rating.update_command.is_empty() {
        return Err(anyhow!("Rating update command cannot be empty"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = TrackerConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.bracket.team_size, 1);
    }

    #[test]
    fn test_rejects_unsupported_team_size() {
        let mut config = TrackerConfig::default();
        config.bracket.team_size = 3;
        assert!(validate_config(&config).is_err());

        config.bracket.team_size = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_empty_update_command() {
        let mut config = TrackerConfig::default();
        config.rating.update_command.clear();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_ranking_file_selection() {
        let mut config = TrackerConfig::default();
        assert_eq!(config.ranking_file(), Path::new("ranking_1vs1.txt"));

        config.bracket.team_size = 2;
        assert_eq!(config.ranking_file(), Path::new("ranking_2vs2.txt"));
    }

    #[test]
    fn test_from_toml() {
        let raw = r#"
            [service]
            name = "quali-bracket"
            log_level = "debug"

            [bracket]
            team_size = 2
            player_list = "alice bob carol dave"

            [rating]
            ranking_file_1vs1 = "r1.txt"
            ranking_file_2vs2 = "r2.txt"
            update_command = "/usr/local/bin/update_rankings"
            update_args = ["--quiet"]
        "#;
        let config: TrackerConfig = toml::from_str(raw).unwrap();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.bracket.team_size, 2);
        assert_eq!(config.rating.update_args, vec!["--quiet".to_string()]);
    }
}
