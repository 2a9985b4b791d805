//! Game configuration loaded from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use xiangqi_core::FenError;

use crate::Position;

/// How a position with no legal move and no check is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StalemateRule {
    /// The game stays ongoing; no winner is recorded.
    #[default]
    Continue,
    /// The side with no legal move loses.
    StalematedSideLoses,
}

/// Error loading a [`GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid start position: {0}")]
    StartPosition(#[from] FenError),
}

/// Settings for a new [`Game`](crate::Game).
///
/// ```toml
/// start_position = "4k4/9/9/9/9/9/9/9/9/3K5 w"
/// stalemate = "stalemated_side_loses"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Starting position in FEN; the standard setup when absent.
    pub start_position: Option<String>,
    /// Ruling applied when the side to move is stalemated.
    pub stalemate: StalemateRule,
}

impl GameConfig {
    /// Parses a config from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Reads and parses a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded game config");
        Ok(config)
    }

    /// Builds the configured starting position.
    pub fn start_position(&self) -> Result<Position, ConfigError> {
        match &self.start_position {
            Some(fen) => Ok(Position::from_fen(fen)?),
            None => Ok(Position::startpos()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xiangqi_core::Side;

    #[test]
    fn empty_config_uses_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.stalemate, StalemateRule::Continue);
        assert_eq!(config.start_position().unwrap(), Position::startpos());
    }

    #[test]
    fn parses_all_fields() {
        let config = GameConfig::from_toml_str(
            r#"
            start_position = "3k5/R8/9/9/9/9/9/9/9/4K4 b"
            stalemate = "stalemated_side_loses"
            "#,
        )
        .unwrap();
        assert_eq!(config.stalemate, StalemateRule::StalematedSideLoses);
        let position = config.start_position().unwrap();
        assert_eq!(position.side_to_move, Side::Black);
    }

    #[test]
    fn rejects_unknown_rule() {
        let err = GameConfig::from_toml_str(r#"stalemate = "draw""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn bad_start_position() {
        let config = GameConfig::from_toml_str(r#"start_position = "9/9 w""#).unwrap();
        assert!(matches!(
            config.start_position(),
            Err(ConfigError::StartPosition(_))
        ));
    }

    #[test]
    fn missing_file() {
        let err = GameConfig::load("/nonexistent/xiangqi.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn toml_roundtrip() {
        let config = GameConfig {
            start_position: Some("4k4/9/9/9/9/9/9/9/9/3K5 w".to_string()),
            stalemate: StalemateRule::StalematedSideLoses,
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(GameConfig::from_toml_str(&text).unwrap(), config);
    }
}
