//! Game configuration and target-score validation.
//!
//! The target score is the only tunable rule. Anything that is not a
//! positive whole number falls back to [`DEFAULT_TARGET_SCORE`].

use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::game_engine::models::DEFAULT_TARGET_SCORE;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("target score {0:?} is not a whole number")]
    NotANumber(String),
    #[error("target score must be positive (got {0})")]
    NonPositive(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GameConfig {
    /// Score either player must reach to end the game.
    #[serde(default = "default_target_score")]
    pub target_score: u32,
}

fn default_target_score() -> u32 {
    DEFAULT_TARGET_SCORE
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_score: default_target_score(),
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON; a zero target is rejected.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        if config.target_score == 0 {
            return Err(ConfigError::NonPositive(0));
        }
        Ok(config)
    }
}

/// Validate a numeric target score.
pub fn validate_target_score(target: i64) -> Result<u32, ConfigError> {
    if target <= 0 {
        return Err(ConfigError::NonPositive(target));
    }
    u32::try_from(target).map_err(|_| ConfigError::NotANumber(target.to_string()))
}

/// Parse a target score typed by the player.
pub fn parse_target_score(input: &str) -> Result<u32, ConfigError> {
    let trimmed = input.trim();
    let target: i64 = trimmed
        .parse()
        .map_err(|_| ConfigError::NotANumber(trimmed.to_string()))?;
    validate_target_score(target)
}

/// Numeric target, or the default when it is not positive.
pub fn target_or_default(target: i64) -> u32 {
    validate_target_score(target).unwrap_or_else(|e| {
        log::warn!("{e}; using default target {DEFAULT_TARGET_SCORE}");
        DEFAULT_TARGET_SCORE
    })
}

/// Typed target, or the default when it does not parse to a positive number.
pub fn target_score_or_default(input: &str) -> u32 {
    parse_target_score(input).unwrap_or_else(|e| {
        log::warn!("{e}; using default target {DEFAULT_TARGET_SCORE}");
        DEFAULT_TARGET_SCORE
    })
}
