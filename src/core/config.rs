//! Board configuration.
//!
//! Hosts build a `BoardConfig` in code or deserialize one from their own
//! settings file. Missing fields fall back to the standard 5x5 game, and
//! deserialized values are validated before a `BoardConfig` exists.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Edge length of the standard board.
pub const DEFAULT_BOARD_SIZE: usize = 5;

/// Fewest tiles a playable word may use.
pub const DEFAULT_MIN_WORD_LEN: usize = 2;

/// Lowest minimum word length a config may ask for.
pub const MIN_WORD_LEN_FLOOR: usize = 2;

/// Configuration for a board and every board a session restarts into.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoardConfig")]
pub struct BoardConfig {
    /// Edge length of the square grid.
    pub size: usize,

    /// Minimum number of tiles in a submitted word.
    pub min_word_len: usize,

    /// Seed for letter generation. `None` draws a fresh seed per session.
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            min_word_len: DEFAULT_MIN_WORD_LEN,
            seed: None,
        }
    }
}

/// Deserialization shape of `BoardConfig`, before validation.
#[derive(Deserialize)]
#[serde(default)]
struct RawBoardConfig {
    size: usize,
    min_word_len: usize,
    seed: Option<u64>,
}

impl Default for RawBoardConfig {
    fn default() -> Self {
        let BoardConfig {
            size,
            min_word_len,
            seed,
        } = BoardConfig::default();
        Self {
            size,
            min_word_len,
            seed,
        }
    }
}

impl TryFrom<RawBoardConfig> for BoardConfig {
    type Error = ConfigError;

    fn try_from(raw: RawBoardConfig) -> Result<Self, Self::Error> {
        let config = Self {
            size: raw.size,
            min_word_len: raw.min_word_len,
            seed: raw.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

impl BoardConfig {
    /// Check the values a board cannot be built from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if self.min_word_len < MIN_WORD_LEN_FLOOR {
            return Err(ConfigError::MinWordLenTooSmall {
                min: self.min_word_len,
                floor: MIN_WORD_LEN_FLOOR,
            });
        }
        Ok(())
    }

    /// Set the grid edge length.
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        assert!(size > 0, "Board size must be at least 1");
        self.size = size;
        self
    }

    /// Set the minimum word length.
    ///
    /// Panics if `len` is below two.
    #[must_use]
    pub fn with_min_word_len(mut self, len: usize) -> Self {
        assert!(
            len >= MIN_WORD_LEN_FLOOR,
            "Minimum word length must be at least 2"
        );
        self.min_word_len = len;
        self
    }

    /// Fix the letter seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of tiles on the board.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.size * self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.size, 5);
        assert_eq!(config.min_word_len, 2);
        assert_eq!(config.seed, None);
        assert_eq!(config.tile_count(), 25);
    }

    #[test]
    fn test_builder_pattern() {
        let config = BoardConfig::default()
            .with_size(4)
            .with_min_word_len(3)
            .with_seed(123);

        assert_eq!(config.size, 4);
        assert_eq!(config.min_word_len, 3);
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    #[should_panic(expected = "Board size must be at least 1")]
    fn test_zero_size_rejected() {
        let _ = BoardConfig::default().with_size(0);
    }

    #[test]
    #[should_panic(expected = "Minimum word length must be at least 2")]
    fn test_single_letter_minimum_rejected() {
        let _ = BoardConfig::default().with_min_word_len(1);
    }

    #[test]
    fn test_deserialize_zero_size_rejected() {
        let err = serde_json::from_str::<BoardConfig>(r#"{"size": 0, "seed": 1}"#).unwrap_err();
        assert!(err.to_string().contains("board size must be at least 1"));
    }

    #[test]
    fn test_deserialize_short_minimum_rejected() {
        for min in [0, 1] {
            let json = format!(r#"{{"min_word_len": {min}}}"#);
            let err = serde_json::from_str::<BoardConfig>(&json).unwrap_err();
            assert!(err.to_string().contains("minimum word length must be at least 2"));
        }
    }

    #[test]
    fn test_validate() {
        assert_eq!(BoardConfig::default().validate(), Ok(()));

        let mut config = BoardConfig::default();
        config.size = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroSize));

        config.size = 3;
        config.min_word_len = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::MinWordLenTooSmall { min: 0, floor: 2 })
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: BoardConfig = serde_json::from_str(r#"{"seed": 9}"#).unwrap();
        assert_eq!(config.size, DEFAULT_BOARD_SIZE);
        assert_eq!(config.min_word_len, DEFAULT_MIN_WORD_LEN);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_serialization() {
        let config = BoardConfig::default().with_seed(5);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: BoardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
