//! Game configuration types.
//!
//! - `BoardSize`: a validated card count
//! - `GameConfig`: session settings, loadable from TOML
//!
//! ```toml
//! default_cards = 16
//! reveal_delay_ms = 1000
//! seed = 42
//! ```

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{BoardSizeError, ConfigError};

/// Smallest board that can be dealt.
pub const MIN_CARDS: usize = 4;

/// Largest board that can be dealt.
pub const MAX_CARDS: usize = 100;

/// How long a mismatched pair stays face up by default.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 1000;

/// A card count that can be dealt: even and within `MIN_CARDS..=MAX_CARDS`.
///
/// The only way to obtain one is through validation, so a `BoardSize` in
/// hand always describes a dealable board.
///
/// ```
/// use memory_match::core::BoardSize;
///
/// let size: BoardSize = "12".parse().unwrap();
/// assert_eq!(size.cards(), 12);
/// assert_eq!(size.pairs(), 6);
///
/// assert!(BoardSize::try_from(5).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct BoardSize(usize);

impl BoardSize {
    /// Number of cards on the board.
    #[must_use]
    pub const fn cards(self) -> usize {
        self.0
    }

    /// Number of pairs on the board.
    #[must_use]
    pub const fn pairs(self) -> usize {
        self.0 / 2
    }

    /// Columns used when laying the board out as a grid.
    #[must_use]
    pub fn grid_columns(self) -> usize {
        let mut columns = 1;
        while columns * columns < self.0 {
            columns += 1;
        }
        columns
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self(16)
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = BoardSizeError;

    fn try_from(cards: usize) -> Result<Self, Self::Error> {
        if cards % 2 != 0 {
            return Err(BoardSizeError::Odd(cards));
        }
        if cards < MIN_CARDS {
            return Err(BoardSizeError::TooFew(cards));
        }
        if cards > MAX_CARDS {
            return Err(BoardSizeError::TooMany(cards));
        }
        Ok(Self(cards))
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

impl FromStr for BoardSize {
    type Err = BoardSizeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let cards: usize = trimmed
            .parse()
            .map_err(|_| BoardSizeError::NotANumber(trimmed.to_string()))?;
        Self::try_from(cards)
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} cards", self.0)
    }
}

/// Settings for a game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Board dealt when the session starts.
    pub default_cards: BoardSize,

    /// How long a mismatched pair stays face up, in milliseconds.
    pub reveal_delay_ms: u64,

    /// Fixed seed for reproducible deals. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_cards: BoardSize::default(),
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Set the board dealt at session start.
    #[must_use]
    pub fn with_default_cards(mut self, size: BoardSize) -> Self {
        self.default_cards = size;
        self
    }

    /// Set how long a mismatched pair stays face up.
    #[must_use]
    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Use a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The mismatch display delay.
    #[must_use]
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_size_bounds() {
        assert_eq!(BoardSize::try_from(4).unwrap().cards(), 4);
        assert_eq!(BoardSize::try_from(100).unwrap().cards(), 100);

        assert_eq!(BoardSize::try_from(2), Err(BoardSizeError::TooFew(2)));
        assert_eq!(BoardSize::try_from(0), Err(BoardSizeError::TooFew(0)));
        assert_eq!(BoardSize::try_from(102), Err(BoardSizeError::TooMany(102)));
    }

    #[test]
    fn test_board_size_odd_rejected_first() {
        assert_eq!(BoardSize::try_from(3), Err(BoardSizeError::Odd(3)));
        assert_eq!(BoardSize::try_from(5), Err(BoardSizeError::Odd(5)));
        assert_eq!(BoardSize::try_from(101), Err(BoardSizeError::Odd(101)));
    }

    #[test]
    fn test_board_size_from_str() {
        assert_eq!("  8 ".parse::<BoardSize>().unwrap().cards(), 8);
        assert_eq!(
            "abc".parse::<BoardSize>(),
            Err(BoardSizeError::NotANumber("abc".to_string()))
        );
        assert_eq!(
            "-4".parse::<BoardSize>(),
            Err(BoardSizeError::NotANumber("-4".to_string()))
        );
        assert!("".parse::<BoardSize>().is_err());
        assert!("4.5".parse::<BoardSize>().is_err());
    }

    #[test]
    fn test_grid_columns() {
        let columns = |n: usize| BoardSize::try_from(n).unwrap().grid_columns();
        assert_eq!(columns(4), 2);
        assert_eq!(columns(16), 4);
        assert_eq!(columns(18), 5);
        assert_eq!(columns(100), 10);
    }

    #[test]
    fn test_config_builder() {
        let config = GameConfig::new()
            .with_default_cards(BoardSize::try_from(20).unwrap())
            .with_reveal_delay(Duration::from_millis(250))
            .with_seed(9);

        assert_eq!(config.default_cards.cards(), 20);
        assert_eq!(config.reveal_delay(), Duration::from_millis(250));
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_config_from_toml() {
        let config = GameConfig::from_toml_str("default_cards = 8\nseed = 3\n").unwrap();
        assert_eq!(config.default_cards.cards(), 8);
        assert_eq!(config.reveal_delay_ms, DEFAULT_REVEAL_DELAY_MS);
        assert_eq!(config.seed, Some(3));

        let empty = GameConfig::from_toml_str("").unwrap();
        assert_eq!(empty, GameConfig::default());
    }

    #[test]
    fn test_config_rejects_bad_values() {
        assert!(matches!(
            GameConfig::from_toml_str("default_cards = 7"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            GameConfig::from_toml_str("colour = \"red\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_config_load_missing_file() {
        assert!(matches!(
            GameConfig::load("/nonexistent/memory.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
