//! Engine setup.
//!
//! - `GameConfig`: the pre-game choices that affect the rules (stones per pit).
//! - `Position`: an explicit board and player to move, for starting an engine
//!   somewhere other than the opening.

use serde::{Deserialize, Serialize};

use super::board::{Board, Row, TOTAL_PITS};
use super::error::ConfigError;
use super::player::PlayerId;

/// Stone counts offered on the pre-game screen.
pub const SUPPORTED_STONES_PER_PIT: [u32; 2] = [3, 4];

/// Most stones any supported game holds.
pub const MAX_TOTAL_STONES: u32 = 4 * TOTAL_PITS as u32;

/// Rules configuration chosen before the game starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Stones placed in every pit at the start (3 or 4).
    pub stones_per_pit: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { stones_per_pit: 3 }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting stones per pit.
    #[must_use]
    pub fn with_stones_per_pit(mut self, stones: u32) -> Self {
        self.stones_per_pit = stones;
        self
    }

    /// Check the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if SUPPORTED_STONES_PER_PIT.contains(&self.stones_per_pit) {
            Ok(())
        } else {
            Err(ConfigError::UnsupportedStoneCount(self.stones_per_pit))
        }
    }

    /// Total stones in play for this configuration.
    #[must_use]
    pub fn total_stones(&self) -> u32 {
        self.stones_per_pit * TOTAL_PITS as u32
    }
}

/// An explicit board and player to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Pit and store contents.
    pub board: Board,
    /// The player to move.
    pub to_move: PlayerId,
}

impl Position {
    /// The opening position for a configuration.
    #[must_use]
    pub fn opening(config: &GameConfig) -> Self {
        Self {
            board: Board::new(config.stones_per_pit),
            to_move: PlayerId::FIRST,
        }
    }

    /// A position from explicit rows and stores.
    #[must_use]
    pub fn new(rows: [Row; 2], stores: [u32; 2], to_move: PlayerId) -> Self {
        Self {
            board: Board::from_parts(rows, stores),
            to_move,
        }
    }

    /// Check the position can be played from.
    ///
    /// The board must hold between 1 and `MAX_TOTAL_STONES` stones in total.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.to_move.is_valid() {
            return Err(ConfigError::InvalidPosition(format!(
                "player id {} cannot move",
                self.to_move.0
            )));
        }
        match self.board.checked_total_stones() {
            Some(0) => Err(ConfigError::InvalidPosition("board holds no stones".to_string())),
            Some(total) if total <= MAX_TOTAL_STONES => Ok(()),
            _ => Err(ConfigError::InvalidPosition(format!(
                "board holds more than {} stones",
                MAX_TOTAL_STONES
            ))),
        }
    }
}
