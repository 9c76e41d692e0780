//! Core game types: players, board, state, moves, configuration, errors.
//!
//! These are plain data. All mutation of a live game goes through
//! `rules::MancalaEngine`.

pub mod player;
pub mod board;
pub mod state;
pub mod action;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use board::{mirror, Board, BoardPos, Row, SowTrace, PITS_PER_ROW, TOTAL_PITS};
pub use state::{GameResult, GameSnapshot, GameStatus, Turn};
pub use action::{Landing, MoveOutcome, MoveRecord, MoveReport};
pub use config::{GameConfig, Position, MAX_TOTAL_STONES, SUPPORTED_STONES_PER_PIT};
pub use error::{ConfigError, Precondition, RulesError};
