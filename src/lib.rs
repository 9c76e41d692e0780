//! # mancala-rules
//!
//! A deterministic rules engine for two-player Mancala.
//!
//! ## Rules in brief
//!
//! - Two rows of six pits, one store per player; every pit starts with 3 or 4
//!   stones.
//! - A move empties one of the mover's pits and sows its stones one at a time
//!   along the board, skipping the opponent's store.
//! - Last stone in the mover's store: the mover plays again.
//! - Last stone in an empty pit on the mover's row: that stone and the
//!   facing pit go to the mover's store, and the mover plays again.
//! - When either row is empty the other player sweeps their own row into
//!   their store; the larger store wins.
//! - Each player may undo up to three times; one undo per move.
//!
//! ## Design
//!
//! - **Owned state, copied out**: the engine never lends out its board.
//!   Queries and observer snapshots are copies.
//! - **Synchronous observers**: notified in registration order before
//!   `apply_move`/`undo` return.
//! - **Themes are separate**: `layout` reads snapshots; `rules` never imports
//!   it.
//!
//! ## Modules
//!
//! - `core`: players, board, state, moves, configuration, errors
//! - `rules`: the engine, undo ledger, end-of-game sweep
//! - `observers`: subscription registry
//! - `layout`: board themes
//!
//! ## Example
//!
//! ```
//! use mancala_rules::{MancalaEngine, PlayerId, Turn};
//!
//! let mut engine = MancalaEngine::new(4).unwrap();
//! engine.apply_move(PlayerId::FIRST, 2).unwrap(); // last stone in own store
//! assert_eq!(engine.active_player(), Turn::Player(PlayerId::FIRST));
//!
//! assert!(engine.undo());
//! assert_eq!(engine.pits(), [[4; 6], [4; 6]]);
//! ```

pub mod core;
pub mod rules;
pub mod observers;
pub mod layout;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    Board, BoardPos, Row, PITS_PER_ROW,
    GameResult, GameSnapshot, GameStatus, Turn,
    Landing, MoveOutcome, MoveRecord, MoveReport,
    GameConfig, Position,
    ConfigError, Precondition, RulesError,
};

pub use crate::rules::{MancalaEngine, UNDO_LIMIT};

pub use crate::observers::{GameObserver, SubscriptionId};

pub use crate::layout::{BoardGeometry, ClassicLayout, FancyLayout, Layout, LayoutKind, Rect};
