//! Mancala rules: the engine, its undo ledger, and the end-of-game sweep.
//!
//! Control flow for every committed move:
//! validate -> retain undo snapshot -> sow -> resolve the last stone ->
//! end-of-game check -> notify observers.

pub mod engine;
pub mod endgame;
pub mod undo;

pub use engine::MancalaEngine;
pub use endgame::{settle, Settlement};
pub use undo::{Snapshot, UndoBlock, UndoLedger, UNDO_LIMIT};
