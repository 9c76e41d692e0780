//! Move results and history.
//!
//! A committed move produces a `MoveReport` describing where every stone
//! went and how the last one was resolved. The engine keeps a compact
//! `MoveRecord` per committed move in a persistent vector, so retaining the
//! history inside an undo snapshot costs O(1).

use serde::{Deserialize, Serialize};

use super::board::{BoardPos, SowTrace};
use super::player::PlayerId;
use super::state::GameResult;

/// How the last sown stone was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Landing {
    /// Landed in the mover's own store: free turn.
    OwnStore,
    /// Landed in an empty pit on the mover's row: that stone and the facing
    /// pit went to the mover's store, and the mover plays again.
    Capture {
        /// The mover's pit the last stone landed in.
        pit: usize,
        /// Stones moved into the store, including the landing stone.
        captured: u32,
    },
    /// Anywhere else: the turn passes.
    Pass {
        /// Where the last stone landed.
        at: BoardPos,
    },
}

impl Landing {
    /// Does the mover play again?
    #[must_use]
    pub fn grants_free_turn(self) -> bool {
        !matches!(self, Landing::Pass { .. })
    }
}

/// Everything a committed move did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// The player who moved.
    pub player: PlayerId,
    /// The pit that was emptied.
    pub pit: usize,
    /// Stones picked up.
    pub stones: u32,
    /// Every position that received a stone, in order.
    pub sown: SowTrace,
    /// How the last stone was resolved.
    pub landing: Landing,
    /// Set if this move ended the game.
    pub result: Option<GameResult>,
}

/// Result of a `move` request that passed validation.
///
/// Empty pits and finished games are ordinary interaction outcomes, not
/// errors; they leave the engine untouched and notify nobody.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was committed.
    Played(MoveReport),
    /// The selected pit held no stones.
    EmptyPit,
    /// The game had already finished.
    GameAlreadyOver,
}

impl MoveOutcome {
    /// Did the move change the game?
    #[must_use]
    pub fn is_played(&self) -> bool {
        matches!(self, MoveOutcome::Played(_))
    }

    /// The report of a committed move.
    #[must_use]
    pub fn report(&self) -> Option<&MoveReport> {
        match self {
            MoveOutcome::Played(report) => Some(report),
            _ => None,
        }
    }
}

/// A committed move in the game history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Position in the history (0-based).
    pub sequence: usize,
    /// The player who moved.
    pub player: PlayerId,
    /// The pit that was emptied.
    pub pit: usize,
    /// How the last stone was resolved.
    pub landing: Landing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_free_turn() {
        assert!(Landing::OwnStore.grants_free_turn());
        assert!(Landing::Capture { pit: 2, captured: 5 }.grants_free_turn());
        assert!(!Landing::Pass { at: BoardPos::Pit(PlayerId::SECOND, 0) }.grants_free_turn());
    }

    #[test]
    fn test_outcome_accessors() {
        assert!(!MoveOutcome::EmptyPit.is_played());
        assert!(MoveOutcome::GameAlreadyOver.report().is_none());

        let report = MoveReport {
            player: PlayerId::FIRST,
            pit: 2,
            stones: 4,
            sown: SowTrace::from_slice(&[
                BoardPos::Pit(PlayerId::FIRST, 3),
                BoardPos::Pit(PlayerId::FIRST, 4),
                BoardPos::Pit(PlayerId::FIRST, 5),
                BoardPos::Store(PlayerId::FIRST),
            ]),
            landing: Landing::OwnStore,
            result: None,
        };
        let outcome = MoveOutcome::Played(report.clone());
        assert!(outcome.is_played());
        assert_eq!(outcome.report(), Some(&report));
    }

    #[test]
    fn test_record_serialization() {
        let record = MoveRecord {
            sequence: 3,
            player: PlayerId::SECOND,
            pit: 4,
            landing: Landing::Capture { pit: 1, captured: 6 },
        };
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
