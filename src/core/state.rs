//! Game progression and the snapshots handed to callers.
//!
//! ## Turn
//!
//! Whose move it is while the game runs. Once the game is over it names the
//! winner, or holds the `Draw` sentinel when the stores are level.
//!
//! ## GameSnapshot
//!
//! A deep, immutable copy of everything an observer needs to redraw the
//! board. Nothing in a snapshot aliases engine-owned storage.

use serde::{Deserialize, Serialize};

use super::board::Row;
use super::player::PlayerId;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Strictly larger store.
    Winner(PlayerId),
    /// Equal stores.
    Draw,
}

impl GameResult {
    /// Decide the result from the final store totals.
    #[must_use]
    pub fn from_stores(stores: [u32; 2]) -> Self {
        match stores[0].cmp(&stores[1]) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::FIRST),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::SECOND),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// The active-player slot.
///
/// `Player` while the game is ongoing (the player to move) and after a
/// decisive finish (the winner). `Draw` is the sentinel for a level finish
/// and is never a valid player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// A seat at the board.
    Player(PlayerId),
    /// The game ended with equal stores.
    Draw,
}

impl Turn {
    /// The player in this slot, if any.
    #[must_use]
    pub fn player(self) -> Option<PlayerId> {
        match self {
            Turn::Player(p) => Some(p),
            Turn::Draw => None,
        }
    }

    /// Is this the draw sentinel?
    #[must_use]
    pub fn is_draw(self) -> bool {
        matches!(self, Turn::Draw)
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Turn::Player(p) => write!(f, "{}", p),
            Turn::Draw => write!(f, "Draw"),
        }
    }
}

/// Engine lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted.
    #[default]
    Ongoing,
    /// Terminal and sticky.
    GameOver(GameResult),
}

impl GameStatus {
    /// Is the game finished?
    #[must_use]
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::GameOver(_))
    }

    /// The result if the game is finished.
    #[must_use]
    pub fn result(self) -> Option<GameResult> {
        match self {
            GameStatus::Ongoing => None,
            GameStatus::GameOver(result) => Some(result),
        }
    }
}

/// Immutable copy of the observable game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Both rows, first player first.
    pub pits: [Row; 2],
    /// Both stores, first player first.
    pub stores: [u32; 2],
    /// Player to move, winner, or draw sentinel.
    pub active: Turn,
    /// Lifecycle state.
    pub status: GameStatus,
    /// Undos left for the current anchor player.
    pub remaining_undos: u8,
    /// Did the last move earn the active player another move?
    pub free_turn_pending: bool,
    /// Number of committed moves in the history.
    pub moves_played: usize,
}

impl GameSnapshot {
    /// Sum of every pit and store.
    #[must_use]
    pub fn total_stones(&self) -> u32 {
        self.pits.iter().flatten().sum::<u32>() + self.stores.iter().sum::<u32>()
    }

    /// Is the game finished?
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status.is_over()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_from_stores() {
        assert_eq!(GameResult::from_stores([25, 11]), GameResult::Winner(PlayerId::FIRST));
        assert_eq!(GameResult::from_stores([11, 25]), GameResult::Winner(PlayerId::SECOND));
        assert_eq!(GameResult::from_stores([18, 18]), GameResult::Draw);
    }

    #[test]
    fn test_result_is_winner() {
        let result = GameResult::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(PlayerId::new(0)));
        assert!(!draw.is_winner(PlayerId::new(1)));
    }

    #[test]
    fn test_turn_draw_is_not_a_player() {
        assert_eq!(Turn::Draw.player(), None);
        assert!(Turn::Draw.is_draw());
        assert_ne!(Turn::Draw, Turn::Player(PlayerId::FIRST));
        assert_ne!(Turn::Draw, Turn::Player(PlayerId::SECOND));
        assert_eq!(format!("{}", Turn::Player(PlayerId::SECOND)), "Player 1");
    }

    #[test]
    fn test_status() {
        assert!(!GameStatus::Ongoing.is_over());
        assert_eq!(GameStatus::Ongoing.result(), None);

        let over = GameStatus::GameOver(GameResult::Draw);
        assert!(over.is_over());
        assert_eq!(over.result(), Some(GameResult::Draw));
    }

    #[test]
    fn test_snapshot_serialization() {
        let snapshot = GameSnapshot {
            pits: [[3; 6], [3; 6]],
            stores: [0, 0],
            active: Turn::Player(PlayerId::FIRST),
            status: GameStatus::Ongoing,
            remaining_undos: 3,
            free_turn_pending: false,
            moves_played: 0,
        };
        assert_eq!(snapshot.total_stones(), 36);

        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, deserialized);
    }
}
