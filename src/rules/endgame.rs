//! End-of-game detection and remainder sweep.
//!
//! The game ends as soon as either row is empty. The player on the other
//! side then moves whatever is left on their own row into their own store,
//! and the stores decide the result.

use crate::core::{Board, GameResult, PlayerId};

/// What the sweep did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    /// The player whose row ran out.
    pub emptied: PlayerId,
    /// The player who swept their own remainder.
    pub sweeper: PlayerId,
    /// Stones swept.
    pub swept: u32,
    /// Final result.
    pub result: GameResult,
}

/// End the game if either row is empty.
///
/// Returns `None` and leaves the board untouched while both rows hold stones.
pub fn settle(board: &mut Board) -> Option<Settlement> {
    let emptied = PlayerId::all().find(|&p| board.row_is_empty(p))?;
    let sweeper = emptied.opponent();
    let swept = board.sweep_row(sweeper);

    Some(Settlement {
        emptied,
        sweeper,
        swept,
        result: GameResult::from_stores(board.stores()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const P0: PlayerId = PlayerId::FIRST;
    const P1: PlayerId = PlayerId::SECOND;

    #[test]
    fn test_no_settlement_while_both_rows_hold_stones() {
        let mut board = Board::from_parts([[0, 0, 0, 0, 0, 1], [1, 0, 0, 0, 0, 0]], [10, 12]);
        let before = board;
        assert_eq!(settle(&mut board), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_opponent_sweeps_own_row() {
        let mut board = Board::from_parts([[0; 6], [2, 0, 3, 0, 0, 1]], [20, 10]);
        let settlement = settle(&mut board).unwrap();

        assert_eq!(settlement.emptied, P0);
        assert_eq!(settlement.sweeper, P1);
        assert_eq!(settlement.swept, 6);
        assert_eq!(board.stores(), [20, 16]);
        assert!(board.row_is_empty(P1));
        assert_eq!(settlement.result, GameResult::Winner(P0));
    }

    #[test]
    fn test_emptied_player_does_not_receive_leftovers() {
        let mut board = Board::from_parts([[1, 1, 1, 1, 1, 1], [0; 6]], [5, 9]);
        let settlement = settle(&mut board).unwrap();

        assert_eq!(settlement.emptied, P1);
        assert_eq!(board.stores(), [11, 9]);
        assert_eq!(settlement.result, GameResult::Winner(P0));
    }

    #[test]
    fn test_equal_stores_draw() {
        let mut board = Board::from_parts([[0; 6], [0, 0, 0, 0, 0, 4]], [18, 14]);
        let settlement = settle(&mut board).unwrap();
        assert_eq!(board.stores(), [18, 18]);
        assert_eq!(settlement.result, GameResult::Draw);
    }

    #[test]
    fn test_both_rows_empty() {
        let mut board = Board::from_parts([[0; 6], [0; 6]], [17, 19]);
        let settlement = settle(&mut board).unwrap();
        assert_eq!(settlement.swept, 0);
        assert_eq!(settlement.result, GameResult::Winner(P1));
    }
}
