//! Single-level undo with a per-player budget.
//!
//! The ledger retains exactly one snapshot: the state just before the first
//! move of the current sequence. A sequence is one player's turn, from the
//! move that starts it through every free-turn continuation. Continuations do
//! not replace the snapshot, so undo rewinds the whole turn.
//!
//! Each player may undo at most `UNDO_LIMIT` times. A player's count returns
//! to zero when they start a sequence after the opponent's, and whenever a
//! move grants them a free turn. Undo consumes eligibility: a second undo
//! needs a new move first.

use im::Vector;

use crate::core::{Board, MoveRecord, PlayerId, PlayerMap};

/// Undos each player may spend.
pub const UNDO_LIMIT: u8 = 3;

/// State captured before the first move of a sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    /// Pit and store contents.
    pub board: Board,
    /// The player to move.
    pub active: PlayerId,
    /// Move history at the time.
    pub history: Vector<MoveRecord>,
}

/// Why an undo request was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UndoBlock {
    /// No move since the last undo (or since the game started).
    NotEligible,
    /// The anchor player has no undos left.
    BudgetSpent,
}

/// Undo bookkeeping.
#[derive(Clone, Debug)]
pub struct UndoLedger {
    snapshot: Option<Snapshot>,
    anchor: PlayerId,
    used: PlayerMap<u8>,
}

impl UndoLedger {
    /// A ledger with nothing to undo, anchored on the player to move.
    #[must_use]
    pub fn new(first_to_move: PlayerId) -> Self {
        Self {
            snapshot: None,
            anchor: first_to_move,
            used: PlayerMap::with_value(0),
        }
    }

    /// The player whose pre-move state is retained.
    #[must_use]
    pub fn anchor(&self) -> PlayerId {
        self.anchor
    }

    /// Undos a player has spent in their current budget window.
    #[must_use]
    pub fn used(&self, player: PlayerId) -> u8 {
        self.used[player]
    }

    /// Undos left for the anchor player.
    #[must_use]
    pub fn remaining(&self) -> u8 {
        UNDO_LIMIT.saturating_sub(self.used[self.anchor])
    }

    /// Is there a snapshot waiting to be restored?
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Record the state before a committed move by `mover`.
    ///
    /// `continuation` is true when `mover` is playing a free turn; the
    /// retained snapshot then stays in place. Otherwise `capture` is called
    /// for a fresh snapshot and `mover` becomes the anchor.
    pub fn before_move(
        &mut self,
        mover: PlayerId,
        continuation: bool,
        capture: impl FnOnce() -> Snapshot,
    ) {
        if continuation && self.snapshot.is_some() && self.anchor == mover {
            return;
        }
        if self.anchor != mover {
            self.used[mover] = 0;
        }
        self.anchor = mover;
        self.snapshot = Some(capture());
    }

    /// A move by `mover` earned a free turn: their budget window restarts.
    pub fn grant_free_turn(&mut self, mover: PlayerId) {
        self.used[mover] = 0;
    }

    /// Check whether `take` would succeed.
    pub fn check(&self) -> Result<(), UndoBlock> {
        if self.snapshot.is_none() {
            Err(UndoBlock::NotEligible)
        } else if self.used[self.anchor] >= UNDO_LIMIT {
            Err(UndoBlock::BudgetSpent)
        } else {
            Ok(())
        }
    }

    /// Hand out the retained snapshot and charge the anchor player.
    pub fn take(&mut self) -> Result<Snapshot, UndoBlock> {
        self.check()?;
        let snapshot = self.snapshot.take().ok_or(UndoBlock::NotEligible)?;
        self.used[self.anchor] += 1;
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P0: PlayerId = PlayerId::FIRST;
    const P1: PlayerId = PlayerId::SECOND;

    fn snap(stones: u32, active: PlayerId) -> Snapshot {
        Snapshot {
            board: Board::new(stones),
            active,
            history: Vector::new(),
        }
    }

    #[test]
    fn test_new_ledger_not_eligible() {
        let ledger = UndoLedger::new(P0);
        assert_eq!(ledger.anchor(), P0);
        assert_eq!(ledger.remaining(), UNDO_LIMIT);
        assert!(!ledger.is_eligible());
        assert_eq!(ledger.check(), Err(UndoBlock::NotEligible));
    }

    #[test]
    fn test_take_consumes_eligibility() {
        let mut ledger = UndoLedger::new(P0);
        ledger.before_move(P0, false, || snap(3, P0));

        assert_eq!(ledger.take(), Ok(snap(3, P0)));
        assert_eq!(ledger.used(P0), 1);
        assert_eq!(ledger.remaining(), 2);
        assert_eq!(ledger.take(), Err(UndoBlock::NotEligible));
        assert_eq!(ledger.used(P0), 1);
    }

    #[test]
    fn test_continuation_keeps_snapshot() {
        let mut ledger = UndoLedger::new(P0);
        ledger.before_move(P0, false, || snap(3, P0));
        ledger.before_move(P0, true, || panic!("continuation must not capture"));

        assert_eq!(ledger.take(), Ok(snap(3, P0)));
    }

    #[test]
    fn test_new_sequence_replaces_snapshot() {
        let mut ledger = UndoLedger::new(P0);
        ledger.before_move(P0, false, || snap(3, P0));
        ledger.before_move(P1, false, || snap(4, P1));

        assert_eq!(ledger.anchor(), P1);
        assert_eq!(ledger.take(), Ok(snap(4, P1)));
        assert_eq!(ledger.used(P1), 1);
        assert_eq!(ledger.used(P0), 0);
    }

    #[test]
    fn test_budget_spent() {
        let mut ledger = UndoLedger::new(P0);
        for _ in 0..UNDO_LIMIT {
            ledger.before_move(P0, false, || snap(3, P0));
            assert!(ledger.take().is_ok());
        }

        ledger.before_move(P0, false, || snap(3, P0));
        assert_eq!(ledger.check(), Err(UndoBlock::BudgetSpent));
        assert_eq!(ledger.take(), Err(UndoBlock::BudgetSpent));
        assert_eq!(ledger.remaining(), 0);
        assert!(ledger.is_eligible());
    }

    #[test]
    fn test_budget_resets_when_turn_comes_back() {
        let mut ledger = UndoLedger::new(P0);
        ledger.before_move(P0, false, || snap(3, P0));
        assert!(ledger.take().is_ok());
        assert_eq!(ledger.used(P0), 1);

        ledger.before_move(P0, false, || snap(3, P0));
        ledger.before_move(P1, false, || snap(3, P1));
        ledger.before_move(P0, false, || snap(3, P0));

        assert_eq!(ledger.used(P0), 0);
        assert_eq!(ledger.remaining(), UNDO_LIMIT);
    }

    #[test]
    fn test_free_turn_resets_budget() {
        let mut ledger = UndoLedger::new(P0);
        ledger.before_move(P0, false, || snap(3, P0));
        assert!(ledger.take().is_ok());
        ledger.before_move(P0, false, || snap(3, P0));
        assert!(ledger.take().is_ok());
        assert_eq!(ledger.used(P0), 2);

        ledger.grant_free_turn(P0);
        assert_eq!(ledger.used(P0), 0);
    }
}
