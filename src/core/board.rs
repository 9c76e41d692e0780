//! Board contents: two rows of pits and one store per player.
//!
//! ## Sowing order
//!
//! From the mover's point of view stones travel along their own row in
//! ascending pit order, into their own store, then along the opponent's row
//! in ascending order, and back onto their own row. The opponent's store is
//! never sown into.
//!
//! ```text
//!        opponent row  0 1 2 3 4 5  --+
//!   +--> (skipped store)              |
//!   |                                 v
//!   +--  mover row     0 1 2 3 4 5 -> mover store
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::{PlayerId, PlayerMap};

/// Pits in each player's row.
pub const PITS_PER_ROW: usize = 6;

/// Pits on the whole board.
pub const TOTAL_PITS: usize = PITS_PER_ROW * 2;

/// One player's row of pits, indexed 0-5.
pub type Row = [u32; PITS_PER_ROW];

/// Positions that received a stone during one sowing, in order.
///
/// Inline capacity covers a full lap of the board (12 pits + 1 store).
pub type SowTrace = SmallVec<[BoardPos; 13]>;

/// The pit directly across the board from `pit`.
#[must_use]
pub const fn mirror(pit: usize) -> usize {
    PITS_PER_ROW - 1 - pit
}

/// A position that can hold stones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardPos {
    /// A pit on a player's row.
    Pit(PlayerId, usize),
    /// A player's store.
    Store(PlayerId),
}

impl BoardPos {
    /// The position after this one when `mover` is sowing.
    #[must_use]
    pub fn next(self, mover: PlayerId) -> BoardPos {
        match self {
            BoardPos::Pit(side, pit) if pit + 1 < PITS_PER_ROW => BoardPos::Pit(side, pit + 1),
            BoardPos::Pit(side, _) if side == mover => BoardPos::Store(mover),
            BoardPos::Pit(_, _) => BoardPos::Pit(mover, 0),
            BoardPos::Store(_) => BoardPos::Pit(mover.opponent(), 0),
        }
    }
}

/// Pit and store contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    rows: PlayerMap<Row>,
    stores: PlayerMap<u32>,
}

impl Board {
    /// A fresh board with `stones_per_pit` in every pit and empty stores.
    #[must_use]
    pub fn new(stones_per_pit: u32) -> Self {
        Self {
            rows: PlayerMap::with_value([stones_per_pit; PITS_PER_ROW]),
            stores: PlayerMap::with_value(0),
        }
    }

    /// A board with explicit contents, first player's row and store first.
    #[must_use]
    pub fn from_parts(rows: [Row; 2], stores: [u32; 2]) -> Self {
        Self {
            rows: PlayerMap::from_array(rows),
            stores: PlayerMap::from_array(stores),
        }
    }

    /// A player's row.
    #[must_use]
    pub fn row(&self, player: PlayerId) -> &Row {
        &self.rows[player]
    }

    /// Both rows, first player first.
    #[must_use]
    pub fn rows(&self) -> [Row; 2] {
        self.rows.to_array()
    }

    /// A player's store.
    #[must_use]
    pub fn store(&self, player: PlayerId) -> u32 {
        self.stores[player]
    }

    /// Both stores, first player first.
    #[must_use]
    pub fn stores(&self) -> [u32; 2] {
        self.stores.to_array()
    }

    /// Stones at a position.
    #[must_use]
    pub fn at(&self, pos: BoardPos) -> u32 {
        match pos {
            BoardPos::Pit(side, pit) => self.rows[side][pit],
            BoardPos::Store(side) => self.stores[side],
        }
    }

    /// Stones in one pit.
    #[must_use]
    pub fn pit(&self, player: PlayerId, pit: usize) -> u32 {
        self.rows[player][pit]
    }

    /// Sum of a player's row.
    #[must_use]
    pub fn row_total(&self, player: PlayerId) -> u32 {
        self.rows[player].iter().sum()
    }

    /// Does a player's row hold no stones?
    #[must_use]
    pub fn row_is_empty(&self, player: PlayerId) -> bool {
        self.rows[player].iter().all(|&n| n == 0)
    }

    /// Every stone on the board, pits and stores.
    #[must_use]
    pub fn total_stones(&self) -> u32 {
        PlayerId::all()
            .map(|p| self.row_total(p) + self.stores[p])
            .sum()
    }

    /// `total_stones`, or `None` if the count does not fit in a `u32`.
    #[must_use]
    pub fn checked_total_stones(&self) -> Option<u32> {
        self.rows
            .values()
            .flatten()
            .chain(self.stores.values())
            .try_fold(0u32, |total, &n| total.checked_add(n))
    }

    /// Pick up every stone in `mover`'s `pit` and sow them one at a time.
    ///
    /// Returns every position that received a stone, in order; the last
    /// entry is where the final stone landed. Sowing an empty pit returns an
    /// empty trace and leaves the board unchanged.
    pub fn sow(&mut self, mover: PlayerId, pit: usize) -> SowTrace {
        let mut in_hand = std::mem::take(&mut self.rows[mover][pit]);
        let mut trace = SowTrace::new();
        let mut pos = BoardPos::Pit(mover, pit);

        while in_hand > 0 {
            pos = pos.next(mover);
            self.add(pos, 1);
            trace.push(pos);
            in_hand -= 1;
        }

        trace
    }

    /// Empty `mover`'s pit and the pit facing it into `mover`'s store.
    ///
    /// Returns the number of stones moved.
    pub fn capture(&mut self, mover: PlayerId, pit: usize) -> u32 {
        let own = std::mem::take(&mut self.rows[mover][pit]);
        let across = std::mem::take(&mut self.rows[mover.opponent()][mirror(pit)]);
        let captured = own + across;
        self.stores[mover] += captured;
        captured
    }

    /// Move everything left on `player`'s row into their own store.
    ///
    /// Returns the number of stones moved.
    pub fn sweep_row(&mut self, player: PlayerId) -> u32 {
        let swept = self.row_total(player);
        self.rows[player] = [0; PITS_PER_ROW];
        self.stores[player] += swept;
        swept
    }

    fn add(&mut self, pos: BoardPos, stones: u32) {
        match pos {
            BoardPos::Pit(side, pit) => self.rows[side][pit] += stones,
            BoardPos::Store(side) => self.stores[side] += stones,
        }
    }
}
