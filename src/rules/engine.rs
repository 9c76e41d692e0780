//! The Mancala rules engine.
//!
//! `MancalaEngine` exclusively owns the board and turn state. Callers drive
//! it with `apply_move` and `undo`, read it through copying queries, and
//! subscribe observers that receive a `GameSnapshot` after every committed
//! change.
//!
//! ## Outcomes of a move request
//!
//! | Situation                         | Result                                 |
//! |-----------------------------------|----------------------------------------|
//! | player or pit out of range        | `Err(PreconditionViolation)`           |
//! | game already over                 | `Ok(MoveOutcome::GameAlreadyOver)`     |
//! | not the active player             | `Err(InvalidMove)`                     |
//! | selected pit is empty             | `Ok(MoveOutcome::EmptyPit)`            |
//! | otherwise                         | `Ok(MoveOutcome::Played(report))`      |
//!
//! Only the last row commits anything or notifies observers.
//!
//! The engine is single-threaded and not reentrant; the integrating
//! application serializes every call.

use im::Vector;
use smallvec::SmallVec;
use tracing::{debug, info, instrument};

use crate::core::{
    Board, BoardPos, ConfigError, GameConfig, GameResult, GameSnapshot, GameStatus, Landing,
    MoveOutcome, MoveRecord, MoveReport, PlayerId, Position, Precondition, Row, RulesError, Turn,
    PITS_PER_ROW,
};
use crate::observers::{GameObserver, ObserverRegistry, SubscriptionId};

use super::endgame;
use super::undo::{Snapshot, UndoLedger};

/// Deterministic two-player Mancala state machine.
#[derive(Debug)]
pub struct MancalaEngine {
    board: Board,
    active: PlayerId,
    status: GameStatus,
    free_turn_pending: bool,
    undo: UndoLedger,
    history: Vector<MoveRecord>,
    observers: ObserverRegistry,
    total_stones: u32,
}

impl MancalaEngine {
    /// Start a game with `stones_per_pit` (3 or 4) in every pit.
    pub fn new(stones_per_pit: u32) -> Result<Self, ConfigError> {
        Self::with_config(GameConfig::new().with_stones_per_pit(stones_per_pit))
    }

    /// Start a game from a configuration.
    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::from_position(Position::opening(&config))
    }

    /// Start from an arbitrary position.
    ///
    /// The end-of-game check runs immediately, so a position with an empty
    /// row yields an engine that is already over.
    pub fn from_position(position: Position) -> Result<Self, ConfigError> {
        position.validate()?;

        let mut engine = Self {
            board: position.board,
            active: position.to_move,
            status: GameStatus::Ongoing,
            free_turn_pending: false,
            undo: UndoLedger::new(position.to_move),
            history: Vector::new(),
            observers: ObserverRegistry::new(),
            total_stones: position.board.total_stones(),
        };
        engine.settle();
        Ok(engine)
    }

    // === Commands ===

    /// Sow the stones in `player`'s `pit`.
    ///
    /// See the module docs for how each kind of request is answered.
    #[instrument(level = "debug", skip(self), fields(active = %self.active))]
    pub fn apply_move(&mut self, player: PlayerId, pit: usize) -> Result<MoveOutcome, RulesError> {
        if !player.is_valid() {
            return Err(Precondition::PlayerOutOfRange(player.0).into());
        }
        if pit >= PITS_PER_ROW {
            return Err(Precondition::PitOutOfRange(pit).into());
        }
        if self.status.is_over() {
            debug!("move ignored, game is over");
            return Ok(MoveOutcome::GameAlreadyOver);
        }
        if player != self.active {
            return Err(RulesError::InvalidMove {
                player,
                active: self.active,
            });
        }

        let stones = self.board.pit(player, pit);
        if stones == 0 {
            debug!("move ignored, pit is empty");
            return Ok(MoveOutcome::EmptyPit);
        }

        self.undo.before_move(player, self.free_turn_pending, || Snapshot {
            board: self.board,
            active: self.active,
            history: self.history.clone(),
        });

        let sown = self.board.sow(player, pit);
        debug_assert_eq!(sown.len(), stones as usize);
        let last = sown[sown.len() - 1];

        let landing = match last {
            BoardPos::Store(owner) if owner == player => Landing::OwnStore,
            BoardPos::Pit(side, landed) if side == player && self.board.pit(player, landed) == 1 => {
                let captured = self.board.capture(player, landed);
                Landing::Capture { pit: landed, captured }
            }
            at => Landing::Pass { at },
        };
        debug!(?landing, stones, "sowed");

        if landing.grants_free_turn() {
            self.free_turn_pending = true;
            self.undo.grant_free_turn(player);
        } else {
            self.free_turn_pending = false;
            self.active = player.opponent();
        }

        self.history.push_back(MoveRecord {
            sequence: self.history.len(),
            player,
            pit,
            landing,
        });

        let result = self.settle();
        debug_assert_eq!(self.board.total_stones(), self.total_stones);

        self.notify();

        Ok(MoveOutcome::Played(MoveReport {
            player,
            pit,
            stones,
            sown,
            landing,
            result,
        }))
    }

    /// Restore the state from before the current sequence's first move.
    ///
    /// Returns false, changing nothing, when the game is over, no move has
    /// been made since the last undo, or the anchor player's budget is spent.
    #[instrument(level = "debug", skip(self), fields(anchor = %self.undo.anchor()))]
    pub fn undo(&mut self) -> bool {
        if self.status.is_over() {
            debug!("undo ignored, game is over");
            return false;
        }

        let snapshot = match self.undo.take() {
            Ok(snapshot) => snapshot,
            Err(block) => {
                debug!(?block, "undo ignored");
                return false;
            }
        };

        self.board = snapshot.board;
        self.active = snapshot.active;
        self.history = snapshot.history;
        self.free_turn_pending = false;
        debug_assert_eq!(self.board.total_stones(), self.total_stones);

        self.notify();
        true
    }

    // === Observers ===

    /// Register an observer and deliver the current state to it right away.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) -> SubscriptionId {
        let id = self.observers.register(Box::new(observer));
        let snapshot = self.snapshot();
        self.observers.notify_one(id, &snapshot);
        id
    }

    /// Remove an observer. Returns false if the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unregister(id)
    }

    // === Queries ===

    /// Both rows, first player first.
    #[must_use]
    pub fn pits(&self) -> [Row; 2] {
        self.board.rows()
    }

    /// Both stores, first player first.
    #[must_use]
    pub fn stores(&self) -> [u32; 2] {
        self.board.stores()
    }

    /// Player to move; once over, the winner or the draw sentinel.
    #[must_use]
    pub fn active_player(&self) -> Turn {
        match self.status {
            GameStatus::Ongoing => Turn::Player(self.active),
            GameStatus::GameOver(GameResult::Winner(winner)) => Turn::Player(winner),
            GameStatus::GameOver(GameResult::Draw) => Turn::Draw,
        }
    }

    /// Has the game ended?
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status.is_over()
    }

    /// Lifecycle state.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The final result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.status.result()
    }

    /// Undos left for the anchor player.
    #[must_use]
    pub fn remaining_undos(&self) -> u8 {
        self.undo.remaining()
    }

    /// The player whose pre-move state undo would restore.
    #[must_use]
    pub fn anchor_player(&self) -> PlayerId {
        self.undo.anchor()
    }

    /// Would `undo` succeed right now?
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.status.is_over() && self.undo.check().is_ok()
    }

    /// Did the last move earn the active player another move?
    #[must_use]
    pub fn free_turn_pending(&self) -> bool {
        self.free_turn_pending
    }

    /// Pits the active player may sow from.
    #[must_use]
    pub fn legal_moves(&self) -> SmallVec<[usize; PITS_PER_ROW]> {
        if self.status.is_over() {
            return SmallVec::new();
        }
        self.board
            .row(self.active)
            .iter()
            .enumerate()
            .filter(|(_, stones)| **stones > 0)
            .map(|(pit, _)| pit)
            .collect()
    }

    /// Committed moves, oldest first. Undo removes the moves it rewinds.
    #[must_use]
    pub fn history(&self) -> Vector<MoveRecord> {
        self.history.clone()
    }

    /// Stones in play; constant for the life of the engine.
    #[must_use]
    pub fn total_stones(&self) -> u32 {
        self.total_stones
    }

    /// Copy of the observable state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            pits: self.board.rows(),
            stores: self.board.stores(),
            active: self.active_player(),
            status: self.status,
            remaining_undos: self.undo.remaining(),
            free_turn_pending: self.free_turn_pending,
            moves_played: self.history.len(),
        }
    }

    // === Internals ===

    fn settle(&mut self) -> Option<GameResult> {
        let settlement = endgame::settle(&mut self.board)?;
        info!(
            emptied = %settlement.emptied,
            sweeper = %settlement.sweeper,
            swept = settlement.swept,
            result = ?settlement.result,
            "game over"
        );
        self.status = GameStatus::GameOver(settlement.result);
        self.free_turn_pending = false;
        Some(settlement.result)
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        self.observers.notify_all(&snapshot);
    }
}
