//! Error types.
//!
//! - `RulesError`: a `move` request the engine refused.
//! - `ConfigError`: an engine could not be built from the given setup.
//!
//! Empty pits, ineligible undos and requests after the game ended are not
//! errors; see `MoveOutcome`.

use super::player::PlayerId;

/// Caller supplied a value outside the board.
///
/// These indicate an integration bug (e.g. a broken pointer-to-pit mapping)
/// and should surface loudly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Precondition {
    #[error("player id {0} is out of range (expected 0 or 1)")]
    PlayerOutOfRange(u8),

    #[error("pit index {0} is out of range (expected 0..=5)")]
    PitOutOfRange(usize),
}

/// A refused `move` request. The engine state is unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    #[error("precondition violated: {0}")]
    PreconditionViolation(#[from] Precondition),

    #[error("{player} is not currently active ({active} to move)")]
    InvalidMove { player: PlayerId, active: PlayerId },
}

impl RulesError {
    /// Is this something to show the end user rather than a caller bug?
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        matches!(self, RulesError::InvalidMove { .. })
    }
}

/// Invalid engine setup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unsupported stone count {0} per pit (expected 3 or 4)")]
    UnsupportedStoneCount(u32),

    #[error("invalid position: {0}")]
    InvalidPosition(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_error_display() {
        let err = RulesError::from(Precondition::PitOutOfRange(6));
        assert_eq!(
            err.to_string(),
            "precondition violated: pit index 6 is out of range (expected 0..=5)"
        );
        assert!(!err.is_user_facing());

        let err = RulesError::InvalidMove {
            player: PlayerId::SECOND,
            active: PlayerId::FIRST,
        };
        assert_eq!(err.to_string(), "Player 1 is not currently active (Player 0 to move)");
        assert!(err.is_user_facing());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::UnsupportedStoneCount(5);
        assert_eq!(err.to_string(), "unsupported stone count 5 per pit (expected 3 or 4)");

        let err = ConfigError::InvalidPosition("player id 7 cannot move".to_string());
        assert_eq!(err.to_string(), "invalid position: player id 7 cannot move");
    }
}
