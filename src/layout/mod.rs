//! Board themes.
//!
//! A `Layout` is a named capability set: where the pits and stores sit on a
//! board of a given size, and how to draw a `GameSnapshot`. Layouts only read
//! snapshots; the rules engine knows nothing about them.
//!
//! Two themes ship with the crate:
//! - `ClassicLayout`: evenly spaced pits, plain counts.
//! - `FancyLayout`: inset pits between tall stores, stones drawn as glyphs.

pub mod classic;
pub mod fancy;
pub mod geometry;

pub use classic::ClassicLayout;
pub use fancy::FancyLayout;
pub use geometry::{BoardGeometry, Rect};

use serde::{Deserialize, Serialize};

use crate::core::GameSnapshot;

/// A board theme.
pub trait Layout {
    /// Human-readable theme name, for the pre-game selection screen.
    fn name(&self) -> &str;

    /// Pit and store rectangles for a board of `width` x `height`.
    fn pit_geometry(&self, width: f32, height: f32) -> BoardGeometry;

    /// Draw the board as text.
    fn render(&self, snapshot: &GameSnapshot) -> String;
}

/// The themes offered on the pre-game screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutKind {
    #[default]
    Classic,
    Fancy,
}

impl LayoutKind {
    /// Every theme, in menu order.
    pub const ALL: [LayoutKind; 2] = [LayoutKind::Classic, LayoutKind::Fancy];

    /// Instantiate the theme.
    #[must_use]
    pub fn build(self) -> Box<dyn Layout> {
        match self {
            LayoutKind::Classic => Box::new(ClassicLayout),
            LayoutKind::Fancy => Box::new(FancyLayout::default()),
        }
    }
}

/// Status line under the board.
pub(crate) fn status_line(snapshot: &GameSnapshot) -> String {
    use crate::core::{GameResult, GameStatus, Turn};

    match (snapshot.status, snapshot.active) {
        (GameStatus::GameOver(GameResult::Draw), _) => "The game ended in a draw".to_string(),
        (GameStatus::GameOver(GameResult::Winner(p)), _) => format!("{} is the winner!", p),
        (GameStatus::Ongoing, Turn::Player(p)) => {
            format!("{}'s move (undos left: {})", p, snapshot.remaining_undos)
        }
        (GameStatus::Ongoing, Turn::Draw) => String::new(),
    }
}
