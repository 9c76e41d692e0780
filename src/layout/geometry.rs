//! Pit and store rectangles.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap, Row, PITS_PER_ROW};

/// Axis-aligned rectangle, origin at the top-left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Do the two rectangles share any area?
    #[must_use]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right() && other.x < self.right() && self.y < other.bottom() && other.y < self.bottom()
    }
}

/// Where every pit and store is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardGeometry {
    /// Pit rectangles per player, indexed by pit.
    pub pits: PlayerMap<[Rect; PITS_PER_ROW]>,
    /// Store rectangles per player.
    pub stores: PlayerMap<Rect>,
}

impl BoardGeometry {
    /// A player's pit rectangle.
    #[must_use]
    pub fn pit(&self, player: PlayerId, pit: usize) -> Rect {
        self.pits[player][pit]
    }

    /// Every rectangle, pits first.
    pub fn rects(&self) -> impl Iterator<Item = &Rect> {
        self.pits.values().flatten().chain(self.stores.values())
    }

    /// Are all rectangles inside a `width` x `height` board?
    #[must_use]
    pub fn fits_within(&self, width: f32, height: f32) -> bool {
        self.rects()
            .all(|r| r.x >= 0.0 && r.y >= 0.0 && r.right() <= width && r.bottom() <= height)
    }
}

/// Lay a row out left to right, or right to left when `reversed`.
pub(crate) fn row_rects(
    reversed: bool,
    left: f32,
    top: f32,
    size: f32,
    gap: f32,
) -> [Rect; PITS_PER_ROW] {
    let mut rects = [Rect::default(); PITS_PER_ROW];
    for (pit, rect) in rects.iter_mut().enumerate() {
        let slot = if reversed { PITS_PER_ROW - 1 - pit } else { pit };
        *rect = Rect::new(left + slot as f32 * (size + gap), top, size, size);
    }
    rects
}

/// Right-align a count in a cell.
pub(crate) fn cell(count: u32, width: usize) -> String {
    format!("{:>width$}", count, width = width)
}

/// Counts of the far row as drawn from the first player's side.
pub(crate) fn far_row(row: &Row) -> impl Iterator<Item = u32> + '_ {
    row.iter().rev().copied()
}
