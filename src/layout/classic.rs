//! Plain board: evenly spaced square pits, counts as numbers.

use crate::core::{GameSnapshot, PlayerMap, PITS_PER_ROW};

use super::geometry::{cell, far_row, row_rects, BoardGeometry, Rect};
use super::{status_line, Layout};

const CELL: usize = 4;

/// The default theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClassicLayout;

impl Layout for ClassicLayout {
    fn name(&self) -> &str {
        "Classic Mancala"
    }

    fn pit_geometry(&self, width: f32, height: f32) -> BoardGeometry {
        let margin = width * 0.02;
        let store_width = width / 8.0;
        let inner = width - 2.0 * (store_width + 2.0 * margin);
        let gap = margin;
        let size = ((inner - gap * (PITS_PER_ROW as f32 - 1.0)) / PITS_PER_ROW as f32)
            .min((height - 3.0 * margin) / 2.0);
        let left = store_width + 2.0 * margin;

        BoardGeometry {
            pits: PlayerMap::from_array([
                row_rects(false, left, height - margin - size, size, gap),
                row_rects(true, left, margin, size, gap),
            ]),
            stores: PlayerMap::from_array([
                Rect::new(width - margin - store_width, margin, store_width, height - 2.0 * margin),
                Rect::new(margin, margin, store_width, height - 2.0 * margin),
            ]),
        }
    }

    fn render(&self, snapshot: &GameSnapshot) -> String {
        let [near, far] = snapshot.pits;
        let [near_store, far_store] = snapshot.stores;
        let gutter = " ".repeat(CELL);

        let mut out = format!("{}\n", self.name());
        out.push_str(&gutter);
        for n in far_row(&far) {
            out.push_str(&cell(n, CELL));
        }
        out.push('\n');

        out.push_str(&cell(far_store, CELL));
        out.push_str(&" ".repeat(CELL * PITS_PER_ROW));
        out.push_str(&cell(near_store, CELL));
        out.push('\n');

        out.push_str(&gutter);
        for n in near {
            out.push_str(&cell(n, CELL));
        }
        out.push('\n');

        out.push_str(&status_line(snapshot));
        out.push('\n');
        out
    }
}
