//! Decorated board: tall stores either side, stones drawn as glyphs.
//!
//! Proportions follow a 455 x 325 reference board and scale with the size
//! asked for.

use crate::core::{GameSnapshot, PlayerMap, PITS_PER_ROW};

use super::geometry::{far_row, row_rects, BoardGeometry, Rect};
use super::{status_line, Layout};

const REF_WIDTH: f32 = 455.0;
const REF_HEIGHT: f32 = 325.0;
const MARGIN: f32 = 5.0;
const STORE_WIDTH: f32 = 55.0;
const STORE_HEIGHT: f32 = 225.0;
const STORE_TOP: f32 = 45.0;
const PIT_SIZE: f32 = 50.0;
const PIT_TOP: f32 = 75.0;
const PIT_BOTTOM: f32 = 190.0;

/// Glyphs drawn per pit before switching to a count.
const MAX_GLYPHS: u32 = 4;

/// The decorated theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FancyLayout {
    stone: char,
}

impl Default for FancyLayout {
    fn default() -> Self {
        Self { stone: 'o' }
    }
}

impl FancyLayout {
    /// Draw stones with a different glyph.
    #[must_use]
    pub fn with_stone(mut self, stone: char) -> Self {
        self.stone = stone;
        self
    }

    fn pit(&self, count: u32) -> String {
        let body = if count <= MAX_GLYPHS {
            let glyphs: String = std::iter::repeat(self.stone).take(count as usize).collect();
            format!("{:<width$}", glyphs, width = MAX_GLYPHS as usize)
        } else {
            format!("{}x{:<2}", self.stone, count)
        };
        format!("({})", body)
    }
}

impl Layout for FancyLayout {
    fn name(&self) -> &str {
        "Fancy Mancala"
    }

    fn pit_geometry(&self, width: f32, height: f32) -> BoardGeometry {
        let sx = width / REF_WIDTH;
        let sy = height / REF_HEIGHT;
        let scaled = |r: Rect| Rect::new(r.x * sx, r.y * sy, r.width * sx, r.height * sy);

        let left = MARGIN + STORE_WIDTH + MARGIN;
        let rows = [
            row_rects(false, left, PIT_BOTTOM, PIT_SIZE, MARGIN),
            row_rects(true, left, PIT_TOP, PIT_SIZE, MARGIN),
        ];

        BoardGeometry {
            pits: PlayerMap::from_array(rows.map(|row| row.map(scaled))),
            stores: PlayerMap::from_array([
                scaled(Rect::new(REF_WIDTH - MARGIN - STORE_WIDTH, STORE_TOP, STORE_WIDTH, STORE_HEIGHT)),
                scaled(Rect::new(MARGIN, STORE_TOP, STORE_WIDTH, STORE_HEIGHT)),
            ]),
        }
    }

    fn render(&self, snapshot: &GameSnapshot) -> String {
        let [near, far] = snapshot.pits;
        let [near_store, far_store] = snapshot.stores;
        let pit_width = MAX_GLYPHS as usize + 2;
        let span = PITS_PER_ROW * (pit_width + 1) + 1;
        let edge = format!("+{}+\n", "-".repeat(span + 2 * 6));

        let mut out = format!("{}\n", self.name());
        out.push_str(&edge);

        out.push_str("|      ");
        for n in far_row(&far) {
            out.push(' ');
            out.push_str(&self.pit(n));
        }
        out.push_str("       |\n");

        out.push_str(&format!("| [{:>2}] {} [{:>2}] |\n", far_store, " ".repeat(span), near_store));

        out.push_str("|      ");
        for n in near {
            out.push(' ');
            out.push_str(&self.pit(n));
        }
        out.push_str("       |\n");

        out.push_str(&edge);
        out.push_str(&status_line(snapshot));
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameResult, GameStatus, PlayerId, Turn};

    fn snapshot() -> GameSnapshot {
        GameSnapshot {
            pits: [[0, 1, 4, 5, 12, 3], [3; 6]],
            stores: [9, 0],
            active: Turn::Draw,
            status: GameStatus::GameOver(GameResult::Draw),
            remaining_undos: 0,
            free_turn_pending: false,
            moves_played: 40,
        }
    }

    #[test]
    fn test_pit_glyphs() {
        let layout = FancyLayout::default();
        assert_eq!(layout.pit(0), "(    )");
        assert_eq!(layout.pit(3), "(ooo )");
        assert_eq!(layout.pit(12), "(ox12)");
        assert_eq!(layout.with_stone('*').pit(2), "(**  )");
    }

    #[test]
    fn test_render_rows_line_up() {
        let text = FancyLayout::default().render(&snapshot());
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "Fancy Mancala");
        let board_width = lines[1].chars().count();
        for line in &lines[1..6] {
            assert_eq!(line.chars().count(), board_width, "ragged line: {:?}", line);
        }
        assert!(lines[4].contains("(ox12)"));
        assert!(lines[3].contains("[ 0]") && lines[3].contains("[ 9]"));
        assert_eq!(lines[6], "The game ended in a draw");
    }

    #[test]
    fn test_geometry_matches_reference_board() {
        let geometry = FancyLayout::default().pit_geometry(REF_WIDTH, REF_HEIGHT);

        assert_eq!(geometry.stores[PlayerId::SECOND], Rect::new(5.0, 45.0, 55.0, 225.0));
        assert_eq!(geometry.stores[PlayerId::FIRST], Rect::new(395.0, 45.0, 55.0, 225.0));
        assert_eq!(geometry.pit(PlayerId::FIRST, 0), Rect::new(65.0, 190.0, 50.0, 50.0));
        assert_eq!(geometry.pit(PlayerId::SECOND, 5), Rect::new(65.0, 75.0, 50.0, 50.0));
        assert!(geometry.fits_within(REF_WIDTH, REF_HEIGHT));
    }

    #[test]
    fn test_geometry_scales() {
        let geometry = FancyLayout::default().pit_geometry(REF_WIDTH * 2.0, REF_HEIGHT * 2.0);
        assert_eq!(geometry.pit(PlayerId::FIRST, 0), Rect::new(130.0, 380.0, 100.0, 100.0));
        assert!(geometry.fits_within(REF_WIDTH * 2.0, REF_HEIGHT * 2.0));
    }
}
