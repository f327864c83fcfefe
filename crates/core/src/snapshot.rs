//! Read-only session snapshot consumed by renderers.

use gridfall_types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

use crate::catalog::PieceShape;

/// Everything a renderer needs to paint one frame.
///
/// The board is exported as color indices (0 = empty, 1-7 = piece kind + 1);
/// consumers map indices back through `PieceKind::from_color_index`, which
/// range-checks them. The active piece is reported as kind plus absolute
/// cells, some of which may sit above the visible grid (y < 0) right after a
/// spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active_kind: PieceKind,
    pub active_cells: PieceShape,
    pub next_kind: PieceKind,
    pub score: u32,
    pub level: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active_kind: PieceKind::Square,
            active_cells: [(0, 0); 4],
            next_kind: PieceKind::Square,
            score: 0,
            level: 1,
            paused: false,
            game_over: false,
        }
    }
}
