//! Active piece - the one piece currently descending.
//!
//! The piece carries its own mutable copy of the catalog offsets; rotation
//! transforms that copy while the catalog stays untouched. All movement goes
//! through collision probes against the board, and a failed attempt leaves
//! the piece exactly as it was.

use gridfall_types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

use crate::board::Board;
use crate::catalog::{self, PieceShape, SPAWN_ANCHOR};

/// The falling piece: kind, offset set, and anchor position.
///
/// Absolute cell = anchor + offset. Lives for one piece's descent; landing
/// commits its cells to the board and the session replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    kind: PieceKind,
    offsets: PieceShape,
    x: i8,
    y: i8,
}

impl ActivePiece {
    /// Spawn a piece of `kind` at the spawn anchor with catalog offsets.
    ///
    /// Does not check collision; callers probe `can_move(board, 0, 0)` right
    /// after to detect a blocked spawn.
    pub fn spawn(kind: PieceKind) -> Self {
        let (x, y) = SPAWN_ANCHOR;
        Self {
            kind,
            offsets: catalog::shape(kind),
            x,
            y,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn anchor(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    pub fn offsets(&self) -> &PieceShape {
        &self.offsets
    }

    /// Absolute positions of the piece's 4 cells.
    pub fn cells(&self) -> PieceShape {
        self.offsets.map(|(ox, oy)| (self.x + ox, self.y + oy))
    }

    /// Whether the given offset set fits at the given anchor.
    ///
    /// A cell fails on the side walls, on the floor, or on an occupied board
    /// cell; cells above the visible grid (y < 0) are never checked against
    /// the board, so pieces fall in freely from above.
    fn fits(board: &Board, offsets: &PieceShape, x: i8, y: i8) -> bool {
        offsets.iter().all(|&(ox, oy)| {
            let cx = x + ox;
            let cy = y + oy;
            if cx < 0 || cx >= BOARD_WIDTH as i8 || cy >= BOARD_HEIGHT as i8 {
                return false;
            }
            cy < 0 || !board.is_occupied(cx, cy)
        })
    }

    /// Whether the piece could move by (dx, dy).
    pub fn can_move(&self, board: &Board, dx: i8, dy: i8) -> bool {
        Self::fits(board, &self.offsets, self.x + dx, self.y + dy)
    }

    /// Move by (dx, dy) if the target position is free.
    pub fn attempt_move(&mut self, board: &Board, dx: i8, dy: i8) -> bool {
        if self.can_move(board, dx, dy) {
            self.x += dx;
            self.y += dy;
            true
        } else {
            false
        }
    }

    /// Rotate 90 degrees about the piece's local origin, if the result fits.
    ///
    /// The candidate offset set is computed and validated before anything is
    /// committed, so no partially-rotated state is ever observable. A blocked
    /// rotation returns false with the offsets untouched; there are no wall
    /// kicks.
    pub fn attempt_rotate(&mut self, board: &Board) -> bool {
        let candidate = self.offsets.map(|(ox, oy)| (oy, -ox));
        if Self::fits(board, &candidate, self.x, self.y) {
            self.offsets = candidate;
            true
        } else {
            false
        }
    }
}
