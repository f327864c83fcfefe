//! Piece catalog - the seven immutable shape and color definitions.
//!
//! Shapes are 4 cell offsets relative to the piece anchor; x grows rightward,
//! y grows downward. Rotation never consults the catalog again: it transforms
//! the active piece's own offset copy.

use gridfall_types::{PieceKind, Rgb};

/// A single cell offset relative to the piece anchor.
pub type PieceOffset = (i8, i8);

/// Shape of a piece: 4 cell offsets from the anchor.
pub type PieceShape = [PieceOffset; 4];

/// Spawn anchor for new pieces: (width / 2 - 2, 0).
pub const SPAWN_ANCHOR: (i8, i8) = (3, 0);

const SHAPES: [PieceShape; 7] = [
    [(0, 0), (0, 1), (1, 0), (1, 1)], // Square
    [(0, 0), (0, 1), (0, 2), (0, 3)], // Line (vertical at spawn)
    [(0, 0), (0, 1), (1, 1), (1, 2)], // Z
    [(0, 1), (0, 2), (1, 0), (1, 1)], // S
    [(0, 0), (0, 1), (0, 2), (1, 1)], // T
    [(0, 0), (1, 0), (2, 0), (2, 1)], // L
    [(0, 1), (1, 1), (2, 0), (2, 1)], // J
];

const COLORS: [Rgb; 7] = [
    Rgb::new(255, 255, 0),   // Square: yellow
    Rgb::new(0, 255, 255),   // Line: cyan
    Rgb::new(255, 0, 0),     // Z: red
    Rgb::new(0, 255, 0),     // S: green
    Rgb::new(255, 0, 255),   // T: magenta
    Rgb::new(255, 128, 0),   // L: orange
    Rgb::new(0, 0, 255),     // J: blue
];

/// Shape (cell offsets) for a piece kind.
pub fn shape(kind: PieceKind) -> PieceShape {
    SHAPES[kind.index() as usize]
}

/// Display color for a piece kind.
pub fn color(kind: PieceKind) -> Rgb {
    COLORS[kind.index() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shape_has_four_distinct_cells() {
        for kind in PieceKind::ALL {
            let cells = shape(kind);
            for i in 0..4 {
                for j in (i + 1)..4 {
                    assert_ne!(cells[i], cells[j], "{:?} repeats a cell", kind);
                }
            }
        }
    }

    #[test]
    fn shapes_fit_spawn_column_range() {
        // Anchored at x = 3, every shape must sit inside columns 0..10.
        for kind in PieceKind::ALL {
            for (ox, _) in shape(kind) {
                let x = SPAWN_ANCHOR.0 + ox;
                assert!((0..10).contains(&x), "{:?} spawns out of bounds", kind);
            }
        }
    }

    #[test]
    fn colors_are_distinct() {
        for (i, a) in COLORS.iter().enumerate() {
            for b in &COLORS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
