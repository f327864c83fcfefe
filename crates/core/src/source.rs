//! Piece source - where the next piece kind comes from.
//!
//! Injected as a capability so the session never touches global randomness:
//! the binary seeds [`RandomPieces`] from the wall clock (or an env var),
//! tests script exact sequences with [`ScriptedPieces`].

use gridfall_types::PieceKind;

/// Supplier of upcoming piece kinds.
pub trait PieceSource {
    fn next_piece(&mut self) -> PieceKind;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Uniformly random piece selection.
#[derive(Debug, Clone)]
pub struct RandomPieces {
    rng: SimpleRng,
}

impl RandomPieces {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl PieceSource for RandomPieces {
    fn next_piece(&mut self) -> PieceKind {
        let index = self.rng.next_range(PieceKind::ALL.len() as u32) as u8;
        PieceKind::from_index(index).unwrap_or(PieceKind::Square)
    }
}

/// Fixed piece sequence, cycled forever. For tests.
#[derive(Debug, Clone)]
pub struct ScriptedPieces {
    sequence: Vec<PieceKind>,
    cursor: usize,
}

impl ScriptedPieces {
    /// Panics on an empty sequence.
    pub fn new(sequence: impl Into<Vec<PieceKind>>) -> Self {
        let sequence = sequence.into();
        assert!(!sequence.is_empty(), "piece sequence must not be empty");
        Self {
            sequence,
            cursor: 0,
        }
    }
}

impl PieceSource for ScriptedPieces {
    fn next_piece(&mut self) -> PieceKind {
        let kind = self.sequence[self.cursor];
        self.cursor = (self.cursor + 1) % self.sequence.len();
        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_is_deterministic() {
        let mut a = SimpleRng::new(12345);
        let mut b = SimpleRng::new(12345);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn rng_seeds_diverge() {
        let mut a = SimpleRng::new(12345);
        let mut b = SimpleRng::new(54321);
        assert_ne!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn zero_seed_is_remapped() {
        let mut a = SimpleRng::new(0);
        let mut b = SimpleRng::new(1);
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn random_pieces_stay_in_catalog() {
        let mut source = RandomPieces::new(7);
        for _ in 0..200 {
            let kind = source.next_piece();
            assert!(PieceKind::ALL.contains(&kind));
        }
    }

    #[test]
    fn random_pieces_hit_every_kind_eventually() {
        let mut source = RandomPieces::new(42);
        let mut seen = [false; 7];
        for _ in 0..500 {
            seen[source.next_piece().index() as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn scripted_pieces_cycle() {
        let mut source = ScriptedPieces::new([PieceKind::T, PieceKind::Line]);
        assert_eq!(source.next_piece(), PieceKind::T);
        assert_eq!(source.next_piece(), PieceKind::Line);
        assert_eq!(source.next_piece(), PieceKind::T);
    }
}
