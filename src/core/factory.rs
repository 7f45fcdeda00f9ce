//! Factory module - random piece generation
//!
//! Every draw is an independent uniform pick among the seven kinds; there
//! is deliberately no bag shuffling, matching the engine's ruleset. A
//! scripted source replays a fixed kind sequence for deterministic tests.
//!
//! Randomness comes from a small seeded LCG so that a session is fully
//! reproducible from (config, seed); the engine never reads ambient
//! entropy.

use crate::core::pieces::Piece;
use crate::types::PieceKind;

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

#[derive(Debug, Clone)]
enum Source {
    /// Independent uniform draws (gameplay)
    Uniform(SimpleRng),
    /// Fixed sequence replayed cyclically (tests)
    Scripted { kinds: Vec<PieceKind>, cursor: usize },
}

/// Piece factory: draws a kind and places it at the centered top spawn
/// coordinate. Purely generative, no error conditions.
#[derive(Debug, Clone)]
pub struct PieceFactory {
    source: Source,
}

impl PieceFactory {
    /// Uniform random factory seeded for reproducible sessions
    pub fn uniform(seed: u32) -> Self {
        Self {
            source: Source::Uniform(SimpleRng::new(seed)),
        }
    }

    /// Factory replaying `kinds` in order, cycling when exhausted.
    /// Panics on an empty sequence.
    pub fn scripted(kinds: Vec<PieceKind>) -> Self {
        assert!(!kinds.is_empty(), "scripted factory needs at least one kind");
        Self {
            source: Source::Scripted { kinds, cursor: 0 },
        }
    }

    fn next_kind(&mut self) -> PieceKind {
        match &mut self.source {
            Source::Uniform(rng) => {
                PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize]
            }
            Source::Scripted { kinds, cursor } => {
                let kind = kinds[*cursor % kinds.len()];
                *cursor += 1;
                kind
            }
        }
    }

    /// Draw the next piece at its spawn position
    pub fn next(&mut self) -> Piece {
        Piece::spawn(self.next_kind())
    }
}
