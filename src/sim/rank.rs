//! Piece ranks and their per-variant size tables

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::InteractionMode;

/// Size tier of a piece. Selects both the sprite and the bounding-box edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    One,
    Two,
    Three,
    Four,
    Five,
}

/// Static description of a rank under one rule variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankSpec {
    /// Sprite file name
    pub sprite: &'static str,
    /// Bounding-box edge length in pixels
    pub edge: f32,
}

const SPRITES: [&str; 5] = [
    "fruit1.png",
    "fruit2.png",
    "fruit3.png",
    "fruit4.png",
    "fruit5.png",
];

/// Edge lengths when equal pieces merge
const MERGE_EDGES: [f32; 5] = [30.0, 40.0, 50.0, 60.0, 70.0];
/// Edge lengths when pieces stack (sprites drawn at double scale)
const STACK_EDGES: [f32; 5] = [60.0, 80.0, 100.0, 120.0, 140.0];

impl Rank {
    pub const ALL: [Rank; 5] = [Rank::One, Rank::Two, Rank::Three, Rank::Four, Rank::Five];

    /// Numeric rank, 1..=5
    pub fn value(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Zero-based table index
    pub fn index(self) -> usize {
        match self {
            Rank::One => 0,
            Rank::Two => 1,
            Rank::Three => 2,
            Rank::Four => 3,
            Rank::Five => 4,
        }
    }

    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1..=5 => Some(Self::ALL[value as usize - 1]),
            _ => None,
        }
    }

    /// Next rank up, or None at the cap
    pub fn next(self) -> Option<Self> {
        Self::from_value(self.value() + 1)
    }

    /// Uniformly random rank
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn sprite(self) -> &'static str {
        SPRITES[self.index()]
    }

    pub fn spec(self, mode: InteractionMode) -> RankSpec {
        let edges = match mode {
            InteractionMode::Merge => &MERGE_EDGES,
            InteractionMode::Stack => &STACK_EDGES,
        };
        RankSpec {
            sprite: self.sprite(),
            edge: edges[self.index()],
        }
    }

    pub fn edge(self, mode: InteractionMode) -> f32 {
        self.spec(mode).edge
    }
}
