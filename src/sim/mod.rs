//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed gravity step per tick
//! - Seeded RNG only
//! - Stable iteration order (spawn order decides merge absorbers)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rank;
pub mod score;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{bottoms_aligned, can_merge, lands_on, overlaps, overlaps_horizontally};
pub use rank::{Rank, RankSpec};
pub use score::ScoreTracker;
pub use spawn::{drop_piece, drop_piece_with_rank};
pub use state::{GameEvent, GameState, InteractionMode, Phase, Piece, SimConfig};
pub use tick::{TickInput, step, tick};
