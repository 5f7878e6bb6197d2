//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives here, owned by one `GameState`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rank::Rank;
use super::score::ScoreTracker;
use crate::consts::*;

/// How two touching pieces interact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    /// Equal ranks resting side by side combine into the next rank
    #[default]
    Merge,
    /// Falling pieces come to rest on top of whatever they land on
    Stack,
}

impl InteractionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionMode::Merge => "merge",
            InteractionMode::Stack => "stack",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "merge" | "a" => Some(InteractionMode::Merge),
            "stack" | "b" => Some(InteractionMode::Stack),
            _ => None,
        }
    }
}

/// Rules and geometry, fixed for the lifetime of a `GameState`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    pub mode: InteractionMode,
    pub width: f32,
    pub height: f32,
    /// Gap between the ground line and the canvas bottom
    pub ground_margin: f32,
    /// Per-tick fall distance of a new piece
    pub gravity: f32,
    /// Bottom edges closer than this count as aligned for merging (0 = exact)
    pub merge_tolerance: f32,
    /// Refuse drops once this many pieces exist (None = unbounded)
    pub max_pieces: Option<usize>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Merge,
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            ground_margin: GROUND_MARGIN,
            gravity: GRAVITY,
            merge_tolerance: 0.0,
            max_pieces: None,
        }
    }
}

impl SimConfig {
    pub fn with_mode(mode: InteractionMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn ground_y(&self) -> f32 {
        crate::ground_y(self.height, self.ground_margin)
    }
}

/// A falling or resting fruit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub rank: Rank,
    /// Bounding-box edge; always the size table entry for `rank`
    edge: f32,
    /// Downward displacement per tick
    pub vel_y: f32,
    pub resting: bool,
}

impl Piece {
    /// Create a falling piece horizontally centered on `center_x`, at the top
    pub fn new(id: u32, center_x: f32, rank: Rank, config: &SimConfig) -> Self {
        let edge = rank.edge(config.mode);
        Self {
            id,
            pos: Vec2::new(center_x - edge / 2.0, 0.0),
            rank,
            edge,
            vel_y: config.gravity,
            resting: false,
        }
    }

    pub fn edge(&self) -> f32 {
        self.edge
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.edge
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.edge
    }

    /// Move vertically so the bottom edge sits at `y`
    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y - self.edge;
    }

    /// Change rank and resize, keeping the bottom-left corner in place
    pub fn set_rank(&mut self, rank: Rank, mode: InteractionMode) {
        let bottom = self.bottom();
        self.rank = rank;
        self.edge = rank.edge(mode);
        self.set_bottom(bottom);
    }
}

/// Whether ticks advance the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Running,
    Paused,
}

/// Something that happened during a tick (for HUD updates and logging)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Spawned { id: u32, rank: Rank, x: f32 },
    /// Reached the ground line
    Landed { id: u32 },
    /// Came to rest on top of another piece
    Stacked { id: u32, on: u32 },
    Merged {
        absorber: u32,
        consumed: u32,
        rank: Rank,
        score: u64,
    },
    /// Piece cap reached; drop ignored
    DropRefused { x: f32 },
}

/// Complete simulation state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub config: SimConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: Phase,
    /// Running ticks so far
    pub time_ticks: u64,
    /// Live pieces in spawn order; iteration order decides merge absorbers
    pub pieces: Vec<Piece>,
    pub score: ScoreTracker,
    /// Events since the last drain (not gameplay-affecting)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    #[serde(skip)]
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl GameState {
    pub fn new(config: SimConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            phase: Phase::Running,
            time_ticks: 0,
            pieces: Vec::new(),
            score: ScoreTracker::default(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    pub fn ground_y(&self) -> f32 {
        self.config.ground_y()
    }

    pub fn piece(&self, id: u32) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id == id)
    }

    pub fn is_settled(&self) -> bool {
        self.pieces.iter().all(|p| p.resting)
    }

    /// Take all events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_centered_on_drop_x() {
        let config = SimConfig::default();
        let piece = Piece::new(1, 100.0, Rank::One, &config);
        assert_eq!(piece.pos, Vec2::new(85.0, 0.0));
        assert_eq!(piece.edge(), 30.0);
        assert_eq!(piece.vel_y, GRAVITY);
        assert!(!piece.resting);
    }

    #[test]
    fn test_set_rank_keeps_bottom_left() {
        let config = SimConfig::default();
        let mut piece = Piece::new(1, 100.0, Rank::Two, &config);
        piece.set_bottom(500.0);
        piece.set_rank(Rank::Three, config.mode);
        assert_eq!(piece.edge(), 50.0);
        assert_eq!(piece.bottom(), 500.0);
        assert_eq!(piece.left(), 80.0);
    }

    #[test]
    fn test_ground_y_default() {
        let state = GameState::new(SimConfig::default(), 1);
        assert_eq!(state.ground_y(), 500.0);
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!(InteractionMode::parse("Stack"), Some(InteractionMode::Stack));
        assert_eq!(InteractionMode::parse("merge"), Some(InteractionMode::Merge));
        assert_eq!(InteractionMode::parse("bounce"), None);
    }
}
