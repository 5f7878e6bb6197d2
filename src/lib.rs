//! Fruit Drop - falling fruit that merges or stacks on a ground line
//!
//! Core modules:
//! - `sim`: Deterministic simulation (pieces, gravity, merge/stack rules, score)
//! - `renderer`: Frame description and Canvas 2D backend
//! - `input`: Pointer/keyboard translation into tick input
//! - `settings`: Runtime configuration from the page URL

pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Logical canvas size in pixels
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Distance from the canvas bottom to the ground line (score area lives below it)
    pub const GROUND_MARGIN: f32 = 100.0;
    /// Height of the drawn ground bar
    pub const GROUND_THICKNESS: f32 = 5.0;

    /// Per-tick fall distance. Constant: there is no acceleration.
    pub const GRAVITY: f32 = 2.0;

    /// Points awarded for every merge
    pub const MERGE_SCORE: u64 = 10;

    /// Score text placement (baseline-left), relative to the canvas bottom
    pub const SCORE_TEXT_X: f32 = 10.0;
    pub const SCORE_TEXT_BOTTOM_OFFSET: f32 = 50.0;
    pub const SCORE_FONT: &str = "24px Arial";
}

/// Ground line y coordinate for a canvas of the given height
#[inline]
pub fn ground_y(canvas_height: f32, margin: f32) -> f32 {
    canvas_height - margin
}
