//! Rendering module
//!
//! `scene` turns game state into a draw list; `canvas` plays it on a 2D canvas.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::{CanvasRenderer, SpriteCache};
pub use scene::{DrawCommand, build_frame};
