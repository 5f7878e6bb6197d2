//! Frame description for the 2D canvas
//!
//! Builds the ordered list of draw operations for one frame from a read-only
//! view of the game state. The canvas backend only executes the list.

use crate::consts::{GROUND_THICKNESS, SCORE_FONT, SCORE_TEXT_BOTTOM_OFFSET, SCORE_TEXT_X};
use crate::sim::{GameState, Rank};

/// A single 2D drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole surface
    Clear { width: f32, height: f32 },
    /// Draw a rank's sprite scaled into a square
    Sprite { rank: Rank, x: f32, y: f32, size: f32 },
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: &'static str,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        font: &'static str,
        color: &'static str,
    },
}

/// Colors for scene elements
pub mod colors {
    pub const GROUND: &str = "black";
    pub const SCORE_TEXT: &str = "black";
}

/// Draw list for the current frame: clear, pieces, ground bar, score
pub fn build_frame(state: &GameState) -> Vec<DrawCommand> {
    let config = &state.config;
    let mut commands = Vec::with_capacity(state.pieces.len() + 3);

    commands.push(DrawCommand::Clear {
        width: config.width,
        height: config.height,
    });

    commands.extend(state.pieces.iter().map(|piece| DrawCommand::Sprite {
        rank: piece.rank,
        x: piece.pos.x,
        y: piece.pos.y,
        size: piece.edge(),
    }));

    commands.push(DrawCommand::FillRect {
        x: 0.0,
        y: state.ground_y(),
        width: config.width,
        height: GROUND_THICKNESS,
        color: colors::GROUND,
    });

    commands.push(DrawCommand::Text {
        text: state.score.label(),
        x: SCORE_TEXT_X,
        y: config.height - SCORE_TEXT_BOTTOM_OFFSET,
        font: SCORE_FONT,
        color: colors::SCORE_TEXT,
    });

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{SimConfig, drop_piece_with_rank};

    #[test]
    fn test_empty_frame() {
        let state = GameState::new(SimConfig::default(), 1);
        let frame = build_frame(&state);
        assert_eq!(frame.len(), 3);
        assert_eq!(
            frame[0],
            DrawCommand::Clear {
                width: 800.0,
                height: 600.0
            }
        );
        assert_eq!(
            frame[1],
            DrawCommand::FillRect {
                x: 0.0,
                y: 500.0,
                width: 800.0,
                height: 5.0,
                color: "black"
            }
        );
        assert_eq!(
            frame[2],
            DrawCommand::Text {
                text: "Score: 0".to_string(),
                x: 10.0,
                y: 550.0,
                font: "24px Arial",
                color: "black"
            }
        );
    }

    #[test]
    fn test_pieces_drawn_in_order_at_their_size() {
        let mut state = GameState::new(SimConfig::default(), 1);
        drop_piece_with_rank(&mut state, 100.0, Rank::One);
        drop_piece_with_rank(&mut state, 300.0, Rank::Five);
        let before = state.pieces.clone();

        let frame = build_frame(&state);
        assert_eq!(state.pieces, before);
        assert_eq!(
            frame[1],
            DrawCommand::Sprite {
                rank: Rank::One,
                x: 85.0,
                y: 0.0,
                size: 30.0
            }
        );
        assert_eq!(
            frame[2],
            DrawCommand::Sprite {
                rank: Rank::Five,
                x: 265.0,
                y: 0.0,
                size: 70.0
            }
        );
        assert!(matches!(frame.last(), Some(DrawCommand::Text { .. })));
    }
}
