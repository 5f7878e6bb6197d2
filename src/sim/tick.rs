//! Fixed timestep simulation tick
//!
//! One call advances every falling piece by one gravity step and resolves
//! ground contact plus merge/stack contact for the active rule variant.

use super::collision::{can_merge, lands_on};
use super::spawn::drop_piece;
use super::state::{GameEvent, GameState, InteractionMode, Phase};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Canvas-relative x coordinates clicked since the last tick
    pub drops: Vec<f32>,
    /// Pause toggle
    pub pause: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.pause {
        state.phase = match state.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
        };
        log::info!("Simulation {:?}", state.phase);
    }

    if state.phase == Phase::Paused {
        return;
    }

    for &x in &input.drops {
        drop_piece(state, x);
    }

    step(state);
    state.time_ticks += 1;
}

/// Gravity, ground clamp and pairwise contact for every falling piece
pub fn step(state: &mut GameState) {
    let mut i = 0;
    while i < state.pieces.len() {
        if !state.pieces[i].resting {
            fall(state, i);
            i = match state.config.mode {
                InteractionMode::Merge => resolve_merge(state, i),
                InteractionMode::Stack => {
                    resolve_stack(state, i);
                    i
                }
            };
        }
        i += 1;
    }
}

/// Move piece `i` down one step, clamping it onto the ground line
fn fall(state: &mut GameState, i: usize) {
    let ground = state.ground_y();
    let piece = &mut state.pieces[i];
    piece.pos.y += piece.vel_y;
    if piece.bottom() >= ground {
        piece.set_bottom(ground);
        piece.resting = true;
        state.events.push(GameEvent::Landed { id: piece.id });
    }
}

/// Merge piece `i` into the first matching partner, if both are resting.
/// Returns the index of piece `i` after any removal.
fn resolve_merge(state: &mut GameState, i: usize) -> usize {
    let tolerance = state.config.merge_tolerance;
    let pieces = &state.pieces;
    // The first contact ends the scan even when the merge cannot happen yet
    let Some(j) = (0..pieces.len()).find(|&j| j != i && can_merge(&pieces[i], &pieces[j], tolerance))
    else {
        return i;
    };
    if !(pieces[i].resting && pieces[j].resting) {
        return i;
    }

    let mode = state.config.mode;
    let absorber = &mut state.pieces[i];
    // Rank five stays rank five, but the partner is still consumed
    if let Some(next) = absorber.rank.next() {
        absorber.set_rank(next, mode);
    }
    let absorber_id = absorber.id;
    let rank = absorber.rank;

    let consumed = state.pieces.remove(j);
    let score = state.score.award_merge();
    log::debug!(
        "Merged piece {} into {} -> {:?}, score {}",
        consumed.id,
        absorber_id,
        rank,
        score
    );
    state.events.push(GameEvent::Merged {
        absorber: absorber_id,
        consumed: consumed.id,
        rank,
        score,
    });

    if j < i { i - 1 } else { i }
}

/// Rest piece `i` on top of the first piece it lands on
fn resolve_stack(state: &mut GameState, i: usize) {
    let pieces = &state.pieces;
    let Some(j) = (0..pieces.len()).find(|&j| j != i && lands_on(&pieces[i], &pieces[j])) else {
        return;
    };
    let support_top = pieces[j].top();
    let support_id = pieces[j].id;

    let piece = &mut state.pieces[i];
    piece.set_bottom(support_top);
    piece.resting = true;
    state.events.push(GameEvent::Stacked {
        id: piece.id,
        on: support_id,
    });
}
