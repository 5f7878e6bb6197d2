//! Piece spawning at a drop coordinate

use super::rank::Rank;
use super::state::{GameEvent, GameState, Piece};

/// Drop a piece of random rank centered on `x`. Returns its id, or None if
/// the configured piece cap is reached.
pub fn drop_piece(state: &mut GameState, x: f32) -> Option<u32> {
    if at_capacity(state) {
        return refuse(state, x);
    }
    let rank = Rank::random(&mut state.rng);
    drop_piece_with_rank(state, x, rank)
}

/// Drop a piece with a chosen rank (no RNG draw)
pub fn drop_piece_with_rank(state: &mut GameState, x: f32, rank: Rank) -> Option<u32> {
    if at_capacity(state) {
        return refuse(state, x);
    }
    let id = state.next_entity_id();
    let piece = Piece::new(id, x, rank, &state.config);
    log::debug!("Spawned {:?} piece {} at x={:.1}", rank, id, piece.pos.x);
    state.pieces.push(piece);
    state.events.push(GameEvent::Spawned { id, rank, x });
    Some(id)
}

fn at_capacity(state: &GameState) -> bool {
    state
        .config
        .max_pieces
        .is_some_and(|max| state.pieces.len() >= max)
}

fn refuse(state: &mut GameState, x: f32) -> Option<u32> {
    log::warn!("Piece cap reached ({} pieces), drop ignored", state.pieces.len());
    state.events.push(GameEvent::DropRefused { x });
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::SimConfig;
    use proptest::prelude::*;

    #[test]
    fn test_drop_appends_in_order() {
        let mut state = GameState::new(SimConfig::default(), 42);
        let a = drop_piece(&mut state, 100.0);
        let b = drop_piece(&mut state, 300.0);
        assert_eq!(state.pieces.len(), 2);
        assert_eq!(state.pieces[0].id, a.unwrap());
        assert_eq!(state.pieces[1].id, b.unwrap());
    }

    #[test]
    fn test_drop_outside_canvas_is_not_clamped() {
        let mut state = GameState::new(SimConfig::default(), 1);
        drop_piece_with_rank(&mut state, -50.0, Rank::One);
        assert_eq!(state.pieces[0].pos.x, -65.0);
    }

    #[test]
    fn test_piece_cap_refuses_drop() {
        let config = SimConfig {
            max_pieces: Some(1),
            ..SimConfig::default()
        };
        let mut state = GameState::new(config, 1);
        assert!(drop_piece(&mut state, 100.0).is_some());
        assert!(drop_piece(&mut state, 200.0).is_none());
        assert_eq!(state.pieces.len(), 1);
        assert!(matches!(
            state.drain_events().last(),
            Some(GameEvent::DropRefused { .. })
        ));
    }

    #[test]
    fn test_same_seed_same_ranks() {
        let mut a = GameState::new(SimConfig::default(), 99);
        let mut b = GameState::new(SimConfig::default(), 99);
        for i in 0..20 {
            drop_piece(&mut a, i as f32 * 10.0);
            drop_piece(&mut b, i as f32 * 10.0);
        }
        let ranks_a: Vec<_> = a.pieces.iter().map(|p| p.rank).collect();
        let ranks_b: Vec<_> = b.pieces.iter().map(|p| p.rank).collect();
        assert_eq!(ranks_a, ranks_b);
    }

    proptest! {
        #[test]
        fn prop_spawn_placement(x in -1000.0f32..2000.0, seed in any::<u64>()) {
            let mut state = GameState::new(SimConfig::default(), seed);
            let id = drop_piece(&mut state, x).unwrap();
            let piece = state.piece(id).unwrap();
            prop_assert_eq!(piece.pos.x, x - piece.edge() / 2.0);
            prop_assert_eq!(piece.pos.y, 0.0);
            prop_assert!(!piece.resting);
            prop_assert!((1..=5).contains(&piece.rank.value()));
        }
    }
}
