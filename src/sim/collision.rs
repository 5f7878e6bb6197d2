//! Axis-aligned box tests between pieces
//!
//! Pieces are squares anchored at their top-left corner. Overlap is strict:
//! boxes that only share an edge do not overlap.

use super::state::Piece;

/// True if the horizontal extents intersect
#[inline]
pub fn overlaps_horizontally(a: &Piece, b: &Piece) -> bool {
    a.left() < b.right() && a.right() > b.left()
}

/// True if the vertical extents intersect
#[inline]
pub fn overlaps_vertically(a: &Piece, b: &Piece) -> bool {
    a.top() < b.bottom() && a.bottom() > b.top()
}

/// True if the boxes intersect on both axes
#[inline]
pub fn overlaps(a: &Piece, b: &Piece) -> bool {
    overlaps_horizontally(a, b) && overlaps_vertically(a, b)
}

/// Bottom edges equal within `tolerance` (0 = exact float equality)
#[inline]
pub fn bottoms_aligned(a: &Piece, b: &Piece, tolerance: f32) -> bool {
    if tolerance <= 0.0 {
        a.bottom() == b.bottom()
    } else {
        (a.bottom() - b.bottom()).abs() <= tolerance
    }
}

/// Merge contact: overlapping, aligned bottoms, same rank
pub fn can_merge(a: &Piece, b: &Piece, tolerance: f32) -> bool {
    a.rank == b.rank && overlaps(a, b) && bottoms_aligned(a, b, tolerance)
}

/// Stack contact: `falling` is horizontally over `support` and its bottom is
/// within one tick's fall of the support's top edge
pub fn lands_on(falling: &Piece, support: &Piece) -> bool {
    overlaps_horizontally(falling, support)
        && (falling.bottom() - support.top()).abs() <= falling.vel_y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rank::Rank;
    use crate::sim::state::SimConfig;

    fn piece_at(id: u32, center_x: f32, bottom: f32, rank: Rank) -> Piece {
        let mut piece = Piece::new(id, center_x, rank, &SimConfig::default());
        piece.set_bottom(bottom);
        piece
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        // Rank one is 30 wide: [85, 115) and [115, 145)
        let a = piece_at(1, 100.0, 500.0, Rank::One);
        let b = piece_at(2, 130.0, 500.0, Rank::One);
        assert!(!overlaps_horizontally(&a, &b));
        let c = piece_at(3, 129.0, 500.0, Rank::One);
        assert!(overlaps_horizontally(&a, &c));
    }

    #[test]
    fn test_can_merge_requires_exact_bottoms() {
        let a = piece_at(1, 100.0, 500.0, Rank::Two);
        let b = piece_at(2, 110.0, 500.0, Rank::Two);
        let c = piece_at(3, 110.0, 499.5, Rank::Two);
        assert!(can_merge(&a, &b, 0.0));
        assert!(!can_merge(&a, &c, 0.0));
        assert!(can_merge(&a, &c, 1.0));
    }

    #[test]
    fn test_can_merge_requires_same_rank() {
        let a = piece_at(1, 100.0, 500.0, Rank::Two);
        let b = piece_at(2, 100.0, 500.0, Rank::Three);
        assert!(!can_merge(&a, &b, 0.0));
    }

    #[test]
    fn test_lands_on_within_one_tick() {
        let support = piece_at(1, 100.0, 500.0, Rank::One); // top at 470
        let above = piece_at(2, 100.0, 468.0, Rank::One);
        let far = piece_at(3, 100.0, 460.0, Rank::One);
        let aside = piece_at(4, 200.0, 470.0, Rank::One);
        assert!(lands_on(&above, &support));
        assert!(!lands_on(&far, &support));
        assert!(!lands_on(&aside, &support));
    }
}
