//! Slow reference geometry for bishops and rooks.
//!
//! These helpers walk rays square by square. They are used to build the
//! magic-indexed tables once at startup, by the offline magic search, and by
//! tests as the brute-force oracle; the hot path never calls them.

use crate::game_state::chess_types::{Bitboard, Square};

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slider {
    Bishop,
    Rook,
}

impl Slider {
    #[inline]
    pub const fn directions(self) -> &'static [(i8, i8); 4] {
        match self {
            Slider::Bishop => &BISHOP_DIRECTIONS,
            Slider::Rook => &ROOK_DIRECTIONS,
        }
    }

    /// Upper bound on `popcount(mask)` for this slider; sizes one table row.
    #[inline]
    pub const fn max_relevant_bits(self) -> u32 {
        match self {
            Slider::Bishop => 9,
            Slider::Rook => 12,
        }
    }
}

#[inline]
fn on_board(file: i8, rank: i8) -> bool {
    (0..8).contains(&file) && (0..8).contains(&rank)
}

/// Squares whose occupancy can change this slider's attacks from `square`.
///
/// Each ray stops one short of the board edge: a blocker on the last square
/// of a ray never hides anything behind it.
pub fn relevant_mask(slider: Slider, square: Square) -> Bitboard {
    let file = (square % 8) as i8;
    let rank = (square / 8) as i8;
    let mut mask = 0u64;

    for &(df, dr) in slider.directions() {
        let (mut f, mut r) = (file + df, rank + dr);
        while on_board(f + df, r + dr) {
            mask |= 1u64 << (r * 8 + f);
            f += df;
            r += dr;
        }
    }
    mask
}

/// Attacks from `square` given `blockers`, found by walking every ray up to
/// and including the first occupied square.
pub fn ray_attacks(slider: Slider, square: Square, blockers: Bitboard) -> Bitboard {
    let file = (square % 8) as i8;
    let rank = (square / 8) as i8;
    let mut attacks = 0u64;

    for &(df, dr) in slider.directions() {
        let (mut f, mut r) = (file + df, rank + dr);
        while on_board(f, r) {
            let bit = 1u64 << (r * 8 + f);
            attacks |= bit;
            if blockers & bit != 0 {
                break;
            }
            f += df;
            r += dr;
        }
    }
    attacks
}

/// Map `index` onto a subset of `mask`: bit `i` of `index` selects the `i`th
/// lowest set bit of `mask`. Enumerating `0..1 << mask.count_ones()` visits
/// every subset exactly once.
pub fn set_occupancy(index: usize, mask: Bitboard) -> Bitboard {
    let mut remaining = mask;
    let mut occupancy = 0u64;
    let mut bit = 0;

    while remaining != 0 {
        let square_bit = remaining & remaining.wrapping_neg();
        remaining &= remaining - 1;
        if index & (1 << bit) != 0 {
            occupancy |= square_bit;
        }
        bit += 1;
    }
    occupancy
}
