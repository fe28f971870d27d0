//! Attack patterns for pieces that jump to fixed offsets (pawn captures,
//! knights, kings).
//!
//! Each pattern is a list of `(file_step, rank_step)` offsets; offsets that
//! leave the 8x8 board are discarded and the rest are unioned per square.

use crate::game_state::chess_types::{Bitboard, Color, Square};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub const PAWN_CAPTURE_OFFSETS: [[(i8, i8); 2]; 2] = [[(-1, 1), (1, 1)], [(-1, -1), (1, -1)]];

/// Union of every on-board target reached from `square` by `offsets`.
pub fn offset_attacks(square: Square, offsets: &[(i8, i8)]) -> Bitboard {
    let file = (square % 8) as i8;
    let rank = (square / 8) as i8;

    offsets
        .iter()
        .map(|&(df, dr)| (file + df, rank + dr))
        .filter(|(f, r)| (0..8).contains(f) && (0..8).contains(r))
        .fold(0u64, |acc, (f, r)| acc | 1u64 << (r * 8 + f))
}

/// Build a 64-entry table for one offset pattern.
pub fn build_offset_table(offsets: &[(i8, i8)]) -> [Bitboard; 64] {
    let mut table = [0u64; 64];
    for (square, entry) in table.iter_mut().enumerate() {
        *entry = offset_attacks(square as Square, offsets);
    }
    table
}

#[inline]
pub fn build_pawn_tables() -> [[Bitboard; 64]; 2] {
    [
        build_offset_table(&PAWN_CAPTURE_OFFSETS[Color::Light.index()]),
        build_offset_table(&PAWN_CAPTURE_OFFSETS[Color::Dark.index()]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_in_centre_reaches_eight_squares() {
        let d4 = 27;
        assert_eq!(offset_attacks(d4, &KNIGHT_OFFSETS).count_ones(), 8);
        assert_eq!(offset_attacks(0, &KNIGHT_OFFSETS), (1 << 10) | (1 << 17));
    }

    #[test]
    fn king_in_corner_reaches_three_squares() {
        assert_eq!(offset_attacks(0, &KING_OFFSETS).count_ones(), 3);
        assert_eq!(offset_attacks(63, &KING_OFFSETS), (1 << 62) | (1 << 55) | (1 << 54));
    }

    #[test]
    fn pawn_captures_respect_edges_and_direction() {
        let pawns = build_pawn_tables();
        let e2 = 12;
        assert_eq!(pawns[Color::Light.index()][e2], (1 << 19) | (1 << 21));
        assert_eq!(pawns[Color::Dark.index()][52], (1 << 43) | (1 << 45));
        assert_eq!(pawns[Color::Light.index()][15], 1 << 22);
        assert_eq!(pawns[Color::Light.index()][60], 0);
        assert_eq!(pawns[Color::Dark.index()][3], 0);
    }
}
