//! Canonical chess-rule constants.
//!
//! Holds the standard starting position and the per-square castling
//! permission table applied by `make_move`.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Castling rights kept when a move touches a square, either as origin or
/// destination. Rights are updated with
/// `rights &= CASTLING_PERMISSIONS[from] & CASTLING_PERMISSIONS[to]`.
pub const CASTLING_PERMISSIONS: [CastlingRights; 64] = build_castling_permissions();

const fn build_castling_permissions() -> [CastlingRights; 64] {
    let mut table = [CASTLE_ALL; 64];
    table[0] = CASTLE_ALL & !CASTLE_LIGHT_QUEENSIDE;
    table[4] = CASTLE_ALL & !(CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE);
    table[7] = CASTLE_ALL & !CASTLE_LIGHT_KINGSIDE;
    table[56] = CASTLE_ALL & !CASTLE_DARK_QUEENSIDE;
    table[60] = CASTLE_ALL & !(CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE);
    table[63] = CASTLE_ALL & !CASTLE_DARK_KINGSIDE;
    table
}

/// Static description of one castling move.
#[derive(Debug, Clone, Copy)]
pub struct CastlingSpec {
    pub right: CastlingRights,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares that must be empty.
    pub empty: Bitboard,
    /// Squares the king starts on, passes through and lands on.
    pub king_path: [Square; 3],
}

pub const CASTLING_SPECS: [[CastlingSpec; 2]; 2] = [
    [
        CastlingSpec {
            right: CASTLE_LIGHT_KINGSIDE,
            king_from: 4,
            king_to: 6,
            rook_from: 7,
            rook_to: 5,
            empty: (1 << 5) | (1 << 6),
            king_path: [4, 5, 6],
        },
        CastlingSpec {
            right: CASTLE_LIGHT_QUEENSIDE,
            king_from: 4,
            king_to: 2,
            rook_from: 0,
            rook_to: 3,
            empty: (1 << 1) | (1 << 2) | (1 << 3),
            king_path: [4, 3, 2],
        },
    ],
    [
        CastlingSpec {
            right: CASTLE_DARK_KINGSIDE,
            king_from: 60,
            king_to: 62,
            rook_from: 63,
            rook_to: 61,
            empty: (1 << 61) | (1 << 62),
            king_path: [60, 61, 62],
        },
        CastlingSpec {
            right: CASTLE_DARK_QUEENSIDE,
            king_from: 60,
            king_to: 58,
            rook_from: 56,
            rook_to: 59,
            empty: (1 << 57) | (1 << 58) | (1 << 59),
            king_path: [60, 59, 58],
        },
    ],
];

/// Look up the castling move whose king lands on `king_to`.
#[inline]
pub fn castling_spec_for(color: Color, king_to: Square) -> Option<&'static CastlingSpec> {
    CASTLING_SPECS[color.index()]
        .iter()
        .find(|spec| spec.king_to == king_to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_and_king_squares_strip_matching_rights() {
        assert_eq!(CASTLING_PERMISSIONS[7] & CASTLE_LIGHT_KINGSIDE, 0);
        assert_ne!(CASTLING_PERMISSIONS[7] & CASTLE_LIGHT_QUEENSIDE, 0);
        assert_eq!(CASTLING_PERMISSIONS[60] & (CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE), 0);
        assert_eq!(CASTLING_PERMISSIONS[27], CASTLE_ALL);
    }
}
