//! Zobrist position hashing for repetition detection along the search line.
//!
//! Keys come from a fixed-seed RNG so hashes are identical across runs.

use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game_state::{chess_types::*, game_state::GameState};

const ZOBRIST_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug)]
struct ZobristTables {
    piece_square: [[u64; 64]; 12],
    side_to_move: u64,
    castling: [u64; 16],
    en_passant_file: [u64; 8],
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> ZobristTables {
    let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);

    let mut piece_square = [[0u64; 64]; 12];
    for key in piece_square.iter_mut().flatten() {
        *key = rng.random();
    }

    let side_to_move = rng.random();

    let mut castling = [0u64; 16];
    rng.fill(&mut castling[..]);

    let mut en_passant_file = [0u64; 8];
    rng.fill(&mut en_passant_file[..]);

    ZobristTables {
        piece_square,
        side_to_move,
        castling,
        en_passant_file,
    }
}

#[inline]
pub fn piece_square_key(piece: Piece, square: Square) -> u64 {
    tables().piece_square[piece.index()][square as usize]
}

/// Full position key over pieces, side to move, castling rights and the
/// en-passant file.
pub fn position_key(game_state: &GameState) -> u64 {
    let tables = tables();
    let mut key = 0u64;

    for (color_idx, color_pieces) in game_state.pieces.iter().enumerate() {
        for (kind_idx, &bitboard) in color_pieces.iter().enumerate() {
            let row = &tables.piece_square[color_idx * 6 + kind_idx];
            let mut bb = bitboard;
            while bb != 0 {
                key ^= row[bb.trailing_zeros() as usize];
                bb &= bb - 1;
            }
        }
    }

    if game_state.side_to_move == Color::Dark {
        key ^= tables.side_to_move;
    }
    key ^= tables.castling[(game_state.castling_rights & CASTLE_ALL) as usize];
    if let Some(ep_square) = game_state.en_passant_square {
        key ^= tables.en_passant_file[(ep_square % 8) as usize];
    }

    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::long_algebraic::apply_long_algebraic_moves;

    #[test]
    fn starting_position_hash_is_deterministic() {
        assert_eq!(position_key(&GameState::new_game()), position_key(&GameState::new_game()));
    }

    #[test]
    fn side_castling_and_en_passant_change_hash() {
        let key = |fen: &str| position_key(&GameState::from_fen(fen).expect("FEN should parse"));

        assert_ne!(key("4k3/8/8/8/8/8/8/4K3 w - - 0 1"), key("4k3/8/8/8/8/8/8/4K3 b - - 0 1"));
        assert_ne!(key("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1"), key("4k3/8/8/8/8/8/8/R3K2R w - - 0 1"));
        assert_ne!(key("4k3/8/8/8/4P3/8/8/4K3 b - - 0 1"), key("4k3/8/8/8/4P3/8/8/4K3 b - e3 0 1"));
    }

    #[test]
    fn knight_shuffle_returns_to_same_key() {
        let start = GameState::new_game();
        let back = apply_long_algebraic_moves(&start, ["g1f3", "g8f6", "f3g1", "f6g8"]).expect("shuffle should be legal");
        assert_eq!(position_key(&back), position_key(&start));

        let moved = apply_long_algebraic_moves(&start, ["g1f3"]).expect("move should be legal");
        assert_ne!(position_key(&moved), position_key(&start));
    }

    #[test]
    fn adding_a_piece_xors_its_key() {
        let bare = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let rook = GameState::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").expect("FEN should parse");
        let light_rook = Piece::new(Color::Light, PieceKind::Rook);
        assert_eq!(position_key(&bare) ^ piece_square_key(light_rook, 0), position_key(&rook));
    }
}
