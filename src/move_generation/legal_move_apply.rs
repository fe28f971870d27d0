//! In-place move application.
//!
//! `make_move` is the only mutator of a `GameState` during search. Callers
//! take a `snapshot()` first and `restore` it once the move is explored.

use crate::game_state::chess_rules::{castling_spec_for, CASTLING_PERMISSIONS};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::moves::move_descriptions::{
    is_capture, is_castling, is_double_pawn_push, is_en_passant, move_from, move_piece, move_promotion, move_to,
};

/// Apply a pseudo-legal move in place.
///
/// Returns `false`, with `game_state` already put back as it was, when the
/// move leaves the mover's own king attacked. This is the only legality
/// filter; the generators emit pseudo-legal moves.
pub fn make_move(game_state: &mut GameState, mv: Move) -> bool {
    let Some(piece) = move_piece(mv) else {
        return false;
    };
    let side = game_state.side_to_move;
    if piece.color != side {
        return false;
    }

    let backup = game_state.snapshot();
    let enemy = side.opposite();
    let from = move_from(mv);
    let to = move_to(mv);
    let from_bit = square_bit(from);
    let to_bit = square_bit(to);

    let own = &mut game_state.pieces[side.index()];
    own[piece.kind.index()] = (own[piece.kind.index()] & !from_bit) | to_bit;

    if let Some(promoted) = move_promotion(mv) {
        own[piece.kind.index()] &= !to_bit;
        own[promoted.kind.index()] |= to_bit;
    }

    if is_en_passant(mv) {
        let victim = match side {
            Color::Light => to - 8,
            Color::Dark => to + 8,
        };
        game_state.pieces[enemy.index()][PieceKind::Pawn.index()] &= !square_bit(victim);
    } else if is_capture(mv) {
        for bb in game_state.pieces[enemy.index()].iter_mut() {
            if *bb & to_bit != 0 {
                *bb &= !to_bit;
                break;
            }
        }
    }

    game_state.en_passant_square = if is_double_pawn_push(mv) {
        Some((from + to) / 2)
    } else {
        None
    };

    if is_castling(mv) {
        if let Some(spec) = castling_spec_for(side, to) {
            let rooks = &mut game_state.pieces[side.index()][PieceKind::Rook.index()];
            *rooks = (*rooks & !square_bit(spec.rook_from)) | square_bit(spec.rook_to);
        }
    }

    game_state.castling_rights &= CASTLING_PERMISSIONS[from as usize] & CASTLING_PERMISSIONS[to as usize];

    if piece.kind == PieceKind::Pawn || is_capture(mv) {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }
    if side == Color::Dark {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }

    game_state.recalc_occupancy();
    game_state.side_to_move = enemy;

    if is_king_in_check(game_state, side) {
        game_state.restore(&backup);
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::move_generator::generate_moves;
    use crate::moves::move_descriptions::{pack_move, FLAG_CAPTURE, FLAG_CASTLING, FLAG_EN_PASSANT};

    fn game(fen: &str) -> GameState {
        GameState::from_fen(fen).expect("FEN should parse")
    }

    fn find(game_state: &GameState, from: Square, to: Square) -> Move {
        generate_moves(game_state)
            .iter()
            .find(|&mv| move_from(mv) == from && move_to(mv) == to)
            .expect("move should be generated")
    }

    #[test]
    fn castling_relocates_rook_and_clears_rights() {
        let mut state = game("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 3 10");
        let mv = find(&state, 4, 6);
        assert!(is_castling(mv));
        assert!(make_move(&mut state, mv));

        assert_eq!(state.piece_on(6), Some(Piece::new(Color::Light, PieceKind::King)));
        assert_eq!(state.piece_on(5), Some(Piece::new(Color::Light, PieceKind::Rook)));
        assert_eq!(state.piece_on(7), None);
        assert_eq!(state.castling_rights, CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE);
        assert_eq!(state.halfmove_clock, 4);
        assert_eq!(state.side_to_move, Color::Dark);
    }

    #[test]
    fn capturing_a_home_rook_removes_its_right() {
        let mut state = game("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let mv = find(&state, 0, 56);
        assert!(is_capture(mv));
        assert!(make_move(&mut state, mv));
        assert_eq!(state.castling_rights, CASTLE_LIGHT_KINGSIDE | CASTLE_DARK_KINGSIDE);
        assert_eq!(state.halfmove_clock, 0);
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let mut state = game("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        let pawn = Piece::new(Color::Light, PieceKind::Pawn);
        let mv = pack_move(36, 43, pawn, None, FLAG_CAPTURE | FLAG_EN_PASSANT);
        assert!(make_move(&mut state, mv));
        assert_eq!(state.piece_on(35), None);
        assert_eq!(state.piece_on(43), Some(pawn));
        assert_eq!(state.occupancy_all.count_ones(), 3);
        assert_eq!(state.en_passant_square, None);
    }

    #[test]
    fn double_push_sets_en_passant_target() {
        let mut state = GameState::new_game();
        let mv = find(&state, 12, 28);
        assert!(make_move(&mut state, mv));
        assert_eq!(state.en_passant_square, Some(20));

        let reply = find(&state, 52, 36);
        assert!(make_move(&mut state, reply));
        assert_eq!(state.en_passant_square, Some(44));
        assert_eq!(state.fullmove_number, 2);
    }

    #[test]
    fn promotion_replaces_the_pawn() {
        let mut state = game("4k3/1P6/8/8/8/8/8/4K3 w - - 0 1");
        let pawn = Piece::new(Color::Light, PieceKind::Pawn);
        let knight = Piece::new(Color::Light, PieceKind::Knight);
        assert!(make_move(&mut state, pack_move(49, 57, pawn, Some(knight), 0)));
        assert_eq!(state.bitboard(pawn), 0);
        assert_eq!(state.piece_on(57), Some(knight));
    }

    #[test]
    fn move_into_check_is_rejected_and_board_untouched() {
        let mut state = game("4k3/8/8/8/8/8/4r3/4K3 w - - 0 1");
        let before = state;
        let king = Piece::new(Color::Light, PieceKind::King);

        assert!(!make_move(&mut state, pack_move(4, 11, king, None, 0)));
        assert_eq!(state, before);

        assert!(make_move(&mut state, pack_move(4, 12, king, None, FLAG_CAPTURE)));
        assert_eq!(state.pieces[Color::Dark.index()][PieceKind::Rook.index()], 0);
    }

    #[test]
    fn castling_flag_without_rights_is_not_generated() {
        let state = game("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1");
        let castles = generate_moves(&state).iter().filter(|&mv| mv & FLAG_CASTLING != 0).count();
        assert_eq!(castles, 0);
    }
}
