//! Pseudo-legal move generation for the side to move.
//!
//! Generation does not filter moves that leave the mover's king attacked;
//! `make_move` rejects those when they are tried.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::make_move;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_sliders::{generate_bishop_moves, generate_queen_moves, generate_rook_moves};
use crate::move_generation::move_list::MoveList;

pub fn generate_moves(game_state: &GameState) -> MoveList {
    let mut out = MoveList::new();
    generate_pawn_moves(game_state, &mut out);
    generate_knight_moves(game_state, &mut out);
    generate_bishop_moves(game_state, &mut out);
    generate_rook_moves(game_state, &mut out);
    generate_queen_moves(game_state, &mut out);
    generate_king_moves(game_state, &mut out);
    out
}

/// Pseudo-legal captures only (including en passant and capture-promotions).
pub fn generate_captures(game_state: &GameState) -> MoveList {
    let mut out = generate_moves(game_state);
    out.retain_captures();
    out
}

/// Moves that survive `make_move`; for tools and tests, not the search loop.
pub fn legal_moves(game_state: &GameState) -> MoveList {
    let mut scratch = *game_state;
    let mut out = generate_moves(game_state);
    out.retain(|mv| {
        let backup = scratch.snapshot();
        let legal = make_move(&mut scratch, mv);
        scratch.restore(&backup);
        legal
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::move_descriptions::is_capture;

    #[test]
    fn start_position_has_twenty_moves() {
        let game = GameState::new_game();
        assert_eq!(generate_moves(&game).len(), 20);
        assert_eq!(legal_moves(&game).len(), 20);
        assert!(generate_captures(&game).is_empty());
    }

    #[test]
    fn pinned_piece_moves_are_generated_but_not_legal() {
        // The e2 knight is pinned by the e8 rook.
        let game = GameState::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("FEN should parse");
        let pseudo = generate_moves(&game).len();
        let legal = legal_moves(&game).len();
        assert_eq!(pseudo - legal, 6);
    }

    #[test]
    fn captures_are_a_subset_of_moves() {
        let game = GameState::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .expect("FEN should parse");
        let all = generate_moves(&game);
        let captures = generate_captures(&game);
        assert_eq!(captures.len(), all.iter().filter(|&mv| is_capture(mv)).count());
        assert!(captures.iter().all(|mv| all.contains(mv)));
        assert_eq!(legal_moves(&game).len(), 48);
    }
}
