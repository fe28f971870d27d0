//! Bishop, rook and queen move generation through the magic-indexed tables.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::generate_table_moves;
use crate::move_generation::move_list::MoveList;
use crate::moves::attack_tables::{bishop_attacks, queen_attacks, rook_attacks};

pub fn generate_bishop_moves(game_state: &GameState, out: &mut MoveList) {
    generate_table_moves(game_state, PieceKind::Bishop, bishop_attacks, out);
}

pub fn generate_rook_moves(game_state: &GameState, out: &mut MoveList) {
    generate_table_moves(game_state, PieceKind::Rook, rook_attacks, out);
}

pub fn generate_queen_moves(game_state: &GameState, out: &mut MoveList) {
    generate_table_moves(game_state, PieceKind::Queen, queen_attacks, out);
}
