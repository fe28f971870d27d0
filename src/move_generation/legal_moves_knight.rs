use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::generate_table_moves;
use crate::move_generation::move_list::MoveList;
use crate::moves::attack_tables::knight_attacks;

pub fn generate_knight_moves(game_state: &GameState, out: &mut MoveList) {
    generate_table_moves(game_state, PieceKind::Knight, |from, _| knight_attacks(from), out);
}
