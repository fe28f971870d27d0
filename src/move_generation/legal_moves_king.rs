use crate::game_state::chess_rules::CASTLING_SPECS;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_targets;
use crate::move_generation::move_list::MoveList;
use crate::moves::attack_tables::king_attacks;
use crate::moves::move_descriptions::{pack_move, FLAG_CASTLING};

pub fn generate_king_moves(game_state: &GameState, out: &mut MoveList) {
    let side = game_state.side_to_move;
    let Some(from) = game_state.king_square(side) else {
        return;
    };

    let own_occ = game_state.occupancy_by_color[side.index()];
    let enemy_occ = game_state.occupancy_by_color[side.opposite().index()];
    let king = Piece::new(side, PieceKind::King);
    push_targets(out, from, king_attacks(from) & !own_occ, king, enemy_occ);

    generate_castling_moves(game_state, out, from);
}

/// Castling needs the right, an empty run between king and rook, and no
/// attacked square on the king's path (start, transit, landing).
fn generate_castling_moves(game_state: &GameState, out: &mut MoveList, king_from: Square) {
    let side = game_state.side_to_move;
    let enemy = side.opposite();
    let king = Piece::new(side, PieceKind::King);
    let rooks = game_state.pieces[side.index()][PieceKind::Rook.index()];

    for spec in &CASTLING_SPECS[side.index()] {
        if game_state.castling_rights & spec.right == 0
            || king_from != spec.king_from
            || rooks & square_bit(spec.rook_from) == 0
            || game_state.occupancy_all & spec.empty != 0
        {
            continue;
        }
        if spec
            .king_path
            .iter()
            .any(|&square| is_square_attacked(game_state, square, enemy))
        {
            continue;
        }
        out.push(pack_move(spec.king_from, spec.king_to, king, None, FLAG_CASTLING));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::move_descriptions::{is_castling, move_to};

    fn castle_targets(fen: &str) -> Vec<Square> {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let mut out = MoveList::new();
        generate_king_moves(&game, &mut out);
        out.iter().filter(|&mv| is_castling(mv)).map(move_to).collect()
    }

    #[test]
    fn both_sides_castle_when_clear() {
        assert_eq!(castle_targets("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"), vec![6, 2]);
        assert_eq!(castle_targets("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1"), vec![62, 58]);
    }

    #[test]
    fn no_castling_through_attacked_square() {
        // Dark rook on f8 covers f1; queenside stays available.
        assert_eq!(castle_targets("r3kr2/8/8/8/8/8/8/R3K2R w KQq - 0 1"), vec![2]);
    }

    #[test]
    fn no_castling_out_of_check() {
        assert!(castle_targets("r3k2r/8/8/8/8/8/8/R3K2r w KQkq - 0 1").is_empty());
        assert!(castle_targets("r3k2r/8/8/8/4r3/8/8/R3K2R w KQkq - 0 1").is_empty());
    }

    #[test]
    fn b_file_attack_does_not_block_queenside() {
        // b1 must be empty but the king never crosses it.
        assert_eq!(castle_targets("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1"), vec![2]);
        assert!(castle_targets("1r2k3/8/8/8/8/8/8/RN2K3 w Q - 0 1").is_empty());
    }
}
