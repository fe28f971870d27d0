use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_list::MoveList;
use crate::moves::attack_tables::pawn_attacks;
use crate::moves::move_descriptions::{pack_move, FLAG_CAPTURE, FLAG_DOUBLE_PAWN_PUSH, FLAG_EN_PASSANT};

#[inline]
fn push_pawn_move(out: &mut MoveList, from: Square, to: Square, side: Color, flags: u32) {
    let pawn = Piece::new(side, PieceKind::Pawn);
    let promotion_rank = if side == Color::Light { 7 } else { 0 };

    if to / 8 == promotion_rank {
        for kind in PROMOTION_KINDS {
            out.push(pack_move(from, to, pawn, Some(Piece::new(side, kind)), flags));
        }
    } else {
        out.push(pack_move(from, to, pawn, None, flags));
    }
}

pub fn generate_pawn_moves(game_state: &GameState, out: &mut MoveList) {
    let side = game_state.side_to_move;
    let enemy_occ = game_state.occupancy_by_color[side.opposite().index()];
    let empty = !game_state.occupancy_all;
    let start_rank = if side == Color::Light { 1 } else { 6 };
    let en_passant_mask = game_state.en_passant_square.map_or(0, square_bit);

    let mut pawns = game_state.pieces[side.index()][PieceKind::Pawn.index()];
    while pawns != 0 {
        let from = pawns.trailing_zeros() as Square;
        pawns &= pawns - 1;

        // A pawn never stands on its own promotion rank, so one step stays on the board.
        let one_step = match side {
            Color::Light => from + 8,
            Color::Dark => from - 8,
        };
        if square_bit(one_step) & empty != 0 {
            push_pawn_move(out, from, one_step, side, 0);

            if from / 8 == start_rank {
                let two_step = match side {
                    Color::Light => from + 16,
                    Color::Dark => from - 16,
                };
                if square_bit(two_step) & empty != 0 {
                    out.push(pack_move(
                        from,
                        two_step,
                        Piece::new(side, PieceKind::Pawn),
                        None,
                        FLAG_DOUBLE_PAWN_PUSH,
                    ));
                }
            }
        }

        let attacks = pawn_attacks(side, from);

        let mut captures = attacks & enemy_occ;
        while captures != 0 {
            let to = captures.trailing_zeros() as Square;
            push_pawn_move(out, from, to, side, FLAG_CAPTURE);
            captures &= captures - 1;
        }

        if attacks & en_passant_mask != 0 {
            let to = en_passant_mask.trailing_zeros() as Square;
            push_pawn_move(out, from, to, side, FLAG_CAPTURE | FLAG_EN_PASSANT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::move_descriptions::{is_en_passant, move_promotion};

    fn pawn_moves(fen: &str) -> MoveList {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let mut out = MoveList::new();
        generate_pawn_moves(&game, &mut out);
        out
    }

    #[test]
    fn start_position_has_sixteen_pawn_moves() {
        assert_eq!(pawn_moves(crate::game_state::chess_rules::STARTING_POSITION_FEN).len(), 16);
    }

    #[test]
    fn promotion_generates_four_moves_per_target() {
        // b8 is blocked; captures on a8 and c8 give four promotions each.
        let moves = pawn_moves("rnn1k3/1P6/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|mv| move_promotion(mv).is_some()));
    }

    #[test]
    fn en_passant_capture_is_flagged() {
        let moves = pawn_moves("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        let ep: Vec<_> = moves.iter().filter(|&mv| is_en_passant(mv)).collect();
        assert_eq!(ep.len(), 1);
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn blocked_pawn_has_no_double_push() {
        let moves = pawn_moves("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
        assert!(moves.is_empty());
    }
}
