use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_list::MoveList;
use crate::moves::move_descriptions::{pack_move, FLAG_CAPTURE};

/// Emit one move per set bit of `targets`, flagging those that land on
/// `enemy_occ` as captures.
#[inline]
pub fn push_targets(out: &mut MoveList, from: Square, mut targets: Bitboard, piece: Piece, enemy_occ: Bitboard) {
    while targets != 0 {
        let to = targets.trailing_zeros() as Square;
        let flags = if square_bit(to) & enemy_occ != 0 { FLAG_CAPTURE } else { 0 };
        out.push(pack_move(from, to, piece, None, flags));
        targets &= targets - 1;
    }
}

/// Generate moves for every `kind` piece of the side to move, with targets
/// given by `attacks(from, occupancy_all)`.
#[inline]
pub fn generate_table_moves(
    game_state: &GameState,
    kind: PieceKind,
    attacks: impl Fn(Square, Bitboard) -> Bitboard,
    out: &mut MoveList,
) {
    let side = game_state.side_to_move;
    let own_occ = game_state.occupancy_by_color[side.index()];
    let enemy_occ = game_state.occupancy_by_color[side.opposite().index()];
    let piece = Piece::new(side, kind);

    let mut pieces = game_state.pieces[side.index()][kind.index()];
    while pieces != 0 {
        let from = pieces.trailing_zeros() as Square;
        let targets = attacks(from, game_state.occupancy_all) & !own_occ;
        push_targets(out, from, targets, piece, enemy_occ);
        pieces &= pieces - 1;
    }
}
