//! Packed move encoding.
//!
//! ```text
//! bits  0..=5   from square
//! bits  6..=11  to square
//! bits 12..=15  moving piece (coloured index 0..=11)
//! bits 16..=19  promotion piece (coloured index, 0xF when none)
//! bit  20       capture
//! bit  21       double pawn push
//! bit  22       en passant
//! bit  23       castle
//! ```

use crate::game_state::chess_types::{Move, Piece, Square};

const FROM_SHIFT: u32 = 0;
const TO_SHIFT: u32 = 6;
const PIECE_SHIFT: u32 = 12;
const PROMOTION_SHIFT: u32 = 16;

const SQUARE_MASK: u32 = 0x3F;
const PIECE_MASK: u32 = 0xF;
pub const NO_PIECE_CODE: u32 = 0xF;

pub const FLAG_CAPTURE: u32 = 1 << 20;
pub const FLAG_DOUBLE_PAWN_PUSH: u32 = 1 << 21;
pub const FLAG_EN_PASSANT: u32 = 1 << 22;
pub const FLAG_CASTLING: u32 = 1 << 23;

/// Sentinel for "no move"; never produced by the generator since from == to.
pub const NULL_MOVE: Move = 0;

#[inline]
pub fn pack_move(from: Square, to: Square, piece: Piece, promotion: Option<Piece>, flags: u32) -> Move {
    let promotion_code = promotion.map_or(NO_PIECE_CODE, |p| p.index() as u32);
    (u32::from(from) << FROM_SHIFT)
        | (u32::from(to) << TO_SHIFT)
        | ((piece.index() as u32) << PIECE_SHIFT)
        | (promotion_code << PROMOTION_SHIFT)
        | flags
}

#[inline]
pub fn move_from(mv: Move) -> Square {
    ((mv >> FROM_SHIFT) & SQUARE_MASK) as Square
}

#[inline]
pub fn move_to(mv: Move) -> Square {
    ((mv >> TO_SHIFT) & SQUARE_MASK) as Square
}

#[inline]
pub fn move_piece_index(mv: Move) -> usize {
    ((mv >> PIECE_SHIFT) & PIECE_MASK) as usize
}

#[inline]
pub fn move_piece(mv: Move) -> Option<Piece> {
    Piece::from_index(move_piece_index(mv))
}

#[inline]
pub fn move_promotion(mv: Move) -> Option<Piece> {
    match (mv >> PROMOTION_SHIFT) & PIECE_MASK {
        NO_PIECE_CODE => None,
        code => Piece::from_index(code as usize),
    }
}

#[inline]
pub fn is_capture(mv: Move) -> bool {
    mv & FLAG_CAPTURE != 0
}

#[inline]
pub fn is_double_pawn_push(mv: Move) -> bool {
    mv & FLAG_DOUBLE_PAWN_PUSH != 0
}

#[inline]
pub fn is_en_passant(mv: Move) -> bool {
    mv & FLAG_EN_PASSANT != 0
}

#[inline]
pub fn is_castling(mv: Move) -> bool {
    mv & FLAG_CASTLING != 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, PieceKind};

    #[test]
    fn fields_survive_packing() {
        let pawn = Piece::new(Color::Dark, PieceKind::Pawn);
        let queen = Piece::new(Color::Dark, PieceKind::Queen);
        let mv = pack_move(14, 7, pawn, Some(queen), FLAG_CAPTURE);

        assert_eq!(move_from(mv), 14);
        assert_eq!(move_to(mv), 7);
        assert_eq!(move_piece(mv), Some(pawn));
        assert_eq!(move_promotion(mv), Some(queen));
        assert!(is_capture(mv));
        assert!(!is_en_passant(mv) && !is_castling(mv) && !is_double_pawn_push(mv));
    }

    #[test]
    fn quiet_move_has_no_promotion() {
        let knight = Piece::new(Color::Light, PieceKind::Knight);
        let mv = pack_move(6, 21, knight, None, 0);
        assert_eq!(move_promotion(mv), None);
        assert_eq!(move_piece_index(mv), 1);
        assert!(mv < 1 << 24);
        assert_ne!(mv, NULL_MOVE);
    }
}
