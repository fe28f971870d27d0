//! Mutable board representation.
//!
//! `GameState` owns the twelve piece bitboards, the derived occupancy caches,
//! and the side/en-passant/castling flags. It is a plain `Copy` value so a
//! backup is a bitwise copy of the whole struct.

use crate::chess_errors::FenError;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    // [color][piece_kind]
    pub pieces: [[Bitboard; 6]; 2],

    // Derived occupancy, rebuilt after every mutation.
    pub occupancy_by_color: [Bitboard; 2],
    pub occupancy_all: Bitboard,

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            pieces: [[0; 6]; 2],
            occupancy_by_color: [0; 2],
            occupancy_all: 0,

            side_to_move: Color::Light,
            castling_rights: 0,
            en_passant_square: None,

            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn new_game() -> Self {
        // The constant is covered by tests; an empty board is never returned in practice.
        parse_fen(STARTING_POSITION_FEN).unwrap_or_default()
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn bitboard(&self, piece: Piece) -> Bitboard {
        self.pieces[piece.color.index()][piece.kind.index()]
    }

    /// Piece of `color` standing on `square`, if any.
    #[inline]
    pub fn piece_for_color(&self, color: Color, square: Square) -> Option<PieceKind> {
        let mask = square_bit(square);
        if self.occupancy_by_color[color.index()] & mask == 0 {
            return None;
        }
        ALL_PIECE_KINDS
            .into_iter()
            .find(|kind| self.pieces[color.index()][kind.index()] & mask != 0)
    }

    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        [Color::Light, Color::Dark].into_iter().find_map(|color| {
            self.piece_for_color(color, square)
                .map(|kind| Piece::new(color, kind))
        })
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let kings = self.pieces[color.index()][PieceKind::King.index()];
        if kings == 0 {
            None
        } else {
            Some(kings.trailing_zeros() as Square)
        }
    }

    /// Rebuild the three occupancy caches from the piece bitboards.
    #[inline]
    pub fn recalc_occupancy(&mut self) {
        for color in [Color::Light, Color::Dark] {
            self.occupancy_by_color[color.index()] = self.pieces[color.index()]
                .iter()
                .fold(0u64, |acc, bb| acc | bb);
        }
        self.occupancy_all = self.occupancy_by_color[0] | self.occupancy_by_color[1];
    }

    /// Copy every field into a caller-owned backup.
    #[inline]
    pub fn snapshot(&self) -> UndoState {
        UndoState::capture(self)
    }

    /// Overwrite every field from `backup`.
    #[inline]
    pub fn restore(&mut self, backup: &UndoState) {
        backup.apply_to(self);
    }
}
