//! Long algebraic move text (`e2e4`, `e7e8q`).
//!
//! Parsing matches the text against the legal moves of a position, so the
//! returned move always carries the flags the generator would have set.

use crate::chess_errors::MoveParseError;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::make_move;
use crate::move_generation::move_generator::legal_moves;
use crate::moves::move_descriptions::{move_from, move_promotion, move_to};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn move_to_long_algebraic(mv: Move) -> String {
    let mut out = square_to_algebraic(move_from(mv));
    out.push_str(&square_to_algebraic(move_to(mv)));
    if let Some(promoted) = move_promotion(mv) {
        out.push(promotion_char(promoted.kind));
    }
    out
}

pub fn long_algebraic_to_move(text: &str, game_state: &GameState) -> Result<Move, MoveParseError> {
    let malformed = || MoveParseError::Malformed(text.to_owned());

    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(malformed());
    }
    let from = algebraic_to_square(&text[0..2]).ok_or_else(malformed)?;
    let to = algebraic_to_square(&text[2..4]).ok_or_else(malformed)?;
    let promotion = match text.as_bytes().get(4) {
        None => None,
        Some(&ch) => Some(promotion_kind(char::from(ch)).ok_or_else(malformed)?),
    };

    legal_moves(game_state)
        .iter()
        .find(|&mv| {
            move_from(mv) == from && move_to(mv) == to && move_promotion(mv).map(|p| p.kind) == promotion
        })
        .ok_or_else(|| MoveParseError::NotLegal(text.to_owned()))
}

fn promotion_char(kind: PieceKind) -> char {
    match kind {
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        _ => 'q',
    }
}

fn promotion_kind(ch: char) -> Option<PieceKind> {
    match ch {
        'q' => Some(PieceKind::Queen),
        'r' => Some(PieceKind::Rook),
        'b' => Some(PieceKind::Bishop),
        'n' => Some(PieceKind::Knight),
        _ => None,
    }
}

/// Render a sequence of moves as space-separated long algebraic text.
pub fn moves_to_long_algebraic(moves: &[Move]) -> String {
    moves.iter().map(|&mv| move_to_long_algebraic(mv)).collect::<Vec<_>>().join(" ")
}

/// Play `moves` from `game_state`, failing on the first one that does not
/// parse or is not legal.
pub fn apply_long_algebraic_moves<'a>(
    game_state: &GameState,
    moves: impl IntoIterator<Item = &'a str>,
) -> Result<GameState, MoveParseError> {
    let mut board = *game_state;
    for text in moves {
        let mv = long_algebraic_to_move(text, &board)?;
        if !make_move(&mut board, mv) {
            return Err(MoveParseError::NotLegal(text.to_owned()));
        }
    }
    Ok(board)
}
