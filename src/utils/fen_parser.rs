//! FEN-to-GameState parser.
//!
//! Builds the piece bitboards, side, castling rights, en-passant target and
//! clocks, then derives the occupancy caches. The two clock fields may be
//! omitted, in which case they default to `0 1`.

use crate::chess_errors::FenError;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn parse_fen(fen: &str) -> Result<GameState, FenError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or(FenError::MissingField("board layout"))?;
    let side_part = parts.next().ok_or(FenError::MissingField("side to move"))?;
    let castling_part = parts.next().ok_or(FenError::MissingField("castling rights"))?;
    let en_passant_part = parts.next().ok_or(FenError::MissingField("en-passant square"))?;
    let halfmove_part = parts.next();
    let fullmove_part = parts.next();

    if halfmove_part.is_some() && fullmove_part.is_none() {
        return Err(FenError::MissingField("fullmove number"));
    }
    if parts.next().is_some() {
        return Err(FenError::TrailingFields);
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_square = parse_en_passant_square(en_passant_part)?;
    if let Some(value) = halfmove_part {
        game_state.halfmove_clock = parse_counter("halfmove clock", value)?;
    }
    if let Some(value) = fullmove_part {
        game_state.fullmove_number = parse_counter("fullmove number", value)?;
    }

    game_state.recalc_occupancy();
    validate(&game_state)?;
    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), FenError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount(ranks.len()));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx;
        let rank_error = FenError::RankWidth { rank: board_rank + 1 };
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(FenError::PieceChar(ch));
                }
                file += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or(FenError::PieceChar(ch))?;
            if file >= 8 {
                return Err(rank_error);
            }

            let sq = board_rank * 8 + file;
            game_state.pieces[piece.color.index()][piece.kind.index()] |= 1u64 << sq;
            file += 1;
        }

        if file != 8 {
            return Err(rank_error);
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, FenError> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(FenError::SideToMove(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, FenError> {
    if castling_part == "-" {
        return Ok(0);
    }

    castling_part.chars().try_fold(0, |rights, ch| {
        let bit = match ch {
            'K' => CASTLE_LIGHT_KINGSIDE,
            'Q' => CASTLE_LIGHT_QUEENSIDE,
            'k' => CASTLE_DARK_KINGSIDE,
            'q' => CASTLE_DARK_QUEENSIDE,
            _ => return Err(FenError::CastlingChar(ch)),
        };
        Ok(rights | bit)
    })
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, FenError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    match algebraic_to_square(en_passant_part) {
        Some(square) if matches!(square / 8, 2 | 5) => Ok(Some(square)),
        _ => Err(FenError::Square(en_passant_part.to_owned())),
    }
}

fn parse_counter(field: &'static str, value: &str) -> Result<u16, FenError> {
    value.parse::<u16>().map_err(|_| FenError::Counter {
        field,
        value: value.to_owned(),
    })
}

/// Positions the core cannot handle: a missing or doubled king, a pawn on
/// its first or last rank, an en-passant target no double push could have
/// left, or a king that can be captured.
fn validate(game_state: &GameState) -> Result<(), FenError> {
    for color in [Color::Light, Color::Dark] {
        if game_state.pieces[color.index()][PieceKind::King.index()].count_ones() != 1 {
            return Err(FenError::KingCount);
        }
    }

    const BACK_RANKS: Bitboard = 0xFF00_0000_0000_00FF;
    let pawns = game_state.pieces[Color::Light.index()][PieceKind::Pawn.index()]
        | game_state.pieces[Color::Dark.index()][PieceKind::Pawn.index()];
    if pawns & BACK_RANKS != 0 {
        let square = (pawns & BACK_RANKS).trailing_zeros() as Square;
        return Err(FenError::PawnOnBackRank(square_to_algebraic(square)));
    }

    if let Some(target) = game_state.en_passant_square {
        validate_en_passant_target(game_state, target)?;
    }

    if is_king_in_check(game_state, game_state.side_to_move.opposite()) {
        return Err(FenError::OpponentInCheck);
    }
    Ok(())
}

/// The target sits behind a pawn the opponent just pushed two squares: on
/// rank 6 with Light to move, rank 3 with Dark to move, and empty.
fn validate_en_passant_target(game_state: &GameState, target: Square) -> Result<(), FenError> {
    let side = game_state.side_to_move;
    let pushed = match side {
        Color::Light if target / 8 == 5 => target - 8,
        Color::Dark if target / 8 == 2 => target + 8,
        _ => return Err(FenError::EnPassantTarget(square_to_algebraic(target))),
    };

    let enemy_pawns = game_state.pieces[side.opposite().index()][PieceKind::Pawn.index()];
    if enemy_pawns & square_bit(pushed) == 0 || game_state.occupancy_all & square_bit(target) != 0 {
        return Err(FenError::EnPassantTarget(square_to_algebraic(target)));
    }
    Ok(())
}

pub fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else {
        Color::Dark
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;

    #[test]
    fn parse_starting_fen() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(game_state.side_to_move, Color::Light);
        assert_eq!(game_state.castling_rights, CASTLE_ALL);
        assert_eq!(game_state.en_passant_square, None);
        assert_eq!(game_state.fullmove_number, 1);
        assert_eq!(game_state.halfmove_clock, 0);
        assert_eq!(game_state.pieces[Color::Light.index()][PieceKind::Pawn.index()], 0xFF00);
    }

    #[test]
    fn clocks_are_optional() {
        let game_state = parse_fen("4k3/8/8/8/8/8/8/4K3 b - -").expect("four-field FEN should parse");
        assert_eq!(game_state.side_to_move, Color::Dark);
        assert_eq!((game_state.halfmove_clock, game_state.fullmove_number), (0, 1));
    }

    #[test]
    fn en_passant_and_clocks_are_read() {
        let game_state =
            parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 5 42").expect("FEN with en passant should parse");
        assert_eq!(game_state.en_passant_square, Some(43));
        assert_eq!(game_state.halfmove_clock, 5);
        assert_eq!(game_state.fullmove_number, 42);
    }

    #[test]
    fn malformed_fields_are_reported() {
        assert_eq!(parse_fen(""), Err(FenError::MissingField("board layout")));
        assert_eq!(parse_fen("8/8/8 w - - 0 1"), Err(FenError::RankCount(3)));
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4K4 w - - 0 1"),
            Err(FenError::RankWidth { rank: 1 })
        );
        assert_eq!(parse_fen("4k3/8/8/8/8/8/8/4X3 w - - 0 1"), Err(FenError::PieceChar('X')));
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1"),
            Err(FenError::SideToMove("x".to_owned()))
        );
        assert_eq!(parse_fen("4k3/8/8/8/8/8/8/4K3 w KX - 0 1"), Err(FenError::CastlingChar('X')));
        assert_eq!(parse_fen("4k3/8/8/8/8/8/8/4K3 w - e4 0 1"), Err(FenError::Square("e4".to_owned())));
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w - - x 1"),
            Err(FenError::Counter { field: "halfmove clock", .. })
        ));
        assert_eq!(parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0"), Err(FenError::MissingField("fullmove number")));
        assert_eq!(parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1 x"), Err(FenError::TrailingFields));
        assert_eq!(parse_fen("8/8/8/8/8/8/8/4K3 w - - 0 1"), Err(FenError::KingCount));
        assert_eq!(
            parse_fen("P3k3/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(FenError::PawnOnBackRank("a8".to_owned()))
        );
    }

    #[test]
    fn en_passant_target_must_follow_opponent_double_push() {
        // Target on the mover's own third rank.
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/3P4/4K3 w - e3 0 1"),
            Err(FenError::EnPassantTarget("e3".to_owned()))
        );
        // Right rank, but no pawn in front of the target.
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w - d6 0 1"),
            Err(FenError::EnPassantTarget("d6".to_owned()))
        );
        assert_eq!(
            parse_fen("4k3/8/8/3p4/8/8/8/4K3 b - d6 0 1"),
            Err(FenError::EnPassantTarget("d6".to_owned()))
        );
        assert!(parse_fen("4k3/8/8/8/4P3/8/8/4K3 b - e3 0 1").is_ok());
    }

    #[test]
    fn capturable_king_is_rejected() {
        assert_eq!(parse_fen("4k2R/8/8/8/8/8/8/4K3 w - - 0 1"), Err(FenError::OpponentInCheck));
        // The side to move may be in check.
        assert!(parse_fen("4k2R/8/8/8/8/8/8/4K3 b - - 0 1").is_ok());
    }
}
