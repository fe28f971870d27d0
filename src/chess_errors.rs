//! Error types surfaced by the crate's fallible edges.
//!
//! The search hot path never fails; these cover text input (FEN and move
//! strings) and the offline magic-number search.

use thiserror::Error;

use crate::game_state::chess_types::Square;
use crate::moves::sliding_attacks::Slider;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("missing {0} field in FEN")]
    MissingField(&'static str),

    #[error("FEN has extra trailing fields")]
    TrailingFields,

    #[error("board layout must contain 8 ranks, found {0}")]
    RankCount(usize),

    #[error("rank {rank} does not describe exactly 8 files")]
    RankWidth { rank: usize },

    #[error("invalid piece character '{0}' in board layout")]
    PieceChar(char),

    #[error("invalid side-to-move field: {0}")]
    SideToMove(String),

    #[error("invalid castling rights character: {0}")]
    CastlingChar(char),

    #[error("invalid square: {0}")]
    Square(String),

    #[error("invalid {field}: {value}")]
    Counter { field: &'static str, value: String },

    #[error("each side must have exactly one king")]
    KingCount,

    #[error("pawn on back rank at {0}")]
    PawnOnBackRank(String),

    #[error("en-passant target {0} does not follow a double pawn push")]
    EnPassantTarget(String),

    #[error("side not to move is in check")]
    OpponentInCheck,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveParseError {
    #[error("invalid long algebraic move: {0}")]
    Malformed(String),

    #[error("move {0} is not legal in this position")]
    NotLegal(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MagicSearchError {
    #[error("no {slider:?} magic found for square {square} after {trials} trials")]
    NotFound {
        slider: Slider,
        square: Square,
        trials: u64,
    },
}
