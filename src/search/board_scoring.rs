//! Pluggable board evaluation.
//!
//! The search treats scoring as a black box: any `BoardScorer` can be handed
//! to `iterative_deepening_search`. Scores are centipawns from Light's point
//! of view; the search flips the sign for Dark.

use crate::game_state::{chess_types::*, game_state::GameState};

pub trait BoardScorer: Send + Sync {
    /// Static score, positive when Light is better.
    fn score(&self, game_state: &GameState) -> i32;

    /// Static score from the side to move's point of view.
    #[inline]
    fn score_for_side_to_move(&self, game_state: &GameState) -> i32 {
        let white_minus_black = self.score(game_state);
        match game_state.side_to_move {
            Color::Light => white_minus_black,
            Color::Dark => -white_minus_black,
        }
    }
}

impl<S: BoardScorer + ?Sized> BoardScorer for &S {
    #[inline]
    fn score(&self, game_state: &GameState) -> i32 {
        (**self).score(game_state)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 0,
        }
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        ALL_PIECE_KINDS
            .into_iter()
            .map(|kind| {
                let light = game_state.pieces[Color::Light.index()][kind.index()].count_ones() as i32;
                let dark = game_state.pieces[Color::Dark.index()][kind.index()].count_ones() as i32;
                (light - dark) * Self::piece_value(kind)
            })
            .sum()
    }
}
