//! Move-path enumeration used as the correctness oracle for generation and
//! make/restore.

use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::make_move;
use crate::move_generation::legal_move_checks::side_to_move_in_check;
use crate::move_generation::move_generator::{generate_moves, legal_moves};
use crate::moves::move_descriptions::{is_capture, is_castling, is_en_passant, move_promotion};

/// Leaf statistics in the layout of the published perft tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Number of leaf nodes reachable in exactly `depth` plies.
pub fn perft(game_state: &GameState, depth: u8) -> u64 {
    let mut board = *game_state;
    perft_recurse(&mut board, depth)
}

fn perft_recurse(game_state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_moves(game_state);
    let mut nodes = 0;
    for mv in &moves {
        let backup = game_state.snapshot();
        if !make_move(game_state, mv) {
            continue;
        }
        nodes += if depth == 1 { 1 } else { perft_recurse(game_state, depth - 1) };
        game_state.restore(&backup);
    }
    nodes
}

/// Per-root-move leaf counts, in generation order.
pub fn perft_divide(game_state: &GameState, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let mut board = *game_state;
    let moves = generate_moves(&board);
    let mut out = Vec::with_capacity(moves.len());
    for mv in &moves {
        let backup = board.snapshot();
        if !make_move(&mut board, mv) {
            continue;
        }
        out.push((mv, perft_recurse(&mut board, depth - 1)));
        board.restore(&backup);
    }
    out
}

/// Leaf counts broken down by the kind of the last move played.
pub fn perft_detailed(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }
    let mut board = *game_state;
    let mut counts = PerftCounts::default();
    detailed_recurse(&mut board, depth, &mut counts);
    counts
}

fn detailed_recurse(game_state: &mut GameState, depth: u8, counts: &mut PerftCounts) {
    let moves = generate_moves(game_state);
    for mv in &moves {
        let backup = game_state.snapshot();
        if !make_move(game_state, mv) {
            continue;
        }

        if depth == 1 {
            counts.merge(leaf_counts(game_state, mv));
        } else {
            detailed_recurse(game_state, depth - 1, counts);
        }
        game_state.restore(&backup);
    }
}

fn leaf_counts(after: &GameState, mv: Move) -> PerftCounts {
    let gives_check = side_to_move_in_check(after);
    PerftCounts {
        nodes: 1,
        captures: u64::from(is_capture(mv)),
        en_passant: u64::from(is_en_passant(mv)),
        castles: u64::from(is_castling(mv)),
        promotions: u64::from(move_promotion(mv).is_some()),
        checks: u64::from(gives_check),
        checkmates: u64::from(gives_check && legal_moves(after).is_empty()),
    }
}
