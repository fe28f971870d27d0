//! Iterative deepening search with negamax alpha-beta pruning.
//!
//! Each iteration runs a fail-hard negamax from the root with a full window,
//! extends checks by one ply, drops into a capture-only quiescence search at
//! the horizon, and scores repetitions along the current line as draws.
//! Per-search state (killers, history, PV table, line hashes) lives in a
//! `Searcher` created fresh for every top-level call.

use std::time::Instant;

use tracing::{debug, info};

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::make_move;
use crate::move_generation::legal_move_checks::side_to_move_in_check;
use crate::move_generation::move_generator::generate_moves;
use crate::move_generation::move_list::MoveList;
use crate::search::board_scoring::{BoardScorer, MaterialScorer};
use crate::search::move_ordering::{order_moves, MoveOrdering, MAX_PLY, PV_MOVE_SCORE};
use crate::search::principal_variation::PvTable;
use crate::search::zobrist::position_key;
use crate::utils::long_algebraic::moves_to_long_algebraic;

pub const MATE_SCORE: i32 = 30_000;
pub const INFINITY: i32 = 32_000;

/// Scores at least this large encode a forced mate.
pub const MATE_THRESHOLD: i32 = MATE_SCORE - MAX_PLY as i32;

/// Shallowest depth that still sees a mate delivered by the root move.
pub const MIN_SEARCH_DEPTH: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_depth: 6 }
    }
}

impl SearchConfig {
    /// Depth actually searched: at least `MIN_SEARCH_DEPTH`, at most one
    /// below the per-ply table size.
    #[inline]
    pub fn effective_depth(&self) -> u8 {
        self.max_depth.clamp(MIN_SEARCH_DEPTH, MAX_PLY as u8 - 1)
    }
}

/// Outcome of one completed iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationSummary {
    pub depth: u8,
    pub score: i32,
    pub nodes: u64,
    pub principal_variation: Vec<Move>,
}

impl IterationSummary {
    /// Engine-style info line, e.g. `info depth 3 score cp 35 nodes 812 pv e2e4 e7e5 g1f3`.
    pub fn info_line(&self) -> String {
        format!(
            "info depth {} score {} nodes {} pv {}",
            self.depth,
            format_score(self.score),
            self.nodes,
            moves_to_long_algebraic(&self.principal_variation)
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub reached_depth: u8,
    pub nodes: u64,
    pub principal_variation: Vec<Move>,
    pub elapsed_ms: u64,
    pub nps: u64,
    pub iterations: Vec<IterationSummary>,
}

/// `cp N` for ordinary scores, `mate N` (moves, negative when being mated)
/// for mate scores.
pub fn format_score(score: i32) -> String {
    if score >= MATE_THRESHOLD {
        format!("mate {}", (MATE_SCORE - score + 1) / 2)
    } else if score <= -MATE_THRESHOLD {
        format!("mate -{}", (MATE_SCORE + score) / 2)
    } else {
        format!("cp {score}")
    }
}

/// Search `game_state` with the baseline material scorer.
pub fn search(game_state: &GameState, max_depth: u8) -> SearchResult {
    iterative_deepening_search(game_state, &MaterialScorer, SearchConfig { max_depth })
}

pub fn iterative_deepening_search<S: BoardScorer>(
    game_state: &GameState,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    let started_at = Instant::now();
    let mut searcher = Searcher::new(game_state, scorer);
    let mut result = SearchResult::default();

    for depth in 1..=config.effective_depth() {
        searcher.previous_pv = result.principal_variation.clone();
        searcher.follow_pv = true;
        let score = searcher.negamax(-INFINITY, INFINITY, i32::from(depth));

        let summary = IterationSummary {
            depth,
            score,
            nodes: searcher.nodes,
            principal_variation: searcher.pv.line().to_vec(),
        };
        debug!(
            depth,
            score,
            nodes = searcher.nodes,
            pv = %moves_to_long_algebraic(&summary.principal_variation),
            "iteration complete"
        );

        result.best_move = summary.principal_variation.first().copied();
        result.best_score = score;
        result.reached_depth = depth;
        result.principal_variation = summary.principal_variation.clone();
        result.iterations.push(summary);
    }

    result.nodes = searcher.nodes;
    result.elapsed_ms = started_at.elapsed().as_millis() as u64;
    result.nps = if result.elapsed_ms == 0 {
        0
    } else {
        result.nodes.saturating_mul(1000) / result.elapsed_ms
    };

    info!(
        depth = result.reached_depth,
        score = result.best_score,
        nodes = result.nodes,
        elapsed_ms = result.elapsed_ms,
        nps = result.nps,
        "search complete"
    );

    result
}

/// Mutable state for one top-level search.
struct Searcher<'a, S: BoardScorer> {
    state: GameState,
    scorer: &'a S,
    ply: usize,
    nodes: u64,
    ordering: MoveOrdering,
    pv: PvTable,
    line_hashes: [u64; MAX_PLY],
    // Root line of the last completed iteration, tried first at each ply.
    previous_pv: Vec<Move>,
    follow_pv: bool,
    score_pv: bool,
}

impl<'a, S: BoardScorer> Searcher<'a, S> {
    fn new(game_state: &GameState, scorer: &'a S) -> Self {
        Self {
            state: *game_state,
            scorer,
            ply: 0,
            nodes: 0,
            ordering: MoveOrdering::default(),
            pv: PvTable::default(),
            line_hashes: [0; MAX_PLY],
            previous_pv: Vec::new(),
            follow_pv: false,
            score_pv: false,
        }
    }

    #[inline]
    fn evaluate(&self) -> i32 {
        self.scorer.score_for_side_to_move(&self.state)
    }

    /// Keep following the previous iteration's line only while its move at
    /// this ply is among the generated moves.
    fn enable_pv_scoring(&mut self, moves: &MoveList) {
        self.follow_pv = false;
        if let Some(&pv_move) = self.previous_pv.get(self.ply) {
            if moves.contains(pv_move) {
                self.follow_pv = true;
                self.score_pv = true;
            }
        }
    }

    fn sort_moves(&mut self, moves: &mut MoveList) {
        let ply = self.ply;
        let pv_move = self.previous_pv.get(ply).copied();
        let state = &self.state;
        let ordering = &self.ordering;
        let score_pv = &mut self.score_pv;

        order_moves(moves, |mv| {
            if *score_pv && pv_move == Some(mv) {
                *score_pv = false;
                return PV_MOVE_SCORE;
            }
            ordering.score_move(state, mv, ply)
        });
    }

    fn is_repetition(&self, key: u64) -> bool {
        self.line_hashes[..self.ply].contains(&key)
    }

    fn negamax(&mut self, mut alpha: i32, beta: i32, mut depth: i32) -> i32 {
        self.pv.start_node(self.ply);

        if depth <= 0 {
            return self.quiescence(alpha, beta);
        }
        if self.ply >= MAX_PLY - 1 {
            return self.evaluate();
        }

        let key = position_key(&self.state);
        if self.is_repetition(key) {
            return 0;
        }
        self.line_hashes[self.ply] = key;

        self.nodes += 1;

        let in_check = side_to_move_in_check(&self.state);
        if in_check {
            depth += 1;
        }

        let mut moves = generate_moves(&self.state);
        if self.follow_pv {
            self.enable_pv_scoring(&moves);
        }
        self.sort_moves(&mut moves);

        let mut legal_moves = 0;
        for mv in &moves {
            let backup = self.state.snapshot();
            if !make_move(&mut self.state, mv) {
                continue;
            }
            legal_moves += 1;

            self.ply += 1;
            let score = -self.negamax(-beta, -alpha, depth - 1);
            self.ply -= 1;
            self.state.restore(&backup);

            if score >= beta {
                self.ordering.record_cutoff(mv, self.ply, depth);
                return beta;
            }
            if score > alpha {
                alpha = score;
                self.pv.update(self.ply, mv);
            }
        }

        if legal_moves == 0 {
            return if in_check { -MATE_SCORE + self.ply as i32 } else { 0 };
        }
        alpha
    }

    /// Captures-only search from a stand-pat lower bound.
    fn quiescence(&mut self, mut alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;

        let stand_pat = self.evaluate();
        if stand_pat >= beta {
            return beta;
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }

        let mut moves = generate_moves(&self.state);
        moves.retain_captures();
        let state = &self.state;
        let ordering = &self.ordering;
        order_moves(&mut moves, |mv| ordering.score_move(state, mv, MAX_PLY));

        for mv in &moves {
            let backup = self.state.snapshot();
            if !make_move(&mut self.state, mv) {
                continue;
            }
            let score = -self.quiescence(-beta, -alpha);
            self.state.restore(&backup);

            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }
        alpha
    }
}
