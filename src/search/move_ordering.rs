//! Move ordering heuristics: principal variation first, then captures by
//! most-valuable-victim / least-valuable-attacker, then killer moves, then
//! the history table.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_list::MoveList;
use crate::moves::move_descriptions::{is_capture, is_en_passant, move_piece_index, move_to, NULL_MOVE};

/// Deepest ply the per-ply tables cover.
pub const MAX_PLY: usize = 64;

pub const PV_MOVE_SCORE: i32 = 20_000;
pub const CAPTURE_BASE_SCORE: i32 = 10_000;
pub const FIRST_KILLER_SCORE: i32 = 9_000;
pub const SECOND_KILLER_SCORE: i32 = 8_000;
pub const HISTORY_SCORE_CAP: i32 = SECOND_KILLER_SCORE - 1;

/// `MVV_LVA[attacker][victim]` over coloured piece indices. Pairs of the same
/// colour never occur and score 0.
pub const MVV_LVA: [[i32; 12]; 12] = build_mvv_lva();

const fn build_mvv_lva() -> [[i32; 12]; 12] {
    let mut table = [[0; 12]; 12];
    let mut attacker = 0;
    while attacker < 12 {
        let mut victim = 0;
        while victim < 12 {
            if attacker / 6 != victim / 6 {
                let victim_kind = (victim % 6) as i32;
                let attacker_kind = (attacker % 6) as i32;
                table[attacker][victim] = (victim_kind + 1) * 100 + (6 - attacker_kind);
            }
            victim += 1;
        }
        attacker += 1;
    }
    table
}

/// Killer and history tables for one top-level search.
pub struct MoveOrdering {
    killers: [[Move; MAX_PLY]; 2],
    history: [[i32; 64]; 12],
}

impl Default for MoveOrdering {
    fn default() -> Self {
        Self {
            killers: [[NULL_MOVE; MAX_PLY]; 2],
            history: [[0; 64]; 12],
        }
    }
}

impl MoveOrdering {
    #[inline]
    pub fn killers(&self, ply: usize) -> [Move; 2] {
        [self.killers[0][ply], self.killers[1][ply]]
    }

    #[inline]
    pub fn history(&self, mv: Move) -> i32 {
        self.history[move_piece_index(mv)][move_to(mv) as usize]
    }

    /// Remember a quiet move that caused a beta cutoff at `ply`.
    pub fn record_cutoff(&mut self, mv: Move, ply: usize, depth: i32) {
        if is_capture(mv) || ply >= MAX_PLY {
            return;
        }
        if self.killers[0][ply] != mv {
            self.killers[1][ply] = self.killers[0][ply];
            self.killers[0][ply] = mv;
        }
        let slot = &mut self.history[move_piece_index(mv)][move_to(mv) as usize];
        *slot = slot.saturating_add(depth.max(1));
    }

    /// Ordering score for a move that is not the PV move.
    pub fn score_move(&self, game_state: &GameState, mv: Move, ply: usize) -> i32 {
        if is_capture(mv) {
            return CAPTURE_BASE_SCORE + MVV_LVA[move_piece_index(mv)][captured_piece_index(game_state, mv)];
        }
        if ply < MAX_PLY {
            if self.killers[0][ply] == mv {
                return FIRST_KILLER_SCORE;
            }
            if self.killers[1][ply] == mv {
                return SECOND_KILLER_SCORE;
            }
        }
        self.history(mv).min(HISTORY_SCORE_CAP)
    }
}

/// Coloured index of the piece a capture removes.
#[inline]
pub fn captured_piece_index(game_state: &GameState, mv: Move) -> usize {
    let victim_color = game_state.side_to_move.opposite();
    if is_en_passant(mv) {
        return Piece::new(victim_color, PieceKind::Pawn).index();
    }
    game_state
        .piece_for_color(victim_color, move_to(mv))
        .map_or(Piece::new(victim_color, PieceKind::Pawn).index(), |kind| {
            Piece::new(victim_color, kind).index()
        })
}

/// Sort `moves` by descending `scores`, keeping the two slices paired.
pub fn sort_moves_by_score(moves: &mut [Move], scores: &mut [i32]) {
    debug_assert_eq!(moves.len(), scores.len());
    if moves.len() > 1 {
        quicksort(moves, scores, 0, moves.len() - 1);
    }
}

fn quicksort(moves: &mut [Move], scores: &mut [i32], low: usize, high: usize) {
    if low >= high {
        return;
    }
    let pivot = partition(moves, scores, low, high);
    if pivot > low {
        quicksort(moves, scores, low, pivot - 1);
    }
    quicksort(moves, scores, pivot + 1, high);
}

/// Lomuto partition on the last element; larger scores go left.
fn partition(moves: &mut [Move], scores: &mut [i32], low: usize, high: usize) -> usize {
    let pivot = scores[high];
    let mut store = low;
    for j in low..high {
        if scores[j] > pivot {
            moves.swap(store, j);
            scores.swap(store, j);
            store += 1;
        }
    }
    moves.swap(store, high);
    scores.swap(store, high);
    store
}

/// Score and sort a whole list in place.
pub fn order_moves(list: &mut MoveList, mut score: impl FnMut(Move) -> i32) {
    let mut scores = [0i32; crate::move_generation::move_list::MAX_MOVES];
    let moves = list.as_mut_slice();
    let scores = &mut scores[..moves.len()];
    for (slot, &mv) in scores.iter_mut().zip(moves.iter()) {
        *slot = score(mv);
    }
    sort_moves_by_score(moves, scores);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::move_generator::generate_moves;
    use crate::moves::move_descriptions::pack_move;

    #[test]
    fn mvv_lva_prefers_big_victims_then_small_attackers() {
        let light_pawn = 0;
        let light_queen = 4;
        let dark_pawn = 6;
        let dark_queen = 10;
        assert!(MVV_LVA[light_pawn][dark_queen] > MVV_LVA[light_queen][dark_queen]);
        assert!(MVV_LVA[light_queen][dark_queen] > MVV_LVA[light_pawn][dark_pawn + 3]);
        assert!(MVV_LVA[light_pawn][dark_pawn] > MVV_LVA[light_queen][dark_pawn]);
        assert_eq!(MVV_LVA[light_pawn][light_queen], 0);
    }

    #[test]
    fn quicksort_orders_descending_and_keeps_pairs() {
        let mut moves = [10, 20, 30, 40, 50, 60];
        let mut scores = [5, -1, 90, 5, 7, 0];
        sort_moves_by_score(&mut moves, &mut scores);
        assert_eq!(scores, [90, 7, 5, 5, 0, -1]);
        assert_eq!(moves[0], 30);
        assert_eq!(moves[1], 50);
        assert_eq!(moves[5], 20);
    }

    #[test]
    fn killers_shift_and_history_accumulates() {
        let knight = Piece::new(Color::Light, PieceKind::Knight);
        let a = pack_move(6, 21, knight, None, 0);
        let b = pack_move(1, 18, knight, None, 0);
        let mut ordering = MoveOrdering::default();

        ordering.record_cutoff(a, 3, 4);
        ordering.record_cutoff(b, 3, 2);
        ordering.record_cutoff(b, 3, 2);
        assert_eq!(ordering.killers(3), [b, a]);
        assert_eq!(ordering.history(b), 4);

        let game = GameState::new_game();
        assert_eq!(ordering.score_move(&game, b, 3), FIRST_KILLER_SCORE);
        assert_eq!(ordering.score_move(&game, a, 3), SECOND_KILLER_SCORE);
        assert_eq!(ordering.score_move(&game, a, 4), 4);

        assert_eq!(MoveOrdering::default().killers(3), [NULL_MOVE, NULL_MOVE]);
    }

    #[test]
    fn captures_sort_ahead_of_quiet_moves() {
        let game = GameState::from_fen("4k3/8/8/3q4/4P3/8/8/3RK3 w - - 0 1").expect("FEN should parse");
        let mut moves = generate_moves(&game);
        let ordering = MoveOrdering::default();
        order_moves(&mut moves, |mv| ordering.score_move(&game, mv, 0));

        // e4xd5 (pawn takes queen) beats Rd1xd5 (rook takes queen).
        let first = moves.get(0).expect("moves should exist");
        assert!(is_capture(first));
        assert_eq!(move_piece_index(first), 0);
        let second = moves.get(1).expect("moves should exist");
        assert!(is_capture(second));
        assert!(!is_capture(moves.get(2).expect("moves should exist")));
    }
}
