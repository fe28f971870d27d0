//! Triangular principal-variation table.
//!
//! Row `ply` holds the best line found from that ply onward; when a move
//! raises alpha at `ply`, the child's row is copied behind it.

use crate::game_state::chess_types::Move;
use crate::moves::move_descriptions::NULL_MOVE;
use crate::search::move_ordering::MAX_PLY;

pub struct PvTable {
    length: [usize; MAX_PLY + 1],
    table: [[Move; MAX_PLY]; MAX_PLY],
}

impl Default for PvTable {
    fn default() -> Self {
        Self {
            length: [0; MAX_PLY + 1],
            table: [[NULL_MOVE; MAX_PLY]; MAX_PLY],
        }
    }
}

impl PvTable {
    /// Mark the line at `ply` empty before the node searches its moves.
    #[inline]
    pub fn start_node(&mut self, ply: usize) {
        self.length[ply] = ply;
    }

    /// `mv` is the new best move at `ply`; splice in the child's line.
    pub fn update(&mut self, ply: usize, mv: Move) {
        self.table[ply][ply] = mv;
        let child_len = self.length[ply + 1].max(ply + 1);
        for next in (ply + 1)..child_len {
            self.table[ply][next] = self.table[ply + 1][next];
        }
        self.length[ply] = child_len;
    }

    /// The root line from the last completed update.
    #[inline]
    pub fn line(&self) -> &[Move] {
        &self.table[0][..self.length[0]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_line_is_copied_behind_parent_move() {
        let mut pv = PvTable::default();
        pv.start_node(0);
        pv.start_node(1);
        pv.start_node(2);
        pv.update(2, 300);
        pv.update(1, 200);
        pv.update(0, 100);
        assert_eq!(pv.line(), &[100, 200, 300]);

        // A sibling that does not raise alpha leaves the root line alone.
        pv.start_node(1);
        assert_eq!(pv.line(), &[100, 200, 300]);
    }

    #[test]
    fn leaf_child_gives_single_move_line() {
        let mut pv = PvTable::default();
        pv.start_node(0);
        pv.start_node(1);
        pv.update(0, 7);
        assert_eq!(pv.line(), &[7]);

        assert!(PvTable::default().line().is_empty());
    }
}
