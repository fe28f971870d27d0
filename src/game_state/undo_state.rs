use crate::game_state::chess_types::*;

/// Value snapshot of a `GameState`, taken immediately before `make_move` and
/// handed back to `GameState::restore` once the move has been explored.
///
/// Backups live on the caller's stack frame; nesting them per recursion level
/// gives correct unwinding without heap allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    saved: GameState,
}

impl UndoState {
    #[inline]
    pub fn capture(game_state: &GameState) -> Self {
        Self { saved: *game_state }
    }

    #[inline]
    pub fn apply_to(&self, game_state: &mut GameState) {
        *game_state = self.saved;
    }
}
