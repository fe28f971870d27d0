use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::attack_tables::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks};

/// True if any piece of `attacker_color` attacks `square` under the current
/// occupancy.
///
/// Each test looks outward from the target: a pawn of the attacker attacks
/// `square` exactly when a defender pawn on `square` would attack the pawn.
pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let attacker = &game_state.pieces[attacker_color.index()];

    if pawn_attacks(attacker_color.opposite(), square) & attacker[PieceKind::Pawn.index()] != 0 {
        return true;
    }

    if knight_attacks(square) & attacker[PieceKind::Knight.index()] != 0 {
        return true;
    }

    if king_attacks(square) & attacker[PieceKind::King.index()] != 0 {
        return true;
    }

    let queens = attacker[PieceKind::Queen.index()];
    let occupancy = game_state.occupancy_all;

    if bishop_attacks(square, occupancy) & (attacker[PieceKind::Bishop.index()] | queens) != 0 {
        return true;
    }

    rook_attacks(square, occupancy) & (attacker[PieceKind::Rook.index()] | queens) != 0
}

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = game_state.king_square(color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

/// Whether the side to move is currently in check.
#[inline]
pub fn side_to_move_in_check(game_state: &GameState) -> bool {
    is_king_in_check(game_state, game_state.side_to_move)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pawn_attacks_point_forward_for_attacker() {
        let game = GameState::from_fen("4k3/8/8/3p4/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        // d5 pawn (dark) attacks c4 and e4, not c6/e6.
        assert!(is_square_attacked(&game, 26, Color::Dark));
        assert!(is_square_attacked(&game, 28, Color::Dark));
        assert!(!is_square_attacked(&game, 42, Color::Dark));
        assert!(!is_square_attacked(&game, 44, Color::Dark));
    }

    #[test]
    fn sliders_are_blocked_by_occupancy() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/4P3/R3K2r w - - 0 1").expect("FEN should parse");
        assert!(is_king_in_check(&game, Color::Light));
        assert!(is_square_attacked(&game, 5, Color::Dark));
        assert!(is_square_attacked(&game, 3, Color::Light));
        // The light king on e1 stops the h1 rook short of d1.
        assert!(!is_square_attacked(&game, 3, Color::Dark));
        assert!(!is_square_attacked(&game, 20, Color::Light));
    }

    #[test]
    fn knight_and_king_contacts() {
        let game = GameState::from_fen("4k3/8/8/8/3n4/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(!is_square_attacked(&game, 19, Color::Dark));
        assert!(is_square_attacked(&game, 21, Color::Dark));
        assert!(is_square_attacked(&game, 51, Color::Dark));
        assert!(!side_to_move_in_check(&game));
    }
}
