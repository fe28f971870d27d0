//! Square names (`a1`..`h8`) to and from indices.

use crate::game_state::chess_types::Square;

/// Parse a coordinate such as `e4`.
#[inline]
pub fn algebraic_to_square(square: &str) -> Option<Square> {
    let &[file, rank] = square.as_bytes() else {
        return None;
    };
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }
    Some((rank - b'1') * 8 + (file - b'a'))
}

/// Name of a square index in `0..=63`.
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    debug_assert!(square < 64, "square index out of bounds: {square}");
    let file = char::from(b'a' + square % 8);
    let rank = char::from(b'1' + square / 8);
    format!("{file}{rank}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_and_centre_squares() {
        assert_eq!(algebraic_to_square("a1"), Some(0));
        assert_eq!(algebraic_to_square("h8"), Some(63));
        assert_eq!(algebraic_to_square("e4"), Some(28));
        assert_eq!(square_to_algebraic(28), "e4");
        assert_eq!(square_to_algebraic(63), "h8");
    }

    #[test]
    fn rejects_bad_coordinates() {
        for bad in ["", "e", "i1", "a9", "a0", "e44", "E4"] {
            assert_eq!(algebraic_to_square(bad), None, "{bad}");
        }
    }
}
