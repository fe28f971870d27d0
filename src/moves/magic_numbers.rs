//! Frozen magic multipliers for the sliding-piece attack tables.
//!
//! Produced offline (see `moves::magic_search` and the `find_magics` tool);
//! each entry is collision-free for its square's relevant mask with
//! `shift = 64 - relevant_bits`.

use crate::moves::sliding_attacks::Slider;

/// Popcount of the bishop relevant mask, per square.
pub const BISHOP_RELEVANT_BITS: [u8; 64] = [
    6, 5, 5, 5, 5, 5, 5, 6,
    5, 5, 5, 5, 5, 5, 5, 5,
    5, 5, 7, 7, 7, 7, 5, 5,
    5, 5, 7, 9, 9, 7, 5, 5,
    5, 5, 7, 9, 9, 7, 5, 5,
    5, 5, 7, 7, 7, 7, 5, 5,
    5, 5, 5, 5, 5, 5, 5, 5,
    6, 5, 5, 5, 5, 5, 5, 6,
];

/// Popcount of the rook relevant mask, per square.
pub const ROOK_RELEVANT_BITS: [u8; 64] = [
    12, 11, 11, 11, 11, 11, 11, 12,
    11, 10, 10, 10, 10, 10, 10, 11,
    11, 10, 10, 10, 10, 10, 10, 11,
    11, 10, 10, 10, 10, 10, 10, 11,
    11, 10, 10, 10, 10, 10, 10, 11,
    11, 10, 10, 10, 10, 10, 10, 11,
    11, 10, 10, 10, 10, 10, 10, 11,
    12, 11, 11, 11, 11, 11, 11, 12,
];

pub const BISHOP_MAGICS: [u64; 64] = [
    0x0002_0202_0202_0200, 0x0002_0202_0202_0000, 0x0004_0102_0200_0000, 0x0004_0400_8000_0000,
    0x0001_1040_0000_0000, 0x0000_8210_4000_0000, 0x0000_4104_1040_0000, 0x0000_1041_0410_4000,
    0x0000_0404_0404_0400, 0x0000_0202_0202_0200, 0x0000_0401_0202_0000, 0x0000_0404_0080_0000,
    0x0000_0110_4000_0000, 0x0000_0082_1040_0000, 0x0000_0041_0410_4000, 0x0000_0020_8208_2000,
    0x0004_0008_0808_0800, 0x0002_0004_0404_0400, 0x0001_0002_0202_0200, 0x0000_8008_0200_4000,
    0x0000_8004_00A0_0000, 0x0000_2001_0088_4000, 0x0000_4000_8208_2000, 0x0000_2000_4104_1000,
    0x0002_0800_1010_1000, 0x0001_0400_0808_0800, 0x0000_2080_0401_0400, 0x0000_4040_0401_0200,
    0x0000_8400_0080_2000, 0x0000_4040_0201_1000, 0x0000_8080_0104_1000, 0x0000_4040_0082_0800,
    0x0001_0410_0020_2000, 0x0000_8208_0010_1000, 0x0000_1044_0008_0800, 0x0000_0200_8008_0080,
    0x0000_4040_4004_0100, 0x0000_8081_0002_0100, 0x0001_0101_0002_0800, 0x0000_8080_8001_0400,
    0x0000_8208_2000_4000, 0x0000_4104_1000_2000, 0x0000_0820_8800_1000, 0x0000_0020_1100_0800,
    0x0000_0801_0040_0400, 0x0001_0101_0100_0200, 0x0002_0202_0200_0400, 0x0001_0101_0100_0200,
    0x0000_4104_1040_0000, 0x0000_2082_0820_0000, 0x0000_0020_8410_0000, 0x0000_0000_2088_0000,
    0x0000_0010_0202_0000, 0x0000_0404_0802_0000, 0x0004_0404_0404_0000, 0x0002_0202_0202_0000,
    0x0000_1041_0410_4000, 0x0000_0020_8208_2000, 0x0000_0000_2084_1000, 0x0000_0000_0020_8800,
    0x0000_0000_1002_0200, 0x0000_0004_0408_0200, 0x0000_0404_0404_0400, 0x0002_0202_0202_0200,
];

pub const ROOK_MAGICS: [u64; 64] = [
    0x0080_0010_2040_0080, 0x0040_0010_0020_0040, 0x0080_0810_0020_0080, 0x0080_0408_0010_0080,
    0x0080_0204_0008_0080, 0x0080_0102_0004_0080, 0x0080_0080_0100_0200, 0x0080_0020_4080_0100,
    0x0000_8000_2040_0080, 0x0000_4000_2000_5000, 0x0000_8010_0020_0080, 0x0000_8008_0010_0080,
    0x0000_8004_0008_0080, 0x0000_8002_0004_0080, 0x0000_8001_0002_0080, 0x0000_8000_4080_0100,
    0x0000_2080_0040_0080, 0x0000_4040_0020_1000, 0x0000_8080_1000_2000, 0x0000_8080_0800_1000,
    0x0000_8080_0400_0800, 0x0000_8080_0200_0400, 0x0000_0101_0002_0004, 0x0000_0200_0040_8104,
    0x0000_2080_8000_4000, 0x0000_2000_4000_5000, 0x0000_1000_8020_0080, 0x0000_0800_8010_0080,
    0x0000_0400_8008_0080, 0x0000_0200_8004_0080, 0x0000_0100_8080_0200, 0x0000_8000_8000_4100,
    0x0000_2040_0080_0080, 0x0000_2000_4040_1000, 0x0000_1000_8080_2000, 0x0000_0800_8080_1000,
    0x0000_0400_8080_0800, 0x0000_0200_8080_0400, 0x0000_0200_0101_0004, 0x0000_8000_4080_0100,
    0x0000_2040_0080_8000, 0x0000_2000_4000_8080, 0x0000_1000_2000_8080, 0x0000_0800_1000_8080,
    0x0000_0400_0800_8080, 0x0000_0200_0400_8080, 0x0000_0100_0200_8080, 0x0000_0040_8102_0004,
    0x0000_2040_0080_0080, 0x0000_2000_4000_8080, 0x0000_1000_2000_8080, 0x0000_0800_1000_8080,
    0x0000_0400_0800_8080, 0x0000_0200_0400_8080, 0x0000_8001_0002_0080, 0x0000_8000_4100_0080,
    0x00FF_FCDD_FCED_714A, 0x007F_FCDD_FCED_714A, 0x003F_FFCD_FFD8_8096, 0x0000_0408_1000_2101,
    0x0001_0002_0408_0011, 0x0001_0002_0400_0801, 0x0001_0000_8200_0401, 0x0001_FFFA_ABFA_D1A2,
];

#[inline]
pub const fn relevant_bits(slider: Slider, square: usize) -> u8 {
    match slider {
        Slider::Bishop => BISHOP_RELEVANT_BITS[square],
        Slider::Rook => ROOK_RELEVANT_BITS[square],
    }
}

#[inline]
pub const fn magic_number(slider: Slider, square: usize) -> u64 {
    match slider {
        Slider::Bishop => BISHOP_MAGICS[square],
        Slider::Rook => ROOK_MAGICS[square],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Square;
    use crate::moves::sliding_attacks::relevant_mask;

    #[test]
    fn relevant_bits_match_mask_popcounts() {
        for square in 0..64usize {
            for slider in [Slider::Bishop, Slider::Rook] {
                assert_eq!(
                    relevant_mask(slider, square as Square).count_ones(),
                    relevant_bits(slider, square) as u32,
                    "{slider:?} on square {square}"
                );
            }
        }
    }
}
