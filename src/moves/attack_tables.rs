//! Process-wide attack lookup tables.
//!
//! Built once (lazily, or eagerly through `initialize_attack_tables`) and
//! read-only afterwards. Leaper attacks are a direct index; bishop and rook
//! attacks go through the magic index
//! `((occupancy & mask) * magic) >> shift`.

use std::sync::OnceLock;

use tracing::trace;

use crate::game_state::chess_types::{Bitboard, Color, Square};
use crate::moves::leaper_attacks::{build_offset_table, build_pawn_tables, KING_OFFSETS, KNIGHT_OFFSETS};
use crate::moves::magic_numbers::{magic_number, relevant_bits};
use crate::moves::sliding_attacks::{ray_attacks, relevant_mask, set_occupancy, Slider};

/// Magic-indexed attacks for one slider. Each square owns a fixed-stride row
/// of `1 << slider.max_relevant_bits()` entries.
pub struct SlidingTable {
    pub masks: [Bitboard; 64],
    pub magics: [u64; 64],
    pub shifts: [u32; 64],
    stride: usize,
    attacks: Vec<Bitboard>,
}

impl SlidingTable {
    fn build(slider: Slider) -> Self {
        let stride = 1usize << slider.max_relevant_bits();
        let mut table = Self {
            masks: [0; 64],
            magics: [0; 64],
            shifts: [0; 64],
            stride,
            attacks: vec![0; 64 * stride],
        };

        for square in 0..64usize {
            let mask = relevant_mask(slider, square as Square);
            let bits = u32::from(relevant_bits(slider, square));
            table.masks[square] = mask;
            table.magics[square] = magic_number(slider, square);
            table.shifts[square] = 64 - bits;

            for index in 0..(1usize << bits) {
                let occupancy = set_occupancy(index, mask);
                let slot = table.slot(square, occupancy);
                table.attacks[slot] = ray_attacks(slider, square as Square, occupancy);
            }
        }
        table
    }

    #[inline(always)]
    fn slot(&self, square: usize, occupancy: Bitboard) -> usize {
        let key = (occupancy & self.masks[square]).wrapping_mul(self.magics[square]) >> self.shifts[square];
        square * self.stride + key as usize
    }

    #[inline(always)]
    pub fn lookup(&self, square: Square, occupancy: Bitboard) -> Bitboard {
        self.attacks[self.slot(square as usize, occupancy)]
    }
}

pub struct AttackTables {
    pub pawn: [[Bitboard; 64]; 2],
    pub knight: [Bitboard; 64],
    pub king: [Bitboard; 64],
    pub bishop: SlidingTable,
    pub rook: SlidingTable,
}

impl AttackTables {
    fn build() -> Self {
        let tables = Self {
            pawn: build_pawn_tables(),
            knight: build_offset_table(&KNIGHT_OFFSETS),
            king: build_offset_table(&KING_OFFSETS),
            bishop: SlidingTable::build(Slider::Bishop),
            rook: SlidingTable::build(Slider::Rook),
        };
        trace!(
            bishop_entries = tables.bishop.attacks.len(),
            rook_entries = tables.rook.attacks.len(),
            "attack tables initialised"
        );
        tables
    }
}

static ATTACK_TABLES: OnceLock<AttackTables> = OnceLock::new();

/// Build the tables if they are not built yet. Every lookup below does this
/// on demand; calling it up front keeps the cost out of the first search.
#[inline]
pub fn initialize_attack_tables() -> &'static AttackTables {
    ATTACK_TABLES.get_or_init(AttackTables::build)
}

#[inline(always)]
pub fn pawn_attacks(color: Color, square: Square) -> Bitboard {
    initialize_attack_tables().pawn[color.index()][square as usize]
}

#[inline(always)]
pub fn knight_attacks(square: Square) -> Bitboard {
    initialize_attack_tables().knight[square as usize]
}

#[inline(always)]
pub fn king_attacks(square: Square) -> Bitboard {
    initialize_attack_tables().king[square as usize]
}

#[inline(always)]
pub fn bishop_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    initialize_attack_tables().bishop.lookup(square, occupancy)
}

#[inline(always)]
pub fn rook_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    initialize_attack_tables().rook.lookup(square, occupancy)
}

/// Magic lookup for either slider.
#[inline(always)]
pub fn slider_attacks(slider: Slider, square: Square, occupancy: Bitboard) -> Bitboard {
    match slider {
        Slider::Bishop => bishop_attacks(square, occupancy),
        Slider::Rook => rook_attacks(square, occupancy),
    }
}

#[inline(always)]
pub fn queen_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}
