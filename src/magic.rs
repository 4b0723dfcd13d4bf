/*
  Marrow, a chess engine core.
  Copyright (C) 2026 The Marrow Authors

  Marrow is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Marrow is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! Attack generation for sliding pieces, plus precomputed per-square tables for leapers.
//!
//! Sliding attacks are computed by marching a ray one square at a time from the origin until the
//! board edge or the first occupied square (inclusive), rather than via a perfect-hash magic
//! bitboard table. This trades some speed for attack tables that are trivially correct by
//! construction and need no search for collision-free magic numbers at startup.

use once_cell::sync::Lazy;

use crate::bitboard::{self, Bitboard};
use crate::piece::Piece;
use crate::square::Square;

/// The four ray directions a rook slides along, expressed as `(d_file, d_rank)` deltas in
/// structural (labeling-independent) coordinates.
const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// The four diagonal ray directions a bishop slides along.
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

fn ray_attacks(sq: Square, occupied: Bitboard, directions: &[(i8, i8)]) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    let origin_file = i16::from(sq.index() & 7);
    let origin_rank = i16::from(sq.index() >> 3);

    for &(d_file, d_rank) in directions {
        let mut file = origin_file;
        let mut rank = origin_rank;
        loop {
            file += i16::from(d_file);
            rank += i16::from(d_rank);
            if !(0..8).contains(&file) || !(0..8).contains(&rank) {
                break;
            }
            let index = (rank * 8 + file) as u8;
            let dest = Square::new(index);
            attacks.insert(dest);
            if occupied.contains(dest) {
                break;
            }
        }
    }
    attacks
}

#[must_use]
pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    ray_attacks(sq, occupied, &ROOK_DIRECTIONS)
}

#[must_use]
pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    ray_attacks(sq, occupied, &BISHOP_DIRECTIONS)
}

#[must_use]
pub fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    rook_attacks(sq, occupied) | bishop_attacks(sq, occupied)
}

#[must_use]
/// Attacks for any piece kind from `sq` given `occupied`. Pawn attacks depend on color and are
/// not covered here; use [`crate::bitboard::white_pawn_attacks`] / `black_pawn_attacks` instead.
pub fn slider_attacks(piece: Piece, sq: Square, occupied: Bitboard) -> Bitboard {
    match piece {
        Piece::Bishop => bishop_attacks(sq, occupied),
        Piece::Rook => rook_attacks(sq, occupied),
        Piece::Queen => queen_attacks(sq, occupied),
        Piece::Knight => KNIGHT_ATTACKS[sq.index() as usize],
        Piece::King => KING_ATTACKS[sq.index() as usize],
        Piece::Pawn => Bitboard::EMPTY,
    }
}

fn build_leaper_table(single: fn(Bitboard) -> Bitboard) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    for (i, slot) in table.iter_mut().enumerate() {
        *slot = single(Bitboard::from_square(Square::new(i as u8)));
    }
    table
}

/// Knight attacks from every square, ignoring occupancy. Computed once at startup.
pub static KNIGHT_ATTACKS: Lazy<[Bitboard; 64]> =
    Lazy::new(|| build_leaper_table(bitboard::knight_attacks));

/// King (single-step) attacks from every square, ignoring occupancy. Computed once at startup.
pub static KING_ATTACKS: Lazy<[Bitboard; 64]> =
    Lazy::new(|| build_leaper_table(bitboard::king_attacks));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_on_empty_board_from_corner_sees_fourteen_squares() {
        let attacks = rook_attacks(Square::H1, Bitboard::EMPTY);
        assert_eq!(attacks.len(), 14);
    }

    #[test]
    fn bishop_on_empty_board_from_corner_sees_seven_squares() {
        let attacks = bishop_attacks(Square::H1, Bitboard::EMPTY);
        assert_eq!(attacks.len(), 7);
    }

    #[test]
    fn rook_attack_stops_at_first_blocker_inclusive() {
        let e4 = Square::from_algebraic("e4").unwrap();
        let e6 = Square::from_algebraic("e6").unwrap();
        let e8 = Square::from_algebraic("e8").unwrap();
        let occupied = Bitboard::from_square(e6);
        let attacks = rook_attacks(e4, occupied);
        assert!(attacks.contains(e6));
        assert!(!attacks.contains(e8));
    }

    #[test]
    fn leaper_tables_agree_with_direct_computation() {
        for sq in Square::algebraic_order() {
            let bb = Bitboard::from_square(sq);
            assert_eq!(KNIGHT_ATTACKS[sq.index() as usize], bitboard::knight_attacks(bb));
            assert_eq!(KING_ATTACKS[sq.index() as usize], bitboard::king_attacks(bb));
        }
    }
}
