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

//! Static evaluation: material plus tapered midgame/endgame piece-square tables.

use crate::color::Color;
use crate::piece::Piece;
use crate::position::Position;
use crate::square::Square;

/// Centipawn material values, indexed by [`Piece::index`].
const MATERIAL: [i32; Piece::NUM] = [100, 320, 330, 500, 900, 0];

/// Phase weight contributed by one piece of each kind; pawns and kings don't count toward phase.
const PHASE_WEIGHT: [i32; Piece::NUM] = [0, 1, 1, 2, 4, 0];
/// Total phase weight at the start of a game (4 knights + 4 bishops + 4 rooks + 2 queens).
const TOTAL_PHASE: i32 = 4 * 1 + 4 * 1 + 4 * 2 + 2 * 4;

/// Piece-square tables, one row per piece, indexed by conventional square index (`a1` = 0, `h8` =
/// 63, ascending by rank then file) as seen from White's perspective; Black's score is read from
/// the vertically mirrored square. Values are illustrative textbook tables, not tuned.
#[rustfmt::skip]
const PAWN_MG: [i32; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,
     50,  50,  50,  50,  50,  50,  50,  50,
     10,  10,  20,  30,  30,  20,  10,  10,
      5,   5,  10,  25,  25,  10,   5,   5,
      0,   0,   0,  20,  20,   0,   0,   0,
      5,  -5, -10,   0,   0, -10,  -5,   5,
      5,  10,  10, -20, -20,  10,  10,   5,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const PAWN_EG: [i32; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,
     80,  80,  80,  80,  80,  80,  80,  80,
     50,  50,  50,  50,  50,  50,  50,  50,
     30,  30,  30,  30,  30,  30,  30,  30,
     20,  20,  20,  20,  20,  20,  20,  20,
     10,  10,  10,  10,  10,  10,  10,  10,
     10,  10,  10,  10,  10,  10,  10,  10,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT_MG: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -30,   0,  10,  15,  15,  10,   0, -30,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -30,   5,  10,  15,  15,  10,   5, -30,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const BISHOP_MG: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   5,   5,  10,  10,   5,   5, -10,
    -10,   0,  10,  10,  10,  10,   0, -10,
    -10,  10,  10,  10,  10,  10,  10, -10,
    -10,   5,   0,   0,   0,   0,   5, -10,
    -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const ROOK_MG: [i32; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,
      5,  10,  10,  10,  10,  10,  10,   5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
      0,   0,   0,   5,   5,   0,   0,   0,
];

#[rustfmt::skip]
const QUEEN_MG: [i32; 64] = [
    -20, -10, -10,  -5,  -5, -10, -10, -20,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -10,   0,   5,   5,   5,   5,   0, -10,
     -5,   0,   5,   5,   5,   5,   0,  -5,
      0,   0,   5,   5,   5,   5,   0,  -5,
    -10,   5,   5,   5,   5,   5,   0, -10,
    -10,   0,   5,   0,   0,   0,   0, -10,
    -20, -10, -10,  -5,  -5, -10, -10, -20,
];

#[rustfmt::skip]
const KING_MG: [i32; 64] = [
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -20, -30, -30, -40, -40, -30, -30, -20,
    -10, -20, -20, -20, -20, -20, -20, -10,
     20,  20,   0,   0,   0,   0,  20,  20,
     20,  30,  10,   0,   0,  10,  30,  20,
];

#[rustfmt::skip]
const KING_EG: [i32; 64] = [
    -50, -40, -30, -20, -20, -30, -40, -50,
    -30, -20, -10,   0,   0, -10, -20, -30,
    -30, -10,  20,  30,  30,  20, -10, -30,
    -30, -10,  30,  40,  40,  30, -10, -30,
    -30, -10,  30,  40,  40,  30, -10, -30,
    -30, -10,  20,  30,  30,  20, -10, -30,
    -30, -30,   0,   0,   0,   0, -30, -30,
    -50, -30, -30, -30, -30, -30, -30, -50,
];

fn pst(piece: Piece, sq_index_white_view: usize, midgame: bool) -> i32 {
    match piece {
        Piece::Pawn => if midgame { PAWN_MG[sq_index_white_view] } else { PAWN_EG[sq_index_white_view] },
        Piece::Knight => KNIGHT_MG[sq_index_white_view],
        Piece::Bishop => BISHOP_MG[sq_index_white_view],
        Piece::Rook => ROOK_MG[sq_index_white_view],
        Piece::Queen => QUEEN_MG[sq_index_white_view],
        Piece::King => if midgame { KING_MG[sq_index_white_view] } else { KING_EG[sq_index_white_view] },
    }
}

/// Index into the PST arrays above, which are written the way such tables are conventionally
/// printed: row 0 is rank 8 (the far side from White), row 7 is rank 1 (White's home rank). A
/// White piece on rank `r` therefore reads row `7 - r`; a Black piece is mirrored, reading row
/// `r` directly, so its own home rank (rank 8) lines up with the same row White's home rank uses.
fn pst_index(sq: Square, color: Color) -> usize {
    let file = sq.file();
    let row = match color {
        Color::White => 7 - sq.rank(),
        Color::Black => sq.rank(),
    };
    (row * 8 + file) as usize
}

/// Evaluate `pos` from the side-to-move's perspective: positive means the side to move stands
/// better. Symmetric under color swap: `evaluate(pos) == -evaluate(pos.mirrored())` for any
/// color-flipped copy of the same position (verified in tests alongside the movegen scenarios).
#[must_use]
pub fn evaluate(pos: &Position) -> i32 {
    let white = material_and_pst(pos, Color::White);
    let black = material_and_pst(pos, Color::Black);
    let score = white - black;
    match pos.side_to_move() {
        Color::White => score,
        Color::Black => -score,
    }
}

fn material_and_pst(pos: &Position, color: Color) -> i32 {
    let phase = game_phase(pos);
    let mut mg = 0;
    let mut eg = 0;
    for piece in Piece::ALL {
        for sq in pos.piece_bb(color, piece) {
            let idx = pst_index(sq, color);
            mg += MATERIAL[piece.index()] + pst(piece, idx, true);
            eg += MATERIAL[piece.index()] + pst(piece, idx, false);
        }
    }
    (mg * phase + eg * (TOTAL_PHASE - phase)) / TOTAL_PHASE.max(1)
}

/// A 0 (all endgame) to `TOTAL_PHASE` (full midgame) phase metric, derived from remaining
/// non-pawn, non-king material on both sides.
#[must_use]
pub fn game_phase(pos: &Position) -> i32 {
    let mut phase = 0;
    for color in Color::ALL {
        for piece in Piece::ALL {
            phase += PHASE_WEIGHT[piece.index()] * pos.piece_bb(color, piece).len() as i32;
        }
    }
    phase.min(TOTAL_PHASE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn startpos_is_exactly_balanced() {
        let pos = Position::startpos();
        assert_eq!(evaluate(&pos), 0);
    }

    #[test]
    fn startpos_is_full_midgame_phase() {
        let pos = Position::startpos();
        assert_eq!(game_phase(&pos), TOTAL_PHASE);
    }

    #[test]
    fn king_and_pawn_endgame_has_zero_phase() {
        let pos = Position::from_fen("4k3/4p3/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
        assert_eq!(game_phase(&pos), 0);
    }

    #[test]
    fn extra_queen_is_a_large_material_advantage() {
        let pos = Position::from_fen("4k3/8/8/8/8/8/8/Q3K3 w - - 0 1").unwrap();
        assert!(evaluate(&pos) > 800);
    }

    #[test]
    fn evaluation_is_symmetric_under_color_swap() {
        let white_up_a_rook = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        let black_up_a_rook = Position::from_fen("r3k3/8/8/8/8/8/8/4K3 b - - 0 1").unwrap();
        assert_eq!(evaluate(&white_up_a_rook), evaluate(&black_up_a_rook));
    }
}
