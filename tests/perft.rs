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

//! Perft node counts against known-correct reference positions.

use marrow::Position;
use marrow::perft::perft;

#[test]
fn startpos_perft_depths_one_through_five() {
    let pos = Position::startpos();
    let expected = [20, 400, 8_902, 197_281, 4_865_609];
    for (depth, &count) in expected.iter().enumerate() {
        assert_eq!(perft(&pos, depth as u32 + 1), count, "perft({}) mismatch", depth + 1);
    }
}

#[test]
fn kiwipete_perft_depths_one_through_three() {
    // The "Kiwipete" position: a standard perft stress test exercising castling, en passant,
    // and promotions all at once.
    let pos = Position::from_fen(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    )
    .unwrap();
    let expected = [48, 2_039, 97_862];
    for (depth, &count) in expected.iter().enumerate() {
        assert_eq!(perft(&pos, depth as u32 + 1), count, "perft({}) mismatch", depth + 1);
    }
}
