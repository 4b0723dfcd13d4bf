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

//! Zobrist hashing: incremental 64-bit position fingerprints.
//!
//! The key tables are generated once at startup from a fixed PRNG seed rather than checked in as
//! literal constants, so there is nothing to keep in sync by hand if the table layout changes.

use once_cell::sync::Lazy;

use crate::castling::CastleRights;
use crate::color::Color;
use crate::piece::Piece;
use crate::square::Square;

/// A fixed seed so hashes are stable across runs and reproducible in tests.
const ZOBRIST_SEED: u64 = 0xc4a5_9ce1_3b0d_f27b;

struct ZobristTables {
    piece_square: [[u64; 64]; 12],
    castling: [u64; 16],
    en_passant_file: [u64; 8],
    side_to_move: u64,
}

fn piece_color_index(piece: Piece, color: Color) -> usize {
    piece.index() * 2 + color.index()
}

static TABLES: Lazy<ZobristTables> = Lazy::new(|| {
    // Seeding the (thread-local) global generator is how the teacher's own `zobrist.rs` produces
    // its key tables, just without a manual paste-in step afterward: here the tables are kept as
    // a lazily-computed static instead of checked-in literals.
    fastrand::seed(ZOBRIST_SEED);

    let mut piece_square = [[0u64; 64]; 12];
    for row in &mut piece_square {
        for slot in row.iter_mut() {
            *slot = fastrand::u64(..);
        }
    }

    let mut castling = [0u64; 16];
    for slot in castling.iter_mut() {
        *slot = fastrand::u64(..);
    }

    let mut en_passant_file = [0u64; 8];
    for slot in en_passant_file.iter_mut() {
        *slot = fastrand::u64(..);
    }

    let side_to_move = fastrand::u64(..);

    ZobristTables { piece_square, castling, en_passant_file, side_to_move }
});

#[must_use]
/// The key to XOR in or out when `piece` of `color` stands on `sq`.
pub fn piece_square_key(piece: Piece, color: Color, sq: Square) -> u64 {
    TABLES.piece_square[piece_color_index(piece, color)][sq.index() as usize]
}

#[must_use]
/// The key for a given castling-rights bitmask, covering all 16 combinations at once so that
/// changing rights is a single XOR of `castling_key(old) ^ castling_key(new)`.
pub fn castling_key(rights: CastleRights) -> u64 {
    TABLES.castling[rights.raw() as usize]
}

#[must_use]
/// The key for an en-passant target on the given conventional file (`0` = a-file, `7` = h-file),
/// or `0` if there is no en-passant target to hash in.
pub fn en_passant_key(file: Option<u8>) -> u64 {
    match file {
        Some(f) => TABLES.en_passant_file[f as usize],
        None => 0,
    }
}

#[must_use]
/// The key XORed in exactly when it is Black to move.
pub fn side_to_move_key() -> u64 {
    TABLES.side_to_move
}
