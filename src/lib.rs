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

//! Position representation, move generation, and search for a chess engine core.
//!
//! This crate covers the board-and-search layer only: bitboards, a position representation with
//! make/unmake, pseudo-legal and legal move generation, Zobrist hashing, a transposition table, a
//! tapered evaluator, and iterative-deepening negamax search. It has no UCI front end, no opening
//! book, and no persistence; see the crate-level `README` (if embedding this) for how those layer
//! on top.

mod bitboard;
mod castling;
mod color;
pub mod engine;
mod error;
pub mod evaluate;
mod magic;
pub mod movegen;
mod moves;
pub mod perft;
mod piece;
pub mod position;
pub mod search;
mod square;
pub mod transposition;
mod zobrist;

pub use bitboard::Bitboard;
pub use castling::CastleRights;
pub use color::Color;
pub use engine::{Engine, EngineConfig};
pub use error::{DomainError, FenError, MoveParseError, ParseSquareError};
pub use moves::{Move, MoveFlags, MoveList};
pub use piece::Piece;
pub use position::{GameStatus, Position};
pub use square::Square;
