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

//! Error types shared across the crate's public API.
//!
//! In keeping with the teacher's style, recoverable errors are small, explicit enums rather than
//! a boxed `dyn Error` or an external error-handling crate: every fallible entry point in this
//! crate fails in a small, enumerable number of ways, so there is nothing a crate like `thiserror`
//! would buy beyond what `#[derive(Debug)]` and a hand-written `Display` already give us.

use std::fmt::{self, Display, Formatter};

pub use crate::position::FenError;
pub use crate::square::ParseSquareError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// An error produced when a move given in long algebraic notation cannot be resolved against a
/// position, either because it is not syntactically a move or because it is not legal there.
pub enum MoveParseError {
    BadSyntax,
    NotLegalHere,
}

impl Display for MoveParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::BadSyntax => write!(f, "not a valid long-algebraic move"),
            MoveParseError::NotLegalHere => write!(f, "move is not legal in this position"),
        }
    }
}

impl std::error::Error for MoveParseError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The recoverable-error taxonomy for the core's boundary operations (see §7 of the design
/// notes): an unparseable FEN, an illegal move offered at the root interface, or a request to
/// search a position that has no legal moves left to play. Invariant violations (a corrupted
/// bitboard partition, a move-list overflow) are deliberately not represented here: per the same
/// taxonomy, those are fatal bugs caught by `debug_assert!` in hot paths, not values a caller
/// recovers from.
pub enum DomainError {
    Fen(FenError),
    IllegalMove(MoveParseError),
    /// `find_move` (or `Engine::find_and_play_best_move`) was called on a position with no legal
    /// moves: the game has already ended (checkmate, stalemate, or a recognized draw).
    TerminalPosition,
}

impl From<FenError> for DomainError {
    fn from(e: FenError) -> DomainError {
        DomainError::Fen(e)
    }
}

impl From<MoveParseError> for DomainError {
    fn from(e: MoveParseError) -> DomainError {
        DomainError::IllegalMove(e)
    }
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::Fen(e) => write!(f, "{e}"),
            DomainError::IllegalMove(e) => write!(f, "{e}"),
            DomainError::TerminalPosition => {
                write!(f, "no legal move exists in this position")
            }
        }
    }
}

impl std::error::Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_from_fen_error() {
        let err: DomainError = FenError::WrongFieldCount.into();
        assert!(matches!(err, DomainError::Fen(FenError::WrongFieldCount)));
    }

    #[test]
    fn converts_from_move_parse_error() {
        let err: DomainError = MoveParseError::BadSyntax.into();
        assert!(matches!(err, DomainError::IllegalMove(MoveParseError::BadSyntax)));
    }
}
