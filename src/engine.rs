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

//! [`Engine`]: the bundled position, transposition table, and search knobs an embedder talks to.

use std::time::Duration;

use crate::error::{DomainError, FenError, MoveParseError};
use crate::evaluate::evaluate;
use crate::movegen::{generate_legal, has_legal_move};
use crate::moves::{Move, MoveList};
use crate::position::{GameStatus, Position};
use crate::search::{self, SearchInfo};
use crate::square::Square;
use crate::transposition::TTable;

/// Default transposition-table size, in entries.
const DEFAULT_TT_ENTRIES: usize = 1 << 20;

#[derive(Clone, Copy, Debug)]
/// Knobs controlling the resources a search is allowed to spend. Mirrors the small, plain-struct
/// configuration pattern the corpus uses for its own search settings rather than an external
/// config-file or env-var layer, since this core has no such layer.
pub struct EngineConfig {
    /// Number of transposition-table slots to allocate (rounded up to a power of two).
    pub tt_capacity: usize,
    /// An optional hard ceiling on nodes visited per `find_best_move` call, independent of the
    /// wall-clock budget; `None` means node count never stops the search on its own.
    pub node_cap: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> EngineConfig {
        EngineConfig { tt_capacity: DEFAULT_TT_ENTRIES, node_cap: None }
    }
}

/// The top-level handle most embedders use: a position plus the transposition table its search
/// reuses across calls (clearing it is the caller's choice, via [`Engine::new_game`]).
pub struct Engine {
    position: Position,
    tt: TTable,
    config: EngineConfig,
}

impl Engine {
    #[must_use]
    pub fn new() -> Engine {
        Engine::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Engine {
        Engine {
            position: Position::startpos(),
            tt: TTable::with_capacity(config.tt_capacity),
            config,
        }
    }

    /// Reset to the standard starting position and clear the transposition table, as when
    /// beginning a new game rather than continuing to search the same one.
    pub fn new_game(&mut self) {
        self.position = Position::startpos();
        self.tt.clear();
    }

    /// Replace the current position with the one described by `fen`, without touching the
    /// transposition table (entries from an unrelated game tree are simply never probed again).
    ///
    /// # Errors
    ///
    /// Returns a [`FenError`] if `fen` is malformed.
    pub fn set_from_fen(&mut self, fen: &str) -> Result<(), FenError> {
        self.position = Position::from_fen(fen)?;
        Ok(())
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn generate_legal(&self) -> MoveList {
        generate_legal(&self.position)
    }

    #[must_use]
    pub fn in_check(&self) -> bool {
        self.position.in_check()
    }

    #[must_use]
    pub fn hash(&self) -> u64 {
        self.position.hash()
    }

    /// Static evaluation of the current position, from the side-to-move's perspective.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        evaluate(&self.position)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        let has_move = !self.generate_legal().is_empty();
        self.position.status(has_move)
    }

    /// Apply `mv` to the current position. The caller is responsible for having obtained `mv`
    /// from [`Engine::generate_legal`] against this same position.
    pub fn make_move(&mut self, mv: Move) {
        self.position.make_move(mv);
    }

    /// Search the current position and play the move it finds, returning the search statistics.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TerminalPosition`] without searching if the current position has no
    /// legal move (checkmate, stalemate, or a recognized draw): `find_move` on a terminal position
    /// is a domain error, not a search outcome.
    pub fn find_and_play_best_move(
        &mut self,
        max_depth: u32,
        budget: Duration,
    ) -> Result<SearchInfo, DomainError> {
        let info = self.find_best_move(max_depth, budget)?;
        if let Some(mv) = info.best_move {
            self.position.make_move(mv);
        }
        Ok(info)
    }

    /// # Errors
    ///
    /// Returns [`DomainError::TerminalPosition`] if the current position has no legal move.
    pub fn find_best_move(
        &mut self,
        max_depth: u32,
        budget: Duration,
    ) -> Result<SearchInfo, DomainError> {
        if !has_legal_move(&self.position) {
            return Err(DomainError::TerminalPosition);
        }
        Ok(search::find_best_move(
            &self.position,
            &mut self.tt,
            max_depth,
            budget,
            self.config.node_cap,
        ))
    }

    #[must_use]
    pub fn perft(&self, depth: u32) -> u64 {
        crate::perft::perft(&self.position, depth)
    }

    /// Resolve `uci` (e.g. `"e2e4"` or `"e7e8q"`) against the legal moves available in the
    /// current position.
    ///
    /// # Errors
    ///
    /// Returns [`MoveParseError::BadSyntax`] if `uci` is not shaped like a long-algebraic move, or
    /// [`MoveParseError::NotLegalHere`] if it is well-formed but not legal right now.
    pub fn parse_move(&self, uci: &str) -> Result<Move, MoveParseError> {
        if uci.len() < 4 || uci.len() > 5 {
            return Err(MoveParseError::BadSyntax);
        }
        let from = Square::from_algebraic(&uci[0..2]).map_err(|_| MoveParseError::BadSyntax)?;
        let to = Square::from_algebraic(&uci[2..4]).map_err(|_| MoveParseError::BadSyntax)?;
        let promo_char = uci.chars().nth(4);

        let legal = self.generate_legal();
        legal
            .as_slice()
            .iter()
            .copied()
            .find(|mv| {
                mv.from_square() == from
                    && mv.to_square() == to
                    && promo_char.map_or(mv.promotion().is_none(), |c| {
                        mv.promotion().is_some_and(|p| p.code().to_ascii_lowercase() == c)
                    })
            })
            .ok_or(MoveParseError::NotLegalHere)
    }
}

impl Default for Engine {
    fn default() -> Engine {
        Engine::new()
    }
}
