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

//! Negamax search with alpha-beta pruning, transposition-table caching, and iterative deepening.
//!
//! Unlike the teacher's multi-threaded principal-variation search, this search never returns a
//! `Result`: cancellation on a wall-clock deadline is cooperative and checked only at ply
//! boundaries, and the search simply stops deepening and returns the best move found so far.

use std::time::{Duration, Instant};

use crate::evaluate::evaluate;
use crate::movegen::generate_legal;
use crate::moves::Move;
use crate::position::Position;
use crate::transposition::{BoundType, TTEntry, TTable};

/// A score magnitude large enough that no real evaluation can reach it, reserved for marking
/// mate distances: `MATE_SCORE - ply` is the score of being checkmated in `ply` more plies.
pub const MATE_SCORE: i32 = 1_000_000;

/// The ply count beyond which a forced mate is considered "found" and further deepening is
/// pointless: a shorter mate can only ever be preferred, never missed, once one this deep is
/// already known. Also the recursion cap applied to quiescence search.
pub const MAX_PLY: u32 = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchInfo {
    pub best_move: Option<Move>,
    pub score: i32,
    pub depth_reached: u32,
    pub nodes: u64,
}

struct SearchState<'a> {
    tt: &'a mut TTable,
    deadline: Instant,
    node_cap: Option<u64>,
    nodes: u64,
    stop: bool,
}

/// Search `pos` for the best move for the side to move, deepening iteratively until `budget` of
/// wall-clock time has elapsed, `max_depth` plies have been searched, or (if set) `node_cap` nodes
/// have been visited.
#[must_use]
pub fn find_best_move(
    pos: &Position,
    tt: &mut TTable,
    max_depth: u32,
    budget: Duration,
    node_cap: Option<u64>,
) -> SearchInfo {
    let deadline = Instant::now() + budget;
    let mut state = SearchState { tt, deadline, node_cap, nodes: 0, stop: false };

    let mut best = SearchInfo { best_move: None, score: 0, depth_reached: 0, nodes: 0 };
    let mut scratch = pos.clone();

    for depth in 1..=max_depth {
        let score = negamax(&mut scratch, &mut state, depth, -MATE_SCORE, MATE_SCORE, 0);
        if state.stop && depth > 1 {
            break;
        }
        let best_move = state.tt.probe(pos.hash()).and_then(|e| e.best_move);
        best = SearchInfo { best_move, score, depth_reached: depth, nodes: state.nodes };
        if state.stop || best.score.abs() >= MATE_SCORE - MAX_PLY as i32 {
            break;
        }
    }

    best
}

fn should_stop(state: &SearchState) -> bool {
    if Instant::now() >= state.deadline {
        return true;
    }
    matches!(state.node_cap, Some(cap) if state.nodes >= cap)
}

fn negamax(
    pos: &mut Position,
    state: &mut SearchState,
    depth: u32,
    mut alpha: i32,
    beta: i32,
    ply: u32,
) -> i32 {
    state.nodes += 1;
    if ply > 0 && should_stop(state) {
        state.stop = true;
    }
    if state.stop {
        return evaluate(pos);
    }

    let hash = pos.hash();
    let mut tt_move = None;
    if let Some(entry) = state.tt.probe(hash) {
        tt_move = entry.best_move;
        if entry.depth as u32 >= depth {
            match entry.bound {
                BoundType::Exact => return entry.score,
                BoundType::AlphaUpper if entry.score <= alpha => return entry.score,
                BoundType::BetaLower if entry.score >= beta => return entry.score,
                _ => {}
            }
        }
    }

    if depth == 0 {
        return quiescence(pos, state, alpha, beta, ply);
    }

    let legal = generate_legal(pos);
    if legal.is_empty() {
        return if pos.in_check() { -(MATE_SCORE - ply as i32) } else { 0 };
    }

    let mut ordered: Vec<Move> = legal.as_slice().to_vec();
    order_moves(&mut ordered, tt_move);

    let original_alpha = alpha;
    let mut best_score = -MATE_SCORE;
    let mut best_move = ordered[0];

    for mv in ordered {
        let snapshot = pos.make_move(mv);
        let score = -negamax(pos, state, depth - 1, -beta, -alpha, ply + 1);
        pos.unmake_move(mv, snapshot);

        if score > best_score {
            best_score = score;
            best_move = mv;
        }
        if best_score > alpha {
            alpha = best_score;
        }
        if alpha >= beta {
            break;
        }
        if state.stop {
            break;
        }
    }

    let bound = if best_score <= original_alpha {
        BoundType::AlphaUpper
    } else if best_score >= beta {
        BoundType::BetaLower
    } else {
        BoundType::Exact
    };
    state.tt.store(TTEntry {
        hash,
        depth: depth.min(u32::from(u8::MAX)) as u8,
        score: best_score,
        bound,
        best_move: Some(best_move),
    });

    best_score
}

/// Extend capturing lines past the nominal search depth to avoid misjudging a position where the
/// side to move has a hanging piece right at the horizon.
fn quiescence(pos: &mut Position, state: &mut SearchState, mut alpha: i32, beta: i32, ply: u32) -> i32 {
    state.nodes += 1;
    let stand_pat = evaluate(pos);
    if stand_pat >= beta {
        return beta;
    }
    if stand_pat > alpha {
        alpha = stand_pat;
    }
    if ply > MAX_PLY || should_stop(state) {
        return alpha;
    }

    let legal = generate_legal(pos);
    for mv in legal.as_slice() {
        if !mv.is_capture() {
            continue;
        }
        let snapshot = pos.make_move(*mv);
        let score = -quiescence(pos, state, -beta, -alpha, ply + 1);
        pos.unmake_move(*mv, snapshot);

        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }
    alpha
}

/// Order `tt_move` first (if present), then captures before quiet moves.
fn order_moves(moves: &mut [Move], tt_move: Option<Move>) {
    moves.sort_by_key(|mv| {
        let is_tt = tt_move == Some(*mv);
        let is_capture = mv.is_capture();
        (!is_tt, !is_capture)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movegen::has_legal_move;
    use crate::position::Position;

    #[test]
    fn finds_mate_in_one() {
        // Black king on g8 boxed in by its own pawns; Re1-e8 is back-rank mate.
        let pos = Position::from_fen("6k1/5ppp/8/8/8/8/8/4R1K1 w - - 0 1").unwrap();
        let mut tt = TTable::with_capacity(1 << 14);
        let info = find_best_move(&pos, &mut tt, 4, Duration::from_secs(2), None);
        assert!(info.score > MATE_SCORE - 10);
    }

    #[test]
    fn search_never_panics_with_no_legal_moves_pending_stalemate() {
        let pos = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(!has_legal_move(&pos));
    }

    #[test]
    fn shallow_search_prefers_a_free_queen_capture() {
        // Rook and queen share the e-file with nothing in between: Rxe6 wins the queen outright.
        let pos = Position::from_fen("4k3/8/4q3/8/4R3/8/8/4K3 w - - 0 1").unwrap();
        let mut tt = TTable::with_capacity(1 << 14);
        let info = find_best_move(&pos, &mut tt, 3, Duration::from_secs(1), None);
        let mv = info.best_move.unwrap();
        assert!(mv.is_capture());
    }

    #[test]
    fn node_cap_still_returns_a_legal_first_ply_move() {
        // A tiny node cap should still complete the mandatory first ply and return a playable
        // move rather than stopping before any depth completes.
        let pos = Position::startpos();
        let mut tt = TTable::with_capacity(1 << 10);
        let info = find_best_move(&pos, &mut tt, 10, Duration::from_secs(5), Some(1));
        assert!(info.best_move.is_some());
        assert!(info.depth_reached >= 1);
    }
}
