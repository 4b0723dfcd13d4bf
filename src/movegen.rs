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

//! Pseudo-legal and legal move generation.

use crate::bitboard::{self, Bitboard};
use crate::castling::CastleRights;
use crate::color::Color;
use crate::magic;
use crate::moves::{Move, MoveFlags, MoveList};
use crate::piece::Piece;
use crate::position::Position;
use crate::square::Square;

/// Generate every pseudo-legal move available to the side to move: legal in the sense of piece
/// movement rules and occupancy, but not yet checked for leaving the mover's own king in check.
#[must_use]
pub fn generate_pseudo_legal(pos: &Position) -> MoveList {
    let mut list = MoveList::new();
    let us = pos.side_to_move();
    let them = !us;
    let own = pos.color_bb(us);
    let enemy = pos.color_bb(them);
    let occupied = pos.occupied();
    let empty = !occupied;

    generate_pawn_moves(pos, us, enemy, empty, &mut list);

    for piece in [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen, Piece::King] {
        for from in pos.piece_bb(us, piece) {
            let attacks = magic::slider_attacks(piece, from, occupied) & !own;
            for to in attacks {
                push_move(&mut list, pos, from, to, piece, None, us);
            }
        }
    }

    generate_castles(pos, us, occupied, &mut list);

    list
}

fn push_move(
    list: &mut MoveList,
    pos: &Position,
    from: Square,
    to: Square,
    piece: Piece,
    promotion: Option<Piece>,
    us: Color,
) {
    let captured = pos.piece_at(to).map(|(_, p)| p);
    let flags = MoveFlags { capture: captured.is_some(), ..Default::default() };
    list.push(Move::new(from, to, piece, promotion, captured, us == Color::Black, flags));
}

fn generate_pawn_moves(
    pos: &Position,
    us: Color,
    enemy: Bitboard,
    empty: Bitboard,
    list: &mut MoveList,
) {
    let pawns = pos.piece_bb(us, Piece::Pawn);
    let promotion_rank = match us {
        Color::White => bitboard::RANK_7,
        Color::Black => bitboard::RANK_0,
    };

    let (single_pushes, double_pushes, push_delta): (Bitboard, Bitboard, i32) = match us {
        Color::White => (
            bitboard::white_pawn_single_pushes(pawns, empty),
            bitboard::white_pawn_double_pushes(pawns, empty),
            8,
        ),
        Color::Black => (
            bitboard::black_pawn_single_pushes(pawns, empty),
            bitboard::black_pawn_double_pushes(pawns, empty),
            -8,
        ),
    };

    for to in single_pushes {
        let from = Square::new((i32::from(to.index()) - push_delta) as u8);
        emit_pawn_move(list, from, to, None, us, promotion_rank, false);
    }

    for to in double_pushes {
        let from = Square::new((i32::from(to.index()) - 2 * push_delta) as u8);
        emit_pawn_move(list, from, to, None, us, promotion_rank, true);
    }

    // The bit shift magnitude for a diagonal pawn capture depends on both the capturing color
    // and which structural file-edge guard was used to build the attack set (see bitboard.rs):
    // white's attacks are `<<9`/`<<7`, black's are `>>7`/`>>9` (the east/west shift amounts do
    // not mirror across colors, so each side needs its own explicit deltas here).
    let capture_deltas: [(Bitboard, i32); 2] = match us {
        Color::White => [
            (bitboard::white_pawn_attacks_east(pawns) & enemy, 9),
            (bitboard::white_pawn_attacks_west(pawns) & enemy, 7),
        ],
        Color::Black => [
            (bitboard::black_pawn_attacks_east(pawns) & enemy, -7),
            (bitboard::black_pawn_attacks_west(pawns) & enemy, -9),
        ],
    };
    for (attacks, delta) in capture_deltas {
        for to in attacks {
            let from = Square::new((i32::from(to.index()) - delta) as u8);
            let captured = pos.piece_at(to).map(|(_, p)| p);
            emit_pawn_move(list, from, to, captured, us, promotion_rank, false);
        }
    }

    if let Some(ep_target) = pos.en_passant() {
        let ep_bb = Bitboard::from_square(ep_target);
        let ep_deltas: [(Bitboard, i32); 2] = match us {
            Color::White => [
                (bitboard::white_pawn_attacks_east(pawns) & ep_bb, 9),
                (bitboard::white_pawn_attacks_west(pawns) & ep_bb, 7),
            ],
            Color::Black => [
                (bitboard::black_pawn_attacks_east(pawns) & ep_bb, -7),
                (bitboard::black_pawn_attacks_west(pawns) & ep_bb, -9),
            ],
        };
        for (attacks, delta) in ep_deltas {
            for to in attacks {
                let from = Square::new((i32::from(to.index()) - delta) as u8);
                list.push(Move::new(
                    from,
                    to,
                    Piece::Pawn,
                    None,
                    Some(Piece::Pawn),
                    us == Color::Black,
                    MoveFlags { capture: true, en_passant: true, ..Default::default() },
                ));
            }
        }
    }
}

fn emit_pawn_move(
    list: &mut MoveList,
    from: Square,
    to: Square,
    captured: Option<Piece>,
    us: Color,
    promotion_rank: Bitboard,
    double_push: bool,
) {
    let flags = MoveFlags { capture: captured.is_some(), double_push, ..Default::default() };
    if promotion_rank.contains(to) {
        for promo in Piece::PROMOTIONS {
            list.push(Move::new(
                from,
                to,
                Piece::Pawn,
                Some(promo),
                captured,
                us == Color::Black,
                flags,
            ));
        }
    } else {
        list.push(Move::new(from, to, Piece::Pawn, None, captured, us == Color::Black, flags));
    }
}

fn generate_castles(pos: &Position, us: Color, occupied: Bitboard, list: &mut MoveList) {
    let rank = match us {
        Color::White => 0,
        Color::Black => 7,
    };
    let them = !us;
    let king_from = Square::from_file_rank(4, rank);
    if pos.piece_at(king_from) != Some((us, Piece::King)) {
        return;
    }

    let kingside = CastleRights::kingside(us);
    if pos.castle_rights().contains(kingside) {
        let f = Square::from_file_rank(5, rank);
        let g = Square::from_file_rank(6, rank);
        if !occupied.contains(f)
            && !occupied.contains(g)
            && !pos.is_attacked_by(king_from, them)
            && !pos.is_attacked_by(f, them)
            && !pos.is_attacked_by(g, them)
        {
            list.push(Move::new(
                king_from,
                g,
                Piece::King,
                None,
                None,
                us == Color::Black,
                MoveFlags { castle: true, ..Default::default() },
            ));
        }
    }

    let queenside = CastleRights::queenside(us);
    if pos.castle_rights().contains(queenside) {
        let d = Square::from_file_rank(3, rank);
        let c = Square::from_file_rank(2, rank);
        let b = Square::from_file_rank(1, rank);
        if !occupied.contains(d)
            && !occupied.contains(c)
            && !occupied.contains(b)
            && !pos.is_attacked_by(king_from, them)
            && !pos.is_attacked_by(d, them)
            && !pos.is_attacked_by(c, them)
        {
            list.push(Move::new(
                king_from,
                c,
                Piece::King,
                None,
                None,
                us == Color::Black,
                MoveFlags { castle: true, ..Default::default() },
            ));
        }
    }
}

/// Generate every legal move: pseudo-legal moves that, once played, do not leave the mover's own
/// king in check.
#[must_use]
pub fn generate_legal(pos: &Position) -> MoveList {
    let mut legal = MoveList::new();
    let us = pos.side_to_move();
    let mut scratch = pos.clone();
    for &mv in generate_pseudo_legal(pos).as_slice() {
        let snapshot = scratch.make_move(mv);
        let left_king_in_check = scratch.is_attacked_by(scratch.king_square(us), !us);
        scratch.unmake_move(mv, snapshot);
        if !left_king_in_check {
            legal.push(mv);
        }
    }
    legal
}

#[must_use]
pub fn has_legal_move(pos: &Position) -> bool {
    let us = pos.side_to_move();
    let mut scratch = pos.clone();
    for &mv in generate_pseudo_legal(pos).as_slice() {
        let snapshot = scratch.make_move(mv);
        let left_king_in_check = scratch.is_attacked_by(scratch.king_square(us), !us);
        scratch.unmake_move(mv, snapshot);
        if !left_king_in_check {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startpos_has_twenty_legal_moves() {
        let pos = Position::startpos();
        assert_eq!(generate_legal(&pos).len(), 20);
    }

    #[test]
    fn startpos_pseudo_legal_equals_legal() {
        let pos = Position::startpos();
        assert_eq!(generate_pseudo_legal(&pos).len(), generate_legal(&pos).len());
    }

    #[test]
    fn pinned_rook_cannot_leave_the_pin_line() {
        // White king e1, white rook e2, black rook e8: the rook is pinned and may only move
        // along the e-file (or stay put); a sideways slide would expose the king.
        let pos = Position::from_fen("4r3/8/8/8/8/8/4R3/4K3 w - - 0 1").unwrap();
        let legal = generate_legal(&pos);
        for mv in legal.as_slice() {
            if mv.from_square().file() == 4 && mv.piece() == Piece::Rook {
                assert_eq!(mv.to_square().file(), 4);
            }
        }
    }

    #[test]
    fn en_passant_capture_is_generated() {
        // White pawn just advanced two squares to e4 is immediately capturable en passant by a
        // black pawn on d4.
        let pos =
            Position::from_fen("rnbqkbnr/ppp1pppp/8/8/3pP3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 2")
                .unwrap();
        let legal = generate_legal(&pos);
        assert!(legal.as_slice().iter().any(|mv| mv.is_en_passant()));
    }

    #[test]
    fn castling_available_when_path_and_transit_squares_are_safe() {
        let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let legal = generate_legal(&pos);
        assert_eq!(legal.as_slice().iter().filter(|mv| mv.is_castle()).count(), 2);
    }

    #[test]
    fn castling_blocked_when_transit_square_is_attacked() {
        // Black rook on f8/f-file attacks f1, the square White's king must cross to castle
        // kingside; queenside remains legal since it does not cross f1.
        let attacked = Position::from_fen("4k2r/5r2/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
        let legal = generate_legal(&attacked);
        assert!(!legal.as_slice().iter().any(|mv| mv.is_castle() && mv.to_square().file() == 6));
    }

    #[test]
    fn king_in_check_has_only_legal_moves_that_resolve_it() {
        let pos = Position::from_fen("4k3/8/8/8/8/8/4r3/4K3 w - - 0 1").unwrap();
        assert!(pos.in_check());
        for mv in generate_legal(&pos).as_slice() {
            let mut scratch = pos.clone();
            let snap = scratch.make_move(*mv);
            assert!(!scratch.is_attacked_by(scratch.king_square(Color::White), Color::Black));
            scratch.unmake_move(*mv, snap);
        }
    }
}
