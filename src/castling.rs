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

//! Castling rights, packed into four bits.

use std::ops::{BitAnd, BitOr, BitOrAssign};

use crate::color::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
/// The four castling privileges still available in a position, one bit each.
pub struct CastleRights(u8);

impl CastleRights {
    pub const WHITE_KINGSIDE: CastleRights = CastleRights(1 << 0);
    pub const WHITE_QUEENSIDE: CastleRights = CastleRights(1 << 1);
    pub const BLACK_KINGSIDE: CastleRights = CastleRights(1 << 2);
    pub const BLACK_QUEENSIDE: CastleRights = CastleRights(1 << 3);

    pub const NONE: CastleRights = CastleRights(0);
    pub const ALL: CastleRights = CastleRights(0b1111);

    #[must_use]
    pub const fn kingside(color: Color) -> CastleRights {
        match color {
            Color::White => CastleRights::WHITE_KINGSIDE,
            Color::Black => CastleRights::BLACK_KINGSIDE,
        }
    }

    #[must_use]
    pub const fn queenside(color: Color) -> CastleRights {
        match color {
            Color::White => CastleRights::WHITE_QUEENSIDE,
            Color::Black => CastleRights::BLACK_QUEENSIDE,
        }
    }

    #[must_use]
    pub const fn contains(self, other: CastleRights) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn without(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 & !other.0)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn from_raw(bits: u8) -> CastleRights {
        debug_assert!(bits < 16);
        CastleRights(bits)
    }
}

impl BitOr for CastleRights {
    type Output = CastleRights;
    fn bitor(self, rhs: CastleRights) -> CastleRights {
        CastleRights(self.0 | rhs.0)
    }
}

impl BitOrAssign for CastleRights {
    fn bitor_assign(&mut self, rhs: CastleRights) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for CastleRights {
    type Output = CastleRights;
    fn bitand(self, rhs: CastleRights) -> CastleRights {
        CastleRights(self.0 & rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_clears_only_named_bit() {
        let all = CastleRights::ALL;
        let dropped = all.without(CastleRights::WHITE_KINGSIDE);
        assert!(!dropped.contains(CastleRights::WHITE_KINGSIDE));
        assert!(dropped.contains(CastleRights::WHITE_QUEENSIDE));
        assert!(dropped.contains(CastleRights::BLACK_KINGSIDE));
        assert!(dropped.contains(CastleRights::BLACK_QUEENSIDE));
    }

    #[test]
    fn kingside_queenside_are_distinct_per_color() {
        assert_ne!(
            CastleRights::kingside(Color::White),
            CastleRights::queenside(Color::White)
        );
        assert_ne!(
            CastleRights::kingside(Color::White),
            CastleRights::kingside(Color::Black)
        );
    }
}
