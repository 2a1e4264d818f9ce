//! The fixed terrain grid.
//!
//! Terrain never changes during play, so a `Board` is built once by
//! [`Board::standard`] and only read afterwards.

use std::fmt;

use crate::constants::*;
use crate::piece::Faction;

/// A cell address. Coordinates outside the grid are representable so that
/// callers can pass them in; every query treats them as off-board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    #[inline]
    pub fn in_bounds(&self) -> bool {
        self.row < ROWS && self.col < COLS
    }

    /// Orthogonal step count between two cells.
    #[inline]
    pub fn manhattan(&self, other: Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Iterate every on-board cell, row by row.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..ROWS).flat_map(|row| (0..COLS).map(move |col| Coord::new(row, col)))
    }

    #[inline]
    pub(crate) fn index(&self) -> usize {
        self.row * COLS + self.col
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// What a cell is made of.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Terrain {
    Land,
    River,
    /// A faction's home cell; it may never enter its own.
    Den(Faction),
    /// Enemies standing here lose their rank.
    Trap(Faction),
}

impl Terrain {
    #[inline]
    pub fn is_river(&self) -> bool {
        *self == Terrain::River
    }

    /// True if this is a trap owned by someone other than `faction`.
    #[inline]
    pub fn is_enemy_trap_for(&self, faction: Faction) -> bool {
        matches!(self, Terrain::Trap(owner) if *owner != faction)
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Terrain::Land => f.write_str("land"),
            Terrain::River => f.write_str("river"),
            Terrain::Den(owner) => write!(f, "den {}", owner.name().to_ascii_lowercase()),
            Terrain::Trap(owner) => write!(f, "trap {}", owner.name().to_ascii_lowercase()),
        }
    }
}

/// Terrain for all 63 cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Terrain; CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    /// The one and only layout: two dens, six traps, two river blocks.
    pub fn standard() -> Self {
        let mut cells = [Terrain::Land; CELLS];
        let mut set = |(row, col): (usize, usize), t: Terrain| {
            cells[Coord::new(row, col).index()] = t;
        };

        set(RED_DEN, Terrain::Den(Faction::Red));
        set(BLUE_DEN, Terrain::Den(Faction::Blue));
        for t in RED_TRAPS {
            set(t, Terrain::Trap(Faction::Red));
        }
        for t in BLUE_TRAPS {
            set(t, Terrain::Trap(Faction::Blue));
        }
        for row in RIVER_ROWS.0..=RIVER_ROWS.1 {
            for (lo, hi) in RIVER_COLS {
                for col in lo..=hi {
                    set((row, col), Terrain::River);
                }
            }
        }
        Board { cells }
    }

    /// Terrain at `c`, or `None` off the grid.
    pub fn get(&self, c: Coord) -> Option<Terrain> {
        if !c.in_bounds() {
            return None;
        }
        Some(self.cells[c.index()])
    }

    #[inline]
    pub fn is_river(&self, c: Coord) -> bool {
        self.get(c) == Some(Terrain::River)
    }

    /// The cell holding `faction`'s den.
    pub fn den_of(faction: Faction) -> Coord {
        match faction {
            Faction::Red => RED_DEN.into(),
            Faction::Blue => BLUE_DEN.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(board: &Board, t: Terrain) -> usize {
        Coord::all().filter(|&c| board.get(c) == Some(t)).count()
    }

    #[test]
    fn test_standard_layout_counts() {
        let b = Board::standard();
        assert_eq!(count(&b, Terrain::Den(Faction::Red)), 1);
        assert_eq!(count(&b, Terrain::Den(Faction::Blue)), 1);
        assert_eq!(count(&b, Terrain::Trap(Faction::Red)), 3);
        assert_eq!(count(&b, Terrain::Trap(Faction::Blue)), 3);
        assert_eq!(count(&b, Terrain::River), 12);
        assert_eq!(count(&b, Terrain::Land), CELLS - 2 - 6 - 12);
    }

    #[test]
    fn test_dens_and_traps() {
        let b = Board::standard();
        assert_eq!(b.get(Coord::new(0, 3)), Some(Terrain::Den(Faction::Red)));
        assert_eq!(b.get(Coord::new(8, 3)), Some(Terrain::Den(Faction::Blue)));
        assert_eq!(b.get(Coord::new(1, 3)), Some(Terrain::Trap(Faction::Red)));
        assert_eq!(b.get(Coord::new(7, 3)), Some(Terrain::Trap(Faction::Blue)));
        assert_eq!(Board::den_of(Faction::Blue), Coord::new(8, 3));
    }

    #[test]
    fn test_river_band() {
        let b = Board::standard();
        assert!(b.is_river(Coord::new(4, 3)));
        assert!(b.is_river(Coord::new(3, 1)));
        assert!(b.is_river(Coord::new(5, 4)));
        assert!(!b.is_river(Coord::new(4, 0)));
        assert!(!b.is_river(Coord::new(4, 6)));
        assert!(!b.is_river(Coord::new(2, 2)));
        assert!(!b.is_river(Coord::new(6, 2)));
    }

    #[test]
    fn test_off_board() {
        let b = Board::standard();
        assert_eq!(b.get(Coord::new(9, 0)), None);
        assert_eq!(b.get(Coord::new(0, 7)), None);
        assert!(!Coord::new(usize::MAX, 0).in_bounds());
    }

    #[test]
    fn test_enemy_trap() {
        let red_trap = Terrain::Trap(Faction::Red);
        assert!(red_trap.is_enemy_trap_for(Faction::Blue));
        assert!(!red_trap.is_enemy_trap_for(Faction::Red));
        assert!(!Terrain::Land.is_enemy_trap_for(Faction::Blue));
    }
}
