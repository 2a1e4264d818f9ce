//! Factions, species and pieces.

use std::fmt;

/// One of the two opposing sides.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Faction {
    Red,
    Blue,
}

impl Faction {
    /// The other side.
    pub fn opponent(self) -> Faction {
        match self {
            Faction::Red => Faction::Blue,
            Faction::Blue => Faction::Red,
        }
    }

    /// Display name of the side ("Red" / "Blue").
    pub fn name(self) -> &'static str {
        match self {
            Faction::Red => "Red",
            Faction::Blue => "Blue",
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The eight animals, weakest first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Species {
    Rat,
    Cat,
    Dog,
    Wolf,
    Leopard,
    Tiger,
    Lion,
    Elephant,
}

impl Species {
    pub const ALL: [Species; 8] = [
        Species::Rat,
        Species::Cat,
        Species::Dog,
        Species::Wolf,
        Species::Leopard,
        Species::Tiger,
        Species::Lion,
        Species::Elephant,
    ];

    /// Raw capture rank, 1 (Rat) to 8 (Elephant).
    pub fn rank(self) -> u8 {
        match self {
            Species::Rat => 1,
            Species::Cat => 2,
            Species::Dog => 3,
            Species::Wolf => 4,
            Species::Leopard => 5,
            Species::Tiger => 6,
            Species::Lion => 7,
            Species::Elephant => 8,
        }
    }

    /// Lions and tigers may leap across the river.
    pub fn can_jump(self) -> bool {
        matches!(self, Species::Lion | Species::Tiger)
    }

    /// Only lions may leap sideways across the river.
    pub fn can_jump_horizontally(self) -> bool {
        self == Species::Lion
    }

    pub fn name(self) -> &'static str {
        match self {
            Species::Rat => "rat",
            Species::Cat => "cat",
            Species::Dog => "dog",
            Species::Wolf => "wolf",
            Species::Leopard => "leopard",
            Species::Tiger => "tiger",
            Species::Lion => "lion",
            Species::Elephant => "elephant",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A faction's animal. Pieces are plain values: they move or get captured,
/// they never change.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub faction: Faction,
    pub species: Species,
}

impl Piece {
    pub const fn new(faction: Faction, species: Species) -> Self {
        Piece { faction, species }
    }

    #[inline]
    pub fn rank(&self) -> u8 {
        self.species.rank()
    }

    #[inline]
    pub fn is(&self, species: Species) -> bool {
        self.species == species
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.faction.name().to_ascii_lowercase(), self.species)
    }
}
