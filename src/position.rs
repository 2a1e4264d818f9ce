//! Game state and move application.
//!
//! A [`GameState`] owns its terrain, the occupancy of every cell and the
//! side to move. It only changes through [`GameState::try_move`] (or the
//! boolean [`GameState::make_move`]): the moving piece replaces whatever
//! stood on the destination, the start cell is cleared and the turn flips.
//! A rejected move leaves the state untouched.
//!
//! Each game is an independent value; callers sharing one across threads
//! must serialize access themselves.

use crate::board::{Board, Coord, Terrain};
use crate::constants::{CELLS, COLS, ROWS};
use crate::piece::{Faction, Piece, Species};
use crate::rules::{self, MoveError, MoveKind};

/// Standard opening placement (row, col, faction, species).
const STARTING_PIECES: [(usize, usize, Faction, Species); 16] = [
    (0, 0, Faction::Red, Species::Lion),
    (0, 6, Faction::Red, Species::Tiger),
    (1, 1, Faction::Red, Species::Dog),
    (1, 5, Faction::Red, Species::Cat),
    (2, 0, Faction::Red, Species::Rat),
    (2, 2, Faction::Red, Species::Leopard),
    (2, 4, Faction::Red, Species::Wolf),
    (2, 6, Faction::Red, Species::Elephant),
    (6, 0, Faction::Blue, Species::Elephant),
    (6, 2, Faction::Blue, Species::Wolf),
    (6, 4, Faction::Blue, Species::Leopard),
    (6, 6, Faction::Blue, Species::Rat),
    (7, 1, Faction::Blue, Species::Cat),
    (7, 5, Faction::Blue, Species::Dog),
    (8, 0, Faction::Blue, Species::Tiger),
    (8, 6, Faction::Blue, Species::Lion),
];

/// A game in progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    /// Occupancy, row-major
    cells: [Option<Piece>; CELLS],
    /// Side to move
    to_move: Faction,
    /// Number of moves applied so far
    n: usize,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// The standard opening with Blue to move.
    pub fn new() -> Self {
        let mut pos = Self::empty(Faction::Blue);
        for (row, col, faction, species) in STARTING_PIECES {
            pos.place(Coord::new(row, col), Piece::new(faction, species));
        }
        pos
    }

    /// A board with terrain but no pieces.
    pub fn empty(to_move: Faction) -> Self {
        GameState {
            board: Board::standard(),
            cells: [None; CELLS],
            to_move,
            n: 0,
        }
    }

    /// Put `piece` on `c`, returning whatever was there. Off-board
    /// coordinates are ignored.
    pub fn place(&mut self, c: Coord, piece: Piece) -> Option<Piece> {
        if !c.in_bounds() {
            return None;
        }
        self.cells[c.index()].replace(piece)
    }

    /// Clear `c`, returning whatever was there.
    pub fn remove(&mut self, c: Coord) -> Option<Piece> {
        if !c.in_bounds() {
            return None;
        }
        self.cells[c.index()].take()
    }

    /// Hand the move to `faction` (for setting up positions).
    pub fn set_turn(&mut self, faction: Faction) {
        self.to_move = faction;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Piece on `c`, `None` if empty or off the board.
    pub fn piece_at(&self, c: Coord) -> Option<Piece> {
        if !c.in_bounds() {
            return None;
        }
        self.cells[c.index()]
    }

    pub fn get_piece(&self, row: usize, col: usize) -> Option<Piece> {
        self.piece_at(Coord::new(row, col))
    }

    /// Terrain at `(row, col)`, `None` off the board.
    pub fn get_board_tile(&self, row: usize, col: usize) -> Option<Terrain> {
        self.board.get(Coord::new(row, col))
    }

    pub fn get_current_turn(&self) -> Faction {
        self.to_move
    }

    /// "Blue" or "Red".
    pub fn current_player_name(&self) -> &'static str {
        self.to_move.name()
    }

    pub fn move_count(&self) -> usize {
        self.n
    }

    /// All pieces of `faction` with their cells.
    pub fn pieces(&self, faction: Faction) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::all()
            .filter_map(move |c| self.piece_at(c).map(|p| (c, p)))
            .filter(move |(_, p)| p.faction == faction)
    }

    pub fn piece_count(&self, faction: Faction) -> usize {
        self.pieces(faction).count()
    }

    /// Reason-coded legality of `from -> to` for the side to move.
    pub fn check_move(&self, from: Coord, to: Coord) -> Result<MoveKind, MoveError> {
        rules::check_move(self, from, to)
    }

    pub fn is_legal_move(&self, from: Coord, to: Coord) -> bool {
        self.check_move(from, to).is_ok()
    }

    /// Apply `from -> to` if it is legal and any defender can be taken.
    /// Returns the captured piece, if there was one.
    pub fn try_move(&mut self, from: Coord, to: Coord) -> Result<Option<Piece>, MoveError> {
        self.check_move(from, to)?;
        let piece = self.piece_at(from).ok_or(MoveError::EmptyStart)?;
        let defender = self.piece_at(to);
        if defender.is_some() && !rules::can_capture(&self.board, piece, from, defender, to) {
            return Err(MoveError::CaptureForbidden);
        }

        self.cells[from.index()] = None;
        let captured = self.cells[to.index()].replace(piece);
        self.to_move = self.to_move.opponent();
        self.n += 1;
        Ok(captured)
    }

    pub fn make_move(&mut self, from: Coord, to: Coord) -> bool {
        self.try_move(from, to).is_ok()
    }

    /// The winner, if the game is decided.
    ///
    /// Den invasion is checked before either side running out of pieces.
    pub fn check_win(&self) -> Option<Faction> {
        let invaded = |owner: Faction| {
            self.piece_at(Board::den_of(owner))
                .is_some_and(|p| p.faction != owner)
        };
        if invaded(Faction::Red) {
            return Some(Faction::Blue);
        }
        if invaded(Faction::Blue) {
            return Some(Faction::Red);
        }
        if self.piece_count(Faction::Red) == 0 {
            return Some(Faction::Blue);
        }
        if self.piece_count(Faction::Blue) == 0 {
            return Some(Faction::Red);
        }
        None
    }
}

/// Parse a cell name such as `"d1"`: column letter `a`-`g`, row number
/// `1`-`9` (so `a1` is row 0, column 0).
pub fn parse_coord(s: &str) -> Option<Coord> {
    let bytes = s.trim().as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let col = bytes[0].to_ascii_lowercase().checked_sub(b'a')? as usize;
    let row = bytes[1].checked_sub(b'1')? as usize;
    let c = Coord::new(row, col);
    c.in_bounds().then_some(c)
}

/// Inverse of [`parse_coord`]. Off-board cells print as `"??"`.
pub fn str_coord(c: Coord) -> String {
    if c.row >= ROWS || c.col >= COLS {
        return "??".into();
    }
    format!("{}{}", (b'a' + c.col as u8) as char, c.row + 1)
}
