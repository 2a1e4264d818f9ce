//! Move legality and capture resolution.
//!
//! Everything here is a pure function of the terrain and the current
//! occupancy. Legality is checked in a fixed order and the first failing
//! check decides the [`MoveError`]:
//!
//! 1. the start cell holds a piece
//! 2. the piece belongs to the side to move
//! 3. the destination is on the board
//! 4. the destination is not held by a friendly piece
//! 5. the destination is not the mover's own den
//! 6. the movement pattern (one orthogonal step, or a river jump for
//!    lions and tigers)
//!
//! Whether an occupied destination may actually be taken is a separate
//! question answered by [`can_capture`].

use thiserror::Error;

use crate::board::{Board, Coord, Terrain};
use crate::constants::{JUMP_EDGE_COLS, JUMP_FAR_ROW, JUMP_NEAR_ROW, JUMP_SCAN_COLS, RIVER_ROWS};
use crate::piece::{Piece, Species};
use crate::position::GameState;

/// Why a proposed move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no piece on the start cell")]
    EmptyStart,
    #[error("piece belongs to the side not on move")]
    WrongTurn,
    #[error("cell is off the board")]
    OutOfBounds,
    #[error("destination holds a friendly piece")]
    FriendlyOccupied,
    #[error("a side may not enter its own den")]
    OwnDen,
    #[error("not a single orthogonal step")]
    NotOrthogonalStep,
    #[error("only the rat may enter the river")]
    RiverForbidden,
    #[error("not a valid river jump")]
    InvalidJump,
    #[error("a rat in the river blocks the jump")]
    JumpBlocked,
    #[error("defender cannot be captured by this attacker")]
    CaptureForbidden,
}

/// How an accepted move travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// One orthogonal step.
    Step,
    /// A lion or tiger leap over the river.
    Jump,
}

/// Validate `from -> to` for the side to move, without looking at whether
/// a defender on `to` can be captured.
pub fn check_move(pos: &GameState, from: Coord, to: Coord) -> Result<MoveKind, MoveError> {
    if !from.in_bounds() {
        return Err(MoveError::OutOfBounds);
    }
    let piece = pos.piece_at(from).ok_or(MoveError::EmptyStart)?;
    if piece.faction != pos.get_current_turn() {
        return Err(MoveError::WrongTurn);
    }
    let board = pos.board();
    let terrain = board.get(to).ok_or(MoveError::OutOfBounds)?;
    if pos.piece_at(to).is_some_and(|p| p.faction == piece.faction) {
        return Err(MoveError::FriendlyOccupied);
    }
    if terrain == Terrain::Den(piece.faction) {
        return Err(MoveError::OwnDen);
    }

    if !piece.species.can_jump() {
        return check_step(board, piece, from, to).map(|_| MoveKind::Step);
    }
    match (check_jump(pos, piece, from, to), check_step(board, piece, from, to)) {
        (Ok(()), _) => Ok(MoveKind::Jump),
        (_, Ok(())) => Ok(MoveKind::Step),
        // Report whichever rule the move was closer to following.
        (Err(_), Err(step)) if from.manhattan(to) == 1 => Err(step),
        (Err(jump), Err(_)) => Err(jump),
    }
}

/// One orthogonal step; only rats may step into the river.
fn check_step(board: &Board, piece: Piece, from: Coord, to: Coord) -> Result<(), MoveError> {
    if from.manhattan(to) != 1 {
        return Err(MoveError::NotOrthogonalStep);
    }
    if board.is_river(to) && !piece.is(Species::Rat) {
        return Err(MoveError::RiverForbidden);
    }
    Ok(())
}

/// A leap across the river band.
///
/// Vertical leaps must start on one side of the river rows and land on the
/// other. Horizontal leaps (lion only) run along a river row from one board
/// edge to the other. Any rat in the crossed stretch blocks the leap.
fn check_jump(pos: &GameState, piece: Piece, from: Coord, to: Coord) -> Result<(), MoveError> {
    let vertical = from.row != to.row && from.col == to.col;
    let horizontal = from.row == to.row && from.col != to.col;

    if horizontal && !piece.species.can_jump_horizontally() {
        return Err(MoveError::InvalidJump);
    }
    if !vertical && !horizontal {
        return Err(MoveError::InvalidJump);
    }

    if vertical {
        let crosses = (from.row <= JUMP_NEAR_ROW && to.row >= JUMP_FAR_ROW)
            || (from.row >= JUMP_FAR_ROW && to.row <= JUMP_NEAR_ROW);
        if crosses {
            return if rat_in_column(pos, from.col) {
                Err(MoveError::JumpBlocked)
            } else {
                Ok(())
            };
        }
    } else {
        let (left, right) = JUMP_EDGE_COLS;
        let in_band = from.row >= RIVER_ROWS.0 && from.row <= RIVER_ROWS.1;
        let crosses =
            (from.col <= left && to.col >= right) || (from.col >= right && to.col <= left);
        if in_band && crosses {
            return if rat_in_row(pos, from.row) {
                Err(MoveError::JumpBlocked)
            } else {
                Ok(())
            };
        }
    }
    Err(MoveError::InvalidJump)
}

/// Is there a rat (of either side) on the river rows of `col`?
fn rat_in_column(pos: &GameState, col: usize) -> bool {
    (RIVER_ROWS.0..=RIVER_ROWS.1)
        .filter_map(|row| pos.piece_at(Coord::new(row, col)))
        .any(|p| p.is(Species::Rat))
}

/// Is there a rat (of either side) between the edges of `row`?
fn rat_in_row(pos: &GameState, row: usize) -> bool {
    (JUMP_SCAN_COLS.0..=JUMP_SCAN_COLS.1)
        .filter_map(|col| pos.piece_at(Coord::new(row, col)))
        .any(|p| p.is(Species::Rat))
}

/// May `attacker`, standing on `attacker_cell`, take whatever stands on
/// `defender_cell`?
///
/// The first matching rule wins:
///
/// 1. nothing to capture: always yes
/// 2. rat on elephant: yes unless the elephant's cell is river
/// 3. elephant on rat: never
/// 4. rat in the river: only a rat that is itself in the river
/// 5. defender in an enemy trap: always yes
/// 6. otherwise: attacker rank >= defender rank
pub fn can_capture(
    board: &Board,
    attacker: Piece,
    attacker_cell: Coord,
    defender: Option<Piece>,
    defender_cell: Coord,
) -> bool {
    let Some(defender) = defender else {
        return true;
    };

    match (attacker.species, defender.species) {
        (Species::Rat, Species::Elephant) => return !board.is_river(defender_cell),
        (Species::Elephant, Species::Rat) => return false,
        _ => {}
    }

    if defender.is(Species::Rat) && board.is_river(defender_cell) {
        return attacker.is(Species::Rat) && board.is_river(attacker_cell);
    }

    if board
        .get(defender_cell)
        .is_some_and(|t| t.is_enemy_trap_for(defender.faction))
    {
        return true;
    }

    attacker.rank() >= defender.rank()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Faction;

    fn red(s: Species) -> Piece {
        Piece::new(Faction::Red, s)
    }

    fn blue(s: Species) -> Piece {
        Piece::new(Faction::Blue, s)
    }

    fn c(row: usize, col: usize) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn test_capture_empty_defender() {
        let b = Board::standard();
        assert!(can_capture(&b, red(Species::Rat), c(2, 0), None, c(2, 1)));
    }

    #[test]
    fn test_capture_by_rank() {
        let b = Board::standard();
        let dog = Some(blue(Species::Dog));
        assert!(can_capture(&b, red(Species::Lion), c(2, 0), Some(blue(Species::Tiger)), c(2, 1)));
        assert!(can_capture(&b, red(Species::Dog), c(2, 0), dog, c(2, 1)));
        assert!(!can_capture(&b, red(Species::Cat), c(2, 0), dog, c(2, 1)));
    }

    #[test]
    fn test_rat_elephant_asymmetry() {
        let b = Board::standard();
        let elephant = Some(blue(Species::Elephant));
        let rat = Some(red(Species::Rat));
        // Rat from the river onto a land elephant.
        assert!(can_capture(&b, red(Species::Rat), c(4, 4), elephant, c(4, 5)));
        assert!(!can_capture(&b, blue(Species::Elephant), c(4, 5), rat, c(4, 4)));
        // Even on land the elephant cannot take the rat.
        assert!(!can_capture(&b, blue(Species::Elephant), c(2, 1), rat, c(2, 0)));
    }

    #[test]
    fn test_rat_cannot_take_elephant_in_river() {
        let b = Board::standard();
        let elephant = Some(blue(Species::Elephant));
        // The elephant's cell decides, wherever the rat stands.
        assert!(!can_capture(&b, red(Species::Rat), c(4, 3), elephant, c(4, 4)));
        assert!(!can_capture(&b, red(Species::Rat), c(4, 5), elephant, c(4, 4)));
        assert!(can_capture(&b, red(Species::Rat), c(4, 4), elephant, c(4, 5)));
    }

    #[test]
    fn test_elephant_cannot_take_trapped_rat() {
        let b = Board::standard();
        let rat = Some(red(Species::Rat));
        // Red rat in Blue's trap: rule 3 comes before the trap rule.
        assert!(!can_capture(&b, blue(Species::Elephant), c(7, 2), rat, c(7, 3)));
    }

    #[test]
    fn test_river_rat_immune() {
        let b = Board::standard();
        let rat = Some(blue(Species::Rat));
        assert!(!can_capture(&b, red(Species::Tiger), c(4, 5), rat, c(4, 4)));
        assert!(!can_capture(&b, red(Species::Rat), c(4, 5), rat, c(4, 4)));
        assert!(can_capture(&b, red(Species::Rat), c(4, 3), rat, c(4, 4)));
    }

    #[test]
    fn test_trap_neutralizes_rank() {
        let b = Board::standard();
        // Blue elephant in Red's trap.
        let trapped = Some(blue(Species::Elephant));
        assert!(can_capture(&b, red(Species::Cat), c(1, 2), trapped, c(1, 3)));
        // A piece in its own trap keeps its rank.
        let at_home = Some(red(Species::Elephant));
        assert!(!can_capture(&b, blue(Species::Cat), c(1, 2), at_home, c(1, 3)));
    }
}
