//! Random self-play.
//!
//! A playout drives a game through the public move contract only: each
//! turn it throws random (own piece, any cell) proposals at the engine and
//! plays the first one accepted. It stops when someone wins, when the move
//! cap is reached, or when the side to move finds nothing acceptable within
//! [`PROPOSALS_PER_MOVE`] tries.

use crate::board::Coord;
use crate::constants::{COLS, PROPOSALS_PER_MOVE, ROWS};
use crate::piece::{Faction, Piece};
use crate::position::{GameState, str_coord};

/// One applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMove {
    pub side: Faction,
    pub from: Coord,
    pub to: Coord,
    pub captured: Option<Piece>,
}

impl std::fmt::Display for PlayedMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}-{}", self.side, str_coord(self.from), str_coord(self.to))?;
        if let Some(p) = self.captured {
            write!(f, " x {p}")?;
        }
        Ok(())
    }
}

/// How a playout ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayoutResult {
    pub winner: Option<Faction>,
    /// Side whose proposal budget ran out, if that ended the game. The
    /// proposals are random, so this is not proof that the side has no
    /// legal move.
    pub stuck: Option<Faction>,
    pub history: Vec<PlayedMove>,
}

impl PlayoutResult {
    pub fn captures(&self) -> usize {
        self.history.iter().filter(|m| m.captured.is_some()).count()
    }
}

/// Play one random accepted move for the side to move.
///
/// Returns `None` (leaving `pos` untouched) if the side has no pieces or
/// none of the [`PROPOSALS_PER_MOVE`] random proposals was accepted.
pub fn play_random_move(pos: &mut GameState, rng: &mut fastrand::Rng) -> Option<PlayedMove> {
    let side = pos.get_current_turn();
    let own: Vec<Coord> = pos.pieces(side).map(|(c, _)| c).collect();
    if own.is_empty() {
        return None;
    }

    for _ in 0..PROPOSALS_PER_MOVE {
        let from = own[rng.usize(..own.len())];
        let to = Coord::new(rng.usize(..ROWS), rng.usize(..COLS));
        if let Ok(captured) = pos.try_move(from, to) {
            return Some(PlayedMove {
                side,
                from,
                to,
                captured,
            });
        }
    }
    None
}

/// Play random moves from `pos` until the game is decided or `max_moves`
/// moves have been made.
pub fn random_playout(
    pos: &mut GameState,
    rng: &mut fastrand::Rng,
    max_moves: usize,
) -> PlayoutResult {
    let mut history = Vec::new();
    let mut stuck = None;

    let mut winner = pos.check_win();
    while winner.is_none() && history.len() < max_moves {
        match play_random_move(pos, rng) {
            Some(mv) => history.push(mv),
            None => {
                stuck = Some(pos.get_current_turn());
                break;
            }
        }
        winner = pos.check_win();
    }

    PlayoutResult {
        winner,
        stuck,
        history,
    }
}
