//! Constants for board geometry, terrain placement, and driver limits.
//!
//! The board is a fixed 9x7 grid addressed by `(row, col)`. Red sits on
//! rows 0-2 and owns the den and traps on row 0 side; Blue sits on rows
//! 6-8 and owns the den and traps on the row 8 side.

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of rows on the board.
pub const ROWS: usize = 9;

/// Number of columns on the board.
pub const COLS: usize = 7;

/// Total number of cells.
pub const CELLS: usize = ROWS * COLS;

/// Column holding both dens.
pub const DEN_COL: usize = 3;

/// Red's back row (den row).
pub const RED_HOME_ROW: usize = 0;

/// Blue's back row (den row).
pub const BLUE_HOME_ROW: usize = ROWS - 1;

// =============================================================================
// Terrain Placement
// =============================================================================

/// Red's den.
pub const RED_DEN: (usize, usize) = (RED_HOME_ROW, DEN_COL);

/// Blue's den.
pub const BLUE_DEN: (usize, usize) = (BLUE_HOME_ROW, DEN_COL);

/// Red's traps: either side of the den and directly in front of it.
pub const RED_TRAPS: [(usize, usize); 3] = [(0, 2), (0, 4), (1, 3)];

/// Blue's traps.
pub const BLUE_TRAPS: [(usize, usize); 3] = [(8, 2), (8, 4), (7, 3)];

/// First and last row of the river band (inclusive).
pub const RIVER_ROWS: (usize, usize) = (3, 5);

/// The two river blocks, as inclusive column ranges.
pub const RIVER_COLS: [(usize, usize); 2] = [(1, 2), (3, 4)];

/// A vertical jump must start at or before this row (or end at or before it).
pub const JUMP_NEAR_ROW: usize = 2;

/// ... and land at or beyond this row (or start at or beyond it).
pub const JUMP_FAR_ROW: usize = 6;

/// Horizontal jumps run between these two columns.
pub const JUMP_EDGE_COLS: (usize, usize) = (0, COLS - 1);

/// Columns scanned for a blocking rat on a horizontal jump (inclusive).
pub const JUMP_SCAN_COLS: (usize, usize) = (1, 5);

// =============================================================================
// Driver Limits
// =============================================================================

/// Default cap on moves in a random playout.
pub const MAX_PLAYOUT_MOVES: usize = 400;

/// Random (from, to) proposals tried per turn before a side is declared stuck.
pub const PROPOSALS_PER_MOVE: usize = 2000;

/// Default seed for the demo game.
pub const DEFAULT_SEED: u64 = 2024;
