//! Jungle-Rules: a rules engine for the animal-chess game "Jungle".
//!
//! Two sides, Red and Blue, each field eight ranked animals on a fixed 9x7
//! board with dens, traps and a river. The engine decides whether a move is
//! legal, resolves captures under the terrain-modified rank rules, applies
//! moves and reports the winner.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, terrain placement and driver limits
//! - [`piece`] - Factions, species and their ranks
//! - [`board`] - Cell coordinates and the fixed terrain grid
//! - [`rules`] - Move legality and capture resolution
//! - [`position`] - Game state, move application and win detection
//! - [`playout`] - Seeded random self-play
//! - [`protocol`] - Line-oriented text protocol for external front ends
//!
//! ## Example
//!
//! ```
//! use jungle_rules::board::Coord;
//! use jungle_rules::piece::Faction;
//! use jungle_rules::position::GameState;
//!
//! let mut game = GameState::new();
//! assert_eq!(game.get_current_turn(), Faction::Blue);
//!
//! // Blue's rat steps forward.
//! assert!(game.make_move(Coord::new(6, 6), Coord::new(5, 6)));
//! assert_eq!(game.get_current_turn(), Faction::Red);
//!
//! // Red's elephant cannot cover three rows at once.
//! assert!(!game.is_legal_move(Coord::new(2, 6), Coord::new(5, 6)));
//! assert_eq!(game.check_win(), None);
//! ```

pub mod board;
pub mod constants;
pub mod piece;
pub mod playout;
pub mod position;
pub mod protocol;
pub mod rules;
