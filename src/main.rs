//! Jungle-Rules command line.
//!
//! ## Usage
//!
//! - `jungle-rules` - Play a random demo game
//! - `jungle-rules protocol` - Serve the text protocol on stdin/stdout
//! - `jungle-rules demo --seed 7 --max-moves 200` - Demo with explicit settings

use anyhow::Result;
use clap::{Parser, Subcommand};

use jungle_rules::constants::{DEFAULT_SEED, MAX_PLAYOUT_MOVES, PROPOSALS_PER_MOVE};
use jungle_rules::piece::Faction;
use jungle_rules::playout::random_playout;
use jungle_rules::position::GameState;
use jungle_rules::protocol::ProtocolEngine;

/// Jungle-Rules: an animal-chess rules engine
#[derive(Parser)]
#[command(name = "jungle-rules")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the line-oriented text protocol for an external front end
    Protocol,
    /// Play a seeded random game and print the moves
    Demo {
        /// Seed for the move proposals
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
        /// Stop after this many moves
        #[arg(long, default_value_t = MAX_PLAYOUT_MOVES)]
        max_moves: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Protocol) => ProtocolEngine::new().run(),
        Some(Commands::Demo { seed, max_moves }) => {
            run_demo(seed, max_moves);
            Ok(())
        }
        None => {
            run_demo(DEFAULT_SEED, MAX_PLAYOUT_MOVES);
            Ok(())
        }
    }
}

fn run_demo(seed: u64, max_moves: usize) {
    println!("Jungle-Rules: random game (seed {seed})\n");

    let mut pos = GameState::new();
    let mut rng = fastrand::Rng::with_seed(seed);
    let result = random_playout(&mut pos, &mut rng, max_moves);

    for (i, mv) in result.history.iter().enumerate() {
        println!("{:>4}. {mv}", i + 1);
    }
    println!();

    match (result.winner, result.stuck) {
        (Some(side), _) => println!("{side} wins after {} moves", result.history.len()),
        (None, Some(side)) => eprintln!(
            "{side}: no move accepted within {PROPOSALS_PER_MOVE} random proposals; stopping"
        ),
        (None, None) => println!("No winner after {} moves", result.history.len()),
    }
    println!(
        "Captures: {}  Pieces left: {} {} / {} {}",
        result.captures(),
        Faction::Red,
        pos.piece_count(Faction::Red),
        Faction::Blue,
        pos.piece_count(Faction::Blue),
    );
}
