//! Line-oriented text protocol for driving one game.
//!
//! The protocol borrows its framing from GTP: each command is one line,
//! optionally prefixed with a numeric id; a reply starts with `=` on
//! success or `?` on failure, echoes the id, and ends with a blank line.
//! Cells are written as column letter plus row number (`a1`..`g9`).
//!
//! ## Supported Commands
//!
//! - `name` / `version` / `protocol_version`
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the loop
//! - `clear_board` - Restart from the opening position
//! - `play <from> <to>` - Apply a move for the side to move
//! - `legal <from> <to>` - `true`/`false`, without applying anything
//! - `turn` - Side to move (`blue` / `red`)
//! - `winner` - Winning side, or `none`
//! - `piece <cell>` - e.g. `blue rat`, or `empty`
//! - `tile <cell>` - e.g. `land`, `river`, `den red`, `trap blue`
//!
//! ## Example
//!
//! ```ignore
//! use jungle_rules::protocol::ProtocolEngine;
//! let mut engine = ProtocolEngine::new();
//! engine.run()?;
//! ```

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::board::Coord;
use crate::position::{GameState, parse_coord};

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "clear_board",
    "known_command",
    "legal",
    "list_commands",
    "name",
    "piece",
    "play",
    "protocol_version",
    "quit",
    "tile",
    "turn",
    "version",
    "winner",
];

/// Protocol engine state: one game.
pub struct ProtocolEngine {
    pos: GameState,
}

impl Default for ProtocolEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtocolEngine {
    pub fn new() -> Self {
        Self::with_position(GameState::new())
    }

    /// Serve an already set-up game.
    pub fn with_position(pos: GameState) -> Self {
        Self { pos }
    }

    pub fn position(&self) -> &GameState {
        &self.pos
    }

    /// Run the command loop over stdin/stdout.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Run the command loop until `quit` or end of input.
    pub fn serve<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];
            let (success, message) = self.execute(&command, args);

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(trimmed.len());
        if end == 0 {
            return (None, trimmed);
        }
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Parse a `<from> <to>` pair.
    fn parse_move(args: &[&str]) -> Result<(Coord, Coord), String> {
        if args.len() < 2 {
            return Err("missing arguments".to_string());
        }
        let from = parse_coord(args[0]).ok_or_else(|| format!("invalid cell: {}", args[0]))?;
        let to = parse_coord(args[1]).ok_or_else(|| format!("invalid cell: {}", args[1]))?;
        Ok((from, to))
    }

    fn parse_cell(args: &[&str]) -> Result<Coord, String> {
        let arg = args.first().ok_or_else(|| "missing argument".to_string())?;
        parse_coord(arg).ok_or_else(|| format!("invalid cell: {arg}"))
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "1".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let known = KNOWN_COMMANDS.contains(&args[0].to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "clear_board" => {
                self.pos = GameState::new();
                (true, String::new())
            }

            "play" => match Self::parse_move(args) {
                Ok((from, to)) => match self.pos.try_move(from, to) {
                    Ok(Some(captured)) => (true, format!("captured {captured}")),
                    Ok(None) => (true, String::new()),
                    Err(e) => (false, format!("illegal move: {e}")),
                },
                Err(msg) => (false, msg),
            },

            "legal" => match Self::parse_move(args) {
                Ok((from, to)) => (true, self.pos.is_legal_move(from, to).to_string()),
                Err(msg) => (false, msg),
            },

            "turn" => (true, self.pos.current_player_name().to_lowercase()),

            "winner" => match self.pos.check_win() {
                Some(side) => (true, side.name().to_lowercase()),
                None => (true, "none".to_string()),
            },

            "piece" => match Self::parse_cell(args) {
                Ok(c) => match self.pos.piece_at(c) {
                    Some(p) => (true, p.to_string()),
                    None => (true, "empty".to_string()),
                },
                Err(msg) => (false, msg),
            },

            "tile" => match Self::parse_cell(args) {
                Ok(c) => {
                    let tile = self.pos.get_board_tile(c.row, c.col);
                    (true, tile.map(|t| t.to_string()).unwrap_or_default())
                }
                Err(msg) => (false, msg),
            },

            _ => (false, format!("unknown command: {command}")),
        }
    }
}
