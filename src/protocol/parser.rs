//! Command parser.
//!
//! Parses incoming protocol lines into structured `Command` variants that the
//! main loop can dispatch on. Game commands map one-to-one onto [`Action`]s.

use thiserror::Error;

use crate::board::{PlayerId, Position, Team};

use super::action::Action;

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// A game action to run through the reducer.
    Action(Action),

    /// List legal destinations for the active meeple.
    Moves,

    /// Print the board notation.
    Board,

    /// Print the full state as JSON.
    State,

    /// Terminate the engine process.
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("unknown command: '{0}'")]
    UnknownCommand(String),
    #[error("missing argument for '{command}': expected '{usage}'")]
    MissingArgument { command: &'static str, usage: &'static str },
    #[error("invalid number: '{0}'")]
    InvalidNumber(String),
    #[error("unknown team: '{0}'")]
    UnknownTeam(String),
    #[error("invalid player id: '{0}'")]
    InvalidPlayerId(String),
    #[error("invalid position: '{0}'")]
    InvalidPosition(String),
}

/// Parses a single line of input into a `Command`.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&head) = tokens.first() else {
        return Err(ParseError::Empty);
    };

    match head {
        "isready" => Ok(Command::IsReady),
        "quit" => Ok(Command::Quit),
        "moves" => Ok(Command::Moves),
        "board" => Ok(Command::Board),
        "state" => Ok(Command::State),
        "roll" => Ok(Command::Action(Action::RollDice)),
        "next" => Ok(Command::Action(Action::NextTurn)),
        "reset" => Ok(Command::Action(Action::ResetGame)),

        "setoption" => parse_setoption(&tokens),
        "start" => parse_start(&tokens),
        "select" => {
            let player_id = parse_player_id(&tokens, "select", "select <team>-<n>")?;
            Ok(Command::Action(Action::SelectMeeple { player_id }))
        }
        "caught" => {
            let player_id = parse_player_id(&tokens, "caught", "caught <team>-<n>")?;
            Ok(Command::Action(Action::PlayerCaught { player_id }))
        }
        "move" => parse_move(&tokens),
        "card" => parse_card(&tokens),

        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Result<Command, ParseError> {
    let missing = ParseError::MissingArgument {
        command: "setoption",
        usage: "setoption name <id> [value <x>]",
    };
    if tokens.len() < 3 || tokens[1] != "name" {
        return Err(missing);
    }

    let value_idx = tokens.iter().position(|&t| t == "value");
    let (name, value) = match value_idx {
        Some(vi) => {
            let name_parts = &tokens[2..vi];
            let value_parts = &tokens[vi + 1..];
            if name_parts.is_empty() {
                return Err(missing);
            }
            let value = if value_parts.is_empty() {
                None
            } else {
                Some(value_parts.join(" "))
            };
            (name_parts.join(" "), value)
        }
        None => (tokens[2..].join(" "), None),
    };

    Ok(Command::SetOption { name, value })
}

/// Parses `start [<team>...]`. No teams means the default pair only.
fn parse_start(tokens: &[&str]) -> Result<Command, ParseError> {
    let teams = tokens[1..]
        .iter()
        .map(|&t| Team::from_name(t).ok_or_else(|| ParseError::UnknownTeam(t.to_string())))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Command::Action(Action::StartGame { teams }))
}

fn parse_player_id(
    tokens: &[&str],
    command: &'static str,
    usage: &'static str,
) -> Result<PlayerId, ParseError> {
    let raw = tokens
        .get(1)
        .ok_or(ParseError::MissingArgument { command, usage })?;
    PlayerId::parse(raw).ok_or_else(|| ParseError::InvalidPlayerId(raw.to_string()))
}

/// Parses `move <row> <col>`. Off-board coordinates parse fine; the reducer
/// rejects them.
fn parse_move(tokens: &[&str]) -> Result<Command, ParseError> {
    if tokens.len() < 3 {
        return Err(ParseError::MissingArgument { command: "move", usage: "move <row> <col>" });
    }
    let row = tokens[1]
        .parse::<i32>()
        .map_err(|_| ParseError::InvalidPosition(tokens[1..3].join(" ")))?;
    let col = tokens[2]
        .parse::<i32>()
        .map_err(|_| ParseError::InvalidPosition(tokens[1..3].join(" ")))?;
    Ok(Command::Action(Action::MovePlayer { position: Position::new(row, col) }))
}

/// Parses `card <team> <index>`.
fn parse_card(tokens: &[&str]) -> Result<Command, ParseError> {
    if tokens.len() < 3 {
        return Err(ParseError::MissingArgument { command: "card", usage: "card <team> <index>" });
    }
    let team = Team::from_name(tokens[1]).ok_or_else(|| ParseError::UnknownTeam(tokens[1].to_string()))?;
    let card = tokens[2]
        .parse::<usize>()
        .map_err(|_| ParseError::InvalidNumber(tokens[2].to_string()))?;
    Ok(Command::Action(Action::PlayCard { team, card }))
}
