//! Notifications emitted alongside each new state.
//!
//! The reducer never talks to a presentation layer; it returns these and the
//! caller decides how to render them.

use serde::{Deserialize, Serialize};

use crate::board::{PlayerId, Position, Team};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    GameStarted { teams: Vec<Team> },
    GameReset,
    DiceRolled { value: u8 },
    MeepleSelected { player_id: PlayerId },
    PlayerMoved { player_id: PlayerId, from: Position, to: Position },
    ShortcutUsed { player_id: PlayerId, from: Position, to: Position },
    PlayerEscaped { player_id: PlayerId, exit: Position },
    PlayerCaught { player_id: PlayerId, at: Position },
    TurnPassed { player_id: PlayerId, team: Team, turn_count: u32 },
    PoliceMoved { count: usize },
    PoliceSpawned { positions: Vec<Position> },
    GranniesSpawned { positions: Vec<Position> },
    GranniesMoved { count: usize },
    CardPlayed { team: Team, card_id: u32 },
    GameEnded { winner: Option<Team> },
}
