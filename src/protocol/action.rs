//! Actions consumed by the reducer.
//!
//! Every caller (command loop, self-play, tests, a UI process) drives the
//! engine exclusively through these values.

use serde::{Deserialize, Serialize};

use crate::board::{PlayerId, Position, Team};

/// One input to the turn engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// (Re)initialize with a freshly generated board.
    StartGame { teams: Vec<Team> },

    RollDice,

    /// Pick which meeple of the current team will move.
    SelectMeeple { player_id: PlayerId },

    /// Move the active meeple to `position`.
    MovePlayer { position: Position },

    /// End the current team's turn and run the escalation tick.
    NextTurn,

    /// Back to the empty setup board.
    ResetGame,

    /// Arrest a player directly, for external triggers.
    PlayerCaught { player_id: PlayerId },

    /// Play card `card` (hand index) from `team`'s hand.
    PlayCard { team: Team, card: usize },
}
