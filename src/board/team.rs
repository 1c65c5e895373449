//! Teams, player identifiers, and meeples.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::position::Position;

/// Number of playable teams.
pub const TEAM_COUNT: usize = 4;

/// A playable team.
///
/// Variant order is the enumeration order used for tie-breaking the winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Team {
    Gang = 0,
    Mafia = 1,
    Politicians = 2,
    Cartel = 3,
}

/// All teams in enumeration order.
pub const ALL_TEAMS: [Team; TEAM_COUNT] = [Team::Gang, Team::Mafia, Team::Politicians, Team::Cartel];

/// Teams that join every game whether or not they were selected.
/// `Gang` is the pursued side, `Politicians` the authority-aligned side.
pub const DEFAULT_TEAMS: [Team; 2] = [Team::Gang, Team::Politicians];

impl Team {
    pub const fn name(self) -> &'static str {
        match self {
            Team::Gang => "gang",
            Team::Mafia => "mafia",
            Team::Politicians => "politicians",
            Team::Cartel => "cartel",
        }
    }

    /// Parses a team from its lowercase name.
    pub fn from_name(s: &str) -> Option<Team> {
        ALL_TEAMS.into_iter().find(|t| t.name() == s)
    }

    /// Single-digit code used by the board notation.
    pub const fn code(self) -> char {
        match self {
            Team::Gang => '1',
            Team::Mafia => '2',
            Team::Politicians => '3',
            Team::Cartel => '4',
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for a malformed `<team>-<index>` player id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid player id '{0}'")]
pub struct InvalidPlayerId(pub String);

/// Stable meeple identifier: the owning team plus a roster slot.
///
/// Serialized and displayed as `<team>-<index>`, e.g. `gang-3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PlayerId {
    pub team: Team,
    pub index: u8,
}

impl PlayerId {
    pub const fn new(team: Team, index: u8) -> Self {
        PlayerId { team, index }
    }

    /// Parses `<team>-<index>`.
    pub fn parse(s: &str) -> Option<PlayerId> {
        let (team, index) = s.rsplit_once('-')?;
        let team = Team::from_name(team)?;
        let index = index.parse::<u8>().ok()?;
        Some(PlayerId { team, index })
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.team, self.index)
    }
}

impl From<PlayerId> for String {
    fn from(id: PlayerId) -> String {
        id.to_string()
    }
}

impl TryFrom<String> for PlayerId {
    type Error = InvalidPlayerId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        PlayerId::parse(&s).ok_or(InvalidPlayerId(s))
    }
}

/// A meeple on (or resolved off) the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub position: Position,
    pub arrested: bool,
    pub escaped: bool,
}

impl Player {
    pub fn new(id: PlayerId, position: Position) -> Self {
        Player { id, position, arrested: false, escaped: false }
    }

    pub const fn team(&self) -> Team {
        self.id.team
    }

    /// Neither arrested nor escaped.
    pub const fn is_live(&self) -> bool {
        !self.arrested && !self.escaped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_names_roundtrip() {
        for t in ALL_TEAMS {
            assert_eq!(Team::from_name(t.name()), Some(t));
        }
        assert_eq!(Team::from_name("creeps"), None);
    }

    #[test]
    fn player_id_display_and_parse() {
        let id = PlayerId::new(Team::Politicians, 4);
        assert_eq!(id.to_string(), "politicians-4");
        assert_eq!(PlayerId::parse("politicians-4"), Some(id));
        assert_eq!(PlayerId::parse("politicians"), None);
        assert_eq!(PlayerId::parse("police-1"), None);
        assert_eq!(PlayerId::parse("gang-x"), None);
    }

    #[test]
    fn player_id_serializes_as_string() {
        let id = PlayerId::new(Team::Cartel, 2);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"cartel-2\"");
        let back: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<PlayerId>("\"nobody-0\"").is_err());
    }

    #[test]
    fn resolved_players_are_not_live() {
        let mut p = Player::new(PlayerId::new(Team::Gang, 0), Position::new(3, 3));
        assert!(p.is_live());
        p.escaped = true;
        assert!(!p.is_live());
    }
}
