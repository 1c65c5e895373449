//! Board representation and game-state types.
//!
//! Contains the core data structures for positions, cells, teams, the fixed
//! layout tables, and the overall game state.

pub mod cell;
pub mod layout;
pub mod position;
pub mod state;
pub mod team;

pub use cell::{Cell, CellType, Npc, Terrain};
pub use layout::{
    Landmark, LandmarkInfo, ALL_LANDMARKS, BOARD_SIZE, EXITS, LANDMARKS, ROSTER_SIZE,
};
pub use position::Position;
pub use state::{GameState, GameStatus, Grid};
pub use team::{InvalidPlayerId, Player, PlayerId, Team, ALL_TEAMS, DEFAULT_TEAMS, TEAM_COUNT};
