//! Game state representation.
//!
//! Holds the complete snapshot of a game at a given point in time: the grid,
//! every meeple, police and granny positions, landmark bookkeeping, and the
//! turn/dice/status fields the reducer sequences on.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::cell::{Cell, CellType, Npc, Terrain};
use super::layout::{Landmark, ALL_LANDMARKS, BOARD_SIZE, EXITS, INITIAL_DICE};
use super::position::Position;
use super::team::{Player, PlayerId, Team};
use crate::cards::Card;

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Setup,
    Playing,
    Ended,
}

/// Row-major cell arena.
///
/// Each row sits behind its own `Arc`, so cloning a grid is a handful of
/// reference-count bumps and writing a cell copies only that row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Arc<Vec<Cell>>>,
}

impl Grid {
    /// A board made entirely of empty path cells.
    pub fn new() -> Self {
        let rows = (0..BOARD_SIZE)
            .map(|row| Arc::new((0..BOARD_SIZE).map(|col| Cell::new(Position::new(row, col))).collect()))
            .collect();
        Grid { rows }
    }

    pub fn get(&self, pos: Position) -> Option<&Cell> {
        if !pos.in_bounds() {
            return None;
        }
        self.rows[pos.row as usize].get(pos.col as usize)
    }

    /// Mutable access to one cell; clones the containing row if it is shared.
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        if !pos.in_bounds() {
            return None;
        }
        Arc::make_mut(&mut self.rows[pos.row as usize]).get_mut(pos.col as usize)
    }

    /// Observable type of the cell at `pos`.
    pub fn kind(&self, pos: Position) -> Option<CellType> {
        self.get(pos).map(Cell::kind)
    }

    /// All cells, row-major.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flat_map(|row| row.iter())
    }

    /// Rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(|row| row.as_slice())
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new()
    }
}

/// Complete game snapshot. Transitions never mutate a snapshot in place; the
/// reducer clones and returns a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub grid: Grid,
    pub players: Vec<Player>,
    pub police: Vec<Position>,
    pub grannies: Vec<Position>,
    pub exits: Vec<Position>,
    /// Arrested players in arrest order.
    pub jailed: Vec<Player>,
    pub landmarks: BTreeMap<Landmark, Vec<Position>>,
    pub entrances: BTreeMap<Landmark, [Position; 2]>,
    pub current_player: usize,
    pub active_meeple: Option<PlayerId>,
    /// 0 once spent, 1-6 after a roll.
    pub dice_value: u8,
    pub status: GameStatus,
    pub winner: Option<Team>,
    pub turn_count: u32,
    pub hands: BTreeMap<Team, Vec<Card>>,
}

impl GameState {
    /// The empty pre-game board: all path, no units, status `Setup`.
    pub fn setup() -> Self {
        GameState {
            grid: Grid::new(),
            players: Vec::new(),
            police: Vec::new(),
            grannies: Vec::new(),
            exits: EXITS.to_vec(),
            jailed: Vec::new(),
            landmarks: ALL_LANDMARKS.into_iter().map(|lm| (lm, Vec::new())).collect(),
            entrances: BTreeMap::new(),
            current_player: 0,
            active_meeple: None,
            dice_value: INITIAL_DICE,
            status: GameStatus::Setup,
            winner: None,
            turn_count: 0,
            hands: BTreeMap::new(),
        }
    }

    pub fn player_index(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Team whose turn it is, if any players exist.
    pub fn current_team(&self) -> Option<Team> {
        self.players.get(self.current_player).map(Player::team)
    }

    pub fn live_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_live())
    }

    /// Teams in roster order, each listed once.
    pub fn teams(&self) -> Vec<Team> {
        let mut teams = Vec::new();
        for p in &self.players {
            if !teams.contains(&p.team()) {
                teams.push(p.team());
            }
        }
        teams
    }

    pub fn is_exit(&self, pos: Position) -> bool {
        self.exits.contains(&pos)
    }

    /// Marks a cell occupied by `id`. Off-board positions are ignored.
    pub fn occupy(&mut self, pos: Position, id: PlayerId) {
        if let Some(cell) = self.grid.get_mut(pos) {
            cell.occupied_by = Some(id);
        }
    }

    pub fn vacate(&mut self, pos: Position) {
        if let Some(cell) = self.grid.get_mut(pos) {
            cell.occupied_by = None;
        }
    }

    pub fn set_terrain(&mut self, pos: Position, terrain: Terrain) {
        if let Some(cell) = self.grid.get_mut(pos) {
            cell.terrain = terrain;
        }
    }

    fn set_npc(&mut self, pos: Position, npc: Option<Npc>) {
        if let Some(cell) = self.grid.get_mut(pos) {
            cell.npc = npc;
        }
    }

    /// Adds a police unit to both the list and the grid.
    pub fn add_police(&mut self, pos: Position) {
        self.set_npc(pos, Some(Npc::Police));
        self.police.push(pos);
    }

    /// Adds a granny to both the list and the grid.
    pub fn add_granny(&mut self, pos: Position) {
        self.set_npc(pos, Some(Npc::Granny));
        self.grannies.push(pos);
    }

    /// Relocates police unit `idx`, keeping the grid in step with the list.
    pub fn move_police(&mut self, idx: usize, to: Position) {
        let from = self.police[idx];
        if from == to {
            return;
        }
        self.set_npc(from, None);
        self.set_npc(to, Some(Npc::Police));
        self.police[idx] = to;
    }

    /// Relocates granny `idx`, keeping the grid in step with the list.
    pub fn move_granny(&mut self, idx: usize, to: Position) {
        let from = self.grannies[idx];
        if from == to {
            return;
        }
        self.set_npc(from, None);
        self.set_npc(to, Some(Npc::Granny));
        self.grannies[idx] = to;
    }

    /// Unoccupied bare path cells, row-major.
    pub fn open_path_cells(&self) -> Vec<Position> {
        self.grid.cells().filter(|c| c.is_open_path()).map(|c| c.position).collect()
    }

    /// Number of escaped players per team, in `ALL_TEAMS` order.
    pub fn escaped_counts(&self) -> [usize; super::team::TEAM_COUNT] {
        let mut counts = [0; super::team::TEAM_COUNT];
        for p in self.players.iter().filter(|p| p.escaped) {
            counts[p.team().index()] += 1;
        }
        counts
    }

    /// Number of arrested players per team, in `ALL_TEAMS` order.
    pub fn arrested_counts(&self) -> [usize; super::team::TEAM_COUNT] {
        let mut counts = [0; super::team::TEAM_COUNT];
        for p in self.players.iter().filter(|p| p.arrested) {
            counts[p.team().index()] += 1;
        }
        counts
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::setup()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_state_is_empty() {
        let state = GameState::setup();
        assert_eq!(state.status, GameStatus::Setup);
        assert!(state.players.is_empty());
        assert!(state.police.is_empty());
        assert_eq!(state.exits.len(), 4);
        assert_eq!(state.dice_value, 1);
        assert_eq!(state.grid.cells().count(), 400);
        assert!(state.grid.cells().all(|c| c.kind() == CellType::Path));
    }

    #[test]
    fn cloned_grid_copies_only_written_rows() {
        let mut a = Grid::new();
        let b = a.clone();
        a.get_mut(Position::new(3, 4)).unwrap().npc = Some(Npc::Granny);
        assert_eq!(a.kind(Position::new(3, 4)), Some(CellType::Granny));
        assert_eq!(b.kind(Position::new(3, 4)), Some(CellType::Path));
        assert!(Arc::ptr_eq(&a.rows[0], &b.rows[0]));
        assert!(!Arc::ptr_eq(&a.rows[3], &b.rows[3]));
    }

    #[test]
    fn police_list_tracks_grid() {
        let mut state = GameState::setup();
        state.add_police(Position::new(5, 5));
        state.move_police(0, Position::new(5, 6));
        assert_eq!(state.police, vec![Position::new(5, 6)]);
        assert_eq!(state.grid.kind(Position::new(5, 5)), Some(CellType::Path));
        assert_eq!(state.grid.kind(Position::new(5, 6)), Some(CellType::Police));
    }

    #[test]
    fn off_board_lookups_are_none() {
        let state = GameState::setup();
        assert!(state.grid.get(Position::new(-1, 0)).is_none());
        assert!(state.grid.kind(Position::new(0, 20)).is_none());
    }

    #[test]
    fn open_path_cells_skip_occupied_and_units() {
        let mut state = GameState::setup();
        state.occupy(Position::new(0, 0), PlayerId::new(Team::Gang, 0));
        state.add_granny(Position::new(0, 1));
        let open = state.open_path_cells();
        assert_eq!(open.len(), 398);
        assert!(!open.contains(&Position::new(0, 0)));
        assert!(!open.contains(&Position::new(0, 1)));
    }
}
