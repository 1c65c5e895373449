//! Board cells.
//!
//! A cell keeps its underlying terrain separate from any police or granny
//! standing on it. The observable [`CellType`] is the unit when one is present
//! and the terrain otherwise, so landmark and exit cells survive a police
//! officer walking across them.

use serde::{Deserialize, Serialize};

use super::layout::Landmark;
use super::position::Position;
use super::team::PlayerId;

/// Static ground of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    Path,
    Exit,
    Entrance,
    Landmark(Landmark),
}

/// Non-player unit standing on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Npc {
    Police,
    Granny,
}

/// What a cell presents as to movement rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    Path,
    Exit,
    Entrance,
    Police,
    Granny,
    City,
    Library,
    School,
    Townhall,
}

impl From<Landmark> for CellType {
    fn from(landmark: Landmark) -> Self {
        match landmark {
            Landmark::City => CellType::City,
            Landmark::Library => CellType::Library,
            Landmark::School => CellType::School,
            Landmark::Townhall => CellType::Townhall,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub position: Position,
    pub terrain: Terrain,
    pub npc: Option<Npc>,
    /// Live player standing here.
    pub occupied_by: Option<PlayerId>,
    /// Partner cell of an entrance pair.
    pub connected_to: Option<Position>,
}

impl Cell {
    /// An empty path cell.
    pub fn new(position: Position) -> Self {
        Cell {
            position,
            terrain: Terrain::Path,
            npc: None,
            occupied_by: None,
            connected_to: None,
        }
    }

    pub fn kind(&self) -> CellType {
        match self.npc {
            Some(Npc::Police) => CellType::Police,
            Some(Npc::Granny) => CellType::Granny,
            None => match self.terrain {
                Terrain::Path => CellType::Path,
                Terrain::Exit => CellType::Exit,
                Terrain::Entrance => CellType::Entrance,
                Terrain::Landmark(lm) => lm.into(),
            },
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied_by.is_some()
    }

    /// A bare, unoccupied path cell: where units may spawn or wander.
    pub fn is_open_path(&self) -> bool {
        self.kind() == CellType::Path && !self.is_occupied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn npc_overlay_masks_terrain() {
        let mut cell = Cell::new(Position::new(0, 3));
        cell.terrain = Terrain::Landmark(Landmark::City);
        assert_eq!(cell.kind(), CellType::City);
        cell.npc = Some(Npc::Police);
        assert_eq!(cell.kind(), CellType::Police);
        cell.npc = None;
        assert_eq!(cell.kind(), CellType::City);
    }

    #[test]
    fn open_path_requires_empty_path() {
        let mut cell = Cell::new(Position::new(7, 7));
        assert!(cell.is_open_path());
        cell.npc = Some(Npc::Granny);
        assert!(!cell.is_open_path());
        cell.npc = None;
        cell.occupied_by = Some(PlayerId::new(crate::board::Team::Gang, 0));
        assert!(!cell.is_open_path());
    }
}
