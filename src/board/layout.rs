//! Fixed board layout and rule constants.
//!
//! Everything here is compile-time: the board size, landmark footprints,
//! exit locations, roster size, and the escalation cadences.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// Width and height of the square board.
pub const BOARD_SIZE: i32 = 20;

/// Meeples contributed by every team.
pub const ROSTER_SIZE: usize = 5;

/// Police placed when the board is generated.
pub const INITIAL_POLICE: usize = 5;

/// Grannies placed when the board is generated.
pub const INITIAL_GRANNIES: usize = 3;

/// Police added on each police escalation tick.
pub const POLICE_SPAWN_COUNT: usize = 5;

/// Police are added whenever the turn counter is a multiple of this.
pub const POLICE_SPAWN_CADENCE: u32 = 3;

/// Grannies added on each granny escalation tick.
pub const GRANNY_SPAWN_COUNT: usize = 3;

/// Grannies are added whenever the turn counter is a multiple of this.
pub const GRANNY_SPAWN_CADENCE: u32 = 5;

/// Grannies wander whenever the turn counter is a multiple of this.
pub const GRANNY_MOVE_CADENCE: u32 = 2;

/// Entrance cells per landmark (always a single linked pair).
pub const ENTRANCES_PER_LANDMARK: usize = 2;

/// Dice value of a freshly generated board, before the first roll.
pub const INITIAL_DICE: u8 = 1;

/// Where a meeple lands if the shuffled pool runs dry.
pub const FALLBACK_POSITION: Position = Position::new(10, 10);

/// The four exits, one near each board edge.
pub const EXITS: [Position; 4] = [
    Position::new(0, 5),
    Position::new(5, 0),
    Position::new(BOARD_SIZE - 1, 15),
    Position::new(15, BOARD_SIZE - 1),
];

/// A named building region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Landmark {
    City,
    Library,
    School,
    Townhall,
}

/// All landmarks in enumeration order.
pub const ALL_LANDMARKS: [Landmark; 4] = [
    Landmark::City,
    Landmark::Library,
    Landmark::School,
    Landmark::Townhall,
];

impl Landmark {
    pub const fn name(self) -> &'static str {
        match self {
            Landmark::City => "city",
            Landmark::Library => "library",
            Landmark::School => "school",
            Landmark::Townhall => "townhall",
        }
    }

    /// Static footprint for this landmark.
    pub const fn info(self) -> LandmarkInfo {
        LANDMARKS[self as usize]
    }
}

/// Footprint of a landmark: a `size` x `size` square anchored at `origin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandmarkInfo {
    pub landmark: Landmark,
    pub size: i32,
    pub origin: Position,
}

impl LandmarkInfo {
    /// On-board cells covered by the footprint, row-major.
    pub fn cells(&self) -> Vec<Position> {
        let mut cells = Vec::with_capacity((self.size * self.size) as usize);
        for r in 0..self.size {
            for c in 0..self.size {
                let pos = Position::new(self.origin.row + r, self.origin.col + c);
                if pos.in_bounds() {
                    cells.push(pos);
                }
            }
        }
        cells
    }
}

/// Landmark footprints, indexed by `Landmark as usize`.
pub const LANDMARKS: [LandmarkInfo; 4] = [
    LandmarkInfo { landmark: Landmark::City, size: 4, origin: Position::new(0, 2) },
    LandmarkInfo { landmark: Landmark::Library, size: 3, origin: Position::new(2, BOARD_SIZE - 4) },
    LandmarkInfo { landmark: Landmark::School, size: 5, origin: Position::new(BOARD_SIZE - 6, 2) },
    LandmarkInfo { landmark: Landmark::Townhall, size: 3, origin: Position::new(BOARD_SIZE - 4, BOARD_SIZE - 4) },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landmark_table_is_indexed_by_discriminant() {
        for lm in ALL_LANDMARKS {
            assert_eq!(lm.info().landmark, lm);
        }
    }

    #[test]
    fn footprints_fit_on_board() {
        assert_eq!(Landmark::City.info().cells().len(), 16);
        assert_eq!(Landmark::Library.info().cells().len(), 9);
        assert_eq!(Landmark::School.info().cells().len(), 25);
        assert_eq!(Landmark::Townhall.info().cells().len(), 9);
    }

    #[test]
    fn exits_are_on_board() {
        assert!(EXITS.iter().all(|e| e.in_bounds()));
    }
}
