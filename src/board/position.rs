//! Grid coordinates.
//!
//! Positions are signed so that neighbor arithmetic at the board edge can
//! produce off-board coordinates, which are then filtered by `in_bounds`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::layout::BOARD_SIZE;

/// A (row, col) coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }

    /// Returns true if the position lies on the board.
    pub const fn in_bounds(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Manhattan distance to another position.
    pub const fn distance(self, other: Position) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The 4-neighborhood in up, down, left, right order. May contain
    /// off-board positions.
    pub const fn neighbors(self) -> [Position; 4] {
        [
            Position::new(self.row - 1, self.col),
            Position::new(self.row + 1, self.col),
            Position::new(self.row, self.col - 1),
            Position::new(self.row, self.col + 1),
        ]
    }

    /// Single-step moves that close the row gap and the column gap to `target`,
    /// row step first. Empty when already on the target.
    pub fn steps_toward(self, target: Position) -> Vec<Position> {
        let mut steps = Vec::with_capacity(2);
        if target.row != self.row {
            steps.push(Position::new(self.row + (target.row - self.row).signum(), self.col));
        }
        if target.col != self.col {
            steps.push(Position::new(self.row, self.col + (target.col - self.col).signum()));
        }
        steps
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}
