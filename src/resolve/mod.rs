//! Rule resolution.
//!
//! Arrests, turn sequencing, threat escalation, and end-of-game detection.
//! The reducer in [`crate::engine`] composes these per action.

pub mod capture;
pub mod escalation;
pub mod turn;
pub mod win;

pub use capture::{arrest, capture_sweep};
pub use escalation::{escalate, spawn_grannies, spawn_police, Schedule};
pub use turn::{next_turn, NextTurn};
pub use win::{end_game, evaluate, live_teams, winner};
