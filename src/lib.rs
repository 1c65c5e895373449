//! Getaway engine library.
//!
//! A turn-based pursuit game on a 20x20 city grid: teams of meeples race for
//! the exits while police close in. Exposes the board representation, board
//! generation, move validation, rule resolution, the non-player AI, the turn
//! reducer, and the text protocol for use by the binaries and tests.

pub mod ai;
pub mod board;
pub mod cards;
pub mod engine;
pub mod mapgen;
pub mod movegen;
pub mod protocol;
pub mod resolve;
pub mod selfplay;
