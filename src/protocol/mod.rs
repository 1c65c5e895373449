//! Protocol handling.
//!
//! The action and event vocabulary of the reducer, the line-based command
//! parser for the main loop, and the compact board notation.

pub mod action;
pub mod event;
pub mod notation;
pub mod parser;

pub use action::Action;
pub use event::Event;
pub use notation::{encode_board, parse_row, Glyph, NotationError};
pub use parser::{parse_command, Command, ParseError};
