//! Move legality for a single meeple.
//!
//! Classifies a proposed destination for the active meeple and enumerates
//! every legal destination on the board.

use crate::board::{CellType, GameState, Player, Position};

/// How a legal move resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Plain relocation onto the destination.
    Step,
    /// Entered an entrance; the meeple comes out at the linked cell.
    Shortcut { to: Position },
    /// Walked onto a police cell.
    Arrest,
    /// Reached an exit.
    Escape,
}

/// Classifies moving `player` to `dest`, or returns None if the move is
/// illegal.
///
/// Entrances ignore the dice but require both the entrance and its partner to
/// be free. Granny cells are never enterable. Every other destination must be
/// free and within `dice_value` Manhattan steps. A police unit standing on an
/// exit arrests rather than lets through.
pub fn classify_move(state: &GameState, player: &Player, dest: Position) -> Option<MoveKind> {
    if !player.is_live() {
        return None;
    }
    let cell = state.grid.get(dest)?;
    if cell.is_occupied() || cell.kind() == CellType::Granny {
        return None;
    }

    if cell.kind() == CellType::Entrance {
        if let Some(link) = cell.connected_to {
            let link_free = state.grid.get(link).is_some_and(|c| !c.is_occupied());
            return link_free.then_some(MoveKind::Shortcut { to: link });
        }
    }

    if player.position.distance(dest) > u32::from(state.dice_value) {
        return None;
    }

    if cell.kind() == CellType::Police {
        Some(MoveKind::Arrest)
    } else if state.is_exit(dest) {
        Some(MoveKind::Escape)
    } else {
        Some(MoveKind::Step)
    }
}

/// All legal destinations for `player`, row-major, paired with their kind.
pub fn legal_moves(state: &GameState, player: &Player) -> Vec<(Position, MoveKind)> {
    state
        .grid
        .cells()
        .filter_map(|c| classify_move(state, player, c.position).map(|k| (c.position, k)))
        .collect()
}

/// Legal destinations of the active meeple, if one is selected.
pub fn active_destinations(state: &GameState) -> Vec<Position> {
    let Some(player) = state.active_meeple.and_then(|id| state.player(id)) else {
        return Vec::new();
    };
    legal_moves(state, player).into_iter().map(|(p, _)| p).collect()
}
