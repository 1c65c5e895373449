//! Police pursuit.
//!
//! Each officer takes one greedy step toward the closest live meeple. Officers
//! move in list order and block each other; arrests are settled once everyone
//! has moved.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use crate::board::{CellType, GameState, Player, Position};
use crate::protocol::Event;
use crate::resolve::capture::capture_sweep;

/// Closest live player by Manhattan distance; the first in roster order wins
/// ties.
pub fn nearest_target(state: &GameState, from: Position) -> Option<&Player> {
    state
        .live_players()
        .fold(None, |best: Option<&Player>, p| match best {
            Some(b) if b.position.distance(from) <= p.position.distance(from) => Some(b),
            _ => Some(p),
        })
}

/// Whether an officer may step onto `pos`. Entrances and grannies block, as
/// does any cell an officer held at the start of the tick or has moved into.
fn can_enter(state: &GameState, pos: Position, moved: &[Position], at_start: &[Position]) -> bool {
    match state.grid.kind(pos) {
        None | Some(CellType::Entrance) | Some(CellType::Granny) => false,
        Some(_) => !moved.contains(&pos) && !at_start.contains(&pos),
    }
}

/// Moves every officer one step and arrests anyone they land on. Returns the
/// number of arrests.
pub fn step(state: &mut GameState, rng: &mut impl Rng, events: &mut Vec<Event>) -> usize {
    let at_start = state.police.clone();
    let mut moved: Vec<Position> = Vec::with_capacity(at_start.len());

    for (i, &from) in at_start.iter().enumerate() {
        let mut to = from;
        if let Some(target) = nearest_target(state, from) {
            let candidates: Vec<Position> = from
                .steps_toward(target.position)
                .into_iter()
                .filter(|&p| can_enter(state, p, &moved, &at_start))
                .collect();
            if let Some(&choice) = candidates.choose(rng) {
                trace!(officer = i, %from, to = %choice, target = %target.id, "police step");
                to = choice;
            }
        }
        state.move_police(i, to);
        moved.push(to);
    }

    events.push(Event::PoliceMoved { count: state.police.len() });
    capture_sweep(state, events)
}
