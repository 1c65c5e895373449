//! Threat escalation.
//!
//! Runs after the police step of every `NextTurn`. Each rule keys off the
//! turn counter independently, so a single tick can spawn police, spawn
//! grannies, and move grannies at once.

use rand::Rng;
use tracing::debug;

use crate::ai::granny;
use crate::board::layout::{
    GRANNY_MOVE_CADENCE, GRANNY_SPAWN_CADENCE, GRANNY_SPAWN_COUNT, POLICE_SPAWN_CADENCE,
    POLICE_SPAWN_COUNT,
};
use crate::board::{GameState, Position};
use crate::mapgen::take_random;
use crate::protocol::Event;

use super::capture::capture_sweep;

/// What a tick will do at a given turn count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Schedule {
    pub spawn_police: bool,
    pub spawn_grannies: bool,
    pub move_grannies: bool,
}

impl Schedule {
    pub fn at(turn_count: u32) -> Schedule {
        if turn_count == 0 {
            return Schedule::default();
        }
        Schedule {
            spawn_police: turn_count % POLICE_SPAWN_CADENCE == 0,
            spawn_grannies: turn_count % GRANNY_SPAWN_CADENCE == 0,
            move_grannies: turn_count % GRANNY_MOVE_CADENCE == 0,
        }
    }
}

/// Adds up to `count` police on random open path cells, then arrests anyone
/// they landed on. Returns the new positions.
pub fn spawn_police(
    state: &mut GameState,
    count: usize,
    rng: &mut impl Rng,
    events: &mut Vec<Event>,
) -> Vec<Position> {
    let mut pool = state.open_path_cells();
    let placed = take_random(&mut pool, count, rng);
    for &pos in &placed {
        state.add_police(pos);
    }
    if !placed.is_empty() {
        events.push(Event::PoliceSpawned { positions: placed.clone() });
        capture_sweep(state, events);
    }
    placed
}

/// Adds up to `count` grannies on random open path cells.
pub fn spawn_grannies(
    state: &mut GameState,
    count: usize,
    rng: &mut impl Rng,
    events: &mut Vec<Event>,
) -> Vec<Position> {
    let mut pool = state.open_path_cells();
    let placed = take_random(&mut pool, count, rng);
    for &pos in &placed {
        state.add_granny(pos);
    }
    if !placed.is_empty() {
        events.push(Event::GranniesSpawned { positions: placed.clone() });
    }
    placed
}

/// Applies the schedule for the current turn count.
pub fn escalate(state: &mut GameState, rng: &mut impl Rng, events: &mut Vec<Event>) {
    let schedule = Schedule::at(state.turn_count);
    if schedule == Schedule::default() {
        return;
    }
    debug!(turn = state.turn_count, ?schedule, "escalation tick");

    if schedule.spawn_police {
        spawn_police(state, POLICE_SPAWN_COUNT, rng, events);
    }
    if schedule.spawn_grannies {
        spawn_grannies(state, GRANNY_SPAWN_COUNT, rng, events);
    }
    if schedule.move_grannies {
        let count = granny::step(state, rng);
        events.push(Event::GranniesMoved { count });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CellType;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn schedule_cadences() {
        assert_eq!(Schedule::at(0), Schedule::default());
        assert_eq!(Schedule::at(1), Schedule::default());
        assert!(Schedule::at(2).move_grannies);
        assert!(Schedule::at(3).spawn_police);
        assert!(Schedule::at(5).spawn_grannies);
        let all = Schedule::at(30);
        assert!(all.spawn_police && all.spawn_grannies && all.move_grannies);
        let both = Schedule::at(15);
        assert!(both.spawn_police && both.spawn_grannies && !both.move_grannies);
    }

    #[test]
    fn tick_fifteen_spawns_police_and_grannies() {
        let mut rng = SmallRng::seed_from_u64(2);
        let mut state = GameState::setup();
        state.turn_count = 15;
        let mut events = Vec::new();
        escalate(&mut state, &mut rng, &mut events);
        assert_eq!(state.police.len(), 5);
        assert_eq!(state.grannies.len(), 3);
        for &p in &state.police {
            assert_eq!(state.grid.kind(p), Some(CellType::Police));
        }
    }

    #[test]
    fn spawn_is_capped_by_free_cells() {
        let mut rng = SmallRng::seed_from_u64(2);
        let mut state = GameState::setup();
        let mut events = Vec::new();
        // Fill all but three cells.
        let free: Vec<Position> = state.open_path_cells();
        for &p in &free[3..] {
            state.add_granny(p);
        }
        let placed = spawn_police(&mut state, 5, &mut rng, &mut events);
        assert_eq!(placed.len(), 3);
        assert!(state.open_path_cells().is_empty());
        let placed = spawn_grannies(&mut state, 3, &mut rng, &mut events);
        assert!(placed.is_empty());
    }
}
