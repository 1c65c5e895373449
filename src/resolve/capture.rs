//! Arrests.
//!
//! Every arrest path (walking onto police, police walking onto a meeple,
//! external triggers) goes through [`arrest`] so the flags, the grid, and the
//! jail list never drift apart.

use crate::board::GameState;
use crate::protocol::Event;

/// Arrests the player at `idx`: sets the flag, clears their cell, and appends
/// them to the jail. Returns false if the player was already resolved.
pub fn arrest(state: &mut GameState, idx: usize, events: &mut Vec<Event>) -> bool {
    let Some(player) = state.players.get_mut(idx) else {
        return false;
    };
    if !player.is_live() {
        return false;
    }
    player.arrested = true;
    let jailed = player.clone();

    state.vacate(jailed.position);
    events.push(Event::PlayerCaught { player_id: jailed.id, at: jailed.position });
    state.jailed.push(jailed);
    true
}

/// Arrests every live player standing on a police position. Returns the
/// number of arrests.
pub fn capture_sweep(state: &mut GameState, events: &mut Vec<Event>) -> usize {
    let caught: Vec<usize> = state
        .players
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_live() && state.police.contains(&p.position))
        .map(|(i, _)| i)
        .collect();

    caught.into_iter().filter(|&i| arrest(state, i, events)).count()
}
