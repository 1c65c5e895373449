//! Granny wandering.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{GameState, Position};

/// Moves each granny, in list order, to a random free neighboring path cell.
/// Grannies with nowhere to go stay put. Returns how many moved.
pub fn step(state: &mut GameState, rng: &mut impl Rng) -> usize {
    let mut moved = 0;
    for i in 0..state.grannies.len() {
        let from = state.grannies[i];
        let options: Vec<Position> = from
            .neighbors()
            .into_iter()
            .filter(|&n| state.grid.get(n).is_some_and(|c| c.is_open_path()))
            .collect();
        if let Some(&to) = options.choose(rng) {
            state.move_granny(i, to);
            moved += 1;
        }
    }
    moved
}
