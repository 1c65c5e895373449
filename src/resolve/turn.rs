//! Turn sequencing.
//!
//! Determines which meeple's team plays next. Turn order follows the roster;
//! a lap completes, and the turn counter advances, whenever the scan wraps
//! back past the current index.

use crate::board::GameState;

/// Outcome of looking for the next team to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextTurn {
    /// `index` takes the turn; `lap` is true if the scan wrapped.
    Advance { index: usize, lap: bool },
    /// No live player remains.
    Exhausted,
}

/// Finds the next live player belonging to a different team than the current
/// one. If no other team has anyone left, the current team keeps playing with
/// its next live player.
pub fn next_turn(state: &GameState) -> NextTurn {
    let n = state.players.len();
    if n == 0 {
        return NextTurn::Exhausted;
    }
    let current = state.current_player.min(n - 1);
    let team = state.players[current].team();
    let scan = |k: usize| (current + k) % n;

    let other = (1..n)
        .map(scan)
        .find(|&j| state.players[j].team() != team && state.players[j].is_live());
    let same = || {
        (1..=n)
            .map(scan)
            .find(|&j| state.players[j].team() == team && state.players[j].is_live())
    };

    match other.or_else(same) {
        Some(index) => NextTurn::Advance { index, lap: index <= current },
        None => NextTurn::Exhausted,
    }
}
