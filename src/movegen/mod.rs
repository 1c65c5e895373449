//! Legal move generation.
//!
//! Decides whether a destination is legal for the selected meeple and
//! enumerates the legal options for the current team.

pub mod movement;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{GameState, GameStatus, PlayerId, Position};

pub use movement::{active_destinations, classify_move, legal_moves, MoveKind};

/// Every legal (meeple, destination, kind) for the team whose turn it is.
pub fn team_moves(state: &GameState) -> Vec<(PlayerId, Position, MoveKind)> {
    let Some(team) = state.current_team() else {
        return Vec::new();
    };
    if state.status != GameStatus::Playing {
        return Vec::new();
    }
    let mut moves = Vec::new();
    for player in state.live_players().filter(|p| p.team() == team) {
        for (dest, kind) in legal_moves(state, player) {
            moves.push((player.id, dest, kind));
        }
    }
    moves
}

/// Picks one legal move for the current team uniformly at random.
pub fn random_move(state: &GameState, rng: &mut impl Rng) -> Option<(PlayerId, Position)> {
    team_moves(state).choose(rng).map(|&(id, dest, _)| (id, dest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Team;
    use crate::mapgen::generate;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn team_moves_belong_to_current_team() {
        let mut rng = SmallRng::seed_from_u64(9);
        let mut state = generate(&[Team::Mafia], &mut rng);
        state.dice_value = 4;
        let moves = team_moves(&state);
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|(id, _, _)| id.team == Team::Gang));
    }

    #[test]
    fn random_move_is_legal() {
        let mut rng = SmallRng::seed_from_u64(21);
        let mut state = generate(&[], &mut rng);
        state.dice_value = 2;
        let (id, dest) = random_move(&state, &mut rng).unwrap();
        let player = state.player(id).unwrap();
        assert!(classify_move(&state, player, dest).is_some());
    }

    #[test]
    fn setup_board_has_no_moves() {
        assert!(team_moves(&GameState::setup()).is_empty());
    }
}
