//! End-of-game detection and winner selection.

use crate::board::{GameState, GameStatus, Team, ALL_TEAMS};
use crate::protocol::Event;

/// Teams with at least one live player, in roster order.
pub fn live_teams(state: &GameState) -> Vec<Team> {
    let mut teams = Vec::new();
    for p in state.live_players() {
        if !teams.contains(&p.team()) {
            teams.push(p.team());
        }
    }
    teams
}

/// Team with the most escapes.
///
/// Scans teams in enumeration order and only replaces the leader on a
/// strictly higher count, so ties go to the earlier team and a game with no
/// escapes has no winner.
pub fn winner(state: &GameState) -> Option<Team> {
    let counts = state.escaped_counts();
    let mut best = 0;
    let mut winner = None;
    for team in ALL_TEAMS {
        if counts[team.index()] > best {
            best = counts[team.index()];
            winner = Some(team);
        }
    }
    winner
}

/// Ends the game once nobody is left on the board. Returns true if this call
/// ended it.
pub fn evaluate(state: &mut GameState, events: &mut Vec<Event>) -> bool {
    if state.status != GameStatus::Playing || state.players.is_empty() {
        return false;
    }
    if !live_teams(state).is_empty() {
        return false;
    }
    end_game(state, events);
    true
}

/// Marks the game ended and records the winner.
pub fn end_game(state: &mut GameState, events: &mut Vec<Event>) {
    state.status = GameStatus::Ended;
    state.winner = winner(state);
    events.push(Event::GameEnded { winner: state.winner });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Player, PlayerId, Position};

    fn roster(teams: &[Team]) -> GameState {
        let mut state = GameState::setup();
        state.status = GameStatus::Playing;
        for &team in teams {
            for i in 0..2 {
                state.players.push(Player::new(PlayerId::new(team, i), Position::new(0, 0)));
            }
        }
        state
    }

    #[test]
    fn game_continues_while_anyone_is_live() {
        let mut state = roster(&[Team::Gang, Team::Politicians]);
        for p in state.players.iter_mut().take(3) {
            p.escaped = true;
        }
        let mut events = Vec::new();
        assert!(!evaluate(&mut state, &mut events));
        assert_eq!(live_teams(&state), vec![Team::Politicians]);
        assert_eq!(state.status, GameStatus::Playing);
    }

    #[test]
    fn most_escapes_wins() {
        let mut state = roster(&[Team::Gang, Team::Politicians]);
        state.players[0].arrested = true;
        state.players[1].escaped = true;
        state.players[2].escaped = true;
        state.players[3].escaped = true;
        let mut events = Vec::new();
        assert!(evaluate(&mut state, &mut events));
        assert_eq!(state.status, GameStatus::Ended);
        assert_eq!(state.winner, Some(Team::Politicians));
        assert_eq!(events, vec![Event::GameEnded { winner: Some(Team::Politicians) }]);
    }

    #[test]
    fn ties_go_to_enumeration_order() {
        // Roster order puts Cartel first, but Mafia comes first in enumeration.
        let mut state = roster(&[Team::Cartel, Team::Mafia]);
        for p in &mut state.players {
            p.escaped = true;
        }
        assert_eq!(winner(&state), Some(Team::Mafia));
    }

    #[test]
    fn no_escapes_no_winner() {
        let mut state = roster(&[Team::Gang]);
        for p in &mut state.players {
            p.arrested = true;
        }
        let mut events = Vec::new();
        assert!(evaluate(&mut state, &mut events));
        assert_eq!(state.winner, None);
    }
}
