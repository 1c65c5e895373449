//! Board generation.
//!
//! Builds a ready-to-play [`GameState`] from a team selection: stamps the
//! landmarks and exits, scatters the rosters, links one entrance pair per
//! landmark where the surroundings allow it, and drops the initial police and
//! grannies. All randomness comes from the caller's generator, so a seeded
//! generator reproduces the same board.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::board::layout::{
    ENTRANCES_PER_LANDMARK, FALLBACK_POSITION, INITIAL_DICE, INITIAL_GRANNIES, INITIAL_POLICE,
};
use crate::board::{
    CellType, GameState, GameStatus, Landmark, Player, PlayerId, Position, Team, Terrain,
    ALL_LANDMARKS, DEFAULT_TEAMS, ROSTER_SIZE,
};

/// Deduplicates the selection and folds in the default teams.
///
/// Order: the default teams first, then the remaining selections in the order
/// given. This is also the roster and turn order.
pub fn merge_teams(selected: &[Team]) -> Vec<Team> {
    let mut teams = DEFAULT_TEAMS.to_vec();
    for &team in selected {
        if !teams.contains(&team) {
            teams.push(team);
        }
    }
    teams
}

/// Generates a new board for the given team selection.
pub fn generate(selected: &[Team], rng: &mut impl Rng) -> GameState {
    let mut state = GameState::setup();

    stamp_landmarks(&mut state);
    for exit in state.exits.clone() {
        state.set_terrain(exit, Terrain::Exit);
    }

    let teams = merge_teams(selected);
    place_players(&mut state, &teams, rng);
    place_entrances(&mut state, rng);

    let mut free: Vec<Position> = state
        .open_path_cells()
        .into_iter()
        .filter(|p| !state.is_exit(*p))
        .collect();
    for pos in take_random(&mut free, INITIAL_POLICE, rng) {
        state.add_police(pos);
    }
    for pos in take_random(&mut free, INITIAL_GRANNIES, rng) {
        state.add_granny(pos);
    }

    state.turn_count = 0;
    state.current_player = 0;
    state.active_meeple = None;
    state.dice_value = INITIAL_DICE;
    state.status = GameStatus::Playing;

    debug!(
        teams = teams.len(),
        players = state.players.len(),
        entrances = state.entrances.len(),
        "board generated"
    );
    state
}

/// Removes up to `n` uniformly chosen positions from `pool`.
pub(crate) fn take_random(pool: &mut Vec<Position>, n: usize, rng: &mut impl Rng) -> Vec<Position> {
    let mut taken = Vec::with_capacity(n.min(pool.len()));
    for _ in 0..n {
        if pool.is_empty() {
            break;
        }
        let idx = rng.gen_range(0..pool.len());
        taken.push(pool.swap_remove(idx));
    }
    taken
}

fn stamp_landmarks(state: &mut GameState) {
    for lm in ALL_LANDMARKS {
        let cells = lm.info().cells();
        for &pos in &cells {
            state.set_terrain(pos, Terrain::Landmark(lm));
        }
        state.landmarks.insert(lm, cells);
    }
}

fn place_players(state: &mut GameState, teams: &[Team], rng: &mut impl Rng) {
    let mut pool: Vec<Position> = state
        .grid
        .cells()
        .filter(|c| c.kind() == CellType::Path)
        .map(|c| c.position)
        .collect();
    pool.shuffle(rng);

    for &team in teams {
        for i in 0..ROSTER_SIZE {
            let id = PlayerId::new(team, i as u8);
            let pos = pool.pop().unwrap_or(FALLBACK_POSITION);
            state.players.push(Player::new(id, pos));
            state.occupy(pos, id);
        }
    }
}

/// Landmark cells bordering an unoccupied path cell. A cell is listed once per
/// qualifying neighbor, so cells with more open sides are likelier picks.
fn entrance_candidates(state: &GameState, landmark: Landmark) -> Vec<Position> {
    let Some(cells) = state.landmarks.get(&landmark) else {
        return Vec::new();
    };
    let mut candidates = Vec::new();
    for &pos in cells {
        let still_landmark = state
            .grid
            .get(pos)
            .is_some_and(|c| c.terrain == Terrain::Landmark(landmark));
        if !still_landmark {
            continue;
        }
        for n in pos.neighbors() {
            if state.grid.get(n).is_some_and(|c| c.is_open_path()) {
                candidates.push(pos);
            }
        }
    }
    candidates
}

fn place_entrances(state: &mut GameState, rng: &mut impl Rng) {
    for lm in ALL_LANDMARKS {
        let mut candidates = entrance_candidates(state, lm);
        candidates.shuffle(rng);

        let mut picked: Vec<Position> = Vec::with_capacity(ENTRANCES_PER_LANDMARK);
        for pos in candidates {
            if !picked.contains(&pos) {
                picked.push(pos);
            }
            if picked.len() == ENTRANCES_PER_LANDMARK {
                break;
            }
        }

        if let [a, b] = picked[..] {
            link_entrances(state, a, b);
            state.entrances.insert(lm, [a, b]);
        } else {
            debug!(landmark = lm.name(), "no room for an entrance pair");
        }
    }
}

fn link_entrances(state: &mut GameState, a: Position, b: Position) {
    for (from, to) in [(a, b), (b, a)] {
        if let Some(cell) = state.grid.get_mut(from) {
            cell.terrain = Terrain::Entrance;
            cell.connected_to = Some(to);
        }
    }
}
