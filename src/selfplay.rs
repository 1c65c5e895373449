//! Self-play game generation.
//!
//! Plays complete games with a greedy policy for every team, exercising the
//! reducer end to end. Each game is seeded from `seed + game_id`, so a record
//! can be replayed exactly. Records are written as JSONL.

use std::collections::BTreeMap;
use std::io::Write;
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{info, warn};

use crate::board::{CellType, GameState, GameStatus, PlayerId, Position, Team, ALL_TEAMS};
use crate::cards::NoCards;
use crate::engine::reduce;
use crate::movegen::{team_moves, MoveKind};
use crate::protocol::Action;

/// Configuration for self-play game generation.
#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Teams selected in addition to the default pair.
    pub teams: Vec<Team>,
    /// `NEXT_TURN` cap before a game is abandoned.
    pub max_turns: usize,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Base seed; game `i` uses `seed + i`.
    pub seed: u64,
    /// Suppress per-game progress output.
    pub quiet: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 10,
            teams: Vec::new(),
            max_turns: 500,
            threads: 4,
            seed: 0,
            quiet: false,
        }
    }
}

/// Outcome of one self-played game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub game_id: usize,
    pub seed: u64,
    pub teams: Vec<Team>,
    pub winner: Option<Team>,
    pub status: GameStatus,
    /// Laps completed, as counted by the engine.
    pub turn_count: u32,
    /// `NEXT_TURN` actions issued.
    pub turns_played: usize,
    pub escaped: BTreeMap<Team, usize>,
    pub arrested: BTreeMap<Team, usize>,
    pub events: usize,
}

/// Ranks a candidate move; lower is better.
fn move_score(state: &GameState, dest: Position, kind: MoveKind) -> (bool, bool, bool, u32) {
    let landing = match kind {
        MoveKind::Shortcut { to } => to,
        _ => dest,
    };
    let near_police = landing
        .neighbors()
        .into_iter()
        .any(|n| state.grid.kind(n) == Some(CellType::Police));
    let exit_distance = state
        .exits
        .iter()
        .map(|&e| landing.distance(e))
        .min()
        .unwrap_or(u32::MAX);
    (
        kind != MoveKind::Escape,
        kind == MoveKind::Arrest,
        near_police,
        exit_distance,
    )
}

/// Best move for the current team, if it has one.
pub fn greedy_move(state: &GameState) -> Option<(PlayerId, Position)> {
    team_moves(state)
        .into_iter()
        .min_by_key(|&(_, dest, kind)| move_score(state, dest, kind))
        .map(|(id, dest, _)| (id, dest))
}

fn apply(state: &mut GameState, action: Action, rng: &mut SmallRng, events: &mut usize) {
    let t = reduce(state, &action, rng, &NoCards);
    *events += t.events.len();
    *state = t.state;
}

fn per_team(counts: [usize; crate::board::TEAM_COUNT], teams: &[Team]) -> BTreeMap<Team, usize> {
    teams.iter().map(|&t| (t, counts[t.index()])).collect()
}

/// Plays a single game to completion or to the turn cap.
pub fn play_game(config: &SelfPlayConfig, game_id: usize) -> GameRecord {
    let seed = config.seed.wrapping_add(game_id as u64);
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut state = GameState::setup();
    let mut events = 0;
    let mut turns_played = 0;

    apply(&mut state, Action::StartGame { teams: config.teams.clone() }, &mut rng, &mut events);
    while state.status == GameStatus::Playing && turns_played < config.max_turns {
        apply(&mut state, Action::RollDice, &mut rng, &mut events);
        if let Some((player_id, position)) = greedy_move(&state) {
            apply(&mut state, Action::SelectMeeple { player_id }, &mut rng, &mut events);
            apply(&mut state, Action::MovePlayer { position }, &mut rng, &mut events);
        }
        if state.status != GameStatus::Playing {
            break;
        }
        apply(&mut state, Action::NextTurn, &mut rng, &mut events);
        turns_played += 1;
    }

    let teams = state.teams();
    GameRecord {
        game_id,
        seed,
        winner: state.winner,
        status: state.status,
        turn_count: state.turn_count,
        turns_played,
        escaped: per_team(state.escaped_counts(), &teams),
        arrested: per_team(state.arrested_counts(), &teams),
        teams,
        events,
    }
}

fn log_game(config: &SelfPlayConfig, game: &GameRecord, started: Instant) {
    if config.quiet {
        return;
    }
    let outcome = match game.winner {
        Some(w) => format!("{} wins", w),
        None => "no winner".to_string(),
    };
    info!(
        game = game.game_id + 1,
        of = config.num_games,
        outcome = %outcome,
        turns = game.turns_played,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "game finished"
    );
}

/// Runs self-play generation, returning records ordered by game id.
///
/// When `config.threads > 1`, games are played concurrently using rayon.
pub fn run_self_play(config: &SelfPlayConfig) -> Vec<GameRecord> {
    if config.threads > 1 {
        match rayon::ThreadPoolBuilder::new().num_threads(config.threads).build() {
            Ok(pool) => return run_self_play_parallel(config, &pool),
            Err(e) => warn!(error = %e, "thread pool unavailable, playing sequentially"),
        }
    }
    run_self_play_sequential(config)
}

fn run_self_play_sequential(config: &SelfPlayConfig) -> Vec<GameRecord> {
    (0..config.num_games)
        .map(|i| {
            let started = Instant::now();
            let game = play_game(config, i);
            log_game(config, &game, started);
            game
        })
        .collect()
}

fn run_self_play_parallel(config: &SelfPlayConfig, pool: &rayon::ThreadPool) -> Vec<GameRecord> {
    use rayon::prelude::*;

    pool.install(|| {
        (0..config.num_games)
            .into_par_iter()
            .map(|i| {
                let started = Instant::now();
                let game = play_game(config, i);
                log_game(config, &game, started);
                game
            })
            .collect()
    })
}

/// Writes game records as JSONL (one JSON object per game, one per line).
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> std::io::Result<()> {
    for game in games {
        serde_json::to_writer(&mut *out, game)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Logs aggregate results.
pub fn log_summary(games: &[GameRecord]) {
    let total = games.len();
    let mut win_counts = [0usize; crate::board::TEAM_COUNT];
    let mut no_winner = 0usize;
    let mut capped = 0usize;
    let mut total_turns = 0usize;

    for game in games {
        total_turns += game.turns_played;
        match game.winner {
            Some(w) => win_counts[w.index()] += 1,
            None => no_winner += 1,
        }
        if game.status == GameStatus::Playing {
            capped += 1;
        }
    }

    info!(
        games = total,
        avg_turns = %format!("{:.1}", total_turns as f64 / total.max(1) as f64),
        no_winner,
        capped,
        "self-play summary"
    );
    for team in ALL_TEAMS {
        let wins = win_counts[team.index()];
        let pct = 100.0 * wins as f64 / total.max(1) as f64;
        info!(team = %team, wins, pct = %format!("{:.1}", pct), "win distribution");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(num_games: usize, threads: usize) -> SelfPlayConfig {
        SelfPlayConfig {
            num_games,
            max_turns: 200,
            threads,
            seed: 42,
            quiet: true,
            ..Default::default()
        }
    }

    #[test]
    fn play_single_game_completes() {
        let game = play_game(&config(1, 1), 0);
        assert!(game.turns_played <= 200);
        assert!(game.events > 0);
        assert_eq!(game.teams, vec![Team::Gang, Team::Politicians]);
        let resolved: usize = game.escaped.values().sum::<usize>() + game.arrested.values().sum::<usize>();
        if game.status == GameStatus::Ended {
            assert_eq!(resolved, 10);
        }
    }

    #[test]
    fn games_replay_from_seed() {
        let cfg = config(1, 1);
        assert_eq!(play_game(&cfg, 3), play_game(&cfg, 3));
    }

    #[test]
    fn parallel_matches_sequential() {
        let seq = run_self_play(&config(4, 1));
        let par = run_self_play(&config(4, 2));
        assert_eq!(seq, par);
        let ids: Vec<usize> = par.iter().map(|g| g.game_id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn greedy_prefers_escape() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut state =
            reduce(&GameState::setup(), &Action::StartGame { teams: vec![] }, &mut rng, &NoCards).state;
        let exit = Position::new(0, 5);
        let id = PlayerId::new(Team::Gang, 0);
        let from = state.player(id).unwrap().position;
        state.vacate(from);
        state.players[0].position = Position::new(1, 5);
        state.occupy(Position::new(1, 5), id);
        state.dice_value = 1;
        let (_, dest) = greedy_move(&state).unwrap();
        assert!(state.is_exit(dest));
        assert!(team_moves(&state).contains(&(id, exit, MoveKind::Escape)));
    }

    #[test]
    fn write_jsonl_one_line_per_game() {
        let games = run_self_play(&config(2, 1));
        let mut out = Vec::new();
        write_jsonl(&games, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let parsed: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed["game_id"], 0);
        assert_eq!(parsed["seed"], 42);
        assert!(parsed["escaped"]["gang"].is_number());
    }
}
