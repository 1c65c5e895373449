//! Self-play game generation CLI.
//!
//! Plays games with the greedy policy and outputs one JSON record per game.
//!
//! Usage:
//!   cargo run --release --bin selfplay -- [OPTIONS]
//!
//! Options:
//!   --games N        Number of games to play (default: 10)
//!   --teams LIST     Extra teams, comma separated (default: none)
//!   --max-turns N    Turn cap per game (default: 500)
//!   --threads N      Number of parallel threads (default: 4)
//!   --seed N         Base seed; game i uses seed + i (default: 0)
//!   --output FILE    Output file path (default: stdout)
//!   --quiet          Suppress progress and summary output

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::process;
use std::str::FromStr;
use std::time::Instant;

use getaway::board::Team;
use getaway::selfplay::{self, SelfPlayConfig};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

fn parse_value<T: FromStr>(args: &[String], i: usize, flag: &str) -> T {
    match args.get(i).map(|s| s.parse::<T>()) {
        Some(Ok(v)) => v,
        _ => {
            eprintln!("invalid {} value", flag);
            print_usage();
            process::exit(1);
        }
    }
}

fn parse_teams(raw: &str) -> Vec<Team> {
    raw.split(',')
        .filter(|s| !s.is_empty())
        .map(|name| {
            Team::from_name(name).unwrap_or_else(|| {
                eprintln!("unknown team: {}", name);
                process::exit(1);
            })
        })
        .collect()
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = SelfPlayConfig::default();
    let mut output_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => {
                i += 1;
                config.num_games = parse_value(&args, i, "--games");
            }
            "--teams" => {
                i += 1;
                let raw: String = parse_value(&args, i, "--teams");
                config.teams = parse_teams(&raw);
            }
            "--max-turns" => {
                i += 1;
                config.max_turns = parse_value(&args, i, "--max-turns");
            }
            "--threads" => {
                i += 1;
                config.threads = parse_value(&args, i, "--threads");
            }
            "--seed" => {
                i += 1;
                config.seed = parse_value(&args, i, "--seed");
            }
            "--output" => {
                i += 1;
                output_path = Some(parse_value(&args, i, "--output"));
            }
            "--quiet" => {
                config.quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    let default_level = if config.quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    info!(
        games = config.num_games,
        teams = ?config.teams,
        max_turns = config.max_turns,
        threads = config.threads,
        seed = config.seed,
        "self-play starting"
    );

    let start = Instant::now();
    let games = selfplay::run_self_play(&config);
    let elapsed = start.elapsed();

    info!(
        games = games.len(),
        secs = %format!("{:.1}", elapsed.as_secs_f64()),
        "self-play finished"
    );
    if !config.quiet {
        selfplay::log_summary(&games);
    }

    let written = match &output_path {
        Some(path) => File::create(path)
            .and_then(|file| selfplay::write_jsonl(&games, &mut BufWriter::new(file))),
        None => {
            let stdout = io::stdout();
            selfplay::write_jsonl(&games, &mut BufWriter::new(stdout.lock()))
        }
    };
    match written {
        Ok(()) => {
            if let Some(path) = output_path {
                info!(games = games.len(), path = %path, "wrote records");
            }
        }
        Err(e) => {
            error!(error = %e, "failed to write output");
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: selfplay [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --games N        Number of games to play (default: 10)");
    eprintln!("  --teams LIST     Extra teams, comma separated (default: none)");
    eprintln!("  --max-turns N    Turn cap per game (default: 500)");
    eprintln!("  --threads N      Number of parallel threads (default: 4)");
    eprintln!("  --seed N         Base seed; game i uses seed + i (default: 0)");
    eprintln!("  --output FILE    Output file path (default: stdout)");
    eprintln!("  --quiet          Suppress progress and summary output");
    eprintln!("  --help           Show this help");
}
