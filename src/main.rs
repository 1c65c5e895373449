//! Getaway engine driven by a line-based text protocol.
//!
//! Reads commands from stdin and writes responses to stdout. Logs go to
//! stderr, filtered by `RUST_LOG` (default `warn`).

use std::io::{self, BufRead};

use getaway::engine::Engine;
use getaway::protocol::parser::{parse_command, Command, ParseError};
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = line?;

        let cmd = match parse_command(&line) {
            Ok(c) => c,
            Err(ParseError::Empty) => continue,
            Err(e) => {
                warn!(line = %line, "{}", e);
                continue;
            }
        };

        match cmd {
            Command::IsReady => engine.handle_isready(&mut out)?,
            Command::SetOption { name, value } => {
                if let Err(e) = engine.set_option(name, value) {
                    warn!("{}", e);
                }
            }
            Command::Action(action) => engine.handle_action(&action, &mut out)?,
            Command::Moves => engine.handle_moves(&mut out)?,
            Command::Board => engine.handle_board(&mut out)?,
            Command::State => engine.handle_state(&mut out)?,
            Command::Quit => break,
        }
    }
    Ok(())
}
