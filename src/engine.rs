//! Turn engine.
//!
//! [`reduce`] is the whole game: a pure function from a state snapshot and one
//! [`Action`] to the next snapshot plus the events it produced. Actions that do
//! not apply in the current state come back as the unchanged snapshot with no
//! events. [`Engine`] wraps the reducer with a seeded generator, a card
//! handler, and the option map used by the command loop.

use std::collections::HashMap;
use std::io::Write;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::ai::police;
use crate::board::{GameState, GameStatus, PlayerId, Position, Team};
use crate::cards::{CardHandler, NoCards};
use crate::mapgen;
use crate::movegen::{active_destinations, classify_move, MoveKind};
use crate::protocol::notation::encode_board;
use crate::protocol::{Action, Event};
use crate::resolve::{arrest, escalate, next_turn, NextTurn};
use crate::resolve::win::{end_game, evaluate};

/// Result of applying one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: GameState,
    pub events: Vec<Event>,
}

impl Transition {
    fn unchanged(state: &GameState) -> Self {
        Transition { state: state.clone(), events: Vec::new() }
    }
}

type Outcome = Option<(GameState, Vec<Event>)>;

/// Applies `action` to `state`.
pub fn reduce(
    state: &GameState,
    action: &Action,
    rng: &mut impl Rng,
    cards: &dyn CardHandler,
) -> Transition {
    let outcome = match action {
        Action::StartGame { teams } => Some(start_game(teams, rng, cards)),
        Action::RollDice => roll_dice(state, rng),
        Action::SelectMeeple { player_id } => select_meeple(state, *player_id),
        Action::MovePlayer { position } => move_player(state, *position),
        Action::NextTurn => advance_turn(state, rng),
        Action::ResetGame => Some((GameState::setup(), vec![Event::GameReset])),
        Action::PlayerCaught { player_id } => player_caught(state, *player_id),
        Action::PlayCard { team, card } => play_card(state, *team, *card, rng, cards),
    };
    match outcome {
        Some((state, events)) => Transition { state, events },
        None => Transition::unchanged(state),
    }
}

fn start_game(teams: &[Team], rng: &mut impl Rng, cards: &dyn CardHandler) -> (GameState, Vec<Event>) {
    let mut state = mapgen::generate(teams, rng);
    for team in state.teams() {
        let hand = cards.deal(team, &mut *rng);
        state.hands.insert(team, hand);
    }
    let teams = state.teams();
    info!(teams = ?teams, "game started");
    (state, vec![Event::GameStarted { teams }])
}

fn roll_dice(state: &GameState, rng: &mut impl Rng) -> Outcome {
    if state.status != GameStatus::Playing {
        return None;
    }
    let value = rng.gen_range(1..=6);
    let mut next = state.clone();
    next.dice_value = value;
    Some((next, vec![Event::DiceRolled { value }]))
}

fn select_meeple(state: &GameState, id: PlayerId) -> Outcome {
    if state.status != GameStatus::Playing {
        return None;
    }
    let player = state.player(id)?;
    if Some(player.team()) != state.current_team() || !player.is_live() {
        return None;
    }
    let mut next = state.clone();
    next.active_meeple = Some(id);
    Some((next, vec![Event::MeepleSelected { player_id: id }]))
}

fn move_player(state: &GameState, dest: Position) -> Outcome {
    if state.status != GameStatus::Playing {
        return None;
    }
    let id = state.active_meeple?;
    let idx = state.player_index(id)?;
    let from = state.players[idx].position;
    let kind = classify_move(state, &state.players[idx], dest)?;

    let mut next = state.clone();
    let mut events = Vec::new();
    match kind {
        MoveKind::Arrest => {
            arrest(&mut next, idx, &mut events);
        }
        MoveKind::Escape => {
            next.vacate(from);
            let player = &mut next.players[idx];
            player.position = dest;
            player.escaped = true;
            events.push(Event::PlayerEscaped { player_id: id, exit: dest });
        }
        MoveKind::Step => {
            next.vacate(from);
            next.players[idx].position = dest;
            next.occupy(dest, id);
            events.push(Event::PlayerMoved { player_id: id, from, to: dest });
        }
        MoveKind::Shortcut { to } => {
            next.vacate(from);
            next.players[idx].position = to;
            next.occupy(to, id);
            events.push(Event::ShortcutUsed { player_id: id, from, to });
        }
    }

    next.active_meeple = None;
    next.dice_value = 0;
    evaluate(&mut next, &mut events);
    Some((next, events))
}

fn advance_turn(state: &GameState, rng: &mut impl Rng) -> Outcome {
    if state.status != GameStatus::Playing {
        return None;
    }
    let mut next = state.clone();
    let mut events = Vec::new();
    next.active_meeple = None;
    next.dice_value = 0;

    match next_turn(state) {
        NextTurn::Exhausted => {
            end_game(&mut next, &mut events);
            return Some((next, events));
        }
        NextTurn::Advance { index, lap } => {
            next.current_player = index;
            if lap {
                next.turn_count += 1;
            }
            let player = &next.players[index];
            events.push(Event::TurnPassed {
                player_id: player.id,
                team: player.team(),
                turn_count: next.turn_count,
            });
        }
    }

    police::step(&mut next, rng, &mut events);
    escalate(&mut next, rng, &mut events);
    evaluate(&mut next, &mut events);
    Some((next, events))
}

fn player_caught(state: &GameState, id: PlayerId) -> Outcome {
    let idx = state.player_index(id)?;
    let mut next = state.clone();
    let mut events = Vec::new();
    if !arrest(&mut next, idx, &mut events) {
        return None;
    }
    next.active_meeple = None;
    evaluate(&mut next, &mut events);
    Some((next, events))
}

fn play_card(
    state: &GameState,
    team: Team,
    index: usize,
    rng: &mut impl Rng,
    cards: &dyn CardHandler,
) -> Outcome {
    if state.status != GameStatus::Playing || state.current_team() != Some(team) {
        return None;
    }
    let card = state.hands.get(&team)?.get(index)?;
    if !card.playable_by(team) {
        return None;
    }

    let mut next = cards.play(state, team, card, &mut *rng)?;
    if let Some(played) = next.hands.get_mut(&team).and_then(|hand| hand.get_mut(index)) {
        played.used = true;
    }
    let mut events = vec![Event::CardPlayed { team, card_id: card.id }];
    evaluate(&mut next, &mut events);
    Some((next, events))
}

/// Errors from `setoption`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionError {
    #[error("invalid seed value: '{0}'")]
    InvalidSeed(String),
}

/// Holds the live game between commands.
pub struct Engine {
    pub state: GameState,
    pub options: HashMap<String, String>,
    rng: SmallRng,
    cards: Box<dyn CardHandler + Send + Sync>,
}

impl Engine {
    /// Creates an engine on the setup board, seeded from entropy.
    pub fn new() -> Self {
        Engine::from_rng(SmallRng::from_entropy())
    }

    /// Creates an engine whose games replay exactly for the same seed.
    pub fn with_seed(seed: u64) -> Self {
        Engine::from_rng(SmallRng::seed_from_u64(seed))
    }

    fn from_rng(rng: SmallRng) -> Self {
        Engine {
            state: GameState::setup(),
            options: HashMap::new(),
            rng,
            cards: Box::new(NoCards),
        }
    }

    /// Replaces the card handler.
    pub fn with_cards(mut self, cards: impl CardHandler + Send + Sync + 'static) -> Self {
        self.cards = Box::new(cards);
        self
    }

    /// Applies one action and returns the events it produced.
    pub fn dispatch(&mut self, action: &Action) -> Vec<Event> {
        let Transition { state, events } = reduce(&self.state, action, &mut self.rng, self.cards.as_ref());
        debug!(?action, events = events.len(), status = ?state.status, "dispatched");
        self.state = state;
        events
    }

    /// Sets an engine option. `Seed` reseeds the generator; anything else is
    /// stored as-is. An unparseable seed leaves the generator untouched.
    pub fn set_option(&mut self, name: String, value: Option<String>) -> Result<(), OptionError> {
        if name.eq_ignore_ascii_case("seed") {
            let raw = value.clone().unwrap_or_default();
            let seed = raw.parse::<u64>().map_err(|_| OptionError::InvalidSeed(raw))?;
            self.rng = SmallRng::seed_from_u64(seed);
        }
        self.options.insert(name, value.unwrap_or_default());
        Ok(())
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    /// Dispatches an action and writes one `event` line per event, then `ok`.
    pub fn handle_action<W: Write>(&mut self, action: &Action, out: &mut W) -> std::io::Result<()> {
        for event in self.dispatch(action) {
            writeln!(out, "event {}", serde_json::to_string(&event)?)?;
        }
        writeln!(out, "ok")?;
        out.flush()
    }

    /// Writes the board notation followed by `boardok`.
    pub fn handle_board<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for line in encode_board(&self.state) {
            writeln!(out, "{}", line)?;
        }
        writeln!(out, "boardok")?;
        out.flush()
    }

    /// Writes the full state as a single JSON line.
    pub fn handle_state<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "state {}", serde_json::to_string(&self.state)?)?;
        out.flush()
    }

    /// Writes the legal destinations of the active meeple.
    pub fn handle_moves<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let moves: Vec<String> = active_destinations(&self.state).iter().map(|p| p.to_string()).collect();
        if moves.is_empty() {
            writeln!(out, "moves")?;
        } else {
            writeln!(out, "moves {}", moves.join(" "))?;
        }
        out.flush()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}
