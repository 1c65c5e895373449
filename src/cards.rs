//! Card extension point.
//!
//! The engine owns per-team hands and the `PlayCard` bookkeeping, but card
//! content and effects come from a [`CardHandler`] supplied by the caller.
//! [`NoCards`] deals nothing and resolves nothing.

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::board::{GameState, Team};

/// A card held in a team's hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: u32,
    /// Handler-defined effect key, e.g. `smoke_bomb`.
    pub kind: String,
    pub name: String,
    pub description: String,
    /// Restricts the card to one team when set.
    pub team: Option<Team>,
    pub used: bool,
}

impl Card {
    pub fn new(id: u32, kind: &str, name: &str, description: &str, team: Option<Team>) -> Self {
        Card {
            id,
            kind: kind.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            team,
            used: false,
        }
    }

    /// Unused and not restricted to some other team.
    pub fn playable_by(&self, team: Team) -> bool {
        !self.used && self.team.map_or(true, |t| t == team)
    }
}

/// Supplies card content and resolves card effects.
pub trait CardHandler {
    /// Cards dealt to `team` when a game starts.
    fn deal(&self, team: Team, rng: &mut dyn RngCore) -> Vec<Card> {
        let _ = (team, rng);
        Vec::new()
    }

    /// Applies `card` on behalf of `team`. Returning `None` rejects the play
    /// and leaves the state untouched.
    fn play(&self, state: &GameState, team: Team, card: &Card, rng: &mut dyn RngCore) -> Option<GameState>;
}

/// Handler for games without cards.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCards;

impl CardHandler for NoCards {
    fn play(&self, _state: &GameState, _team: Team, _card: &Card, _rng: &mut dyn RngCore) -> Option<GameState> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn team_restriction() {
        let open = Card::new(1, "smoke_bomb", "Smoke Bomb", "", None);
        let gang_only = Card::new(2, "shiv", "Shiv", "", Some(Team::Gang));
        assert!(open.playable_by(Team::Cartel));
        assert!(gang_only.playable_by(Team::Gang));
        assert!(!gang_only.playable_by(Team::Mafia));

        let mut used = open.clone();
        used.used = true;
        assert!(!used.playable_by(Team::Cartel));
    }

    #[test]
    fn no_cards_deals_and_resolves_nothing() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(NoCards.deal(Team::Gang, &mut rng).is_empty());
        let card = Card::new(1, "bribe", "Bribe", "", None);
        assert!(NoCards.play(&GameState::setup(), Team::Gang, &card, &mut rng).is_none());
    }
}
