//! Game state: the enabled expansions, the deck, and the players.
//!
//! A `Game` is created fresh when a new game starts, or assembled by a
//! successful import. It is replaced, never patched, on reset.

use serde::{Deserialize, Serialize};

use crate::cards::{Catalog, Expansion};
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;

use super::deck::Deck;
use super::factory::{create_deck, create_player};
use super::names::unique_name;
use super::player::Player;

/// Which device keeps the score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoringMode {
    /// This device scores every player.
    #[default]
    Host,
    /// This device scores only its own player.
    Guest,
}

/// A game in progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    pub id: String,

    /// Enabled expansions.
    pub game_boxes: Vec<Expansion>,

    /// Cards not yet owned by any player.
    pub deck: Deck,

    /// Players in join order.
    pub players: Vec<Player>,
}

impl Game {
    /// Assemble a game with no players.
    #[must_use]
    pub fn new(id: impl Into<String>, game_boxes: Vec<Expansion>, deck: Deck) -> Self {
        Self {
            id: id.into(),
            game_boxes,
            deck,
            players: Vec::new(),
        }
    }

    /// Start a new game: fresh id, fresh deck for `game_boxes`, no players.
    ///
    /// ```
    /// use forest_tally::cards::{Catalog, Expansion};
    /// use forest_tally::core::GameRng;
    /// use forest_tally::game::Game;
    ///
    /// let game = Game::create(&Catalog::standard(), vec![Expansion::Base], &mut GameRng::new(1));
    /// assert!(game.players.is_empty());
    /// assert!(!game.deck.woody_plants.is_empty());
    /// ```
    #[must_use]
    pub fn create(catalog: &Catalog, game_boxes: Vec<Expansion>, rng: &mut GameRng) -> Self {
        let deck = create_deck(catalog, &game_boxes);
        Self::new(rng.gen_game_id(), game_boxes, deck)
    }

    /// Add a new player with an empty forest.
    ///
    /// The cave must be one of the deck's caves; returns `None` otherwise.
    /// The name is disambiguated against existing players.
    pub fn add_player(
        &mut self,
        name: &str,
        cave_name: &str,
        cave_card_count: u32,
    ) -> Option<&Player> {
        let cave = self.deck.cave(cave_name)?.clone().with_card_count(cave_card_count);
        let name = unique_name(&self.players, name);
        let player = create_player(self.next_player_id(), name, cave, Vec::new());
        Some(self.push_player(player))
    }

    /// Append a fully assembled player.
    pub fn push_player(&mut self, player: Player) -> &Player {
        self.players.push(player);
        &self.players[self.players.len() - 1]
    }

    /// Id the next joining player will get.
    #[must_use]
    pub fn next_player_id(&self) -> PlayerId {
        PlayerId::next_after(self.players.iter().map(|p| p.id))
    }

    /// Expansions in `game_boxes` that this game does not enable, in the
    /// order given.
    #[must_use]
    pub fn missing_game_boxes(&self, game_boxes: &[Expansion]) -> Vec<Expansion> {
        game_boxes
            .iter()
            .copied()
            .filter(|gb| !self.game_boxes.contains(gb))
            .collect()
    }
}
