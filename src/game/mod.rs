//! In-memory game state: decks, players, and how they are constructed.
//!
//! ## Ownership
//!
//! Every card instance is owned by exactly one place: the game's `Deck`
//! pool or one player's `Forest`. Cards only ever move from the deck to a
//! player.

pub mod deck;
pub mod factory;
pub mod names;
pub mod player;
pub mod state;

pub use deck::{CardPool, Deck, PoolCard};
pub use factory::{create_deck, create_dweller, create_player, create_woody_plant};
pub use names::unique_name;
pub use player::{Forest, Player};
pub use state::{Game, ScoringMode};
