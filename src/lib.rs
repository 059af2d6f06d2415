//! # forest-tally
//!
//! Game state sharing for a forest card game scoring companion.
//!
//! ## Design Principles
//!
//! 1. **One Owner Per Card**: Every physical card instance is held by the
//!    game's deck or by exactly one player. Imports move cards out of the
//!    deck, never duplicate them.
//!
//! 2. **All-or-Nothing Imports**: A failed import reports every missing card
//!    at once and leaves the game exactly as it was.
//!
//! 3. **Strict Compatibility**: Shared and persisted data must come from the
//!    same app version; card sets may change between versions.
//!
//! ## Architecture
//!
//! - **Identity-Free DTOs**: Exports describe *what* a player holds. Imports
//!   re-attach identity by matching against the deck.
//!
//! - **Persistent Data Structures**: Deck pools are `im` vectors, so imports
//!   reconcile against an O(1) snapshot and commit by swapping it in.
//!
//! ## Modules
//!
//! - `core`: Instance and player ids, configuration, RNG
//! - `cards`: Card attributes, blueprints, the catalog, and instances
//! - `game`: Deck pools, players, forests, and game state
//! - `sharing`: DTOs, codec, schema validation, export, and import

pub mod cards;
pub mod core;
pub mod game;
pub mod sharing;

// Re-export commonly used types
pub use crate::core::{GameRng, ImportConfig, InstanceId, PlayerId};

pub use crate::cards::{
    Blueprint, CardFace, Catalog, Cave, Dweller, DwellerPosition, Expansion, TreeSymbol, Variant,
    WoodyPlant, EXPLORATION_CAVE, REGULAR_CAVE,
};

pub use crate::game::{CardPool, Deck, Forest, Game, Player, ScoringMode};

pub use crate::sharing::{
    GameDto, GameImport, ImportError, ImportErrorKind, Importer, KeyValueStore, MemoryStore,
    PlayerDto, PlayerExportDto, UnavailableCards,
};
