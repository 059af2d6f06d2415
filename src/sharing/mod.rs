//! Sharing and persistence of game state.
//!
//! ## Flow
//!
//! ```text
//! export: Game/Player ──► DTO ──► JSON ──► (base64 for shared players)
//! import: text ──► Value ──► schema::validate ──► version gate
//!               ──► deck ──► reconcile players ──► Game/Player
//! ```
//!
//! DTOs carry no instance identity. Importing matches every card reference
//! against the game's deck (or mints unlimited cards from the catalog) so
//! that each physical card is owned by at most one player.

pub mod codec;
pub mod dto;
pub mod error;
pub mod export;
pub mod import;
pub mod matcher;
pub mod schema;
pub mod storage;

pub use codec::{decode, encode, DecodeError};
pub use dto::{
    CaveDto, DwellerCardDto, ForestDto, GameDto, PlayerDto, PlayerExportDto, WoodyPlantCardDto,
};
pub use error::{ImportError, ImportErrorKind, UnavailableCards};
pub use export::{encode_player, export_game, export_player};
pub use import::{GameImport, Importer};
pub use matcher::{match_card, match_cave, match_dweller, match_woody_plant, CardMatch};
pub use schema::{validate, Schema, SchemaError};
pub use storage::{KeyValueStore, MemoryStore};
