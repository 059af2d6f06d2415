//! Reconciling DTOs back into live game state.
//!
//! ## Whole-game import
//!
//! `Decoding → SchemaValidating → VersionChecking → DeckBuilding →
//! ReconcilingPlayer[i] → Done`. Any stage may fail; once it does, nothing
//! else runs and no partial game is returned.
//!
//! ## Player import
//!
//! Same stages, plus a check that the shared player's expansions are all
//! enabled in the target game. Reconciliation runs on a snapshot of the
//! game's deck, so a failed import leaves the game untouched.
//!
//! ## Player reconciliation
//!
//! Woody plants are matched in order, then each one's dwellers in order.
//! Unresolved references are collected rather than failing fast, so a
//! single `UnavailableCards` error lists every missing card. Matched pool
//! instances leave the deck only once the whole player resolved.

use rustc_hash::FxHashSet;
use serde_json::Value;
use tracing::{debug, warn};

use super::codec;
use super::dto::{GameDto, PlayerDto, PlayerExportDto};
use super::error::{ImportError, UnavailableCards};
use super::export::{export_game, export_player};
use super::matcher::{match_cave, match_dweller, match_woody_plant};
use super::schema::{self, Schema};
use super::storage::KeyValueStore;
use crate::cards::Catalog;
use crate::core::config::ImportConfig;
use crate::core::entity::InstanceId;
use crate::core::player::PlayerId;
use crate::game::{create_deck, create_player, unique_name, Deck, Game, Player, ScoringMode};

/// Result of a successful whole-game import.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameImport {
    pub scoring_mode: ScoringMode,
    pub game: Game,
}

/// Imports and exports game state against a catalog.
///
/// ## Example
///
/// ```
/// use forest_tally::cards::{Catalog, Expansion, REGULAR_CAVE};
/// use forest_tally::core::{GameRng, ImportConfig};
/// use forest_tally::game::Game;
/// use forest_tally::sharing::{encode_player, Importer};
///
/// let importer = Importer::new(Catalog::standard(), ImportConfig::default());
///
/// let mut host = Game::create(importer.catalog(), vec![Expansion::Base], &mut GameRng::new(1));
/// host.add_player("Alice", REGULAR_CAVE, 2).unwrap();
/// let shared = encode_player(&importer.export_player(&host, &host.players[0])).unwrap();
///
/// let mut guest = Game::create(importer.catalog(), vec![Expansion::Base], &mut GameRng::new(2));
/// let alice = importer.import_player(&mut guest, &shared).unwrap();
/// assert_eq!(alice.name, "Alice");
/// assert_eq!(alice.forest.cave.card_count, 2);
/// ```
#[derive(Clone, Debug)]
pub struct Importer {
    catalog: Catalog,
    config: ImportConfig,
}

impl Importer {
    #[must_use]
    pub fn new(catalog: Catalog, config: ImportConfig) -> Self {
        Self { catalog, config }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Import a whole game from persisted JSON text.
    pub fn import_game_str(&self, raw: &str) -> Result<GameImport, ImportError> {
        let value = codec::parse_json(raw).map_err(|e| {
            warn!("Could not parse stored game: {}", e);
            e
        })?;
        self.import_game_value(value)
    }

    /// Import a whole game from an already parsed value.
    pub fn import_game_value(&self, value: Value) -> Result<GameImport, ImportError> {
        let dto: GameDto = validated(value)?;
        self.check_version(&dto.app_version)?;

        let mut deck = create_deck(&self.catalog, &dto.game_boxes);
        let mut players = Vec::with_capacity(dto.players.len());
        for player_dto in &dto.players {
            let player = reconcile(&self.catalog, &players, &mut deck, player_dto)?;
            players.push(player);
        }

        let mut game = Game::new(dto.id, dto.game_boxes, deck);
        game.players = players;
        debug!("Imported game {} with {} player(s)", game.id, game.players.len());

        Ok(GameImport {
            scoring_mode: dto.scoring_mode,
            game,
        })
    }

    /// Import a shared player into `game`.
    ///
    /// On success the player is appended and its cards leave the game's
    /// deck. On failure `game` is unchanged.
    pub fn import_player<'g>(
        &self,
        game: &'g mut Game,
        encoded: &str,
    ) -> Result<&'g Player, ImportError> {
        let value = codec::decode(encoded).map_err(|e| {
            warn!("Could not decode shared player: {}", e);
            e
        })?;
        let dto: PlayerExportDto = validated(value)?;
        self.check_version(&dto.app_version)?;

        let missing = game.missing_game_boxes(&dto.game_boxes);
        if !missing.is_empty() {
            return Err(ImportError::GameBoxesMismatch { missing });
        }

        let mut deck = game.deck.clone();
        let player = reconcile(&self.catalog, &game.players, &mut deck, &dto.player)?;
        game.deck = deck;
        Ok(game.push_player(player))
    }

    /// Reconcile one player against `deck` in the context of `game`'s
    /// existing players.
    ///
    /// On success the claimed pool instances are removed from `deck`. On
    /// failure the pools are left as they were.
    pub fn reconcile_player(
        &self,
        game: &Game,
        deck: &mut Deck,
        dto: &PlayerDto,
    ) -> Result<Player, ImportError> {
        reconcile(&self.catalog, &game.players, deck, dto)
    }

    /// Describe `player` for sharing, stamped with the configured version.
    #[must_use]
    pub fn export_player(&self, game: &Game, player: &Player) -> PlayerExportDto {
        export_player(game, player, &self.config.app_version)
    }

    /// Describe `game` for persistence, stamped with the configured version.
    #[must_use]
    pub fn export_game(&self, game: &Game, scoring_mode: ScoringMode) -> GameDto {
        export_game(game, scoring_mode, &self.config.app_version)
    }

    /// Persist `game` under the configured storage key.
    pub fn save_game(
        &self,
        store: &mut impl KeyValueStore,
        game: &Game,
        scoring_mode: ScoringMode,
    ) -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(&self.export_game(game, scoring_mode))?;
        store.set(&self.config.storage_key, json);
        Ok(())
    }

    /// Restore the persisted game. An empty slot is `InvalidData`.
    pub fn load_game(&self, store: &impl KeyValueStore) -> Result<GameImport, ImportError> {
        let raw = store
            .get(&self.config.storage_key)
            .ok_or_else(|| codec::DecodeError::Missing(self.config.storage_key.clone()))?;
        self.import_game_str(&raw)
    }

    /// Drop the persisted game.
    pub fn clear_game(&self, store: &mut impl KeyValueStore) {
        store.delete(&self.config.storage_key);
    }

    fn check_version(&self, found: &str) -> Result<(), ImportError> {
        if found == self.config.app_version {
            return Ok(());
        }
        debug!("Rejecting data from app version {}", found);
        Err(ImportError::AppVersionMismatch {
            expected: self.config.app_version.clone(),
            found: found.to_string(),
        })
    }
}

fn validated<T: Schema>(value: Value) -> Result<T, ImportError> {
    schema::validate(value).map_err(|e| {
        warn!("Schema validation failed: {}", e);
        e.into()
    })
}

fn reconcile(
    catalog: &Catalog,
    players: &[Player],
    deck: &mut Deck,
    dto: &PlayerDto,
) -> Result<Player, ImportError> {
    let mut missing = UnavailableCards::default();

    let cave = match_cave(deck, &dto.forest.cave);
    if cave.is_none() {
        missing.cave = Some(dto.forest.cave.clone());
    }

    let mut claimed_woody_plants: FxHashSet<InstanceId> = FxHashSet::default();
    let mut claimed_dwellers: FxHashSet<InstanceId> = FxHashSet::default();
    let mut woody_plants = Vec::with_capacity(dto.forest.woody_plants.len());

    for woody_plant_dto in &dto.forest.woody_plants {
        let matched = match_woody_plant(deck, catalog, woody_plant_dto, &claimed_woody_plants);
        let Some(matched) = matched else {
            // Dwellers of an unresolved plant have nowhere to go; only the plant is reported
            missing.woody_plants.push(woody_plant_dto.clone());
            continue;
        };
        if let Some(id) = matched.pooled_id() {
            claimed_woody_plants.insert(id);
        }
        let mut woody_plant = matched.into_card(deck);

        for dweller_dto in &woody_plant_dto.dwellers {
            match match_dweller(deck, catalog, dweller_dto, &claimed_dwellers) {
                Some(matched) => {
                    if let Some(id) = matched.pooled_id() {
                        claimed_dwellers.insert(id);
                    }
                    woody_plant = woody_plant.with_dweller(matched.into_card(deck));
                }
                None => missing.dwellers.push(dweller_dto.clone()),
            }
        }

        woody_plants.push(woody_plant);
    }

    let cave = match cave {
        Some(cave) if missing.is_empty() => cave,
        _ => {
            debug!(
                "Player {:?} has unavailable cards: cave {}, {} dweller(s), {} woody plant(s)",
                dto.name,
                missing.cave.is_some(),
                missing.dwellers.len(),
                missing.woody_plants.len()
            );
            return Err(ImportError::UnavailableCards(missing));
        }
    };

    deck.woody_plants.remove_all(&claimed_woody_plants);
    deck.dwellers.remove_all(&claimed_dwellers);

    let id = PlayerId::next_after(players.iter().map(|p| p.id));
    let player = create_player(id, unique_name(players, &dto.name), cave, woody_plants);
    debug!(
        "Reconciled {} ({}): {} woody plant(s), {} from the deck",
        player.name,
        player.id,
        player.forest.woody_plants.len(),
        claimed_woody_plants.len() + claimed_dwellers.len()
    );
    Ok(player)
}
