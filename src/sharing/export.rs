//! Producing DTOs from live game state.

use super::codec;
use super::dto::{GameDto, PlayerDto, PlayerExportDto};
use crate::game::{Game, Player, ScoringMode};

/// Describe one player for sharing. The export carries every expansion
/// enabled in `game`, so the receiving game must enable at least those.
#[must_use]
pub fn export_player(game: &Game, player: &Player, app_version: &str) -> PlayerExportDto {
    PlayerExportDto {
        app_version: app_version.to_string(),
        game_boxes: game.game_boxes.clone(),
        player: PlayerDto::from(player),
    }
}

/// Describe a whole game for persistence. The deck is left out; it is
/// rebuilt from `game_boxes` on import.
#[must_use]
pub fn export_game(game: &Game, scoring_mode: ScoringMode, app_version: &str) -> GameDto {
    GameDto {
        app_version: app_version.to_string(),
        id: game.id.clone(),
        game_boxes: game.game_boxes.clone(),
        scoring_mode,
        players: game.players.iter().map(PlayerDto::from).collect(),
    }
}

/// Encode a player export as a shareable string.
pub fn encode_player(export: &PlayerExportDto) -> Result<String, serde_json::Error> {
    codec::encode(export)
}
