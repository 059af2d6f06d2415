//! Identity-free, serializable descriptions of cards, players and games.
//!
//! DTOs say *what* a player held, never *which* instance. They are the
//! persisted and shared representation; importing re-attaches identity.
//!
//! ## Wire Shape
//!
//! ```text
//! GameDto { appVersion, id, gameBoxes[], scoringMode, players[] }
//! PlayerExportDto { appVersion, gameBoxes[], player }
//! PlayerDto { name, forest: { cave: { name, cardCount }, woodyPlants[] } }
//! WoodyPlantCardDto { name, gameBox, treeSymbol | null, dwellers[] }
//! DwellerCardDto { name, gameBox, treeSymbol | null, position }
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use crate::cards::{
    CardFace, Cave, Dweller, DwellerPosition, Expansion, TreeSymbol, VariantKey, WoodyPlant,
};
use crate::game::{Forest, Player, ScoringMode};

/// Require the key to be present while still accepting `null`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DwellerCardDto {
    pub name: String,
    pub game_box: Expansion,
    #[serde(deserialize_with = "nullable")]
    pub tree_symbol: Option<TreeSymbol>,
    pub position: DwellerPosition,
}

impl CardFace for DwellerCardDto {
    fn name(&self) -> &str {
        &self.name
    }

    fn variant_key(&self) -> VariantKey {
        VariantKey::dweller(self.game_box, self.tree_symbol, self.position)
    }
}

impl From<&Dweller> for DwellerCardDto {
    fn from(dweller: &Dweller) -> Self {
        Self {
            name: dweller.name.clone(),
            game_box: dweller.game_box,
            tree_symbol: dweller.tree_symbol,
            position: dweller.position,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WoodyPlantCardDto {
    pub name: String,
    pub game_box: Expansion,
    #[serde(deserialize_with = "nullable")]
    pub tree_symbol: Option<TreeSymbol>,
    pub dwellers: Vec<DwellerCardDto>,
}

impl CardFace for WoodyPlantCardDto {
    fn name(&self) -> &str {
        &self.name
    }

    fn variant_key(&self) -> VariantKey {
        VariantKey::woody_plant(self.game_box, self.tree_symbol)
    }
}

impl From<&WoodyPlant> for WoodyPlantCardDto {
    fn from(woody_plant: &WoodyPlant) -> Self {
        Self {
            name: woody_plant.name.clone(),
            game_box: woody_plant.game_box,
            tree_symbol: woody_plant.tree_symbol,
            dwellers: woody_plant.dwellers().iter().map(DwellerCardDto::from).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaveDto {
    pub name: String,
    /// Whole, non-negative count; `3.0` and `-1` fail validation.
    pub card_count: u32,
}

impl From<&Cave> for CaveDto {
    fn from(cave: &Cave) -> Self {
        Self {
            name: cave.name.clone(),
            card_count: cave.card_count,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForestDto {
    pub cave: CaveDto,
    pub woody_plants: Vec<WoodyPlantCardDto>,
}

impl From<&Forest> for ForestDto {
    fn from(forest: &Forest) -> Self {
        Self {
            cave: CaveDto::from(&forest.cave),
            woody_plants: forest.woody_plants.iter().map(WoodyPlantCardDto::from).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDto {
    pub name: String,
    pub forest: ForestDto,
}

impl From<&Player> for PlayerDto {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            forest: ForestDto::from(&player.forest),
        }
    }
}

/// A single player shared between devices.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerExportDto {
    pub app_version: String,
    pub game_boxes: Vec<Expansion>,
    pub player: PlayerDto,
}

/// A whole game as persisted locally. The deck is never part of it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDto {
    pub app_version: String,
    pub id: String,
    pub game_boxes: Vec<Expansion>,
    pub scoring_mode: ScoringMode,
    pub players: Vec<PlayerDto>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InstanceId;
    use serde_json::json;

    #[test]
    fn test_field_names_are_camel_case() {
        let dto = WoodyPlantCardDto {
            name: "Oak".to_string(),
            game_box: Expansion::Base,
            tree_symbol: None,
            dwellers: vec![],
        };

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            value,
            json!({ "name": "Oak", "gameBox": "BASE", "treeSymbol": null, "dwellers": [] })
        );
    }

    #[test]
    fn test_tree_symbol_key_is_required() {
        let missing = json!({ "name": "Oak", "gameBox": "BASE", "dwellers": [] });
        assert!(serde_json::from_value::<WoodyPlantCardDto>(missing).is_err());

        let null = json!({ "name": "Oak", "gameBox": "BASE", "treeSymbol": null, "dwellers": [] });
        assert!(serde_json::from_value::<WoodyPlantCardDto>(null).is_ok());
    }

    #[test]
    fn test_card_count_must_be_whole_and_non_negative() {
        let whole = json!({ "name": "REGULAR_CAVE", "cardCount": 3 });
        assert!(serde_json::from_value::<CaveDto>(whole).is_ok());
        for bad in [json!(3.0), json!(-1), json!(2.5)] {
            let value = json!({ "name": "REGULAR_CAVE", "cardCount": bad });
            assert!(serde_json::from_value::<CaveDto>(value).is_err());
        }
    }

    #[test]
    fn test_from_instances() {
        let oak = WoodyPlant::new(InstanceId(4), "Oak", Expansion::Base, Some(TreeSymbol::Oak))
            .with_dweller(Dweller::new(
                InstanceId(5),
                "Wild Boar",
                Expansion::Base,
                Some(TreeSymbol::Oak),
                DwellerPosition::Bottom,
            ));

        let dto = WoodyPlantCardDto::from(&oak);
        assert_eq!(dto.name, "Oak");
        assert_eq!(dto.dwellers.len(), 1);
        assert_eq!(dto.dwellers[0].position, DwellerPosition::Bottom);
        assert!(dto.same_face(&oak));
    }
}
