//! Structural validation of decoded data.
//!
//! Validation checks shape only: required fields, primitive types and enum
//! membership for `Expansion`, `TreeSymbol`, `DwellerPosition` and
//! `ScoringMode`, recursively through the nested forest. Unknown extra
//! fields are ignored. Whether a referenced card exists is not checked here.
//!
//! There is no partial recovery: the first mismatch fails the whole value.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use super::dto::{GameDto, PlayerExportDto};

/// A value did not have the shape of `shape`.
#[derive(Debug, Error)]
#[error("invalid {shape}: {source}")]
pub struct SchemaError {
    pub shape: &'static str,
    #[source]
    pub source: serde_json::Error,
}

/// A top-level validated shape.
pub trait Schema: DeserializeOwned {
    /// Shape name used in error messages.
    const SHAPE: &'static str;
}

impl Schema for GameDto {
    const SHAPE: &'static str = "game";
}

impl Schema for PlayerExportDto {
    const SHAPE: &'static str = "player export";
}

/// Validate `value` against the shape of `T`.
///
/// ```
/// use forest_tally::sharing::{schema, PlayerExportDto};
/// use serde_json::json;
///
/// let bad = json!({ "appVersion": "1.0.0", "gameBoxes": ["NOT_A_BOX"], "player": {} });
/// assert!(schema::validate::<PlayerExportDto>(bad).is_err());
/// ```
pub fn validate<T: Schema>(value: Value) -> Result<T, SchemaError> {
    serde_json::from_value(value).map_err(|source| SchemaError {
        shape: T::SHAPE,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{DwellerPosition, Expansion, TreeSymbol};
    use crate::game::ScoringMode;
    use serde_json::json;

    fn valid_game() -> Value {
        json!({
            "appVersion": "1.0.0",
            "id": "g1",
            "gameBoxes": ["BASE"],
            "scoringMode": "HOST",
            "players": [{
                "name": "Alice",
                "forest": {
                    "cave": { "name": "REGULAR_CAVE", "cardCount": 3 },
                    "woodyPlants": [{
                        "name": "Oak",
                        "gameBox": "BASE",
                        "treeSymbol": "OAK",
                        "dwellers": [{
                            "name": "Red Squirrel",
                            "gameBox": "BASE",
                            "treeSymbol": "OAK",
                            "position": "TOP"
                        }]
                    }]
                }
            }]
        })
    }

    #[test]
    fn test_valid_game() {
        let dto: GameDto = validate(valid_game()).unwrap();

        assert_eq!(dto.scoring_mode, ScoringMode::Host);
        assert_eq!(dto.game_boxes, vec![Expansion::Base]);
        let oak = &dto.players[0].forest.woody_plants[0];
        assert_eq!(oak.tree_symbol, Some(TreeSymbol::Oak));
        assert_eq!(oak.dwellers[0].position, DwellerPosition::Top);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let mut value = valid_game();
        value["theme"] = json!("dark");
        assert!(validate::<GameDto>(value).is_ok());
    }

    #[test]
    fn test_missing_field() {
        let mut value = valid_game();
        value["players"][0]["forest"].as_object_mut().unwrap().remove("cave");

        let err = validate::<GameDto>(value).unwrap_err();
        assert_eq!(err.shape, "game");
        assert!(err.to_string().contains("cave"));
    }

    #[test]
    fn test_wrong_primitive() {
        let mut value = valid_game();
        value["players"][0]["forest"]["cave"]["cardCount"] = json!("three");
        assert!(validate::<GameDto>(value).is_err());
    }

    #[test]
    fn test_out_of_enum_values() {
        for (pointer, bad) in [
            ("/gameBoxes/0", json!("PROMO")),
            ("/scoringMode", json!("SOLO")),
            ("/players/0/forest/woodyPlants/0/treeSymbol", json!("PALM")),
            ("/players/0/forest/woodyPlants/0/dwellers/0/position", json!("MIDDLE")),
        ] {
            let mut value = valid_game();
            *value.pointer_mut(pointer).unwrap() = bad;
            assert!(validate::<GameDto>(value).is_err(), "{} accepted", pointer);
        }
    }

    #[test]
    fn test_non_object() {
        assert!(validate::<GameDto>(json!([1, 2, 3])).is_err());
        assert!(validate::<PlayerExportDto>(Value::Null).is_err());
    }
}
