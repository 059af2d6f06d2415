//! Construction of decks, cards and players from the catalog.

use tracing::debug;

use crate::cards::{Blueprint, Catalog, Cave, Dweller, Expansion, Variant, WoodyPlant};
use crate::core::entity::InstanceId;
use crate::core::player::PlayerId;

use super::deck::Deck;
use super::player::{Forest, Player};

/// Build the authoritative deck for a set of enabled expansions.
///
/// Every deck-limited printing of an enabled expansion contributes `copies`
/// instances, in catalog order. Each cave of an enabled expansion is listed
/// once with a zero count.
#[must_use]
pub fn create_deck(catalog: &Catalog, game_boxes: &[Expansion]) -> Deck {
    let mut deck = Deck::new();

    for blueprint in catalog.iter().filter(|b| b.part_of_deck) {
        for variant in blueprint
            .variants()
            .iter()
            .filter(|v| game_boxes.contains(&v.key.game_box))
        {
            for _ in 0..variant.copies {
                let id = deck.alloc_id();
                match variant.key.position {
                    Some(_) => deck.dwellers.push(create_dweller(blueprint, variant, id)),
                    None => deck.woody_plants.push(create_woody_plant(blueprint, variant, id)),
                }
            }
        }
    }

    deck.caves = catalog
        .caves()
        .filter(|(_, game_box)| game_boxes.contains(game_box))
        .map(|(name, _)| Cave::new(name))
        .collect();

    debug!(
        woody_plants = deck.woody_plants.len(),
        dwellers = deck.dwellers.len(),
        caves = deck.caves.len(),
        "built deck for {:?}",
        game_boxes
    );

    deck
}

/// Create a woody plant instance of a printing.
#[must_use]
pub fn create_woody_plant(blueprint: &Blueprint, variant: &Variant, id: InstanceId) -> WoodyPlant {
    WoodyPlant::new(id, blueprint.name.clone(), variant.key.game_box, variant.key.tree_symbol)
}

/// Create a dweller instance of a printing.
///
/// Panics if the printing has no position.
#[must_use]
pub fn create_dweller(blueprint: &Blueprint, variant: &Variant, id: InstanceId) -> Dweller {
    let position = variant
        .key
        .position
        .unwrap_or_else(|| panic!("dweller printing of {} has no position", blueprint.name));
    Dweller::new(
        id,
        blueprint.name.clone(),
        variant.key.game_box,
        variant.key.tree_symbol,
        position,
    )
}

/// Create a player owning `cave` and `woody_plants`.
#[must_use]
pub fn create_player(
    id: PlayerId,
    name: impl Into<String>,
    cave: Cave,
    woody_plants: Vec<WoodyPlant>,
) -> Player {
    Player {
        id,
        name: name.into(),
        forest: Forest { cave, woody_plants },
    }
}
