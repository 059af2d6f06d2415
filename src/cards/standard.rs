//! Built-in card data for every supported expansion.
//!
//! Copy counts are per printing. Woody plants without a tree symbol are
//! shrubs; `Sapling` is the one unlimited card and is never drawn from the
//! pool.

use super::attributes::DwellerPosition::{Bottom, Left, Right, Top};
use super::attributes::Expansion::{Alpine, Base, Exploration, WoodlandEdge};
use super::attributes::TreeSymbol::*;
use super::definition::Blueprint;
use super::registry::Catalog;

/// Name of the cave every base game ships with.
pub const REGULAR_CAVE: &str = "REGULAR_CAVE";

/// Name of the cave added by the Exploration box.
pub const EXPLORATION_CAVE: &str = "EXPLORATION_CAVE";

impl Catalog {
    /// The catalog of every card the app ships with.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Catalog::new();

        // Trees
        catalog.register(Blueprint::woody_plant("Linden").printed(Base, Some(Linden), 9));
        catalog.register(Blueprint::woody_plant("Oak").printed(Base, Some(Oak), 7));
        catalog.register(Blueprint::woody_plant("Silver Fir").printed(Base, Some(SilverFir), 6));
        catalog.register(Blueprint::woody_plant("Birch").printed(Base, Some(Birch), 10));
        catalog.register(Blueprint::woody_plant("Beech").printed(Base, Some(Beech), 10));
        catalog.register(Blueprint::woody_plant("Sycamore").printed(Base, Some(Sycamore), 6));
        catalog.register(Blueprint::woody_plant("Douglas Fir").printed(Base, Some(DouglasFir), 7));
        catalog.register(
            Blueprint::woody_plant("Horse Chestnut").printed(Base, Some(HorseChestnut), 11),
        );
        catalog.register(Blueprint::woody_plant("European Larch").printed(Alpine, Some(Larch), 7));
        catalog.register(
            Blueprint::woody_plant("Swiss Stone Pine").printed(Alpine, Some(SwissStonePine), 7),
        );
        catalog.register(Blueprint::woody_plant("Sapling").unlimited().printed(Base, None, 0));

        // Shrubs
        catalog.register(Blueprint::woody_plant("Common Hazel").printed(WoodlandEdge, None, 6));
        catalog.register(Blueprint::woody_plant("Blackthorn").printed(WoodlandEdge, None, 6));
        catalog.register(Blueprint::woody_plant("Elderberry").printed(WoodlandEdge, None, 6));

        // Dwellers
        catalog.register(
            Blueprint::dweller("Red Squirrel")
                .printed_at(Base, Some(Oak), Top, 2)
                .printed_at(Base, Some(Linden), Top, 1)
                .printed_at(Base, Some(Beech), Top, 1),
        );
        catalog.register(
            Blueprint::dweller("Eurasian Jay")
                .printed_at(Base, Some(Birch), Top, 1)
                .printed_at(Base, Some(Beech), Top, 1)
                .printed_at(Base, Some(Oak), Top, 1),
        );
        catalog.register(
            Blueprint::dweller("Wild Boar")
                .printed_at(Base, Some(Beech), Bottom, 2)
                .printed_at(Base, Some(Oak), Bottom, 1),
        );
        catalog.register(
            Blueprint::dweller("European Badger")
                .printed_at(Base, Some(Linden), Bottom, 1)
                .printed_at(Base, Some(HorseChestnut), Bottom, 1),
        );
        catalog.register(
            Blueprint::dweller("Roe Deer")
                .printed_at(Base, Some(Birch), Left, 1)
                .printed_at(Base, Some(Sycamore), Left, 1)
                .printed_at(Base, Some(Linden), Right, 1),
        );
        catalog.register(
            Blueprint::dweller("Red Deer")
                .printed_at(Base, Some(Oak), Left, 1)
                .printed_at(Base, Some(DouglasFir), Right, 1),
        );
        catalog.register(Blueprint::dweller("Chamois").printed_at(Alpine, Some(Larch), Left, 2));
        catalog.register(
            Blueprint::dweller("Bearded Vulture").printed_at(Alpine, Some(SwissStonePine), Top, 1),
        );
        catalog.register(Blueprint::dweller("Marmot").printed_at(Alpine, Some(Larch), Bottom, 2));
        catalog.register(Blueprint::dweller("Barn Owl").printed_at(WoodlandEdge, None, Top, 1));
        catalog.register(
            Blueprint::dweller("European Polecat").printed_at(WoodlandEdge, None, Bottom, 2),
        );

        catalog.register_cave(REGULAR_CAVE, Base);
        catalog.register_cave(EXPLORATION_CAVE, Exploration);

        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardKind, Expansion, VariantKey};

    #[test]
    fn test_sapling_is_the_only_unlimited_card() {
        let catalog = Catalog::standard();
        let unlimited: Vec<_> = catalog
            .iter()
            .filter(|b| !b.part_of_deck)
            .map(|b| b.name.as_str())
            .collect();

        assert_eq!(unlimited, vec!["Sapling"]);
    }

    #[test]
    fn test_every_expansion_with_cards_has_a_printing() {
        let catalog = Catalog::standard();
        for game_box in [Expansion::Base, Expansion::Alpine, Expansion::WoodlandEdge] {
            assert!(
                catalog
                    .iter()
                    .flat_map(|b| b.variants())
                    .any(|v| v.key.game_box == game_box),
                "no printing for {:?}",
                game_box
            );
        }
    }

    #[test]
    fn test_shrubs_have_no_symbol() {
        let catalog = Catalog::standard();
        let hazel = catalog.blueprint_of_kind("Common Hazel", CardKind::WoodyPlant).unwrap();
        assert!(hazel.variant(&VariantKey::woody_plant(Expansion::WoodlandEdge, None)).is_some());
    }

    #[test]
    fn test_caves_registered() {
        let catalog = Catalog::standard();
        let caves: Vec<_> = catalog.caves().map(|(name, _)| name).collect();
        assert_eq!(caves, vec![REGULAR_CAVE, EXPLORATION_CAVE]);
    }
}
