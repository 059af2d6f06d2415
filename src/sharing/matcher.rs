//! Resolving card references to concrete instances.
//!
//! Lookup is two-tier:
//! 1. The deck's remaining pool, first instance in pool order with the same
//!    face that this pass has not claimed yet.
//! 2. The catalog, only for unlimited blueprints (`part_of_deck == false`)
//!    that have the referenced printing. Such cards are minted on demand.
//!
//! A pool hit always wins over an unlimited printing of the same face.
//! Caves are matched by name only and never leave the deck.

use rustc_hash::FxHashSet;

use super::dto::{CaveDto, DwellerCardDto, WoodyPlantCardDto};
use crate::cards::{Blueprint, CardFace, Catalog, Cave, Dweller, Variant, WoodyPlant};
use crate::core::entity::InstanceId;
use crate::game::{CardPool, Deck, PoolCard};

/// Outcome of a successful card lookup.
#[derive(Clone, Debug)]
pub enum CardMatch<'c, T> {
    /// A copy of the pooled instance. The pool still holds it until the
    /// caller removes it.
    Pooled(T),
    /// No pooled instance; an unlimited printing can be minted.
    Unlimited {
        blueprint: &'c Blueprint,
        variant: &'c Variant,
    },
}

impl<'c, T: PoolCard> CardMatch<'c, T> {
    /// Id of the pooled instance, if the match came from the pool.
    #[must_use]
    pub fn pooled_id(&self) -> Option<InstanceId> {
        match self {
            CardMatch::Pooled(card) => Some(card.id()),
            CardMatch::Unlimited { .. } => None,
        }
    }

    /// Turn the match into an owned card, minting unlimited ones with a
    /// fresh id from `deck`.
    pub fn into_card(self, deck: &mut Deck) -> T {
        match self {
            CardMatch::Pooled(card) => card,
            CardMatch::Unlimited { blueprint, variant } => {
                T::mint(blueprint, variant, deck.alloc_id())
            }
        }
    }
}

/// Look up `face` in `pool`, falling back to unlimited catalog printings.
pub fn match_card<'c, T: PoolCard>(
    pool: &CardPool<T>,
    catalog: &'c Catalog,
    face: &impl CardFace,
    claimed: &FxHashSet<InstanceId>,
) -> Option<CardMatch<'c, T>> {
    if let Some(card) = pool.find(|c| c.same_face(face) && !claimed.contains(&c.id())) {
        return Some(CardMatch::Pooled(card.clone()));
    }

    let blueprint = catalog.blueprint_of_kind(face.name(), T::KIND)?;
    if blueprint.part_of_deck {
        return None;
    }
    let variant = blueprint.variant(&face.variant_key())?;
    Some(CardMatch::Unlimited { blueprint, variant })
}

pub fn match_woody_plant<'c>(
    deck: &Deck,
    catalog: &'c Catalog,
    dto: &WoodyPlantCardDto,
    claimed: &FxHashSet<InstanceId>,
) -> Option<CardMatch<'c, WoodyPlant>> {
    match_card(&deck.woody_plants, catalog, dto, claimed)
}

pub fn match_dweller<'c>(
    deck: &Deck,
    catalog: &'c Catalog,
    dto: &DwellerCardDto,
    claimed: &FxHashSet<InstanceId>,
) -> Option<CardMatch<'c, Dweller>> {
    match_card(&deck.dwellers, catalog, dto, claimed)
}

/// Match a cave by name. The returned cave carries the DTO's card count.
#[must_use]
pub fn match_cave(deck: &Deck, dto: &CaveDto) -> Option<Cave> {
    deck.cave(&dto.name)
        .map(|cave| cave.clone().with_card_count(dto.card_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{DwellerPosition, Expansion, TreeSymbol, REGULAR_CAVE};
    use crate::game::create_deck;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.register(
            Blueprint::woody_plant("Oak").printed(Expansion::Base, Some(TreeSymbol::Oak), 2),
        );
        catalog.register(
            Blueprint::woody_plant("Sapling")
                .unlimited()
                .printed(Expansion::Base, None, 0)
                .printed(Expansion::Base, Some(TreeSymbol::Oak), 0),
        );
        catalog.register(Blueprint::dweller("Red Squirrel").printed_at(
            Expansion::Base,
            Some(TreeSymbol::Oak),
            DwellerPosition::Top,
            1,
        ));
        catalog.register_cave(REGULAR_CAVE, Expansion::Base);
        catalog
    }

    fn woody(name: &str, tree_symbol: Option<TreeSymbol>) -> WoodyPlantCardDto {
        WoodyPlantCardDto {
            name: name.to_string(),
            game_box: Expansion::Base,
            tree_symbol,
            dwellers: vec![],
        }
    }

    fn squirrel(position: DwellerPosition) -> DwellerCardDto {
        DwellerCardDto {
            name: "Red Squirrel".to_string(),
            game_box: Expansion::Base,
            tree_symbol: Some(TreeSymbol::Oak),
            position,
        }
    }

    #[test]
    fn test_pool_match_skips_claimed() {
        let catalog = catalog();
        let deck = create_deck(&catalog, &[Expansion::Base]);
        let dto = woody("Oak", Some(TreeSymbol::Oak));

        let mut claimed = FxHashSet::default();
        let first = match_woody_plant(&deck, &catalog, &dto, &claimed).unwrap();
        let first_id = first.pooled_id().unwrap();
        claimed.insert(first_id);

        let second = match_woody_plant(&deck, &catalog, &dto, &claimed).unwrap();
        let second_id = second.pooled_id().unwrap();
        assert_ne!(first_id, second_id);
        claimed.insert(second_id);

        // Only two oaks in the pool, and oak is deck-limited
        assert!(match_woody_plant(&deck, &catalog, &dto, &claimed).is_none());
    }

    #[test]
    fn test_face_must_match_exactly() {
        let catalog = catalog();
        let deck = create_deck(&catalog, &[Expansion::Base]);
        let claimed = FxHashSet::default();

        let birch_oak = woody("Oak", Some(TreeSymbol::Birch));
        assert!(match_woody_plant(&deck, &catalog, &birch_oak, &claimed).is_none());
        assert!(match_woody_plant(&deck, &catalog, &woody("Oak", None), &claimed).is_none());

        let bottom = squirrel(DwellerPosition::Bottom);
        assert!(match_dweller(&deck, &catalog, &bottom, &claimed).is_none());
        let top = squirrel(DwellerPosition::Top);
        assert!(match_dweller(&deck, &catalog, &top, &claimed).is_some());
    }

    #[test]
    fn test_unlimited_card_is_minted() {
        let catalog = catalog();
        let mut deck = create_deck(&catalog, &[Expansion::Base]);
        let claimed = FxHashSet::default();

        let sapling = woody("Sapling", None);
        let matched = match_woody_plant(&deck, &catalog, &sapling, &claimed).unwrap();
        assert!(matched.pooled_id().is_none());

        let a = matched.into_card(&mut deck);
        let b = match_woody_plant(&deck, &catalog, &sapling, &claimed)
            .unwrap()
            .into_card(&mut deck);
        assert_eq!(a.name, "Sapling");
        assert_ne!(a.id, b.id);
        assert!(!deck.woody_plants.contains(a.id));
    }

    #[test]
    fn test_unlimited_card_needs_printing() {
        let catalog = catalog();
        let deck = create_deck(&catalog, &[Expansion::Base]);
        let claimed = FxHashSet::default();

        let larch_sapling = woody("Sapling", Some(TreeSymbol::Larch));
        assert!(match_woody_plant(&deck, &catalog, &larch_sapling, &claimed).is_none());
    }

    #[test]
    fn test_pool_preferred_over_unlimited() {
        let catalog = catalog();
        let mut deck = create_deck(&catalog, &[Expansion::Base]);
        let pooled_id = deck.alloc_id();
        let pooled = WoodyPlant::new(pooled_id, "Sapling", Expansion::Base, Some(TreeSymbol::Oak));
        deck.woody_plants.push(pooled);

        let claimed = FxHashSet::default();
        let dto = woody("Sapling", Some(TreeSymbol::Oak));
        let matched = match_woody_plant(&deck, &catalog, &dto, &claimed).unwrap();
        assert_eq!(matched.pooled_id(), Some(pooled_id));
    }

    #[test]
    fn test_match_kind_is_respected() {
        let catalog = catalog();
        let deck = create_deck(&catalog, &[Expansion::Base]);
        let claimed = FxHashSet::default();

        // A dweller reference never resolves to a woody plant blueprint
        let dto = DwellerCardDto {
            name: "Sapling".to_string(),
            game_box: Expansion::Base,
            tree_symbol: None,
            position: DwellerPosition::Top,
        };
        assert!(match_dweller(&deck, &catalog, &dto, &claimed).is_none());
    }

    #[test]
    fn test_match_cave() {
        let deck = create_deck(&catalog(), &[Expansion::Base]);

        let regular = CaveDto {
            name: REGULAR_CAVE.to_string(),
            card_count: 3,
        };
        let cave = match_cave(&deck, &regular).unwrap();
        assert_eq!(cave.card_count, 3);
        assert_eq!(deck.cave(REGULAR_CAVE).unwrap().card_count, 0);

        let lava = CaveDto {
            name: "LAVA_CAVE".to_string(),
            card_count: 0,
        };
        assert!(match_cave(&deck, &lava).is_none());
    }
}
