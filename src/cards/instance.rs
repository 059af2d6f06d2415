//! Card instances - concrete cards in a game.
//!
//! A `WoodyPlant` or `Dweller` is one physical card. Its `id` distinguishes
//! it from other copies of the same printing. Once created, an instance's
//! identity and printed attributes never change; placing a dweller produces
//! a new woody plant value that owns an updated slot collection.
//!
//! ## Slots
//!
//! Each woody plant has one slot per `DwellerPosition`. A slot usually holds
//! zero or one dweller, occasionally more, so slots are `SmallVec`s.

use std::ops::Index;

use smallvec::SmallVec;

use super::attributes::{CardFace, DwellerPosition, Expansion, TreeSymbol, VariantKey};
use crate::core::entity::InstanceId;

/// A dweller card instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dweller {
    pub id: InstanceId,
    pub name: String,
    pub game_box: Expansion,
    pub tree_symbol: Option<TreeSymbol>,
    pub position: DwellerPosition,
}

impl Dweller {
    #[must_use]
    pub fn new(
        id: InstanceId,
        name: impl Into<String>,
        game_box: Expansion,
        tree_symbol: Option<TreeSymbol>,
        position: DwellerPosition,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            game_box,
            tree_symbol,
            position,
        }
    }
}

impl CardFace for Dweller {
    fn name(&self) -> &str {
        &self.name
    }

    fn variant_key(&self) -> VariantKey {
        VariantKey::dweller(self.game_box, self.tree_symbol, self.position)
    }
}

/// Dwellers placed on a woody plant, grouped by position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DwellerSlots {
    slots: [SmallVec<[Dweller; 2]>; 4],
}

impl DwellerSlots {
    /// Empty slots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return these slots with `dweller` appended to the slot of its position.
    #[must_use]
    pub fn with(mut self, dweller: Dweller) -> Self {
        self.slots[dweller.position.index()].push(dweller);
        self
    }

    /// Dwellers in one slot, in placement order.
    #[must_use]
    pub fn get(&self, position: DwellerPosition) -> &[Dweller] {
        &self.slots[position.index()]
    }

    /// Iterate over all placed dwellers, slot by slot.
    pub fn iter(&self) -> impl Iterator<Item = &Dweller> {
        self.slots.iter().flat_map(|slot| slot.iter())
    }

    /// Total number of placed dwellers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().map(|slot| slot.len()).sum()
    }

    /// Check if no dweller is placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_empty())
    }
}

impl Index<DwellerPosition> for DwellerSlots {
    type Output = [Dweller];

    fn index(&self, position: DwellerPosition) -> &Self::Output {
        self.get(position)
    }
}

/// A woody plant card instance (tree or shrub) and its dwellers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WoodyPlant {
    pub id: InstanceId,
    pub name: String,
    pub game_box: Expansion,
    pub tree_symbol: Option<TreeSymbol>,
    dwellers: DwellerSlots,
}

impl WoodyPlant {
    /// Create a woody plant with empty slots.
    #[must_use]
    pub fn new(
        id: InstanceId,
        name: impl Into<String>,
        game_box: Expansion,
        tree_symbol: Option<TreeSymbol>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            game_box,
            tree_symbol,
            dwellers: DwellerSlots::default(),
        }
    }

    /// Consume this woody plant and return one with `dweller` placed.
    #[must_use]
    pub fn with_dweller(self, dweller: Dweller) -> Self {
        let dwellers = self.dwellers.with(dweller);
        Self { dwellers, ..self }
    }

    /// Consume this woody plant and return one owning `dwellers` instead.
    #[must_use]
    pub fn with_dwellers(self, dwellers: DwellerSlots) -> Self {
        Self { dwellers, ..self }
    }

    #[must_use]
    pub fn dwellers(&self) -> &DwellerSlots {
        &self.dwellers
    }
}

impl CardFace for WoodyPlant {
    fn name(&self) -> &str {
        &self.name
    }

    fn variant_key(&self) -> VariantKey {
        VariantKey::woody_plant(self.game_box, self.tree_symbol)
    }
}

/// A player's cave: a named pile of cards, tracked by count only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cave {
    pub name: String,
    pub card_count: u32,
}

impl Cave {
    /// Create an empty cave.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            card_count: 0,
        }
    }

    /// Set the card count (builder pattern).
    #[must_use]
    pub fn with_card_count(mut self, card_count: u32) -> Self {
        self.card_count = card_count;
        self
    }
}
