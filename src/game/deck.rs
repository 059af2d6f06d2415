//! The authoritative pool of not-yet-assigned cards.
//!
//! A `Deck` is built once per game from the enabled expansions and only ever
//! shrinks: cards leave the pool when they are assigned to a player and never
//! come back. It supports:
//! - First-match lookup over the pool (`find`)
//! - Atomic removal of a single card (`take`)
//! - Removal of a whole claimed set at once (`remove_all`)
//!
//! Pools are `im::Vector`s, so a deck (and the game holding it) clones in
//! O(1). Imports reconcile against a snapshot and only write it back once
//! every card is accounted for.

use im::Vector;
use rustc_hash::FxHashSet;

use crate::cards::{Blueprint, CardFace, CardKind, Cave, Dweller, Variant, WoodyPlant};
use crate::core::entity::{InstanceId, InstanceIdAllocator};

use super::factory::{create_dweller, create_woody_plant};

/// A card type that lives in a `CardPool`.
pub trait PoolCard: CardFace + Clone {
    /// Blueprint kind this card is minted from.
    const KIND: CardKind;

    fn id(&self) -> InstanceId;

    /// Create a fresh instance of a printing.
    fn mint(blueprint: &Blueprint, variant: &Variant, id: InstanceId) -> Self;
}

impl PoolCard for WoodyPlant {
    const KIND: CardKind = CardKind::WoodyPlant;

    fn id(&self) -> InstanceId {
        self.id
    }

    fn mint(blueprint: &Blueprint, variant: &Variant, id: InstanceId) -> Self {
        create_woody_plant(blueprint, variant, id)
    }
}

impl PoolCard for Dweller {
    const KIND: CardKind = CardKind::Dweller;

    fn id(&self) -> InstanceId {
        self.id
    }

    fn mint(blueprint: &Blueprint, variant: &Variant, id: InstanceId) -> Self {
        create_dweller(blueprint, variant, id)
    }
}

/// An ordered pool of card instances.
///
/// ## Usage
///
/// ```
/// use forest_tally::cards::{Expansion, TreeSymbol, WoodyPlant};
/// use forest_tally::core::InstanceId;
/// use forest_tally::game::CardPool;
///
/// let mut pool = CardPool::new();
/// pool.push(WoodyPlant::new(InstanceId(0), "Oak", Expansion::Base, Some(TreeSymbol::Oak)));
/// pool.push(WoodyPlant::new(InstanceId(1), "Birch", Expansion::Base, Some(TreeSymbol::Birch)));
///
/// let birch = pool.take(|w| w.name == "Birch").unwrap();
/// assert_eq!(birch.id, InstanceId(1));
/// assert_eq!(pool.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardPool<T: Clone> {
    cards: Vector<T>,
}

impl<T: Clone> Default for CardPool<T> {
    fn default() -> Self {
        Self {
            cards: Vector::new(),
        }
    }
}

impl<T: PoolCard> CardPool<T> {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card to the end of the pool.
    ///
    /// Panics if a card with the same id is already pooled.
    pub fn push(&mut self, card: T) {
        if self.contains(card.id()) {
            panic!("Card {} already in pool", card.id());
        }
        self.cards.push_back(card);
    }

    /// First card matching `predicate`, in pool order.
    pub fn find<F>(&self, predicate: F) -> Option<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.cards.iter().find(|c| predicate(c))
    }

    /// Remove and return the first card matching `predicate`.
    pub fn take<F>(&mut self, predicate: F) -> Option<T>
    where
        F: Fn(&T) -> bool,
    {
        let index = self.cards.iter().position(|c| predicate(c))?;
        Some(self.cards.remove(index))
    }

    /// Remove every card whose id is in `ids`. Returns how many were removed.
    pub fn remove_all(&mut self, ids: &FxHashSet<InstanceId>) -> usize {
        let before = self.cards.len();
        self.cards = self
            .cards
            .iter()
            .filter(|c| !ids.contains(&c.id()))
            .cloned()
            .collect();
        before - self.cards.len()
    }

    /// Check if a card with this id is pooled.
    #[must_use]
    pub fn contains(&self, id: InstanceId) -> bool {
        self.cards.iter().any(|c| c.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate in pool order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cards.iter()
    }
}

/// The authoritative deck of one game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    pub woody_plants: CardPool<WoodyPlant>,
    pub dwellers: CardPool<Dweller>,

    /// Cave kinds available in this game. Caves are matched by name and are
    /// never removed.
    pub caves: Vec<Cave>,

    ids: InstanceIdAllocator,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an id for a new card instance of this game.
    pub fn alloc_id(&mut self) -> InstanceId {
        self.ids.alloc()
    }

    /// Look up a cave by name.
    #[must_use]
    pub fn cave(&self, name: &str) -> Option<&Cave> {
        self.caves.iter().find(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{DwellerPosition, Expansion, TreeSymbol};

    fn oak(id: u32) -> WoodyPlant {
        WoodyPlant::new(InstanceId(id), "Oak", Expansion::Base, Some(TreeSymbol::Oak))
    }

    #[test]
    fn test_find_returns_first_in_order() {
        let mut pool = CardPool::new();
        pool.push(oak(3));
        pool.push(oak(1));

        assert_eq!(pool.find(|w| w.name == "Oak").unwrap().id, InstanceId(3));
        assert!(pool.find(|w| w.name == "Elm").is_none());
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_take_removes_card() {
        let mut pool = CardPool::new();
        pool.push(oak(0));
        pool.push(oak(1));

        let taken = pool.take(|w| w.id == InstanceId(1)).unwrap();
        assert_eq!(taken.id, InstanceId(1));
        assert!(!pool.contains(InstanceId(1)));
        assert!(pool.take(|w| w.id == InstanceId(1)).is_none());
    }

    #[test]
    fn test_remove_all() {
        let mut pool = CardPool::new();
        for id in 0..5 {
            pool.push(oak(id));
        }

        let ids: FxHashSet<_> =
            [InstanceId(1), InstanceId(3), InstanceId(99)].into_iter().collect();
        assert_eq!(pool.remove_all(&ids), 2);

        let remaining: Vec<_> = pool.iter().map(|w| w.id.raw()).collect();
        assert_eq!(remaining, vec![0, 2, 4]);
    }

    #[test]
    #[should_panic(expected = "already in pool")]
    fn test_duplicate_push_panics() {
        let mut pool = CardPool::new();
        pool.push(oak(0));
        pool.push(oak(0));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut deck = Deck::new();
        deck.woody_plants.push(oak(0));
        deck.dwellers.push(Dweller::new(
            InstanceId(1),
            "Red Squirrel",
            Expansion::Base,
            Some(TreeSymbol::Oak),
            DwellerPosition::Top,
        ));

        let mut snapshot = deck.clone();
        snapshot.woody_plants.take(|_| true);
        snapshot.dwellers.take(|_| true);

        assert_eq!(deck.woody_plants.len(), 1);
        assert_eq!(deck.dwellers.len(), 1);
        assert!(snapshot.woody_plants.is_empty());
    }

    #[test]
    fn test_cave_lookup() {
        let mut deck = Deck::new();
        deck.caves.push(Cave::new("REGULAR_CAVE"));

        assert!(deck.cave("REGULAR_CAVE").is_some());
        assert!(deck.cave("SECRET_CAVE").is_none());
    }

    #[test]
    fn test_alloc_id() {
        let mut deck = Deck::new();
        assert_ne!(deck.alloc_id(), deck.alloc_id());
    }
}
