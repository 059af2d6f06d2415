//! Card blueprints - static card data.
//!
//! `Blueprint` holds the immutable properties of a named card: its kind,
//! whether it is part of the finite deck, and the printings (variants) it
//! exists in. For example, "Sapling" is a woody plant that is not part of
//! the deck and can always be minted on demand.
//!
//! Instance-specific data (id, placed dwellers) is stored separately in
//! `WoodyPlant` / `Dweller`.

use rustc_hash::FxHashMap;

use super::attributes::{CardKind, DwellerPosition, Expansion, TreeSymbol, VariantKey};

/// One printing of a blueprint and how many physical copies of it the
/// expansion ships.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Variant {
    pub key: VariantKey,
    pub copies: u8,
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use forest_tally::cards::{Blueprint, Expansion, TreeSymbol, VariantKey};
///
/// let oak = Blueprint::woody_plant("Oak")
///     .with_variant(VariantKey::woody_plant(Expansion::Base, Some(TreeSymbol::Oak)), 7);
///
/// let key = VariantKey::woody_plant(Expansion::Base, Some(TreeSymbol::Oak));
/// assert_eq!(oak.variant(&key).map(|v| v.copies), Some(7));
/// assert!(oak.part_of_deck);
/// ```
#[derive(Clone, Debug)]
pub struct Blueprint {
    /// Card name, unique within a catalog.
    pub name: String,

    /// Woody plant or dweller.
    pub kind: CardKind,

    /// `false` for unlimited cards that are minted on demand instead of
    /// being drawn from the shared pool.
    pub part_of_deck: bool,

    variants: Vec<Variant>,
    index: FxHashMap<VariantKey, usize>,
}

impl Blueprint {
    fn new(name: impl Into<String>, kind: CardKind) -> Self {
        Self {
            name: name.into(),
            kind,
            part_of_deck: true,
            variants: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Create a woody plant blueprint with no variants.
    #[must_use]
    pub fn woody_plant(name: impl Into<String>) -> Self {
        Self::new(name, CardKind::WoodyPlant)
    }

    /// Create a dweller blueprint with no variants.
    #[must_use]
    pub fn dweller(name: impl Into<String>) -> Self {
        Self::new(name, CardKind::Dweller)
    }

    /// Mark the blueprint as unlimited (not part of the finite deck).
    #[must_use]
    pub fn unlimited(mut self) -> Self {
        self.part_of_deck = false;
        self
    }

    /// Add a printing (builder pattern).
    ///
    /// Panics if the key's position does not fit the blueprint kind, or the
    /// printing is already registered.
    #[must_use]
    pub fn with_variant(mut self, key: VariantKey, copies: u8) -> Self {
        let positioned = key.position.is_some();
        match self.kind {
            CardKind::WoodyPlant => {
                assert!(!positioned, "woody plant {} cannot have a position", self.name)
            }
            CardKind::Dweller => assert!(positioned, "dweller {} needs a position", self.name),
        }
        if self.index.contains_key(&key) {
            panic!("Variant {:?} of {} already registered", key, self.name);
        }
        self.index.insert(key, self.variants.len());
        self.variants.push(Variant { key, copies });
        self
    }

    /// Shorthand for a woody plant printing.
    #[must_use]
    pub fn printed(self, game_box: Expansion, tree_symbol: Option<TreeSymbol>, copies: u8) -> Self {
        self.with_variant(VariantKey::woody_plant(game_box, tree_symbol), copies)
    }

    /// Shorthand for a dweller printing.
    #[must_use]
    pub fn printed_at(
        self,
        game_box: Expansion,
        tree_symbol: Option<TreeSymbol>,
        position: DwellerPosition,
        copies: u8,
    ) -> Self {
        self.with_variant(VariantKey::dweller(game_box, tree_symbol, position), copies)
    }

    /// Look up a printing by key.
    #[must_use]
    pub fn variant(&self, key: &VariantKey) -> Option<&Variant> {
        self.index.get(key).map(|&i| &self.variants[i])
    }

    /// All printings, in registration order.
    #[must_use]
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }
}
