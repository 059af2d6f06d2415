//! Card catalog for blueprint lookup.
//!
//! The `Catalog` stores every blueprint the app knows about. Lookup is by
//! name through a hash index; iteration follows registration order so that
//! decks built from the catalog are reproducible.

use rustc_hash::FxHashMap;

use super::attributes::{CardKind, Expansion};
use super::definition::Blueprint;

/// Registry of card blueprints, keyed by name.
///
/// ## Example
///
/// ```
/// use forest_tally::cards::{Blueprint, Catalog, Expansion, TreeSymbol};
///
/// let mut catalog = Catalog::new();
/// catalog.register(
///     Blueprint::woody_plant("Birch").printed(Expansion::Base, Some(TreeSymbol::Birch), 10),
/// );
///
/// let found = catalog.blueprint("Birch").unwrap();
/// assert_eq!(found.variants().len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    blueprints: Vec<Blueprint>,
    by_name: FxHashMap<String, usize>,
    caves: Vec<(String, Expansion)>,
}

impl Catalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a blueprint.
    ///
    /// Panics if a blueprint with the same name already exists.
    pub fn register(&mut self, blueprint: Blueprint) {
        if self.by_name.contains_key(&blueprint.name) {
            panic!("Blueprint {:?} already registered", blueprint.name);
        }
        self.by_name.insert(blueprint.name.clone(), self.blueprints.len());
        self.blueprints.push(blueprint);
    }

    /// Register a cave shipped with `game_box`.
    ///
    /// Panics if a cave with the same name already exists.
    pub fn register_cave(&mut self, name: impl Into<String>, game_box: Expansion) {
        let name = name.into();
        if self.caves.iter().any(|(n, _)| *n == name) {
            panic!("Cave {:?} already registered", name);
        }
        self.caves.push((name, game_box));
    }

    /// Get a blueprint by name.
    #[must_use]
    pub fn blueprint(&self, name: &str) -> Option<&Blueprint> {
        self.by_name.get(name).map(|&i| &self.blueprints[i])
    }

    /// Get a blueprint by name, only if it is of the given kind.
    #[must_use]
    pub fn blueprint_of_kind(&self, name: &str, kind: CardKind) -> Option<&Blueprint> {
        self.blueprint(name).filter(|b| b.kind == kind)
    }

    /// Get the number of registered blueprints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blueprints.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blueprints.is_empty()
    }

    /// Iterate over all blueprints in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Blueprint> {
        self.blueprints.iter()
    }

    /// Iterate over registered caves and the expansion each ships in.
    pub fn caves(&self) -> impl Iterator<Item = (&str, Expansion)> {
        self.caves.iter().map(|(name, game_box)| (name.as_str(), *game_box))
    }
}
