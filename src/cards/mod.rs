//! Card system: attributes, blueprints, instances, and the catalog.
//!
//! ## Key Types
//!
//! - `Expansion`, `TreeSymbol`, `DwellerPosition`: fixed printed attributes
//! - `Blueprint`: static card data with its printings (`Variant`s)
//! - `Catalog`: blueprint lookup by name
//! - `WoodyPlant`, `Dweller`, `Cave`: concrete cards in a game
//!
//! ## Unlimited Cards
//!
//! Blueprints with `part_of_deck == false` are not limited by the physical
//! deck and are minted on demand.

pub mod attributes;
pub mod definition;
pub mod instance;
pub mod registry;
pub mod standard;

pub use attributes::{CardFace, CardKind, DwellerPosition, Expansion, TreeSymbol, VariantKey};
pub use definition::{Blueprint, Variant};
pub use instance::{Cave, Dweller, DwellerSlots, WoodyPlant};
pub use registry::Catalog;
pub use standard::{EXPLORATION_CAVE, REGULAR_CAVE};
