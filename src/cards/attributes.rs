//! Fixed card attributes shared by blueprints, instances and DTOs.
//!
//! ## Enumerations
//!
//! - `Expansion`: the game box a card ships in
//! - `TreeSymbol`: the tree species printed in a card's corner
//! - `DwellerPosition`: the side of a woody plant a dweller is placed on
//!
//! These serialize as SCREAMING_SNAKE_CASE strings and must match exactly
//! between producer and consumer app versions.

use serde::{Deserialize, Serialize};

/// Expansion (game box) a card belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Expansion {
    Base,
    Alpine,
    WoodlandEdge,
    Exploration,
}

impl Expansion {
    /// Every expansion, in box order.
    pub const ALL: [Expansion; 4] = [
        Expansion::Base,
        Expansion::Alpine,
        Expansion::WoodlandEdge,
        Expansion::Exploration,
    ];
}

/// Tree symbol printed on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TreeSymbol {
    Linden,
    Oak,
    SilverFir,
    Birch,
    Beech,
    Sycamore,
    DouglasFir,
    HorseChestnut,
    Larch,
    SwissStonePine,
}

/// Slot on a woody plant where a dweller can be placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DwellerPosition {
    Top,
    Bottom,
    Left,
    Right,
}

impl DwellerPosition {
    /// Every position, in slot order.
    pub const ALL: [DwellerPosition; 4] = [
        DwellerPosition::Top,
        DwellerPosition::Bottom,
        DwellerPosition::Left,
        DwellerPosition::Right,
    ];

    /// Slot index of this position.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            DwellerPosition::Top => 0,
            DwellerPosition::Bottom => 1,
            DwellerPosition::Left => 2,
            DwellerPosition::Right => 3,
        }
    }
}

/// Which kind of card a blueprint describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    WoodyPlant,
    Dweller,
}

/// Everything except the name that distinguishes two printings of a card.
///
/// Woody plants have no `position`; dwellers always have one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantKey {
    pub game_box: Expansion,
    pub tree_symbol: Option<TreeSymbol>,
    pub position: Option<DwellerPosition>,
}

impl VariantKey {
    /// Key of a woody plant printing.
    #[must_use]
    pub const fn woody_plant(game_box: Expansion, tree_symbol: Option<TreeSymbol>) -> Self {
        Self {
            game_box,
            tree_symbol,
            position: None,
        }
    }

    /// Key of a dweller printing.
    #[must_use]
    pub const fn dweller(
        game_box: Expansion,
        tree_symbol: Option<TreeSymbol>,
        position: DwellerPosition,
    ) -> Self {
        Self {
            game_box,
            tree_symbol,
            position: Some(position),
        }
    }
}

/// Anything that describes a card face: instances, blueprint variants, DTOs.
///
/// Two faces are the same card when name and variant key are equal; instance
/// identity is deliberately not part of the face.
pub trait CardFace {
    fn name(&self) -> &str;

    fn variant_key(&self) -> VariantKey;

    /// Whether `other` describes the same printed card.
    fn same_face(&self, other: &impl CardFace) -> bool {
        self.name() == other.name() && self.variant_key() == other.variant_key()
    }
}
