//! Players and their forests.

use crate::cards::{Cave, Dweller, WoodyPlant};
use crate::core::entity::InstanceId;
use crate::core::player::PlayerId;

/// Everything a player has built: one cave and an ordered row of woody
/// plants, each carrying its dwellers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Forest {
    pub cave: Cave,
    pub woody_plants: Vec<WoodyPlant>,
}

impl Forest {
    /// Iterate over every dweller in the forest, plant by plant.
    pub fn dwellers(&self) -> impl Iterator<Item = &Dweller> {
        self.woody_plants.iter().flat_map(|w| w.dwellers().iter())
    }

    /// Ids of every card instance in the forest.
    pub fn instance_ids(&self) -> impl Iterator<Item = InstanceId> + '_ {
        self.woody_plants
            .iter()
            .map(|w| w.id)
            .chain(self.dwellers().map(|d| d.id))
    }
}

/// A player in a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,

    /// Display name, unique within the game.
    pub name: String,

    pub forest: Forest,
}
