//! Core types: instance and player ids, import configuration, game id RNG.

pub mod config;
pub mod entity;
pub mod player;
pub mod rng;

pub use config::{ImportConfig, DEFAULT_STORAGE_KEY};
pub use entity::{InstanceId, InstanceIdAllocator};
pub use player::PlayerId;
pub use rng::GameRng;
