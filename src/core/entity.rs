//! Card instance identification.
//!
//! Every physical card in a game (woody plant or dweller) has a unique
//! `InstanceId`. Ids are allocated by the deck that created the card, so two
//! instances with the same name, expansion and symbol are still told apart.
//!
//! ## Usage
//!
//! ```
//! use forest_tally::core::{InstanceId, InstanceIdAllocator};
//!
//! let mut ids = InstanceIdAllocator::default();
//! let first = ids.alloc();
//! let second = ids.alloc();
//!
//! assert_ne!(first, second);
//! assert_eq!(first, InstanceId(0));
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for InstanceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// Monotonic allocator for `InstanceId`s.
///
/// Never hands out the same id twice, including ids for cards minted after
/// the deck was built (unlimited cards).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InstanceIdAllocator {
    next: u32,
}

impl InstanceIdAllocator {
    /// Allocate the next free id.
    pub fn alloc(&mut self) -> InstanceId {
        let id = InstanceId(self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_is_monotonic() {
        let mut ids = InstanceIdAllocator::default();

        let a = ids.alloc();
        let b = ids.alloc();
        let c = ids.alloc();

        assert_eq!(a, InstanceId(0));
        assert_eq!(b, InstanceId(1));
        assert_eq!(c, InstanceId(2));
    }

    #[test]
    fn test_cloned_allocator_continues_sequence() {
        let mut ids = InstanceIdAllocator::default();
        ids.alloc();

        let mut snapshot = ids.clone();
        assert_eq!(snapshot.alloc(), ids.alloc());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", InstanceId(42)), "Instance(42)");
    }
}
