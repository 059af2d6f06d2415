//! Player identification.
//!
//! Player ids are assigned in join order and are never reused within a game,
//! even when the display name is disambiguated on import.

use serde::{Deserialize, Serialize};

/// Player identifier. The first player of a game is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The id following the highest id in `existing`, or `PlayerId(0)`.
    ///
    /// ```
    /// use forest_tally::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::next_after(std::iter::empty()), PlayerId::new(0));
    /// assert_eq!(PlayerId::next_after([PlayerId::new(0), PlayerId::new(4)]), PlayerId::new(5));
    /// ```
    pub fn next_after(existing: impl IntoIterator<Item = PlayerId>) -> Self {
        existing
            .into_iter()
            .max()
            .map_or(Self(0), |max| Self(max.0 + 1))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}
