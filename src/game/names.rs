//! Player name disambiguation.

use super::player::Player;

/// Return `candidate`, or `candidate (n)` with the smallest `n >= 1` such
/// that no player in `players` already has that name.
///
/// ```
/// use forest_tally::game::unique_name;
///
/// assert_eq!(unique_name(&[], "Alice"), "Alice");
/// ```
#[must_use]
pub fn unique_name(players: &[Player], candidate: &str) -> String {
    let taken = |name: &str| players.iter().any(|p| p.name == name);

    let mut name = candidate.to_string();
    let mut counter = 1;
    while taken(&name) {
        name = format!("{} ({})", candidate, counter);
        counter += 1;
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Cave;
    use crate::core::PlayerId;
    use crate::game::factory::create_player;

    fn players(names: &[&str]) -> Vec<Player> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                create_player(PlayerId::new(i as u32), *name, Cave::new("REGULAR_CAVE"), vec![])
            })
            .collect()
    }

    #[test]
    fn test_free_name_is_kept() {
        assert_eq!(unique_name(&players(&["Bob"]), "Alice"), "Alice");
    }

    #[test]
    fn test_collision_appends_counter() {
        assert_eq!(unique_name(&players(&["Alice"]), "Alice"), "Alice (1)");
        assert_eq!(unique_name(&players(&["Alice", "Alice (1)"]), "Alice"), "Alice (2)");
    }

    #[test]
    fn test_fills_lowest_free_counter() {
        assert_eq!(unique_name(&players(&["Alice", "Alice (2)"]), "Alice"), "Alice (1)");
    }

    #[test]
    fn test_suffixed_candidate() {
        // The counter is appended to the candidate as given
        assert_eq!(unique_name(&players(&["Alice (1)"]), "Alice (1)"), "Alice (1) (1)");
    }
}
