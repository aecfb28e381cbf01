//! Explicit view state passed into the pure view-model functions.
//!
//! The only stateful elements in the whole view layer are the two UI-level
//! controls: the current query string and the current (key, direction) pair.
//! [`ViewState`] makes them an explicit value owned by the presentation layer
//! and passed into pure projection functions, never ambient mutable globals.

use crate::view::sort::Direction;

/// Search and sort controls for one table screen.
///
/// Generic over the entity's sort key enum so each screen gets a typed state
/// (`ViewState<MinerSortKey>` for the leaderboard, `ViewState<BlockSortKey>`
/// for the block explorer, and so on).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState<K> {
    /// Current free-text search query.
    pub query: String,

    /// Column the table is currently sorted by.
    pub sort_key: K,

    /// Current sort direction.
    pub direction: Direction,
}

impl<K: Copy + PartialEq> ViewState<K> {
    /// Creates a view state with an empty query, sorted ascending by `key`.
    #[must_use]
    pub fn new(key: K) -> Self {
        Self {
            query: String::new(),
            sort_key: key,
            direction: Direction::Ascending,
        }
    }

    /// Applies the column-header click convention.
    ///
    /// Toggling the same key flips direction; selecting a new key resets
    /// direction to ascending. This convention is user-visible behavior and
    /// must be preserved exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainview::view::{Direction, MinerSortKey, ViewState};
    ///
    /// let mut state = ViewState::new(MinerSortKey::Rank);
    /// state.toggle_sort(MinerSortKey::Rank);
    /// assert_eq!(state.direction, Direction::Descending);
    ///
    /// state.toggle_sort(MinerSortKey::Score);
    /// assert_eq!(state.sort_key, MinerSortKey::Score);
    /// assert_eq!(state.direction, Direction::Ascending);
    /// ```
    pub fn toggle_sort(&mut self, key: K) {
        if self.sort_key == key {
            self.direction = self.direction.flipped();
        } else {
            self.sort_key = key;
            self.direction = Direction::Ascending;
        }
    }

    /// Replaces the current search query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Clears the search query, matching the "Clear Search" affordance shown
    /// on empty result sets.
    pub fn clear_query(&mut self) {
        self.query.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::sort::MinerSortKey;

    #[test]
    fn same_key_flips_direction() {
        let mut state = ViewState::new(MinerSortKey::Rank);
        assert_eq!(state.direction, Direction::Ascending);

        state.toggle_sort(MinerSortKey::Rank);
        assert_eq!(state.direction, Direction::Descending);

        state.toggle_sort(MinerSortKey::Rank);
        assert_eq!(state.direction, Direction::Ascending);
    }

    #[test]
    fn new_key_resets_to_ascending() {
        let mut state = ViewState::new(MinerSortKey::Rank);
        state.toggle_sort(MinerSortKey::Rank);
        assert_eq!(state.direction, Direction::Descending);

        state.toggle_sort(MinerSortKey::Score);
        assert_eq!(state.sort_key, MinerSortKey::Score);
        assert_eq!(state.direction, Direction::Ascending);
    }

    #[test]
    fn query_edits() {
        let mut state = ViewState::new(MinerSortKey::Rank);
        state.set_query("crypto");
        assert_eq!(state.query, "crypto");
        state.clear_query();
        assert!(state.query.is_empty());
    }
}
