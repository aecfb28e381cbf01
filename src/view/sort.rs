//! Direction-aware, stable sorting over record collections.
//!
//! The sort engine produces a new sequence ordered by a per-entity sort key.
//! String keys compare case-insensitively; numeric keys compare by value.
//! Equal keys preserve original relative order (stable sort). This matters
//! because the record store order often encodes recency or registration
//! order, and silently reordering equal-score entries would make the
//! leaderboard nondeterministic across re-renders.

use crate::domain::{Block, Item, Miner};
use std::cmp::Ordering;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Smallest key first.
    #[default]
    Ascending,

    /// Largest key first.
    Descending,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// A comparable key value extracted from a record.
///
/// Text values compare case-insensitively; numbers compare by value using a
/// total order. A key always yields the same variant for every record of an
/// entity, so cross-variant comparisons never occur in practice; they fall
/// back to a fixed Text-before-Number order to keep the comparator total.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Text(String),
    Number(f64),
}

impl SortValue {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(_), Self::Number(_)) => Ordering::Less,
            (Self::Number(_), Self::Text(_)) => Ordering::Greater,
        }
    }
}

/// A record type with named sort keys.
pub trait Sortable {
    /// Enum of this record's sortable keys.
    type Key: Copy;

    /// Extracts the comparable value for the given key.
    fn sort_value(&self, key: Self::Key) -> SortValue;
}

/// Returns a new sequence of `records` ordered by `key` in `direction`.
///
/// The sort is stable: records with equal keys retain their relative input
/// order under both directions (reversing direction reverses strict-order
/// pairs only). Sorting is idempotent and never mutates the input.
///
/// # Examples
///
/// ```
/// use chainview::domain::Miner;
/// use chainview::view::{sort, Direction, MinerSortKey};
///
/// let miners = vec![
///     Miner::new("B", "0xbb00000000000000000000000000000000000000", 100),
///     Miner::new("A", "0xaa00000000000000000000000000000000000000", 100),
///     Miner::new("C", "0xcc00000000000000000000000000000000000000", 50),
/// ];
///
/// let by_score = sort(&miners, MinerSortKey::Score, Direction::Descending);
/// let names: Vec<&str> = by_score.iter().map(|m| m.name.as_str()).collect();
/// // Equal scores keep input order, not alphabetical.
/// assert_eq!(names, vec!["B", "A", "C"]);
/// ```
#[must_use]
pub fn sort<T>(records: &[T], key: T::Key, direction: Direction) -> Vec<T>
where
    T: Sortable + Clone,
{
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = a.sort_value(key).compare(&b.sort_value(key));
        match direction {
            Direction::Ascending => ordering,
            // Equal stays Equal, so stability survives the reversal.
            Direction::Descending => ordering.reverse(),
        }
    });
    sorted
}

/// Sortable keys of a [`Miner`], matching the leaderboard column headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinerSortKey {
    Rank,
    Name,
    Score,
}

impl Sortable for Miner {
    type Key = MinerSortKey;

    fn sort_value(&self, key: MinerSortKey) -> SortValue {
        match key {
            MinerSortKey::Rank => SortValue::Number(f64::from(self.rank)),
            MinerSortKey::Name => SortValue::Text(self.name.clone()),
            MinerSortKey::Score => {
                #[allow(clippy::cast_precision_loss)]
                let score = self.score as f64;
                SortValue::Number(score)
            }
        }
    }
}

/// Sortable keys of a [`Block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockSortKey {
    BlockId,
    Miner,
    Difficulty,
    Timestamp,
}

impl Sortable for Block {
    type Key = BlockSortKey;

    fn sort_value(&self, key: BlockSortKey) -> SortValue {
        match key {
            BlockSortKey::BlockId => SortValue::Text(self.block_id.clone()),
            BlockSortKey::Miner => SortValue::Text(self.miner.clone()),
            BlockSortKey::Difficulty => SortValue::Number(f64::from(self.difficulty)),
            BlockSortKey::Timestamp => {
                #[allow(clippy::cast_precision_loss)]
                let timestamp = self.timestamp as f64;
                SortValue::Number(timestamp)
            }
        }
    }
}

/// Sortable keys of an [`Item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemSortKey {
    Name,
    CreatedAt,
    Status,
}

impl Sortable for Item {
    type Key = ItemSortKey;

    fn sort_value(&self, key: ItemSortKey) -> SortValue {
        match key {
            ItemSortKey::Name => SortValue::Text(self.name.clone()),
            ItemSortKey::CreatedAt => {
                #[allow(clippy::cast_precision_loss)]
                let created_at = self.created_at as f64;
                SortValue::Number(created_at)
            }
            ItemSortKey::Status => SortValue::Text(self.status.as_str().to_string()),
        }
    }
}
