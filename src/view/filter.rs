//! Free-text filtering over record collections.
//!
//! The filter engine keeps records where the lower-cased query is a substring
//! of the lower-cased value of at least one searched field. It is pure (the
//! input slice is never mutated) and total (a record with no value for a
//! field is treated as matching against the empty string, never an error).
//!
//! Each entity declares which of its fields are searchable via the
//! [`Searchable`] trait, and which fields its search box covers via a
//! `SEARCH_FIELDS` constant mirroring the dashboard screens: items search
//! name, description, and owner; blocks search block id and miner name;
//! miners search name and address.

use crate::domain::{Block, Item, Miner};

/// A record type whose text fields can be searched.
///
/// `Field` is a per-entity enum naming the searchable fields. `field_text`
/// returns `None` when the record has no value for the field; the filter
/// treats that as an empty string.
pub trait Searchable {
    /// Enum of this record's searchable fields.
    type Field: Copy;

    /// Returns the text of the given field, if the record has one.
    fn field_text(&self, field: Self::Field) -> Option<&str>;
}

/// Returns the subsequence of `records` matching `query` on any of `fields`.
///
/// Matching lower-cases both sides and tests substring containment. An empty
/// or whitespace-only query returns the full collection unchanged, preserving
/// original order. The input is never mutated; the result is a new sequence.
///
/// # Examples
///
/// ```
/// use chainview::domain::Miner;
/// use chainview::view::{filter, MinerField};
///
/// let miners = vec![
///     Miner::new("CryptoMiner_Pro", "0x1234567890abcdef1234567890abcdef12345678", 15420),
///     Miner::new("BlockDigger", "0xabcdef1234567890abcdef1234567890abcdef12", 12890),
/// ];
///
/// let hits = filter(&miners, "crypto", MinerField::SEARCH_FIELDS);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].name, "CryptoMiner_Pro");
///
/// // Empty query is the identity.
/// assert_eq!(filter(&miners, "   ", MinerField::SEARCH_FIELDS), miners);
/// ```
#[must_use]
pub fn filter<T>(records: &[T], query: &str, fields: &[T::Field]) -> Vec<T>
where
    T: Searchable + Clone,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| {
            fields.iter().any(|&field| {
                record
                    .field_text(field)
                    .unwrap_or("")
                    .to_lowercase()
                    .contains(&needle)
            })
        })
        .cloned()
        .collect()
}

/// Searchable fields of an [`Item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Name,
    Description,
    Owner,
}

impl ItemField {
    /// Fields covered by the item search box.
    pub const SEARCH_FIELDS: &'static [Self] = &[Self::Name, Self::Description, Self::Owner];
}

impl Searchable for Item {
    type Field = ItemField;

    fn field_text(&self, field: ItemField) -> Option<&str> {
        match field {
            ItemField::Name => Some(&self.name),
            ItemField::Description => Some(&self.description),
            ItemField::Owner => Some(&self.owner),
        }
    }
}

/// Searchable fields of a [`Block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockField {
    BlockId,
    Miner,
}

impl BlockField {
    /// Fields covered by the block explorer search box.
    pub const SEARCH_FIELDS: &'static [Self] = &[Self::BlockId, Self::Miner];
}

impl Searchable for Block {
    type Field = BlockField;

    fn field_text(&self, field: BlockField) -> Option<&str> {
        match field {
            BlockField::BlockId => Some(&self.block_id),
            BlockField::Miner => Some(&self.miner),
        }
    }
}

/// Searchable fields of a [`Miner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinerField {
    Name,
    Address,
}

impl MinerField {
    /// Fields covered by the leaderboard search box.
    pub const SEARCH_FIELDS: &'static [Self] = &[Self::Name, Self::Address];
}

impl Searchable for Miner {
    type Field = MinerField;

    fn field_text(&self, field: MinerField) -> Option<&str> {
        match field {
            MinerField::Name => Some(&self.name),
            MinerField::Address => Some(&self.address),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks() -> Vec<Block> {
        vec![
            Block::new("BLK_001", "CryptoMiner_Pro", 156, 1_705_329_138),
            Block::new("BLK_002", "BlockDigger", 142, 1_705_328_925),
            Block::new("BLK_003", "HashHunter", 139, 1_705_328_712),
        ]
    }

    #[test]
    fn empty_query_is_identity() {
        let records = blocks();
        assert_eq!(filter(&records, "", BlockField::SEARCH_FIELDS), records);
        assert_eq!(filter(&records, "   \t", BlockField::SEARCH_FIELDS), records);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let records = blocks();
        let hits = filter(&records, "HASHHUNTER", BlockField::SEARCH_FIELDS);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].block_id, "BLK_003");
    }

    #[test]
    fn any_listed_field_can_match() {
        let records = blocks();
        // "blk_002" matches on block id, "digger" on miner name.
        assert_eq!(filter(&records, "blk_002", BlockField::SEARCH_FIELDS).len(), 1);
        assert_eq!(filter(&records, "digger", BlockField::SEARCH_FIELDS).len(), 1);
    }

    #[test]
    fn sound_and_complete() {
        let records = blocks();
        let needle = "blk";
        let hits = filter(&records, needle, BlockField::SEARCH_FIELDS);

        for hit in &hits {
            let matched = BlockField::SEARCH_FIELDS.iter().any(|&f| {
                hit.field_text(f).unwrap_or("").to_lowercase().contains(needle)
            });
            assert!(matched, "{} should match {needle}", hit.block_id);
        }
        for record in &records {
            let matched = BlockField::SEARCH_FIELDS.iter().any(|&f| {
                record.field_text(f).unwrap_or("").to_lowercase().contains(needle)
            });
            assert_eq!(matched, hits.contains(record));
        }
    }

    #[test]
    fn unmatched_query_returns_empty() {
        let records = blocks();
        assert!(filter(&records, "zzz", BlockField::SEARCH_FIELDS).is_empty());
    }

    #[test]
    fn restricting_fields_restricts_matches() {
        let records = blocks();
        // Miner name only, so a block id query finds nothing.
        assert!(filter(&records, "blk_001", &[BlockField::Miner]).is_empty());
    }

    #[test]
    fn preserves_input_order() {
        let records = blocks();
        let hits = filter(&records, "blk", BlockField::SEARCH_FIELDS);
        let ids: Vec<&str> = hits.iter().map(|b| b.block_id.as_str()).collect();
        assert_eq!(ids, vec!["BLK_001", "BLK_002", "BLK_003"]);
    }
}
