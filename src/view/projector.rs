//! View projection: filter + sort + derived display fields.
//!
//! The projector combines the filter and sort engines with the cosmetic
//! derivations each screen needs (address truncation, rank badges, aggregate
//! stats) and produces a display-ready view model. It never mutates the
//! source collection, and derived fields never replace source fields: every
//! row embeds the full original record.
//!
//! Aggregate stats are computed from the filtered-but-unsorted collection, so
//! they track the visible result set rather than the sort order.

use crate::domain::{Block, Item, Miner};
use crate::view::filter::{filter, BlockField, ItemField, MinerField};
use crate::view::sort::{sort, BlockSortKey, Direction, ItemSortKey, MinerSortKey};
use crate::view::state::ViewState;
use crate::view::viewmodel::{
    BlockExplorerView, BlockRow, BlockStats, ItemIndexView, ItemRow, LeaderboardView, MinerRow,
    MinerProfileStats, MinerProfileView, MinerStats, RankBadge,
};
use std::collections::HashSet;

/// Prefix/suffix widths for the compact address truncation.
const TRUNC_SHORT: (usize, usize) = (6, 4);

/// Prefix/suffix widths for the leaderboard's wider truncation.
const TRUNC_WIDE: (usize, usize) = (8, 6);

/// Truncates an address for display: first 6 characters, an ellipsis, and
/// the last 4 characters.
///
/// Purely cosmetic; truncated forms collide and must never be used as a
/// uniqueness key. Inputs too short to truncate are returned unchanged.
///
/// # Examples
///
/// ```
/// use chainview::view::truncate_address;
///
/// let short = truncate_address("0x1234567890abcdef1234567890abcdef12345678");
/// assert_eq!(short, "0x1234…5678");
/// assert_eq!(truncate_address("0x1234"), "0x1234");
/// ```
#[must_use]
pub fn truncate_address(address: &str) -> String {
    truncate(address, TRUNC_SHORT.0, TRUNC_SHORT.1)
}

/// Truncates an address for the leaderboard: first 8 characters, an
/// ellipsis, and the last 6 characters.
#[must_use]
pub fn truncate_address_wide(address: &str) -> String {
    truncate(address, TRUNC_WIDE.0, TRUNC_WIDE.1)
}

fn truncate(text: &str, prefix: usize, suffix: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= prefix + suffix {
        return text.to_string();
    }

    let head: String = chars[..prefix].iter().collect();
    let tail: String = chars[chars.len() - suffix..].iter().collect();
    format!("{head}…{tail}")
}

/// Computes leaderboard aggregate stats.
///
/// The zero-length average is defined as 0, not a division fault.
#[must_use]
pub fn miner_stats(miners: &[Miner]) -> MinerStats {
    let total_score: i64 = miners.iter().map(|m| m.score).sum();
    let average_score = if miners.is_empty() {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        let average = total_score as f64 / miners.len() as f64;
        average
    };

    MinerStats {
        total_miners: miners.len(),
        total_score,
        average_score,
    }
}

/// Computes block explorer aggregate stats.
#[must_use]
pub fn block_stats(blocks: &[Block]) -> BlockStats {
    let unique_miners = blocks
        .iter()
        .map(|b| b.miner.as_str())
        .collect::<HashSet<_>>()
        .len();
    let average_difficulty = if blocks.is_empty() {
        0.0
    } else {
        let total: u64 = blocks.iter().map(|b| u64::from(b.difficulty)).sum();
        #[allow(clippy::cast_precision_loss)]
        let average = total as f64 / blocks.len() as f64;
        average
    };

    BlockStats {
        total_blocks: blocks.len(),
        unique_miners,
        average_difficulty,
    }
}

/// Projects the leaderboard screen from a miner collection and view state.
///
/// Pipeline: filter by the search query over name/address, compute stats
/// over the filtered set, sort by the state's (key, direction), then derive
/// per-row display fields (wide-truncated address, rank badge).
#[must_use]
pub fn leaderboard_view(miners: &[Miner], state: &ViewState<MinerSortKey>) -> LeaderboardView {
    let visible = filter(miners, &state.query, MinerField::SEARCH_FIELDS);
    let stats = miner_stats(&visible);
    let rows = sort(&visible, state.sort_key, state.direction)
        .into_iter()
        .map(|miner| MinerRow {
            badge: RankBadge::from_rank(i64::from(miner.rank)),
            short_address: truncate_address_wide(&miner.address),
            miner,
        })
        .collect();

    LeaderboardView {
        rows,
        stats,
        total: miners.len(),
    }
}

/// Projects the item listing screen from an item collection and view state.
///
/// Items are searched by name, description, and owner address.
#[must_use]
pub fn item_index_view(items: &[Item], state: &ViewState<ItemSortKey>) -> ItemIndexView {
    let visible = filter(items, &state.query, ItemField::SEARCH_FIELDS);
    let rows = sort(&visible, state.sort_key, state.direction)
        .into_iter()
        .map(|item| ItemRow {
            short_owner: truncate_address(&item.owner),
            item,
        })
        .collect();

    ItemIndexView {
        rows,
        total: items.len(),
    }
}

/// Projects the block explorer screen from a block collection and view state.
///
/// Blocks are searched by block id and miner name.
#[must_use]
pub fn block_explorer_view(blocks: &[Block], state: &ViewState<BlockSortKey>) -> BlockExplorerView {
    let visible = filter(blocks, &state.query, BlockField::SEARCH_FIELDS);
    let stats = block_stats(&visible);
    let rows = sort(&visible, state.sort_key, state.direction)
        .into_iter()
        .map(|block| BlockRow {
            age: block.time_ago(),
            block,
        })
        .collect();

    BlockExplorerView {
        rows,
        stats,
        total: blocks.len(),
    }
}

/// Projects a single miner's profile: the miner record with its derived
/// display fields, the blocks they mined (newest first), and per-miner
/// aggregates.
///
/// Returns `None` when no leaderboard entry holds the given address; the
/// presentation layer renders that as a not-found state.
#[must_use]
pub fn miner_profile_view(
    address: &str,
    miners: &[Miner],
    blocks: &[Block],
) -> Option<MinerProfileView> {
    let miner = miners.iter().find(|m| m.address == address)?.clone();

    let mined: Vec<Block> = blocks
        .iter()
        .filter(|b| b.miner == miner.name)
        .cloned()
        .collect();
    let BlockStats {
        total_blocks,
        average_difficulty,
        ..
    } = block_stats(&mined);

    let rows = sort(&mined, BlockSortKey::Timestamp, Direction::Descending)
        .into_iter()
        .map(|block| BlockRow {
            age: block.time_ago(),
            block,
        })
        .collect();

    Some(MinerProfileView {
        badge: RankBadge::from_rank(i64::from(miner.rank)),
        short_address: truncate_address_wide(&miner.address),
        blocks: rows,
        stats: MinerProfileStats {
            total_blocks,
            average_difficulty,
        },
        miner,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn miners() -> Vec<Miner> {
        let mut miners = vec![
            Miner::new(
                "CryptoMiner_Pro",
                "0x1234567890abcdef1234567890abcdef12345678",
                15420,
            ),
            Miner::new(
                "BlockDigger",
                "0xabcdef1234567890abcdef1234567890abcdef12",
                12890,
            ),
            Miner::new(
                "HashHunter",
                "0x9876543210fedcba9876543210fedcba98765432",
                11750,
            ),
            Miner::new(
                "MiningMachine",
                "0xfedcba0987654321fedcba0987654321fedcba09",
                9680,
            ),
        ];
        for (i, miner) in miners.iter_mut().enumerate() {
            miner.rank = u32::try_from(i).unwrap() + 1;
        }
        miners
    }

    #[test]
    fn truncation_variants() {
        let addr = "0x1234567890abcdef1234567890abcdef12345678";
        assert_eq!(truncate_address(addr), "0x1234…5678");
        assert_eq!(truncate_address_wide(addr), "0x123456…345678");
    }

    #[test]
    fn short_input_passes_through_untruncated() {
        assert_eq!(truncate_address("0x12345678"), "0x12345678");
        assert_eq!(truncate_address(""), "");
    }

    #[test]
    fn badge_tiers() {
        assert_eq!(RankBadge::from_rank(1), RankBadge::Gold);
        assert_eq!(RankBadge::from_rank(2), RankBadge::Silver);
        assert_eq!(RankBadge::from_rank(3), RankBadge::Bronze);
        assert_eq!(RankBadge::from_rank(4), RankBadge::Numeric(4));
        assert_eq!(RankBadge::from_rank(0), RankBadge::Numeric(0));
        assert_eq!(RankBadge::from_rank(-2), RankBadge::Numeric(-2));
        assert_eq!(RankBadge::from_rank(4).label(), "#4");
        assert_eq!(RankBadge::from_rank(1).label(), "1st");
    }

    #[test]
    fn empty_miner_stats_average_is_zero() {
        let stats = miner_stats(&[]);
        assert_eq!(stats.total_miners, 0);
        assert_eq!(stats.total_score, 0);
        assert_eq!(stats.average_score, 0.0);
    }

    #[test]
    fn miner_stats_sum_and_average() {
        let stats = miner_stats(&miners());
        assert_eq!(stats.total_miners, 4);
        assert_eq!(stats.total_score, 49740);
        assert!((stats.average_score - 12435.0).abs() < f64::EPSILON);
    }

    #[test]
    fn block_stats_count_unique_miners() {
        let blocks = vec![
            Block::new("BLK_001", "CryptoMiner_Pro", 156, 10),
            Block::new("BLK_002", "BlockDigger", 142, 20),
            Block::new("BLK_003", "CryptoMiner_Pro", 139, 30),
        ];
        let stats = block_stats(&blocks);
        assert_eq!(stats.total_blocks, 3);
        assert_eq!(stats.unique_miners, 2);
        assert!((stats.average_difficulty - 145.666_666).abs() < 1e-3);

        let empty = block_stats(&[]);
        assert_eq!(empty.average_difficulty, 0.0);
    }

    #[test]
    fn leaderboard_view_filters_sorts_and_derives() {
        let miners = miners();
        let mut state = ViewState::new(MinerSortKey::Score);
        state.direction = Direction::Descending;
        state.set_query("m");

        let view = leaderboard_view(&miners, &state);
        // "m" matches CryptoMiner_Pro and MiningMachine by name.
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.total, 4);
        assert_eq!(view.rows[0].miner.name, "CryptoMiner_Pro");
        assert_eq!(view.rows[0].badge, RankBadge::Gold);
        assert_eq!(view.rows[0].short_address, "0x123456…345678");
        // Stats reflect the filtered set, not the full one.
        assert_eq!(view.stats.total_miners, 2);
        assert_eq!(view.stats.total_score, 15420 + 9680);
    }

    #[test]
    fn stats_ignore_sort_order() {
        let miners = miners();
        let mut ascending = ViewState::new(MinerSortKey::Score);
        let mut descending = ViewState::new(MinerSortKey::Score);
        descending.direction = Direction::Descending;
        ascending.set_query("crypto");
        descending.set_query("crypto");

        let a = leaderboard_view(&miners, &ascending);
        let b = leaderboard_view(&miners, &descending);
        assert_eq!(a.stats, b.stats);
    }

    #[test]
    fn miner_profile_collects_own_blocks_newest_first() {
        let miners = miners();
        let blocks = vec![
            Block::new("BLK_001", "CryptoMiner_Pro", 156, 100),
            Block::new("BLK_002", "BlockDigger", 142, 200),
            Block::new("BLK_003", "CryptoMiner_Pro", 144, 300),
        ];

        let view = miner_profile_view(
            "0x1234567890abcdef1234567890abcdef12345678",
            &miners,
            &blocks,
        )
        .unwrap();

        assert_eq!(view.miner.name, "CryptoMiner_Pro");
        assert_eq!(view.badge, RankBadge::Gold);
        assert_eq!(view.short_address, "0x123456…345678");

        let ids: Vec<&str> = view
            .blocks
            .iter()
            .map(|row| row.block.block_id.as_str())
            .collect();
        assert_eq!(ids, vec!["BLK_003", "BLK_001"]);
        assert_eq!(view.stats.total_blocks, 2);
        assert!((view.stats.average_difficulty - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_address_has_no_profile() {
        let profile = miner_profile_view(
            "0xcafe0000000000000000000000000000000000ff",
            &miners(),
            &[],
        );
        assert!(profile.is_none());
    }

    #[test]
    fn blockless_miner_profile_has_zero_aggregates() {
        let view = miner_profile_view(
            "0x9876543210fedcba9876543210fedcba98765432",
            &miners(),
            &[],
        )
        .unwrap();

        assert_eq!(view.miner.name, "HashHunter");
        assert!(view.blocks.is_empty());
        assert_eq!(view.stats.total_blocks, 0);
        assert_eq!(view.stats.average_difficulty, 0.0);
    }

    #[test]
    fn views_do_not_mutate_sources() {
        let miners = miners();
        let before = miners.clone();
        let _ = leaderboard_view(&miners, &ViewState::new(MinerSortKey::Rank));
        assert_eq!(miners, before);
    }
}
