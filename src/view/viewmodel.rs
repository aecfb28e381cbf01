//! View model types representing display-ready derived state.
//!
//! View models are immutable values computed by the projector from a record
//! collection and a [`crate::view::ViewState`]. They contain no business
//! logic, only display-ready data: each row embeds the full source record
//! (derived fields never replace source fields) alongside the cosmetic
//! derivations the screens render.

use crate::domain::{Block, Item, Miner};

/// Badge tier derived from a miner's rank.
///
/// Ranks 1/2/3 map to the gold/silver/bronze podium tiers; everything else,
/// including the out-of-range ranks 0 and below, renders as a plain numeric
/// badge. This is a pure function of the rank integer; see
/// [`RankBadge::from_rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankBadge {
    Gold,
    Silver,
    Bronze,
    /// Plain numeric badge for rank 4 and up, and for out-of-range ranks.
    Numeric(i64),
}

impl RankBadge {
    /// Maps a rank to its badge tier.
    ///
    /// Total over all of `i64`: ranks 0 and below should not occur, but they
    /// must not crash the projector, so they fall through to
    /// [`RankBadge::Numeric`].
    ///
    /// # Examples
    ///
    /// ```
    /// use chainview::view::RankBadge;
    ///
    /// assert_eq!(RankBadge::from_rank(1), RankBadge::Gold);
    /// assert_eq!(RankBadge::from_rank(4), RankBadge::Numeric(4));
    /// assert_eq!(RankBadge::from_rank(0), RankBadge::Numeric(0));
    /// ```
    #[must_use]
    pub fn from_rank(rank: i64) -> Self {
        match rank {
            1 => Self::Gold,
            2 => Self::Silver,
            3 => Self::Bronze,
            n => Self::Numeric(n),
        }
    }

    /// Returns the display label ("1st", "2nd", "3rd", or "#n").
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Gold => "1st".to_string(),
            Self::Silver => "2nd".to_string(),
            Self::Bronze => "3rd".to_string(),
            Self::Numeric(n) => format!("#{n}"),
        }
    }
}

/// One row of the leaderboard table.
#[derive(Debug, Clone, PartialEq)]
pub struct MinerRow {
    /// Full source record.
    pub miner: Miner,

    /// Podium badge derived from the rank.
    pub badge: RankBadge,

    /// Wide-truncated wallet address (first 8 + last 6). Cosmetic only,
    /// never a uniqueness key.
    pub short_address: String,
}

/// One row of the item listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    /// Full source record.
    pub item: Item,

    /// Truncated owner address (first 6 + last 4). Cosmetic only.
    pub short_owner: String,
}

/// One card in the block explorer strip.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockRow {
    /// Full source record.
    pub block: Block,

    /// Relative submission time ("5m ago").
    pub age: String,
}

/// Aggregate leaderboard statistics.
///
/// Recomputed from the full filtered-but-unsorted collection whenever it
/// changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinerStats {
    /// Number of miners in the collection.
    pub total_miners: usize,

    /// Combined score across all miners.
    pub total_score: i64,

    /// Mean score per miner; 0 for an empty collection, never a division
    /// fault.
    pub average_score: f64,
}

/// Aggregate block explorer statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockStats {
    /// Number of blocks in the collection.
    pub total_blocks: usize,

    /// Number of distinct miner names among them.
    pub unique_miners: usize,

    /// Mean difficulty; 0 for an empty collection.
    pub average_difficulty: f64,
}

/// Display-ready leaderboard screen.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardView {
    /// Filtered, sorted rows with derived fields.
    pub rows: Vec<MinerRow>,

    /// Stats over the filtered-but-unsorted collection.
    pub stats: MinerStats,

    /// Total records before filtering, for "showing X of Y" footers.
    pub total: usize,
}

/// Display-ready item listing screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemIndexView {
    pub rows: Vec<ItemRow>,
    pub total: usize,
}

/// Display-ready block explorer screen.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockExplorerView {
    pub rows: Vec<BlockRow>,
    pub stats: BlockStats,
    pub total: usize,
}

/// Aggregates over a single miner's blocks, shown on the profile screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinerProfileStats {
    /// Number of blocks this miner has mined.
    pub total_blocks: usize,

    /// Mean difficulty of those blocks; 0 when there are none.
    pub average_difficulty: f64,
}

/// Display-ready miner profile screen.
///
/// Projected only for an address that holds a leaderboard entry; unknown
/// addresses project to `None`, which presentation renders as a not-found
/// state.
#[derive(Debug, Clone, PartialEq)]
pub struct MinerProfileView {
    /// Full source record.
    pub miner: Miner,

    /// Podium badge derived from the rank.
    pub badge: RankBadge,

    /// Wide-truncated wallet address. Cosmetic only.
    pub short_address: String,

    /// Blocks mined by this miner, newest first.
    pub blocks: Vec<BlockRow>,

    /// Aggregates over this miner's blocks.
    pub stats: MinerProfileStats,
}
