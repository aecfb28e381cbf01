//! View layer: pure transformation stages producing display-ready views.
//!
//! This module implements the tabular view-model pipeline shared by the
//! dashboard screens (item listing, block explorer, leaderboard, miner
//! profile):
//!
//! ```text
//! Record Store → Filter Engine → Sort Engine → View Projector → presentation
//! ```
//!
//! No component holds hidden state; each is a pure transformation over its
//! input. The only stateful elements are the two UI-level controls (query
//! string, sort key/direction) captured explicitly in [`ViewState`] and owned
//! by the presentation layer.
//!
//! # Modules
//!
//! - [`filter`]: Case-insensitive substring filtering over field sets
//! - [`sort`]: Stable, direction-aware sorting with typed per-entity keys
//! - [`state`]: Explicit view state with the sort-toggle convention
//! - [`projector`]: Per-screen projections and cosmetic derivations
//! - [`viewmodel`]: Display-ready view model types

pub mod filter;
pub mod projector;
pub mod sort;
pub mod state;
pub mod viewmodel;

pub use filter::{filter, BlockField, ItemField, MinerField, Searchable};
pub use projector::{
    block_explorer_view, block_stats, item_index_view, leaderboard_view, miner_profile_view,
    miner_stats, truncate_address, truncate_address_wide,
};
pub use sort::{sort, BlockSortKey, Direction, ItemSortKey, MinerSortKey, SortValue, Sortable};
pub use state::ViewState;
pub use viewmodel::{
    BlockExplorerView, BlockRow, BlockStats, ItemIndexView, ItemRow, LeaderboardView,
    MinerProfileStats, MinerProfileView, MinerRow, MinerStats, RankBadge,
};
