//! Mined block domain model.
//!
//! This module defines the [`Block`] type representing a block submitted to
//! the mining competition. Blocks are independent, created-once records with
//! no enforced relationship to prior blocks; the chain rendering is purely
//! decorative. They are totally ordered by submission time.

use crate::domain::time::time_ago;
use serde::{Deserialize, Serialize};

/// A block submitted by a miner.
///
/// # Fields
///
/// - `block_id`: Submission identifier (e.g. `BLK_001`), unique per block
/// - `miner`: Display name of the submitting miner
/// - `difficulty`: Numeric difficulty the block was mined at
/// - `timestamp`: Unix timestamp of submission
///
/// # Examples
///
/// ```
/// use chainview::domain::Block;
///
/// let block = Block::new("BLK_001", "CryptoMiner_Pro", 156, 1_705_329_138);
/// assert_eq!(block.block_id, "BLK_001");
/// assert_eq!(block.difficulty, 156);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub block_id: String,
    pub miner: String,
    pub difficulty: u32,
    pub timestamp: i64,
}

impl Block {
    /// Creates a new block record.
    #[must_use]
    pub fn new(
        block_id: impl Into<String>,
        miner: impl Into<String>,
        difficulty: u32,
        timestamp: i64,
    ) -> Self {
        Self {
            block_id: block_id.into(),
            miner: miner.into(),
            difficulty,
            timestamp,
        }
    }

    /// Returns a human-readable string describing how long ago the block was
    /// submitted ("just now", "5m ago", "3h ago", "7d ago").
    #[must_use]
    pub fn time_ago(&self) -> String {
        time_ago(self.timestamp)
    }
}
