//! Miner domain model.
//!
//! This module defines the [`Miner`] type representing a competitor on the
//! mining leaderboard. A miner's `rank` is a derived display field, not
//! authoritative: it must be recomputed via
//! [`crate::store::recompute_ranks`] whenever any miner's score changes.

use serde::{Deserialize, Serialize};

/// A competitor on the mining leaderboard.
///
/// # Fields
///
/// - `rank`: 1-based dense ordinal derived from score (no gaps, no ties by
///   construction). Display-only; see [`crate::store::recompute_ranks`].
/// - `name`: Display name
/// - `address`: Wallet address (42-char `0x`-prefixed hex)
/// - `score`: Accumulated competition score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Miner {
    pub rank: u32,
    pub name: String,
    pub address: String,
    pub score: i64,
}

impl Miner {
    /// Creates a new miner record with an unassigned rank of 0.
    ///
    /// Rank 0 is outside the valid 1-based range and renders as a plain
    /// numeric badge until [`crate::store::recompute_ranks`] assigns a real
    /// position.
    #[must_use]
    pub fn new(name: impl Into<String>, address: impl Into<String>, score: i64) -> Self {
        Self {
            rank: 0,
            name: name.into(),
            address: address.into(),
            score,
        }
    }
}
