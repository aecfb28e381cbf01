//! Ownership transfer event domain model.
//!
//! This module defines the [`TransferEvent`] type recording one change of
//! ownership for an item. Histories are append-only in concept: a transfer
//! never removes prior history, and each event's `from_owner` equals the
//! item's owner immediately prior to that event (a causal chain per item).
//! Histories are displayed newest first.

use crate::domain::time::time_ago;
use serde::{Deserialize, Serialize};

/// Outcome status of a transfer event.
///
/// Serialized in lowercase to match the snapshot wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferStatus {
    /// Transfer confirmed; the item's owner reflects `to_owner`.
    Completed,

    /// Submitted but not yet confirmed.
    Pending,

    /// Rejected or dropped; the item's owner is unchanged.
    Failed,
}

impl TransferStatus {
    /// Returns the lowercase display label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Pending => "pending",
            Self::Failed => "failed",
        }
    }
}

/// One recorded change of ownership for an item.
///
/// # Fields
///
/// - `id`: History entry identifier, unique within an item's history
/// - `from_owner`: Owner address immediately prior to this event
/// - `to_owner`: Destination owner address
/// - `timestamp`: Unix timestamp of the transfer
/// - `tx_hash`: Hash of the transfer transaction
/// - `status`: Outcome status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferEvent {
    pub id: String,
    pub from_owner: String,
    pub to_owner: String,
    pub timestamp: i64,
    pub tx_hash: String,
    pub status: TransferStatus,
}

impl TransferEvent {
    /// Returns a human-readable string describing how long ago the transfer
    /// happened ("just now", "5m ago", "3h ago", "7d ago").
    #[must_use]
    pub fn time_ago(&self) -> String {
        time_ago(self.timestamp)
    }
}
