//! Registered item domain model.
//!
//! This module defines the [`Item`] type representing a registered asset on
//! the chain, plus its lifecycle [`ItemStatus`]. Items are immutable value
//! records from the view layer's perspective: the only mutation path is an
//! ownership transfer applied by the registry, which rewrites the `owner`
//! field and appends to the item's transfer history.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lifecycle status of a registered item.
///
/// Serialized in lowercase to match the snapshot wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// Registered and held by its current owner.
    Active,

    /// Ownership has changed hands at least once.
    Transferred,

    /// Registration submitted but not yet confirmed.
    Pending,
}

impl ItemStatus {
    /// Returns the lowercase display label used by badges and sort keys.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Transferred => "transferred",
            Self::Pending => "pending",
        }
    }
}

/// A registered asset tracked by the registry.
///
/// Items are created by registration and mutated only by ownership transfers;
/// they are never deleted. The metadata map is free-form and carried through
/// untouched for display.
///
/// # Fields
///
/// - `id`: Registry identifier, unique per item
/// - `name`: Display name
/// - `description`: Free-form description text
/// - `owner`: Current owner's wallet address (42-char `0x`-prefixed hex)
/// - `creator`: Wallet address that registered the item
/// - `created_at`: Unix timestamp of registration
/// - `status`: Lifecycle status
/// - `metadata`: Free-form key/value mapping supplied at registration
/// - `tx_hash`: Hash of the originating registration transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    pub owner: String,
    pub creator: String,
    pub created_at: i64,
    pub status: ItemStatus,
    #[serde(default)]
    pub metadata: BTreeMap<String, serde_json::Value>,
    pub tx_hash: String,
}

/// Input for registering a new item.
///
/// Supplied by the form layer, which is responsible for collecting and
/// trimming the raw strings. The registry validates the owner address and the
/// required name field; everything else is carried through as-is.
#[derive(Debug, Clone, Default)]
pub struct ItemDraft {
    /// Display name. Required, must be non-empty after trimming.
    pub name: String,

    /// Free-form description text. Optional.
    pub description: String,

    /// Wallet address of the registrant, who becomes both creator and owner.
    pub owner: String,

    /// Free-form metadata carried through to the item unchanged.
    pub metadata: BTreeMap<String, serde_json::Value>,
}
