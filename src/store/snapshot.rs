//! Record store snapshot and its JSON wire format.
//!
//! A [`Snapshot`] is the immutable in-memory collection of entities feeding
//! the view layer. It is supplied externally: the bundled demo data in
//! [`crate::store::demo_snapshot`], or a JSON file produced by a real data
//! source. Loading reads the whole file into memory once; the view pipeline
//! never writes it back (persistence of mutations is out of scope).
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "items": [ { "id": "1", "name": "...", "owner": "0x...", ... } ],
//!   "blocks": [ { "block_id": "BLK_001", "miner": "...", ... } ],
//!   "miners": [ { "rank": 1, "name": "...", "address": "0x...", "score": 15420 } ],
//!   "history": { "1": [ { "id": "1", "from_owner": "0x...", ... } ] }
//! }
//! ```

use crate::domain::error::{ChainviewError, Result};
use crate::domain::{Block, Item, Miner, TransferEvent};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Snapshot format version this build understands.
const SUPPORTED_VERSION: u32 = 1;

/// Immutable in-memory snapshot of domain entities.
///
/// Transfer histories are keyed by item id and stored newest first, matching
/// display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Version of the snapshot format for future migrations.
    pub version: u32,

    /// Registered items.
    #[serde(default)]
    pub items: Vec<Item>,

    /// Submitted blocks, ordered by submission time.
    #[serde(default)]
    pub blocks: Vec<Block>,

    /// Leaderboard miners.
    #[serde(default)]
    pub miners: Vec<Miner>,

    /// Per-item transfer histories, newest first.
    #[serde(default)]
    pub history: BTreeMap<String, Vec<TransferEvent>>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            items: Vec::new(),
            blocks: Vec::new(),
            miners: Vec::new(),
            history: BTreeMap::new(),
        }
    }
}

impl Snapshot {
    /// Loads a snapshot from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid JSON,
    /// or declares an unsupported format version.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use chainview::store::Snapshot;
    ///
    /// let snapshot = Snapshot::load("/var/lib/chainview/snapshot.json")?;
    /// println!("{} items", snapshot.items.len());
    /// # Ok::<(), chainview::domain::ChainviewError>(())
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading snapshot");

        let contents = std::fs::read_to_string(path)?;
        let snapshot = Self::from_json(&contents)?;

        tracing::debug!(
            items = snapshot.items.len(),
            blocks = snapshot.blocks.len(),
            miners = snapshot.miners.len(),
            "snapshot loaded"
        );

        Ok(snapshot)
    }

    /// Parses a snapshot from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ChainviewError::Snapshot`] for invalid JSON or an
    /// unsupported version.
    pub fn from_json(contents: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(contents)
            .map_err(|e| ChainviewError::Snapshot(format!("failed to parse JSON: {e}")))?;

        if snapshot.version != SUPPORTED_VERSION {
            return Err(ChainviewError::Snapshot(format!(
                "unsupported snapshot version {} (expected {SUPPORTED_VERSION})",
                snapshot.version
            )));
        }

        Ok(snapshot)
    }

    /// Serializes the snapshot to pretty-printed JSON.
    ///
    /// Used by tests and by tooling that prepares snapshot files; the library
    /// itself never persists mutations.
    ///
    /// # Errors
    ///
    /// Returns [`ChainviewError::Snapshot`] if serialization fails, which
    /// should never happen with valid data.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChainviewError::Snapshot(format!("failed to serialize JSON: {e}")))
    }

    /// Returns the transfer history for an item, newest first.
    ///
    /// Items with no recorded transfers yield an empty slice.
    #[must_use]
    pub fn history_for(&self, item_id: &str) -> &[TransferEvent] {
        self.history.get(item_id).map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::demo_snapshot;

    #[test]
    fn json_round_trip() {
        let snapshot = demo_snapshot();
        let json = snapshot.to_json().unwrap();
        let parsed = Snapshot::from_json(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn load_reads_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        std::fs::write(&path, demo_snapshot().to_json().unwrap()).unwrap();

        let snapshot = Snapshot::load(&path).unwrap();
        assert_eq!(snapshot.miners.len(), 8);
        assert_eq!(snapshot.blocks.len(), 8);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Snapshot::load("/nonexistent/snapshot.json").unwrap_err();
        assert!(matches!(err, ChainviewError::Io(_)));
    }

    #[test]
    fn invalid_json_is_a_snapshot_error() {
        let err = Snapshot::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ChainviewError::Snapshot(_)));
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let err = Snapshot::from_json(r#"{ "version": 99 }"#).unwrap_err();
        assert!(matches!(err, ChainviewError::Snapshot(_)));
    }

    #[test]
    fn absent_collections_default_to_empty() {
        let snapshot = Snapshot::from_json(r#"{ "version": 1 }"#).unwrap();
        assert!(snapshot.items.is_empty());
        assert!(snapshot.history_for("1").is_empty());
    }
}
