//! Registry layer: ownership transfers and item registration.
//!
//! The [`Registry`] owns the mutable working set (a [`Snapshot`]) and applies
//! the write operations the system models: transferring an item between
//! owners, registering a new item, and enrolling a new miner on the
//! leaderboard. Every mutation goes through a
//! [`ChainTransport`], and no state is touched until the transport has
//! accepted the submission, so any failure leaves the working set exactly as
//! it was.
//!
//! # Invariants
//!
//! - An item's `owner` after a successful transfer equals the transfer's
//!   destination.
//! - A transfer event's `from_owner` equals the owner immediately prior to
//!   that event; histories form an append-only causal chain per item, stored
//!   newest first.
//! - Items are never deleted.
//!
//! # Modules
//!
//! - [`transport`]: Chain submission seam and the deterministic local
//!   transport

pub mod transport;

pub use transport::{ChainTransport, InProcessTransport, Receipt, TxPayload};

use crate::domain::error::{ChainviewError, Result};
use crate::domain::{
    validate_address, Block, Item, ItemDraft, ItemStatus, Miner, TransferEvent, TransferStatus,
};
use crate::store::{recompute_ranks, Snapshot};

/// Owns the mutable working set and applies registry operations.
///
/// Reads go straight to the underlying snapshot; writes validate first,
/// submit through the transport second, and mutate last.
///
/// # Examples
///
/// ```
/// use chainview::registry::{InProcessTransport, Registry};
/// use chainview::store::demo_snapshot;
///
/// let mut registry = Registry::new(demo_snapshot());
/// let mut transport = InProcessTransport::new();
///
/// let event = registry
///     .transfer("1", "0x9876543210fedcba9876543210fedcba98765432", &mut transport)?;
/// assert_eq!(registry.item("1").unwrap().owner, event.to_owner);
/// # Ok::<(), chainview::domain::ChainviewError>(())
/// ```
#[derive(Debug)]
pub struct Registry {
    snapshot: Snapshot,
    next_event_id: u64,
    next_item_id: u64,
}

impl Registry {
    /// Creates a registry over the given snapshot.
    ///
    /// Identifier counters resume past the highest numeric id already
    /// present, so minted ids never collide with seeded data even when the
    /// seeded ids are sparse. Non-numeric ids are skipped when scanning.
    #[must_use]
    pub fn new(snapshot: Snapshot) -> Self {
        let max_event_id = snapshot
            .history
            .values()
            .flatten()
            .filter_map(|event| event.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        let max_item_id = snapshot
            .items
            .iter()
            .filter_map(|item| item.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        Self {
            snapshot,
            next_event_id: max_event_id.saturating_add(1),
            next_item_id: max_item_id.saturating_add(1),
        }
    }

    /// Returns the current working set.
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Returns all registered items.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.snapshot.items
    }

    /// Returns all submitted blocks.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.snapshot.blocks
    }

    /// Returns all leaderboard miners.
    #[must_use]
    pub fn miners(&self) -> &[Miner] {
        &self.snapshot.miners
    }

    /// Looks up an item by id.
    #[must_use]
    pub fn item(&self, item_id: &str) -> Option<&Item> {
        self.snapshot.items.iter().find(|item| item.id == item_id)
    }

    /// Returns the transfer history for an item, newest first.
    #[must_use]
    pub fn history_for(&self, item_id: &str) -> &[TransferEvent] {
        self.snapshot.history_for(item_id)
    }

    /// Transfers an item to a new owner.
    ///
    /// Validates the destination address, submits through the transport, then
    /// appends a completed [`TransferEvent`] (newest first) and rewrites the
    /// item's owner and status. On any failure the item and its history are
    /// unchanged.
    ///
    /// # Errors
    ///
    /// - [`ChainviewError::Address`] when the destination is malformed
    /// - [`ChainviewError::Transfer`] when the item does not exist
    /// - [`ChainviewError::Transport`] when the submission is not accepted
    ///   (retryable)
    pub fn transfer(
        &mut self,
        item_id: &str,
        to: &str,
        transport: &mut impl ChainTransport,
    ) -> Result<TransferEvent> {
        validate_address(to)?;

        let index = self
            .snapshot
            .items
            .iter()
            .position(|item| item.id == item_id)
            .ok_or_else(|| ChainviewError::Transfer(format!("unknown item {item_id}")))?;

        let from = self.snapshot.items[index].owner.clone();
        let receipt = transport.submit(&TxPayload::Transfer {
            item_id,
            from: &from,
            to,
        })?;

        let event = TransferEvent {
            id: self.next_event_id.to_string(),
            from_owner: from,
            to_owner: to.to_string(),
            timestamp: receipt.timestamp,
            tx_hash: receipt.tx_hash,
            status: TransferStatus::Completed,
        };
        self.next_event_id += 1;

        let item = &mut self.snapshot.items[index];
        item.owner = event.to_owner.clone();
        item.status = ItemStatus::Transferred;

        self.snapshot
            .history
            .entry(item_id.to_string())
            .or_default()
            .insert(0, event.clone());

        tracing::info!(item_id, to, tx_hash = %event.tx_hash, "ownership transferred");

        Ok(event)
    }

    /// Registers a new item from a draft.
    ///
    /// The registrant becomes both creator and owner; the item starts
    /// [`ItemStatus::Pending`] with an empty history until its first
    /// confirmation.
    ///
    /// # Errors
    ///
    /// - [`ChainviewError::Validation`] when the name is empty after trimming
    /// - [`ChainviewError::Address`] when the owner address is malformed
    /// - [`ChainviewError::Transport`] when the submission is not accepted
    pub fn register(
        &mut self,
        draft: ItemDraft,
        transport: &mut impl ChainTransport,
    ) -> Result<Item> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(ChainviewError::Validation(
                "item name is required".to_string(),
            ));
        }
        validate_address(&draft.owner)?;

        let receipt = transport.submit(&TxPayload::Register {
            name,
            owner: &draft.owner,
        })?;

        let item = Item {
            id: self.next_item_id.to_string(),
            name: name.to_string(),
            description: draft.description,
            owner: draft.owner.clone(),
            creator: draft.owner,
            created_at: receipt.timestamp,
            status: ItemStatus::Pending,
            metadata: draft.metadata,
            tx_hash: receipt.tx_hash,
        };
        self.next_item_id += 1;

        tracing::info!(item_id = %item.id, name = %item.name, "item registered");

        self.snapshot.items.push(item.clone());
        Ok(item)
    }

    /// Registers a new miner on the leaderboard.
    ///
    /// The miner joins with a zero score; ranks are recomputed immediately,
    /// so the returned record carries its assigned rank. One leaderboard
    /// entry per address: registering an address twice is rejected.
    ///
    /// # Errors
    ///
    /// - [`ChainviewError::Validation`] when the name is empty after trimming
    ///   or the address already holds a leaderboard entry
    /// - [`ChainviewError::Address`] when the address is malformed
    /// - [`ChainviewError::Transport`] when the submission is not accepted
    pub fn register_miner(
        &mut self,
        name: &str,
        address: &str,
        transport: &mut impl ChainTransport,
    ) -> Result<Miner> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ChainviewError::Validation(
                "miner name is required".to_string(),
            ));
        }
        validate_address(address)?;
        if self.snapshot.miners.iter().any(|m| m.address == address) {
            return Err(ChainviewError::Validation(format!(
                "address {address} is already registered"
            )));
        }

        transport.submit(&TxPayload::RegisterMiner { name, address })?;

        self.snapshot.miners.push(Miner::new(name, address, 0));
        recompute_ranks(&mut self.snapshot.miners);

        tracing::info!(name, address, "miner registered");

        Ok(self
            .snapshot
            .miners
            .iter()
            .find(|m| m.address == address)
            .cloned()
            .unwrap_or_else(|| Miner::new(name, address, 0)))
    }
}
