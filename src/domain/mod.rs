//! Domain layer: core entity types, address validation, and errors.
//!
//! This module contains the immutable value records the rest of the crate
//! operates on, independent of any view or storage concerns. It follows
//! domain-driven design principles by keeping business rules isolated from
//! external dependencies.
//!
//! # Organization
//!
//! - [`address`]: Wallet address shape validation
//! - [`block`]: Mined block model
//! - [`error`]: Error types and result alias
//! - [`item`]: Registered item model and registration draft
//! - [`miner`]: Leaderboard miner model
//! - [`time`]: Relative timestamp formatting
//! - [`transfer`]: Ownership transfer event model

pub mod address;
pub mod block;
pub mod error;
pub mod item;
pub mod miner;
pub mod time;
pub mod transfer;

pub use address::{validate_address, AddressError, ADDRESS_LEN};
pub use block::Block;
pub use error::{ChainviewError, Result};
pub use item::{Item, ItemDraft, ItemStatus};
pub use miner::Miner;
pub use transfer::{TransferEvent, TransferStatus};
