//! Store layer: record snapshots and derived ranking.
//!
//! The store supplies the immutable [`Snapshot`] the view layer reads and the
//! rank recomputation that keeps the leaderboard's derived ordinals honest.
//! Snapshots are loaded once from JSON (or built from the bundled demo data);
//! the view pipeline never writes them back.
//!
//! # Modules
//!
//! - `snapshot`: Immutable record store and its JSON wire format
//! - `ranking`: Dense 1-based rank recomputation from scores
//! - `demo`: Bundled demo dataset

pub mod demo;
pub mod ranking;
pub mod snapshot;

pub use demo::demo_snapshot;
pub use ranking::recompute_ranks;
pub use snapshot::Snapshot;
