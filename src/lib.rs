//! Chainview: the view-model core of a blockchain asset registry and mining
//! competition dashboard.
//!
//! Chainview provides the logic layer behind the dashboard screens (item
//! listing, block explorer, mining leaderboard, miner profile):
//! - Free-text filtering over configurable field sets
//! - Stable, direction-aware sorting with the column-header toggle convention
//! - View projection deriving display-only fields (address truncation, rank
//!   badges, aggregate stats)
//! - Wallet address validation with descriptive failure reasons
//! - Ownership transfers, item registration, and miner enrollment over a
//!   pluggable transport
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Presentation (out of scope: any UI framework)      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  View Layer (view/)                                 │  ← Pure pipeline
//! │  Record Store → Filter → Sort → Projector           │
//! └─────────────────────────────────────────────────────┘
//!         │                              │
//! ┌───────────────────┐      ┌───────────────────────┐
//! │ Store Layer       │      │ Registry Layer        │
//! │ (store/)          │      │ (registry/)           │
//! │ - JSON snapshots  │      │ - Ownership transfers │
//! │ - Rank derivation │      │ - Item registration   │
//! │ - Demo dataset    │      │ - Transport seam      │
//! └───────────────────┘      └───────────────────────┘
//!         │                              │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Entity models + address validation (domain/)     │
//! │  - Error types (domain/error)                       │
//! │  - Paths (infrastructure/), tracing (observability/)│
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`domain`]: Core entity types, address validation, errors
//! - [`view`]: Filter, sort, view state, and projection
//! - [`store`]: Snapshot loading, rank recomputation, demo data
//! - [`registry`]: Transfer and registration operations
//! - [`infrastructure`]: Path utilities
//! - [`observability`]: Tracing subscriber setup
//!
//! # Examples
//!
//! ## Projecting the leaderboard
//!
//! ```
//! use chainview::store::demo_snapshot;
//! use chainview::view::{leaderboard_view, MinerSortKey, ViewState};
//!
//! let snapshot = demo_snapshot();
//! let mut state = ViewState::new(MinerSortKey::Rank);
//! state.set_query("crypto");
//!
//! let view = leaderboard_view(&snapshot.miners, &state);
//! assert_eq!(view.total, 8);
//! for row in &view.rows {
//!     println!("{} {} {}", row.badge.label(), row.miner.name, row.short_address);
//! }
//! ```
//!
//! ## Transferring an item
//!
//! ```
//! use chainview::registry::{InProcessTransport, Registry};
//! use chainview::store::demo_snapshot;
//!
//! let mut registry = Registry::new(demo_snapshot());
//! let mut transport = InProcessTransport::new();
//!
//! let event = registry
//!     .transfer("1", "0x9876543210fedcba9876543210fedcba98765432", &mut transport)?;
//! assert_eq!(registry.item("1").unwrap().owner, event.to_owner);
//! # Ok::<(), chainview::domain::ChainviewError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Pure view pipeline
//!
//! Filtering, sorting, and projection are pure functions over `&[T]`: no
//! hidden state, no mutation of the record store, trivially parallelizable.
//! The only UI state (query text, sort key/direction) is an explicit
//! [`view::ViewState`] value owned by the presentation layer.
//!
//! ## Derived, deterministic ranks
//!
//! Leaderboard ranks are recomputed from scores
//! ([`store::recompute_ranks`]), descending with ties broken by address, so
//! the ordering is stable across re-renders and runs.
//!
//! ## Transport seam instead of simulation
//!
//! Registry mutations go through [`registry::ChainTransport`]. The bundled
//! in-process implementation confirms deterministically; a real chain client
//! with cancellation, timeout, and retry policy plugs in at the same seam.

#![allow(clippy::multiple_crate_versions)]

pub mod domain;
pub mod infrastructure;
pub mod registry;
pub mod store;
pub mod view;

pub mod observability;

pub use domain::{validate_address, AddressError, ChainviewError, Result};
pub use registry::Registry;
pub use store::{demo_snapshot, recompute_ranks, Snapshot};
pub use view::ViewState;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Crate configuration.
///
/// Loaded from a TOML file or constructed directly by the host application.
///
/// # Example
///
/// ```toml
/// # chainview.toml
/// snapshot_path = "~/.local/share/chainview/snapshot.json"
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Path to the snapshot JSON file.
    ///
    /// A leading `~` is expanded against `$HOME`. When unset,
    /// [`initialize`] falls back to the bundled demo snapshot.
    pub snapshot_path: Option<String>,

    /// Tracing level for the subscriber.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`.
    /// Overridden by `RUST_LOG` when set.
    pub trace_level: Option<String>,
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&contents)
            .map_err(|e| ChainviewError::Config(format!("failed to parse TOML: {e}")))
    }

    /// Returns the snapshot path with tilde expansion applied, if configured.
    #[must_use]
    pub fn resolved_snapshot_path(&self) -> Option<PathBuf> {
        self.snapshot_path
            .as_deref()
            .map(|p| PathBuf::from(infrastructure::expand_tilde(p)))
    }
}

/// Creates a [`Registry`] from configuration.
///
/// Loads the snapshot named by `config.snapshot_path`; when no path is
/// configured, loads the default location
/// ([`infrastructure::default_snapshot_path`]) if a file exists there, and
/// otherwise falls back to the bundled demo snapshot.
///
/// # Errors
///
/// Returns an error if a configured snapshot file, or a file found at the
/// default location, cannot be read or parsed.
///
/// # Example
///
/// ```
/// use chainview::{initialize, Config};
///
/// let registry = initialize(&Config::default())?;
/// assert_eq!(registry.miners().len(), 8);
/// # Ok::<(), chainview::ChainviewError>(())
/// ```
pub fn initialize(config: &Config) -> Result<Registry> {
    tracing::debug!("initializing chainview");

    let snapshot = match config.resolved_snapshot_path() {
        Some(path) => Snapshot::load(path)?,
        None => {
            let fallback = infrastructure::default_snapshot_path();
            if fallback.is_file() {
                tracing::debug!(path = %fallback.display(), "loading snapshot from default location");
                Snapshot::load(fallback)?
            } else {
                tracing::debug!("no snapshot found, using demo data");
                demo_snapshot()
            }
        }
    };

    Ok(Registry::new(snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parses_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chainview.toml");
        std::fs::write(&path, "snapshot_path = \"/tmp/s.json\"\ntrace_level = \"debug\"\n")
            .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.snapshot_path.as_deref(), Some("/tmp/s.json"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn bad_toml_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chainview.toml");
        std::fs::write(&path, "snapshot_path = [").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, ChainviewError::Config(_)));
    }

    #[test]
    fn initialize_without_path_prefers_default_location_then_demo() {
        let dir = tempfile::tempdir().unwrap();
        let home_before = std::env::var("HOME").ok();
        std::env::set_var("HOME", dir.path());

        // Nothing at the default location yet: demo data.
        let registry = initialize(&Config::default()).unwrap();
        assert_eq!(registry.items().len(), 4);
        assert_eq!(registry.blocks().len(), 8);

        let data_dir = dir.path().join(".local/share/chainview");
        std::fs::create_dir_all(&data_dir).unwrap();
        let mut snapshot = demo_snapshot();
        snapshot.miners.truncate(3);
        std::fs::write(
            data_dir.join("snapshot.json"),
            snapshot.to_json().unwrap(),
        )
        .unwrap();

        let registry = initialize(&Config::default()).unwrap();
        assert_eq!(registry.miners().len(), 3);

        match home_before {
            Some(home) => std::env::set_var("HOME", home),
            None => std::env::remove_var("HOME"),
        }
    }

    #[test]
    fn initialize_loads_a_configured_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        std::fs::write(&path, demo_snapshot().to_json().unwrap()).unwrap();

        let config = Config {
            snapshot_path: Some(path.to_string_lossy().into_owned()),
            trace_level: None,
        };
        let registry = initialize(&config).unwrap();
        assert_eq!(registry.miners().len(), 8);
    }
}
