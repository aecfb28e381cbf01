//! Infrastructure layer: platform utilities with no domain knowledge.

pub mod paths;

pub use paths::{default_snapshot_path, expand_tilde};
