//! Structured logging for the crate.
//!
//! All modules emit through the `tracing` macros; this module wires up the
//! subscriber for hosts that do not install their own.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`

mod init;

pub use init::init_tracing;
