//! Tracing setup for the command-line renderer.
//!
//! The library only emits `tracing` events and spans (one `render` span per
//! call, `debug` events per builder); installing a subscriber is left to the
//! binary.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"warn"`

mod init;

pub use init::init_tracing;
