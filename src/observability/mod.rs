//! Structured logging for the library and binary.
//!
//! Every store operation, event, and render opens a `debug` span; failures at
//! the edges (bad event lines, unreadable presets) are `warn` events. This
//! module only installs the subscriber that prints them.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! Initialize tracing early, before building state:
//!
//! ```rust
//! use cvforge::observability::init_tracing;
//! use cvforge::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("cvforge initialized");
//! ```

mod init;

pub use init::{init_tracing, DEFAULT_LEVEL};
