#![deny(unsafe_code)]

//! Shared test utilities for the OptsFile workspace.
//!
//! Provides reusable `.of` fixtures, config builders, and tracing helpers so
//! that individual crate tests stay concise and consistent.
//!
//! Add this crate as a `[dev-dependency]` in any workspace member:
//!
//! ```toml
//! [dev-dependencies]
//! optsfile-test-utils = { workspace = true }
//! ```

pub mod config;
pub mod fixtures;
pub mod tracing_setup;
