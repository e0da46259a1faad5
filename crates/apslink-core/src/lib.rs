//! Shared domain types for the apslink gateway.
//!
//! The APS panel exposes its catalogue through fixed-width parameter blocks:
//! 64 reader-module slots per access group and an 8-bucket weekly timetable
//! per schedule. This crate models those blocks, the upsert parameter records
//! whose field order is the positional binding order of the remote stored
//! procedures, and the catalogue constants that document (without enforcing)
//! the panel's value ranges.

pub mod constants;
pub mod types;

pub use types::*;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
