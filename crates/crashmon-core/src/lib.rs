//! # crashmon-core - Core Domain Types
//!
//! Foundation crate for Crashmon. Provides domain types, error handling,
//! and the crash-log pattern rules.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Crash`] - A single ingested crash with name, reason, and callstack
//! - [`PersistedState`] - Append-only per-device/per-app crash list
//! - [`CrashOs`] - The recognized OS tags ("iOS", "Android")
//!
//! ### Crash Log Parsing (`crash_log`)
//! - [`parse_crash_log()`] - Map (raw log, OS tag) to a [`CrashSummary`]
//! - [`extract_path()`] - Pull the embedded device path out of a log
//! - [`UNKNOWN_CAUSE`] - Sentinel for unrecognized log content
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use crashmon_core::prelude::*;
//! ```

pub mod crash_log;
pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all Crashmon crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use crash_log::{extract_path, parse_crash_log, CrashSummary, UNKNOWN_CAUSE};
pub use error::{Error, Result, ResultExt};
pub use types::{Crash, CrashOs, PersistedState};
