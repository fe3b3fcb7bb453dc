//! regtrim-core: library for trimming unused registration entries from
//! generated bundles.
//!
//! A generated bundle registers every code unit through calls shaped like
//! `X.register("ABCDE",` where `ABCDE` is a 5-character identifier. Only a
//! whitelisted subset of those identifiers is in active use; the rest is dead
//! weight shipped to every visitor. This library scans a bundle for those
//! registration calls, removes the spans of unreferenced entries, and writes
//! the trimmed result to a sibling artifact, leaving the source untouched.
//!
//! # Quick Start
//!
//! Use the [`prelude`] module for convenient imports:
//!
//! ```rust,ignore
//! use regtrim_core::prelude::*;
//!
//! let whitelist = load_whitelist(Path::new("scripts/removeUnused/used.json"))?;
//! let report = trim_target(Path::new("src/lib"), "GimkitIndex", "js", &whitelist, false)?;
//! println!("removed {} entries", report.removed.len());
//! ```
//!
//! # Module Organization
//!
//! - [`scan`]: fixed-pattern registration-entry scanning
//! - [`whitelist`]: used-identifier whitelist loading and lookup
//! - [`trim`]: reverse-order span removal and file-pair orchestration
//! - [`config`]: optional regtrim.toml configuration
//! - [`report`]: plain and JSON run summaries
//! - [`error`]: typed error handling
//! - [`logging`]: structured JSON logging setup

pub mod config;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod report;
pub mod scan;
pub mod trim;
pub mod whitelist;

// ============================================================================
// Explicit Re-exports (avoiding glob imports for clear API surface)
// ============================================================================

// Error types
pub use error::{IoResultExt, RegtrimError, RegtrimResult};

// Configuration
pub use config::{
    load_config, RegtrimConfig, DEFAULT_EXTENSION, DEFAULT_LIB_DIR, DEFAULT_TARGETS,
    DEFAULT_WHITELIST,
};

// Logging
pub use logging::{init_structured_logging, log_error, log_info, log_warn};

// Reporting
pub use report::{print_json, print_plain};

// Scanning
pub use scan::{scan_registrations, Registration, ID_END, ID_START};

// Trimming
pub use trim::{trim_code, trim_target, TargetReport, TrimOutcome};

// Whitelist
pub use whitelist::{load_whitelist, Whitelist};
