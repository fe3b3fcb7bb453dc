//! Prelude module for convenient imports.
//!
//! Import commonly used types with a single line:
//!
//! ```rust,ignore
//! use regtrim_core::prelude::*;
//! ```
//!
//! This provides the most commonly needed types for trimming generated
//! bundles without polluting the namespace with rarely-used items.

// Error types
pub use crate::error::{RegtrimError, RegtrimResult};

// Scanning
pub use crate::scan::{scan_registrations, Registration};

// Whitelist
pub use crate::whitelist::{load_whitelist, Whitelist};

// Trimming
pub use crate::trim::{trim_code, trim_target, TargetReport, TrimOutcome};

// Configuration
pub use crate::config::{load_config, RegtrimConfig};
