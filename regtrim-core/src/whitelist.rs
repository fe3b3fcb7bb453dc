//! Whitelist of identifiers known to be in active use.
//!
//! The whitelist is a JSON array of short identifier strings supplied as a
//! side-channel data file (the build records which registrations the site
//! actually exercises). It is loaded once at process start and is read-only
//! for the run's duration.
//!
//! Unlike the upstream build script, malformed data is rejected up front with
//! a typed error rather than silently matching nothing downstream.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{IoResultExt, RegtrimError, RegtrimResult};

/// The set of identifiers whose registration entries must be kept.
///
/// Keeps the original order for reporting while answering membership queries
/// through a set. Duplicates in the source data are harmless.
#[derive(Debug, Clone, Default)]
pub struct Whitelist {
    ids: Vec<String>,
    lookup: HashSet<String>,
}

impl Whitelist {
    /// Builds a whitelist from an ordered sequence of identifiers.
    pub fn new(ids: Vec<String>) -> Self {
        let lookup = ids.iter().cloned().collect();
        Self { ids, lookup }
    }

    /// Whether the identifier is in active use.
    pub fn contains(&self, id: &str) -> bool {
        self.lookup.contains(id)
    }

    /// The identifiers in their original order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Number of distinct identifiers.
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    /// Whether the whitelist is empty.
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}

/// Loads a whitelist from a JSON array file.
///
/// Fails fast with [`RegtrimError::Whitelist`] if the file is not a JSON
/// array of strings.
pub fn load_whitelist(path: &Path) -> RegtrimResult<Whitelist> {
    let content = fs::read_to_string(path).with_path(path)?;

    let value: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| RegtrimError::whitelist(path, format!("invalid JSON: {}", e)))?;

    let items = value
        .as_array()
        .ok_or_else(|| RegtrimError::whitelist(path, "expected a JSON array of strings"))?;

    let mut ids = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let id = item.as_str().ok_or_else(|| {
            RegtrimError::whitelist(path, format!("element {} is not a string", i))
        })?;
        ids.push(id.to_string());
    }

    Ok(Whitelist::new(ids))
}
