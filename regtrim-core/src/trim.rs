//! Trimming of unreferenced registration entries.
//!
//! The trimmer walks the scanned matches in reverse order. Deleting a span
//! only ever touches text at or after the current match's position, so the
//! original forward offsets of earlier matches stay valid and no re-scan or
//! re-indexing is needed after each deletion.
//!
//! A non-whitelisted entry's removal span runs from its own start to the
//! start of the *next* match in forward order. The final match in the file
//! has no such boundary and is deliberately left in place rather than risk
//! truncating trailing file structure; see [`TrimOutcome::preserved_tail`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{IoResultExt, RegtrimResult};
use crate::scan::scan_registrations;
use crate::whitelist::Whitelist;

/// Result of trimming one bundle's text.
#[derive(Debug, Clone)]
pub struct TrimOutcome {
    /// The trimmed text.
    pub code: String,
    /// Whitelisted identifiers left in place, in order of appearance.
    pub kept: Vec<String>,
    /// Non-whitelisted identifiers whose spans were removed, in order of
    /// appearance.
    pub removed: Vec<String>,
    /// A non-whitelisted identifier left in place because it was the final
    /// match in the file.
    pub preserved_tail: Option<String>,
}

/// Removes every non-whitelisted registration entry's span from `code`.
///
/// Deterministic and idempotent: running the output through again yields the
/// same text, since every surviving entry is either whitelisted or the final
/// match.
pub fn trim_code(code: &str, whitelist: &Whitelist) -> TrimOutcome {
    let matches = scan_registrations(code);

    let mut out = code.to_string();
    let mut kept = Vec::new();
    let mut removed = Vec::new();
    let mut preserved_tail = None;

    for i in (0..matches.len()).rev() {
        let reg = &matches[i];
        let id = reg.id();

        if whitelist.contains(id) {
            kept.push(id.to_string());
            continue;
        }

        match matches.get(i + 1) {
            Some(next) => {
                // Spans at or after `next.start` may already be gone, but
                // everything before it is untouched, so these offsets hold.
                out.replace_range(reg.start..next.start, "");
                removed.push(id.to_string());
            }
            None => {
                // Last match in the file: no recorded end boundary, leave it.
                preserved_tail = Some(id.to_string());
            }
        }
    }

    kept.reverse();
    removed.reverse();

    TrimOutcome {
        code: out,
        kept,
        removed,
        preserved_tail,
    }
}

/// Report for one trimmed target, serializable for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetReport {
    pub name: String,
    pub source: String,
    pub dest: String,
    pub bytes_before: usize,
    pub bytes_after: usize,
    pub kept: Vec<String>,
    pub removed: Vec<String>,
    pub preserved_tail: Option<String>,
    pub dry_run: bool,
}

/// Trims one named target: reads `{name}Full.{ext}` from `lib_dir`, removes
/// unreferenced entries, and writes `{name}.{ext}` alongside it, fully
/// overwriting any previous content. The source file is never modified.
///
/// In dry-run mode the read and trim still happen but nothing is written.
///
/// One read, one write, no retries. A missing or unreadable source and a
/// failed write both propagate; there is no partial-write recovery.
pub fn trim_target(
    lib_dir: &Path,
    name: &str,
    ext: &str,
    whitelist: &Whitelist,
    dry_run: bool,
) -> RegtrimResult<TargetReport> {
    let source = lib_dir.join(format!("{}Full.{}", name, ext));
    let dest = lib_dir.join(format!("{}.{}", name, ext));

    let code = fs::read_to_string(&source).with_path(&source)?;
    let outcome = trim_code(&code, whitelist);

    if !dry_run {
        fs::write(&dest, &outcome.code).with_path(&dest)?;
    }

    info!(
        target_name = %name,
        kept = outcome.kept.len(),
        removed = outcome.removed.len(),
        dry_run,
        "trimmed target"
    );

    Ok(TargetReport {
        name: name.to_string(),
        source: source.display().to_string(),
        dest: dest.display().to_string(),
        bytes_before: code.len(),
        bytes_after: outcome.code.len(),
        kept: outcome.kept,
        removed: outcome.removed,
        preserved_tail: outcome.preserved_tail,
        dry_run,
    })
}
