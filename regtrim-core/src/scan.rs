//! Registration-entry scanning over generated bundle text.
//!
//! Generated bundles register every code unit through a call shaped like
//! `\n X.register("ABCDE",` where `ABCDE` is a 5-character identifier. The
//! scanner finds every such call and records its text and byte offset, in
//! order of appearance, so the trimmer can delete unreferenced spans without
//! re-scanning after each edit.
//!
//! Performance characteristics:
//! - Pre-compiled regex pattern (compile once, use many)
//! - Single left-to-right pass over the fully materialized input

use std::sync::OnceLock;

use regex::Regex;

/// Byte offset where the 5-character identifier starts inside a match.
///
/// Derived from the fixed literal segments of [`registration_regex`]:
/// one newline + one arbitrary character + `.register("` is 13 bytes.
/// If the pattern literals ever change, update these offsets with them.
pub const ID_START: usize = 13;

/// Byte offset one past the end of the identifier inside a match.
pub const ID_END: usize = 18;

/// Pre-compiled pattern for a registration call.
///
/// Matches a newline, a single arbitrary character, literal `.register("`,
/// exactly five arbitrary characters (the identifier), then `",`.
fn registration_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    // SAFETY: This regex pattern is hardcoded and validated at compile-test time.
    REGEX.get_or_init(|| {
        Regex::new(r#"\n.\.register\(".....","#).expect("Hardcoded regex pattern is valid")
    })
}

/// A single registration call found in a generated bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// The matched substring.
    pub text: String,
    /// Byte offset in the source where the match begins.
    pub start: usize,
}

impl Registration {
    /// The 5-character identifier, extracted from its fixed position in the
    /// match text (see [`ID_START`]/[`ID_END`]).
    pub fn id(&self) -> &str {
        &self.text[ID_START..ID_END]
    }
}

/// Scans bundle text for all non-overlapping registration calls, left to
/// right, returning them in order of appearance.
pub fn scan_registrations(code: &str) -> Vec<Registration> {
    registration_regex()
        .find_iter(code)
        .map(|m| Registration {
            text: m.as_str().to_string(),
            start: m.start(),
        })
        .collect()
}
