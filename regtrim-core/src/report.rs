//! Output formatting - plaintext and JSON.

use serde_json::json;

use crate::trim::TargetReport;

/// Prints per-target trim results in plain text format.
pub fn print_plain(reports: &[TargetReport]) {
    if reports.is_empty() {
        println!("No targets trimmed.");
        return;
    }

    for r in reports {
        let mode = if r.dry_run { "[DRY-RUN] " } else { "" };
        println!(
            "{}{}: kept {}, removed {} ({} -> {} bytes)",
            mode,
            r.name,
            r.kept.len(),
            r.removed.len(),
            r.bytes_before,
            r.bytes_after
        );
        for id in &r.removed {
            println!("  - {}", id);
        }
        if let Some(tail) = &r.preserved_tail {
            println!("  ! trailing unreferenced entry left in place: {}", tail);
        }
    }
}

/// Prints per-target trim results in JSON format.
///
/// Falls back to a plain summary if serialization fails (should never happen
/// with these report types, but every case gets handled).
pub fn print_json(reports: &[TargetReport]) {
    match serde_json::to_string_pretty(&json!({ "targets": reports })) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("[WARN] JSON serialization failed: {}", e);
            for r in reports {
                println!(
                    "{{\"name\": {:?}, \"removed\": {}}}",
                    r.name,
                    r.removed.len()
                );
            }
        }
    }
}
