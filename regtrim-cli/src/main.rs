//! regtrim CLI - trims unused registration entries from generated bundles.
//!
//! Runs as a build step: for each target name it reads `{name}Full.js`,
//! removes every registration entry whose identifier is absent from the
//! whitelist, and writes `{name}.js` next to it. Invoked with no arguments it
//! processes the site's two fixed bundles against the default layout.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use regtrim_core::{
    init_structured_logging, load_config, load_whitelist, log_info, print_json, print_plain,
    trim_target, RegtrimConfig, TargetReport,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Trim unused registration entries from generated bundles")]
pub struct Cli {
    /// Path to the root of the project
    #[arg(default_value = ".")]
    path: String,

    /// Target names to trim (default: the configured or built-in targets)
    #[arg(long, num_args = 1..)]
    targets: Vec<String>,

    /// Path to the whitelist JSON file, relative to the project root
    #[arg(long)]
    whitelist: Option<String>,

    /// Directory holding the bundle pairs, relative to the project root
    #[arg(long)]
    lib_dir: Option<String>,

    /// Artifact file extension
    #[arg(long)]
    ext: Option<String>,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,

    /// Show what would be removed without writing any output files
    #[arg(long)]
    dry_run: bool,
}

/// Resolves effective settings: CLI flags override regtrim.toml, which
/// overrides the built-in defaults.
struct Settings {
    targets: Vec<String>,
    lib_dir: PathBuf,
    whitelist: PathBuf,
    extension: String,
}

fn resolve_settings(cli: &Cli, root: &Path) -> Result<Settings> {
    let config = load_config(root)
        .with_context(|| format!("Failed to load regtrim.toml from: {}", root.display()))?
        .unwrap_or_else(RegtrimConfig::default);

    let targets = if cli.targets.is_empty() {
        config.targets()
    } else {
        cli.targets.clone()
    };

    let lib_dir = root.join(cli.lib_dir.as_deref().unwrap_or_else(|| config.lib_dir()));
    let whitelist = root.join(cli.whitelist.as_deref().unwrap_or_else(|| config.whitelist()));
    let extension = cli
        .ext
        .clone()
        .unwrap_or_else(|| config.extension().to_string());

    Ok(Settings {
        targets,
        lib_dir,
        whitelist,
        extension,
    })
}

fn main() -> Result<()> {
    // Global panic guard
    std::panic::set_hook(Box::new(|info| {
        eprintln!("[PANIC] regtrim internal error: {}", info);
        eprintln!("[PANIC] The process will exit safely with code 2.");
    }));

    // Initialize structured logging (JSON to stderr, respects RUST_LOG)
    init_structured_logging();

    let cli = Cli::parse();
    let root = Path::new(&cli.path);

    let settings = resolve_settings(&cli, root)?;

    let whitelist = load_whitelist(&settings.whitelist)
        .with_context(|| format!("Failed to load whitelist: {}", settings.whitelist.display()))?;

    log_info(&format!(
        "trimming {} target(s) against {} whitelisted id(s)",
        settings.targets.len(),
        whitelist.len()
    ));

    // One read, one write per target, strictly sequential. The first failure
    // aborts the run; there is no retry or rollback for a build-time tool.
    let mut reports: Vec<TargetReport> = Vec::with_capacity(settings.targets.len());
    for name in &settings.targets {
        let report = trim_target(
            &settings.lib_dir,
            name,
            &settings.extension,
            &whitelist,
            cli.dry_run,
        )
        .with_context(|| format!("Failed to trim target: {}", name))?;
        reports.push(report);
    }

    if cli.json {
        print_json(&reports);
    } else {
        print_plain(&reports);
    }

    Ok(())
}
