use std::path::Path;

use anyhow::{Context, Result};

use crate::config::{config, OutputFormat};
use crate::event::{MaintenanceEvent, ViewerContext};

pub mod actions;
pub mod check;
pub mod matrix;
pub mod next;
pub mod state;

/// Read and parse an event snapshot from a JSON file.
pub fn load_event(path: &Path) -> Result<MaintenanceEvent> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read event snapshot {}", path.display()))?;
    let event: MaintenanceEvent = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse event snapshot {}", path.display()))?;
    Ok(event)
}

/// Build the viewer context from flags, falling back to configured defaults.
///
/// `--owner` wins outright; otherwise ownership is resolved by comparing the
/// username (flag or configured) against the event creator.
pub fn resolve_viewer(
    event: &MaintenanceEvent,
    admin: bool,
    owner: bool,
    user: Option<&str>,
) -> Result<ViewerContext> {
    let defaults = &config()?.viewer;
    let is_admin = admin || defaults.admin;

    if owner {
        return Ok(ViewerContext::new(is_admin, true));
    }

    let username = user.map(str::to_string).or_else(|| defaults.user.clone());
    Ok(ViewerContext::resolve(event, username.as_deref(), is_admin))
}

/// Pick the output format: flag first, configured default second.
pub fn resolve_format(flag: Option<OutputFormat>) -> Result<OutputFormat> {
    match flag {
        Some(format) => Ok(format),
        None => Ok(config()?.output.format),
    }
}

/// Marker used in text output for capability flags and decisions.
pub fn flag_mark(value: bool) -> &'static str {
    if value {
        "✅"
    } else {
        "⛔"
    }
}

pub fn show_engine_overview() -> Result<()> {
    println!("🎛️  Gaffer - Maintenance Event Workflow Engine");
    println!();
    println!("Point a subcommand at an event snapshot (JSON) to evaluate it:");
    println!("  📊 gaffer state --event event.json                   # Full capability record");
    println!("  ✅ gaffer check --event event.json --to in_progress  # Validate a transition");
    println!("  🔍 gaffer actions --event event.json                 # Authorize inspection actions");
    println!("  ➡️  gaffer next --event event.json                    # Legal next statuses");
    println!("  🗺️  gaffer matrix                                     # Whole transition table");
    println!();
    println!("Viewer flags: --admin, --owner, or --user NAME (defaults from gaffer.toml)");
    println!();
    println!("💡 Start with 'gaffer state --event event.json' to see what an event allows!");
    Ok(())
}
