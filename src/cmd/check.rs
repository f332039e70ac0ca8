//! Data file validation command, `mission-control check`.

use anyhow::{Context, Result};
use console::style;

use mission_control::config::DashboardConfig;
use mission_control::dashboard::store::{DataStore, validate};

pub fn cmd_check(config: DashboardConfig) -> Result<()> {
    println!();
    println!("Checking workspace: {}", config.workspace_root.display());
    println!();

    let items_file = config.items_file();
    let pipelines_file = config.pipelines_file();
    let file_note = |present: bool| {
        if present {
            "present"
        } else {
            "missing, treated as empty"
        }
    };
    println!(
        "Items file:     {} ({})",
        items_file.display(),
        file_note(items_file.exists())
    );
    println!(
        "Pipelines file: {} ({})",
        pipelines_file.display(),
        file_note(pipelines_file.exists())
    );

    let store = DataStore::new(config);
    let payload = store.load().context("Workspace data failed to load")?;

    println!();
    println!(
        "{} item(s) across {} pipeline(s)",
        payload.items.len(),
        payload.pipelines.pipelines.len()
    );

    let warnings = validate(&payload);
    if warnings.is_empty() {
        println!("No warnings.");
    } else {
        println!();
        println!("{} warning(s):", warnings.len());
        for warning in &warnings {
            println!("  {} {}", style("warning:").yellow().bold(), warning);
        }
    }
    println!();
    Ok(())
}
