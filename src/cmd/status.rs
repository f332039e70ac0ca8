//! Board summary command, `mission-control status`.

use anyhow::{Result, bail};
use console::style;

use mission_control::config::DashboardConfig;
use mission_control::dashboard::board::BoardView;
use mission_control::dashboard::models::{Item, Pipeline};
use mission_control::dashboard::store::DataStore;

pub fn cmd_status(config: DashboardConfig, pipeline: Option<&str>) -> Result<()> {
    let store = DataStore::new(config);
    let payload = store.load()?;

    if payload.pipelines.pipelines.is_empty() {
        println!();
        println!("No pipelines configured.");
        println!();
        return Ok(());
    }

    match pipeline {
        Some(key) => {
            let Some(selected) = payload.pipelines.pipelines.get(key) else {
                bail!("Pipeline '{}' not found", key);
            };
            print_board(key, selected, &payload.items);
        }
        None => {
            for (key, selected) in &payload.pipelines.pipelines {
                print_board(key, selected, &payload.items);
            }
        }
    }
    Ok(())
}

fn print_board(key: &str, pipeline: &Pipeline, items: &[Item]) {
    let view = BoardView::build(key, pipeline, items);
    let summary = &view.summary;

    println!();
    println!("{}", style(display_name(key)).bold());
    if !pipeline.description.is_empty() {
        println!("{}", style(&pipeline.description).dim());
    }
    println!(
        "Total: {}   In progress: {}   Awaiting review: {}   Published: {}",
        summary.total, summary.in_progress, summary.awaiting_review, summary.published
    );

    for column in &view.columns {
        println!();
        println!(
            "  {} ({} items)",
            style(&column.label).bold(),
            column.items.len()
        );
        if column.items.is_empty() {
            println!("    {}", style("No items").dim());
            continue;
        }
        for item in &column.items {
            println!(
                "    {} {}",
                item.title,
                style(format!("({}, updated {})", item.id, display_date(&item.updated))).dim()
            );
            for (k, v) in &item.metadata {
                println!("      {}: {}", style(k).dim(), v);
            }
        }
    }
    println!();
}

/// Selector-style display name: underscores to spaces, upper-cased.
fn display_name(key: &str) -> String {
    key.replace('_', " ").to_uppercase()
}

/// Date part of an RFC 3339 timestamp; anything unparseable passes
/// through untouched.
fn display_date(updated: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(updated)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| updated.to_string())
}
