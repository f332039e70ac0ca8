//! Pure board derivation: stage grouping and summary counts.
//!
//! The browser client computes these numbers for its tiles and columns;
//! this module is the same arithmetic for the `status` command and tests.

use serde::Serialize;

use super::models::{Item, Pipeline};

/// Stages that no longer count as in-flight work.
const SETTLED_STAGES: [&str; 2] = ["published", "approved"];
const REVIEW_STAGE: &str = "review";
const PUBLISHED_STAGE: &str = "published";

/// Items belonging to the given pipeline, source order preserved.
pub fn pipeline_items<'a>(items: &'a [Item], pipeline_key: &str) -> Vec<&'a Item> {
    items.iter().filter(|i| i.pipeline == pipeline_key).collect()
}

/// Counts shown in the summary tiles for one pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub in_progress: usize,
    pub awaiting_review: usize,
    pub published: usize,
}

impl Summary {
    /// Compute tile counts over items already scoped to one pipeline.
    pub fn compute(items: &[&Item]) -> Self {
        Self {
            total: items.len(),
            in_progress: items
                .iter()
                .filter(|i| !SETTLED_STAGES.contains(&i.stage.as_str()))
                .count(),
            awaiting_review: items.iter().filter(|i| i.stage == REVIEW_STAGE).count(),
            published: items.iter().filter(|i| i.stage == PUBLISHED_STAGE).count(),
        }
    }
}

/// One rendered column: a declared stage plus its matching items.
#[derive(Debug, Clone, Serialize)]
pub struct StageColumn {
    pub id: String,
    pub label: String,
    pub items: Vec<Item>,
}

/// The board for one pipeline: columns in declared stage order.
///
/// Items whose stage matches no declared stage land in no column; they
/// still count toward the summary totals.
#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    pub pipeline: String,
    pub summary: Summary,
    pub columns: Vec<StageColumn>,
}

impl BoardView {
    pub fn build(pipeline_key: &str, pipeline: &Pipeline, items: &[Item]) -> Self {
        let scoped = pipeline_items(items, pipeline_key);
        let summary = Summary::compute(&scoped);
        let columns = pipeline
            .stages
            .iter()
            .map(|stage| StageColumn {
                id: stage.id.clone(),
                label: stage.label.clone(),
                items: scoped
                    .iter()
                    .filter(|i| i.stage == stage.id)
                    .map(|i| (*i).clone())
                    .collect(),
            })
            .collect();
        Self {
            pipeline: pipeline_key.to_string(),
            summary,
            columns,
        }
    }
}
