//! Per-request loading of the two workspace data files.

use std::fmt;
use std::path::Path;

use crate::config::DashboardConfig;
use crate::errors::StoreError;

use super::models::{DataPayload, ItemsFile, PipelinesFile};

/// Reads `items.json` and `pipelines.yaml` fresh on every call.
///
/// No caching: the files are externally owned and the payload must match
/// whatever is on disk at poll time.
#[derive(Debug, Clone)]
pub struct DataStore {
    config: DashboardConfig,
}

impl DataStore {
    pub fn new(config: DashboardConfig) -> Self {
        Self { config }
    }

    /// Load and compose both files into the endpoint payload.
    pub fn load(&self) -> Result<DataPayload, StoreError> {
        let items = self.load_items()?;
        let pipelines = self.load_pipelines()?;
        Ok(DataPayload {
            items: items.items,
            pipelines,
        })
    }

    /// Items file; absent or blank means no items.
    pub fn load_items(&self) -> Result<ItemsFile, StoreError> {
        let path = self.config.items_file();
        let Some(content) = read_optional(&path)? else {
            return Ok(ItemsFile::default());
        };
        serde_json::from_str(&content)
            .map_err(|source| StoreError::ItemsParseFailed { path, source })
    }

    /// Pipeline configuration; absent or blank means no pipelines.
    pub fn load_pipelines(&self) -> Result<PipelinesFile, StoreError> {
        let path = self.config.pipelines_file();
        let Some(content) = read_optional(&path)? else {
            return Ok(PipelinesFile::default());
        };
        serde_yaml::from_str(&content)
            .map_err(|source| StoreError::PipelinesParseFailed { path, source })
    }
}

/// Read a file that is allowed to be missing. Blank content counts as
/// missing.
fn read_optional(path: &Path) -> Result<Option<String>, StoreError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path).map_err(|source| StoreError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    if content.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(content))
}

// ── Soft-invariant validation ─────────────────────────────────────────

/// A soft-invariant violation worth telling an operator about.
///
/// None of these block loading or change the payload; items with unknown
/// stages still ship to the client and simply render in no column.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationWarning {
    UnknownPipeline {
        item_id: String,
        pipeline: String,
    },
    UnknownStage {
        item_id: String,
        pipeline: String,
        stage: String,
    },
    MissingRequiredField {
        item_id: String,
        stage: String,
        field: String,
    },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPipeline { item_id, pipeline } => write!(
                f,
                "item '{}' references unknown pipeline '{}'",
                item_id, pipeline
            ),
            Self::UnknownStage {
                item_id,
                pipeline,
                stage,
            } => write!(
                f,
                "item '{}' is at stage '{}' which pipeline '{}' does not declare",
                item_id, stage, pipeline
            ),
            Self::MissingRequiredField {
                item_id,
                stage,
                field,
            } => write!(
                f,
                "item '{}' at stage '{}' is missing required field '{}'",
                item_id, stage, field
            ),
        }
    }
}

/// Check the soft invariants the read path never enforces.
pub fn validate(payload: &DataPayload) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    for item in &payload.items {
        let Some(pipeline) = payload.pipelines.pipelines.get(&item.pipeline) else {
            warnings.push(ValidationWarning::UnknownPipeline {
                item_id: item.id.clone(),
                pipeline: item.pipeline.clone(),
            });
            continue;
        };
        let Some(stage) = pipeline.stages.iter().find(|s| s.id == item.stage) else {
            warnings.push(ValidationWarning::UnknownStage {
                item_id: item.id.clone(),
                pipeline: item.pipeline.clone(),
                stage: item.stage.clone(),
            });
            continue;
        };
        for field in &stage.required_fields {
            if !item.metadata.contains_key(field) {
                warnings.push(ValidationWarning::MissingRequiredField {
                    item_id: item.id.clone(),
                    stage: stage.id.clone(),
                    field: field.clone(),
                });
            }
        }
    }
    warnings
}
