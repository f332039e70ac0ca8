//! Workspace-root configuration.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Environment override for the workspace root.
pub const WORKSPACE_ENV: &str = "MISSION_CONTROL_WORKSPACE";

const DEFAULT_WORKSPACE_SUBDIR: &str = ".openclaw/workspace/mission-control";
const ITEMS_FILE: &str = ".data/items.json";
const PIPELINES_FILE: &str = "config/pipelines.yaml";

/// Where the dashboard reads its data from.
///
/// The root is resolved once at startup (CLI flag, then environment, then
/// the home-derived default) and injected into the store, so the load path
/// never consults the environment on its own.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub workspace_root: PathBuf,
}

impl DashboardConfig {
    pub fn new(workspace_root: impl Into<PathBuf>) -> Self {
        Self {
            workspace_root: workspace_root.into(),
        }
    }

    /// Resolve the workspace root, preferring an explicit CLI override.
    pub fn resolve(cli_root: Option<PathBuf>) -> Result<Self> {
        if let Some(root) = cli_root {
            return Ok(Self::new(root));
        }
        if let Ok(root) = std::env::var(WORKSPACE_ENV) {
            if !root.is_empty() {
                return Ok(Self::new(root));
            }
        }
        let home = dirs::home_dir().context("Could not determine the home directory")?;
        Ok(Self::new(home.join(DEFAULT_WORKSPACE_SUBDIR)))
    }

    /// Path of the items file under the workspace root.
    pub fn items_file(&self) -> PathBuf {
        self.workspace_root.join(ITEMS_FILE)
    }

    /// Path of the pipeline-configuration file under the workspace root.
    pub fn pipelines_file(&self) -> PathBuf {
        self.workspace_root.join(PIPELINES_FILE)
    }
}
