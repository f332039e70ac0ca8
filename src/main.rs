use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mission_control::config::DashboardConfig;

mod cmd;

#[derive(Parser)]
#[command(name = "mission-control")]
#[command(version, about = "Read-only kanban dashboard over workspace data files")]
pub struct Cli {
    /// Workspace root holding .data/items.json and config/pipelines.yaml.
    /// Defaults to $MISSION_CONTROL_WORKSPACE, then
    /// ~/.openclaw/workspace/mission-control.
    #[arg(long, global = true)]
    pub workspace: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the dashboard server
    Serve {
        /// Port to serve on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Auto-open browser after the server starts
        #[arg(long)]
        open: bool,

        /// Enable dev mode (permissive CORS, bind on all interfaces)
        #[arg(long)]
        dev: bool,
    },
    /// Validate the workspace data files and report warnings
    Check,
    /// Print per-pipeline summary counts and board columns
    Status {
        /// Pipeline key to show (defaults to every pipeline)
        #[arg(short, long)]
        pipeline: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mission_control=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = DashboardConfig::resolve(cli.workspace.clone())?;

    match &cli.command {
        Commands::Serve { port, open, dev } => {
            cmd::cmd_serve(config, *port, *open, *dev).await?;
        }
        Commands::Check => cmd::cmd_check(config)?,
        Commands::Status { pipeline } => cmd::cmd_status(config, pipeline.as_deref())?,
    }
    Ok(())
}
