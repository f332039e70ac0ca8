//! Dashboard server command, `mission-control serve`.

use anyhow::Result;

use mission_control::config::DashboardConfig;
use mission_control::dashboard::server::{ServerConfig, start_server};

pub async fn cmd_serve(config: DashboardConfig, port: u16, open: bool, dev: bool) -> Result<()> {
    // Spawn browser open before starting the server (which blocks).
    // Skip in dev mode where the client is served elsewhere.
    if open && !dev {
        let url = format!("http://localhost:{}", port);
        tokio::spawn(async move {
            // Small delay to let the server start binding
            tokio::time::sleep(tokio::time::Duration::from_millis(500)).await;
            if let Err(e) = open::that(&url) {
                eprintln!("Failed to open browser: {}", e);
            }
        });
    }

    start_server(ServerConfig {
        port,
        workspace_root: config.workspace_root,
        dev_mode: dev,
    })
    .await
}
