//! Preview server command.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axum::Router;
use tower_http::services::ServeDir;

/// Run the serve command for one built section.
pub async fn run(
    config_path: &Path,
    root: Option<PathBuf>,
    section: &str,
    port: u16,
    open: bool,
) -> Result<()> {
    let site = crate::config::load_site(config_path, root)?;
    if site.section(section).is_none() {
        anyhow::bail!("Unknown section: {}", section);
    }

    let dir = site.root.join(section).join("build");
    if !dir.exists() {
        anyhow::bail!(
            "Directory not found: {}. Run 'folio build' first.",
            dir.display()
        );
    }

    let addr: SocketAddr = format!("127.0.0.1:{}", port)
        .parse()
        .context("Invalid address")?;

    tracing::info!("Serving {} at http://{}", dir.display(), addr);

    let app = Router::new().fallback_service(ServeDir::new(&dir));

    let listener = tokio::net::TcpListener::bind(addr).await?;

    if open {
        let url = format!("http://{}", addr);
        if let Err(e) = open::that(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    axum::serve(listener, app).await?;

    Ok(())
}
