// Turnberry Place - Web Server
// Serves the listing API and the landing page

use anyhow::{Context, Result};
use turnberry_place::api::{router, AppState};
use turnberry_place::Config;

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().context("Failed to load configuration")?;
    log::info!("Turnberry Place server v{}", turnberry_place::VERSION);

    if !config.web_dir.exists() {
        log::warn!("web directory {:?} not found; /static will return 404", config.web_dir);
    }

    let state = AppState::new(&config);
    let app = router(state, &config.web_dir);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    log::info!("server running on http://{}", config.bind_addr);
    log::info!("  API: http://{}/api/floor-plans", config.bind_addr);
    log::info!("  UI:  http://{}/", config.bind_addr);

    axum::serve(listener, app)
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}
