//! Headless "Alien in the Machine" turn simulator.
//!
//! ```bash
//! AIM_MAX_STEPS=20 cargo run -p aim-client
//! AIM_SNAPSHOT_JSON=true RUST_LOG=aim_core=debug cargo run -p aim-client
//! ```

use anyhow::Result;

use aim_client::{ClientConfig, Renderer, Session, load_content, logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    tracing::info!("Starting aim: max_steps={}", config.max_steps);

    let content = load_content(&config)?;
    let mut session = Session::start(content)?;

    let stdout = std::io::stdout().lock();
    let mut renderer = if config.snapshot_json {
        Renderer::json(stdout)
    } else {
        Renderer::text(stdout)
    };

    session.play(config.max_steps, &mut renderer).await?;
    session.shutdown().await
}
