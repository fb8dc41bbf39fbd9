//! InflammAI Server
//!
//! Run with: cargo run --bin inflamm
//!
//! # Configuration
//!
//! Read from `~/.config/inflamm/config.toml`, `/etc/inflamm/config.toml` or
//! `./config.toml`, then overridden by environment variables:
//! - `INFLAMM_MODE`: `development` (default, auto-connects the wallet) or `production`
//! - `INFLAMM_HOST`: Host to bind to (default: 0.0.0.0)
//! - `INFLAMM_PORT`: Port to listen on (default: 8084)
//! - `INFLAMM_UI_DIR`: Built client app (default: inflamm-ui/dist)
//! - `INFLAMM_REPLY_DELAY_MS`: Assistant reply delay (default: 1000)
//! - `INFLAMM_LOG_LEVEL`, `INFLAMM_LOG_FORMAT`: Logging (default: info, pretty)
//! - `RUST_LOG`: Full filter directive, wins over the level above

use anyhow::Context;
use inflamm::api::{serve, AppState};
use inflamm::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default().context("failed to load configuration")?;
    inflamm::logging::init(&config.logging);

    tracing::info!(
        mode = config.mode.as_str(),
        "Starting InflammAI v{}",
        env!("CARGO_PKG_VERSION")
    );
    tracing::debug!(
        wallet_delay_ms = config.demo.wallet_delay_ms,
        health_delay_ms = config.demo.health_delay_ms,
        reply_delay_ms = config.demo.reply_delay_ms,
        symptom_delay_ms = config.demo.symptom_delay_ms,
        "Demo latencies"
    );

    let state = AppState::new(config.mode, &config.demo);
    serve(state, &config.server)
        .await
        .context("server exited with an error")?;

    tracing::info!("InflammAI server stopped");
    Ok(())
}
