use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vigil::config::Config;
use vigil::services::{AccessGate, Monitor};
use vigil::sources::YahooQuoteClient;
use vigil::tui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load and validate configuration before touching the terminal
    let config = Config::from_env();
    config.validate().context("invalid configuration")?;

    // The terminal belongs to the TUI, so logs go to a file
    std::fs::create_dir_all(&config.log_dir).context("creating log directory")?;
    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "vigil.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vigil=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    info!(
        "starting vigil for {} ({} bars, {}ms refresh)",
        config.ticker,
        config.interval,
        config.refresh_interval.as_millis()
    );

    let gate = AccessGate::from_config(&config.access).context("invalid access-code settings")?;
    let monitor = Monitor::new(YahooQuoteClient::new(), config.clone());

    tui::run_tui(monitor, gate, config).await?;

    info!("vigil stopped");
    Ok(())
}
