//! valbar - live Valorant matches in a terminal widget.

use valbar::{App, Config, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // The TUI owns stdout, so logs go to a daily file
    let log_dir = valbar::config::log_dir()?;
    std::fs::create_dir_all(&log_dir)?;
    let (writer, _guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(log_dir, "valbar.log"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "valbar=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();

    // Load configuration
    let config = Config::load_or_default()?;

    // Run the application
    let mut app = App::new(config)?;
    app.run().await?;

    Ok(())
}
