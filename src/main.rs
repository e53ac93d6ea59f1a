//! # hwbot — Practicum homework status watcher
//!
//! Polls the Yandex Practicum homework API on a fixed interval and forwards
//! review-status changes to a Telegram chat.
//!
//! Usage:
//!   hwbot                         # Poll with config defaults
//!   hwbot --interval 60           # Custom poll interval
//!   hwbot --from now              # Skip history, report only new changes
//!   hwbot --verbose               # Debug logging

use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use hwbot_channels::TelegramChannel;
use hwbot_core::config::{Credentials, HwBotConfig, StartFrom};
use hwbot_core::traits::Channel;
use hwbot_practicum::PracticumClient;
use hwbot_watcher::Watcher;

#[derive(Parser)]
#[command(
    name = "hwbot",
    version,
    about = "📚 hwbot — Practicum homework status watcher"
)]
struct Cli {
    /// Path to config file (default: ~/.hwbot/config.toml)
    #[arg(short, long)]
    config: Option<String>,

    /// Poll interval in seconds (overrides config)
    #[arg(short, long)]
    interval: Option<u64>,

    /// Initial cursor: "epoch" replays history, "now" reports only new changes
    #[arg(long)]
    from: Option<String>,

    /// Log directory (default: ~/.hwbot/logs)
    #[arg(long)]
    log_dir: Option<String>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn expand_path(p: &str) -> String {
    shellexpand::tilde(p).to_string()
}

/// Console layer plus a daily-rolling file in `log_dir`. The returned guard
/// must live for the whole run or buffered file records are lost.
fn init_logging(
    log_dir: &str,
    verbose: bool,
) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let filter = if verbose {
        "hwbot=debug,hwbot_core=debug,hwbot_practicum=debug,hwbot_channels=debug,hwbot_watcher=debug"
    } else {
        "hwbot=info,hwbot_core=info,hwbot_practicum=info,hwbot_channels=info,hwbot_watcher=info"
    };

    std::fs::create_dir_all(log_dir)?;
    let file_appender = tracing_appender::rolling::daily(log_dir, "hwbot.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Config before logging: the file layer needs the log directory.
    let mut config = match &cli.config {
        Some(path) => HwBotConfig::load_from(std::path::Path::new(&expand_path(path)))?,
        None => HwBotConfig::load()?,
    };
    if let Some(interval) = cli.interval {
        config.watcher.poll_interval_secs = interval;
    }
    if let Some(from) = &cli.from {
        config.watcher.start_from = match from.as_str() {
            "epoch" => StartFrom::Epoch,
            "now" => StartFrom::Now,
            other => anyhow::bail!("invalid --from value '{other}', expected 'epoch' or 'now'"),
        };
    }
    if let Some(dir) = &cli.log_dir {
        config.log.dir = dir.clone();
    }

    let log_dir = expand_path(&config.log.dir);
    let _guard = init_logging(&log_dir, cli.verbose)?;

    // Credentials come from the environment only, never the config file.
    let credentials = Credentials::from_env();
    if !credentials.check() {
        anyhow::bail!("missing required credentials, see the log above");
    }

    println!("📚 hwbot v{}", env!("CARGO_PKG_VERSION"));
    println!("   📡 Endpoint: {}", config.practicum.endpoint);
    println!("   ⏱️  Interval: {}s", config.watcher.poll_interval_secs);
    println!("   🗒️  Log dir:  {log_dir}");
    println!();

    let client = PracticumClient::new(&config.practicum, &credentials.practicum_token);
    let mut channel = TelegramChannel::new(&credentials.telegram_token, &config.telegram);

    // Identity check only; a flaky network at boot must not kill the bot.
    if let Err(e) = channel.connect().await {
        tracing::warn!("Telegram identity check failed: {e}");
    }

    let mut watcher = Watcher::new(
        client,
        channel,
        credentials.telegram_chat_id.clone(),
        Duration::from_secs(config.watcher.poll_interval_secs),
        config.watcher.start_from.initial_cursor(),
    );
    watcher.run().await;

    Ok(())
}
