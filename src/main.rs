//! hwbot — homework review status daemon.
//!
//! Polls the Practicum homework-statuses API on a fixed interval and
//! relays review verdicts to one Telegram chat. A second task answers
//! the `/start` command with a greeting. Credentials come from the
//! environment (or a `.env` file); missing credentials are fatal before
//! the loop starts.

use anyhow::{Context, Result};
use teloxide::Bot;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod api;
mod commands;
mod config;
mod error;
mod notify;
mod poller;
mod verdict;

use api::StatusClient;
use config::Config;
use notify::TelegramNotifier;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let _log_guard = init_tracing();

    info!("hwbot v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env().context("configuration is incomplete")?;

    let bot = Bot::new(&config.telegram_token);
    let client = StatusClient::new(config::ENDPOINT, &config.practicum_token);
    let notifier = TelegramNotifier::new(bot.clone(), config.chat_id);

    // The inbound listener is independent of the poll loop; start it
    // once as its own task.
    tokio::spawn(commands::run_listener(bot));

    let from_date = chrono::Utc::now().timestamp();
    poller::run_poller(&client, &notifier, from_date).await;

    Ok(())
}

/// Log to stdout and to `hwbot.log` next to the binary. The returned
/// guard must live as long as the process so buffered lines get flushed.
fn init_tracing() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::never(".", "hwbot.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hwbot=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(file_writer),
        )
        .init();

    guard
}
