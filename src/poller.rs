//! The poll loop — fetch, validate, notify, sleep, repeat.
//!
//! One cycle fully completes (or fails) before the next begins. Every
//! failure inside a cycle is caught at the cycle boundary, logged, and
//! forwarded to the chat best-effort; nothing short of a process signal
//! stops the loop.

use serde_json::Value;
use tokio::time;
use tracing::{debug, error, info};

use crate::api::{validate_response, Homework, StatusClient};
use crate::config::POLL_INTERVAL;
use crate::error::PollError;
use crate::notify::{send_or_log, Notifier};
use crate::verdict::parse_status;

/// Run the poller until the process is killed. `from_date` is the
/// timestamp watermark; it starts at process launch time and advances
/// to the server-reported `current_date` after each successful cycle.
pub async fn run_poller(client: &StatusClient, notifier: &dyn Notifier, mut from_date: i64) {
    info!(from_date, interval_secs = POLL_INTERVAL.as_secs(), "poller starting");

    let mut interval = time::interval(POLL_INTERVAL);
    loop {
        interval.tick().await;
        from_date = poll_once(client, notifier, from_date).await;
    }
}

/// One poll cycle. Returns the watermark for the next cycle: advanced on
/// success (when the server reports `current_date`), unchanged on failure.
pub async fn poll_once(client: &StatusClient, notifier: &dyn Notifier, from_date: i64) -> i64 {
    match poll_cycle(client, notifier, from_date).await {
        Ok(next) => next,
        Err(e) => {
            error!(from_date, "poll cycle failed: {e}");
            send_or_log(notifier, &format!("Сбой в работе программы: {e}")).await;
            from_date
        }
    }
}

async fn poll_cycle(
    client: &StatusClient,
    notifier: &dyn Notifier,
    from_date: i64,
) -> Result<i64, PollError> {
    let payload = client.fetch(from_date).await?;
    let records = validate_response(&payload)?;

    if let Some(first) = records.first() {
        // The API returns at most one relevant record per poll window;
        // only the first is surfaced.
        if records.len() > 1 {
            debug!(batch = records.len(), "multiple records in batch, surfacing first");
        }
        let homework = decode_record(first)?;
        let message = parse_status(&homework)?;
        send_or_log(notifier, &message).await;
    } else {
        debug!(from_date, "no status changes");
    }

    Ok(payload
        .get("current_date")
        .and_then(Value::as_i64)
        .unwrap_or(from_date))
}

fn decode_record(record: &Value) -> Result<Homework, PollError> {
    serde_json::from_value(record.clone())
        .map_err(|e| PollError::Shape(format!("bad homework record: {e}")))
}
