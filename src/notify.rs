//! Notification sink — delivers poll results to one Telegram chat.
//!
//! The sink is a trait so the poller can be exercised against in-memory
//! doubles. Delivery failures are terminal for the message only: the
//! poller logs them and moves on, they never abort a cycle.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ChatId;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Telegram delivery failed: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[cfg(test)]
    #[error("simulated delivery failure")]
    Simulated,
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str) -> Result<(), NotifyError>;
}

/// Sends messages to a fixed chat through the Telegram Bot API.
pub struct TelegramNotifier {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramNotifier {
    pub fn new(bot: Bot, chat_id: i64) -> Self {
        Self {
            bot,
            chat_id: ChatId(chat_id),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        self.bot.send_message(self.chat_id, text).await?;
        Ok(())
    }
}

/// Best-effort delivery: log the outcome, swallow the failure.
pub async fn send_or_log(notifier: &dyn Notifier, text: &str) {
    match notifier.send(text).await {
        Ok(()) => info!(message = %text, "notification delivered"),
        Err(e) => error!(message = %text, "notification failed: {e}"),
    }
}

#[cfg(test)]
pub mod doubles {
    use super::*;
    use std::sync::Mutex;

    /// Records every message instead of delivering it.
    pub struct RecordingNotifier {
        pub sent: Mutex<Vec<String>>,
    }

    impl RecordingNotifier {
        pub fn new() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
            }
        }

        pub fn messages(&self) -> Vec<String> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn send(&self, text: &str) -> Result<(), NotifyError> {
            self.sent.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    /// Fails every delivery, mimicking an unreachable Telegram API.
    pub struct FailingNotifier;

    #[async_trait]
    impl Notifier for FailingNotifier {
        async fn send(&self, _text: &str) -> Result<(), NotifyError> {
            Err(NotifyError::Simulated)
        }
    }
}
