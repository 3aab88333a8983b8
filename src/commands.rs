//! Inbound `/start` listener — greets the user by first name.
//!
//! Runs as its own task, started once from `main`. It shares nothing
//! with the poll loop beyond the bot token.

use teloxide::prelude::*;
use tracing::{error, info};

/// Listen for incoming messages until the process is killed.
pub async fn run_listener(bot: Bot) {
    info!("command listener starting");
    teloxide::repl(bot, move |bot: Bot, msg: Message| async move {
        if let Err(e) = handle_message(bot, msg).await {
            error!("error handling inbound message: {e}");
        }
        Ok(())
    })
    .await;
}

async fn handle_message(bot: Bot, msg: Message) -> Result<(), teloxide::RequestError> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    if text != "/start" && !text.starts_with("/start ") {
        return Ok(());
    }

    let name = msg
        .from()
        .map(|user| user.first_name.clone())
        .unwrap_or_else(|| "друг".to_string());

    info!(chat_id = %msg.chat.id, "greeting /start");
    bot.send_message(msg.chat.id, greeting_for(&name)).await?;
    Ok(())
}

fn greeting_for(name: &str) -> String {
    format!("Привет, {name}. Я помогу тебе узнать, на каком этапе проверки твоя домашка :)")
}
