//! Runtime configuration — three credentials from the environment plus
//! fixed endpoint and poll-interval constants. No ambient globals: the
//! struct is built once in `main` and passed by reference from there.

use std::time::Duration;

use crate::error::ConfigError;

/// Fixed status endpoint of the review API.
pub const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Pause between poll cycles.
pub const POLL_INTERVAL: Duration = Duration::from_secs(15);

const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth token for the review API.
    pub practicum_token: String,
    /// Bot token for the Telegram API.
    pub telegram_token: String,
    /// Destination chat for notifications.
    pub chat_id: i64,
}

impl Config {
    /// Load and validate configuration from the process environment.
    /// Any missing or empty credential is fatal.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let require = |name: &'static str| -> Result<String, ConfigError> {
            match lookup(name) {
                Some(v) if !v.trim().is_empty() => Ok(v),
                _ => Err(ConfigError::MissingCredential(name)),
            }
        };

        let practicum_token = require(PRACTICUM_TOKEN)?;
        let telegram_token = require(TELEGRAM_TOKEN)?;
        let chat_id_raw = require(TELEGRAM_CHAT_ID)?;
        let chat_id = chat_id_raw
            .trim()
            .parse::<i64>()
            .map_err(|_| ConfigError::InvalidChatId(chat_id_raw.clone()))?;

        Ok(Self {
            practicum_token,
            telegram_token,
            chat_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn from_map(map: &HashMap<String, String>) -> Result<Config, ConfigError> {
        Config::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn loads_complete_environment() {
        let map = env(&[
            ("PRACTICUM_TOKEN", "y0_abc"),
            ("TELEGRAM_TOKEN", "123:ABC"),
            ("TELEGRAM_CHAT_ID", "424242"),
        ]);
        let config = from_map(&map).unwrap();
        assert_eq!(config.practicum_token, "y0_abc");
        assert_eq!(config.telegram_token, "123:ABC");
        assert_eq!(config.chat_id, 424242);
    }

    #[test]
    fn each_missing_credential_is_fatal_and_named() {
        for missing in ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"] {
            let mut map = env(&[
                ("PRACTICUM_TOKEN", "y0_abc"),
                ("TELEGRAM_TOKEN", "123:ABC"),
                ("TELEGRAM_CHAT_ID", "424242"),
            ]);
            map.remove(missing);
            let err = from_map(&map).unwrap_err();
            assert!(
                matches!(err, ConfigError::MissingCredential(name) if name == missing),
                "expected MissingCredential({missing}), got {err:?}"
            );
        }
    }

    #[test]
    fn empty_credential_counts_as_missing() {
        let map = env(&[
            ("PRACTICUM_TOKEN", "  "),
            ("TELEGRAM_TOKEN", "123:ABC"),
            ("TELEGRAM_CHAT_ID", "424242"),
        ]);
        assert!(matches!(
            from_map(&map),
            Err(ConfigError::MissingCredential("PRACTICUM_TOKEN"))
        ));
    }

    #[test]
    fn non_numeric_chat_id_is_rejected() {
        let map = env(&[
            ("PRACTICUM_TOKEN", "y0_abc"),
            ("TELEGRAM_TOKEN", "123:ABC"),
            ("TELEGRAM_CHAT_ID", "@my_channel"),
        ]);
        assert!(matches!(from_map(&map), Err(ConfigError::InvalidChatId(_))));
    }

    #[test]
    fn negative_group_chat_id_is_accepted() {
        let map = env(&[
            ("PRACTICUM_TOKEN", "y0_abc"),
            ("TELEGRAM_TOKEN", "123:ABC"),
            ("TELEGRAM_CHAT_ID", "-100987654321"),
        ]);
        assert_eq!(from_map(&map).unwrap().chat_id, -100987654321);
    }
}
