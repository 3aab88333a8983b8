//! Status API client — fetches homework review statuses since a given
//! watermark and validates the response shape.
//!
//! The API answers `GET {endpoint}?from_date={ts}` with
//! `{"homeworks": [...], "current_date": <ts>}` and authenticates via an
//! `Authorization: OAuth <token>` header. Application errors arrive as an
//! `error`/`code` key in the body, sometimes under HTTP 200, so the body
//! is inspected before the status line is trusted.

use serde::Deserialize;
use serde_json::Value;

use crate::error::PollError;

/// One unit of submitted work, as reported by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct Homework {
    pub status: String,
    pub homework_name: String,
}

pub struct StatusClient {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl StatusClient {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }

    /// Fetch all status changes since `from_date`. Returns the decoded
    /// payload unmodified; shape validation is a separate step.
    pub async fn fetch(&self, from_date: i64) -> Result<Value, PollError> {
        let resp = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = resp.status().as_u16();
        let text = resp.text().await?;
        // Lenient decode: an unparseable body must not mask the status
        // check below. `Null` fails shape validation downstream anyway.
        let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);

        // The server signals application errors in the body; that takes
        // precedence over the HTTP status line.
        if let Some(message) = api_error_message(&body) {
            return Err(PollError::Api { message });
        }
        if status != 200 {
            return Err(PollError::UnexpectedCode(status));
        }

        tracing::debug!(from_date, "status endpoint answered 200");
        Ok(body)
    }
}

fn api_error_message(body: &Value) -> Option<String> {
    if body.get("error").is_none() && body.get("code").is_none() {
        return None;
    }
    let code = body["code"].as_str().unwrap_or("");
    let error = &body["error"];
    let detail = error
        .as_str()
        .map(String::from)
        .unwrap_or_else(|| error.to_string());
    Some(if code.is_empty() {
        detail
    } else {
        format!("{code}: {detail}")
    })
}

/// Check the payload shape and hand back the raw homework records.
/// No per-record validation happens here.
pub fn validate_response(payload: &Value) -> Result<&Vec<Value>, PollError> {
    let map = payload
        .as_object()
        .ok_or_else(|| PollError::Shape("response is not a JSON object".into()))?;
    let homeworks = map
        .get("homeworks")
        .ok_or_else(|| PollError::Shape("response has no `homeworks` key".into()))?;
    homeworks
        .as_array()
        .ok_or_else(|| PollError::Shape("`homeworks` is not an array".into()))
}
