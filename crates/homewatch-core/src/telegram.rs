//! Telegram notifier -- deliver status messages via the Bot API.

use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

use crate::error::NotifyError;

/// Delivery channel for rendered status messages.
pub trait Notifier {
    fn send(&self, text: &str) -> Result<(), NotifyError>;
}

/// Sends messages to one chat through the Telegram Bot API.
pub struct TelegramNotifier {
    api_base: String,
    token: String,
    chat_id: String,
    client: Client,
}

impl TelegramNotifier {
    /// Build a notifier with a request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(
        api_base: impl Into<String>,
        token: impl Into<String>,
        chat_id: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, NotifyError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            api_base: api_base.into(),
            token: token.into(),
            chat_id: chat_id.into(),
            client,
        })
    }
}

impl Notifier for TelegramNotifier {
    fn send(&self, text: &str) -> Result<(), NotifyError> {
        tracing::info!("sending message to chat {}", self.chat_id);

        let url = format!(
            "{}/bot{}/sendMessage",
            self.api_base.trim_end_matches('/'),
            self.token
        );
        let body = json!({ "chat_id": self.chat_id, "text": text });

        let response = tokio::runtime::Handle::current()
            .block_on(self.client.post(&url).json(&body).send())?;

        if !response.status().is_success() {
            let status = response.status();
            let body = tokio::runtime::Handle::current()
                .block_on(response.text())
                .unwrap_or_default();
            return Err(NotifyError::Api {
                description: format!("HTTP {status}: {body}"),
            });
        }

        // The Bot API reports failures inside a 200 body as ok=false.
        let payload: Value = tokio::runtime::Handle::current().block_on(response.json())?;
        if payload.get("ok").and_then(Value::as_bool) != Some(true) {
            let description = payload
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or("unknown error")
                .to_string();
            return Err(NotifyError::Api { description });
        }

        tracing::info!("message delivered");
        Ok(())
    }
}
