use async_trait::async_trait;
use serde_json::json;

use super::Notifier;

/// Sends messages to the single configured chat via the Telegram Bot API.
pub struct TelegramNotifier {
    client: reqwest::Client,
    token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(token: String, chat_id: String) -> Self {
        Self { client: reqwest::Client::new(), token, chat_id }
    }

    fn endpoint(&self) -> String {
        format!("https://api.telegram.org/bot{}/sendMessage", self.token)
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) {
        let payload = json!({ "chat_id": self.chat_id, "text": text });

        match self.client.post(self.endpoint()).json(&payload).send().await {
            Ok(response) if !response.status().is_success() => {
                tracing::warn!(status = %response.status(), "Telegram sendMessage rejected");
            }
            Ok(_) => {}
            Err(error) => {
                tracing::warn!("Failed to deliver Telegram notification: {error}");
            }
        }
    }
}
