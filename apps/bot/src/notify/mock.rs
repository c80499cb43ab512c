use std::sync::Mutex;

use async_trait::async_trait;

use super::Notifier;

/// Notifier double that records every sent message.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, text: &str) {
        self.sent.lock().unwrap().push(text.to_string());
    }
}
