pub mod telegram;

#[cfg(test)]
pub mod mock;

pub use telegram::TelegramNotifier;

use async_trait::async_trait;

/// Outbound chat notifications. Delivery is best-effort by contract:
/// failures are logged and dropped, never retried or surfaced to callers.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str);
}
