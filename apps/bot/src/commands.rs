use std::sync::Arc;

use crate::monitoring::HealthChecker;
use crate::monitoring::report::NO_SITES_TEXT;
use crate::notify::Notifier;
use crate::registry::SiteRegistry;
use crate::validation;

pub const HELP_TEXT: &str = "📌 Usage:
Send a link starting with http:// or https:// to register a keepalive site.

Commands:
/list   Show all registered sites
/remove <url>  Remove one site
/check  Run an immediate check
/help   Show this help";

/// Stateless command dispatch for one inbound message. Transitions are
/// evaluated in fixed priority order; every path completes without error.
pub struct CommandRouter {
    registry: Arc<dyn SiteRegistry>,
    notifier: Arc<dyn Notifier>,
    checker: Arc<HealthChecker>,
}

impl CommandRouter {
    pub fn new(
        registry: Arc<dyn SiteRegistry>,
        notifier: Arc<dyn Notifier>,
        checker: Arc<HealthChecker>,
    ) -> Self {
        Self { registry, notifier, checker }
    }

    pub async fn handle_command(&self, text: &str) {
        if text == "/help" {
            self.notifier.send(HELP_TEXT).await;
            return;
        }

        if text == "/list" {
            self.list_sites().await;
            return;
        }

        // Literal prefix strip, not tokenization; `/removefoo bar` is
        // treated as `foo bar` and rejected by validation.
        if let Some(rest) = text.strip_prefix("/remove") {
            self.remove_site(rest.trim()).await;
            return;
        }

        if text == "/check" {
            self.checker.run_check(true).await;
            return;
        }

        if validation::is_registrable_url(text) {
            self.add_site(text).await;
            return;
        }

        self.notifier.send(HELP_TEXT).await;
    }

    async fn list_sites(&self) {
        let sites = match self.registry.list().await {
            Ok(sites) => sites,
            Err(error) => {
                tracing::warn!("Failed to list sites: {error:#}");
                return;
            }
        };

        if sites.is_empty() {
            self.notifier.send(NO_SITES_TEXT).await;
            return;
        }

        let mut msg = String::from("📌 Registered sites:\n\n");
        for (index, site) in sites.iter().enumerate() {
            msg.push_str(&format!("{}. {}\n", index + 1, site));
        }
        self.notifier.send(&msg).await;
    }

    async fn remove_site(&self, url: &str) {
        let validated = validation::validate_site_url(url);
        if let Some(error) = validated.error {
            self.notifier.send(&format!("❌ {error}")).await;
            return;
        }

        match self.registry.remove(url).await {
            Ok(()) => self.notifier.send(&format!("🗑 Removed:\n{url}")).await,
            Err(error) => tracing::warn!("Failed to remove {url}: {error:#}"),
        }
    }

    async fn add_site(&self, url: &str) {
        match self.registry.add(url).await {
            Ok(()) => self.notifier.send(&format!("✅ Registered keepalive site:\n{url}")).await,
            Err(error) => tracing::warn!("Failed to register {url}: {error:#}"),
        }
    }
}
