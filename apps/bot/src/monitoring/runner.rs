use std::sync::Arc;
use std::time::Duration;

use crate::notify::Notifier;
use crate::registry::SiteRegistry;

use super::checker::Checker;
use super::report;
use super::types::CheckResult;

/// Walks the registry and probes every site in sequence, then reports over
/// the notifier. One attempt per site per run; there are no retries.
pub struct HealthChecker {
    registry: Arc<dyn SiteRegistry>,
    notifier: Arc<dyn Notifier>,
    checker: Arc<dyn Checker>,
    /// Pause between consecutive site probes; self-throttling only, zero
    /// disables pacing.
    pause: Duration,
}

impl HealthChecker {
    pub fn new(
        registry: Arc<dyn SiteRegistry>,
        notifier: Arc<dyn Notifier>,
        checker: Arc<dyn Checker>,
        pause: Duration,
    ) -> Self {
        Self { registry, notifier, checker, pause }
    }

    /// Run one full check pass. Manual runs always report; scheduled runs
    /// report only when at least one site is unhealthy.
    pub async fn run_check(&self, manual: bool) {
        let sites = match self.registry.list().await {
            Ok(sites) => sites,
            Err(error) => {
                tracing::warn!("Failed to read site registry: {error:#}");
                return;
            }
        };

        if sites.is_empty() {
            if manual {
                self.notifier.send(report::NO_SITES_TEXT).await;
            }
            return;
        }

        let mut results = Vec::with_capacity(sites.len());
        for (index, site) in sites.iter().enumerate() {
            if index > 0 && !self.pause.is_zero() {
                tokio::time::sleep(self.pause).await;
            }
            results.push(self.probe(site).await);
        }

        if manual {
            self.notifier.send(&report::render_manual_report(&results)).await;
        } else if let Some(message) = report::render_scheduled_report(&results) {
            self.notifier.send(&message).await;
        }
    }

    async fn probe(&self, url: &str) -> CheckResult {
        match self.checker.check(url).await {
            Ok(status) if (200..300).contains(&status) => {
                tracing::info!(url, status, "site healthy");
                CheckResult::healthy(url, status)
            }
            Ok(status) => {
                tracing::info!(url, status, "site unhealthy");
                CheckResult::unhealthy(url, status.to_string())
            }
            Err(error) => {
                tracing::info!(url, %error, "site unreachable");
                CheckResult::unhealthy(url, error.to_string())
            }
        }
    }
}
