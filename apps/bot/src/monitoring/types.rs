/// Outcome of a single site probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Response received with a success status code
    Healthy(u16),
    /// Non-success status or transport failure, described for the report
    Unhealthy(String),
}

/// Ephemeral per-run result for one site; never persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub url: String,
    pub outcome: CheckOutcome,
}

impl CheckResult {
    pub fn healthy(url: impl Into<String>, status: u16) -> Self {
        Self { url: url.into(), outcome: CheckOutcome::Healthy(status) }
    }

    pub fn unhealthy(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { url: url.into(), outcome: CheckOutcome::Unhealthy(reason.into()) }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self.outcome, CheckOutcome::Healthy(_))
    }
}
