/// Health-check engine
///
/// This module is responsible for:
/// - Probing registered sites over HTTP
/// - Classifying each probe as healthy/unhealthy
/// - Rendering chat reports
/// - Running the periodic silent check
pub mod checker;
pub mod report;
pub mod runner;
pub mod scheduler;
pub mod types;

#[cfg(test)]
pub mod mock;

pub use checker::{Checker, HttpChecker};
pub use runner::HealthChecker;
pub use types::{CheckOutcome, CheckResult};
