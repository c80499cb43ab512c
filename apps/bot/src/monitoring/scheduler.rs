use std::sync::Arc;
use std::time::Duration;

use tokio::time::{MissedTickBehavior, interval};

use super::runner::HealthChecker;

/// Spawn the periodic silent check loop. The trigger source never sees a
/// result; failures surface only through chat notifications.
pub fn spawn(checker: Arc<HealthChecker>, period: Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut timer = interval(period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // interval fires immediately; skip the startup tick
        timer.tick().await;

        loop {
            timer.tick().await;
            tracing::debug!("running scheduled check");
            checker.run_check(false).await;
        }
    })
}
