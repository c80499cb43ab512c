use chrono::Local;

use super::types::{CheckOutcome, CheckResult};

/// Sent for both an empty `/list` and an empty manual check.
pub const NO_SITES_TEXT: &str = "📭 No sites are currently registered";

fn render_line(result: &CheckResult) -> String {
    match &result.outcome {
        CheckOutcome::Healthy(status) => format!("✅ {} → {}", result.url, status),
        CheckOutcome::Unhealthy(reason) => format!("❌ {} → {}", result.url, reason),
    }
}

/// Full report for a manual run: banner, every site, timestamp trailer.
pub fn render_manual_report(results: &[CheckResult]) -> String {
    let any_failed = results.iter().any(|result| !result.is_healthy());

    let mut msg = if any_failed {
        String::from("🔴 Manual check complete (problems found)\n\n")
    } else {
        String::from("🟢 Manual check complete (all normal)\n\n")
    };

    for result in results.iter().filter(|result| result.is_healthy()) {
        msg.push_str(&render_line(result));
        msg.push('\n');
    }
    for result in results.iter().filter(|result| !result.is_healthy()) {
        msg.push_str(&render_line(result));
        msg.push('\n');
    }

    msg.push_str(&format!("\n⏱ Checked at: {}", Local::now().format("%Y-%m-%d %H:%M:%S")));
    msg
}

/// Failures-only report for a scheduled run; `None` when everything is
/// healthy, in which case nothing is sent.
pub fn render_scheduled_report(results: &[CheckResult]) -> Option<String> {
    let failed: Vec<&CheckResult> = results.iter().filter(|result| !result.is_healthy()).collect();

    if failed.is_empty() {
        return None;
    }

    let mut msg = String::from("❌ Scheduled check found problems:\n\n");
    for result in failed {
        msg.push_str(&render_line(result));
        msg.push('\n');
    }

    Some(msg)
}
