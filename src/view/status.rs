//! Server status badge and probe result boxes

use colored::*;

use crate::probe::{OutcomeKind, ProbeOutcome};
use crate::state::ServerStatus;

/// One-line online/offline indicator
pub fn status_badge(status: &ServerStatus) -> String {
    match status {
        ServerStatus::Online { tool_total } => {
            format!("{} {}", "● Server Online".green().bold(), format!("({} tools)", tool_total).dimmed())
        }
        ServerStatus::Offline { message } => {
            format!("{} {}", "● Server Offline".red().bold(), format!("({})", message).dimmed())
        }
        ServerStatus::Unknown => "○ Server status unknown".dimmed().to_string(),
    }
}

fn marker(kind: OutcomeKind) -> ColoredString {
    match kind {
        OutcomeKind::Success => "✔".green(),
        OutcomeKind::Error => "✖".red(),
        OutcomeKind::Loading => "…".blue(),
    }
}

/// Status line for a probe, with the pretty-printed result on success
pub fn outcome_box(outcome: &ProbeOutcome) -> String {
    let message = match outcome.kind {
        OutcomeKind::Success => outcome.message.green(),
        OutcomeKind::Error => outcome.message.red(),
        OutcomeKind::Loading => outcome.message.blue(),
    };
    let mut out = format!("{} {}\n", marker(outcome.kind), message);

    if let (OutcomeKind::Success, Some(at)) = (outcome.kind, outcome.executed_at) {
        out.push_str(&format!("{} {}\n", "Executed at:".dimmed(), at.to_rfc3339()));
    }

    if let (OutcomeKind::Success, Some(data)) = (outcome.kind, &outcome.data) {
        let pretty = serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string());
        out.push_str(&format!("\n{}\n{}\n", "Result:".bold(), pretty));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_badge_online() {
        let badge = status_badge(&ServerStatus::Online { tool_total: 269 });
        assert!(badge.contains("Server Online"));
        assert!(badge.contains("269 tools"));
    }

    #[test]
    fn test_badge_offline() {
        let badge = status_badge(&ServerStatus::Offline {
            message: "Server unreachable".to_string(),
        });
        assert!(badge.contains("Server Offline"));
        assert!(badge.contains("Server unreachable"));
    }

    #[test]
    fn test_outcome_box_success_shows_result() {
        let outcome = ProbeOutcome::success("Tool executed successfully!").with_data(json!({ "id": "c_1" }));
        let out = outcome_box(&outcome);
        assert!(out.contains("Tool executed successfully!"));
        assert!(out.contains("Result:"));
        assert!(out.contains("\"id\": \"c_1\""));
    }

    #[test]
    fn test_outcome_box_shows_execution_time() {
        let mut outcome = ProbeOutcome::success("Tool executed successfully!");
        outcome.executed_at = chrono::DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
            .ok()
            .map(|t| t.with_timezone(&chrono::Utc));
        let out = outcome_box(&outcome);
        assert!(out.contains("Executed at:"));
        assert!(out.contains("2024-01-01T00:00:00+00:00"));
    }

    #[test]
    fn test_outcome_box_error_hides_data() {
        let outcome = ProbeOutcome::error("Tool execution failed: nope").with_data(json!({ "secret": 1 }));
        let out = outcome_box(&outcome);
        assert!(out.contains("Tool execution failed: nope"));
        assert!(!out.contains("secret"));
    }
}
