use std::time::Duration;

use super::RunSummary;

const TITLE: &str = "Load Test Summary";
const TITLE_RULE: &str = "--------------------";
const ERRORS_TITLE: &str = "Errors:";
const ERRORS_RULE: &str = "--------";
/// Width of the longest label, "Avg Response Time".
const LABEL_WIDTH: usize = 17;
/// Nanoseconds per hundredth of a second.
const NS_PER_CENTISECOND: u128 = 10_000_000;
/// Nanoseconds per hundredth of a millisecond.
const NS_PER_CENTIMILLI: u128 = 10_000;
/// Hundredths per whole unit.
const HUNDREDTHS: u128 = 100;

/// Text report lines: the core block, latency details, then errors if any.
#[must_use]
pub fn summary_lines(summary: &RunSummary) -> Vec<String> {
    let mut lines = vec![TITLE.to_owned(), TITLE_RULE.to_owned()];

    lines.push(field("Total Requests", summary.total));
    lines.push(field("Successful", summary.successful));
    lines.push(field("Failed", summary.failed));
    lines.push(field("Avg Response Time", format_seconds(summary.average)));
    lines.push(field("Status Codes", format_status_codes(summary)));
    lines.push(field(
        "Min/Max Latency",
        format!(
            "{} / {}",
            format_millis(summary.min),
            format_millis(summary.max)
        ),
    ));
    lines.push(field(
        "P50/P90/P99",
        format!(
            "{} / {} / {}",
            format_millis(summary.p50),
            format_millis(summary.p90),
            format_millis(summary.p99)
        ),
    ));
    if let Some(wall_time) = summary.wall_time {
        lines.push(field("Wall Time", format_seconds(wall_time)));
    }

    if summary.failed > 0 {
        lines.push(String::new());
        lines.push(ERRORS_TITLE.to_owned());
        lines.push(ERRORS_RULE.to_owned());
        lines.extend(summary.errors.iter().cloned());
    }

    lines
}

fn field(label: &str, value: impl std::fmt::Display) -> String {
    format!("{:<width$}: {}", label, value, width = LABEL_WIDTH)
}

fn format_status_codes(summary: &RunSummary) -> String {
    if summary.status_codes.is_empty() {
        return "none".to_owned();
    }
    summary
        .status_codes
        .iter()
        .map(|(code, count)| format!("{}({})", code, count))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Seconds with two decimals, rounded half up.
pub(super) fn format_seconds(duration: Duration) -> String {
    let hundredths = round_to(duration, NS_PER_CENTISECOND);
    format!(
        "{}.{:02}s",
        hundredths.checked_div(HUNDREDTHS).unwrap_or(0),
        hundredths.checked_rem(HUNDREDTHS).unwrap_or(0)
    )
}

/// Milliseconds with two decimals, rounded half up.
pub(super) fn format_millis(duration: Duration) -> String {
    let hundredths = round_to(duration, NS_PER_CENTIMILLI);
    format!(
        "{}.{:02}ms",
        hundredths.checked_div(HUNDREDTHS).unwrap_or(0),
        hundredths.checked_rem(HUNDREDTHS).unwrap_or(0)
    )
}

fn round_to(duration: Duration, step_nanos: u128) -> u128 {
    duration
        .as_nanos()
        .saturating_add(step_nanos.checked_div(2).unwrap_or(0))
        .checked_div(step_nanos)
        .unwrap_or(0)
}
