use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::AppResult;

use super::RunSummary;

#[derive(Debug, Serialize)]
struct JsonReport<'summary> {
    total_requests: u64,
    successful: u64,
    failed: u64,
    avg_response_time_secs: f64,
    min_latency_secs: f64,
    max_latency_secs: f64,
    p50_latency_secs: f64,
    p90_latency_secs: f64,
    p99_latency_secs: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    wall_time_secs: Option<f64>,
    status_codes: &'summary BTreeMap<u16, u64>,
    errors: &'summary [String],
}

/// Pretty-printed JSON rendering of a run summary.
///
/// # Errors
///
/// Returns an error when serialization fails.
pub fn render_json(summary: &RunSummary) -> AppResult<String> {
    let report = JsonReport {
        total_requests: summary.total,
        successful: summary.successful,
        failed: summary.failed,
        avg_response_time_secs: summary.average.as_secs_f64(),
        min_latency_secs: summary.min.as_secs_f64(),
        max_latency_secs: summary.max.as_secs_f64(),
        p50_latency_secs: summary.p50.as_secs_f64(),
        p90_latency_secs: summary.p90.as_secs_f64(),
        p99_latency_secs: summary.p99.as_secs_f64(),
        wall_time_secs: summary.wall_time.map(|wall_time| wall_time.as_secs_f64()),
        status_codes: &summary.status_codes,
        errors: &summary.errors,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
