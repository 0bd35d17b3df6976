use std::collections::BTreeMap;
use std::time::Duration;

use tracing::warn;

use crate::metrics::{LatencyHistogram, ResultAccumulator};

/// Read-only view of a finished run, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub total: u64,
    pub successful: u64,
    pub failed: u64,
    /// Mean over successful attempts; zero when there were none.
    pub average: Duration,
    pub min: Duration,
    pub max: Duration,
    pub p50: Duration,
    pub p90: Duration,
    pub p99: Duration,
    pub status_codes: BTreeMap<u16, u64>,
    pub errors: Vec<String>,
    pub wall_time: Option<Duration>,
}

impl RunSummary {
    #[must_use]
    pub fn from_accumulator(accumulator: &ResultAccumulator) -> Self {
        let elapsed = accumulator.elapsed_times();
        let (p50, p90, p99) = match LatencyHistogram::from_durations(elapsed) {
            Ok(histogram) => histogram.percentiles(),
            Err(err) => {
                warn!("Skipping latency percentiles: {}", err);
                (Duration::ZERO, Duration::ZERO, Duration::ZERO)
            }
        };

        Self {
            total: accumulator.total(),
            successful: accumulator.success_count(),
            failed: accumulator.fail_count(),
            average: average_duration(elapsed),
            min: elapsed.iter().min().copied().unwrap_or_default(),
            max: elapsed.iter().max().copied().unwrap_or_default(),
            p50,
            p90,
            p99,
            status_codes: accumulator.status_codes().clone(),
            errors: accumulator.error_messages().to_vec(),
            wall_time: None,
        }
    }

    #[must_use]
    pub const fn with_wall_time(mut self, wall_time: Duration) -> Self {
        self.wall_time = Some(wall_time);
        self
    }
}

fn average_duration(samples: &[Duration]) -> Duration {
    let count = u128::try_from(samples.len()).unwrap_or(u128::MAX);
    if count == 0 {
        return Duration::ZERO;
    }
    let total_nanos = samples
        .iter()
        .fold(0u128, |sum, sample| sum.saturating_add(sample.as_nanos()));
    let mean = total_nanos.checked_div(count).unwrap_or(0);
    Duration::from_nanos(u64::try_from(mean).unwrap_or(u64::MAX))
}
