use std::collections::BTreeMap;
use std::time::Duration;

/// Result of one execution unit.
///
/// Any received HTTP response is a `Success`, whatever its status class.
/// `Failure` is reserved for transport-level errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success { status_code: u16, elapsed: Duration },
    Failure { error: String },
}

impl Outcome {
    #[must_use]
    pub const fn success(status_code: u16, elapsed: Duration) -> Self {
        Outcome::Success {
            status_code,
            elapsed,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Outcome::Failure {
            error: error.into(),
        }
    }
}

/// Aggregate of every recorded outcome in a run.
///
/// Mutated only through [`ResultAccumulator::record`]; the collector task
/// is its single writer while a run is in progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultAccumulator {
    success_count: u64,
    fail_count: u64,
    elapsed_times: Vec<Duration>,
    status_codes: BTreeMap<u16, u64>,
    error_messages: Vec<String>,
}

impl ResultAccumulator {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Success {
                status_code,
                elapsed,
            } => {
                self.success_count = self.success_count.saturating_add(1);
                self.elapsed_times.push(elapsed);
                let count = self.status_codes.entry(status_code).or_insert(0);
                *count = count.saturating_add(1);
            }
            Outcome::Failure { error } => {
                self.fail_count = self.fail_count.saturating_add(1);
                self.error_messages.push(error);
            }
        }
    }

    #[must_use]
    pub const fn success_count(&self) -> u64 {
        self.success_count
    }

    #[must_use]
    pub const fn fail_count(&self) -> u64 {
        self.fail_count
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.success_count.saturating_add(self.fail_count)
    }

    #[must_use]
    pub fn elapsed_times(&self) -> &[Duration] {
        &self.elapsed_times
    }

    #[must_use]
    pub const fn status_codes(&self) -> &BTreeMap<u16, u64> {
        &self.status_codes
    }

    #[must_use]
    pub fn error_messages(&self) -> &[String] {
        &self.error_messages
    }
}
