use std::time::Duration;

use hdrhistogram::Histogram;

/// Latency histogram at microsecond resolution.
#[derive(Debug)]
pub struct LatencyHistogram {
    hist: Histogram<u64>,
}

impl LatencyHistogram {
    /// Create a new latency histogram.
    ///
    /// # Errors
    ///
    /// Returns an error if the histogram cannot be created.
    pub fn new() -> Result<Self, String> {
        let hist = Histogram::<u64>::new(3)
            .map_err(|err| format!("Failed to create histogram: {}", err))?;
        Ok(Self { hist })
    }

    /// Build a histogram from a set of latencies.
    ///
    /// # Errors
    ///
    /// Returns an error if the histogram cannot be created or a value
    /// cannot be recorded.
    pub fn from_durations<'sample>(
        samples: impl IntoIterator<Item = &'sample Duration>,
    ) -> Result<Self, String> {
        let mut histogram = Self::new()?;
        for sample in samples {
            histogram.record(*sample)?;
        }
        Ok(histogram)
    }

    /// Record a single latency.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be recorded.
    pub fn record(&mut self, latency: Duration) -> Result<(), String> {
        let micros = u64::try_from(latency.as_micros())
            .unwrap_or(u64::MAX)
            .max(1);
        self.hist
            .record(micros)
            .map_err(|err| format!("Failed to record latency: {}", err))
    }

    /// p50, p90, and p99. All zero when nothing was recorded.
    #[must_use]
    pub fn percentiles(&self) -> (Duration, Duration, Duration) {
        if self.count() == 0 {
            return (Duration::ZERO, Duration::ZERO, Duration::ZERO);
        }

        (
            Duration::from_micros(self.hist.value_at_quantile(0.5)),
            Duration::from_micros(self.hist.value_at_quantile(0.9)),
            Duration::from_micros(self.hist.value_at_quantile(0.99)),
        )
    }

    #[must_use]
    pub fn count(&self) -> u64 {
        self.hist.len()
    }
}
