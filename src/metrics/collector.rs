use tokio::{sync::mpsc, task::JoinHandle};
use tracing::debug;

use super::{Outcome, ResultAccumulator};

/// Spawns the task that owns the run's accumulator.
///
/// Every execution unit sends its outcome over `outcome_rx`'s channel. The
/// task returns the frozen accumulator once all senders are dropped.
#[must_use]
pub fn setup_outcome_collector(
    mut outcome_rx: mpsc::Receiver<Outcome>,
) -> JoinHandle<ResultAccumulator> {
    tokio::spawn(async move {
        let mut accumulator = ResultAccumulator::default();
        while let Some(outcome) = outcome_rx.recv().await {
            accumulator.record(outcome);
        }
        debug!(
            "Outcome collector drained: {} ok, {} failed",
            accumulator.success_count(),
            accumulator.fail_count()
        );
        accumulator
    })
}
