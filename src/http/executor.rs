use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Semaphore, mpsc};
use tokio::time::{Instant, timeout};
use tracing::{debug, error, info};

use crate::args::{PositiveUsize, TesterArgs};
use crate::error::{AppError, AppResult, HttpError};
use crate::metrics::{Outcome, ResultAccumulator, setup_outcome_collector};
use crate::requests::RequestDescriptor;

use super::client::{ClientSettings, build_client};
use super::transport::{ReqwestTransport, Transport};
use super::work::{ExecutionUnit, build_work_list};

/// Outcome channel slots per concurrency permit.
const OUTCOME_BUFFER_PER_PERMIT: usize = 2;

#[derive(Debug, Clone)]
pub struct ExecutionSettings {
    pub concurrency: PositiveUsize,
    pub repeats: usize,
    pub request_timeout: Duration,
}

impl From<&TesterArgs> for ExecutionSettings {
    fn from(args: &TesterArgs) -> Self {
        Self {
            concurrency: args.concurrency,
            repeats: args.repeat,
            request_timeout: args.request_timeout,
        }
    }
}

/// Builds the HTTP client and runs the batch against it.
///
/// The transport is dropped once, after every unit has been recorded.
///
/// # Errors
///
/// Returns an error when the HTTP client cannot be built or the outcome
/// collector stops early. Individual request failures are recorded, not
/// returned.
pub async fn execute_run(
    descriptors: &[RequestDescriptor],
    settings: &ExecutionSettings,
    client_settings: &ClientSettings,
) -> AppResult<ResultAccumulator> {
    let client = build_client(client_settings)?;
    let transport = Arc::new(ReqwestTransport::new(client));
    let accumulator = run_load(Arc::clone(&transport), descriptors, settings).await?;
    drop(transport);
    Ok(accumulator)
}

/// Fires every `(repeat, descriptor)` pair at most `concurrency` at a time.
///
/// Admission blocks while all permits are taken. Returns only after every
/// dispatched unit has finished and its outcome has been recorded.
///
/// # Errors
///
/// Returns an error only when the outcome collector task fails.
pub async fn run_load<T>(
    transport: Arc<T>,
    descriptors: &[RequestDescriptor],
    settings: &ExecutionSettings,
) -> AppResult<ResultAccumulator>
where
    T: Transport + ?Sized + 'static,
{
    let shared: Vec<Arc<RequestDescriptor>> =
        descriptors.iter().cloned().map(Arc::new).collect();
    let units = build_work_list(&shared, settings.repeats);
    if units.is_empty() {
        info!("No requests to send.");
        return Ok(ResultAccumulator::default());
    }

    // Capped at the unit count and at tokio's `Semaphore::MAX_PERMITS`.
    let concurrency = settings
        .concurrency
        .get()
        .min(units.len())
        .min(Semaphore::MAX_PERMITS);
    info!(
        "Sending {} requests ({} descriptors x {} repeats) with concurrency {}",
        units.len(),
        descriptors.len(),
        settings.repeats,
        concurrency
    );

    let outcome_buffer = concurrency
        .saturating_mul(OUTCOME_BUFFER_PER_PERMIT)
        .min(Semaphore::MAX_PERMITS);
    let (outcome_tx, outcome_rx) = mpsc::channel::<Outcome>(outcome_buffer);
    let collector = setup_outcome_collector(outcome_rx);
    let permits = Arc::new(Semaphore::new(concurrency));
    let mut handles = Vec::with_capacity(units.len());

    for unit in units {
        let label = unit_label(&unit);
        let permit = match Arc::clone(&permits).acquire_owned().await {
            Ok(permit) => permit,
            Err(err) => {
                error!("Concurrency limiter unavailable: {}", err);
                let outcome =
                    Outcome::failure(format!("{}: concurrency limiter unavailable: {}", label, err));
                outcome_tx
                    .send(outcome)
                    .await
                    .map_err(|_send_error| AppError::http(HttpError::CollectorStopped))?;
                continue;
            }
        };

        let transport = Arc::clone(&transport);
        let outcome_tx = outcome_tx.clone();
        let request_timeout = settings.request_timeout;
        let handle = tokio::spawn(async move {
            let outcome = execute_unit(transport.as_ref(), &unit, request_timeout).await;
            drop(permit);
            if outcome_tx.send(outcome).await.is_err() {
                error!("Outcome collector stopped; dropping result.");
            }
        });
        handles.push((label, handle));
    }

    // Only reachable with unwinding panics; the release profile aborts instead.
    for (label, handle) in handles {
        if let Err(err) = handle.await {
            error!("Request task for {} failed: {}", label, err);
            outcome_tx
                .send(Outcome::failure(format!("{}: request task failed: {}", label, err)))
                .await
                .map_err(|_send_error| AppError::http(HttpError::CollectorStopped))?;
        }
    }
    drop(outcome_tx);

    let accumulator = collector.await?;
    info!(
        "Finished {} requests: {} ok, {} failed",
        accumulator.total(),
        accumulator.success_count(),
        accumulator.fail_count()
    );
    Ok(accumulator)
}

fn unit_label(unit: &ExecutionUnit) -> String {
    format!("{} {}", unit.descriptor().method(), unit.descriptor().url())
}

async fn execute_unit<T>(transport: &T, unit: &ExecutionUnit, request_timeout: Duration) -> Outcome
where
    T: Transport + ?Sized,
{
    let descriptor = unit.descriptor();
    let start = Instant::now();
    let result = timeout(request_timeout, transport.send(descriptor)).await;
    let elapsed = start.elapsed();

    match result {
        Ok(Ok(status_code)) => {
            debug!(
                "[{}:{}] {} {} -> {} in {:?}",
                unit.repeat(),
                unit.index(),
                descriptor.method(),
                descriptor.url(),
                status_code,
                elapsed
            );
            Outcome::success(status_code, elapsed)
        }
        Ok(Err(err)) => {
            debug!(
                "[{}:{}] {} {} failed: {}",
                unit.repeat(),
                unit.index(),
                descriptor.method(),
                descriptor.url(),
                err
            );
            Outcome::failure(format!(
                "{} {}: {}",
                descriptor.method(),
                descriptor.url(),
                err
            ))
        }
        Err(_elapsed) => {
            debug!(
                "[{}:{}] {} {} timed out",
                unit.repeat(),
                unit.index(),
                descriptor.method(),
                descriptor.url()
            );
            Outcome::failure(format!(
                "{} {}: timeout: request timed out after {}ms",
                descriptor.method(),
                descriptor.url(),
                request_timeout.as_millis()
            ))
        }
    }
}
