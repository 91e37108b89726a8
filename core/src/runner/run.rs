use std::sync::Arc;
use std::time::Duration;

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::config::RunConfig;
use crate::error::ConfigError;
use crate::executor::QueryExecutor;

use super::events::{send_event, WorkerEvent};
use super::types::{RunSummary, WorkerOutcome};

/// Fan out `config.thread_count` workers, each executing the configured
/// statement exactly once, and join them all.
///
/// Worker `i` (1-indexed) sleeps `delay_ms * i` before doing anything, so
/// worker starts are linearly staggered rather than offset by a flat
/// delay. After the stagger the workers race independently: one worker's
/// failure (or timeout, or panic in the executor) becomes that worker's
/// `Failure` outcome and nothing else. `run` returns only once every
/// worker has completed, then emits `AllCompleted` on the event channel.
pub async fn run(
    config: &RunConfig,
    executor: Arc<dyn QueryExecutor>,
    event_tx: Option<mpsc::UnboundedSender<WorkerEvent>>,
) -> Result<RunSummary, ConfigError> {
    config.validate()?;

    let started = Instant::now();
    tracing::info!(
        target: "sqlswarm.runner",
        workers = config.thread_count,
        delay_ms = config.delay_ms,
        "starting run"
    );

    let mut pending = FuturesUnordered::new();
    for worker in 1..=config.thread_count {
        let executor = executor.clone();
        let sql = config.sql.clone();
        let delay = Duration::from_millis(config.delay_ms.saturating_mul(u64::from(worker)));
        let tx = event_tx.clone();
        let panic_tx = event_tx.clone();

        let handle = tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            send_event(&tx, WorkerEvent::Started { worker });
            tracing::debug!(target: "sqlswarm.runner", worker, "worker starting");

            let outcome = match executor.execute(&sql).await {
                Ok(rows) => WorkerOutcome::Success { rows },
                Err(e) => WorkerOutcome::Failure {
                    message: e.to_string(),
                },
            };

            send_event(
                &tx,
                WorkerEvent::Completed {
                    worker,
                    outcome: outcome.clone(),
                },
            );
            (worker, outcome)
        });

        // A panicked task is contained as that worker's failure; the join
        // barrier and the other workers are unaffected.
        pending.push(async move {
            match handle.await {
                Ok(result) => result,
                Err(e) => {
                    let outcome = WorkerOutcome::Failure {
                        message: format!("worker task failed: {e}"),
                    };
                    send_event(
                        &panic_tx,
                        WorkerEvent::Completed {
                            worker,
                            outcome: outcome.clone(),
                        },
                    );
                    (worker, outcome)
                }
            }
        });
    }

    let mut outcomes = Vec::with_capacity(config.thread_count as usize);
    while let Some(result) = pending.next().await {
        outcomes.push(result);
    }
    outcomes.sort_by_key(|(worker, _)| *worker);

    let summary = RunSummary {
        outcomes,
        elapsed: started.elapsed(),
    };

    send_event(
        &event_tx,
        WorkerEvent::AllCompleted {
            total: config.thread_count,
            failed: summary.failed() as u32,
        },
    );
    tracing::info!(
        target: "sqlswarm.runner",
        total = summary.total(),
        failed = summary.failed(),
        elapsed_ms = summary.elapsed.as_millis() as u64,
        "all workers completed"
    );

    Ok(summary)
}
