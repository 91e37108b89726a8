use tokio::sync::mpsc;

use super::types::WorkerOutcome;

/// Frontend-facing events emitted by the worker fan-out.
///
/// This lives under `core::runner` so `core` stays presentation-agnostic:
/// the CLI renders these as text or JSONL, but workers never touch the
/// console themselves. Events from different workers interleave freely;
/// only `AllCompleted` is ordered: it is sent strictly after every
/// worker's `Completed`.
#[derive(Debug, Clone)]
pub enum WorkerEvent {
    Started {
        worker: u32,
    },
    Completed {
        worker: u32,
        outcome: WorkerOutcome,
    },
    AllCompleted {
        total: u32,
        failed: u32,
    },
}

pub(crate) fn send_event(tx: &Option<mpsc::UnboundedSender<WorkerEvent>>, event: WorkerEvent) {
    if let Some(tx) = tx {
        if tx.send(event).is_err() {
            tracing::debug!(target: "sqlswarm.runner", "event receiver closed, dropping event");
        }
    }
}
