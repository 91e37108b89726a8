use chrono::Utc;
use serde::Serialize;

use sqlswarm_core::{RunSummary, WorkerEvent, WorkerOutcome};

use crate::commands::cli::StreamFormat;

/// One JSONL line of the event stream. Fields that do not apply to an
/// event are omitted from the output entirely.
#[derive(Debug, Serialize)]
pub struct JsonlEvent {
    pub v: u32,
    #[serde(rename = "event")]
    pub event_type: String,
    pub ts: String,
    pub run_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed: Option<u32>,
}

impl JsonlEvent {
    fn new(event_type: &str, run_id: &str) -> Self {
        Self {
            v: 1,
            event_type: event_type.to_string(),
            ts: Utc::now().to_rfc3339(),
            run_id: run_id.to_string(),
            worker: None,
            rows: None,
            error: None,
            total: None,
            failed: None,
        }
    }
}

pub fn render_event(event: &WorkerEvent, format: StreamFormat, run_id: &str) -> String {
    match format {
        StreamFormat::Text => render_text(event),
        StreamFormat::Jsonl => render_jsonl(event, run_id),
    }
}

fn render_text(event: &WorkerEvent) -> String {
    match event {
        WorkerEvent::Started { worker } => format!("[worker {worker}] starting"),
        WorkerEvent::Completed { worker, outcome } => match outcome {
            WorkerOutcome::Success { rows } => format!("[worker {worker}] completed, rows: {rows}"),
            WorkerOutcome::Failure { message } => format!("[worker {worker}] error: {message}"),
        },
        WorkerEvent::AllCompleted { total, failed } => {
            format!("all workers completed ({} ok, {failed} failed)", total - failed)
        }
    }
}

fn render_jsonl(event: &WorkerEvent, run_id: &str) -> String {
    let jsonl = match event {
        WorkerEvent::Started { worker } => {
            let mut e = JsonlEvent::new("worker.start", run_id);
            e.worker = Some(*worker);
            e
        }
        WorkerEvent::Completed { worker, outcome } => {
            let mut e = JsonlEvent::new("worker.complete", run_id);
            e.worker = Some(*worker);
            match outcome {
                WorkerOutcome::Success { rows } => e.rows = Some(*rows),
                WorkerOutcome::Failure { message } => e.error = Some(message.clone()),
            }
            e
        }
        WorkerEvent::AllCompleted { total, failed } => {
            let mut e = JsonlEvent::new("run.complete", run_id);
            e.total = Some(*total);
            e.failed = Some(*failed);
            e
        }
    };
    // Serialization of this shape cannot fail; fall back to an empty object
    // rather than poisoning the stream.
    serde_json::to_string(&jsonl).unwrap_or_else(|_| "{}".to_string())
}

pub fn render_summary(summary: &RunSummary) -> String {
    format!(
        "summary: {} worker(s), {} ok, {} failed, {} row(s), {:.2}s",
        summary.total(),
        summary.succeeded(),
        summary.failed(),
        summary.total_rows(),
        summary.elapsed.as_secs_f64()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn text_lines_carry_worker_and_outcome() {
        assert_eq!(
            render_text(&WorkerEvent::Started { worker: 3 }),
            "[worker 3] starting"
        );
        assert_eq!(
            render_text(&WorkerEvent::Completed {
                worker: 3,
                outcome: WorkerOutcome::Success { rows: 42 },
            }),
            "[worker 3] completed, rows: 42"
        );
        assert_eq!(
            render_text(&WorkerEvent::Completed {
                worker: 2,
                outcome: WorkerOutcome::Failure {
                    message: "query timed out after 30s".to_string(),
                },
            }),
            "[worker 2] error: query timed out after 30s"
        );
        assert_eq!(
            render_text(&WorkerEvent::AllCompleted { total: 5, failed: 1 }),
            "all workers completed (4 ok, 1 failed)"
        );
    }

    #[test]
    fn jsonl_events_omit_inapplicable_fields() {
        let line = render_jsonl(
            &WorkerEvent::Completed {
                worker: 1,
                outcome: WorkerOutcome::Success { rows: 7 },
            },
            "run-1",
        );
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["v"], 1);
        assert_eq!(value["event"], "worker.complete");
        assert_eq!(value["run_id"], "run-1");
        assert_eq!(value["worker"], 1);
        assert_eq!(value["rows"], 7);
        assert!(value.get("error").is_none());
        assert!(value.get("total").is_none());
    }

    #[test]
    fn jsonl_failure_carries_error_not_rows() {
        let line = render_jsonl(
            &WorkerEvent::Completed {
                worker: 4,
                outcome: WorkerOutcome::Failure {
                    message: "failed to connect".to_string(),
                },
            },
            "run-2",
        );
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["error"], "failed to connect");
        assert!(value.get("rows").is_none());
    }
}
