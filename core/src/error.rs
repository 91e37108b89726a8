use thiserror::Error;

/// Fatal configuration problems. The run never starts when one of these
/// is returned; no worker is spawned.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("thread count must be at least 1, got {0}")]
    InvalidThreadCount(u32),

    #[error("timeout must be at least 1 second, got {0}")]
    InvalidTimeout(u64),
}

/// Per-worker execution failures. Always contained at the worker boundary:
/// callers receive this as a value and convert it into that worker's
/// `Failure` outcome, never a fault that reaches sibling workers.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("failed to connect: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("query failed: {0}")]
    Query(#[source] sqlx::Error),

    #[error("query timed out after {0}s")]
    Timeout(u64),
}
