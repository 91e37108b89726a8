mod mysql;

pub use mysql::MySqlExecutor;

use async_trait::async_trait;

use crate::error::ExecutionError;

/// Capability for executing one SQL statement and reporting how many rows
/// it produced.
///
/// Implementations are stateless per call: each `execute` owns its own
/// connection for the duration of the call and releases it on every exit
/// path. Errors come back as values; an implementation must not panic
/// across this boundary.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute(&self, sql: &str) -> Result<u64, ExecutionError>;
}
