use std::time::Duration;

use futures::TryStreamExt;
use sqlx::{Connection, MySqlConnection};

use crate::error::ExecutionError;
use crate::executor::QueryExecutor;

use async_trait::async_trait;

/// sqlx-backed executor speaking the MySQL wire protocol.
///
/// Opens a fresh connection per call (no pool) so each worker's load is a
/// full connect+execute+drain cycle, mirroring what an independent client
/// would do.
pub struct MySqlExecutor {
    connection_url: String,
    timeout_secs: u64,
}

impl MySqlExecutor {
    pub fn new(connection_url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            connection_url: connection_url.into(),
            timeout_secs,
        }
    }
}

#[async_trait]
impl QueryExecutor for MySqlExecutor {
    async fn execute(&self, sql: &str) -> Result<u64, ExecutionError> {
        let deadline = Duration::from_secs(self.timeout_secs);
        match tokio::time::timeout(deadline, execute_once(&self.connection_url, sql)).await {
            Ok(result) => result,
            Err(_) => Err(ExecutionError::Timeout(self.timeout_secs)),
        }
    }
}

/// One connect+execute+drain cycle. The connection is dropped (closed) on
/// every exit path, including errors and a fired timeout on the caller side.
async fn execute_once(connection_url: &str, sql: &str) -> Result<u64, ExecutionError> {
    let mut conn = MySqlConnection::connect(connection_url)
        .await
        .map_err(ExecutionError::Connect)?;

    let mut row_count: u64 = 0;
    {
        let mut rows = sqlx::query(sql).fetch(&mut conn);
        // Drain the cursor to completion; row contents are never inspected.
        while rows
            .try_next()
            .await
            .map_err(ExecutionError::Query)?
            .is_some()
        {
            row_count += 1;
        }
    }

    if let Err(e) = conn.close().await {
        tracing::debug!(target: "sqlswarm.executor", error = %e, "connection close failed");
    }

    Ok(row_count)
}
