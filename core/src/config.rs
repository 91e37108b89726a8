use crate::error::ConfigError;

/// Immutable description of one load run, built once by the CLI layer.
///
/// Shared read-only across workers; nothing in here is mutated after
/// construction, so workers need no locking to read it.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Database URL the executor connects with (one fresh connection per
    /// worker invocation).
    pub connection_url: String,
    /// The SQL statement every worker executes exactly once.
    pub sql: String,
    /// Number of concurrent workers. Must be at least 1; zero is a
    /// configuration error, not an empty run.
    pub thread_count: u32,
    /// Stagger step in milliseconds: worker `i` (1-indexed) waits
    /// `delay_ms * i` before starting. 0 means all workers start together.
    pub delay_ms: u64,
    /// Per-worker query timeout in seconds. Bounds one worker's
    /// connect+execute+drain only; there is no run-level timeout.
    pub timeout_secs: u64,
}

impl RunConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.thread_count < 1 {
            return Err(ConfigError::InvalidThreadCount(self.thread_count));
        }
        if self.timeout_secs < 1 {
            return Err(ConfigError::InvalidTimeout(self.timeout_secs));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(thread_count: u32, timeout_secs: u64) -> RunConfig {
        RunConfig {
            connection_url: "mysql://root@localhost:3306/test".to_string(),
            sql: "SELECT 1".to_string(),
            thread_count,
            delay_ms: 0,
            timeout_secs,
        }
    }

    #[test]
    fn accepts_single_worker() {
        assert!(config(1, 30).validate().is_ok());
    }

    #[test]
    fn rejects_zero_workers() {
        assert!(matches!(
            config(0, 30).validate(),
            Err(ConfigError::InvalidThreadCount(0))
        ));
    }

    #[test]
    fn rejects_zero_timeout() {
        assert!(matches!(
            config(4, 0).validate(),
            Err(ConfigError::InvalidTimeout(0))
        ));
    }
}
