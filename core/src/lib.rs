//! Core engine for sqlswarm: worker fan-out, query execution, and result
//! aggregation.
//!
//! The CLI hands this crate a ready [`RunConfig`] and a [`QueryExecutor`]
//! capability; argument parsing, file reading, and rendering live in the
//! `sqlswarm-cli` crate. Per-worker progress is surfaced as a stream of
//! [`WorkerEvent`]s so core never writes to the console itself.

pub mod config;
pub mod error;
pub mod executor;
pub mod runner;

pub use config::RunConfig;
pub use error::{ConfigError, ExecutionError};
pub use executor::{MySqlExecutor, QueryExecutor};
pub use runner::{run, RunSummary, WorkerEvent, WorkerOutcome};
