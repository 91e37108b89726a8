pub mod events;
pub mod run;
pub mod types;

pub use events::WorkerEvent;
pub use run::run;
pub use types::{RunSummary, WorkerOutcome};
