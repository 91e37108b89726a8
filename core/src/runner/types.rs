use std::time::Duration;

/// The single result a worker produces at the end of its execution.
/// Created exactly once per worker, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerOutcome {
    Success { rows: u64 },
    Failure { message: String },
}

impl WorkerOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, WorkerOutcome::Failure { .. })
    }
}

/// Aggregate of every worker's outcome, available only after the join
/// barrier. Outcomes are sorted by worker id for stable reporting;
/// completion order carries no meaning.
#[derive(Debug)]
pub struct RunSummary {
    pub outcomes: Vec<(u32, WorkerOutcome)>,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_failure()).count()
    }

    pub fn succeeded(&self) -> usize {
        self.total() - self.failed()
    }

    pub fn total_rows(&self) -> u64 {
        self.outcomes
            .iter()
            .map(|(_, o)| match o {
                WorkerOutcome::Success { rows } => *rows,
                WorkerOutcome::Failure { .. } => 0,
            })
            .sum()
    }
}
