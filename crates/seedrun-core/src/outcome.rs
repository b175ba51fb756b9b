//! Per-file execution outcomes and the run summary.

use crate::discover::SeedFile;

/// Result of executing one seed file.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub file: SeedFile,
    /// Statements that executed without error.
    pub executed: usize,
    /// Statements whose remote call raised an error.
    pub errors: usize,
    /// Set when the file could not be read at all.
    pub read_error: Option<String>,
}

impl FileOutcome {
    pub fn read_failure(file: SeedFile, error: String) -> Self {
        Self { file, executed: 0, errors: 0, read_error: Some(error) }
    }

    /// A file succeeds iff it was readable and no statement errored.
    /// A file with zero statements counts as succeeded.
    pub fn is_success(&self) -> bool {
        self.read_error.is_none() && self.errors == 0
    }
}

/// Aggregate of a whole run, in execution order.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<FileOutcome>,
}

impl RunSummary {
    pub fn record(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn succeeded(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| o.is_success())
    }

    pub fn failed(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn succeeded_count(&self) -> usize {
        self.succeeded().count()
    }

    pub fn failed_count(&self) -> usize {
        self.failed().count()
    }

    /// Success-rate heuristic for the closing message: optimistic when
    /// strictly more than 80% of discovered files succeeded.
    pub fn is_healthy(&self, total_discovered: usize) -> bool {
        self.succeeded_count() as f64 > total_discovered as f64 * 0.8
    }
}
