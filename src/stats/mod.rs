//! Running tally of classification verdicts.
//!
//! [`DnaStats`] accumulates how many grids classified mutant and how many
//! human, and derives the mutant ratio on demand. The tally is plain data;
//! callers that share it across threads wrap it in their own lock.

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

/// Verdict counters plus the time of the last update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnaStats {
    count_mutant_dna: u64,
    count_human_dna: u64,
    last_updated_at: Option<DateTime<Utc>>,
}

/// Snapshot of the tally in wire form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsReport {
    pub count_mutant_dna: u64,
    pub count_human_dna: u64,
    pub ratio: f64,
}

impl DnaStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one verdict.
    pub fn record(&mut self, mutant: bool) {
        if mutant {
            self.increment_mutant();
        } else {
            self.increment_human();
        }
    }

    pub fn increment_mutant(&mut self) {
        self.count_mutant_dna += 1;
        self.touch();
        debug!("mutant count is now {}", self.count_mutant_dna);
    }

    pub fn increment_human(&mut self) {
        self.count_human_dna += 1;
        self.touch();
        debug!("human count is now {}", self.count_human_dna);
    }

    fn touch(&mut self) {
        self.last_updated_at = Some(Utc::now());
    }

    pub fn count_mutant(&self) -> u64 {
        self.count_mutant_dna
    }

    pub fn count_human(&self) -> u64 {
        self.count_human_dna
    }

    /// Total verdicts recorded.
    pub fn total(&self) -> u64 {
        self.count_mutant_dna + self.count_human_dna
    }

    /// Mutants over total verdicts. Zero when nothing was recorded yet,
    /// not a division error.
    pub fn ratio(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count_mutant_dna as f64 / total as f64
    }

    pub fn last_updated_at(&self) -> Option<DateTime<Utc>> {
        self.last_updated_at
    }

    /// Snapshot for the wire.
    pub fn report(&self) -> StatsReport {
        StatsReport {
            count_mutant_dna: self.count_mutant_dna,
            count_human_dna: self.count_human_dna,
            ratio: self.ratio(),
        }
    }

    /// One-line description for logs.
    pub fn summary(&self) -> String {
        format!(
            "DnaStats | mutant {} | human {} | ratio {:.4}",
            self.count_mutant_dna,
            self.count_human_dna,
            self.ratio()
        )
    }
}
