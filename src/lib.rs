//! Mutant DNA screening.
//!
//! Validates NxN nucleotide grids and classifies them as mutant or human
//! by searching four orientations for repeated-base sequences. Grids are
//! carried as [`DnaMatrix`], which cannot exist unvalidated; the verdict
//! tally lives in [`DnaStats`].

pub mod detector;
pub mod dna;
pub mod stats;

pub use detector::{is_mutant, REQUIRED_SEQUENCES, SEQUENCE_LENGTH};
pub use dna::{DnaError, DnaMatrix};
pub use stats::{DnaStats, StatsReport};
