//! Validated DNA grid carrier.
//!
//! [`DnaMatrix`] is the proof that validation already ran: every instance
//! is square, at least 4x4 and drawn from the nucleotide alphabet, because
//! every construction path (including serde) goes through the validator.
//! Downstream code takes `&DnaMatrix` and never re-checks shape or charset.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::fingerprint;
use super::validator::{self, DnaError, MIN_SIZE};

/// The nucleotide alphabet as bytes, in the order used by the generator.
pub const BASES: [u8; 4] = [b'A', b'T', b'C', b'G'];

/// A validated NxN nucleotide grid.
///
/// Rows are stored as the original strings; since the alphabet is ASCII,
/// byte indexing and character indexing coincide and scans work on
/// [`row_bytes`](Self::row_bytes) without allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct DnaMatrix {
    rows: Vec<String>,
}

impl DnaMatrix {
    /// Build a matrix from row strings, running the full validation.
    pub fn new(rows: Vec<String>) -> Result<Self, DnaError> {
        validator::validate(&rows)?;
        Ok(Self { rows })
    }

    /// Build a matrix from a transport payload where the grid or any row
    /// may be absent.
    ///
    /// This is the only path that reports [`DnaError::NullDna`] and
    /// [`DnaError::NullRow`]. Rows are checked in order, absence before
    /// length, so a null row 1 is reported even when row 2 has the wrong
    /// length.
    pub fn from_raw(raw: Option<Vec<Option<String>>>) -> Result<Self, DnaError> {
        let raw = raw.ok_or(DnaError::NullDna)?;
        if raw.is_empty() {
            return Err(DnaError::EmptyDna);
        }
        let n = raw.len();
        for (row, value) in raw.iter().enumerate() {
            match value {
                None => return Err(DnaError::NullRow { row }),
                Some(value) => {
                    let actual = value.chars().count();
                    if actual != n {
                        return Err(DnaError::NotSquare {
                            row,
                            expected: n,
                            actual,
                        });
                    }
                }
            }
        }
        Self::new(raw.into_iter().flatten().collect())
    }

    /// Generate a uniformly random n x n grid over [`BASES`].
    ///
    /// Panics if `n` is below the minimum size, since the result could not
    /// be a valid matrix.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        assert!(n >= MIN_SIZE, "random grid must be at least {0}x{0}", MIN_SIZE);
        let rows = (0..n)
            .map(|_| {
                (0..n)
                    .map(|_| BASES[rng.gen_range(0..BASES.len())] as char)
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Grid dimension N.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// The rows as validated strings.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Consume the matrix and return its rows.
    pub fn into_rows(self) -> Vec<String> {
        self.rows
    }

    /// Row `row` as bytes, for index-based scanning.
    pub fn row_bytes(&self, row: usize) -> &[u8] {
        self.rows[row].as_bytes()
    }

    /// The base at (row, col) as a byte. Panics when out of bounds.
    pub fn base(&self, row: usize, col: usize) -> u8 {
        self.rows[row].as_bytes()[col]
    }

    /// SHA-256 fingerprint of the rows, see [`fingerprint::of_rows`].
    pub fn fingerprint(&self) -> String {
        fingerprint::of_rows(&self.rows)
    }

    /// One-line description for logs: dimension plus truncated fingerprint.
    pub fn summary(&self) -> String {
        let fp = self.fingerprint();
        format!("DnaMatrix {0}x{0} | {1}", self.size(), &fp[..16])
    }
}

impl TryFrom<Vec<String>> for DnaMatrix {
    type Error = DnaError;

    fn try_from(rows: Vec<String>) -> Result<Self, DnaError> {
        Self::new(rows)
    }
}

impl From<DnaMatrix> for Vec<String> {
    fn from(matrix: DnaMatrix) -> Self {
        matrix.rows
    }
}
