//! DNA grid validation.
//!
//! Checks run in a fixed order and the first violated rule is the one
//! reported: shape first (empty, then every row's length against the row
//! count, then the minimum size), then a separate character-set pass over
//! the rows. Callers and tests rely on this ordering; reordering the checks
//! changes which error a malformed grid reports.

/// Minimum grid dimension. A smaller grid cannot hold a length-4 run.
pub const MIN_SIZE: usize = 4;

/// Validation failures for a DNA grid.
///
/// A failure is terminal for the call: it is surfaced to the caller as-is,
/// never retried and never coerced into a "not mutant" answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DnaError {
    /// The grid itself was absent in the transport payload.
    #[error("DNA sequence cannot be null")]
    NullDna,

    /// The grid has zero rows.
    #[error("DNA sequence cannot be empty")]
    EmptyDna,

    /// A row entry was absent in the transport payload.
    #[error("DNA row {row} cannot be null")]
    NullRow { row: usize },

    /// A row's length differs from the number of rows.
    #[error("DNA matrix must be NxN (square): row {row} has length {actual}, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// The grid is square but smaller than [`MIN_SIZE`].
    #[error("DNA matrix must be at least 4x4 to detect sequences, got {size}x{size}")]
    TooSmall { size: usize },

    /// A row contains a character outside the nucleotide alphabet.
    #[error("invalid character '{found}' in row {row}: only A, T, C, G are allowed")]
    InvalidCharacter { row: usize, found: char },
}

/// Validate the shape and alphabet of a grid given as row strings.
///
/// The shape pass completes over all rows before the character-set pass
/// starts; within each pass the first offending row in row order determines
/// the reported index. Purely functional, no state is kept between calls.
pub fn validate(rows: &[String]) -> Result<(), DnaError> {
    if rows.is_empty() {
        return Err(DnaError::EmptyDna);
    }
    let n = rows.len();
    for (row, value) in rows.iter().enumerate() {
        let actual = value.chars().count();
        if actual != n {
            return Err(DnaError::NotSquare {
                row,
                expected: n,
                actual,
            });
        }
    }
    if n < MIN_SIZE {
        return Err(DnaError::TooSmall { size: n });
    }
    for (row, value) in rows.iter().enumerate() {
        if let Some(found) = value.chars().find(|c| !is_base(*c)) {
            return Err(DnaError::InvalidCharacter { row, found });
        }
    }
    Ok(())
}

/// True for the four uppercase nucleotide characters. Case-sensitive:
/// lowercase bases are invalid.
pub fn is_base(c: char) -> bool {
    matches!(c, 'A' | 'T' | 'C' | 'G')
}
