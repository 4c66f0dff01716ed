//! Per-orientation run counters.
//!
//! Each counter walks one orientation and returns how many length-4 runs
//! it found, stopping as soon as the running count reaches
//! [`REQUIRED_SEQUENCES`]. The counting contract differs by orientation:
//! a row or column contributes at most one run (the scan breaks to the
//! next line after a match), while a diagonal line may contribute up to
//! two, because the walker jumps four cells past a match and keeps going.
//! Overlapping runs never double-count in either scheme.

use crate::dna::DnaMatrix;

use super::{REQUIRED_SEQUENCES, SEQUENCE_LENGTH};

/// Count rows containing a run, capped at [`REQUIRED_SEQUENCES`].
pub(crate) fn count_horizontal(dna: &DnaMatrix) -> usize {
    let n = dna.size();
    let mut count = 0;
    for row in 0..n {
        let bytes = dna.row_bytes(row);
        for col in 0..=(n - SEQUENCE_LENGTH) {
            if has_row_run(bytes, col) {
                count += 1;
                if count >= REQUIRED_SEQUENCES {
                    return count;
                }
                break;
            }
        }
    }
    count
}

/// Count columns containing a run, capped at [`REQUIRED_SEQUENCES`].
pub(crate) fn count_vertical(dna: &DnaMatrix) -> usize {
    let n = dna.size();
    let mut count = 0;
    for col in 0..n {
        for row in 0..=(n - SEQUENCE_LENGTH) {
            if has_column_run(dna, row, col) {
                count += 1;
                if count >= REQUIRED_SEQUENCES {
                    return count;
                }
                break;
            }
        }
    }
    count
}

/// Count runs on down-right diagonals, capped at [`REQUIRED_SEQUENCES`].
///
/// Start positions cover every diagonal long enough to hold a run: the top
/// row from column 0 through N-4, then the left column from row 1 through
/// row N-4.
pub(crate) fn count_diagonal_tlbr(dna: &DnaMatrix) -> usize {
    let n = dna.size();
    let mut count = 0;
    for col in 0..=(n - SEQUENCE_LENGTH) {
        count += walk_tlbr(dna, 0, col);
        if count >= REQUIRED_SEQUENCES {
            return count;
        }
    }
    for row in 1..=(n - SEQUENCE_LENGTH) {
        count += walk_tlbr(dna, row, 0);
        if count >= REQUIRED_SEQUENCES {
            return count;
        }
    }
    count
}

/// Count runs on down-left diagonals, capped at [`REQUIRED_SEQUENCES`].
///
/// Start positions: the top row from column 3 through N-1, then the right
/// column from row 1 through row N-4.
pub(crate) fn count_diagonal_trbl(dna: &DnaMatrix) -> usize {
    let n = dna.size();
    let mut count = 0;
    for col in (SEQUENCE_LENGTH - 1)..n {
        count += walk_trbl(dna, 0, col);
        if count >= REQUIRED_SEQUENCES {
            return count;
        }
    }
    for row in 1..=(n - SEQUENCE_LENGTH) {
        count += walk_trbl(dna, row, n - 1);
        if count >= REQUIRED_SEQUENCES {
            return count;
        }
    }
    count
}

/// Walk one down-right diagonal from (r0, c0), counting disjoint runs.
///
/// On a match the offset advances by the run length, so overlapping runs
/// count once and two disjoint runs on the same diagonal count twice.
fn walk_tlbr(dna: &DnaMatrix, r0: usize, c0: usize) -> usize {
    let n = dna.size();
    let start = r0.max(c0);
    if start + SEQUENCE_LENGTH > n {
        return 0;
    }
    let max_off = n - SEQUENCE_LENGTH - start;
    let mut count = 0;
    let mut off = 0;
    while off <= max_off {
        if has_tlbr_run(dna, r0 + off, c0 + off) {
            count += 1;
            if count >= REQUIRED_SEQUENCES {
                return count;
            }
            off += SEQUENCE_LENGTH;
        } else {
            off += 1;
        }
    }
    count
}

/// Walk one down-left diagonal from (r0, c0), counting disjoint runs.
fn walk_trbl(dna: &DnaMatrix, r0: usize, c0: usize) -> usize {
    let n = dna.size();
    if r0 + SEQUENCE_LENGTH > n || c0 + 1 < SEQUENCE_LENGTH {
        return 0;
    }
    // the walk is bounded by the bottom edge and the left edge
    let max_off = (n - SEQUENCE_LENGTH - r0).min(c0 - (SEQUENCE_LENGTH - 1));
    let mut count = 0;
    let mut off = 0;
    while off <= max_off {
        if has_trbl_run(dna, r0 + off, c0 - off) {
            count += 1;
            if count >= REQUIRED_SEQUENCES {
                return count;
            }
            off += SEQUENCE_LENGTH;
        } else {
            off += 1;
        }
    }
    count
}

fn has_row_run(bytes: &[u8], start: usize) -> bool {
    let base = bytes[start];
    (1..SEQUENCE_LENGTH).all(|i| bytes[start + i] == base)
}

fn has_column_run(dna: &DnaMatrix, row: usize, col: usize) -> bool {
    let base = dna.base(row, col);
    (1..SEQUENCE_LENGTH).all(|i| dna.base(row + i, col) == base)
}

fn has_tlbr_run(dna: &DnaMatrix, row: usize, col: usize) -> bool {
    let base = dna.base(row, col);
    (1..SEQUENCE_LENGTH).all(|i| dna.base(row + i, col + i) == base)
}

fn has_trbl_run(dna: &DnaMatrix, row: usize, col: usize) -> bool {
    let base = dna.base(row, col);
    (1..SEQUENCE_LENGTH).all(|i| dna.base(row + i, col - i) == base)
}
