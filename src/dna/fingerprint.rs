//! Stable fingerprints for DNA grids.
//!
//! A fingerprint is the lowercase hex SHA-256 of the rows joined with a
//! `|` separator. The joined form is unambiguous because `|` is not a
//! nucleotide, so two different grids never collide on the joined string
//! itself. Fingerprints are computed on the raw rows, before validation,
//! so malformed submissions can still be keyed and deduplicated.

use sha2::{Digest, Sha256};

/// Separator between rows in the joined text form.
pub const SEPARATOR: &str = "|";

/// Fingerprint of a grid given as row strings.
///
/// Streams the rows through the hasher; equivalent to hashing
/// [`join_rows`] of the same input.
pub fn of_rows(rows: &[String]) -> String {
    let mut hasher = Sha256::new();
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            hasher.update(SEPARATOR.as_bytes());
        }
        hasher.update(row.as_bytes());
    }
    hex::encode(hasher.finalize())
}

/// Join rows into the canonical single-string form, e.g. `"ATGC|TGCA"`.
pub fn join_rows(rows: &[String]) -> String {
    rows.join(SEPARATOR)
}

/// Split a joined string back into rows. Inverse of [`join_rows`].
pub fn split_rows(joined: &str) -> Vec<String> {
    joined.split(SEPARATOR).map(|s| s.to_string()).collect()
}
