//! Mutant classification.
//!
//! A grid is mutant when the four orientation scans together count at
//! least two length-4 runs of an identical base: horizontal, vertical,
//! down-right diagonal and down-left diagonal. The orientations run in
//! that fixed order and stop as soon as the running total reaches the
//! threshold, so a second horizontal run means the diagonals are never
//! visited. How runs are counted within a line differs by orientation
//! and is part of the contract; the rules live with the scanners.
//!
//! Classification is pure: it takes a validated [`DnaMatrix`] by shared
//! reference, keeps no state and performs no I/O.

mod scan;

use crate::dna::DnaMatrix;

/// Length of a run, in cells.
pub const SEQUENCE_LENGTH: usize = 4;

/// How many runs, across all orientations, make a grid mutant.
pub const REQUIRED_SEQUENCES: usize = 2;

/// Classify a validated grid. True means mutant.
pub fn is_mutant(dna: &DnaMatrix) -> bool {
    let mut found = scan::count_horizontal(dna);
    if found >= REQUIRED_SEQUENCES {
        return true;
    }
    found += scan::count_vertical(dna);
    if found >= REQUIRED_SEQUENCES {
        return true;
    }
    found += scan::count_diagonal_tlbr(dna);
    if found >= REQUIRED_SEQUENCES {
        return true;
    }
    found += scan::count_diagonal_trbl(dna);
    found >= REQUIRED_SEQUENCES
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn grid(rows: &[&str]) -> DnaMatrix {
        DnaMatrix::new(rows.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_mutant_with_two_horizontal_runs() {
        let dna = grid(&["AAAA", "TTTT", "CCGG", "GGCC"]);
        assert!(is_mutant(&dna));
    }

    #[test]
    fn test_mutant_with_two_vertical_runs() {
        let dna = grid(&["ATGC", "ATGC", "ATGC", "ATGC"]);
        assert!(is_mutant(&dna));
    }

    #[test]
    fn test_mutant_with_horizontal_and_vertical_runs() {
        let dna = grid(&["AAAAG", "CTGCT", "CTGCA", "CTGCT", "CTGCG"]);
        assert!(is_mutant(&dna));
    }

    #[test]
    fn test_mutant_with_mixed_orientations() {
        let dna = grid(&["ATGCGA", "CAGTGC", "TTATGT", "AGAAGG", "CCCCTA", "TCACTG"]);
        assert!(is_mutant(&dna));
    }

    #[test]
    fn test_mutant_with_horizontal_and_diagonal_runs() {
        let dna = grid(&["ACCCC", "CATGG", "GCATG", "GGCAT", "GGGCA"]);
        assert!(is_mutant(&dna));
    }

    #[test]
    fn test_mutant_with_down_left_diagonal() {
        let dna = grid(&["CCCCA", "TGTAT", "GTAAT", "TAGCT", "GTGCT"]);
        assert!(is_mutant(&dna));
    }

    #[test]
    fn test_mutant_with_interior_diagonal() {
        let dna = grid(&["TGCAGT", "CACGTC", "TTACGT", "AGTAGA", "CCCCAA", "TCACTA"]);
        assert!(is_mutant(&dna));
    }

    #[test]
    fn test_mutant_with_adjacent_horizontal_rows() {
        let dna = grid(&["AAAA", "AAAA", "TGCA", "GTCA"]);
        assert!(is_mutant(&dna));
    }

    #[test]
    fn test_mutant_on_larger_grid() {
        let dna = grid(&[
            "ATGCGAATGC",
            "CAGTGCCAGT",
            "TTATGTAAAT",
            "AGAAGGATGC",
            "CCCCTACCCC",
            "TCACTGTCAC",
            "ATGCGAATGC",
            "CAGTGCCAGT",
            "TTATGTTTAT",
            "AGAAGGATGC",
        ]);
        assert!(is_mutant(&dna));
    }

    #[test]
    fn test_mutant_from_a_single_diagonal() {
        // both runs sit on the same down-right diagonal
        let dna = grid(&[
            "AAGAGAGA",
            "CACTCTCT",
            "GAAAGAGA",
            "CTCACTCT",
            "GAGACAGA",
            "CTCTCCCT",
            "GAGAGACA",
            "CTCTCTCC",
        ]);
        assert!(is_mutant(&dna));
    }

    #[test]
    fn test_mutant_from_a_single_anti_diagonal() {
        let dna = grid(&[
            "GAGAGAGA",
            "CTCTCTAT",
            "GAGAGAGA",
            "CTCTATCT",
            "GAGCGAGA",
            "CTCTCTCT",
            "GCGAGAGA",
            "CTCTCTCT",
        ]);
        assert!(is_mutant(&dna));
    }

    #[test]
    fn test_uniform_grid_is_mutant_at_every_size() {
        for n in 4..=8 {
            let rows: Vec<String> = (0..n).map(|_| "G".repeat(n)).collect();
            let dna = DnaMatrix::new(rows).unwrap();
            assert!(is_mutant(&dna), "uniform {}x{} grid", n, n);
        }
    }

    #[test]
    fn test_minimum_size_all_same_is_mutant() {
        let dna = grid(&["AAAA", "AAAA", "AAAA", "AAAA"]);
        assert!(is_mutant(&dna));
    }

    #[test]
    fn test_human_with_no_runs() {
        let dna = grid(&["ATGCGA", "CAGTGC", "TTATTT", "AGACGG", "GCGTCA", "TCACTG"]);
        assert!(!is_mutant(&dna));
    }

    #[test]
    fn test_human_with_one_horizontal_run() {
        let dna = grid(&["AAAA", "CTGC", "TGCA", "GTCA"]);
        assert!(!is_mutant(&dna));
    }

    #[test]
    fn test_human_with_one_diagonal_run() {
        let dna = grid(&["AAAG", "CTGC", "TGCA", "GTCA"]);
        assert!(!is_mutant(&dna));
    }

    #[test]
    fn test_human_despite_two_runs_in_one_row() {
        // row 0 holds two disjoint runs but a row counts once, and no
        // other orientation has a run anywhere
        let dna = grid(&[
            "AAAACAAAA",
            "CTCTCTCTC",
            "GAGAGAGAG",
            "CTCTCTCTC",
            "GAGAGAGAG",
            "CTCTCTCTC",
            "GAGAGAGAG",
            "CTCTCTCTC",
            "GAGAGAGAG",
        ]);
        assert!(!is_mutant(&dna));
    }

    #[test]
    fn test_classification_is_idempotent() {
        let dna = grid(&["ATGCGA", "CAGTGC", "TTATGT", "AGAAGG", "CCCCTA", "TCACTG"]);
        let first = is_mutant(&dna);
        let second = is_mutant(&dna);
        assert_eq!(first, second);
        assert!(first);
    }

    #[test]
    fn test_random_grids_classify_without_panic() {
        let mut rng = StdRng::seed_from_u64(2024);
        for n in 4..=12 {
            let dna = DnaMatrix::random(n, &mut rng);
            let verdict = is_mutant(&dna);
            assert_eq!(verdict, is_mutant(&dna));
            println!("{} -> {}", dna.summary(), verdict);
        }
    }
}
