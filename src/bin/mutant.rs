//! mutant CLI
//!
//! Commands:
//!   mutant check       - classify a DNA grid from a file or stdin
//!   mutant fingerprint - print the SHA-256 fingerprint of a grid
//!   mutant random      - generate a random grid and classify it
//!   mutant demo        - run a guided tour of the toolkit

use mutant_core::dna::{fingerprint, MIN_SIZE};
use mutant_core::{is_mutant, DnaMatrix, DnaStats};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

fn print_usage() {
    println!(
        r#"
╔══════════════════════════════════════════════════════════════╗
║        mutant v0.1 - DNA screening toolkit                   ║
║        four-orientation sequence detection                   ║
╚══════════════════════════════════════════════════════════════╝

Usage: mutant <command> [options]

Commands:
  check       <file|->    Classify a grid (exit 0 mutant, 1 human, 2 invalid)
  fingerprint <file|->    Print the SHA-256 fingerprint of a grid
  random      [n] [seed]  Generate a random n x n grid and classify it
  demo                    Run a guided tour of the toolkit
  help                    Show this help

Input formats for check and fingerprint ('-' reads stdin):
  JSON object   {{"dna": ["ATGCGA", ...]}}
  JSON array    ["ATGCGA", ...]
  Plain text    one row per line

Examples:
  echo '{{"dna":["ATGCGA","CAGTGC","TTATGT","AGAAGG","CCCCTA","TCACTG"]}}' | mutant check -
  mutant fingerprint grid.json
  mutant random 8 42
  mutant demo
"#
    );
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "check" => cmd_check(&args[2..]),
        "fingerprint" => cmd_fingerprint(&args[2..]),
        "random" => cmd_random(&args[2..]),
        "demo" => cmd_demo(),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            process::exit(2);
        }
    }
}

/// Payload shape for JSON object input. The grid and every row are
/// optional so absent values surface as validation errors instead of
/// parse errors.
#[derive(serde::Deserialize)]
struct DnaRequest {
    #[serde(default)]
    dna: Option<Vec<Option<String>>>,
}

fn read_input(source: &str) -> io::Result<String> {
    if source == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        fs::read_to_string(source)
    }
}

/// Parse any accepted payload shape into a validated matrix.
fn parse_payload(text: &str) -> Result<DnaMatrix, String> {
    let trimmed = text.trim_start();
    if trimmed.starts_with('{') {
        let request: DnaRequest =
            serde_json::from_str(text).map_err(|e| format!("invalid JSON object: {}", e))?;
        DnaMatrix::from_raw(request.dna).map_err(|e| e.to_string())
    } else if trimmed.starts_with('[') {
        let rows: Vec<Option<String>> =
            serde_json::from_str(text).map_err(|e| format!("invalid JSON array: {}", e))?;
        DnaMatrix::from_raw(Some(rows)).map_err(|e| e.to_string())
    } else {
        let rows: Vec<String> = text
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();
        DnaMatrix::new(rows).map_err(|e| e.to_string())
    }
}

/// Extract raw rows without validating them. Fingerprints are defined on
/// raw rows so malformed submissions can still be keyed.
fn extract_rows(text: &str) -> Result<Vec<String>, String> {
    let trimmed = text.trim_start();
    if trimmed.starts_with('{') {
        let request: DnaRequest =
            serde_json::from_str(text).map_err(|e| format!("invalid JSON object: {}", e))?;
        let raw = request.dna.ok_or_else(|| "payload has no dna rows".to_string())?;
        raw.into_iter()
            .enumerate()
            .map(|(i, row)| row.ok_or_else(|| format!("DNA row {} cannot be null", i)))
            .collect()
    } else if trimmed.starts_with('[') {
        serde_json::from_str(text).map_err(|e| format!("invalid JSON array: {}", e))
    } else {
        Ok(text
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect())
    }
}

fn cmd_check(args: &[String]) {
    let source = match args.first() {
        Some(s) => s.as_str(),
        None => {
            eprintln!("Usage: mutant check <file|->");
            process::exit(2);
        }
    };

    let text = match read_input(source) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("  Failed to read '{}': {}", source, e);
            process::exit(2);
        }
    };

    let dna = match parse_payload(&text) {
        Ok(dna) => dna,
        Err(e) => {
            eprintln!("  Rejected: {}", e);
            process::exit(2);
        }
    };

    if is_mutant(&dna) {
        println!("  {} | verdict: MUTANT", dna.summary());
    } else {
        println!("  {} | verdict: HUMAN", dna.summary());
        process::exit(1);
    }
}

fn cmd_fingerprint(args: &[String]) {
    let source = match args.first() {
        Some(s) => s.as_str(),
        None => {
            eprintln!("Usage: mutant fingerprint <file|->");
            process::exit(2);
        }
    };

    let text = match read_input(source) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("  Failed to read '{}': {}", source, e);
            process::exit(2);
        }
    };

    let rows = match extract_rows(&text) {
        Ok(rows) => rows,
        Err(e) => {
            eprintln!("  Rejected: {}", e);
            process::exit(2);
        }
    };

    println!("  Rows:    {}", rows.len());
    println!("  Joined:  {}", fingerprint::join_rows(&rows));
    println!("  SHA-256: {}", fingerprint::of_rows(&rows));
}

fn cmd_random(args: &[String]) {
    let n: usize = args.first().and_then(|s| s.parse().ok()).unwrap_or(6);
    if n < MIN_SIZE {
        eprintln!("  Grid must be at least {0}x{0}", MIN_SIZE);
        process::exit(2);
    }

    let dna = match args.get(1).and_then(|s| s.parse::<u64>().ok()) {
        Some(seed) => DnaMatrix::random(n, &mut StdRng::seed_from_u64(seed)),
        None => DnaMatrix::random(n, &mut rand::thread_rng()),
    };

    for row in dna.rows() {
        println!("  {}", row);
    }
    println!();
    let verdict = if is_mutant(&dna) { "MUTANT" } else { "HUMAN" };
    println!("  {} | verdict: {}", dna.summary(), verdict);
}

fn cmd_demo() {
    println!(
        r#"
╔══════════════════════════════════════════════════════════════╗
║              mutant demo - full screening run                ║
╚══════════════════════════════════════════════════════════════╝
"#
    );

    let mut stats = DnaStats::new();

    println!("Step 1: Classifying the sample grids...");
    println!("{}", "-".repeat(60));

    let known: [(&str, &[&str]); 2] = [
        (
            "mutant",
            &["ATGCGA", "CAGTGC", "TTATGT", "AGAAGG", "CCCCTA", "TCACTG"],
        ),
        (
            "human",
            &["ATGCGA", "CAGTGC", "TTATTT", "AGACGG", "GCGTCA", "TCACTG"],
        ),
    ];
    for (label, rows) in known {
        let dna = DnaMatrix::new(rows.iter().map(|s| s.to_string()).collect()).unwrap();
        let verdict = is_mutant(&dna);
        stats.record(verdict);
        println!(
            "  {} grid | {} | verdict: {}",
            label,
            dna.summary(),
            if verdict { "MUTANT" } else { "HUMAN" }
        );
    }

    println!("\nStep 2: Rejecting malformed payloads...");
    println!("{}", "-".repeat(60));

    let malformed = [
        r#"{"dna": null}"#,
        r#"{"dna": ["ATGC", null, "GCTA", "CATG"]}"#,
        r#"["ATGCGA", "CAGTGC", "TTATGT"]"#,
        r#"["ATG", "CAG", "TTA"]"#,
        r#"["ATGC", "TGXA", "GCTA", "CATG"]"#,
    ];
    for payload in malformed {
        match parse_payload(payload) {
            Ok(_) => println!("  accepted: {}", payload),
            Err(e) => println!("  rejected: {}", e),
        }
    }

    println!("\nStep 3: Screening random grids...");
    println!("{}", "-".repeat(60));

    let mut rng = rand::thread_rng();
    for _ in 0..10 {
        let dna = DnaMatrix::random(6, &mut rng);
        let verdict = is_mutant(&dna);
        stats.record(verdict);
        println!(
            "  {} | verdict: {}",
            dna.summary(),
            if verdict { "MUTANT" } else { "HUMAN" }
        );
    }

    println!("\nStep 4: Fingerprinting for deduplication...");
    println!("{}", "-".repeat(60));

    let original: Vec<String> = ["ATGC", "TGCA", "GCTA", "CATG"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let resubmitted = original.clone();
    let mut flipped = original.clone();
    flipped[3] = "CATC".to_string();
    println!("  original:    {}", fingerprint::of_rows(&original));
    println!("  resubmitted: {}", fingerprint::of_rows(&resubmitted));
    println!("  flipped:     {}", fingerprint::of_rows(&flipped));
    println!(
        "  resubmission detected: {}",
        fingerprint::of_rows(&original) == fingerprint::of_rows(&resubmitted)
    );

    println!("\nStep 5: Final tally...");
    println!("{}", "-".repeat(60));
    println!("  {}", stats.summary());
    match serde_json::to_string_pretty(&stats.report()) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("  Failed to render report: {}", e),
    }

    println!(
        r#"
╔══════════════════════════════════════════════════════════════╗
║              mutant demo complete                            ║
║                                                              ║
║  - Classified the sample mutant and human grids              ║
║  - Rejected malformed payloads with precise errors           ║
║  - Screened random grids and tallied the verdicts            ║
║  - Fingerprinted grids for stable deduplication              ║
║                                                              ║
║  Run 'mutant check -' to classify your own grid.             ║
║  Run 'mutant random 10' to generate and classify one.        ║
╚══════════════════════════════════════════════════════════════╝
"#
    );
}
