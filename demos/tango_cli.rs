//! Tango tree CLI driver: reads a test file, builds a tree over
//! `0..M`, issues `N` queries, and reports timing.
//!
//! File format: first line `N` (query count, 0 < N <= 100000), second
//! line `M` (universe size, 0 < M <= 10^6), then `N` lines each one
//! decimal query key. Queries outside `0..M` are accepted and expected
//! to come back "not found."

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tangotree::{build, Tree};

const MAX_QUERIES: u64 = 100_000;
const MAX_UNIVERSE: i64 = 1_000_000;

#[derive(Parser)]
#[command(about = "Run a tango tree query file and report timing")]
struct Cli {
    /// Path to a test file (N, M, then N query keys, one per line).
    file: PathBuf,
}

fn run(path: &PathBuf) -> Result<(), String> {
    let contents = fs::read_to_string(path).map_err(|e| format!("cannot read {path:?}: {e}"))?;
    let mut lines = contents.lines();

    let n: u64 = lines
        .next()
        .ok_or("missing query count line")?
        .trim()
        .parse()
        .map_err(|_| "query count is not an integer".to_string())?;
    if n == 0 || n > MAX_QUERIES {
        return Err(format!("query count {n} out of range (0, {MAX_QUERIES}]"));
    }

    let m: i64 = lines
        .next()
        .ok_or("missing universe size line")?
        .trim()
        .parse()
        .map_err(|_| "universe size is not an integer".to_string())?;
    if m <= 0 || m > MAX_UNIVERSE {
        return Err(format!("universe size {m} out of range (0, {MAX_UNIVERSE}]"));
    }

    let mut tree: Tree<i64, ()> = build(0..m).map_err(|e| e.to_string())?;

    let total_start = Instant::now();
    let mut total_query_secs = 0.0;
    let mut issued = 0u64;
    for (i, line) in lines.enumerate() {
        if issued >= n {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let val: i64 = match line.parse() {
            Ok(v) => v,
            Err(_) => {
                eprintln!("line {}: {line:?} is not an integer, skipping", i + 3);
                continue;
            }
        };

        let query_start = Instant::now();
        let found = tree.search(&val);
        total_query_secs += query_start.elapsed().as_secs_f64();
        issued += 1;

        let expected = if (0..m).contains(&val) { Some(val) } else { None };
        if found != expected {
            eprintln!("MISMATCH: query {val} returned {found:?}, expected {expected:?}");
        }
    }

    let total_secs = total_start.elapsed().as_secs_f64();
    println!("Total time: {total_secs:.6}s");
    println!(
        "Average time per query: {:.9}s",
        if issued > 0 { total_query_secs / issued as f64 } else { 0.0 }
    );
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli.file) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
