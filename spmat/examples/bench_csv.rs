//! Wall-clock engine comparison
//!
//! Times add, scale, and matmul on each engine over one shared random
//! matrix pair, keeping the best of N repetitions per case, and writes
//! one record per case as CSV (default) or JSON.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Instant;

use clap::Parser;
use serde::Serialize;
use spmat::{random_triplets, DenseMatrix, HashMatrix, MatrixAlgebra, TreeMatrix};

#[derive(Parser)]
#[command(about = "Time add/scale/matmul per engine and write CSV or JSON records")]
struct Cli {
    /// Square matrix dimension
    #[arg(long, default_value_t = 200)]
    n: usize,

    /// Fraction of cells that are nonzero
    #[arg(long, default_value_t = 0.02)]
    density: f64,

    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Repetitions per case; the best time is kept
    #[arg(long, default_value_t = 3)]
    repeat: usize,

    #[arg(long, default_value = "results.csv")]
    out: String,

    /// Output format
    #[arg(long, default_value = "csv", value_parser = ["csv", "json"])]
    format: String,
}

#[derive(Serialize)]
struct BenchRecord {
    case: String,
    ms: f64,
}

fn best_of(repeat: usize, mut op: impl FnMut()) -> f64 {
    let mut best = f64::INFINITY;
    for _ in 0..repeat.max(1) {
        let start = Instant::now();
        op();
        best = best.min(start.elapsed().as_secs_f64() * 1000.0);
    }
    best
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let left = random_triplets(cli.n, cli.n, cli.density, cli.seed);
    let right = random_triplets(cli.n, cli.n, cli.density, cli.seed + 1);

    let hash_a =
        HashMatrix::from_triplets(cli.n, cli.n, left.iter().copied()).expect("triplets in range");
    let hash_b =
        HashMatrix::from_triplets(cli.n, cli.n, right.iter().copied()).expect("triplets in range");
    let tree_a =
        TreeMatrix::from_triplets(cli.n, cli.n, left.iter().copied()).expect("triplets in range");
    let tree_b =
        TreeMatrix::from_triplets(cli.n, cli.n, right.iter().copied()).expect("triplets in range");
    let dense_a =
        DenseMatrix::from_triplets(cli.n, cli.n, left.iter().copied()).expect("triplets in range");
    let dense_b =
        DenseMatrix::from_triplets(cli.n, cli.n, right.iter().copied()).expect("triplets in range");

    let mut records = Vec::new();
    let mut record = |case: &str, ms: f64| {
        println!("{case:<16} {ms:>10.3} ms");
        records.push(BenchRecord {
            case: case.to_string(),
            ms,
        });
    };

    record("add:hash", best_of(cli.repeat, || {
        let _ = hash_a.add(&hash_b);
    }));
    record("add:tree", best_of(cli.repeat, || {
        let _ = tree_a.add(&tree_b);
    }));
    record("add:dense", best_of(cli.repeat, || {
        let _ = dense_a.add(&dense_b);
    }));

    record("scale:hash", best_of(cli.repeat, || {
        let _ = hash_a.scale(2.0);
    }));
    record("scale:tree", best_of(cli.repeat, || {
        let _ = tree_a.scale(2.0);
    }));
    record("scale:dense", best_of(cli.repeat, || {
        let _ = dense_a.scale(2.0);
    }));

    record("matmul:hash", best_of(cli.repeat, || {
        let _ = hash_a.matmul(&hash_b);
    }));
    record("matmul:tree", best_of(cli.repeat, || {
        let _ = tree_a.matmul(&tree_b);
    }));
    // The dense triple loop dominates the run; one repetition is enough
    record("matmul:dense", best_of(1, || {
        let _ = dense_a.matmul(&dense_b);
    }));

    let mut out = BufWriter::new(File::create(&cli.out)?);
    if cli.format == "json" {
        serde_json::to_writer_pretty(&mut out, &records)?;
        out.write_all(b"\n")?;
    } else {
        writeln!(out, "case,ms")?;
        for record in &records {
            writeln!(out, "{},{:.3}", record.case, record.ms)?;
        }
    }
    println!("Saved {}", cli.out);
    Ok(())
}
