//! Cross-engine agreement check
//!
//! Generates one random triplet set per operand, loads it into all three
//! engines, and verifies that add, scale, matmul, and the transpose
//! involution agree pointwise within tolerance. Exits nonzero on
//! disagreement.

use std::process::ExitCode;

use clap::Parser;
use spmat::{
    max_abs_diff, random_triplets, DenseMatrix, HashMatrix, MatrixAlgebra, Result, SparseAccess,
    TreeMatrix,
};

#[derive(Parser)]
#[command(about = "Verify that the hash, tree, and dense engines agree pointwise")]
struct Cli {
    /// Square matrix dimension
    #[arg(long, default_value_t = 40)]
    n: usize,

    /// Fraction of cells that are nonzero
    #[arg(long, default_value_t = 0.05)]
    density: f64,

    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Maximum tolerated pointwise difference
    #[arg(long, default_value_t = 1e-9)]
    tolerance: f64,
}

struct Engines {
    hash: HashMatrix<f64>,
    tree: TreeMatrix<f64>,
    dense: DenseMatrix<f64>,
}

impl Engines {
    fn from_triplets(n: usize, triplets: &[(usize, usize, f64)]) -> Result<Self> {
        Ok(Self {
            hash: HashMatrix::from_triplets(n, n, triplets.iter().copied())?,
            tree: TreeMatrix::from_triplets(n, n, triplets.iter().copied())?,
            dense: DenseMatrix::from_triplets(n, n, triplets.iter().copied())?,
        })
    }
}

fn run(cli: &Cli) -> Result<f64> {
    let left = random_triplets(cli.n, cli.n, cli.density, cli.seed);
    let right = random_triplets(cli.n, cli.n, cli.density, cli.seed + 1);
    let a = Engines::from_triplets(cli.n, left.as_slice())?;
    let b = Engines::from_triplets(cli.n, right.as_slice())?;

    let mut worst = 0.0f64;
    let mut check = |label: &str, diff: f64| {
        println!("{label:<24} max |diff| = {diff:.3e}");
        if diff > worst {
            worst = diff;
        }
    };

    let sum_hash = a.hash.add(&b.hash)?;
    let sum_tree = a.tree.add(&b.tree)?;
    let sum_dense = a.dense.add(&b.dense)?;
    check("add hash/tree", max_abs_diff(&sum_hash, &sum_tree)?);
    check("add tree/dense", max_abs_diff(&sum_tree, &sum_dense)?);

    let scaled_hash = a.hash.scale(2.0);
    let scaled_tree = a.tree.scale(2.0);
    let scaled_dense = a.dense.scale(2.0);
    check("scale hash/tree", max_abs_diff(&scaled_hash, &scaled_tree)?);
    check("scale tree/dense", max_abs_diff(&scaled_tree, &scaled_dense)?);

    let product_hash = a.hash.matmul(&b.hash)?;
    let product_tree = a.tree.matmul(&b.tree)?;
    let product_dense = a.dense.matmul(&b.dense)?;
    check("matmul hash/tree", max_abs_diff(&product_hash, &product_tree)?);
    check("matmul tree/dense", max_abs_diff(&product_tree, &product_dense)?);

    let mut round_trip = a.tree.clone();
    round_trip.transpose();
    round_trip.transpose();
    check("transpose involution", max_abs_diff(&round_trip, &a.tree)?);

    println!(
        "\n{} entries per operand, worst disagreement {worst:.3e}",
        a.tree.nnz()
    );
    Ok(worst)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(worst) if worst <= cli.tolerance => {
            println!("Engines agree within {:.1e}", cli.tolerance);
            ExitCode::SUCCESS
        }
        Ok(_) => {
            eprintln!("Engines disagree beyond {:.1e}", cli.tolerance);
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("verification failed: {err}");
            ExitCode::FAILURE
        }
    }
}
