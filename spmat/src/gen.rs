//! Random triplet generation for benchmarks and verification

use hashbrown::HashSet;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate unique nonzero triplets at a target density.
///
/// Draws coordinates uniformly until `floor(rows * cols * density)`
/// distinct cells are filled (capped at the full grid), with values
/// uniform in [-1, 1). A draw of exactly zero is replaced with 0.5 so the
/// requested density is actually met. Deterministic for a given seed.
pub fn random_triplets(
    rows: usize,
    cols: usize,
    density: f64,
    seed: u64,
) -> Vec<(usize, usize, f64)> {
    let target = (((rows * cols) as f64 * density) as usize).min(rows * cols);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(target);
    while out.len() < target {
        let row = rng.gen_range(0..rows);
        let col = rng.gen_range(0..cols);
        if !seen.insert((row, col)) {
            continue;
        }
        let mut value: f64 = rng.gen_range(-1.0..1.0);
        if value == 0.0 {
            value = 0.5;
        }
        out.push((row, col, value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_for_seed() {
        assert_eq!(random_triplets(20, 20, 0.1, 7), random_triplets(20, 20, 0.1, 7));
        assert_ne!(random_triplets(20, 20, 0.1, 7), random_triplets(20, 20, 0.1, 8));
    }

    #[test]
    fn test_density_and_uniqueness() {
        let triplets = random_triplets(30, 40, 0.05, 1);
        assert_eq!(triplets.len(), 60);

        let mut coords: Vec<(usize, usize)> =
            triplets.iter().map(|&(row, col, _)| (row, col)).collect();
        coords.sort_unstable();
        coords.dedup();
        assert_eq!(coords.len(), 60);

        assert!(triplets.iter().all(|&(row, col, value)| {
            row < 30 && col < 40 && value != 0.0 && (-1.0..1.0).contains(&value)
        }));
    }

    #[test]
    fn test_density_capped_at_full_grid() {
        let triplets = random_triplets(3, 3, 2.0, 1);
        assert_eq!(triplets.len(), 9);
    }
}
