//! Pointwise comparison between engines
//!
//! The three engines must agree, within floating-point tolerance, on the
//! outcome of add and matmul for identical logical content. This module
//! provides the measurement, and its tests are where that cross-engine
//! agreement is enforced.

use spmat_core::{validation, MatrixElement, Result, SparseAccess};

/// Maximum absolute pointwise difference between two matrices, in f64.
///
/// The operands may use different engines and element types; they only
/// need identical logical shapes, otherwise `ShapeMismatch` is returned.
pub fn max_abs_diff<A, B>(a: &A, b: &B) -> Result<f64>
where
    A: SparseAccess,
    B: SparseAccess,
{
    validation::validate_add_shapes(a.shape(), b.shape())?;
    let (rows, cols) = a.shape();
    let mut max = 0.0f64;
    for row in 0..rows {
        for col in 0..cols {
            let left = a.access(row, col)?.to_f64();
            let right = b.access(row, col)?.to_f64();
            let diff = (left - right).abs();
            if diff > max {
                max = diff;
            }
        }
    }
    Ok(max)
}
