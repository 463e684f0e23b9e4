//! Shape compatibility checks for algebra operations
//!
//! Pure mathematical validation shared by every storage engine, so the
//! engines cannot drift apart on when an operand pair is acceptable.

use crate::{MatrixError, Result};

/// Validate operand shapes for entrywise addition.
///
/// Both logical shapes must be identical; the result shares them.
pub fn validate_add_shapes(left: (usize, usize), right: (usize, usize)) -> Result<()> {
    if left != right {
        return Err(MatrixError::ShapeMismatch);
    }
    Ok(())
}

/// Validate operand shapes for matrix multiplication.
///
/// Requires `left.cols == right.rows` and returns the result shape
/// `(left.rows, right.cols)`.
pub fn validate_matmul_shapes(
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(usize, usize)> {
    if left.1 != right.0 {
        return Err(MatrixError::ShapeMismatch);
    }
    Ok((left.0, right.1))
}
