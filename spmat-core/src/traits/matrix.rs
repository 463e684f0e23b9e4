//! Core matrix abstraction traits
//!
//! This module defines the operation set every storage engine must
//! satisfy. The three engines implement it independently; callers such as
//! benchmarks and comparison tooling depend only on these traits, never on
//! a specific engine's internals.

#[cfg(feature = "alloc")]
use alloc::boxed::Box;

use super::element::MatrixElement;
use crate::Result;

/// Read-only access contract shared by every storage engine
pub trait SparseAccess {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Logical shape as (rows, cols), accounting for transposition
    fn shape(&self) -> (usize, usize);

    /// Number of explicitly stored nonzero entries
    fn nnz(&self) -> usize;

    /// Value at a logical coordinate
    ///
    /// Returns zero for any coordinate never explicitly set. Fails with
    /// `OutOfBounds` when the coordinate falls outside the logical shape.
    fn access(&self, row: usize, col: usize) -> Result<Self::Element>;
}

/// Full algebra contract, implemented once per engine (requires alloc)
///
/// Every operation returns a freshly constructed matrix in untransposed
/// orientation; operands are never mutated. The three engines must agree
/// pointwise, within floating-point tolerance, on the outcome of `add` and
/// `matmul` for identical logical content.
#[cfg(feature = "alloc")]
pub trait MatrixAlgebra: SparseAccess + Sized {
    /// Construct an empty matrix
    ///
    /// Fails with `InvalidShape` if either dimension is zero.
    fn with_shape(rows: usize, cols: usize) -> Result<Self>;

    /// Insert or update the value at a logical coordinate
    ///
    /// Zero is a valid value meaning "ensure absent": for sparse engines it
    /// removes an existing entry and is a no-op on an absent one. Fails
    /// with `OutOfBounds` like `access`.
    fn insert(&mut self, row: usize, col: usize, value: Self::Element) -> Result<()>;

    /// Flip the logical orientation in O(1) without touching stored data
    ///
    /// Applying it twice restores the original logical view.
    fn transpose(&mut self);

    /// Entrywise sum
    ///
    /// Fails with `ShapeMismatch` unless both logical shapes are
    /// identical. Entries whose sum is exactly zero are absent from sparse
    /// results.
    fn add(&self, other: &Self) -> Result<Self>;

    /// Multiply every entry by a scalar
    ///
    /// Scaling by exactly zero yields an all-zero (empty, for sparse
    /// engines) result.
    fn scale(&self, factor: Self::Element) -> Self;

    /// Matrix product
    ///
    /// Fails with `ShapeMismatch` unless `self.cols == other.rows` in
    /// logical space; the result shape is `(self.rows, other.cols)`.
    /// Transposed operands are handled by the logical mapping alone.
    fn matmul(&self, other: &Self) -> Result<Self>;

    /// Lazily enumerate stored (row, col, value) triplets in logical
    /// orientation
    ///
    /// Ascending base-key order for the tree engine,
    /// unspecified-but-consistent order for the hash and dense engines.
    fn triplets(&self) -> Box<dyn Iterator<Item = (usize, usize, Self::Element)> + '_>;

    /// Build a matrix from nonzero triplets in logical coordinates
    fn from_triplets<I>(rows: usize, cols: usize, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, Self::Element)>,
    {
        let mut out = Self::with_shape(rows, cols)?;
        for (row, col, value) in triplets {
            out.insert(row, col, value)?;
        }
        Ok(out)
    }
}
