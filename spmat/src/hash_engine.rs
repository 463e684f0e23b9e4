//! Hash-of-hashes storage engine
//!
//! Maps a base row index to a column-to-value map. Average O(1) point
//! access and insert with no ordering guarantee; the baseline sparse
//! engine the tree engine is measured against.

use hashbrown::HashMap;
use spmat_core::{validation, Layout, MatrixAlgebra, MatrixElement, Result, SparseAccess};

/// Sparse matrix backed by nested hash maps
///
/// No entry with value exactly zero is ever stored: inserting zero removes
/// an existing entry, and inner maps left empty are dropped with it.
#[derive(Debug, Clone)]
pub struct HashMatrix<T: MatrixElement> {
    layout: Layout,
    data: HashMap<usize, HashMap<usize, T>>,
    nnz: usize,
}

impl<T: MatrixElement> HashMatrix<T> {
    /// Value at a base coordinate, zero when absent.
    fn get_base(&self, row: usize, col: usize) -> T {
        self.data
            .get(&row)
            .and_then(|cols| cols.get(&col))
            .copied()
            .unwrap_or_else(T::zero)
    }

    /// Insert, overwrite, or remove at a base coordinate, maintaining the
    /// sparsity invariant and the nnz counter.
    fn set_base(&mut self, row: usize, col: usize, value: T) {
        if value.is_zero() {
            if let Some(cols) = self.data.get_mut(&row) {
                if cols.remove(&col).is_some() {
                    self.nnz -= 1;
                }
                if cols.is_empty() {
                    self.data.remove(&row);
                }
            }
            return;
        }
        if self.data.entry(row).or_default().insert(col, value).is_none() {
            self.nnz += 1;
        }
    }

    /// Entries (col, value) of a logical row.
    ///
    /// An untransposed matrix answers this with a single map lookup; a
    /// transposed matrix cannot index by base column and falls back to
    /// scanning the full enumeration, which is linear in nnz but
    /// correctness-preserving.
    pub fn row_entries(&self, row: usize) -> Box<dyn Iterator<Item = (usize, T)> + '_> {
        if self.layout.is_transposed() {
            Box::new(
                self.triplets()
                    .filter(move |&(r, _, _)| r == row)
                    .map(|(_, col, value)| (col, value)),
            )
        } else {
            match self.data.get(&row) {
                Some(cols) => Box::new(cols.iter().map(|(&col, &value)| (col, value))),
                None => Box::new(core::iter::empty()),
            }
        }
    }
}

impl<T: MatrixElement> SparseAccess for HashMatrix<T> {
    type Element = T;

    fn shape(&self) -> (usize, usize) {
        self.layout.logical_shape()
    }

    fn nnz(&self) -> usize {
        self.nnz
    }

    fn access(&self, row: usize, col: usize) -> Result<T> {
        let (base_row, base_col) = self.layout.to_base(row, col)?;
        Ok(self.get_base(base_row, base_col))
    }
}

impl<T: MatrixElement> MatrixAlgebra for HashMatrix<T> {
    fn with_shape(rows: usize, cols: usize) -> Result<Self> {
        Ok(Self {
            layout: Layout::new(rows, cols)?,
            data: HashMap::new(),
            nnz: 0,
        })
    }

    fn insert(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let (base_row, base_col) = self.layout.to_base(row, col)?;
        self.set_base(base_row, base_col, value);
        Ok(())
    }

    fn transpose(&mut self) {
        self.layout.toggle_transposed();
    }

    fn add(&self, other: &Self) -> Result<Self> {
        validation::validate_add_shapes(self.shape(), other.shape())?;
        let (rows, cols) = self.shape();
        let mut out = Self::with_shape(rows, cols)?;
        for (row, col, value) in self.triplets() {
            out.set_base(row, col, value);
        }
        for (row, col, value) in other.triplets() {
            let sum = out.get_base(row, col) + value;
            out.set_base(row, col, sum);
        }
        Ok(out)
    }

    fn scale(&self, factor: T) -> Self {
        let mut out = Self {
            layout: self.layout.result_layout(),
            data: HashMap::new(),
            nnz: 0,
        };
        for (row, col, value) in self.triplets() {
            out.set_base(row, col, value * factor);
        }
        out
    }

    fn matmul(&self, other: &Self) -> Result<Self> {
        let (rows, cols) = validation::validate_matmul_shapes(self.shape(), other.shape())?;
        let mut out = Self::with_shape(rows, cols)?;
        for (row, inner, left_value) in self.triplets() {
            for (col, right_value) in other.row_entries(inner) {
                let sum = out.get_base(row, col) + left_value * right_value;
                out.set_base(row, col, sum);
            }
        }
        Ok(out)
    }

    fn triplets(&self) -> Box<dyn Iterator<Item = (usize, usize, T)> + '_> {
        let layout = self.layout;
        Box::new(self.data.iter().flat_map(move |(&row, cols)| {
            cols.iter().map(move |(&col, &value)| {
                let (logical_row, logical_col) = layout.to_logical(row, col);
                (logical_row, logical_col, value)
            })
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spmat_core::MatrixError;

    #[test]
    fn test_insert_then_access() {
        let mut matrix: HashMatrix<f64> = HashMatrix::with_shape(3, 3).unwrap();
        matrix.insert(0, 2, 7.5).unwrap();
        assert_eq!(matrix.access(0, 2).unwrap(), 7.5);
        assert_eq!(matrix.access(2, 0).unwrap(), 0.0);
        assert_eq!(matrix.nnz(), 1);
    }

    #[test]
    fn test_insert_zero_removes_entry_and_empty_row() {
        let mut matrix: HashMatrix<f64> = HashMatrix::with_shape(3, 3).unwrap();
        matrix.insert(1, 1, 2.0).unwrap();
        matrix.insert(1, 1, 0.0).unwrap();
        assert_eq!(matrix.nnz(), 0);
        assert!(matrix.data.is_empty());

        // Zero at an absent key is a no-op
        matrix.insert(2, 2, 0.0).unwrap();
        assert_eq!(matrix.nnz(), 0);
    }

    #[test]
    fn test_construction_rejects_zero_dimensions() {
        assert!(matches!(
            HashMatrix::<f64>::with_shape(0, 1),
            Err(MatrixError::InvalidShape)
        ));
        assert!(matches!(
            HashMatrix::<f64>::with_shape(1, 0),
            Err(MatrixError::InvalidShape)
        ));
    }

    #[test]
    fn test_out_of_bounds_one_past_the_end() {
        let mut matrix: HashMatrix<f64> = HashMatrix::with_shape(2, 3).unwrap();
        assert_eq!(matrix.access(2, 0), Err(MatrixError::OutOfBounds));
        assert_eq!(matrix.access(0, 3), Err(MatrixError::OutOfBounds));
        assert_eq!(matrix.insert(2, 0, 1.0), Err(MatrixError::OutOfBounds));
    }

    #[test]
    fn test_transpose_is_involution() {
        let mut matrix: HashMatrix<f64> = HashMatrix::with_shape(2, 4).unwrap();
        matrix.insert(0, 3, 1.5).unwrap();

        matrix.transpose();
        assert_eq!(matrix.shape(), (4, 2));
        assert_eq!(matrix.access(3, 0).unwrap(), 1.5);
        assert_eq!(matrix.access(0, 3), Err(MatrixError::OutOfBounds));

        matrix.transpose();
        assert_eq!(matrix.shape(), (2, 4));
        assert_eq!(matrix.access(0, 3).unwrap(), 1.5);
    }

    #[test]
    fn test_add_drops_cancelled_entries() {
        let a = HashMatrix::from_triplets(2, 2, [(0, 0, 3.0), (0, 1, 1.0)]).unwrap();
        let b = HashMatrix::from_triplets(2, 2, [(0, 0, -3.0), (1, 1, 2.0)]).unwrap();
        let sum = a.add(&b).unwrap();
        assert_eq!(sum.nnz(), 2);
        assert_eq!(sum.access(0, 0).unwrap(), 0.0);
        assert_eq!(sum.access(0, 1).unwrap(), 1.0);
        assert_eq!(sum.access(1, 1).unwrap(), 2.0);
    }

    #[test]
    fn test_add_tolerates_transposed_operand() {
        let a = HashMatrix::from_triplets(2, 3, [(0, 1, 1.0), (1, 2, 2.0)]).unwrap();
        let mut b = HashMatrix::from_triplets(3, 2, [(1, 0, 10.0), (2, 1, 20.0)]).unwrap();
        b.transpose();

        let sum = a.add(&b).unwrap();
        assert_eq!(sum.shape(), (2, 3));
        assert_eq!(sum.access(0, 1).unwrap(), 11.0);
        assert_eq!(sum.access(1, 2).unwrap(), 22.0);
    }

    #[test]
    fn test_scale_by_zero_empties() {
        let matrix = HashMatrix::from_triplets(2, 2, [(0, 0, 1.0), (1, 1, 2.0)]).unwrap();
        let scaled = matrix.scale(0.0);
        assert_eq!(scaled.nnz(), 0);
        assert_eq!(scaled.triplets().count(), 0);
    }

    #[test]
    fn test_matmul_skips_missing_rows() {
        // Column 2 of a has no matching row in b; it contributes nothing
        let a = HashMatrix::from_triplets(2, 3, [(0, 0, 2.0), (1, 2, 5.0)]).unwrap();
        let b = HashMatrix::from_triplets(3, 2, [(0, 1, 4.0)]).unwrap();
        let product = a.matmul(&b).unwrap();
        assert_eq!(product.shape(), (2, 2));
        assert_eq!(product.access(0, 1).unwrap(), 8.0);
        assert_eq!(product.nnz(), 1);
    }

    #[test]
    fn test_matmul_shape_mismatch() {
        let a: HashMatrix<f64> = HashMatrix::with_shape(2, 3).unwrap();
        let b: HashMatrix<f64> = HashMatrix::with_shape(2, 3).unwrap();
        assert_eq!(a.matmul(&b).unwrap_err(), MatrixError::ShapeMismatch);
    }

    #[test]
    fn test_nnz_tracks_inserts_and_overwrites() {
        let mut matrix: HashMatrix<f64> = HashMatrix::with_shape(4, 4).unwrap();
        matrix.insert(0, 0, 1.0).unwrap();
        matrix.insert(0, 0, 2.0).unwrap();
        matrix.insert(1, 0, 3.0).unwrap();
        assert_eq!(matrix.nnz(), 2);
        matrix.insert(1, 0, 0.0).unwrap();
        assert_eq!(matrix.nnz(), 1);
    }
}
