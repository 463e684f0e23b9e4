//! Dense row-major storage engine
//!
//! A fixed-size contiguous buffer with every cell addressable in constant
//! time. The algebra walks the full index space with no sparsity
//! exploitation, which makes this engine the correctness oracle and
//! worst-case baseline for the sparse engines rather than a contender.

use spmat_core::{validation, Layout, MatrixAlgebra, MatrixElement, Result, SparseAccess};

/// Matrix backed by one contiguous row-major buffer
///
/// The buffer is allocated zeroed at construction and never grows or
/// shrinks afterwards; "absent" cells simply hold zero.
#[derive(Debug, Clone)]
pub struct DenseMatrix<T: MatrixElement> {
    layout: Layout,
    buf: Vec<T>,
}

impl<T: MatrixElement> DenseMatrix<T> {
    /// Buffer index of a base coordinate.
    fn index(&self, base_row: usize, base_col: usize) -> usize {
        let (_, base_cols) = self.layout.base_shape();
        base_row * base_cols + base_col
    }

    /// Value at a logical coordinate known to be in bounds.
    fn at_logical(&self, row: usize, col: usize) -> T {
        let (base_row, base_col) = if self.layout.is_transposed() {
            (col, row)
        } else {
            (row, col)
        };
        self.buf[self.index(base_row, base_col)]
    }
}

impl<T: MatrixElement> SparseAccess for DenseMatrix<T> {
    type Element = T;

    fn shape(&self) -> (usize, usize) {
        self.layout.logical_shape()
    }

    fn nnz(&self) -> usize {
        self.buf.iter().filter(|value| !value.is_zero()).count()
    }

    fn access(&self, row: usize, col: usize) -> Result<T> {
        let (base_row, base_col) = self.layout.to_base(row, col)?;
        Ok(self.buf[self.index(base_row, base_col)])
    }
}

impl<T: MatrixElement> MatrixAlgebra for DenseMatrix<T> {
    fn with_shape(rows: usize, cols: usize) -> Result<Self> {
        let layout = Layout::new(rows, cols)?;
        Ok(Self {
            layout,
            buf: vec![T::zero(); rows * cols],
        })
    }

    fn insert(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let (base_row, base_col) = self.layout.to_base(row, col)?;
        let index = self.index(base_row, base_col);
        self.buf[index] = value;
        Ok(())
    }

    fn transpose(&mut self) {
        self.layout.toggle_transposed();
    }

    fn add(&self, other: &Self) -> Result<Self> {
        validation::validate_add_shapes(self.shape(), other.shape())?;
        let (rows, cols) = self.shape();
        let mut out = Self::with_shape(rows, cols)?;
        for row in 0..rows {
            for col in 0..cols {
                out.buf[row * cols + col] =
                    self.at_logical(row, col) + other.at_logical(row, col);
            }
        }
        Ok(out)
    }

    fn scale(&self, factor: T) -> Self {
        let layout = self.layout.result_layout();
        let (rows, cols) = layout.logical_shape();
        let mut out = Self {
            layout,
            buf: vec![T::zero(); rows * cols],
        };
        for row in 0..rows {
            for col in 0..cols {
                out.buf[row * cols + col] = self.at_logical(row, col) * factor;
            }
        }
        out
    }

    fn matmul(&self, other: &Self) -> Result<Self> {
        let (rows, cols) = validation::validate_matmul_shapes(self.shape(), other.shape())?;
        let (_, inner) = self.shape();
        let mut out = Self::with_shape(rows, cols)?;
        for row in 0..rows {
            for t in 0..inner {
                let left_value = self.at_logical(row, t);
                for col in 0..cols {
                    let index = row * cols + col;
                    out.buf[index] = out.buf[index] + left_value * other.at_logical(t, col);
                }
            }
        }
        Ok(out)
    }

    fn triplets(&self) -> Box<dyn Iterator<Item = (usize, usize, T)> + '_> {
        let (rows, cols) = self.shape();
        Box::new(
            (0..rows)
                .flat_map(move |row| {
                    (0..cols).map(move |col| (row, col, self.at_logical(row, col)))
                })
                .filter(|(_, _, value)| !value.is_zero()),
        )
    }
}
