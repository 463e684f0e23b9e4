//! Logical/base coordinate mapping
//!
//! A `Layout` carries the base dimensions of a backing store together with
//! the transpose flag. Transposition never reorders or copies stored data;
//! it only flips the flag, and every public coordinate is translated here
//! before the store is touched.

use crate::{MatrixError, Result};

/// Shape and orientation of a matrix backing store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    rows: usize,
    cols: usize,
    transposed: bool,
}

impl Layout {
    /// Create an untransposed layout for a `rows x cols` store.
    ///
    /// Fails with `InvalidShape` if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidShape);
        }
        Ok(Self {
            rows,
            cols,
            transposed: false,
        })
    }

    /// Dimensions of the backing store, ignoring orientation
    pub fn base_shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Shape as seen by callers: `(cols, rows)` when transposed
    pub fn logical_shape(&self) -> (usize, usize) {
        if self.transposed {
            (self.cols, self.rows)
        } else {
            (self.rows, self.cols)
        }
    }

    pub fn is_transposed(&self) -> bool {
        self.transposed
    }

    /// Flip the logical orientation in O(1)
    pub fn toggle_transposed(&mut self) {
        self.transposed = !self.transposed;
    }

    /// Untransposed layout with this layout's logical shape.
    ///
    /// Every algebra operation builds its result with this layout, so
    /// results start in base orientation regardless of operand orientation.
    pub fn result_layout(&self) -> Layout {
        let (rows, cols) = self.logical_shape();
        Layout {
            rows,
            cols,
            transposed: false,
        }
    }

    /// Bounds-check a logical coordinate and map it to base orientation.
    ///
    /// Fails with `OutOfBounds` when `row` or `col` falls outside the
    /// logical shape.
    pub fn to_base(&self, row: usize, col: usize) -> Result<(usize, usize)> {
        let (logical_rows, logical_cols) = self.logical_shape();
        if row >= logical_rows || col >= logical_cols {
            return Err(MatrixError::OutOfBounds);
        }
        Ok(if self.transposed {
            (col, row)
        } else {
            (row, col)
        })
    }

    /// Map a stored base coordinate back to logical orientation
    pub fn to_logical(&self, row: usize, col: usize) -> (usize, usize) {
        if self.transposed {
            (col, row)
        } else {
            (row, col)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_dimensions() {
        assert_eq!(Layout::new(0, 3), Err(MatrixError::InvalidShape));
        assert_eq!(Layout::new(3, 0), Err(MatrixError::InvalidShape));
        assert_eq!(Layout::new(0, 0), Err(MatrixError::InvalidShape));
        assert!(Layout::new(1, 1).is_ok());
    }

    #[test]
    fn test_transpose_swaps_logical_shape_only() {
        let mut layout = Layout::new(2, 5).unwrap();
        assert_eq!(layout.logical_shape(), (2, 5));

        layout.toggle_transposed();
        assert_eq!(layout.logical_shape(), (5, 2));
        assert_eq!(layout.base_shape(), (2, 5));

        layout.toggle_transposed();
        assert_eq!(layout.logical_shape(), (2, 5));
        assert!(!layout.is_transposed());
    }

    #[test]
    fn test_to_base_maps_through_orientation() {
        let mut layout = Layout::new(2, 5).unwrap();
        assert_eq!(layout.to_base(1, 4), Ok((1, 4)));
        assert_eq!(layout.to_base(2, 0), Err(MatrixError::OutOfBounds));
        assert_eq!(layout.to_base(0, 5), Err(MatrixError::OutOfBounds));

        layout.toggle_transposed();
        assert_eq!(layout.to_base(4, 1), Ok((1, 4)));
        assert_eq!(layout.to_base(5, 0), Err(MatrixError::OutOfBounds));
        assert_eq!(layout.to_base(0, 2), Err(MatrixError::OutOfBounds));
    }

    #[test]
    fn test_logical_roundtrip() {
        let mut layout = Layout::new(3, 4).unwrap();
        layout.toggle_transposed();
        let (base_row, base_col) = layout.to_base(3, 2).unwrap();
        assert_eq!(layout.to_logical(base_row, base_col), (3, 2));
    }

    #[test]
    fn test_result_layout_is_untransposed_logical() {
        let mut layout = Layout::new(3, 4).unwrap();
        layout.toggle_transposed();
        let result = layout.result_layout();
        assert_eq!(result.logical_shape(), (4, 3));
        assert!(!result.is_transposed());
    }
}
