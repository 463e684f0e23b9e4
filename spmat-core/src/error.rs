//! Error types for matrix operations

/// Errors that can occur during matrix construction and algebra
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Zero rows or columns at construction
    InvalidShape,
    /// Logical coordinate outside the matrix shape
    OutOfBounds,
    /// Operand shapes incompatible for add or matmul
    ShapeMismatch,
    /// Binary operation across different engine kinds
    UnsupportedOperand,
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            MatrixError::InvalidShape => "Matrix dimensions must be positive",
            MatrixError::OutOfBounds => "Coordinate out of bounds",
            MatrixError::ShapeMismatch => "Operand shapes are incompatible",
            MatrixError::UnsupportedOperand => "Operand engine kinds differ",
        };
        write!(f, "{msg}")
    }
}

/// Result type for matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;
