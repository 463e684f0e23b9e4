//! Runtime-selected matrix engine
//!
//! Callers that pick a storage strategy at runtime (the REPL, the file
//! loader) work through this enum, which delegates the full operation set
//! to the concrete engine by match.

use core::fmt;
use core::str::FromStr;

use spmat_core::{MatrixAlgebra, MatrixError, Result, SparseAccess};

use crate::{DenseMatrix, HashMatrix, TreeMatrix};

/// Storage strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    Hash,
    Tree,
    Dense,
}

impl EngineKind {
    pub const ALL: [EngineKind; 3] = [EngineKind::Hash, EngineKind::Tree, EngineKind::Dense];

    pub fn name(self) -> &'static str {
        match self {
            EngineKind::Hash => "hash",
            EngineKind::Tree => "tree",
            EngineKind::Dense => "dense",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EngineKind {
    type Err = String;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s {
            "hash" => Ok(EngineKind::Hash),
            "tree" => Ok(EngineKind::Tree),
            "dense" => Ok(EngineKind::Dense),
            other => Err(format!("unknown engine '{other}' (expected hash, tree, or dense)")),
        }
    }
}

/// Matrix whose storage engine is chosen at runtime
///
/// Element type is fixed to f64, the common currency of the loaders and
/// drivers. Binary operations require both operands to use the same
/// engine; mixing kinds fails with `UnsupportedOperand`.
#[derive(Debug, Clone)]
pub enum AnyMatrix {
    Hash(HashMatrix<f64>),
    Tree(TreeMatrix<f64>),
    Dense(DenseMatrix<f64>),
}

impl AnyMatrix {
    /// Construct an empty matrix of the requested engine
    pub fn with_shape(kind: EngineKind, rows: usize, cols: usize) -> Result<Self> {
        Ok(match kind {
            EngineKind::Hash => AnyMatrix::Hash(HashMatrix::with_shape(rows, cols)?),
            EngineKind::Tree => AnyMatrix::Tree(TreeMatrix::with_shape(rows, cols)?),
            EngineKind::Dense => AnyMatrix::Dense(DenseMatrix::with_shape(rows, cols)?),
        })
    }

    /// Build a matrix of the requested engine from nonzero triplets
    pub fn from_triplets<I>(kind: EngineKind, rows: usize, cols: usize, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, f64)>,
    {
        let mut out = Self::with_shape(kind, rows, cols)?;
        for (row, col, value) in triplets {
            out.insert(row, col, value)?;
        }
        Ok(out)
    }

    /// Which engine backs this matrix
    pub fn kind(&self) -> EngineKind {
        match self {
            AnyMatrix::Hash(_) => EngineKind::Hash,
            AnyMatrix::Tree(_) => EngineKind::Tree,
            AnyMatrix::Dense(_) => EngineKind::Dense,
        }
    }

    /// Logical shape as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        match self {
            AnyMatrix::Hash(m) => m.shape(),
            AnyMatrix::Tree(m) => m.shape(),
            AnyMatrix::Dense(m) => m.shape(),
        }
    }

    /// Number of stored nonzero entries
    pub fn nnz(&self) -> usize {
        match self {
            AnyMatrix::Hash(m) => m.nnz(),
            AnyMatrix::Tree(m) => m.nnz(),
            AnyMatrix::Dense(m) => m.nnz(),
        }
    }

    /// Value at a logical coordinate
    pub fn access(&self, row: usize, col: usize) -> Result<f64> {
        match self {
            AnyMatrix::Hash(m) => m.access(row, col),
            AnyMatrix::Tree(m) => m.access(row, col),
            AnyMatrix::Dense(m) => m.access(row, col),
        }
    }

    /// Insert or update the value at a logical coordinate
    pub fn insert(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        match self {
            AnyMatrix::Hash(m) => m.insert(row, col, value),
            AnyMatrix::Tree(m) => m.insert(row, col, value),
            AnyMatrix::Dense(m) => m.insert(row, col, value),
        }
    }

    /// Flip the logical orientation in O(1)
    pub fn transpose(&mut self) {
        match self {
            AnyMatrix::Hash(m) => m.transpose(),
            AnyMatrix::Tree(m) => m.transpose(),
            AnyMatrix::Dense(m) => m.transpose(),
        }
    }

    /// Entrywise sum; both operands must use the same engine
    pub fn add(&self, other: &AnyMatrix) -> Result<AnyMatrix> {
        match (self, other) {
            (AnyMatrix::Hash(a), AnyMatrix::Hash(b)) => Ok(AnyMatrix::Hash(a.add(b)?)),
            (AnyMatrix::Tree(a), AnyMatrix::Tree(b)) => Ok(AnyMatrix::Tree(a.add(b)?)),
            (AnyMatrix::Dense(a), AnyMatrix::Dense(b)) => Ok(AnyMatrix::Dense(a.add(b)?)),
            _ => Err(MatrixError::UnsupportedOperand),
        }
    }

    /// Multiply every entry by a scalar
    pub fn scale(&self, factor: f64) -> AnyMatrix {
        match self {
            AnyMatrix::Hash(m) => AnyMatrix::Hash(m.scale(factor)),
            AnyMatrix::Tree(m) => AnyMatrix::Tree(m.scale(factor)),
            AnyMatrix::Dense(m) => AnyMatrix::Dense(m.scale(factor)),
        }
    }

    /// Matrix product; both operands must use the same engine
    pub fn matmul(&self, other: &AnyMatrix) -> Result<AnyMatrix> {
        match (self, other) {
            (AnyMatrix::Hash(a), AnyMatrix::Hash(b)) => Ok(AnyMatrix::Hash(a.matmul(b)?)),
            (AnyMatrix::Tree(a), AnyMatrix::Tree(b)) => Ok(AnyMatrix::Tree(a.matmul(b)?)),
            (AnyMatrix::Dense(a), AnyMatrix::Dense(b)) => Ok(AnyMatrix::Dense(a.matmul(b)?)),
            _ => Err(MatrixError::UnsupportedOperand),
        }
    }

    /// Lazily enumerate stored (row, col, value) triplets
    pub fn triplets(&self) -> Box<dyn Iterator<Item = (usize, usize, f64)> + '_> {
        match self {
            AnyMatrix::Hash(m) => m.triplets(),
            AnyMatrix::Tree(m) => m.triplets(),
            AnyMatrix::Dense(m) => m.triplets(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_kind_round_trips_through_names() {
        for kind in EngineKind::ALL {
            assert_eq!(kind.name().parse::<EngineKind>().unwrap(), kind);
        }
        assert!("csr".parse::<EngineKind>().is_err());
    }

    #[test]
    fn test_delegates_to_selected_engine() {
        for kind in EngineKind::ALL {
            let mut matrix = AnyMatrix::with_shape(kind, 2, 2).unwrap();
            assert_eq!(matrix.kind(), kind);
            matrix.insert(0, 1, 5.0).unwrap();
            assert_eq!(matrix.access(0, 1).unwrap(), 5.0);
            assert_eq!(matrix.nnz(), 1);

            matrix.transpose();
            assert_eq!(matrix.access(1, 0).unwrap(), 5.0);
        }
    }

    #[test]
    fn test_mixed_engines_are_rejected() {
        let hash = AnyMatrix::with_shape(EngineKind::Hash, 2, 2).unwrap();
        let tree = AnyMatrix::with_shape(EngineKind::Tree, 2, 2).unwrap();
        assert_eq!(hash.add(&tree).unwrap_err(), MatrixError::UnsupportedOperand);
        assert_eq!(
            hash.matmul(&tree).unwrap_err(),
            MatrixError::UnsupportedOperand
        );
    }

    #[test]
    fn test_same_engine_algebra_passes_through() {
        let a = AnyMatrix::from_triplets(EngineKind::Tree, 2, 2, [(0, 0, 1.0), (1, 1, 2.0)])
            .unwrap();
        let b = AnyMatrix::from_triplets(EngineKind::Tree, 2, 2, [(0, 0, 3.0)]).unwrap();

        let sum = a.add(&b).unwrap();
        assert_eq!(sum.access(0, 0).unwrap(), 4.0);

        let product = a.matmul(&b).unwrap();
        assert_eq!(product.access(0, 0).unwrap(), 3.0);
        assert_eq!(product.access(1, 1).unwrap(), 0.0);

        let scaled = a.scale(2.0);
        assert_eq!(scaled.access(1, 1).unwrap(), 4.0);
    }
}
