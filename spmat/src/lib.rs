//! SPMAT - Comparable Sparse Matrix Storage Engines
//!
//! This library provides one algebra contract (access, insert, transpose,
//! add, scale, matmul) implemented by three interchangeable storage
//! strategies, so their performance and correctness can be compared on
//! equal footing.
//!
//! ## Architecture
//!
//! The workspace follows a clean specification/implementation separation:
//!
//! - **spmat-core**: Pure contracts, coordinate keys, layouts, and shape
//!   validation (no I/O)
//! - **spmat**: The storage engines plus loading, generation, and
//!   comparison tooling
//!
//! ## Engines
//!
//! - [`HashMatrix`]: nested hash maps, average O(1) point access
//! - [`TreeMatrix`]: height-balanced search tree with ordered range
//!   queries, O(log k) point access under any insertion order
//! - [`DenseMatrix`]: contiguous row-major buffer, the correctness oracle
//!   and worst-case baseline
//!
//! ## Quick Start
//!
//! ```rust
//! use spmat::{MatrixAlgebra, SparseAccess, TreeMatrix};
//!
//! fn example() -> spmat::Result<()> {
//!     let mut matrix: TreeMatrix<f64> = TreeMatrix::with_shape(3, 3)?;
//!     matrix.insert(0, 0, 1.0)?;
//!     matrix.insert(2, 1, -2.5)?;
//!
//!     // Transpose is a flag flip; no stored data moves
//!     matrix.transpose();
//!     assert_eq!(matrix.access(1, 2)?, -2.5);
//!     assert_eq!(matrix.nnz(), 2);
//!     Ok(())
//! }
//! ```

// Re-export core contracts and definitions
pub use spmat_core::{
    // Core traits
    MatrixAlgebra, MatrixElement, SparseAccess,
    // Coordinate and layout definitions
    CoordKey, Layout,
    // Error handling
    MatrixError, Result,
    // Shape validation
    validation,
};

// Engine and tooling modules
pub mod compare;
pub mod dense_engine;
pub mod dynamic;
pub mod gen;
pub mod hash_engine;
pub mod loader;
pub mod tree_engine;

// Public exports
pub use compare::max_abs_diff;
pub use dense_engine::DenseMatrix;
pub use dynamic::{AnyMatrix, EngineKind};
pub use gen::random_triplets;
pub use hash_engine::HashMatrix;
pub use loader::{load_dense_text, parse_dense_text, DenseText, LoadError};
pub use tree_engine::TreeMatrix;
