//! Abstract interfaces for the matrix engines
//!
//! This module defines the capability traits every storage engine
//! implements. Traits are pure interfaces - no concrete implementations.

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
pub use matrix::SparseAccess;
#[cfg(feature = "alloc")]
pub use matrix::MatrixAlgebra;
