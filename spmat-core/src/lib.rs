#![no_std]

//! SPMAT Core - Sparse Matrix Contract Definitions
//!
//! This crate provides the coordinate keys, layout mapping, error types,
//! shape validation, and capability traits shared by all storage engines.
//! It holds no storage engine and performs no I/O.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod coord;
pub mod error;
pub mod layout;
pub mod traits;
pub mod validation;

pub use coord::*;
pub use error::*;
pub use layout::*;
pub use traits::*;
