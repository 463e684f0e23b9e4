//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as matrix elements.

use core::ops::{Add, Mul, Sub};

/// Trait for numeric scalars that can be stored as matrix elements
///
/// Elements must be cheap to copy and closed under addition, subtraction,
/// and multiplication so every engine can implement the same algebra.
/// Sparse engines never store a value for which `is_zero` returns true.
pub trait MatrixElement:
    Copy + PartialEq + PartialOrd + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    /// The additive identity
    fn zero() -> Self;

    /// Whether this value is exactly the additive identity
    fn is_zero(self) -> bool {
        self == Self::zero()
    }

    /// Convert from f64 for generic construction
    ///
    /// This is used where triplets arrive as f64 (file loading, random
    /// generation) but the target element type is generic.
    fn from_f64(value: f64) -> Self;

    /// Convert to f64 for generic comparisons
    ///
    /// This is used where a common numeric type is needed, e.g. the
    /// cross-engine maximum-absolute-difference check.
    fn to_f64(self) -> f64;
}

// Implement MatrixElement for standard numeric types

impl MatrixElement for f32 {
    fn zero() -> Self {
        0.0
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl MatrixElement for f64 {
    fn zero() -> Self {
        0.0
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64(self) -> f64 {
        self
    }
}

impl MatrixElement for i32 {
    fn zero() -> Self {
        0
    }

    fn from_f64(value: f64) -> Self {
        value as i32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl MatrixElement for i64 {
    fn zero() -> Self {
        0
    }

    fn from_f64(value: f64) -> Self {
        value as i64
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}
