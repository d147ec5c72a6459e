//! # Hypercomplex Algebras via Cayley-Dickson Doubling
//!
//! This library builds the complex numbers, quaternions, octonions and every
//! higher dyadic algebra from a single recursive number type.
//!
//! ## Core Construction
//!
//! 1. **Base case**: order 2 is a plain real pair `(re, im)` with complex multiplication
//! 2. **Doubling**: order `2n` is a pair `(a, b)` of order-`n` numbers
//! 3. **Conjugation**: `(a, b)* = (a*, -b)`
//! 4. **Product**: `(a, b)(c, d) = (ac - d*b, da + bc*)`
//!
//! Each doubling gives up one algebraic property: commutativity at order 4,
//! associativity at order 8 (octonions stay alternative), alternativity at order 16.
//!
//! ## Usage Example
//!
//! ```
//! use cayley::Hypercomplex;
//!
//! let mut z = Hypercomplex::complex();
//! z.set(0, 1.0)?;
//! z.set(1, 1.0)?;
//! let squared = z.multiply(&z)?;
//! assert_eq!(squared.components(), vec![0.0, 2.0]);
//! # Ok::<(), cayley::AlgebraError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules
pub mod algebra;   // Recursive number type and its operators
pub mod config;    // Comparison tolerances
pub mod rotation;  // Quaternion rotation helpers built on the public operators
/// Python bindings for exposing the algebra to external runtimes.
#[cfg(feature = "python-bindings")]
pub mod python_bindings;

// Re-exports for convenience
pub use algebra::{associator, commutator, Hypercomplex};
pub use config::Tolerance;

use thiserror::Error;

/// Errors raised by hypercomplex operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgebraError {
    /// Order is not a power of two, or is below 2
    #[error("invalid order {order}: must be a power of two and at least 2")]
    InvalidOrder {
        /// Rejected order
        order: usize,
    },

    /// Component index outside `[0, order)`
    #[error("component index {index} out of range for order {order}")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Order of the number being indexed
        order: usize,
    },

    /// Binary operation on numbers of different order
    #[error("order mismatch: {left} vs {right}")]
    OrderMismatch {
        /// Order of the left operand
        left: usize,
        /// Order of the right operand
        right: usize,
    },

    /// Normalization or inversion of a zero-norm number
    #[error("division by zero in {operation}: number has zero norm")]
    DivisionByZero {
        /// Operation that required a non-zero norm
        operation: &'static str,
    },

    /// Argument rejected by a convenience helper
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl AlgebraError {
    /// Helper for constructing convenience-layer input errors.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        AlgebraError::InvalidInput(msg.into())
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, AlgebraError>;
