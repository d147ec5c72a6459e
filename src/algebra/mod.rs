//! Cayley-Dickson algebra engine
//!
//! One recursive number type covers every dyadic order:
//! - Order 2: a real pair with complex multiplication (the recursion base)
//! - Order 2n: a pair of order-n numbers
//!
//! Every operator is a single recursive function with an explicit base arm
//! and doubling arm, so the product and conjugation rules stay consistent
//! across all recursion levels.

mod arithmetic;
mod components;
mod metric;
mod number;

pub use arithmetic::{associator, commutator};
pub use components::Components;
pub use number::Hypercomplex;

use crate::{AlgebraError, Result};

/// Fail with `OrderMismatch` unless both operands share an order.
pub(crate) fn ensure_same_order(left: &Hypercomplex, right: &Hypercomplex) -> Result<()> {
    if left.order() != right.order() {
        return Err(AlgebraError::OrderMismatch {
            left: left.order(),
            right: right.order(),
        });
    }
    Ok(())
}

/// Validate that `order` is a power of two and at least 2.
pub(crate) fn validate_order(order: usize) -> Result<()> {
    if order < 2 || !order.is_power_of_two() {
        return Err(AlgebraError::InvalidOrder { order });
    }
    Ok(())
}
