//! Recursive number representation
//!
//! Number = `Leaf(re, im)` at order 2, otherwise `Node(left, right)` with
//! both halves of order `order / 2`. Component index space `[0, order)`:
//!   `[0, order/2)`     → left half
//!   `[order/2, order)` → right half

use std::fmt;

use super::validate_order;
use crate::{AlgebraError, Result};

/// Element of the order-`2^n` Cayley-Dickson algebra
///
/// Each node exclusively owns its two halves. Operators never share
/// subtrees between inputs and outputs; every result is freshly built.
#[derive(Debug, Clone, PartialEq)]
pub struct Hypercomplex {
    pub(super) repr: Repr,
}

/// Tagged union behind [`Hypercomplex`]
///
/// Kept private so a `Node` can only be built with matching halves.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Repr {
    /// Order 2: the complex numbers
    Leaf { re: f64, im: f64 },

    /// Order `2 * left.order()`, with `left.order() == right.order()`
    Node {
        order: usize,
        left: Box<Hypercomplex>,
        right: Box<Hypercomplex>,
    },
}

impl Hypercomplex {
    /// Zero-valued number of the given order
    ///
    /// Fails with `InvalidOrder` unless `order` is a power of two and `>= 2`.
    pub fn new(order: usize) -> Result<Self> {
        validate_order(order)?;
        tracing::trace!(order, "constructing zero hypercomplex number");
        Ok(Self::zeroed(order))
    }

    /// Zero complex number (order 2)
    pub fn complex() -> Self {
        Self::zeroed(2)
    }

    /// Zero quaternion (order 4)
    pub fn quaternion() -> Self {
        Self::zeroed(4)
    }

    /// Zero octonion (order 8)
    pub fn octonion() -> Self {
        Self::zeroed(8)
    }

    /// Zero sedenion (order 16)
    pub fn sedenion() -> Self {
        Self::zeroed(16)
    }

    /// Basis element `e_index`: component `index` set to 1, all others 0
    pub fn basis(order: usize, index: usize) -> Result<Self> {
        let mut unit = Self::new(order)?;
        unit.set(index, 1.0)?;
        Ok(unit)
    }

    /// Multiplicative identity `e_0`
    pub fn one(order: usize) -> Result<Self> {
        Self::basis(order, 0)
    }

    /// Build from flat components; the order is the slice length
    pub fn from_components(components: &[f64]) -> Result<Self> {
        validate_order(components.len())?;
        Ok(Self::build(components))
    }

    /// Pair two halves into a number of twice their order
    ///
    /// Fails with `OrderMismatch` if the halves differ in order.
    pub fn pair(left: Hypercomplex, right: Hypercomplex) -> Result<Self> {
        super::ensure_same_order(&left, &right)?;
        Ok(Self::node(left, right))
    }

    /// Real dimension of the algebra this number lives in
    #[inline]
    pub fn order(&self) -> usize {
        match &self.repr {
            Repr::Leaf { .. } => 2,
            Repr::Node { order, .. } => *order,
        }
    }

    /// Check if this is the order-2 base case
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.repr, Repr::Leaf { .. })
    }

    /// Borrow the two half-order children (`None` at order 2)
    pub fn halves(&self) -> Option<(&Hypercomplex, &Hypercomplex)> {
        match &self.repr {
            Repr::Leaf { .. } => None,
            Repr::Node { left, right, .. } => Some((left, right)),
        }
    }

    pub(super) fn leaf(re: f64, im: f64) -> Self {
        Self {
            repr: Repr::Leaf { re, im },
        }
    }

    /// Callers guarantee `left.order() == right.order()`.
    pub(super) fn node(left: Hypercomplex, right: Hypercomplex) -> Self {
        debug_assert_eq!(left.order(), right.order(), "halves must share an order");
        Self {
            repr: Repr::Node {
                order: left.order() * 2,
                left: Box::new(left),
                right: Box::new(right),
            },
        }
    }

    fn zeroed(order: usize) -> Self {
        if order == 2 {
            Self::leaf(0.0, 0.0)
        } else {
            Self::node(Self::zeroed(order / 2), Self::zeroed(order / 2))
        }
    }

    fn build(components: &[f64]) -> Self {
        if let [re, im] = components {
            return Self::leaf(*re, *im);
        }
        let (left, right) = components.split_at(components.len() / 2);
        Self::node(Self::build(left), Self::build(right))
    }
}

impl TryFrom<&[f64]> for Hypercomplex {
    type Error = AlgebraError;

    fn try_from(components: &[f64]) -> Result<Self> {
        Self::from_components(components)
    }
}

impl fmt::Display for Hypercomplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Leaf { re, im } => write!(f, "({}, {})", re, im),
            Repr::Node { left, right, .. } => write!(f, "({}, {})", left, right),
        }
    }
}
