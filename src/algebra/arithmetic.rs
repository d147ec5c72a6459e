//! Ring operations
//!
//! For `x = (a, b)` and `y = (c, d)`:
//! - Sum:       `(a + c, b + d)`
//! - Conjugate: `(a*, -b)`
//! - Product:   `(ac - d*b, da + bc*)`
//!
//! Operand order in the product matters from order 4 upward; every
//! recursion level uses exactly this arrangement.

use std::ops::Neg;

use super::ensure_same_order;
use super::number::{Hypercomplex, Repr};
use crate::{AlgebraError, Result};

impl Hypercomplex {
    /// Componentwise sum
    pub fn add(&self, other: &Hypercomplex) -> Result<Hypercomplex> {
        ensure_same_order(self, other)?;
        self.zip_with(other, &|x, y| x + y)
    }

    /// Componentwise difference
    pub fn sub(&self, other: &Hypercomplex) -> Result<Hypercomplex> {
        ensure_same_order(self, other)?;
        self.zip_with(other, &|x, y| x - y)
    }

    /// Additive inverse
    pub fn negate(&self) -> Hypercomplex {
        self.map(&|x| -x)
    }

    /// Multiply every component by a real scalar
    pub fn scale(&self, factor: f64) -> Hypercomplex {
        self.map(&|x| x * factor)
    }

    /// Cayley-Dickson conjugate: `(a, b)* = (a*, -b)`
    ///
    /// Fixes component 0 and negates every other component.
    pub fn conjugate(&self) -> Hypercomplex {
        match &self.repr {
            Repr::Leaf { re, im } => Hypercomplex::leaf(*re, -*im),
            Repr::Node { left, right, .. } => {
                Hypercomplex::node(left.conjugate(), right.negate())
            }
        }
    }

    /// Cayley-Dickson product `self * other`
    ///
    /// Commutative only at order 2, associative up to order 4,
    /// alternative up to order 8.
    pub fn multiply(&self, other: &Hypercomplex) -> Result<Hypercomplex> {
        ensure_same_order(self, other)?;
        self.product(other)
    }

    fn product(&self, other: &Hypercomplex) -> Result<Hypercomplex> {
        match (&self.repr, &other.repr) {
            (Repr::Leaf { re: a, im: b }, Repr::Leaf { re: c, im: d }) => {
                Ok(Hypercomplex::leaf(a * c - b * d, a * d + b * c))
            }
            (
                Repr::Node { left: a, right: b, .. },
                Repr::Node { left: c, right: d, .. },
            ) => {
                // (a, b)(c, d) = (ac - d*b, da + bc*)
                let ac = a.product(c)?;
                let d_conj_b = d.conjugate().product(b)?;
                let da = d.product(a)?;
                let b_c_conj = b.product(&c.conjugate())?;
                Ok(Hypercomplex::node(
                    ac.zip_with(&d_conj_b, &|x, y| x - y)?,
                    da.zip_with(&b_c_conj, &|x, y| x + y)?,
                ))
            }
            _ => Err(mismatch(self, other)),
        }
    }

    fn zip_with<F>(&self, other: &Hypercomplex, op: &F) -> Result<Hypercomplex>
    where
        F: Fn(f64, f64) -> f64,
    {
        match (&self.repr, &other.repr) {
            (Repr::Leaf { re: a, im: b }, Repr::Leaf { re: c, im: d }) => {
                Ok(Hypercomplex::leaf(op(*a, *c), op(*b, *d)))
            }
            (
                Repr::Node { left: a, right: b, .. },
                Repr::Node { left: c, right: d, .. },
            ) => Ok(Hypercomplex::node(a.zip_with(c, op)?, b.zip_with(d, op)?)),
            _ => Err(mismatch(self, other)),
        }
    }

    fn map<F>(&self, op: &F) -> Hypercomplex
    where
        F: Fn(f64) -> f64,
    {
        match &self.repr {
            Repr::Leaf { re, im } => Hypercomplex::leaf(op(*re), op(*im)),
            Repr::Node { left, right, .. } => Hypercomplex::node(left.map(op), right.map(op)),
        }
    }
}

fn mismatch(left: &Hypercomplex, right: &Hypercomplex) -> AlgebraError {
    AlgebraError::OrderMismatch {
        left: left.order(),
        right: right.order(),
    }
}

/// Associator `(xy)z - x(yz)`; zero for every triple up to order 4
pub fn associator(x: &Hypercomplex, y: &Hypercomplex, z: &Hypercomplex) -> Result<Hypercomplex> {
    let left = x.multiply(y)?.multiply(z)?;
    let right = x.multiply(&y.multiply(z)?)?;
    left.sub(&right)
}

/// Commutator `xy - yx`; zero for every pair at order 2
pub fn commutator(x: &Hypercomplex, y: &Hypercomplex) -> Result<Hypercomplex> {
    x.multiply(y)?.sub(&y.multiply(x)?)
}

impl Neg for Hypercomplex {
    type Output = Hypercomplex;

    fn neg(self) -> Hypercomplex {
        self.negate()
    }
}

impl Neg for &Hypercomplex {
    type Output = Hypercomplex;

    fn neg(self) -> Hypercomplex {
        self.negate()
    }
}
