//! Flat component addressing
//!
//! Index `i` of an order-`n` number resolves by halving:
//!   `i < n/2`  → left half, sub-index `i`
//!   `i >= n/2` → right half, sub-index `i - n/2`
//! The current order travels down with the index, so no level ever
//! consults a bound other than its own.

use std::ops::{Index, IndexMut};

use super::number::{Hypercomplex, Repr};
use crate::{AlgebraError, Result};

impl Hypercomplex {
    /// Read flat component `index`
    pub fn get(&self, index: usize) -> Result<f64> {
        self.component(index).copied()
    }

    /// Overwrite flat component `index` in place
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        *self.component_mut(index)? = value;
        Ok(())
    }

    /// Real part (component 0)
    pub fn real(&self) -> f64 {
        match &self.repr {
            Repr::Leaf { re, .. } => *re,
            Repr::Node { left, .. } => left.real(),
        }
    }

    /// Check if every imaginary component is zero
    pub fn is_real(&self) -> bool {
        self.iter().skip(1).all(|value| value == 0.0)
    }

    /// Iterate flat components in index order
    pub fn iter(&self) -> Components<'_> {
        Components {
            stack: vec![self],
            pending: None,
        }
    }

    /// Collect flat components in index order
    pub fn components(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.order());
        out.extend(self.iter());
        out
    }

    /// Index and sign of a signed basis element `±e_index`
    ///
    /// `None` unless exactly one component is non-zero and it is `±1`.
    pub fn as_signed_basis(&self) -> Option<(usize, f64)> {
        let mut nonzero = self.iter().enumerate().filter(|(_, value)| *value != 0.0);
        match (nonzero.next(), nonzero.next()) {
            (Some((index, value)), None) if value.abs() == 1.0 => Some((index, value)),
            _ => None,
        }
    }

    fn component(&self, index: usize) -> Result<&f64> {
        let order = self.order();
        if index >= order {
            return Err(AlgebraError::IndexOutOfRange { index, order });
        }
        Ok(self.slot(index, order))
    }

    fn component_mut(&mut self, index: usize) -> Result<&mut f64> {
        let order = self.order();
        if index >= order {
            return Err(AlgebraError::IndexOutOfRange { index, order });
        }
        Ok(self.slot_mut(index, order))
    }

    /// `index < order` holds on entry at every level.
    fn slot(&self, index: usize, order: usize) -> &f64 {
        match &self.repr {
            Repr::Leaf { re, im } => {
                if index == 0 {
                    re
                } else {
                    im
                }
            }
            Repr::Node { left, right, .. } => {
                let half = order / 2;
                if index < half {
                    left.slot(index, half)
                } else {
                    right.slot(index - half, half)
                }
            }
        }
    }

    fn slot_mut(&mut self, index: usize, order: usize) -> &mut f64 {
        match &mut self.repr {
            Repr::Leaf { re, im } => {
                if index == 0 {
                    re
                } else {
                    im
                }
            }
            Repr::Node { left, right, .. } => {
                let half = order / 2;
                if index < half {
                    left.slot_mut(index, half)
                } else {
                    right.slot_mut(index - half, half)
                }
            }
        }
    }
}

/// Depth-first iterator over flat components
///
/// Holds at most `log2(order)` pending subtrees.
#[derive(Debug, Clone)]
pub struct Components<'a> {
    stack: Vec<&'a Hypercomplex>,
    pending: Option<f64>,
}

impl Iterator for Components<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if let Some(im) = self.pending.take() {
            return Some(im);
        }
        while let Some(number) = self.stack.pop() {
            match &number.repr {
                Repr::Leaf { re, im } => {
                    self.pending = Some(*im);
                    return Some(*re);
                }
                Repr::Node { left, right, .. } => {
                    self.stack.push(right);
                    self.stack.push(left);
                }
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a Hypercomplex {
    type Item = f64;
    type IntoIter = Components<'a>;

    fn into_iter(self) -> Components<'a> {
        self.iter()
    }
}

/// Panics like slice indexing when `index >= order`; use [`Hypercomplex::get`]
/// for a checked read.
impl Index<usize> for Hypercomplex {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match self.component(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl IndexMut<usize> for Hypercomplex {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match self.component_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}
