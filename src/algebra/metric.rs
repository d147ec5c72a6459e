//! Norm-derived operations
//!
//! `x x* = N(x)` is real at every order, which gives every non-zero
//! element the inverse `x* / N(x)`, including in the non-division
//! algebras from order 16 upward.

use super::ensure_same_order;
use super::number::Hypercomplex;
use crate::{AlgebraError, Result, Tolerance};

impl Hypercomplex {
    /// Sum of squared components
    pub fn norm(&self) -> f64 {
        self.iter().map(|value| value * value).sum()
    }

    /// Euclidean length, `sqrt(norm)`
    pub fn magnitude(&self) -> f64 {
        self.norm().sqrt()
    }

    /// Unit-magnitude copy
    ///
    /// Fails with `DivisionByZero` on the zero element.
    pub fn normalize(&self) -> Result<Hypercomplex> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            tracing::debug!(order = self.order(), "normalize on zero-norm number");
            return Err(AlgebraError::DivisionByZero {
                operation: "normalize",
            });
        }
        Ok(self.scale(1.0 / magnitude))
    }

    /// Multiplicative inverse `x* / N(x)`
    ///
    /// Fails with `DivisionByZero` on the zero element.
    pub fn inverse(&self) -> Result<Hypercomplex> {
        let norm = self.norm();
        if norm == 0.0 {
            tracing::debug!(order = self.order(), "inverse of zero-norm number");
            return Err(AlgebraError::DivisionByZero {
                operation: "inverse",
            });
        }
        Ok(self.conjugate().scale(1.0 / norm))
    }

    /// Sandwich product `(by * self) * by⁻¹`
    ///
    /// Preserves magnitude when `by` is a unit; with `self` a pure
    /// quaternion this is the usual 3D rotation.
    pub fn rotate(&self, by: &Hypercomplex) -> Result<Hypercomplex> {
        ensure_same_order(self, by)?;
        tracing::trace!(order = self.order(), "sandwich rotation");
        let inverse = by.inverse()?;
        by.multiply(self)?.multiply(&inverse)
    }

    /// Componentwise comparison within `tolerance`
    ///
    /// Numbers of different order are never approximately equal.
    pub fn approx_eq(&self, other: &Hypercomplex, tolerance: &Tolerance) -> bool {
        self.order() == other.order()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| tolerance.accepts(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norm_and_magnitude() {
        let q = Hypercomplex::from_components(&[1.0, 2.0, 2.0, 4.0]).unwrap();
        assert_eq!(q.norm(), 25.0);
        assert_eq!(q.magnitude(), 5.0);
        assert_eq!(Hypercomplex::sedenion().norm(), 0.0);
    }

    #[test]
    fn test_normalize() {
        let q = Hypercomplex::from_components(&[0.0, 3.0, 0.0, 4.0]).unwrap();
        let unit = q.normalize().unwrap();
        let expected = Hypercomplex::from_components(&[0.0, 0.6, 0.0, 0.8]).unwrap();
        assert!(unit.approx_eq(&expected, &Tolerance::default()));
        assert!((unit.magnitude() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_norm_failures() {
        let zero = Hypercomplex::octonion();
        assert_eq!(
            zero.normalize(),
            Err(AlgebraError::DivisionByZero {
                operation: "normalize"
            })
        );
        assert_eq!(
            zero.inverse(),
            Err(AlgebraError::DivisionByZero {
                operation: "inverse"
            })
        );
        let x = Hypercomplex::basis(8, 3).unwrap();
        assert!(matches!(
            x.rotate(&zero),
            Err(AlgebraError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_inverse_of_complex() {
        // 1 / (3 + 4i) = (3 - 4i) / 25
        let z = Hypercomplex::from_components(&[3.0, 4.0]).unwrap();
        let inv = z.inverse().unwrap();
        assert_eq!(inv.components(), vec![0.12, -0.16]);
        let product = z.multiply(&inv).unwrap();
        assert!(product.approx_eq(&Hypercomplex::one(2).unwrap(), &Tolerance::default()));
    }

    #[test]
    fn test_rotate_quarter_turn_about_z() {
        // q = cos(pi/4) + k sin(pi/4) maps i to j
        let half = std::f64::consts::FRAC_PI_4;
        let by = Hypercomplex::from_components(&[half.cos(), 0.0, 0.0, half.sin()]).unwrap();
        let i = Hypercomplex::basis(4, 1).unwrap();
        let rotated = i.rotate(&by).unwrap();
        assert!(rotated.approx_eq(&Hypercomplex::basis(4, 2).unwrap(), &Tolerance::default()));
    }

    #[test]
    fn test_rotate_rejects_order_mismatch() {
        let x = Hypercomplex::quaternion();
        let by = Hypercomplex::one(8).unwrap();
        assert_eq!(
            x.rotate(&by),
            Err(AlgebraError::OrderMismatch { left: 4, right: 8 })
        );
    }

    #[test]
    fn test_approx_eq_respects_order() {
        let tolerance = Tolerance::default();
        let z = Hypercomplex::complex();
        let q = Hypercomplex::quaternion();
        assert!(!z.approx_eq(&q, &tolerance));

        let a = Hypercomplex::from_components(&[1.0, 0.0]).unwrap();
        let b = Hypercomplex::from_components(&[1.0 + 1e-12, -1e-12]).unwrap();
        assert!(a.approx_eq(&b, &tolerance));
        assert!(!a.approx_eq(&b, &Tolerance::strict()));
    }
}
