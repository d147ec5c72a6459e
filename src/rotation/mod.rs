//! Quaternion rotation helpers
//!
//! Thin layer over the public [`Hypercomplex`] operators:
//! - 3-vectors embed as pure quaternions `(0, x, y, z)`
//! - Rotations are unit quaternions applied by sandwich product

use crate::{AlgebraError, Hypercomplex, Result};

/// Cosine threshold for treating two directions as parallel
const PARALLEL_EPSILON: f64 = 1e-12;

/// Embed a 3-vector as the pure quaternion `(0, x, y, z)`
pub fn pure_vector(v: [f64; 3]) -> Result<Hypercomplex> {
    Hypercomplex::from_components(&[0.0, v[0], v[1], v[2]])
}

/// Imaginary components `(x, y, z)` of a quaternion
pub fn vector_part(q: &Hypercomplex) -> Result<[f64; 3]> {
    if q.order() != 4 {
        return Err(AlgebraError::OrderMismatch {
            left: q.order(),
            right: 4,
        });
    }
    Ok([q.get(1)?, q.get(2)?, q.get(3)?])
}

/// Unit quaternion rotating by `angle` radians about `axis`
///
/// `(cos(θ/2), sin(θ/2) · â)`; the axis need not be normalized.
pub fn from_axis_angle(axis: [f64; 3], angle: f64) -> Result<Hypercomplex> {
    let axis = unit_vector(axis, "rotation axis")?;
    let (sin, cos) = (angle / 2.0).sin_cos();
    Hypercomplex::from_components(&[cos, sin * axis[0], sin * axis[1], sin * axis[2]])
}

/// Unit quaternion rotating direction `from` onto direction `to`
pub fn rotation_between(from: [f64; 3], to: [f64; 3]) -> Result<Hypercomplex> {
    let from = unit_vector(from, "source vector")?;
    let to = unit_vector(to, "target vector")?;
    let cos = dot(from, to);

    if cos >= 1.0 - PARALLEL_EPSILON {
        return Hypercomplex::one(4);
    }
    if cos <= -1.0 + PARALLEL_EPSILON {
        // Half turn about any axis orthogonal to `from`
        let mut axis = cross(from, [1.0, 0.0, 0.0]);
        if dot(axis, axis) < PARALLEL_EPSILON {
            axis = cross(from, [0.0, 1.0, 0.0]);
        }
        return from_axis_angle(axis, std::f64::consts::PI);
    }

    // Half-way quaternion: (1 + cos θ, from × to), normalized
    let axis = cross(from, to);
    Hypercomplex::from_components(&[1.0 + cos, axis[0], axis[1], axis[2]])?.normalize()
}

/// Rotate a 3-vector by quaternion `by`
pub fn rotate_vector(v: [f64; 3], by: &Hypercomplex) -> Result<[f64; 3]> {
    let rotated = pure_vector(v)?.rotate(by)?;
    vector_part(&rotated)
}

fn unit_vector(v: [f64; 3], what: &str) -> Result<[f64; 3]> {
    let length = dot(v, v).sqrt();
    if length == 0.0 || !length.is_finite() {
        return Err(AlgebraError::invalid_input(format!(
            "{} must be finite and non-zero, got {:?}",
            what, v
        )));
    }
    Ok([v[0] / length, v[1] / length, v[2] / length])
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}
