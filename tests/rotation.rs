//! Sandwich rotations and the quaternion helper layer

use cayley::rotation::{from_axis_angle, pure_vector, rotate_vector, rotation_between};
use cayley::{Hypercomplex, Tolerance};
use proptest::prelude::*;

fn number(order: usize) -> impl Strategy<Value = Hypercomplex> {
    proptest::collection::vec(-5.0f64..5.0, order)
        .prop_map(|components| Hypercomplex::from_components(&components).expect("valid order"))
}

fn vector() -> impl Strategy<Value = [f64; 3]> {
    proptest::array::uniform3(-5.0f64..5.0)
}

fn length(v: [f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

#[test]
fn test_half_turn_about_x_flips_y_and_z() {
    let by = from_axis_angle([1.0, 0.0, 0.0], std::f64::consts::PI).unwrap();
    let rotated = rotate_vector([1.0, 2.0, 3.0], &by).unwrap();
    let expected = [1.0, -2.0, -3.0];
    for (a, e) in rotated.iter().zip(expected.iter()) {
        assert!((a - e).abs() < 1e-12, "{:?}", rotated);
    }
}

#[test]
fn test_unnormalized_rotor_uses_inverse() {
    // Scaling the rotor does not change the rotation
    let unit = from_axis_angle([0.0, 1.0, 0.0], 0.7).unwrap();
    let x = pure_vector([1.0, -1.0, 2.0]).unwrap();
    let a = x.rotate(&unit).unwrap();
    let b = x.rotate(&unit.scale(3.5)).unwrap();
    assert!(a.approx_eq(&b, &Tolerance::default()));
}

proptest! {
    #[test]
    fn rotation_preserves_magnitude(
        (x, by) in prop_oneof![Just(4usize), Just(8usize)]
            .prop_flat_map(|order| (number(order), number(order)))
    ) {
        prop_assume!(by.norm() > 1e-3);
        let by = by.normalize().unwrap();
        let rotated = x.rotate(&by).unwrap();
        let expected = x.magnitude();
        prop_assert!((rotated.magnitude() - expected).abs() <= 1e-9 * (1.0 + expected));
    }

    #[test]
    fn quaternion_rotation_keeps_vectors_pure(v in vector(), axis in vector(), angle in -6.3f64..6.3) {
        prop_assume!(length(axis) > 1e-3);
        let by = from_axis_angle(axis, angle).unwrap();
        let rotated = pure_vector(v).unwrap().rotate(&by).unwrap();
        prop_assert!(rotated.real().abs() <= 1e-9 * (1.0 + length(v)));
    }

    #[test]
    fn rotation_between_aligns_directions(from in vector(), to in vector()) {
        prop_assume!(length(from) > 1e-3 && length(to) > 1e-3);
        let by = rotation_between(from, to).unwrap();
        let rotated = rotate_vector(from, &by).unwrap();
        let scale = length(from) / length(to);
        for axis in 0..3 {
            let expected = to[axis] * scale;
            prop_assert!(
                (rotated[axis] - expected).abs() <= 1e-7 * (1.0 + length(from)),
                "{:?} vs {:?}", rotated, to
            );
        }
    }
}
