//! Rotations, quaternions and rigid transforms through the geometry backend

use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4};

use approx::assert_relative_eq;
use linalg_tour_core::{AngleAxis, EulerZyx, GeometryBackend, NalgebraBackend, Vec3};

fn assert_vec_eq(actual: Vec3, expected: Vec3) {
    assert_relative_eq!(actual.x, expected.x, epsilon = 1e-12);
    assert_relative_eq!(actual.y, expected.y, epsilon = 1e-12);
    assert_relative_eq!(actual.z, expected.z, epsilon = 1e-12);
}

fn demo_rotation() -> AngleAxis {
    AngleAxis::new(FRAC_PI_4, Vec3::new(0.0, 0.0, 1.0)).unwrap()
}

#[test]
fn test_all_representations_rotate_alike() {
    let g = NalgebraBackend;
    let aa = demo_rotation();
    let v = Vec3::new(1.0, 0.0, 0.0);
    let expected = Vec3::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0);

    let r = g.rotation_from_angle_axis(&aa);
    assert_vec_eq(g.rotate_by_angle_axis(&aa, v), expected);
    assert_vec_eq(g.rotate(&r, v), expected);
    assert_vec_eq(g.rotate_by_quaternion(&g.quaternion_from_angle_axis(&aa), v), expected);
    assert_vec_eq(g.rotate_by_quaternion(&g.quaternion_from_rotation(&r), v), expected);
}

#[test]
fn test_quaternion_sources_agree() {
    let g = NalgebraBackend;
    let aa = demo_rotation();
    let from_axis = g.quaternion_coeffs(&g.quaternion_from_angle_axis(&aa));
    let from_matrix =
        g.quaternion_coeffs(&g.quaternion_from_rotation(&g.rotation_from_angle_axis(&aa)));

    let half = FRAC_PI_4 / 2.0;
    let expected = [0.0, 0.0, half.sin(), half.cos()];
    for i in 0..4 {
        assert_relative_eq!(from_axis[i], expected[i], epsilon = 1e-12);
        assert_relative_eq!(from_matrix[i], expected[i], epsilon = 1e-12);
    }
}

#[test]
fn test_conjugation_is_pure_rotation() {
    let g = NalgebraBackend;
    let q = g.quaternion_from_angle_axis(&demo_rotation());
    let [x, y, z, w] = g.conjugate(&q, Vec3::new(1.0, 0.0, 0.0));
    assert_relative_eq!(w, 0.0, epsilon = 1e-12);
    assert_vec_eq(Vec3::new(x, y, z), Vec3::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0));
}

#[test]
fn test_isometry_rotates_then_translates() {
    let g = NalgebraBackend;
    let t = g.isometry(&demo_rotation(), Vec3::new(1.0, 3.0, 4.0));
    let p = g.transform_point(&t, Vec3::new(1.0, 0.0, 0.0));
    assert_vec_eq(
        p,
        Vec3::new(1.0 + FRAC_1_SQRT_2, 3.0 + FRAC_1_SQRT_2, 4.0),
    );

    let h = g.homogeneous(&t);
    assert_relative_eq!(h[(0, 3)], 1.0, epsilon = 1e-12);
    assert_relative_eq!(h[(1, 3)], 3.0, epsilon = 1e-12);
    assert_relative_eq!(h[(2, 3)], 4.0, epsilon = 1e-12);
    assert_relative_eq!(h[(3, 3)], 1.0, epsilon = 1e-12);
    assert_relative_eq!(h[(0, 0)], FRAC_1_SQRT_2, epsilon = 1e-12);
    assert_relative_eq!(h[(1, 0)], FRAC_1_SQRT_2, epsilon = 1e-12);
    assert_relative_eq!(h[(3, 0)], 0.0, epsilon = 1e-12);
}

#[test]
fn test_euler_zyx_of_yaw_only_rotation() {
    let g = NalgebraBackend;
    let e = g.euler_zyx(&g.rotation_from_angle_axis(&demo_rotation()));
    assert_relative_eq!(e.yaw, FRAC_PI_4, epsilon = 1e-12);
    assert_relative_eq!(e.pitch, 0.0, epsilon = 1e-12);
    assert_relative_eq!(e.roll, 0.0, epsilon = 1e-12);
}

#[test]
fn test_euler_round_trip() {
    let g = NalgebraBackend;
    let angles = EulerZyx::new(0.3, -0.4, 1.1);
    let r = g.rotation_from_euler(&angles);
    let back = g.euler_zyx(&r);
    assert_relative_eq!(back.yaw, angles.yaw, epsilon = 1e-12);
    assert_relative_eq!(back.pitch, angles.pitch, epsilon = 1e-12);
    assert_relative_eq!(back.roll, angles.roll, epsilon = 1e-12);

    let m = g.rotation_matrix(&r);
    assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-12);
}
