// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Matrix and Euler-angle conversions into quaternions.

#![allow(missing_docs)]
use core::f32::consts::{FRAC_1_SQRT_2, FRAC_PI_2};
use spatial_math::mathf::{deg_to_rad, DEFAULT_EULER_ORDER};
use spatial_math::{EulerOrder, Mat3, MathError, Quat, Vec3};

mod common;
use common::{approx_eq3, approx_eq4, axis_angle, rotated, same_rotation};

fn elemental(axis: char, degrees: f32) -> Quat {
    let v = match axis {
        'x' => Vec3::UNIT_X,
        'y' => Vec3::UNIT_Y,
        _ => Vec3::UNIT_Z,
    };
    axis_angle(v, deg_to_rad(degrees))
}

#[test]
fn mat3_from_quat_matches_transform_quat() {
    let mut q = Quat::new(0.3, -0.2, 0.6, 0.7);
    q.normalize();
    let m = Mat3::from_quat(&q);
    for v in [Vec3::UNIT_X, Vec3::UNIT_Y, Vec3::new(0.5, -1.5, 2.0)] {
        let mut via_matrix = v;
        via_matrix.transform_mat3(&m);
        approx_eq3(via_matrix.to_array(), rotated(v, &q).to_array());
    }
}

#[test]
fn mat3_identity_round_trips_to_identity_quat() {
    assert_eq!(Mat3::from_quat(&Quat::IDENTITY), Mat3::IDENTITY);
    let mut q = Quat::new(9.0, 9.0, 9.0, 9.0);
    q.from_mat3(&Mat3::IDENTITY);
    assert_eq!(q, Quat::IDENTITY);
}

#[test]
fn mat3_multiply_applies_left_operand_first() {
    let a = axis_angle(Vec3::UNIT_X, 0.6);
    let b = axis_angle(Vec3::UNIT_Z, -1.1);
    let mut m = Mat3::from_quat(&a);
    m.multiply(&Mat3::from_quat(&b));

    // v * (A * B) rotates by a, then b: the quaternion b * a.
    let mut ba = b;
    ba.multiply(&a);
    let v = Vec3::new(1.0, 2.0, 3.0);
    let mut via_matrix = v;
    via_matrix.transform_mat3(&m);
    approx_eq3(via_matrix.to_array(), rotated(v, &ba).to_array());
}

#[test]
fn mat3_transpose_inverts_rotation() {
    let q = axis_angle(Vec3::UNIT_Y, 0.8);
    let mut m = Mat3::from_quat(&q);
    m.transpose();
    let mut inv = q;
    inv.conjugate();
    let expected = Mat3::from_quat(&inv).to_array();
    for (got, want) in m.to_array().into_iter().zip(expected) {
        assert!((got - want).abs() < 1e-6, "{m:?} vs {expected:?}");
    }
}

#[test]
fn from_mat3_round_trips_across_branches() {
    let mut tilted = Vec3::new(1.0, -2.0, 0.5);
    tilted.normalize();
    // Small angles take the positive-trace branch; near half turns pivot on
    // the largest diagonal term.
    for (axis, angle) in [
        (tilted, 0.3),
        (tilted, 2.9),
        (Vec3::UNIT_X, 3.0),
        (Vec3::UNIT_Y, 3.0),
        (Vec3::UNIT_Z, 3.0),
        (Vec3::new(0.0, FRAC_1_SQRT_2, FRAC_1_SQRT_2), 2.5),
    ] {
        let q = axis_angle(axis, angle);
        let mut back = Quat::IDENTITY;
        back.from_mat3(&Mat3::from_quat(&q)).normalize();
        same_rotation(&back, &q);
    }
}

#[test]
fn from_mat3_does_not_normalize() {
    let mut scaled = Mat3::IDENTITY;
    for i in [0, 4, 8] {
        scaled.as_mut_array()[i] = 4.0;
    }
    let mut q = Quat::IDENTITY;
    q.from_mat3(&scaled);
    // trace 12: w = sqrt(13) / 2
    approx_eq4(q.to_array(), [0.0, 0.0, 0.0, 13.0_f32.sqrt() * 0.5]);
}

#[test]
fn from_euler_single_x_rotation() {
    let mut q = Quat::IDENTITY;
    q.from_euler(90.0, 0.0, 0.0, "xyz")
        .expect("xyz is a valid order");
    approx_eq4(q.to_array(), [FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2]);
    approx_eq3(rotated(Vec3::UNIT_Y, &q).to_array(), [0.0, 0.0, 1.0]);
}

#[test]
fn from_euler_orders_match_elemental_products() {
    let (x, y, z) = (30.0, -50.0, 110.0);
    for order in EulerOrder::ALL {
        let mut expected = Quat::IDENTITY;
        for axis in order.as_str().chars() {
            let degrees = match axis {
                'x' => x,
                'y' => y,
                _ => z,
            };
            expected.multiply(&elemental(axis, degrees));
        }

        let mut q = Quat::IDENTITY;
        q.from_euler_order(x, y, z, order);
        approx_eq4(q.to_array(), expected.to_array());

        let mut parsed = Quat::IDENTITY;
        let res = parsed.from_euler(x, y, z, order.as_str()).map(|q| *q);
        assert_eq!(res, Ok(q), "order {order}");
    }
}

#[test]
fn from_euler_orders_differ_for_mixed_angles() {
    let mut xyz = Quat::IDENTITY;
    xyz.from_euler_order(FRAC_PI_2.to_degrees(), 45.0, 0.0, EulerOrder::Xyz);
    let mut yxz = Quat::IDENTITY;
    yxz.from_euler_order(FRAC_PI_2.to_degrees(), 45.0, 0.0, EulerOrder::Yxz);
    assert!(!xyz.approx_eq(&yxz));
}

#[test]
fn default_order_is_zyx() {
    assert_eq!(DEFAULT_EULER_ORDER, EulerOrder::Zyx);
    let mut a = Quat::IDENTITY;
    a.from_euler_order(10.0, 20.0, 30.0, EulerOrder::default());
    let mut b = Quat::IDENTITY;
    b.from_euler_order(10.0, 20.0, 30.0, EulerOrder::Zyx);
    assert_eq!(a, b);
}

#[test]
fn from_euler_unknown_order_is_an_error() {
    let mut q = Quat::new(0.1, 0.2, 0.3, 0.9);
    let before = q;
    let err = q.from_euler(10.0, 20.0, 30.0, "abc").map(|q| *q);
    assert_eq!(err, Err(MathError::UnknownEulerOrder("abc".to_owned())));
    assert_eq!(q, before);

    let message = MathError::UnknownEulerOrder("abc".to_owned()).to_string();
    assert!(message.contains("\"abc\""), "{message}");
}
