// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(dead_code)]

use spatial_math::{Quat, Vec3};

const ABS_TOL: f32 = 1e-5;
const REL_TOL: f32 = 1e-5;

pub fn approx_eq(a: f32, b: f32) {
    let diff = (a - b).abs();
    let tol = ABS_TOL.max(REL_TOL * a.abs().max(b.abs()));
    assert!(diff <= tol, "expected {b}, got {a} (diff {diff}, tol {tol})");
}

pub fn approx_eq3(a: [f32; 3], b: [f32; 3]) {
    for i in 0..3 {
        let diff = (a[i] - b[i]).abs();
        let tol = ABS_TOL.max(REL_TOL * a[i].abs().max(b[i].abs()));
        assert!(diff <= tol, "index {i}: {a:?} vs {b:?}, diff={diff}, tol={tol}");
    }
}

pub fn approx_eq4(a: [f32; 4], b: [f32; 4]) {
    for i in 0..4 {
        let diff = (a[i] - b[i]).abs();
        let tol = ABS_TOL.max(REL_TOL * a[i].abs().max(b[i].abs()));
        assert!(diff <= tol, "index {i}: {a:?} vs {b:?}, diff={diff}, tol={tol}");
    }
}

/// Asserts `a` and `b` encode the same rotation (`q` and `-q` are equivalent).
pub fn same_rotation(a: &Quat, b: &Quat) {
    let d = a.dot(b).abs();
    assert!(
        (d - 1.0).abs() <= 1e-5,
        "{a} and {b} are different rotations (|dot| = {d})"
    );
}

pub fn axis_angle(axis: Vec3, rad: f32) -> Quat {
    let mut q = Quat::IDENTITY;
    q.set_axis_angle(&axis, rad);
    q
}

pub fn rotated(v: Vec3, q: &Quat) -> Vec3 {
    let mut out = v;
    out.transform_quat(q);
    out
}
