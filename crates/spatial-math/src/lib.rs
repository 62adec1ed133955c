// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! spatial-math: float32 vectors, 3x3 matrices, and rotation quaternions.
//!
//! Every type is a plain `Copy` value backed by a fixed `f32` array. Mutating
//! operations take `&mut self` and return `&mut Self` so calls chain;
//! interpolation and reconstruction helpers return fresh values and leave
//! their inputs untouched.
//!
//! ```
//! use spatial_math::{Quat, Vec3};
//!
//! let mut q = Quat::IDENTITY;
//! q.rotation_to(&Vec3::UNIT_X, &Vec3::UNIT_Y);
//!
//! let mut v = Vec3::UNIT_X;
//! v.transform_quat(&q);
//! assert!(v.approx_eq(&Vec3::UNIT_Y));
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::float_cmp,
    clippy::should_implement_trait
)]

/// Shared constants and scalar helpers.
pub mod mathf;

mod error;
mod euler;
mod mat3;
mod quat;
mod vec3;

pub use error::MathError;
pub use euler::EulerOrder;
pub use mat3::Mat3;
pub use quat::Quat;
pub use vec3::Vec3;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct ReadmeDoctests;
