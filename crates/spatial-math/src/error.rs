// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors surfaced by spatial-math operations.
///
/// Numerical degeneracies never produce an error; each operation documents
/// its fallback value instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// An Euler angle order string was not one of the six axis permutations.
    #[error("unknown Euler angle order {0:?} (expected one of xyz, xzy, yxz, yzx, zxy, zyx)")]
    UnknownEulerOrder(String),
}
