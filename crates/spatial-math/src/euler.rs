// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::str::FromStr;

use tracing::debug;

use crate::mathf::DEFAULT_EULER_ORDER;
use crate::MathError;

/// Intrinsic rotation order for Euler angle conversion.
///
/// The variant name lists the elemental rotations left to right as they
/// appear in the quaternion product: `Xyz` builds `q = qx * qy * qz`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EulerOrder {
    /// `qx * qy * qz`
    Xyz,
    /// `qx * qz * qy`
    Xzy,
    /// `qy * qx * qz`
    Yxz,
    /// `qy * qz * qx`
    Yzx,
    /// `qz * qx * qy`
    Zxy,
    /// `qz * qy * qx`
    Zyx,
}

impl EulerOrder {
    /// Every supported order, in lexical order of their names.
    pub const ALL: [Self; 6] = [
        Self::Xyz,
        Self::Xzy,
        Self::Yxz,
        Self::Yzx,
        Self::Zxy,
        Self::Zyx,
    ];

    /// Lowercase three-letter name (`"xyz"`, `"zyx"`, ...).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xyz => "xyz",
            Self::Xzy => "xzy",
            Self::Yxz => "yxz",
            Self::Yzx => "yzx",
            Self::Zxy => "zxy",
            Self::Zyx => "zyx",
        }
    }
}

impl Default for EulerOrder {
    fn default() -> Self {
        DEFAULT_EULER_ORDER
    }
}

impl fmt::Display for EulerOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the lowercase three-letter order names produced by `Display`.
impl FromStr for EulerOrder {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| {
                debug!(order = s, "rejected unknown Euler angle order");
                MathError::UnknownEulerOrder(s.to_owned())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_round_trips_through_from_str() {
        for order in EulerOrder::ALL {
            assert_eq!(order.to_string().parse::<EulerOrder>(), Ok(order));
        }
    }

    #[test]
    fn default_is_zyx() {
        assert_eq!(EulerOrder::default(), EulerOrder::Zyx);
    }

    #[test]
    fn rejects_unknown_and_uppercase_names() {
        for bad in ["abc", "XYZ", "xy", "", "xyzx"] {
            assert_eq!(
                bad.parse::<EulerOrder>(),
                Err(MathError::UnknownEulerOrder(bad.to_owned()))
            );
        }
    }
}
