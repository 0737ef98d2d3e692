//! Behavior outside of the keyframe range.

use std::fmt;

use crate::util::{NamedEnum, Unknown};

/// What a track evaluates to before its first and after its last keyframe.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Extrapolation {
    /// Default-constructed result.
    HoldDefault = 0,
    /// Value of the first / last keyframe.
    #[default]
    HoldConstant = 1,
    /// First / last segment evaluated with a factor below 0 / above 1.
    Extrapolate = 2,
}

impl Extrapolation {
    /// Case name without the enum path.
    pub const fn name(self) -> &'static str {
        match self {
            Self::HoldDefault => "HoldDefault",
            Self::HoldConstant => "HoldConstant",
            Self::Extrapolate => "Extrapolate",
        }
    }
}

impl NamedEnum for Extrapolation {
    const PATH: &'static str = "animation::Extrapolation";
}

impl TryFrom<u8> for Extrapolation {
    type Error = Unknown<Extrapolation>;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Self::HoldDefault),
            1 => Ok(Self::HoldConstant),
            2 => Ok(Self::Extrapolate),
            _ => Err(Unknown::new(v)),
        }
    }
}

impl fmt::Debug for Extrapolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", Self::PATH, self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extrapolation_debug() {
        let unknown = Extrapolation::try_from(0xde).unwrap_err();
        assert_eq!(
            format!("{:?} {:?}", Extrapolation::HoldDefault, unknown),
            "animation::Extrapolation::HoldDefault animation::Extrapolation(0xde)"
        );
    }

    #[test]
    fn test_extrapolation_from_u8() {
        assert_eq!(Extrapolation::try_from(2), Ok(Extrapolation::Extrapolate));
        assert_eq!(Extrapolation::try_from(3).unwrap_err().value(), 3);
    }
}
