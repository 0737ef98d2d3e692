//! What an animation track animates.

use std::fmt;

use crate::util::{NamedEnum, Unknown};

/// Raw value of an importer-specific target, always `>= 128`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomTarget(u8);

impl CustomTarget {
    /// Custom target with raw value `v`, or `None` below the custom range.
    #[inline]
    pub const fn new(v: u8) -> Option<Self> {
        if v >= AnimationTrackTarget::CUSTOM_START {
            Some(Self(v))
        } else {
            None
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Scene object property a track is applied to.
///
/// Raw values from `128` up are reserved for importer-specific targets and
/// decode into [`Custom`](AnimationTrackTarget::Custom), keeping the raw
/// value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationTrackTarget {
    /// 2D translation, usually a [`Vec2`](crate::util::Vec2) track
    Translation2D,
    /// 3D translation, usually a [`Vec3`](crate::util::Vec3) track
    Translation3D,
    /// 2D rotation
    Rotation2D,
    /// 3D rotation, usually a [`Quat`](crate::util::Quat) track
    Rotation3D,
    /// 2D scaling
    Scaling2D,
    /// 3D scaling
    Scaling3D,
    /// Importer-specific target
    Custom(CustomTarget),
}

impl AnimationTrackTarget {
    /// First raw value of the custom range.
    pub const CUSTOM_START: u8 = 128;

    /// Raw target value.
    pub const fn to_u8(self) -> u8 {
        match self {
            Self::Translation2D => 0,
            Self::Translation3D => 1,
            Self::Rotation2D => 2,
            Self::Rotation3D => 3,
            Self::Scaling2D => 4,
            Self::Scaling3D => 5,
            Self::Custom(v) => v.get(),
        }
    }

    /// Importer-specific target, or `None` if `v` is below [`CUSTOM_START`](Self::CUSTOM_START).
    #[inline]
    pub const fn custom(v: u8) -> Option<Self> {
        match CustomTarget::new(v) {
            Some(c) => Some(Self::Custom(c)),
            None => None,
        }
    }

    #[inline]
    pub const fn is_custom(self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl NamedEnum for AnimationTrackTarget {
    const PATH: &'static str = "trade::AnimationTrackTarget";
}

impl TryFrom<u8> for AnimationTrackTarget {
    type Error = Unknown<AnimationTrackTarget>;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Self::Translation2D),
            1 => Ok(Self::Translation3D),
            2 => Ok(Self::Rotation2D),
            3 => Ok(Self::Rotation3D),
            4 => Ok(Self::Scaling2D),
            5 => Ok(Self::Scaling3D),
            v => Self::custom(v).ok_or(Unknown::new(v)),
        }
    }
}

impl fmt::Debug for AnimationTrackTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Translation2D => "Translation2D",
            Self::Translation3D => "Translation3D",
            Self::Rotation2D => "Rotation2D",
            Self::Rotation3D => "Rotation3D",
            Self::Scaling2D => "Scaling2D",
            Self::Scaling3D => "Scaling3D",
            Self::Custom(v) => return write!(f, "{}::Custom({})", Self::PATH, v.get()),
        };
        write!(f, "{}::{}", Self::PATH, name)
    }
}
