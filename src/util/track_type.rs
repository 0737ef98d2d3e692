//! Track element types - the tags stored for type-erased tracks.

use bytemuck::{Pod, Zeroable};
use std::fmt;

use super::math::{f16, DualQuat, IVec2, IVec3, IVec4, Quat, UVec2, UVec3, UVec4, Vec2, Vec3, Vec4};
use super::raw::{NamedEnum, Unknown};

/// Type of the keys, values or results of an animation track.
///
/// Stored next to each type-erased track so the typed accessors can check
/// a request before reinterpreting bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum AnimationTrackType {
    /// [`Bool`]
    Bool = 1,
    /// `f32`
    Float = 2,
    /// `f64`
    Double = 3,
    /// `f16`
    Half = 4,
    /// `u32`
    UnsignedInt = 5,
    /// `i32`
    Int = 6,
    /// [`Vec2`]
    Vector2 = 7,
    /// [`UVec2`]
    Vector2ui = 8,
    /// [`IVec2`]
    Vector2i = 9,
    /// [`Vec3`]
    Vector3 = 10,
    /// [`UVec3`]
    Vector3ui = 11,
    /// [`IVec3`]
    Vector3i = 12,
    /// [`Vec4`]
    Vector4 = 13,
    /// [`UVec4`]
    Vector4ui = 14,
    /// [`IVec4`]
    Vector4i = 15,
    /// [`Quat`]
    Quaternion = 16,
    /// [`DualQuat`]
    DualQuaternion = 17,
}

impl AnimationTrackType {
    /// Size in bytes of one element of this type.
    pub const fn num_bytes(self) -> usize {
        match self {
            Self::Bool => 1,
            Self::Half => 2,
            Self::Float | Self::UnsignedInt | Self::Int => 4,
            Self::Double | Self::Vector2 | Self::Vector2ui | Self::Vector2i => 8,
            Self::Vector3 | Self::Vector3ui | Self::Vector3i => 12,
            Self::Vector4 | Self::Vector4ui | Self::Vector4i | Self::Quaternion => 16,
            Self::DualQuaternion => 32,
        }
    }

    /// Case name without the enum path.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::Half => "Half",
            Self::UnsignedInt => "UnsignedInt",
            Self::Int => "Int",
            Self::Vector2 => "Vector2",
            Self::Vector2ui => "Vector2ui",
            Self::Vector2i => "Vector2i",
            Self::Vector3 => "Vector3",
            Self::Vector3ui => "Vector3ui",
            Self::Vector3i => "Vector3i",
            Self::Vector4 => "Vector4",
            Self::Vector4ui => "Vector4ui",
            Self::Vector4i => "Vector4i",
            Self::Quaternion => "Quaternion",
            Self::DualQuaternion => "DualQuaternion",
        }
    }

    /// Raw tag value.
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}

impl NamedEnum for AnimationTrackType {
    const PATH: &'static str = "trade::AnimationTrackType";
}

impl TryFrom<u8> for AnimationTrackType {
    type Error = Unknown<AnimationTrackType>;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Ok(match v {
            1 => Self::Bool,
            2 => Self::Float,
            3 => Self::Double,
            4 => Self::Half,
            5 => Self::UnsignedInt,
            6 => Self::Int,
            7 => Self::Vector2,
            8 => Self::Vector2ui,
            9 => Self::Vector2i,
            10 => Self::Vector3,
            11 => Self::Vector3ui,
            12 => Self::Vector3i,
            13 => Self::Vector4,
            14 => Self::Vector4ui,
            15 => Self::Vector4i,
            16 => Self::Quaternion,
            17 => Self::DualQuaternion,
            _ => return Err(Unknown::new(v)),
        })
    }
}

impl fmt::Debug for AnimationTrackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", Self::PATH, self.name())
    }
}

impl fmt::Display for AnimationTrackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Types that can be stored in a type-erased animation track.
///
/// Sealed: every implementor maps to exactly one [`AnimationTrackType`], so
/// a matching tag means a matching Rust type.
pub trait TrackValue: Pod + Zeroable + Copy + Default + sealed::Sealed + 'static {
    /// The corresponding tag.
    const TRACK_TYPE: AnimationTrackType;
}

macro_rules! impl_track_value {
    ($($ty:ty => $tag:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl TrackValue for $ty {
                const TRACK_TYPE: AnimationTrackType = AnimationTrackType::$tag;
            }
        )*
    };
}

impl_track_value! {
    Bool => Bool,
    f32 => Float,
    f64 => Double,
    f16 => Half,
    u32 => UnsignedInt,
    i32 => Int,
    Vec2 => Vector2,
    UVec2 => Vector2ui,
    IVec2 => Vector2i,
    Vec3 => Vector3,
    UVec3 => Vector3ui,
    IVec3 => Vector3i,
    Vec4 => Vector4,
    UVec4 => Vector4ui,
    IVec4 => Vector4i,
    Quat => Quaternion,
    DualQuat => DualQuaternion,
}

/// Boolean with guaranteed 1-byte storage, usable inside byte buffers.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct Bool(u8);

impl Bool {
    pub const TRUE: Self = Self(1);
    pub const FALSE: Self = Self(0);

    #[inline]
    pub const fn new(v: bool) -> Self {
        Self(v as u8)
    }

    #[inline]
    pub const fn get(self) -> bool {
        self.0 != 0
    }
}

impl From<bool> for Bool {
    #[inline]
    fn from(v: bool) -> Self {
        Self::new(v)
    }
}

impl From<Bool> for bool {
    #[inline]
    fn from(v: Bool) -> Self {
        v.get()
    }
}

impl fmt::Debug for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
