//! Interpolation kinds and the built-in interpolator functions.
//!
//! An interpolator has the shape `(a, b, t) -> R`: it blends two
//! neighboring keyframe values by the factor `t`, where `t = 0` is `a` and
//! `t = 1` is `b`. Extrapolation feeds it factors outside of `[0, 1]`.

use std::fmt;

use crate::util::{
    diagnostic, f16, Bool, DualQuat, Error, IVec2, IVec3, IVec4, NamedEnum, Quat, Result, UVec2,
    UVec3, UVec4, Unknown, Vec2, Vec3, Vec4,
};

/// Interpolator function stored alongside a track.
pub type Interpolator<V, R> = fn(&V, &V, f32) -> R;

/// Interpolation kind of a track.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Interpolation {
    /// Hold the earlier value until the next keyframe.
    Constant = 0,
    /// Linear blend (normalized for rotations).
    Linear = 1,
    /// Caller-supplied interpolator.
    Custom = 2,
}

impl Interpolation {
    /// Case name without the enum path.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Constant => "Constant",
            Self::Linear => "Linear",
            Self::Custom => "Custom",
        }
    }
}

impl NamedEnum for Interpolation {
    const PATH: &'static str = "animation::Interpolation";
}

impl TryFrom<u8> for Interpolation {
    type Error = Unknown<Interpolation>;

    fn try_from(v: u8) -> std::result::Result<Self, Self::Error> {
        match v {
            0 => Ok(Self::Constant),
            1 => Ok(Self::Linear),
            2 => Ok(Self::Custom),
            _ => Err(Unknown::new(v)),
        }
    }
}

impl fmt::Debug for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", Self::PATH, self.name())
    }
}

/// Values with a linear blend.
pub trait Interpolate: Copy {
    /// Blend `a` towards `b`; `t` may lie outside of `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    #[inline]
    fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        a + (b - a) * t
    }
}

impl Interpolate for f64 {
    #[inline]
    fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        a + (b - a) * t as f64
    }
}

impl Interpolate for f16 {
    #[inline]
    fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        f16::from_f32(<f32 as Interpolate>::lerp(&a.to_f32(), &b.to_f32(), t))
    }
}

impl Interpolate for u32 {
    #[inline]
    fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        ((1.0 - t) * *a as f32 + t * *b as f32) as u32
    }
}

impl Interpolate for i32 {
    #[inline]
    fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        ((1.0 - t) * *a as f32 + t * *b as f32) as i32
    }
}

impl Interpolate for Bool {
    #[inline]
    fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        select(a, b, t)
    }
}

macro_rules! impl_interpolate_float_vec {
    ($($ty:ty),*) => {
        $(
            impl Interpolate for $ty {
                #[inline]
                fn lerp(a: &Self, b: &Self, t: f32) -> Self {
                    a.lerp(*b, t)
                }
            }
        )*
    };
}

impl_interpolate_float_vec!(Vec2, Vec3, Vec4);

// Integer vectors are blended in float space and truncated back.
macro_rules! impl_interpolate_int_vec {
    ($($ty:ty => $as_float:ident, $back:ident);* $(;)?) => {
        $(
            impl Interpolate for $ty {
                #[inline]
                fn lerp(a: &Self, b: &Self, t: f32) -> Self {
                    a.$as_float().lerp(b.$as_float(), t).$back()
                }
            }
        )*
    };
}

impl_interpolate_int_vec! {
    IVec2 => as_vec2, as_ivec2;
    IVec3 => as_vec3, as_ivec3;
    IVec4 => as_vec4, as_ivec4;
    UVec2 => as_vec2, as_uvec2;
    UVec3 => as_vec3, as_uvec3;
    UVec4 => as_vec4, as_uvec4;
}

impl Interpolate for Quat {
    /// Normalized lerp along the shortest path.
    #[inline]
    fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        a.lerp(*b, t)
    }
}

impl Interpolate for DualQuat {
    #[inline]
    fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        a.nlerp(*b, t)
    }
}

/// Constant interpolation: `a` until the factor reaches 1, then `b`.
#[inline]
pub fn select<V: Copy>(a: &V, b: &V, t: f32) -> V {
    if t < 1.0 {
        *a
    } else {
        *b
    }
}

/// Linear interpolation.
#[inline]
pub fn lerp<V: Interpolate>(a: &V, b: &V, t: f32) -> V {
    V::lerp(a, b, t)
}

const INTERPOLATOR_FOR: &str = "animation::interpolator_for";

/// Built-in interpolator for an interpolation kind.
///
/// Fails for [`Interpolation::Custom`], which has no built-in function.
pub fn try_interpolator_for<V: Interpolate>(interpolation: Interpolation) -> Result<Interpolator<V, V>> {
    match interpolation {
        Interpolation::Constant => Ok(select::<V> as Interpolator<V, V>),
        Interpolation::Linear => Ok(lerp::<V> as Interpolator<V, V>),
        Interpolation::Custom => Err(Error::UnsupportedInterpolation {
            op: INTERPOLATOR_FOR,
            interpolation,
        }),
    }
}

/// Like [`try_interpolator_for`], reporting failure and returning `None`.
pub fn interpolator_for<V: Interpolate>(interpolation: Interpolation) -> Option<Interpolator<V, V>> {
    try_interpolator_for(interpolation)
        .map_err(|e| diagnostic::report(&e))
        .ok()
}
