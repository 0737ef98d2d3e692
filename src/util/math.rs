//! Math type re-exports and extra POD value types.
//!
//! This module re-exports the glam types tracks are stored as and provides
//! the few value types glam doesn't have (dual quaternions).

// Re-export glam types
pub use glam::{
    // Single precision vectors
    Vec2, Vec3, Vec4,
    // Integer vectors
    IVec2, IVec3, IVec4,
    UVec2, UVec3, UVec4,
    // Quaternions
    Quat,
};

pub use half::f16;

use bytemuck::{Pod, Zeroable};
use std::fmt;

/// Dual quaternion with single precision (rotation + translation).
#[derive(Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct DualQuat {
    pub real: Quat,
    pub dual: Quat,
}

impl DualQuat {
    /// Identity transform.
    pub const IDENTITY: Self = Self {
        real: Quat::IDENTITY,
        dual: Quat::from_xyzw(0.0, 0.0, 0.0, 0.0),
    };

    #[inline]
    pub const fn new(real: Quat, dual: Quat) -> Self {
        Self { real, dual }
    }

    /// Rigid transform from a rotation followed by a translation.
    pub fn from_rotation_translation(rotation: Quat, translation: Vec3) -> Self {
        let t = Quat::from_xyzw(translation.x, translation.y, translation.z, 0.0);
        Self {
            real: rotation,
            dual: (t * rotation) * 0.5,
        }
    }

    /// Rotation part.
    #[inline]
    pub fn rotation(&self) -> Quat {
        self.real
    }

    /// Translation part, assuming a unit dual quaternion.
    pub fn translation(&self) -> Vec3 {
        let t = (self.dual * 2.0) * self.real.conjugate();
        Vec3::new(t.x, t.y, t.z)
    }

    /// Component-wise blend along the shortest path, renormalized.
    pub fn nlerp(self, mut other: Self, t: f32) -> Self {
        if self.real.dot(other.real) < 0.0 {
            other.real = -other.real;
            other.dual = -other.dual;
        }
        let real = self.real * (1.0 - t) + other.real * t;
        let dual = self.dual * (1.0 - t) + other.dual * t;
        let len = real.length();
        if len > 0.0 {
            Self { real: real / len, dual: dual / len }
        } else {
            Self::IDENTITY
        }
    }
}

impl Default for DualQuat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Debug for DualQuat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DualQuat({:?} + e{:?})", self.real, self.dual)
    }
}
