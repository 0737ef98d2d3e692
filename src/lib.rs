//! # animtrack
//!
//! Keyframe animation tracks: evaluating keyed values at arbitrary times and
//! storing many heterogeneous tracks in one buffer.
//!
//! ## Modules
//!
//! - [`util`] - Basic types (type tags, math, errors, diagnostics)
//! - [`animation`] - Keyframe lookup, interpolation and track views
//! - [`trade`] - Imported animation clips with type-erased tracks
//!
//! ## Example
//!
//! ```
//! use animtrack::prelude::*;
//!
//! let times = [0.0f32, 1.0, 2.0];
//! let positions = [Vec3::ZERO, Vec3::X, Vec3::Y];
//! let mut data: Vec<u8> = bytemuck::cast_slice(&times).to_vec();
//! data.extend_from_slice(bytemuck::cast_slice(&positions));
//!
//! let track = AnimationTrackData::new::<Vec3>(
//!     AnimationTrackTarget::Translation3D,
//!     0,
//!     ByteRegion::packed::<f32>(0, 3),
//!     ByteRegion::packed::<Vec3>(12, 3),
//!     Interpolation::Linear,
//! )?;
//! let anim = AnimationData::new(data, vec![track], None);
//!
//! assert_eq!(anim.track::<Vec3>(0).at(0.5), Vec3::new(0.5, 0.0, 0.0));
//! # Ok::<(), animtrack::Error>(())
//! ```

pub mod util;
pub mod animation;
pub mod trade;

// Re-export commonly used types
pub use util::{AnimationTrackType, Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::util::{AnimationTrackType, DualQuat, Error, Quat, Result, TrackValue, Vec2, Vec3, Vec4};
    pub use crate::animation::{
        interpolate, interpolate_strict, Extrapolation, Interpolate, Interpolation, StridedView, Track, TrackView,
    };
    pub use crate::trade::{AnimationData, AnimationTrackData, AnimationTrackTarget, ByteRegion, ImporterState};
}
