//! Keyframe interpolation.
//!
//! This module provides:
//! - [`StridedView`] - Typed views over interleaved bytes
//! - [`lookup`] - Hint-accelerated keyframe bracket search
//! - [`interpolate`] / [`interpolate_strict`] - Evaluating keyframes at a time
//! - [`Extrapolation`] / [`Interpolation`] - Track evaluation policies
//! - [`TrackView`] / [`Track`] - Borrowed and owning tracks
//!
//! ## Example
//!
//! ```
//! use animtrack::animation::{interpolate, lerp, Extrapolation, StridedView};
//!
//! let keys = [0.0f32, 2.0, 4.0, 5.0];
//! let values = [3.0f32, 1.0, 2.5, 0.5];
//!
//! let mut hint = 0;
//! let v = interpolate(
//!     StridedView::from_slice(&keys),
//!     StridedView::from_slice(&values),
//!     Extrapolation::Extrapolate,
//!     Extrapolation::Extrapolate,
//!     lerp::<f32>,
//!     4.75,
//!     &mut hint,
//! );
//! assert_eq!(v, 1.0);
//! assert_eq!(hint, 2);
//! ```

mod extrapolation;
mod interpolate;
mod interpolation;
mod key;
mod lookup;
mod strided;
mod track;
mod track_view;

pub use extrapolation::Extrapolation;
pub use interpolate::{interpolate, interpolate_strict, try_interpolate, try_interpolate_strict};
pub use interpolation::{
    interpolator_for, lerp, select, try_interpolator_for, Interpolate, Interpolation, Interpolator,
};
pub use key::KeyTime;
pub use lookup::{lookup, Bracket, Locality};
pub use strided::StridedView;
pub use track::Track;
pub use track_view::TrackView;
