//! Error types for animation tracks and containers.
//!
//! Each variant carries the path of the operation that detected it, so the
//! `Display` output is the complete one-line diagnostic, e.g.
//! `animation::interpolate(): keys and values don't have the same size`.

use thiserror::Error;

use crate::animation::Interpolation;
use crate::util::AnimationTrackType;

/// Main error type for interpolation and track access.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Key and value views have different element counts
    #[error("{op}(): keys and values don't have the same size")]
    SizeMismatch {
        op: &'static str,
        keys: usize,
        values: usize,
    },

    /// Strict interpolation needs a bracket to work with
    #[error("{op}(): at least two keyframes required")]
    InsufficientKeyframes { op: &'static str, count: usize },

    /// Track index past the end of the track list
    #[error("{op}(): index out of range")]
    IndexOutOfRange {
        op: &'static str,
        index: usize,
        count: usize,
    },

    /// Requested value type doesn't match the stored tag
    #[error("{op}(): improper type requested for {actual:?}")]
    TypeMismatch {
        op: &'static str,
        actual: AnimationTrackType,
    },

    /// Requested result type doesn't match the stored tag
    #[error("{op}(): improper result type requested for {actual:?}")]
    ResultTypeMismatch {
        op: &'static str,
        actual: AnimationTrackType,
    },

    /// Requested key time type doesn't match the stored tag
    #[error("{op}(): improper key type requested for {actual:?}")]
    KeyTypeMismatch {
        op: &'static str,
        actual: AnimationTrackType,
    },

    /// No built-in interpolator exists for this interpolation kind
    #[error("{op}(): can't deduce interpolator function for {interpolation:?}")]
    UnsupportedInterpolation {
        op: &'static str,
        interpolation: Interpolation,
    },

    /// Strided view reaches past the end of its bytes
    #[error("{op}(): view of {count} elements with stride {stride} doesn't fit into {size} bytes")]
    ViewOutOfBounds {
        op: &'static str,
        count: usize,
        stride: usize,
        size: usize,
    },
}

impl Error {
    /// Path of the operation that produced this error.
    pub fn op(&self) -> &'static str {
        match self {
            Self::SizeMismatch { op, .. }
            | Self::InsufficientKeyframes { op, .. }
            | Self::IndexOutOfRange { op, .. }
            | Self::TypeMismatch { op, .. }
            | Self::ResultTypeMismatch { op, .. }
            | Self::KeyTypeMismatch { op, .. }
            | Self::UnsupportedInterpolation { op, .. }
            | Self::ViewOutOfBounds { op, .. } => op,
        }
    }
}

/// Result type alias for animation operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = Error::SizeMismatch { op: "animation::interpolate", keys: 4, values: 0 };
        assert_eq!(
            e.to_string(),
            "animation::interpolate(): keys and values don't have the same size"
        );

        let e = Error::TypeMismatch {
            op: "trade::AnimationData::track",
            actual: AnimationTrackType::Vector3i,
        };
        assert_eq!(
            e.to_string(),
            "trade::AnimationData::track(): improper type requested for trade::AnimationTrackType::Vector3i"
        );
    }

    #[test]
    fn test_error_op() {
        let e = Error::IndexOutOfRange { op: "trade::AnimationData::track_target", index: 3, count: 1 };
        assert_eq!(e.op(), "trade::AnimationData::track_target");
        assert_eq!(e.to_string(), "trade::AnimationData::track_target(): index out of range");
    }
}
