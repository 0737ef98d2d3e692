//! Keyframe time types.

use crate::util::TrackValue;

/// Scalar types usable as keyframe times.
pub trait KeyTime: TrackValue + PartialOrd {
    /// Normalized position of `time` inside `[a, b]`.
    ///
    /// Unclamped, so times outside of the interval give factors below 0 or
    /// above 1. A zero-length interval gives 1: the later key wins.
    fn factor(a: Self, b: Self, time: Self) -> f32;

    fn to_f64(self) -> f64;
}

impl KeyTime for f32 {
    #[inline]
    fn factor(a: Self, b: Self, time: Self) -> f32 {
        let span = b - a;
        if span == 0.0 {
            1.0
        } else {
            (time - a) / span
        }
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl KeyTime for f64 {
    #[inline]
    fn factor(a: Self, b: Self, time: Self) -> f32 {
        let span = b - a;
        if span == 0.0 {
            1.0
        } else {
            ((time - a) / span) as f32
        }
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor() {
        assert_eq!(f32::factor(4.0, 5.0, 4.75), 0.75);
        assert_eq!(f32::factor(0.0, 2.0, -1.0), -0.5);
        assert_eq!(f32::factor(4.0, 5.0, 6.0), 2.0);
        assert_eq!(f64::factor(0.0, 2.0, 1.5), 0.75);
    }

    #[test]
    fn test_factor_zero_span() {
        assert_eq!(f32::factor(2.0, 2.0, 2.0), 1.0);
        assert_eq!(f64::factor(2.0, 2.0, 1.0), 1.0);
    }
}
