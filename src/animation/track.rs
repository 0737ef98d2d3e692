//! Owning animation track.

use std::fmt;
use std::ops::Range;

use bytemuck::Pod;

use super::extrapolation::Extrapolation;
use super::interpolation::{try_interpolator_for, Interpolate, Interpolation, Interpolator};
use super::key::KeyTime;
use super::strided::StridedView;
use super::track_view::TrackView;
use crate::util::Result;

/// Keyframes stored in their own vectors, for tracks built in code.
///
/// For tracks that live in a shared buffer use
/// [`AnimationData`](crate::trade::AnimationData) instead.
#[derive(Clone)]
pub struct Track<K, V, R = V> {
    keys: Vec<K>,
    values: Vec<V>,
    interpolation: Interpolation,
    interpolator: Interpolator<V, R>,
    before: Extrapolation,
    after: Extrapolation,
}

impl<K: KeyTime, V: Pod, R: Default> Track<K, V, R> {
    /// Track from `(time, value)` pairs.
    ///
    /// Times are expected to be non-decreasing. Unordered keys are not
    /// detected and give unspecified, but not undefined, results.
    pub fn new(
        keyframes: impl IntoIterator<Item = (K, V)>,
        interpolation: Interpolation,
        interpolator: Interpolator<V, R>,
    ) -> Self {
        let (keys, values): (Vec<K>, Vec<V>) = keyframes.into_iter().unzip();
        Self {
            keys,
            values,
            interpolation,
            interpolator,
            before: Extrapolation::default(),
            after: Extrapolation::default(),
        }
    }

    /// Track with a caller-supplied interpolator.
    pub fn custom(keyframes: impl IntoIterator<Item = (K, V)>, interpolator: Interpolator<V, R>) -> Self {
        Self::new(keyframes, Interpolation::Custom, interpolator)
    }

    pub fn with_extrapolation(mut self, before: Extrapolation, after: Extrapolation) -> Self {
        self.before = before;
        self.after = after;
        self
    }

    #[inline]
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    #[inline]
    pub fn values(&self) -> &[V] {
        &self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[inline]
    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    /// View over the stored keyframes.
    pub fn view(&self) -> TrackView<'_, K, V, R> {
        TrackView::new(
            StridedView::from_slice(&self.keys),
            StridedView::from_slice(&self.values),
            self.interpolation,
            self.interpolator,
        )
        .with_extrapolation(self.before, self.after)
    }

    pub fn duration(&self) -> Range<K> {
        self.view().duration()
    }

    pub fn at(&self, time: K) -> R {
        self.view().at(time)
    }

    pub fn at_with(&self, time: K, hint: &mut usize) -> R {
        self.view().at_with(time, hint)
    }

    pub fn at_strict(&self, time: K, hint: &mut usize) -> R {
        self.view().at_strict(time, hint)
    }
}

impl<K: KeyTime, V: Pod + Interpolate + Default> Track<K, V, V> {
    /// Track using the built-in interpolator for `interpolation`.
    pub fn from_interpolation(
        keyframes: impl IntoIterator<Item = (K, V)>,
        interpolation: Interpolation,
    ) -> Result<Self> {
        let interpolator = try_interpolator_for(interpolation)?;
        Ok(Self::new(keyframes, interpolation, interpolator))
    }
}

impl<K: fmt::Debug, V, R> fmt::Debug for Track<K, V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Track")
            .field("keys", &self.keys)
            .field("values", &self.values.len())
            .field("interpolation", &self.interpolation)
            .field("before", &self.before)
            .field("after", &self.after)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::{Error, Quat, Vec3};

    #[test]
    fn test_track_linear() {
        let track = Track::from_interpolation(
            [(0.0f32, Vec3::ZERO), (2.0, Vec3::new(2.0, 0.0, 0.0)), (3.0, Vec3::new(2.0, 1.0, 0.0))],
            Interpolation::Linear,
        )
        .expect("built-in");
        assert_eq!(track.len(), 3);
        assert_eq!(track.duration(), 0.0..3.0);
        assert_eq!(track.at(1.0), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(track.at(2.5), Vec3::new(2.0, 0.5, 0.0));
        // Holds the ends by default
        assert_eq!(track.at(10.0), Vec3::new(2.0, 1.0, 0.0));
        assert_eq!(track.at(-10.0), Vec3::ZERO);
    }

    #[test]
    fn test_track_constant_f64_keys() {
        let track = Track::from_interpolation([(0.0f64, 1i32), (1.0, 5), (2.0, 9)], Interpolation::Constant)
            .expect("built-in")
            .with_extrapolation(Extrapolation::HoldDefault, Extrapolation::HoldDefault);
        let mut hint = 0;
        assert_eq!(track.at_with(0.5, &mut hint), 1);
        assert_eq!(track.at_with(1.0, &mut hint), 5);
        assert_eq!(track.at_with(1.99, &mut hint), 5);
        assert_eq!(hint, 1);
        assert_eq!(track.at_with(2.5, &mut hint), 0);
    }

    #[test]
    fn test_track_custom_result() {
        let track: Track<f32, Quat, Vec3> = Track::custom(
            [(0.0, Quat::IDENTITY), (1.0, Quat::from_rotation_z(std::f32::consts::FRAC_PI_2))],
            |a, b, t| a.lerp(*b, t) * Vec3::X,
        );
        let v = track.at(1.0);
        assert!(v.abs_diff_eq(Vec3::Y, 1e-6));
        assert_eq!(track.interpolation(), Interpolation::Custom);
    }

    #[test]
    fn test_track_custom_has_no_builtin() {
        let err = Track::<f32, f32>::from_interpolation([(0.0, 1.0)], Interpolation::Custom).unwrap_err();
        assert!(matches!(err, Error::UnsupportedInterpolation { .. }));
    }

    #[test]
    fn test_track_debug() {
        let track = Track::from_interpolation([(0.0f32, 1.0f32), (1.0, 2.0)], Interpolation::Linear)
            .expect("built-in");
        assert_eq!(
            format!("{track:?}"),
            "Track { keys: [0.0, 1.0], values: 2, interpolation: animation::Interpolation::Linear, \
             before: animation::Extrapolation::HoldConstant, after: animation::Extrapolation::HoldConstant }"
        );
    }

    #[test]
    fn test_track_unordered_keys() {
        // Unordered input is the caller's problem, but must not panic
        let track = Track::from_interpolation([(2.0f32, 1.0f32), (0.0, 5.0), (1.0, 3.0)], Interpolation::Linear)
            .expect("built-in");
        assert_eq!(track.len(), 3);
        let mut hint = usize::MAX;
        for time in [-1.0, 0.0, 0.5, 1.5, 2.0, 3.0] {
            let v = track.at_with(time, &mut hint);
            assert!(v.is_finite());
            assert!(hint < 2);
        }
    }
}
