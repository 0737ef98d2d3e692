//! Non-owning typed view of one animation track.

use std::fmt;
use std::ops::Range;

use bytemuck::Pod;

use super::extrapolation::Extrapolation;
use super::interpolate::{interpolate, interpolate_strict};
use super::interpolation::{try_interpolator_for, Interpolate, Interpolation, Interpolator};
use super::key::KeyTime;
use super::strided::StridedView;
use crate::util::Result;

/// Keys, values and the way to evaluate them.
///
/// `V` is the stored value type and `R` the result type; they differ when
/// the interpolator converts, e.g. from packed integers to floats. The view
/// borrows its data and is only valid as long as the data is.
pub struct TrackView<'a, K, V, R = V> {
    keys: StridedView<'a, K>,
    values: StridedView<'a, V>,
    interpolation: Interpolation,
    interpolator: Interpolator<V, R>,
    before: Extrapolation,
    after: Extrapolation,
}

impl<K, V, R> Clone for TrackView<'_, K, V, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, R> Copy for TrackView<'_, K, V, R> {}

fn default_result<V, R: Default>(_: &V, _: &V, _: f32) -> R {
    R::default()
}

impl<'a, K: KeyTime, V: Pod, R: Default> TrackView<'a, K, V, R> {
    /// View holding the first and last value outside of the key range.
    pub fn new(
        keys: StridedView<'a, K>,
        values: StridedView<'a, V>,
        interpolation: Interpolation,
        interpolator: Interpolator<V, R>,
    ) -> Self {
        Self {
            keys,
            values,
            interpolation,
            interpolator,
            before: Extrapolation::default(),
            after: Extrapolation::default(),
        }
    }

    /// View with a caller-supplied interpolator.
    pub fn custom(keys: StridedView<'a, K>, values: StridedView<'a, V>, interpolator: Interpolator<V, R>) -> Self {
        Self::new(keys, values, Interpolation::Custom, interpolator)
    }

    pub fn with_extrapolation(mut self, before: Extrapolation, after: Extrapolation) -> Self {
        self.before = before;
        self.after = after;
        self
    }

    #[inline]
    pub fn keys(&self) -> StridedView<'a, K> {
        self.keys
    }

    #[inline]
    pub fn values(&self) -> StridedView<'a, V> {
        self.values
    }

    /// Number of keyframes.
    #[inline]
    pub fn size(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    #[inline]
    pub fn interpolator(&self) -> Interpolator<V, R> {
        self.interpolator
    }

    /// Extrapolation before the first keyframe.
    #[inline]
    pub fn before(&self) -> Extrapolation {
        self.before
    }

    /// Extrapolation after the last keyframe.
    #[inline]
    pub fn after(&self) -> Extrapolation {
        self.after
    }

    /// Time range from the first to the last key.
    pub fn duration(&self) -> Range<K> {
        match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => first..last,
            _ => K::default()..K::default(),
        }
    }

    /// Value at `time`, searching from scratch.
    pub fn at(&self, time: K) -> R {
        let mut hint = 0;
        self.at_with(time, &mut hint)
    }

    /// Value at `time`, with the lookup starting at `hint`.
    pub fn at_with(&self, time: K, hint: &mut usize) -> R {
        interpolate(self.keys, self.values, self.before, self.after, self.interpolator, time, hint)
    }

    /// Value at `time` without boundary handling; see
    /// [`interpolate_strict`](super::interpolate_strict).
    pub fn at_strict(&self, time: K, hint: &mut usize) -> R {
        interpolate_strict(self.keys, self.values, self.interpolator, time, hint)
    }
}

impl<'a, K: KeyTime, V: Pod + Interpolate + Default> TrackView<'a, K, V, V> {
    /// View using the built-in interpolator for `interpolation`.
    pub fn from_interpolation(
        keys: StridedView<'a, K>,
        values: StridedView<'a, V>,
        interpolation: Interpolation,
    ) -> Result<Self> {
        Ok(Self::new(keys, values, interpolation, try_interpolator_for(interpolation)?))
    }
}

impl<K: KeyTime, V: Pod, R: Default> Default for TrackView<'_, K, V, R> {
    /// Empty view evaluating to `R::default()` everywhere.
    fn default() -> Self {
        Self::custom(StridedView::empty(), StridedView::empty(), default_result::<V, R>)
    }
}

impl<K: KeyTime + fmt::Debug, V: Pod, R> fmt::Debug for TrackView<'_, K, V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackView")
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
    use crate::animation::lerp;
    use crate::util::{f16, Vec3};

    const KEYS: [f32; 4] = [0.0, 2.0, 4.0, 5.0];
    const VALUES: [f32; 4] = [3.0, 1.0, 2.5, 0.5];

    #[test]
    fn test_view_accessors() {
        let view = TrackView::from_interpolation((&KEYS).into(), (&VALUES).into(), Interpolation::Linear)
            .expect("built-in")
            .with_extrapolation(Extrapolation::Extrapolate, Extrapolation::HoldDefault);
        assert_eq!(view.size(), 4);
        assert_eq!(view.values().len(), 4);
        assert_eq!(view.interpolation(), Interpolation::Linear);
        assert_eq!(view.before(), Extrapolation::Extrapolate);
        assert_eq!(view.after(), Extrapolation::HoldDefault);
        assert_eq!(view.duration(), 0.0..5.0);
        assert_eq!(view.at(-1.0), 4.0);
        assert_eq!(view.at(6.0), 0.0);
    }

    #[test]
    fn test_view_hint() {
        let view = TrackView::new((&KEYS).into(), (&VALUES).into(), Interpolation::Linear, lerp::<f32>);
        let mut hint = 0;
        assert_eq!(view.at_with(1.5, &mut hint), 1.5);
        assert_eq!(hint, 0);
        assert_eq!(view.at_with(4.75, &mut hint), 1.0);
        assert_eq!(hint, 2);
        assert_eq!(view.at_strict(6.0, &mut hint), -1.5);
        assert_eq!(hint, 2);
    }

    #[test]
    fn test_view_converting_interpolator() {
        let halves = VALUES.map(f16::from_f32);
        let view: TrackView<'_, f32, f16, Vec3> = TrackView::custom((&KEYS).into(), (&halves).into(), |a, b, t| {
            Vec3::splat(lerp(&a.to_f32(), &b.to_f32(), t))
        });
        assert_eq!(view.interpolation(), Interpolation::Custom);
        assert_eq!(view.at(4.75), Vec3::splat(1.0));
    }

    #[test]
    fn test_default_view() {
        let view = TrackView::<f32, Vec3>::default();
        assert_eq!(view.size(), 0);
        assert_eq!(view.duration(), 0.0..0.0);
        assert_eq!(view.at(1.0), Vec3::ZERO);
    }
}
