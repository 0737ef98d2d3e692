//! Type-erased track descriptors.

use std::any::TypeId;
use std::fmt;
use std::mem::size_of;

use bytemuck::Pod;

use super::track_target::AnimationTrackTarget;
use crate::animation::{
    try_interpolator_for, Extrapolation, Interpolate, Interpolation, Interpolator, KeyTime, StridedView,
    TrackView,
};
use crate::util::{AnimationTrackType, Error, Result, TrackValue};

/// Strided run of elements inside a byte buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ByteRegion {
    /// Offset of the first element.
    pub offset: usize,
    /// Number of elements.
    pub count: usize,
    /// Distance in bytes between consecutive elements.
    pub stride: usize,
}

impl ByteRegion {
    /// Region with no elements.
    pub const EMPTY: Self = Self::new(0, 0, 0);

    #[inline]
    pub const fn new(offset: usize, count: usize, stride: usize) -> Self {
        Self { offset, count, stride }
    }

    /// Tightly packed elements of type `T`.
    #[inline]
    pub const fn packed<T>(offset: usize, count: usize) -> Self {
        Self::new(offset, count, size_of::<T>())
    }

    /// Typed view of this region inside `data`.
    pub fn view<'a, T: Pod>(&self, data: &'a [u8]) -> Result<StridedView<'a, T>> {
        let bytes = data.get(self.offset..).unwrap_or(&[]);
        StridedView::new(bytes, self.count, self.stride)
    }
}

/// Interpolator function pointer with its type erased.
#[derive(Clone, Copy)]
struct ErasedInterpolator {
    ptr: *const (),
    type_id: TypeId,
}

// SAFETY: `ptr` is always a plain function pointer, and those are Send + Sync.
unsafe impl Send for ErasedInterpolator {}
unsafe impl Sync for ErasedInterpolator {}

impl ErasedInterpolator {
    fn new<V: 'static, R: 'static>(f: Interpolator<V, R>) -> Self {
        Self {
            ptr: f as *const (),
            type_id: TypeId::of::<Interpolator<V, R>>(),
        }
    }

    fn get<V: 'static, R: 'static>(&self) -> Option<Interpolator<V, R>> {
        if self.type_id != TypeId::of::<Interpolator<V, R>>() {
            return None;
        }
        // SAFETY: `ptr` was created from an `Interpolator<V, R>`, as the
        // matching type id proves.
        Some(unsafe { std::mem::transmute::<*const (), Interpolator<V, R>>(self.ptr) })
    }
}

/// One track of an [`AnimationData`](super::AnimationData).
///
/// Holds the element type tags, the target and byte regions with the keys
/// and values inside the animation's shared buffer. Doesn't own any data.
#[derive(Clone, Copy)]
pub struct AnimationTrackData {
    key_type: AnimationTrackType,
    value_type: AnimationTrackType,
    result_type: AnimationTrackType,
    target: AnimationTrackTarget,
    target_id: u32,
    keys: ByteRegion,
    values: ByteRegion,
    interpolation: Interpolation,
    interpolator: ErasedInterpolator,
    before: Extrapolation,
    after: Extrapolation,
}

impl AnimationTrackData {
    /// Track with `f32` keys and the built-in interpolator for
    /// `interpolation`.
    ///
    /// Fails for [`Interpolation::Custom`]; use
    /// [`with_interpolator`](Self::with_interpolator) for that.
    pub fn new<V: TrackValue + Interpolate>(
        target: AnimationTrackTarget,
        target_id: u32,
        keys: ByteRegion,
        values: ByteRegion,
        interpolation: Interpolation,
    ) -> Result<Self> {
        let interpolator = try_interpolator_for::<V>(interpolation)?;
        Ok(Self::with_interpolator::<f32, V, V>(
            target,
            target_id,
            keys,
            values,
            interpolation,
            interpolator,
        ))
    }

    /// Track with an explicit interpolator; all three types are recorded
    /// from the type parameters.
    pub fn with_interpolator<K: KeyTime, V: TrackValue, R: TrackValue>(
        target: AnimationTrackTarget,
        target_id: u32,
        keys: ByteRegion,
        values: ByteRegion,
        interpolation: Interpolation,
        interpolator: Interpolator<V, R>,
    ) -> Self {
        Self {
            key_type: K::TRACK_TYPE,
            value_type: V::TRACK_TYPE,
            result_type: R::TRACK_TYPE,
            target,
            target_id,
            keys,
            values,
            interpolation,
            interpolator: ErasedInterpolator::new(interpolator),
            before: Extrapolation::default(),
            after: Extrapolation::default(),
        }
    }

    pub fn with_extrapolation(mut self, before: Extrapolation, after: Extrapolation) -> Self {
        self.before = before;
        self.after = after;
        self
    }

    #[inline]
    pub fn key_type(&self) -> AnimationTrackType {
        self.key_type
    }

    #[inline]
    pub fn value_type(&self) -> AnimationTrackType {
        self.value_type
    }

    #[inline]
    pub fn result_type(&self) -> AnimationTrackType {
        self.result_type
    }

    #[inline]
    pub fn target(&self) -> AnimationTrackTarget {
        self.target
    }

    /// Index of the targeted object, for targets that are instanced.
    #[inline]
    pub fn target_id(&self) -> u32 {
        self.target_id
    }

    #[inline]
    pub fn keys(&self) -> ByteRegion {
        self.keys
    }

    #[inline]
    pub fn values(&self) -> ByteRegion {
        self.values
    }

    #[inline]
    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    #[inline]
    pub fn before(&self) -> Extrapolation {
        self.before
    }

    #[inline]
    pub fn after(&self) -> Extrapolation {
        self.after
    }

    /// Typed view over `data`, checking the requested types against the tags.
    pub(crate) fn view<'a, K, V, R>(&self, op: &'static str, data: &'a [u8]) -> Result<TrackView<'a, K, V, R>>
    where
        K: KeyTime,
        V: TrackValue,
        R: TrackValue,
    {
        if V::TRACK_TYPE != self.value_type {
            return Err(Error::TypeMismatch { op, actual: self.value_type });
        }
        if R::TRACK_TYPE != self.result_type {
            return Err(Error::ResultTypeMismatch { op, actual: self.result_type });
        }
        if K::TRACK_TYPE != self.key_type {
            return Err(Error::KeyTypeMismatch { op, actual: self.key_type });
        }
        // Tags map to exactly one type each, so this only fails if they lie
        let interpolator = self
            .interpolator
            .get::<V, R>()
            .ok_or(Error::TypeMismatch { op, actual: self.value_type })?;

        Ok(TrackView::new(self.keys.view(data)?, self.values.view(data)?, self.interpolation, interpolator)
            .with_extrapolation(self.before, self.after))
    }

    /// First and last key, if the keys are readable from `data`.
    pub(crate) fn key_range(&self, data: &[u8]) -> Option<(f64, f64)> {
        fn ends<K: KeyTime>(region: &ByteRegion, data: &[u8]) -> Option<(f64, f64)> {
            let keys = region.view::<K>(data).ok()?;
            Some((keys.first()?.to_f64(), keys.last()?.to_f64()))
        }
        match self.key_type {
            AnimationTrackType::Float => ends::<f32>(&self.keys, data),
            AnimationTrackType::Double => ends::<f64>(&self.keys, data),
            _ => None,
        }
    }
}

impl fmt::Debug for AnimationTrackData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationTrackData")
            .field("key_type", &self.key_type)
            .field("value_type", &self.value_type)
            .field("result_type", &self.result_type)
            .field("target", &self.target)
            .field("target_id", &self.target_id)
            .field("keys", &self.keys)
            .field("values", &self.values)
            .field("interpolation", &self.interpolation)
            .field("before", &self.before)
            .field("after", &self.after)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::{IVec3, Vec3};

    #[test]
    fn test_region_view() {
        let data: Vec<u8> = bytemuck::cast_slice(&[1.0f32, 2.0, 3.0, 4.0]).to_vec();
        let odd = ByteRegion::new(4, 2, 8).view::<f32>(&data).expect("fits");
        assert_eq!(odd.to_vec(), vec![2.0, 4.0]);
        assert!(ByteRegion::packed::<f32>(8, 3).view::<f32>(&data).is_err());
        assert!(ByteRegion::EMPTY.view::<Vec3>(&[]).expect("empty").is_empty());
    }

    #[test]
    fn test_tags_from_types() {
        let track = AnimationTrackData::with_interpolator::<f32, IVec3, Vec3>(
            AnimationTrackTarget::Scaling3D,
            7,
            ByteRegion::EMPTY,
            ByteRegion::EMPTY,
            Interpolation::Custom,
            |a, b, t| a.as_vec3().lerp(b.as_vec3(), t),
        );
        assert_eq!(track.key_type(), AnimationTrackType::Float);
        assert_eq!(track.value_type(), AnimationTrackType::Vector3i);
        assert_eq!(track.result_type(), AnimationTrackType::Vector3);
        assert_eq!(track.target_id(), 7);
        assert_eq!(track.before(), Extrapolation::HoldConstant);
    }

    #[test]
    fn test_erased_interpolator() {
        let erased = ErasedInterpolator::new::<f32, f32>(crate::animation::lerp::<f32>);
        let f = erased.get::<f32, f32>().expect("same type");
        assert_eq!(f(&1.0, &3.0, 0.5), 2.0);
        assert!(erased.get::<f32, Vec3>().is_none());
        assert!(erased.get::<Vec3, Vec3>().is_none());
    }

    #[test]
    fn test_view_checks_tags() {
        let track = AnimationTrackData::new::<Vec3>(
            AnimationTrackTarget::Translation3D,
            0,
            ByteRegion::EMPTY,
            ByteRegion::EMPTY,
            Interpolation::Linear,
        )
        .expect("built-in");
        assert!(track.view::<f32, Vec3, Vec3>("test", &[]).is_ok());
        assert!(matches!(
            track.view::<f64, Vec3, Vec3>("test", &[]),
            Err(Error::KeyTypeMismatch { actual: AnimationTrackType::Float, .. })
        ));
    }
}
