//! Animation clip container.
//!
//! [`AnimationData`] owns one byte buffer shared by all of its tracks. The
//! tracks are type-erased [`AnimationTrackData`] descriptors and typed access
//! goes through [`AnimationData::track`] and friends, which check the
//! requested types against the stored tags before handing out a view.

use std::ops::Range;

use super::track_data::AnimationTrackData;
use super::track_target::AnimationTrackTarget;
use crate::animation::{KeyTime, TrackView};
use crate::util::diagnostic::{self, TARGET};
use crate::util::{AnimationTrackType, Error, Result, TrackValue};

/// Identity of the importer-specific object an animation came from.
///
/// Only the address is kept, so it can be compared but never dereferenced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImporterState(usize);

impl ImporterState {
    /// Identity of `state`.
    pub fn of<T: ?Sized>(state: &T) -> Self {
        Self(state as *const T as *const () as usize)
    }

    #[inline]
    pub fn addr(self) -> usize {
        self.0
    }
}

/// Imported animation clip: a byte buffer and the tracks inside it.
#[derive(Clone, Debug)]
pub struct AnimationData {
    data: Vec<u8>,
    tracks: Vec<AnimationTrackData>,
    duration: Range<f64>,
    importer_state: Option<ImporterState>,
}

impl AnimationData {
    /// Takes ownership of `data` and the track descriptors pointing into it.
    ///
    /// Track regions are not validated here; a region that doesn't fit is
    /// reported when the track is accessed.
    pub fn new(data: Vec<u8>, tracks: Vec<AnimationTrackData>, importer_state: Option<ImporterState>) -> Self {
        let duration = tracks
            .iter()
            .filter_map(|t| t.key_range(&data))
            .reduce(|(a0, a1), (b0, b1)| (a0.min(b0), a1.max(b1)))
            .map_or(0.0..0.0, |(start, end)| start..end);

        tracing::debug!(
            target: TARGET,
            tracks = tracks.len(),
            bytes = data.len(),
            "animation data created for {:?}",
            duration
        );

        Self {
            data,
            tracks,
            duration,
            importer_state,
        }
    }

    /// Raw track data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Release the data buffer, dropping the track descriptors.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Union of the key ranges of all tracks.
    #[inline]
    pub fn duration(&self) -> Range<f64> {
        self.duration.clone()
    }

    #[inline]
    pub fn importer_state(&self) -> Option<ImporterState> {
        self.importer_state
    }

    /// All track descriptors.
    #[inline]
    pub fn tracks(&self) -> &[AnimationTrackData] {
        &self.tracks
    }

    fn try_descriptor(&self, op: &'static str, index: usize) -> Result<&AnimationTrackData> {
        self.tracks.get(index).ok_or(Error::IndexOutOfRange {
            op,
            index,
            count: self.tracks.len(),
        })
    }

    fn descriptor(&self, op: &'static str, index: usize) -> Option<&AnimationTrackData> {
        self.try_descriptor(op, index).map_err(|e| diagnostic::report(&e)).ok()
    }

    /// Key time type of track `index`.
    pub fn track_key_type(&self, index: usize) -> Option<AnimationTrackType> {
        self.descriptor("trade::AnimationData::track_key_type", index)
            .map(AnimationTrackData::key_type)
    }

    /// Stored value type of track `index`.
    pub fn track_type(&self, index: usize) -> Option<AnimationTrackType> {
        self.descriptor("trade::AnimationData::track_type", index)
            .map(AnimationTrackData::value_type)
    }

    /// Interpolated result type of track `index`.
    pub fn track_result_type(&self, index: usize) -> Option<AnimationTrackType> {
        self.descriptor("trade::AnimationData::track_result_type", index)
            .map(AnimationTrackData::result_type)
    }

    pub fn track_target(&self, index: usize) -> Option<AnimationTrackTarget> {
        self.descriptor("trade::AnimationData::track_target", index)
            .map(AnimationTrackData::target)
    }

    pub fn track_target_id(&self, index: usize) -> Option<u32> {
        self.descriptor("trade::AnimationData::track_target_id", index)
            .map(AnimationTrackData::target_id)
    }

    /// Typed view of track `index`.
    ///
    /// Checks the index, then the value, result and key types, then that the
    /// regions fit into the buffer.
    pub fn try_track<K, V, R>(&self, index: usize) -> Result<TrackView<'_, K, V, R>>
    where
        K: KeyTime,
        V: TrackValue,
        R: TrackValue,
    {
        const OP: &str = "trade::AnimationData::track";
        self.try_descriptor(OP, index)?.view(OP, &self.data)
    }

    /// Track with `f32` keys and matching value and result types.
    ///
    /// On mismatch reports the error and returns an empty view.
    pub fn track<V: TrackValue>(&self, index: usize) -> TrackView<'_, f32, V> {
        self.keyed_track::<f32, V, V>(index)
    }

    /// Track with `f32` keys and a result type different from `V`.
    pub fn track_as<V: TrackValue, R: TrackValue>(&self, index: usize) -> TrackView<'_, f32, V, R> {
        self.keyed_track::<f32, V, R>(index)
    }

    /// Track with any key time type.
    pub fn keyed_track<K, V, R>(&self, index: usize) -> TrackView<'_, K, V, R>
    where
        K: KeyTime,
        V: TrackValue,
        R: TrackValue,
    {
        self.try_track(index).unwrap_or_else(|e| {
            diagnostic::report(&e);
            TrackView::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{Extrapolation, Interpolation};
    use crate::trade::ByteRegion;
    use crate::util::{DiagnosticCapture, Vec3};

    fn sample() -> AnimationData {
        let keys = [1.0f32, 2.0, 4.0];
        let values = [Vec3::ZERO, Vec3::X, Vec3::Y];
        let mut data: Vec<u8> = bytemuck::cast_slice(&keys).to_vec();
        data.extend_from_slice(bytemuck::cast_slice(&values));
        let slow = [0.5f64, 3.0];
        data.extend_from_slice(bytemuck::cast_slice(&slow));

        let translation = AnimationTrackData::new::<Vec3>(
            AnimationTrackTarget::Translation3D,
            3,
            ByteRegion::packed::<f32>(0, 3),
            ByteRegion::packed::<Vec3>(12, 3),
            Interpolation::Linear,
        )
        .expect("built-in")
        .with_extrapolation(Extrapolation::Extrapolate, Extrapolation::HoldDefault);

        let weight = AnimationTrackData::with_interpolator::<f64, f32, f32>(
            AnimationTrackTarget::custom(200).expect("custom range"),
            0,
            ByteRegion::packed::<f64>(48, 2),
            ByteRegion::packed::<f32>(0, 2),
            Interpolation::Linear,
            crate::animation::lerp::<f32>,
        );

        AnimationData::new(data, vec![translation, weight], None)
    }

    #[test]
    fn test_duration_spans_all_tracks() {
        let anim = sample();
        assert_eq!(anim.track_count(), 2);
        assert_eq!(anim.duration(), 0.5..4.0);
        assert_eq!(AnimationData::new(Vec::new(), Vec::new(), None).duration(), 0.0..0.0);
    }

    #[test]
    fn test_typed_access() {
        let anim = sample();
        let track = anim.track::<Vec3>(0);
        assert_eq!(track.before(), Extrapolation::Extrapolate);
        assert_eq!(track.at(3.0), Vec3::new(0.5, 0.5, 0.0));
        assert_eq!(track.at(5.0), Vec3::ZERO);

        let weight = anim.try_track::<f64, f32, f32>(1).expect("matching types");
        assert_eq!(weight.at(1.75), 1.5);
        assert_eq!(anim.track_key_type(1), Some(AnimationTrackType::Double));
        assert_eq!(anim.track_target(1), AnimationTrackTarget::custom(200));
        assert_eq!(anim.track_target_id(0), Some(3));
    }

    #[test]
    fn test_wrong_key_type() {
        let anim = sample();
        let capture = DiagnosticCapture::new();
        let view = capture.scope(|| anim.track::<f32>(1));
        assert_eq!(view.size(), 0);
        assert_eq!(
            capture.output(),
            "trade::AnimationData::track(): improper key type requested for trade::AnimationTrackType::Double\n"
        );
    }

    #[test]
    fn test_region_past_buffer() {
        let track = AnimationTrackData::new::<f32>(
            AnimationTrackTarget::Rotation2D,
            0,
            ByteRegion::packed::<f32>(0, 2),
            ByteRegion::packed::<f32>(4, 2),
            Interpolation::Constant,
        )
        .expect("built-in");
        let anim = AnimationData::new(vec![0; 8], vec![track], None);
        assert_eq!(anim.duration(), 0.0..0.0);
        assert!(matches!(anim.try_track::<f32, f32, f32>(0), Err(Error::ViewOutOfBounds { .. })));
    }

    #[test]
    fn test_into_data() {
        let anim = sample();
        let len = anim.data().len();
        assert_eq!(anim.into_data().len(), len);
    }
}
