//! Imported animation data.
//!
//! This module provides:
//! - [`AnimationData`] - A clip owning one buffer shared by all its tracks
//! - [`AnimationTrackData`] - Type-erased track descriptor
//! - [`AnimationTrackTarget`] - What a track animates
//! - [`ByteRegion`] - Strided run of elements inside the buffer

mod animation_data;
mod track_data;
mod track_target;

pub use animation_data::{AnimationData, ImporterState};
pub use track_data::{AnimationTrackData, ByteRegion};
pub use track_target::{AnimationTrackTarget, CustomTarget};
pub use crate::util::AnimationTrackType;
