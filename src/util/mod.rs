//! Utility types and functions.
//!
//! This module contains fundamental types used throughout the library:
//! - [`AnimationTrackType`] / [`TrackValue`] - Element type tags
//! - [`Error`] / [`Result`] - Error handling
//! - [`DiagnosticCapture`] - Redirectable diagnostic channel
//! - Math type re-exports from glam and half

mod track_type;
mod error;
mod math;
mod raw;
pub mod diagnostic;

pub use track_type::*;
pub use error::*;
pub use math::*;
pub use raw::*;
pub use diagnostic::{init_tracing, DiagnosticCapture};
