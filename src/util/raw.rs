//! Raw `u8` decoding for the tag enums.
//!
//! Tags arrive from importers as plain bytes. Values that don't map to a
//! known case decode into [`Unknown`], which still prints something useful:
//! `trade::AnimationTrackType(0xde)`.

use std::fmt;
use std::marker::PhantomData;

/// Enum with a fully qualified display path.
pub trait NamedEnum {
    /// Path printed in front of case names, e.g. `animation::Extrapolation`.
    const PATH: &'static str;
}

/// A raw value that doesn't correspond to any case of `E`.
pub struct Unknown<E> {
    value: u8,
    _enum: PhantomData<fn() -> E>,
}

impl<E> Unknown<E> {
    #[inline]
    pub const fn new(value: u8) -> Self {
        Self { value, _enum: PhantomData }
    }

    /// The undecodable raw value.
    #[inline]
    pub const fn value(&self) -> u8 {
        self.value
    }
}

impl<E> Clone for Unknown<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Unknown<E> {}

impl<E> PartialEq for Unknown<E> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<E> Eq for Unknown<E> {}

impl<E: NamedEnum> fmt::Debug for Unknown<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(0x{:x})", E::PATH, self.value)
    }
}

impl<E: NamedEnum> fmt::Display for Unknown<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl<E: NamedEnum> std::error::Error for Unknown<E> {}
