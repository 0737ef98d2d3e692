//! Evaluating a keyframe sequence at a given time.
//!
//! [`interpolate`] handles every input: empty and single-key sequences and
//! times outside of the key range, the latter according to the
//! [`Extrapolation`] policies. [`interpolate_strict`] only does the bracket
//! lookup and the blend; times outside of the range simply extend the
//! first or last segment.
//!
//! Both report malformed input on the diagnostic channel and return the
//! default result. The `try_` variants return the error instead.

use bytemuck::Pod;

use super::extrapolation::Extrapolation;
use super::key::KeyTime;
use super::lookup::{lookup, Locality};
use super::strided::StridedView;
use crate::util::{diagnostic, Error, Result};

const INTERPOLATE: &str = "animation::interpolate";
const INTERPOLATE_STRICT: &str = "animation::interpolate_strict";

/// Value of a keyframe sequence at `time`.
///
/// `hint` is the caller's lookup state; see [`lookup`](super::lookup::lookup).
/// Fails only if `keys` and `values` differ in length, leaving `hint`
/// untouched.
pub fn try_interpolate<K, V, R, F>(
    keys: StridedView<'_, K>,
    values: StridedView<'_, V>,
    before: Extrapolation,
    after: Extrapolation,
    interpolator: F,
    time: K,
    hint: &mut usize,
) -> Result<R>
where
    K: KeyTime,
    V: Pod,
    R: Default,
    F: Fn(&V, &V, f32) -> R,
{
    if keys.len() != values.len() {
        return Err(Error::SizeMismatch {
            op: INTERPOLATE,
            keys: keys.len(),
            values: values.len(),
        });
    }

    let bracket = lookup(keys, time, hint);
    let outside = |policy: Extrapolation, edge: usize| match policy {
        Extrapolation::HoldDefault => R::default(),
        Extrapolation::HoldConstant => {
            let v = values.read(edge);
            interpolator(&v, &v, 0.0)
        }
        Extrapolation::Extrapolate => blend(keys, values, &interpolator, bracket.index, time),
    };

    let result = match bracket.locality {
        Locality::Empty => R::default(),
        // A single key covers all of time
        _ if keys.len() == 1 => {
            let v = values.read(0);
            interpolator(&v, &v, 0.0)
        }
        Locality::Before => outside(before, 0),
        Locality::After => outside(after, keys.len() - 1),
        Locality::During => blend(keys, values, &interpolator, bracket.index, time),
    };
    Ok(result)
}

/// Like [`try_interpolate`], reporting a size mismatch and returning
/// `R::default()`.
pub fn interpolate<K, V, R, F>(
    keys: StridedView<'_, K>,
    values: StridedView<'_, V>,
    before: Extrapolation,
    after: Extrapolation,
    interpolator: F,
    time: K,
    hint: &mut usize,
) -> R
where
    K: KeyTime,
    V: Pod,
    R: Default,
    F: Fn(&V, &V, f32) -> R,
{
    try_interpolate(keys, values, before, after, interpolator, time, hint).unwrap_or_else(|e| {
        diagnostic::report(&e);
        R::default()
    })
}

/// Value of a keyframe sequence at `time`, without boundary handling.
///
/// Needs at least two keys and as many values. Times outside of the key
/// range are evaluated on the first or last segment.
pub fn try_interpolate_strict<K, V, R, F>(
    keys: StridedView<'_, K>,
    values: StridedView<'_, V>,
    interpolator: F,
    time: K,
    hint: &mut usize,
) -> Result<R>
where
    K: KeyTime,
    V: Pod,
    F: Fn(&V, &V, f32) -> R,
{
    if keys.len() < 2 {
        return Err(Error::InsufficientKeyframes {
            op: INTERPOLATE_STRICT,
            count: keys.len(),
        });
    }
    if keys.len() != values.len() {
        return Err(Error::SizeMismatch {
            op: INTERPOLATE_STRICT,
            keys: keys.len(),
            values: values.len(),
        });
    }

    let bracket = lookup(keys, time, hint);
    Ok(blend(keys, values, &interpolator, bracket.index, time))
}

/// Like [`try_interpolate_strict`], reporting malformed input and returning
/// `R::default()`.
pub fn interpolate_strict<K, V, R, F>(
    keys: StridedView<'_, K>,
    values: StridedView<'_, V>,
    interpolator: F,
    time: K,
    hint: &mut usize,
) -> R
where
    K: KeyTime,
    V: Pod,
    R: Default,
    F: Fn(&V, &V, f32) -> R,
{
    try_interpolate_strict(keys, values, interpolator, time, hint).unwrap_or_else(|e| {
        diagnostic::report(&e);
        R::default()
    })
}

#[inline]
fn blend<K, V, R, F>(keys: StridedView<'_, K>, values: StridedView<'_, V>, interpolator: &F, i: usize, time: K) -> R
where
    K: KeyTime,
    V: Pod,
    F: Fn(&V, &V, f32) -> R,
{
    let t = K::factor(keys.read(i), keys.read(i + 1), time);
    interpolator(&values.read(i), &values.read(i + 1), t)
}
