//! Keyframe bracket lookup.
//!
//! Finds the pair of keys `(i, i + 1)` around a query time. Queries during
//! playback are almost always in the same or a neighboring bracket as the
//! previous one, so the caller keeps a `hint` with the last bracket index
//! and the lookup probes it before falling back to binary search.
//!
//! With `N` keys the bracket index is always in `0..=N-2`, and for a time
//! equal to a key the bracket starts at that key. The exception is the last
//! key, which is the end of the last bracket.

use super::key::KeyTime;
use super::strided::StridedView;

/// Where a query time lies relative to the keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Locality {
    /// There are no keys.
    Empty,
    /// Strictly before the first key.
    Before,
    /// Inside the key range, ends included.
    During,
    /// Strictly after the last key.
    After,
}

/// Result of a keyframe lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bracket {
    /// Index of the lower key. For `Before` this is the first bracket, for
    /// `After` the last one; both are what extrapolation works with.
    pub index: usize,
    pub locality: Locality,
}

impl Bracket {
    #[inline]
    const fn new(index: usize, locality: Locality) -> Self {
        Self { index, locality }
    }
}

/// Find the bracket containing `time`, updating `hint` to its index.
///
/// Any `hint` value is accepted; one that is out of range or far from the
/// answer only costs a binary search. With fewer than two keys the hint is
/// reset to 0.
pub fn lookup<K: KeyTime>(keys: StridedView<'_, K>, time: K, hint: &mut usize) -> Bracket {
    let n = keys.len();
    if n == 0 {
        *hint = 0;
        return Bracket::new(0, Locality::Empty);
    }
    if n == 1 {
        *hint = 0;
        let key = keys.read(0);
        let locality = if time < key {
            Locality::Before
        } else if time > key {
            Locality::After
        } else {
            Locality::During
        };
        return Bracket::new(0, locality);
    }

    let last = n - 2;
    if time < keys.read(0) {
        *hint = 0;
        return Bracket::new(0, Locality::Before);
    }
    if time > keys.read(n - 1) {
        *hint = last;
        return Bracket::new(last, Locality::After);
    }

    let index = probe(keys, time, *hint).unwrap_or_else(|| search(keys, time));
    *hint = index;
    Bracket::new(index, Locality::During)
}

/// Whether bracket `i` holds `time`, given `time` is inside the key range.
#[inline]
fn contains<K: KeyTime>(keys: StridedView<'_, K>, i: usize, time: K) -> bool {
    let last = keys.len() - 2;
    keys.read(i) <= time && (i == last || time < keys.read(i + 1))
}

/// Check the hinted bracket and its two neighbors.
fn probe<K: KeyTime>(keys: StridedView<'_, K>, time: K, hint: usize) -> Option<usize> {
    let last = keys.len() - 2;
    if hint > last {
        return None;
    }
    if contains(keys, hint, time) {
        return Some(hint);
    }
    if hint < last && contains(keys, hint + 1, time) {
        return Some(hint + 1);
    }
    if hint > 0 && contains(keys, hint - 1, time) {
        return Some(hint - 1);
    }
    None
}

/// Binary search for the last key <= time, clamped to a valid bracket.
fn search<K: KeyTime>(keys: StridedView<'_, K>, time: K) -> usize {
    let n = keys.len();
    let mut lo = 0;
    let mut hi = n;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if keys.read(mid) <= time {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo.saturating_sub(1).min(n - 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: [f32; 4] = [0.0, 2.0, 4.0, 5.0];

    fn find(time: f32, hint: usize) -> (Bracket, usize) {
        let mut hint = hint;
        let bracket = lookup(StridedView::from_slice(&KEYS), time, &mut hint);
        (bracket, hint)
    }

    #[test]
    fn test_lookup_inside() {
        assert_eq!(find(1.5, 0), (Bracket::new(0, Locality::During), 0));
        assert_eq!(find(4.75, 0), (Bracket::new(2, Locality::During), 2));
        assert_eq!(find(3.0, 2), (Bracket::new(1, Locality::During), 1));
    }

    #[test]
    fn test_lookup_exact_keys() {
        assert_eq!(find(0.0, 0).0.index, 0);
        assert_eq!(find(2.0, 0).0.index, 1);
        assert_eq!(find(4.0, 0).0.index, 2);
        // The last key closes the last bracket
        assert_eq!(find(5.0, 0).0, Bracket::new(2, Locality::During));
    }

    #[test]
    fn test_lookup_outside() {
        assert_eq!(find(-1.0, 2), (Bracket::new(0, Locality::Before), 0));
        assert_eq!(find(6.0, 0), (Bracket::new(2, Locality::After), 2));
    }

    #[test]
    fn test_lookup_any_hint() {
        for hint in [0, 1, 2, 3, 405780454, usize::MAX] {
            for (time, index) in [(0.5, 0), (2.0, 1), (3.9, 1), (4.75, 2), (5.0, 2)] {
                assert_eq!(find(time, hint), (Bracket::new(index, Locality::During), index), "time {time} hint {hint}");
            }
        }
    }

    #[test]
    fn test_lookup_small() {
        let mut hint = 7;
        let empty = StridedView::<f32>::empty();
        assert_eq!(lookup(empty, 1.0, &mut hint).locality, Locality::Empty);
        assert_eq!(hint, 0);

        let one = [3.0f32];
        let view = StridedView::from_slice(&one);
        hint = 5;
        assert_eq!(lookup(view, 1.0, &mut hint), Bracket::new(0, Locality::Before));
        assert_eq!(hint, 0);
        assert_eq!(lookup(view, 3.0, &mut hint).locality, Locality::During);
        assert_eq!(lookup(view, 4.0, &mut hint).locality, Locality::After);
    }

    #[test]
    fn test_lookup_duplicate_keys() {
        // The later of two equal keys is the authoritative one
        let keys = [0.0f32, 2.0, 2.0, 5.0];
        let view = StridedView::from_slice(&keys);
        for start in 0..4 {
            let mut hint = start;
            assert_eq!(lookup(view, 2.0, &mut hint).index, 2, "hint {start}");
        }

        let keys = [0.0f32, 5.0, 5.0];
        let mut hint = 0;
        assert_eq!(lookup(StridedView::from_slice(&keys), 5.0, &mut hint).index, 1);
    }

    #[test]
    fn test_lookup_monotonic_playback() {
        let keys: Vec<f32> = (0..100).map(|i| i as f32).collect();
        let view = StridedView::from_slice(&keys);
        let mut hint = 0;
        let mut time = 0.0f32;
        while time < 99.0 {
            let bracket = lookup(view, time, &mut hint);
            assert_eq!(bracket.index, time.floor() as usize);
            time += 0.25;
        }
        // And backwards
        while time > 0.0 {
            time -= 0.25;
            let bracket = lookup(view, time, &mut hint);
            assert_eq!(bracket.index, (time.floor() as usize).min(98));
        }
    }
}
