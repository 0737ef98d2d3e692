//! Strided, non-owning views over typed elements stored in bytes.
//!
//! Keys and values of a track usually live interleaved in one record
//! buffer, e.g. `[time, position, rotation][time, position, rotation]...`,
//! so a view addresses `len` elements that are `stride` bytes apart. The
//! stride may be larger than the element to skip over sibling fields.

use std::fmt;
use std::marker::PhantomData;
use std::mem::size_of;

use bytemuck::Pod;

use crate::util::{Error, Result};

const NEW: &str = "animation::StridedView::new";

/// View of `len` elements of type `T`, `stride` bytes apart.
///
/// Elements are read by value with unaligned loads, so the bytes may sit at
/// any alignment.
pub struct StridedView<'a, T> {
    data: &'a [u8],
    len: usize,
    stride: usize,
    _marker: PhantomData<&'a [T]>,
}

impl<T> Clone for StridedView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StridedView<'_, T> {}

impl<'a, T: Pod> StridedView<'a, T> {
    /// View with no elements.
    pub const fn empty() -> Self {
        Self {
            data: &[],
            len: 0,
            stride: size_of::<T>(),
            _marker: PhantomData,
        }
    }

    /// View starting at the first byte of `data`.
    ///
    /// Fails if the last element would reach past the end of `data`.
    pub fn new(data: &'a [u8], len: usize, stride: usize) -> Result<Self> {
        let needed = match len {
            0 => Some(0),
            n => (n - 1)
                .checked_mul(stride)
                .and_then(|last| last.checked_add(size_of::<T>())),
        };
        match needed {
            Some(needed) if needed <= data.len() => Ok(Self {
                data: &data[..needed],
                len,
                stride,
                _marker: PhantomData,
            }),
            _ => Err(Error::ViewOutOfBounds {
                op: NEW,
                count: len,
                stride,
                size: data.len(),
            }),
        }
    }

    /// Contiguous view over a typed slice.
    pub fn from_slice(slice: &'a [T]) -> Self {
        Self {
            data: bytemuck::cast_slice(slice),
            len: slice.len(),
            stride: size_of::<T>(),
            _marker: PhantomData,
        }
    }

    /// View of one field of every record in `records`.
    ///
    /// `offset` is the byte offset of the field inside `S`, usually from
    /// `std::mem::offset_of!`.
    pub fn field<S: Pod>(records: &'a [S], offset: usize) -> Result<Self> {
        let bytes: &[u8] = bytemuck::cast_slice(records);
        let data = bytes.get(offset..).unwrap_or(&[]);
        Self::new(data, records.len(), size_of::<S>())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Distance in bytes between consecutive elements.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Element at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<T> {
        (index < self.len).then(|| self.read(index))
    }

    #[inline]
    pub fn first(&self) -> Option<T> {
        self.get(0)
    }

    #[inline]
    pub fn last(&self) -> Option<T> {
        self.len.checked_sub(1).map(|i| self.read(i))
    }

    /// The first `len` elements (all of them if `len` is larger).
    pub fn prefix(&self, len: usize) -> Self {
        let len = len.min(self.len);
        let needed = if len == 0 { 0 } else { (len - 1) * self.stride + size_of::<T>() };
        Self {
            data: &self.data[..needed],
            len,
            stride: self.stride,
            _marker: PhantomData,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + 'a {
        let view = *self;
        (0..view.len).map(move |i| view.read(i))
    }

    /// Copy all elements out.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Unchecked against `len`; panics if the bytes run out.
    #[inline]
    pub(crate) fn read(&self, index: usize) -> T {
        let start = index * self.stride;
        bytemuck::pod_read_unaligned(&self.data[start..start + size_of::<T>()])
    }
}

impl<T: Pod> Default for StridedView<'_, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, T: Pod> From<&'a [T]> for StridedView<'a, T> {
    fn from(slice: &'a [T]) -> Self {
        Self::from_slice(slice)
    }
}

impl<'a, T: Pod, const N: usize> From<&'a [T; N]> for StridedView<'a, T> {
    fn from(array: &'a [T; N]) -> Self {
        Self::from_slice(array)
    }
}

impl<'a, T: Pod> From<&'a Vec<T>> for StridedView<'a, T> {
    fn from(vec: &'a Vec<T>) -> Self {
        Self::from_slice(vec)
    }
}

impl<T: Pod + fmt::Debug> fmt::Debug for StridedView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::Vec3;
    use bytemuck::Zeroable;

    #[derive(Clone, Copy, Pod, Zeroable)]
    #[repr(C)]
    struct Record {
        time: f32,
        position: Vec3,
    }

    #[test]
    fn test_contiguous() {
        let data = [1.0f32, 2.0, 3.0];
        let view = StridedView::from_slice(&data);
        assert_eq!(view.len(), 3);
        assert_eq!(view.stride(), 4);
        assert_eq!(view.get(1), Some(2.0));
        assert_eq!(view.get(3), None);
        assert_eq!(view.last(), Some(3.0));
        assert_eq!(view.to_vec(), data.to_vec());
    }

    #[test]
    fn test_interleaved_fields() {
        let records = [
            Record { time: 0.0, position: Vec3::new(1.0, 2.0, 3.0) },
            Record { time: 5.0, position: Vec3::new(4.0, 5.0, 6.0) },
        ];
        let times = StridedView::<f32>::field(&records, std::mem::offset_of!(Record, time))
            .expect("fits");
        let positions = StridedView::<Vec3>::field(&records, std::mem::offset_of!(Record, position))
            .expect("fits");
        assert_eq!(times.stride(), 16);
        assert_eq!(times.to_vec(), vec![0.0, 5.0]);
        assert_eq!(positions.get(1), Some(Vec3::new(4.0, 5.0, 6.0)));
    }

    #[test]
    fn test_unaligned_bytes() {
        let mut bytes = vec![0u8; 9];
        bytes[1..5].copy_from_slice(bytemuck::bytes_of(&1.5f32));
        bytes[5..9].copy_from_slice(bytemuck::bytes_of(&2.5f32));
        let view = StridedView::<f32>::new(&bytes[1..], 2, 4).expect("fits");
        assert_eq!(view.to_vec(), vec![1.5, 2.5]);
    }

    #[test]
    fn test_out_of_bounds() {
        let bytes = [0u8; 10];
        let err = StridedView::<f32>::new(&bytes, 3, 4).unwrap_err();
        assert_eq!(
            err.to_string(),
            "animation::StridedView::new(): view of 3 elements with stride 4 doesn't fit into 10 bytes"
        );
        assert!(StridedView::<f32>::new(&bytes, 0, 4).is_ok());
        assert!(StridedView::<f32>::new(&bytes, 2, 6).is_ok());
    }

    #[test]
    fn test_prefix() {
        let data = [1u32, 2, 3, 4];
        let view = StridedView::from_slice(&data).prefix(2);
        assert_eq!(view.to_vec(), vec![1, 2]);
        assert_eq!(StridedView::from_slice(&data).prefix(10).len(), 4);
        assert!(StridedView::from_slice(&data).prefix(0).is_empty());
    }
}
