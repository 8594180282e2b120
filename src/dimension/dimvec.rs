// Copyright 2024 narray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use alloc::vec::Vec;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Deref, DerefMut, Mul, Sub};

use num_traits::Zero;

const CAP: usize = 8;

/// T is usize or isize
enum DimRepr<T>
{
    Inline(u32, [T; CAP]),
    Alloc(Vec<T>),
}

impl<T> Deref for DimRepr<T>
{
    type Target = [T];
    fn deref(&self) -> &[T]
    {
        match *self {
            DimRepr::Inline(len, ref ar) => {
                debug_assert!(len as usize <= ar.len());
                &ar[..len as usize]
            }
            DimRepr::Alloc(ref ar) => ar,
        }
    }
}

impl<T> DerefMut for DimRepr<T>
{
    fn deref_mut(&mut self) -> &mut [T]
    {
        match *self {
            DimRepr::Inline(len, ref mut ar) => {
                debug_assert!(len as usize <= ar.len());
                &mut ar[..len as usize]
            }
            DimRepr::Alloc(ref mut ar) => ar,
        }
    }
}

impl<T: Copy + Zero> DimRepr<T>
{
    fn copy_from(x: &[T]) -> Self
    {
        if x.len() <= CAP {
            let mut arr = [T::zero(); CAP];
            arr[..x.len()].copy_from_slice(x);
            DimRepr::Inline(x.len() as u32, arr)
        } else {
            DimRepr::Alloc(x.to_vec())
        }
    }

    // make an Inline or Alloc version as appropriate
    fn from_vec_auto(v: Vec<T>) -> Self
    {
        if v.len() <= CAP {
            Self::copy_from(&v)
        } else {
            DimRepr::Alloc(v)
        }
    }
}

impl<T: Copy> Clone for DimRepr<T>
{
    fn clone(&self) -> Self
    {
        match *self {
            DimRepr::Inline(len, arr) => DimRepr::Inline(len, arr),
            DimRepr::Alloc(ref v) => DimRepr::Alloc(v.clone()),
        }
    }
}

/// Small vector of per-dimension integers: the extents (`DimVec<usize>`) or
/// the steps (`DimVec<isize>`) of an array.
///
/// Up to eight entries are stored inline, so deriving a view does not touch
/// the heap for ordinary dimensionalities.
pub struct DimVec<T>(DimRepr<T>);

impl<T: Copy> Clone for DimVec<T>
{
    fn clone(&self) -> Self
    {
        DimVec(self.0.clone())
    }
}

/// Extents of an array, one entry per dimension.
pub type Sizes = DimVec<usize>;
/// Address deltas of an array, in elements, one entry per dimension.
pub type Steps = DimVec<isize>;

impl<T: Copy + Zero> DimVec<T>
{
    /// Create an empty vector (zero dimensions).
    #[inline]
    pub fn new() -> Self
    {
        DimVec(DimRepr::Inline(0, [T::zero(); CAP]))
    }

    /// Create a vector of `n` zeros.
    pub fn zeros(n: usize) -> Self
    {
        if n <= CAP {
            DimVec(DimRepr::Inline(n as u32, [T::zero(); CAP]))
        } else {
            DimVec(DimRepr::Alloc(alloc::vec![T::zero(); n]))
        }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize
    {
        self.0.len()
    }

    /// Return `true` when there are no entries.
    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    /// Append `value` as the last entry.
    pub fn push(&mut self, value: T)
    {
        match self.0 {
            DimRepr::Inline(ref mut len, ref mut arr) if (*len as usize) < CAP => {
                arr[*len as usize] = value;
                *len += 1;
            }
            DimRepr::Inline(len, ref arr) => {
                let mut v = Vec::with_capacity(len as usize + 1);
                v.extend_from_slice(&arr[..len as usize]);
                v.push(value);
                self.0 = DimRepr::Alloc(v);
            }
            DimRepr::Alloc(ref mut v) => v.push(value),
        }
    }

    /// Insert `value` at position `i`, shifting later entries back.
    ///
    /// **Panics** if `i > len`.
    pub fn insert(&mut self, i: usize, value: T)
    {
        let len = self.len();
        assert!(i <= len, "DimVec::insert: index {} out of bounds for length {}", i, len);
        self.push(value);
        self[i..].rotate_right(1);
    }

    /// Remove and return the entry at position `i`.
    ///
    /// **Panics** if `i >= len`.
    pub fn remove(&mut self, i: usize) -> T
    {
        let len = self.len();
        assert!(i < len, "DimVec::remove: index {} out of bounds for length {}", i, len);
        let value = self[i];
        self[i..].rotate_left(1);
        self.truncate(len - 1);
        value
    }

    /// Shorten to the first `n` entries; no effect if `n >= len`.
    pub fn truncate(&mut self, n: usize)
    {
        match self.0 {
            DimRepr::Inline(ref mut len, _) => *len = Ord::min(*len as usize, n) as u32,
            DimRepr::Alloc(ref mut v) => v.truncate(n),
        }
    }

    /// Return the first `n` entries.
    ///
    /// **Panics** if `n > len`.
    pub fn head(&self, n: usize) -> Self
    {
        DimVec::from(&self[..n])
    }

    /// Return the entries from position `n` on.
    ///
    /// **Panics** if `n > len`.
    pub fn tail(&self, n: usize) -> Self
    {
        DimVec::from(&self[n..])
    }

    /// Exchange the entries at positions `i` and `j`.
    #[inline]
    pub fn swap(&mut self, i: usize, j: usize)
    {
        self[..].swap(i, j)
    }

    /// Set every entry to zero, keeping the length.
    pub fn clear(&mut self)
    {
        for x in self.iter_mut() {
            *x = T::zero();
        }
    }
}

impl<T: Copy + Zero> Default for DimVec<T>
{
    fn default() -> Self
    {
        DimVec::new()
    }
}

impl<'a, T: Copy + Zero> From<&'a [T]> for DimVec<T>
{
    #[inline]
    fn from(ix: &'a [T]) -> Self
    {
        DimVec(DimRepr::copy_from(ix))
    }
}

impl<T: Copy + Zero> From<Vec<T>> for DimVec<T>
{
    #[inline]
    fn from(ix: Vec<T>) -> Self
    {
        DimVec(DimRepr::from_vec_auto(ix))
    }
}

impl<T: Copy + Zero, const N: usize> From<[T; N]> for DimVec<T>
{
    #[inline]
    fn from(ix: [T; N]) -> Self
    {
        DimVec(DimRepr::copy_from(&ix))
    }
}

impl<T> Deref for DimVec<T>
{
    type Target = [T];
    #[inline]
    fn deref(&self) -> &[T]
    {
        &self.0
    }
}

impl<T> DerefMut for DimVec<T>
{
    #[inline]
    fn deref_mut(&mut self) -> &mut [T]
    {
        &mut self.0
    }
}

impl<'a, T> IntoIterator for &'a DimVec<T>
{
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter
    {
        self[..].iter()
    }
}

impl<T: PartialEq> PartialEq for DimVec<T>
{
    fn eq(&self, rhs: &Self) -> bool
    {
        self[..] == rhs[..]
    }
}

impl<T: Eq> Eq for DimVec<T> {}

impl<T: PartialEq> PartialEq<[T]> for DimVec<T>
{
    fn eq(&self, rhs: &[T]) -> bool
    {
        self[..] == *rhs
    }
}

impl<'a, T: PartialEq> PartialEq<&'a [T]> for DimVec<T>
{
    fn eq(&self, rhs: &&'a [T]) -> bool
    {
        self[..] == **rhs
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for DimVec<T>
{
    fn eq(&self, rhs: &[T; N]) -> bool
    {
        self[..] == rhs[..]
    }
}

impl<T: Hash> Hash for DimVec<T>
{
    fn hash<H: Hasher>(&self, state: &mut H)
    {
        Hash::hash(&self[..], state)
    }
}

impl<T: fmt::Debug> fmt::Debug for DimVec<T>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        fmt::Debug::fmt(&self[..], f)
    }
}

macro_rules! impl_elementwise_op {
    ($trt:ident, $mth:ident, $op:tt) => {
        impl<T> $trt for DimVec<T>
        where T: Copy + Zero + $trt<Output = T>
        {
            type Output = Self;

            /// Elementwise operation.
            ///
            /// **Panics** if the lengths differ.
            fn $mth(mut self, rhs: Self) -> Self
            {
                assert_eq!(self.len(), rhs.len(), "DimVec lengths must match");
                for (a, &b) in self.iter_mut().zip(rhs.iter()) {
                    *a = *a $op b;
                }
                self
            }
        }
    };
}

impl_elementwise_op!(Add, add, +);
impl_elementwise_op!(Sub, sub, -);

impl<T> Mul<T> for DimVec<T>
where T: Copy + Zero + Mul<Output = T>
{
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self
    {
        for a in self.iter_mut() {
            *a = *a * rhs;
        }
        self
    }
}
