// Copyright 2024 narray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use alloc::vec::Vec;
use std::hash;

use crate::imp_prelude::*;
use crate::iterators::Iter;

impl<A, K: Access> Clone for NArray<A, K>
{
    /// Return another handle to the same elements: the buffer is shared,
    /// not copied. Use [`.to_owned()`](NArray::to_owned) for a deep copy.
    fn clone(&self) -> Self
    {
        NArray {
            data: self.data.clone(),
            ptr: self.ptr,
            sizes: self.sizes.clone(),
            steps: self.steps.clone(),
            access: self.access,
        }
    }
}

impl<A, K: Access> Default for NArray<A, K>
{
    /// Create an empty array: no buffer, zero dimensions.
    fn default() -> Self
    {
        Self::empty_with_ndim(0)
    }
}

impl<A, B, K, L> PartialEq<NArray<B, L>> for NArray<A, K>
where
    A: PartialEq<B>,
    K: Access,
    L: Access,
{
    /// Return `true` if the arrays have the same extents and all elements
    /// at the same locations are equal. Any two empty arrays are equal.
    fn eq(&self, rhs: &NArray<B, L>) -> bool
    {
        if self.is_empty() || rhs.is_empty() {
            return self.is_empty() && rhs.is_empty();
        }
        self.sizes() == rhs.sizes() && self.zip_ptrs(rhs, |a, b| unsafe { *a == *b })
    }
}

impl<A: Eq, K: Access> Eq for NArray<A, K> {}

impl<A, K> hash::Hash for NArray<A, K>
where
    A: hash::Hash,
    K: Access,
{
    fn hash<H: hash::Hasher>(&self, state: &mut H)
    {
        // all empty arrays compare equal, whatever their dimensionality
        if self.is_empty() {
            return;
        }
        self.sizes().hash(state);
        self.visit_ptrs(|p| {
            unsafe { (*p).hash(state) };
            true
        });
    }
}

impl<'a, A: Clone, K: Access> IntoIterator for &'a NArray<A, K>
{
    type Item = A;
    type IntoIter = Iter<'a, A, K>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.iter()
    }
}

impl<A> From<NArray<A>> for ConstNArray<A>
{
    /// Give up write access to the elements.
    ///
    /// ```
    /// use narray::{ConstNArray, NArray};
    ///
    /// let a = NArray::from_shape_vec(2, vec![1, 2]).unwrap();
    /// let c = ConstNArray::from(a.clone());
    /// a.set_at(&[0], 5).unwrap();
    /// assert_eq!(c.at(&[0]), Ok(5));
    /// ```
    fn from(array: NArray<A>) -> Self
    {
        array.with_access()
    }
}

impl<A> From<Vec<A>> for NArray<A>
{
    /// Create a one-dimensional array from a vector (no copying needed).
    /// An empty vector gives an empty one-dimensional array.
    ///
    /// ```
    /// use narray::NArray;
    ///
    /// let a = NArray::from(vec![1., 2., 3.]);
    /// assert_eq!(a.sizes(), &[3]);
    /// ```
    fn from(v: Vec<A>) -> Self
    {
        if v.is_empty() {
            return Self::empty_with_ndim(1);
        }
        Self::from_vec_unchecked(Sizes::from(&[v.len()][..]), v)
    }
}

impl<A, K: Access> FromIterator<A> for NArray<A, K>
{
    /// Create a one-dimensional array from an iterable.
    fn from_iter<I>(iterable: I) -> Self
    where I: IntoIterator<Item = A>
    {
        NArray::from(iterable.into_iter().collect::<Vec<A>>()).with_access()
    }
}

#[cfg(test)]
mod tests
{
    use crate::NArray;
    use alloc::vec::Vec;

    #[test]
    fn equality_ignores_layout()
    {
        let a = NArray::from_shape_vec((2, 3), (0..6).collect()).unwrap();
        let b = a.to_owned();
        assert_eq!(a, b);
        assert_eq!(a.t().t(), b);
        assert_ne!(a.flip(0).unwrap(), b);
        assert_ne!(a.reshape((3, 2)).unwrap(), b);
        assert_eq!(NArray::<u8>::new(), NArray::<u8>::default());
        let mut c = b.clone();
        c.clear();
        assert_eq!(c, NArray::<i32>::new());
        assert_ne!(c, b);
    }

    #[test]
    fn collect_from_iter()
    {
        let a: NArray<i32> = (1..4).collect();
        assert_eq!(a.sizes(), &[3]);
        assert_eq!((&a).into_iter().collect::<Vec<_>>(), [1, 2, 3]);
    }
}
