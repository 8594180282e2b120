// Copyright 2024 narray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use rawpointer::PointerExt;

use crate::dimension::{self, index_to_loc};
use crate::imp_prelude::*;
use crate::traversal::load;

/// Base for array iterators
///
/// Walks the locations of a (condensed) layout in row-major order and
/// yields element pointers.
struct Baseiter<A>
{
    ptr: *mut A,
    sizes: Sizes,
    steps: Steps,
    // the location of the next element, `None` when exhausted
    index: Option<Sizes>,
    remaining: usize,
}

impl<A> Baseiter<A>
{
    /// Creating a Baseiter is unsafe: `ptr`, `sizes` and `steps` must
    /// describe live elements for as long as the iterator is used.
    unsafe fn new(ptr: *mut A, sizes: Sizes, steps: Steps) -> Self
    {
        let remaining = sizes.iter().product();
        let index = if remaining == 0 {
            None
        } else {
            Some(Sizes::zeros(sizes.len()))
        };
        Baseiter {
            ptr,
            sizes,
            steps,
            index,
            remaining,
        }
    }

    fn empty() -> Self
    {
        Baseiter {
            ptr: std::ptr::NonNull::dangling().as_ptr(),
            sizes: Sizes::new(),
            steps: Steps::new(),
            index: None,
            remaining: 0,
        }
    }

    #[inline]
    fn next(&mut self) -> Option<*mut A>
    {
        let index = self.index.as_mut()?;
        let offset = dimension::offset_of(index, &self.steps);
        self.remaining -= 1;
        // advance the odometer, last dimension fastest
        let mut done = true;
        for d in (0..self.sizes.len()).rev() {
            index[d] += 1;
            if index[d] < self.sizes[d] {
                done = false;
                break;
            }
            index[d] = 0;
        }
        if done {
            self.index = None;
        }
        unsafe { Some(self.ptr.offset(offset)) }
    }

    fn fold<Acc, G>(mut self, init: Acc, mut g: G) -> Acc
    where G: FnMut(Acc, *mut A) -> Acc
    {
        let mut accum = init;
        let ndim = self.sizes.len();
        if ndim == 0 {
            if let Some(p) = self.next() {
                accum = g(accum, p);
            }
            return accum;
        }
        let inner = ndim - 1;
        while let Some(mut index) = self.index.take() {
            let stride = self.steps[inner];
            let start = index[inner];
            let len = self.sizes[inner];
            unsafe {
                let row_ptr = self.ptr.offset(dimension::offset_of(&index, &self.steps));
                for i in 0..len - start {
                    accum = g(accum, row_ptr.stride_offset(stride, i));
                }
            }
            self.remaining -= len - start;
            index[inner] = len - 1;
            // step past the end of the row
            let mut done = true;
            for d in (0..ndim).rev() {
                index[d] += 1;
                if index[d] < self.sizes[d] {
                    done = false;
                    break;
                }
                index[d] = 0;
            }
            if !done {
                self.index = Some(index);
            }
        }
        accum
    }
}

/// An iterator over clones of the elements of an array, in row-major order.
///
/// Created with [`NArray::iter`].
pub struct Iter<'a, A, K: Access>
{
    inner: Baseiter<A>,
    life: PhantomData<&'a NArray<A, K>>,
}

impl<'a, A, K: Access> Iter<'a, A, K>
{
    pub(crate) fn new(array: &'a NArray<A, K>) -> Self
    {
        let inner = if array.is_empty() {
            Baseiter::empty()
        } else {
            let (sizes, steps) = dimension::condense(&array.sizes, &array.steps);
            // the borrow of `array` keeps the buffer alive
            unsafe { Baseiter::new(array.ptr.as_ptr(), sizes, steps) }
        };
        Iter {
            inner,
            life: PhantomData,
        }
    }
}

impl<'a, A: Clone, K: Access> Iterator for Iter<'a, A, K>
{
    type Item = A;

    #[inline]
    fn next(&mut self) -> Option<A>
    {
        self.inner.next().map(|p| unsafe { load(p) })
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        (self.inner.remaining, Some(self.inner.remaining))
    }

    fn fold<Acc, G>(self, init: Acc, mut g: G) -> Acc
    where G: FnMut(Acc, A) -> Acc
    {
        self.inner.fold(init, move |acc, p| g(acc, unsafe { load(p) }))
    }
}

impl<'a, A: Clone, K: Access> ExactSizeIterator for Iter<'a, A, K> {}

impl<'a, A: Clone, K: Access> FusedIterator for Iter<'a, A, K> {}

impl<'a, A, K: Access> fmt::Debug for Iter<'a, A, K>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("Iter")
            .field("sizes", &self.inner.sizes)
            .field("steps", &self.inner.steps)
            .field("remaining", &self.inner.remaining)
            .finish()
    }
}

/// An iterator over the sub-arrays of an array with its first `depth`
/// coordinates fixed, in row-major order of those coordinates.
///
/// Created with [`NArray::subarrays`]. Every item shares the buffer of the
/// array.
pub struct SubArrays<A, K: Access>
{
    array: NArray<A, K>,
    depth: usize,
    index: usize,
    len: usize,
}

impl<A, K: Access> SubArrays<A, K>
{
    pub(crate) fn new(array: NArray<A, K>, depth: usize) -> Self
    {
        debug_assert!(depth <= array.ndim());
        let len = if array.is_empty() {
            0
        } else {
            array.sizes[..depth].iter().product()
        };
        SubArrays {
            array,
            depth,
            index: 0,
            len,
        }
    }
}

impl<A, K: Access> Iterator for SubArrays<A, K>
{
    type Item = NArray<A, K>;

    fn next(&mut self) -> Option<Self::Item>
    {
        if self.index >= self.len {
            return None;
        }
        let pos = index_to_loc(self.index, &self.array.sizes[..self.depth]);
        self.index += 1;
        let offset = dimension::offset_of(&pos, &self.array.steps[..self.depth]);
        // `pos` is in bounds, so the sub-array stays within the array
        unsafe {
            Some(self.array.derive(
                offset,
                self.array.sizes.tail(self.depth),
                self.array.steps.tail(self.depth),
            ))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        let n = self.len - self.index;
        (n, Some(n))
    }
}

impl<A, K: Access> ExactSizeIterator for SubArrays<A, K> {}

impl<A, K: Access> FusedIterator for SubArrays<A, K> {}

impl<A, K: Access> fmt::Debug for SubArrays<A, K>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("SubArrays")
            .field("sizes", &self.array.sizes)
            .field("depth", &self.depth)
            .field("index", &self.index)
            .field("len", &self.len)
            .finish()
    }
}
