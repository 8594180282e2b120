// Copyright 2024 narray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use alloc::vec::Vec;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::data_repr::Buffer;
use crate::dimension;
use crate::extension::nonnull::nonnull_offset;
use crate::imp_prelude::*;
use crate::Arc;

// internal "builder-like" methods
impl<A, K: Access> NArray<A, K>
{
    /// An empty array of `ndim` dimensions, all of extent zero.
    pub(crate) fn empty_with_ndim(ndim: usize) -> Self
    {
        NArray {
            data: None,
            ptr: NonNull::dangling(),
            sizes: Sizes::zeros(ndim),
            steps: Steps::zeros(ndim),
            access: PhantomData,
        }
    }

    /// Wrap a new buffer holding exactly the elements of a row-major array
    /// of extents `sizes`.
    pub(crate) fn from_buffer(buffer: Buffer, ptr: NonNull<A>, sizes: Sizes) -> Self
    {
        let steps = dimension::default_steps(&sizes);
        NArray {
            data: Some(Arc::new(buffer)),
            ptr,
            sizes,
            steps,
            access: PhantomData,
        }
    }

    /// Adopt `v` as a fresh row-major array of extents `sizes`.
    ///
    /// `v.len()` must equal the product of `sizes`.
    pub(crate) fn from_vec_unchecked(sizes: Sizes, v: Vec<A>) -> Self
    {
        debug_assert_eq!(v.len(), sizes.iter().product::<usize>());
        let (buffer, ptr) = Buffer::from_vec(v);
        Self::from_buffer(buffer, ptr, sizes)
    }

    /// Create an array sharing this array's buffer, with the base moved by
    /// `offset` elements and the given layout.
    ///
    /// ## Safety
    ///
    /// The caller must ensure that every location of the new layout
    /// addresses an element this array's buffer holds.
    pub(crate) unsafe fn derive(&self, offset: isize, sizes: Sizes, steps: Steps) -> Self
    {
        debug_assert!(self.data.is_some());
        debug_assert_eq!(sizes.len(), steps.len());
        NArray {
            data: self.data.clone(),
            ptr: nonnull_offset(self.ptr, offset),
            sizes,
            steps,
            access: PhantomData,
        }
    }

    /// Create an array over the same elements with another access marker.
    pub(crate) fn with_access<L: Access>(self) -> NArray<A, L>
    {
        NArray {
            data: self.data,
            ptr: self.ptr,
            sizes: self.sizes,
            steps: self.steps,
            access: PhantomData,
        }
    }

    /// Create an array of another element type over the same buffer.
    ///
    /// ## Safety
    ///
    /// Every location of the new layout must address a valid, properly
    /// aligned `U` inside this array's buffer.
    pub(crate) unsafe fn with_elem<U>(&self, ptr: NonNull<U>, sizes: Sizes, steps: Steps) -> NArray<U, K>
    {
        NArray {
            data: self.data.clone(),
            ptr,
            sizes,
            steps,
            access: PhantomData,
        }
    }

    pub(crate) fn buffer(&self) -> Option<&Buffer>
    {
        self.data.as_deref()
    }
}
