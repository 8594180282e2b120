// Copyright 2024 narray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for narray
//!
use alloc::vec::Vec;
use std::ptr::NonNull;

use crate::data_repr::{Acquire, Buffer};
use crate::dimension;
use crate::error;
use crate::imp_prelude::*;

/// # Constructor Methods
///
/// New arrays have row-major steps: the last dimension has step 1 and each
/// other step is the product of the extents after it. Every extent must be
/// positive; a zero extent fails with `InvalidArgument`.
impl<A> NArray<A>
{
    /// Create an empty array: no buffer, zero dimensions.
    ///
    /// ```
    /// use narray::NArray;
    ///
    /// let a = NArray::<f32>::new();
    /// assert!(a.is_empty());
    /// assert_eq!(a.size(), 0);
    /// ```
    pub fn new() -> Self
    {
        Self::empty_with_ndim(0)
    }

    /// Create an array of default-valued elements.
    ///
    /// ```
    /// use narray::NArray;
    ///
    /// let a = NArray::<i32>::from_shape((2, 3)).unwrap();
    /// assert_eq!(a.size(), 6);
    /// assert_eq!(a.steps(), &[3, 1]);
    /// assert!(a.iter().all(|x| x == 0));
    /// ```
    pub fn from_shape<Sh>(shape: Sh) -> Result<Self, NArrayError>
    where
        Sh: IntoDims,
        A: Default,
    {
        Self::from_shape_gen(shape, A::default)
    }

    /// Create an array with copies of `elem`.
    ///
    /// ```
    /// use narray::NArray;
    ///
    /// let a = NArray::from_elem((2, 2), 1.5).unwrap();
    /// assert_eq!(a.iter().sum::<f64>(), 6.0);
    /// ```
    pub fn from_elem<Sh>(shape: Sh, elem: A) -> Result<Self, NArrayError>
    where
        Sh: IntoDims,
        A: Clone,
    {
        let sizes = shape.into_dims();
        let size = dimension::size_of_shape_checked(&sizes, "from_elem(sizes, elem)")?;
        Ok(Self::from_vec_unchecked(sizes, alloc::vec![elem; size]))
    }

    /// Create an array whose elements are the return values of `f`, called
    /// once per element in row-major order.
    ///
    /// ```
    /// use narray::NArray;
    ///
    /// let mut n = 0;
    /// let a = NArray::from_shape_gen((2, 3), || { n += 1; n }).unwrap();
    /// assert_eq!(a.at(&[1, 0]), Ok(4));
    /// ```
    pub fn from_shape_gen<Sh, F>(shape: Sh, mut f: F) -> Result<Self, NArrayError>
    where
        Sh: IntoDims,
        F: FnMut() -> A,
    {
        let sizes = shape.into_dims();
        let size = dimension::size_of_shape_checked(&sizes, "from_shape_gen(sizes, f)")?;
        let mut v = Vec::with_capacity(size);
        for _ in 0..size {
            v.push(f());
        }
        Ok(Self::from_vec_unchecked(sizes, v))
    }

    /// Create an array by copying the elements of `list`, in row-major
    /// order.
    ///
    /// If `list` does not hold exactly as many elements as the shape, the
    /// result is an empty array of the requested dimensionality.
    ///
    /// ```
    /// use narray::NArray;
    ///
    /// let a = NArray::from_list((2, 2), &[1, 2, 3, 4]).unwrap();
    /// assert_eq!(a.at(&[1, 0]), Ok(3));
    ///
    /// let b = NArray::from_list((2, 2), &[1, 2, 3]).unwrap();
    /// assert!(b.is_empty());
    /// assert_eq!(b.ndim(), 2);
    /// ```
    pub fn from_list<Sh>(shape: Sh, list: &[A]) -> Result<Self, NArrayError>
    where
        Sh: IntoDims,
        A: Clone,
    {
        let sizes = shape.into_dims();
        let size = dimension::size_of_shape_checked(&sizes, "from_list(sizes, list)")?;
        if list.len() != size {
            return Ok(Self::empty_with_ndim(sizes.len()));
        }
        Ok(Self::from_vec_unchecked(sizes, list.to_vec()))
    }

    /// Create an array from the first elements of `iter`, in row-major
    /// order. Items past the size of the shape are not consumed; if `iter`
    /// runs out early, the remaining elements are `A::default()`.
    ///
    /// Errors with `InvalidArgument` if an extent is zero.
    ///
    /// ```
    /// use narray::NArray;
    ///
    /// let a = NArray::from_shape_iter((2, 2), 1..).unwrap();
    /// assert_eq!(a.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    ///
    /// let b = NArray::from_shape_iter(4, vec![7, 8]).unwrap();
    /// assert_eq!(b.iter().collect::<Vec<_>>(), vec![7, 8, 0, 0]);
    /// ```
    pub fn from_shape_iter<Sh, I>(shape: Sh, iter: I) -> Result<Self, NArrayError>
    where
        Sh: IntoDims,
        I: IntoIterator<Item = A>,
        A: Default,
    {
        let sizes = shape.into_dims();
        let size = dimension::size_of_shape_checked(&sizes, "from_shape_iter(sizes, iter)")?;
        let mut v = Vec::with_capacity(size);
        v.extend(iter.into_iter().take(size));
        v.resize_with(size, A::default);
        Ok(Self::from_vec_unchecked(sizes, v))
    }

    /// Create an array that takes ownership of `v` (no copying needed).
    ///
    /// Errors with `InvalidArgument` if an extent is zero or `v.len()` does
    /// not equal the number of elements of the shape.
    ///
    /// ```
    /// use narray::NArray;
    ///
    /// let a = NArray::from_shape_vec((3, 2), vec![0, 1, 2, 3, 4, 5]).unwrap();
    /// assert_eq!(a.at(&[2, 1]), Ok(5));
    /// assert!(NArray::from_shape_vec((3, 2), vec![0; 5]).is_err());
    /// ```
    pub fn from_shape_vec<Sh>(shape: Sh, v: Vec<A>) -> Result<Self, NArrayError>
    where Sh: IntoDims
    {
        const CONTEXT: &str = "from_shape_vec(sizes, v)";
        let sizes = shape.into_dims();
        let size = dimension::size_of_shape_checked(&sizes, CONTEXT)?;
        if v.len() != size {
            return Err(error::invalid_argument(CONTEXT));
        }
        let (buffer, ptr) = Buffer::acquire(Acquire::Owning(v));
        Ok(Self::from_buffer(buffer, ptr, sizes))
    }

    /// Create an array holding a private copy of `data`.
    ///
    /// Errors with `InvalidArgument` if an extent is zero or `data.len()`
    /// does not equal the number of elements of the shape.
    pub fn from_shape_copy<Sh>(shape: Sh, data: &[A]) -> Result<Self, NArrayError>
    where
        Sh: IntoDims,
        A: Clone,
    {
        const CONTEXT: &str = "from_shape_copy(sizes, data)";
        let sizes = shape.into_dims();
        let size = dimension::size_of_shape_checked(&sizes, CONTEXT)?;
        if data.len() != size {
            return Err(error::invalid_argument(CONTEXT));
        }
        let (buffer, ptr) = Buffer::acquire(Acquire::copying(data));
        Ok(Self::from_buffer(buffer, ptr, sizes))
    }

    /// Create an array over external memory, in row-major order, without
    /// taking ownership. The elements are never dropped and the memory is
    /// never freed by this crate.
    ///
    /// Errors with `InvalidArgument` if an extent is zero or `ptr` is null.
    ///
    /// ## Safety
    ///
    /// `ptr` must point to as many initialized, properly aligned elements as
    /// the shape holds. The memory must stay valid, and must not be accessed
    /// other than through arrays derived from this one, for as long as any
    /// of those arrays exists.
    ///
    /// ```
    /// use narray::NArray;
    ///
    /// let mut data = [1, 2, 3, 4, 5, 6];
    /// let a = unsafe { NArray::from_shape_ptr((2, 3), data.as_mut_ptr()).unwrap() };
    /// a.set_at(&[1, 2], 60).unwrap();
    /// drop(a);
    /// assert_eq!(data[5], 60);
    /// ```
    pub unsafe fn from_shape_ptr<Sh>(shape: Sh, ptr: *mut A) -> Result<Self, NArrayError>
    where Sh: IntoDims
    {
        const CONTEXT: &str = "from_shape_ptr(sizes, ptr)";
        let sizes = shape.into_dims();
        let size = dimension::size_of_shape_checked(&sizes, CONTEXT)?;
        let ptr = NonNull::new(ptr).ok_or_else(|| error::invalid_argument(CONTEXT))?;
        let (buffer, ptr) = Buffer::acquire(Acquire::NonOwning(ptr, size));
        Ok(Self::from_buffer(buffer, ptr, sizes))
    }
}
