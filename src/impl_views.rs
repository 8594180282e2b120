// Copyright 2024 narray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Views: new arrays over the same buffer.
//!
//! Every method here computes a new base offset, sizes and steps in time
//! independent of the number of elements, and checks its arguments before
//! touching the buffer.

use num_integer::Integer;

use crate::dimension::{self, check_dim, reshape_steps, stride_offset};
use crate::error::{self, NArrayError};
use crate::extension::nonnull::nonnull_offset;
use crate::imp_prelude::*;

/// # Views
///
/// All views share the buffer of `self`: writes through a view are visible
/// through the array and vice versa. Unless noted otherwise, a view of an
/// empty array fails with `Empty`.
impl<A, K: Access> NArray<A, K>
{
    fn check_non_empty(&self, context: &'static str) -> Result<(), NArrayError>
    {
        if self.is_empty() {
            Err(error::empty(context))
        } else {
            Ok(())
        }
    }

    /// Fix dimension `dim` at index `n`, removing that dimension.
    ///
    /// Slicing a one-dimensional array gives a zero-dimensional array over
    /// a single element.
    ///
    /// Errors with `OutOfRange` if `dim` or `n` is out of bounds.
    ///
    /// ```
    /// use narray::NArray;
    ///
    /// let a = NArray::from_shape_vec((2, 3), vec![0, 1, 2, 3, 4, 5]).unwrap();
    /// let row = a.slice(0, 1).unwrap();
    /// assert_eq!(row.iter().collect::<Vec<_>>(), vec![3, 4, 5]);
    /// assert_eq!(row.slice(0, 2).unwrap().value(), Ok(5));
    /// ```
    pub fn slice(&self, dim: usize, n: usize) -> Result<Self, NArrayError>
    {
        const CONTEXT: &str = "slice(dim, n)";
        self.check_non_empty(CONTEXT)?;
        check_dim(dim, self.ndim(), CONTEXT)?;
        if n >= self.sizes[dim] {
            return Err(error::out_of_range(CONTEXT));
        }
        let mut sizes = self.sizes.clone();
        let mut steps = self.steps.clone();
        sizes.remove(dim);
        let step = steps.remove(dim);
        unsafe { Ok(self.derive(stride_offset(n, step), sizes, steps)) }
    }

    /// Fix the first dimension at index `n`; same as `.slice(0, n)`.
    pub fn outer(&self, n: usize) -> Result<Self, NArrayError>
    {
        self.slice(0, n)
    }

    /// Narrow dimension `dim` to the `len` indices starting at `start`.
    ///
    /// Errors with `OutOfRange` if `dim` is out of bounds, `len` is zero or
    /// `start + len` exceeds the extent.
    pub fn range(&self, dim: usize, start: usize, len: usize) -> Result<Self, NArrayError>
    {
        const CONTEXT: &str = "range(dim, start, len)";
        self.check_non_empty(CONTEXT)?;
        check_dim(dim, self.ndim(), CONTEXT)?;
        match start.checked_add(len) {
            Some(end) if len > 0 && end <= self.sizes[dim] => {}
            _ => return Err(error::out_of_range(CONTEXT)),
        }
        let mut sizes = self.sizes.clone();
        sizes[dim] = len;
        let offset = stride_offset(start, self.steps[dim]);
        unsafe { Ok(self.derive(offset, sizes, self.steps.clone())) }
    }

    /// Reverse the order of dimension `dim`.
    ///
    /// Errors with `OutOfRange` if `dim` is out of bounds.
    ///
    /// ```
    /// use narray::NArray;
    ///
    /// let a = NArray::from_shape_vec(4, vec![1, 2, 3, 4]).unwrap();
    /// let b = a.flip(0).unwrap();
    /// assert_eq!(b.steps(), &[-1]);
    /// assert_eq!(b.iter().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
    /// ```
    pub fn flip(&self, dim: usize) -> Result<Self, NArrayError>
    {
        const CONTEXT: &str = "flip(dim)";
        self.check_non_empty(CONTEXT)?;
        check_dim(dim, self.ndim(), CONTEXT)?;
        let mut steps = self.steps.clone();
        let offset = stride_offset(self.sizes[dim] - 1, steps[dim]);
        steps[dim] = -steps[dim];
        unsafe { Ok(self.derive(offset, self.sizes.clone(), steps)) }
    }

    /// Keep every `n`th index of dimension `dim`, starting at `start`.
    ///
    /// The new extent is `ceil((len - start) / n)`.
    ///
    /// Errors with `InvalidArgument` if `n` is zero and `OutOfRange` if
    /// `dim` or `start` is out of bounds.
    ///
    /// ```
    /// use narray::NArray;
    ///
    /// let a = NArray::from_shape_vec(7, (0..7).collect()).unwrap();
    /// let b = a.skip(0, 3, 1).unwrap();
    /// assert_eq!(b.iter().collect::<Vec<_>>(), vec![1, 4]);
    /// ```
    pub fn skip(&self, dim: usize, n: usize, start: usize) -> Result<Self, NArrayError>
    {
        const CONTEXT: &str = "skip(dim, n, start)";
        self.check_non_empty(CONTEXT)?;
        check_dim(dim, self.ndim(), CONTEXT)?;
        if n == 0 {
            return Err(error::invalid_argument(CONTEXT));
        }
        if start >= self.sizes[dim] {
            return Err(error::out_of_range(CONTEXT));
        }
        let mut sizes = self.sizes.clone();
        let mut steps = self.steps.clone();
        let offset = stride_offset(start, steps[dim]);
        // a factor past the remaining extent leaves one element, whose step is unused
        let n = n.min(sizes[dim] - start);
        sizes[dim] = Integer::div_ceil(&(sizes[dim] - start), &n);
        steps[dim] *= n as isize;
        unsafe { Ok(self.derive(offset, sizes, steps)) }
    }

    /// Add a trailing dimension of extent `n` that slides along dimension
    /// `dim`, which shrinks by `n - 1`. Consecutive windows overlap.
    ///
    /// Errors with `OutOfRange` if `dim` is out of bounds or `n` is zero or
    /// larger than the extent of `dim`.
    ///
    /// ```
    /// use narray::NArray;
    ///
    /// let a = NArray::from_shape_vec(4, vec![1, 2, 3, 4]).unwrap();
    /// let w = a.window(0, 2).unwrap();
    /// assert_eq!(w.sizes(), &[3, 2]);
    /// assert_eq!(w.iter().collect::<Vec<_>>(), vec![1, 2, 2, 3, 3, 4]);
    /// ```
    pub fn window(&self, dim: usize, n: usize) -> Result<Self, NArrayError>
    {
        const CONTEXT: &str = "window(dim, n)";
        self.check_non_empty(CONTEXT)?;
        check_dim(dim, self.ndim(), CONTEXT)?;
        if n == 0 || n > self.sizes[dim] {
            return Err(error::out_of_range(CONTEXT));
        }
        let mut sizes = self.sizes.clone();
        let mut steps = self.steps.clone();
        sizes[dim] -= n - 1;
        sizes.push(n);
        steps.push(steps[dim]);
        unsafe { Ok(self.derive(0, sizes, steps)) }
    }

    /// Exchange dimensions `dim1` and `dim2`.
    ///
    /// Errors with `OutOfRange` if either dimension is out of bounds.
    pub fn transpose(&self, dim1: usize, dim2: usize) -> Result<Self, NArrayError>
    {
        const CONTEXT: &str = "transpose(dim1, dim2)";
        self.check_non_empty(CONTEXT)?;
        check_dim(dim1, self.ndim(), CONTEXT)?;
        check_dim(dim2, self.ndim(), CONTEXT)?;
        let mut view = self.clone();
        view.sizes.swap(dim1, dim2);
        view.steps.swap(dim1, dim2);
        Ok(view)
    }

    /// Reverse the order of all dimensions.
    ///
    /// An empty array stays empty.
    pub fn t(&self) -> Self
    {
        let mut view = self.clone();
        view.sizes.reverse();
        view.steps.reverse();
        view
    }

    /// Narrow every dimension `i` to `size[i]` indices starting at `loc[i]`.
    ///
    /// Errors with `InvalidArgument` unless `loc` and `size` have one entry
    /// per dimension, and with `OutOfRange` if any dimension's range does
    /// not fit, like [`.range()`](Self::range).
    pub fn subarray(&self, loc: &[usize], size: &[usize]) -> Result<Self, NArrayError>
    {
        const CONTEXT: &str = "subarray(loc, size)";
        self.check_non_empty(CONTEXT)?;
        if loc.len() != self.ndim() || size.len() != self.ndim() {
            return Err(error::invalid_argument(CONTEXT));
        }
        let mut offset = 0;
        for (i, (&start, &len)) in loc.iter().zip(size).enumerate() {
            match start.checked_add(len) {
                Some(end) if len > 0 && end <= self.sizes[i] => {}
                _ => return Err(error::out_of_range(CONTEXT)),
            }
            offset += stride_offset(start, self.steps[i]);
        }
        unsafe { Ok(self.derive(offset, Sizes::from(size), self.steps.clone())) }
    }

    /// Fix the first `pos.len()` coordinates at `pos`, returning the array of
    /// the remaining dimensions. A full location gives a zero-dimensional
    /// array over one element.
    ///
    /// Errors with `OutOfRange` if `pos` is longer than the number of
    /// dimensions or any coordinate is out of bounds.
    pub fn subarray_at(&self, pos: &[usize]) -> Result<Self, NArrayError>
    {
        const CONTEXT: &str = "subarray_at(pos)";
        self.check_non_empty(CONTEXT)?;
        let m = pos.len();
        if m > self.ndim() || pos.iter().zip(&self.sizes).any(|(&p, &n)| p >= n) {
            return Err(error::out_of_range(CONTEXT));
        }
        let offset = dimension::offset_of(pos, &self.steps[..m]);
        unsafe { Ok(self.derive(offset, self.sizes.tail(m), self.steps.tail(m))) }
    }

    /// Like [`.subarray_at()`](Self::subarray_at), without checks.
    ///
    /// ## Safety
    ///
    /// The array must be non-empty, `pos` must not be longer than the
    /// number of dimensions, and every coordinate must be in bounds.
    pub unsafe fn subarray_at_unchecked(&self, pos: &[usize]) -> Self
    {
        let m = pos.len();
        debug_assert!(!self.is_empty() && m <= self.ndim());
        debug_assert!(pos.iter().zip(&self.sizes).all(|(&p, &n)| p < n));
        let offset = dimension::offset_of(pos, &self.steps[..m]);
        self.derive(offset, self.sizes.tail(m), self.steps.tail(m))
    }

    /// Describe the same elements, in the same row-major order, with the
    /// extents `shape`, without copying.
    ///
    /// Any contiguous aligned array reshapes to every shape of the same
    /// size. Other layouts reshape as long as each new extent can be carved
    /// out of a run of evenly spaced elements.
    ///
    /// Errors with `DomainError` for an empty array or when the new shape is
    /// incompatible with the layout (including a different total size), and
    /// with `InvalidArgument` if a new extent is zero.
    ///
    /// ```
    /// use narray::NArray;
    ///
    /// let a = NArray::from_shape_vec((2, 3), vec![0, 1, 2, 3, 4, 5]).unwrap();
    /// let b = a.reshape((3, 2)).unwrap();
    /// assert_eq!(b.at(&[2, 0]), Ok(4));
    ///
    /// // every other column is not one run of memory
    /// let c = a.transpose(0, 1).unwrap();
    /// assert!(c.reshape(6).is_err());
    /// ```
    pub fn reshape<Sh>(&self, shape: Sh) -> Result<Self, NArrayError>
    where Sh: IntoDims
    {
        if self.is_empty() {
            return Err(error::domain_error("reshape(sizes)"));
        }
        let sizes = shape.into_dims();
        let steps = reshape_steps(&self.sizes, &self.steps, &sizes)?;
        unsafe { Ok(self.derive(0, sizes, steps)) }
    }

    /// Add a trailing broadcast dimension of extent `n` and step zero: all
    /// `n` indices address the same element.
    ///
    /// Errors with `DomainError` for an empty array and `InvalidArgument` if
    /// `n` is zero.
    ///
    /// ```
    /// use narray::NArray;
    ///
    /// let a = NArray::from_shape_vec(2, vec![1, 2]).unwrap();
    /// let r = a.repeat(3).unwrap();
    /// r.set_at(&[0, 0], 9).unwrap();
    /// assert_eq!(r.at(&[0, 2]), Ok(9));
    /// ```
    pub fn repeat(&self, n: usize) -> Result<Self, NArrayError>
    {
        const CONTEXT: &str = "repeat(n)";
        if self.is_empty() {
            return Err(error::domain_error(CONTEXT));
        }
        if n == 0 {
            return Err(error::invalid_argument(CONTEXT));
        }
        let mut view = self.clone();
        view.sizes.push(n);
        view.steps.push(0);
        Ok(view)
    }

    /// Return the same elements with non-negative steps sorted in
    /// descending order, so that row-major order never moves to a lower
    /// address. Dimensions keep their extents but may be reordered.
    ///
    /// An empty array stays empty.
    pub fn as_aligned(&self) -> Self
    {
        let mut view = self.clone();
        if !view.is_empty() {
            let offset = dimension::align(&mut view.sizes, &mut view.steps);
            view.ptr = unsafe { nonnull_offset(view.ptr, offset) };
        }
        view
    }

    /// Return the same elements, in the same order, with size-1 dimensions
    /// dropped and adjacent dimensions that form one run merged.
    ///
    /// An empty array stays empty.
    pub fn as_condensed(&self) -> Self
    {
        let mut view = self.clone();
        if !view.is_empty() {
            let (sizes, steps) = dimension::condense(&self.sizes, &self.steps);
            view.sizes = sizes;
            view.steps = steps;
        }
        view
    }
}

macro_rules! dim_views {
    ($($dim:expr => $slice:ident, $range:ident, $flip:ident, $skip:ident, $window:ident;)*) => {
        /// # Named Dimensions
        ///
        /// `x`, `y`, `z` and `w` name dimensions 0 through 3.
        impl<A, K: Access> NArray<A, K>
        {
            $(
            #[doc = concat!("Same as `.slice(", stringify!($dim), ", n)`.")]
            pub fn $slice(&self, n: usize) -> Result<Self, NArrayError>
            {
                self.slice($dim, n)
            }

            #[doc = concat!("Same as `.range(", stringify!($dim), ", start, len)`.")]
            pub fn $range(&self, start: usize, len: usize) -> Result<Self, NArrayError>
            {
                self.range($dim, start, len)
            }

            #[doc = concat!("Same as `.flip(", stringify!($dim), ")`.")]
            pub fn $flip(&self) -> Result<Self, NArrayError>
            {
                self.flip($dim)
            }

            #[doc = concat!("Same as `.skip(", stringify!($dim), ", n, start)`.")]
            pub fn $skip(&self, n: usize, start: usize) -> Result<Self, NArrayError>
            {
                self.skip($dim, n, start)
            }

            #[doc = concat!("Same as `.window(", stringify!($dim), ", n)`.")]
            pub fn $window(&self, n: usize) -> Result<Self, NArrayError>
            {
                self.window($dim, n)
            }
            )*
        }
    };
}

dim_views! {
    0 => slice_x, range_x, flip_x, skip_x, window_x;
    1 => slice_y, range_y, flip_y, skip_y, window_y;
    2 => slice_z, range_z, flip_z, skip_z, window_z;
    3 => slice_w, range_w, flip_w, skip_w, window_w;
}
