// Copyright 2024 narray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use alloc::vec::Vec;

use crate::dimension::{self, check_dim};
use crate::error::{self, NArrayError};
use crate::imp_prelude::*;
use crate::iterators::{Iter, SubArrays};
use crate::numeric::Truthy;
use crate::traversal::{check_same_shape, load, store};
use crate::Arc;

/// # Queries and Element Access
impl<A, K: Access> NArray<A, K>
{
    /// Return the total number of elements, zero for an empty array.
    pub fn size(&self) -> usize
    {
        if self.is_empty() {
            0
        } else {
            self.sizes.iter().product()
        }
    }

    /// Return the extent of dimension `dim`.
    ///
    /// Errors with `OutOfRange` if `dim >= self.ndim()`.
    pub fn len_of(&self, dim: usize) -> Result<usize, NArrayError>
    {
        check_dim(dim, self.ndim(), "len_of(dim)")?;
        Ok(self.sizes[dim])
    }

    /// Return the step of dimension `dim`, in elements.
    ///
    /// Errors with `OutOfRange` if `dim >= self.ndim()`.
    pub fn step_of(&self, dim: usize) -> Result<isize, NArrayError>
    {
        check_dim(dim, self.ndim(), "step_of(dim)")?;
        Ok(self.steps[dim])
    }

    /// Return the extent of dimension 0.
    pub fn width(&self) -> Result<usize, NArrayError>
    {
        check_dim(0, self.ndim(), "width()")?;
        Ok(self.sizes[0])
    }

    /// Return the extent of dimension 1.
    pub fn height(&self) -> Result<usize, NArrayError>
    {
        check_dim(1, self.ndim(), "height()")?;
        Ok(self.sizes[1])
    }

    /// Return the extent of dimension 2.
    pub fn depth(&self) -> Result<usize, NArrayError>
    {
        check_dim(2, self.ndim(), "depth()")?;
        Ok(self.sizes[2])
    }

    /// Return the extents, one per dimension.
    pub fn sizes(&self) -> &[usize]
    {
        &self.sizes
    }

    /// Return the steps, in elements, one per dimension.
    ///
    /// Steps may be negative, zero or equal to each other.
    pub fn steps(&self) -> &[isize]
    {
        &self.steps
    }

    /// Return the number of dimensions.
    pub fn ndim(&self) -> usize
    {
        self.sizes.len()
    }

    /// Return `true` if the array references no buffer.
    pub fn is_empty(&self) -> bool
    {
        self.data.is_none()
    }

    /// Return `true` if this is the only array referencing its buffer.
    pub fn is_unique(&self) -> bool
    {
        match self.data {
            Some(ref data) => Arc::strong_count(data) == 1,
            None => false,
        }
    }

    /// Return `true` if other arrays reference the same buffer.
    pub fn is_shared(&self) -> bool
    {
        match self.data {
            Some(ref data) => Arc::strong_count(data) > 1,
            None => false,
        }
    }

    /// Return `true` if the elements occupy one gap-free block of memory, in
    /// any order: for example a flipped or transposed full array.
    ///
    /// ```
    /// use narray::NArray;
    ///
    /// let a = NArray::from_elem((4, 6), 0).unwrap();
    /// assert!(a.is_contiguous());
    /// assert!(a.flip(1).unwrap().is_contiguous());
    /// assert!(!a.range(1, 0, 3).unwrap().is_contiguous());
    /// ```
    pub fn is_contiguous(&self) -> bool
    {
        !self.is_empty() && dimension::is_contiguous(&self.sizes, &self.steps)
    }

    /// Return `true` if visiting the elements in row-major index order never
    /// moves to a lower memory address.
    pub fn is_aligned(&self) -> bool
    {
        !self.is_empty() && dimension::is_aligned(&self.sizes, &self.steps)
    }

    /// Return `true` if the array addresses fewer elements than its buffer
    /// holds.
    pub fn is_subarray(&self) -> bool
    {
        match self.buffer() {
            Some(buffer) => self.size() < buffer.len(),
            None => false,
        }
    }

    /// Return a pointer to the element at location `(0, ..., 0)`.
    ///
    /// The pointer is dangling for an empty array.
    pub fn as_ptr(&self) -> *const A
    {
        self.ptr.as_ptr()
    }

    /// Return a read-only array over the same elements.
    pub fn as_const(&self) -> ConstNArray<A>
    {
        self.clone().with_access()
    }

    /// Release the buffer and reset all extents and steps to zero, keeping
    /// the number of dimensions.
    pub fn clear(&mut self)
    {
        *self = Self::empty_with_ndim(self.ndim());
    }

    /// Return a clone of the element at `loc`.
    ///
    /// Errors with `Empty` for an empty array, and with `OutOfRange` if
    /// `loc` does not have one coordinate per dimension or any coordinate is
    /// out of bounds.
    ///
    /// ```
    /// use narray::NArray;
    ///
    /// let a = NArray::from_shape_vec((2, 2), vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(a.at(&[1, 0]), Ok(3));
    /// assert!(a.at(&[2, 0]).is_err());
    /// ```
    pub fn at(&self, loc: &[usize]) -> Result<A, NArrayError>
    where A: Clone
    {
        const CONTEXT: &str = "at(loc)";
        if self.is_empty() {
            return Err(error::empty(CONTEXT));
        }
        let offset = dimension::offset_checked(&self.sizes, &self.steps, loc)
            .ok_or_else(|| error::out_of_range(CONTEXT))?;
        unsafe { Ok(load(self.ptr.as_ptr().offset(offset))) }
    }

    /// Return a clone of the element at `loc` without checks.
    ///
    /// ## Safety
    ///
    /// The array must be non-empty and `loc` must have one in-bounds
    /// coordinate per dimension.
    pub unsafe fn at_unchecked(&self, loc: &[usize]) -> A
    where A: Clone
    {
        debug_assert!(!self.is_empty());
        debug_assert!(dimension::offset_checked(&self.sizes, &self.steps, loc).is_some());
        load(self.ptr.as_ptr().offset(dimension::offset_of(loc, &self.steps)))
    }

    /// Return a clone of the single element of a zero-dimensional array.
    ///
    /// Errors with `Empty` for an empty array and `DomainError` if the array
    /// has dimensions.
    pub fn value(&self) -> Result<A, NArrayError>
    where A: Clone
    {
        const CONTEXT: &str = "value()";
        if self.is_empty() {
            return Err(error::empty(CONTEXT));
        }
        if self.ndim() != 0 {
            return Err(error::domain_error(CONTEXT));
        }
        unsafe { Ok(load(self.ptr.as_ptr())) }
    }

    /// Return an iterator over clones of the elements, in row-major order.
    pub fn iter(&self) -> Iter<'_, A, K>
    where A: Clone
    {
        Iter::new(self)
    }

    /// Return an iterator over the sub-arrays obtained by fixing the first
    /// `depth` coordinates, in row-major order of those coordinates.
    ///
    /// Errors with `OutOfRange` if `depth > self.ndim()`.
    ///
    /// ```
    /// use narray::NArray;
    ///
    /// let a = NArray::from_shape_vec((2, 3), vec![0, 1, 2, 3, 4, 5]).unwrap();
    /// let rows: Vec<Vec<i32>> = a.subarrays(1).unwrap()
    ///     .map(|row| row.iter().collect())
    ///     .collect();
    /// assert_eq!(rows, vec![vec![0, 1, 2], vec![3, 4, 5]]);
    /// ```
    pub fn subarrays(&self, depth: usize) -> Result<SubArrays<A, K>, NArrayError>
    {
        if depth > self.ndim() {
            return Err(error::out_of_range("subarrays(depth)"));
        }
        Ok(SubArrays::new(self.clone(), depth))
    }

    /// Call `f` with a clone of every element, in row-major order.
    pub fn for_each<F>(&self, mut f: F)
    where
        A: Clone,
        F: FnMut(A),
    {
        self.visit_ptrs(|p| {
            f(unsafe { load(p) });
            true
        });
    }

    /// Return `true` if `pred` holds for every element (`true` if empty).
    ///
    /// Stops at the first element for which `pred` is false.
    pub fn all_of<F>(&self, mut pred: F) -> bool
    where
        A: Clone,
        F: FnMut(A) -> bool,
    {
        self.visit_ptrs(|p| pred(unsafe { load(p) }))
    }

    /// Return `true` if `pred` holds for any element (`false` if empty).
    ///
    /// Stops at the first element for which `pred` is true.
    pub fn any_of<F>(&self, mut pred: F) -> bool
    where
        A: Clone,
        F: FnMut(A) -> bool,
    {
        !self.visit_ptrs(|p| !pred(unsafe { load(p) }))
    }

    /// Return an independent, freshly allocated row-major copy of the
    /// array. The copy is unique, contiguous and aligned.
    ///
    /// ```
    /// use narray::NArray;
    ///
    /// let a = NArray::from_shape_vec(3, vec![1, 2, 3]).unwrap();
    /// let b = a.flip(0).unwrap().to_owned();
    /// b.set_at(&[0], 30).unwrap();
    /// assert_eq!(b.iter().collect::<Vec<_>>(), vec![30, 2, 1]);
    /// assert_eq!(a.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn to_owned(&self) -> NArray<A>
    where A: Clone
    {
        self.convert_with(|x| x)
    }

    /// Return a new array with every element converted with `U::from`.
    pub fn convert_to<U>(&self) -> NArray<U>
    where
        A: Clone,
        U: From<A>,
    {
        self.convert_with(U::from)
    }

    /// Return a new array of the same shape holding `f` of every element.
    ///
    /// `f` is called once per element, in row-major order.
    ///
    /// ```
    /// use narray::NArray;
    ///
    /// let a = NArray::from_shape_vec(3, vec![1.5, -2.0, 7.9]).unwrap();
    /// let b = a.convert_with(|x| x as i32);
    /// assert_eq!(b.iter().collect::<Vec<_>>(), vec![1, -2, 7]);
    /// ```
    pub fn convert_with<U, F>(&self, mut f: F) -> NArray<U>
    where
        A: Clone,
        F: FnMut(A) -> U,
    {
        if self.is_empty() {
            return NArray::empty_with_ndim(self.ndim());
        }
        let mut v = Vec::with_capacity(self.size());
        self.for_each(|x| v.push(f(x)));
        NArray::from_vec_unchecked(self.sizes.clone(), v)
    }

    /// Reduce the trailing dimensions: return an `m`-dimensional array whose
    /// element at each location is `f` of the sub-array found at that
    /// location (see [`.subarrays()`](Self::subarrays)).
    ///
    /// `f` is called once per sub-array, in row-major order.
    ///
    /// Errors with `Empty` for an empty array and `OutOfRange` if
    /// `m > self.ndim()`.
    ///
    /// ```
    /// use narray::{NArray, sum};
    ///
    /// let a = NArray::from_shape_vec((2, 3), vec![0, 1, 2, 3, 4, 5]).unwrap();
    /// let row_sums = a.compress(1, |row| sum(&row)).unwrap();
    /// assert_eq!(row_sums.iter().collect::<Vec<_>>(), vec![3, 12]);
    /// ```
    pub fn compress<U, F>(&self, m: usize, mut f: F) -> Result<NArray<U>, NArrayError>
    where F: FnMut(NArray<A, K>) -> U
    {
        const CONTEXT: &str = "compress(m, f)";
        if self.is_empty() {
            return Err(error::empty(CONTEXT));
        }
        if m > self.ndim() {
            return Err(error::out_of_range(CONTEXT));
        }
        let subs = SubArrays::new(self.clone(), m);
        let mut v = Vec::with_capacity(subs.len());
        for sub in subs {
            v.push(f(sub));
        }
        Ok(NArray::from_vec_unchecked(self.sizes.head(m), v))
    }
}

/// # Bulk Operations
///
/// Writing methods take `&self`: the elements are shared storage, and every
/// array over the same buffer observes the writes.
impl<A, K: Writable> NArray<A, K>
{
    /// Store `value` at `loc`.
    ///
    /// Errors like [`.at()`](Self::at).
    pub fn set_at(&self, loc: &[usize], value: A) -> Result<(), NArrayError>
    {
        const CONTEXT: &str = "set_at(loc, value)";
        if self.is_empty() {
            return Err(error::empty(CONTEXT));
        }
        let offset = dimension::offset_checked(&self.sizes, &self.steps, loc)
            .ok_or_else(|| error::out_of_range(CONTEXT))?;
        unsafe {
            store(self.ptr.as_ptr().offset(offset), value);
        }
        Ok(())
    }

    /// Store `value` at `loc` without checks.
    ///
    /// ## Safety
    ///
    /// The array must be non-empty and `loc` must have one in-bounds
    /// coordinate per dimension.
    pub unsafe fn set_at_unchecked(&self, loc: &[usize], value: A)
    {
        debug_assert!(!self.is_empty());
        debug_assert!(dimension::offset_checked(&self.sizes, &self.steps, loc).is_some());
        store(self.ptr.as_ptr().offset(dimension::offset_of(loc, &self.steps)), value)
    }

    /// Store `value` as the single element of a zero-dimensional array.
    ///
    /// Errors like [`.value()`](Self::value).
    pub fn set_value(&self, value: A) -> Result<(), NArrayError>
    {
        const CONTEXT: &str = "set_value(value)";
        if self.is_empty() {
            return Err(error::empty(CONTEXT));
        }
        if self.ndim() != 0 {
            return Err(error::domain_error(CONTEXT));
        }
        unsafe {
            store(self.ptr.as_ptr(), value);
        }
        Ok(())
    }

    /// Set every element to a clone of `value`.
    pub fn set_to(&self, value: A)
    where A: Clone
    {
        self.visit_ptrs(|p| {
            unsafe { store(p, value.clone()) };
            true
        });
    }

    /// Set every element to a clone of `value`; same as
    /// [`.set_to()`](Self::set_to).
    pub fn fill(&self, value: A)
    where A: Clone
    {
        self.set_to(value)
    }

    /// Copy the elements of `src` into this array, location by location.
    ///
    /// Errors with `InvalidArgument` if the shapes differ.
    pub fn set_to_array<L: Access>(&self, src: &NArray<A, L>) -> Result<(), NArrayError>
    where A: Clone
    {
        check_same_shape(self, src, "set_to_array(src)")?;
        self.zip_ptrs(src, |d, s| {
            unsafe { store(d, load(s)) };
            true
        });
        Ok(())
    }

    /// Set the elements at the locations where `mask` is truthy to a clone of
    /// `value`; the others are left unchanged.
    ///
    /// Errors with `InvalidArgument` if the shapes differ.
    ///
    /// ```
    /// use narray::NArray;
    ///
    /// let a = NArray::from_elem((2, 2), 0).unwrap();
    /// let mask = NArray::from_shape_vec((2, 2), vec![true, false, false, true]).unwrap();
    /// a.set_to_masked(7, &mask).unwrap();
    /// assert_eq!(a.iter().collect::<Vec<_>>(), vec![7, 0, 0, 7]);
    /// ```
    pub fn set_to_masked<M, L>(&self, value: A, mask: &NArray<M, L>) -> Result<(), NArrayError>
    where
        A: Clone,
        M: Truthy,
        L: Access,
    {
        check_same_shape(self, mask, "set_to_masked(value, mask)")?;
        self.zip_ptrs(mask, |d, m| {
            unsafe {
                if (*m).is_truthy() {
                    store(d, value.clone());
                }
            }
            true
        });
        Ok(())
    }

    /// Copy the elements of `src` at the locations where `mask` is truthy.
    ///
    /// Errors with `InvalidArgument` if the shapes differ.
    pub fn set_to_array_masked<M, L1, L2>(&self, src: &NArray<A, L1>, mask: &NArray<M, L2>)
        -> Result<(), NArrayError>
    where
        A: Clone,
        M: Truthy,
        L1: Access,
        L2: Access,
    {
        const CONTEXT: &str = "set_to_array_masked(src, mask)";
        check_same_shape(self, src, CONTEXT)?;
        check_same_shape(self, mask, CONTEXT)?;
        self.zip3_ptrs(src, mask, |d, s, m| {
            unsafe {
                if (*m).is_truthy() {
                    store(d, load(s));
                }
            }
            true
        });
        Ok(())
    }

    /// Replace every element `x` with `f(x)`, in row-major order.
    pub fn map_inplace<F>(&self, mut f: F)
    where
        A: Clone,
        F: FnMut(A) -> A,
    {
        self.visit_ptrs(|p| {
            unsafe {
                let x = f(load(p));
                store(p, x);
            }
            true
        });
    }

    /// Replace every element `x` with `f(x, y)`, where `y` is the element of
    /// `rhs` at the same location.
    ///
    /// Errors with `InvalidArgument` if the shapes differ.
    pub fn zip_mut_with<B, L, F>(&self, rhs: &NArray<B, L>, mut f: F) -> Result<(), NArrayError>
    where
        A: Clone,
        B: Clone,
        L: Access,
        F: FnMut(A, B) -> A,
    {
        check_same_shape(self, rhs, "zip_mut_with(rhs, f)")?;
        self.zip_ptrs(rhs, |d, s| {
            unsafe {
                let x = f(load(d), load(s));
                store(d, x);
            }
            true
        });
        Ok(())
    }
}
